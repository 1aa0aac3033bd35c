//! Tool settings with multi-source loading.
//!
//! Settings describe the environment fob-scripts runs in: which executables
//! to call and where build output lives. Command-line flags describe a single
//! run and are kept separate in [`crate::cli`].
//!
//! Priority: environment (`FOB_SCRIPTS_*`) > `fob-scripts.json` > defaults

mod defaults;
mod loading;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use defaults::*;

/// Name of the optional settings file in the project root.
pub const SETTINGS_FILE: &str = "fob-scripts.json";

/// Prefix for settings overrides from the environment.
pub const ENV_PREFIX: &str = "FOB_SCRIPTS_";

/// fob-scripts settings - loaded from defaults, fob-scripts.json and env.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Bundler executable (resolved from node_modules/.bin first)
    #[serde(default = "default_bundler")]
    pub bundler: String,

    /// Parallel runner executable
    #[serde(default = "default_runner")]
    pub runner: String,

    /// Cross-platform environment setter placed in front of commands
    #[serde(default = "default_env_setter")]
    pub env_setter: String,

    /// Package manager used to run validation scripts
    #[serde(default = "default_package_manager")]
    pub package_manager: String,

    /// Rollup config used when the project has none
    ///
    /// Defaults to the `config/rollup.config.js` shipped with fob-scripts.
    /// A build fails up front if this file does not exist.
    #[serde(default = "default_builtin_config")]
    pub builtin_config: PathBuf,

    /// Primary build output directory, removed before each build
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// Output directory of the preact flavor
    #[serde(default = "default_preact_dir")]
    pub preact_dir: PathBuf,

    /// Stop sibling commands as soon as one fails
    #[serde(default = "default_kill_others_on_fail")]
    pub kill_others_on_fail: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bundler: default_bundler(),
            runner: default_runner(),
            env_setter: default_env_setter(),
            package_manager: default_package_manager(),
            builtin_config: default_builtin_config(),
            out_dir: default_out_dir(),
            preact_dir: default_preact_dir(),
            kill_others_on_fail: default_kill_others_on_fail(),
        }
    }
}
