use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::format::DEFAULT_FORMATS;

/// Available fob-scripts subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the package in every requested output format
    ///
    /// Runs one rollup process per format. With --p-react the formats are
    /// built a second time against preact into a separate directory.
    Build(BuildArgs),

    /// Run the project's validation scripts concurrently
    ///
    /// Without arguments runs whichever of `build`, `lint` and `flow` the
    /// project's package.json defines. `lint` is skipped when
    /// SCRIPTS_PRECOMMIT is set.
    Validate(ValidateArgs),
}

/// Arguments for the build command
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct BuildArgs {
    /// Rollup config file to use instead of the project's or the built-in one
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Passed through to rollup's --environment flag
    ///
    /// Example: --environment INCLUDE_DEPS,BUILD:production
    #[arg(long, value_name = "VARS")]
    pub environment: Option<String>,

    /// Rebuild when source files change
    #[arg(long)]
    pub watch: bool,

    /// Comma-separated output formats
    ///
    /// A format may carry a qualifier after a dot (umd.min) which turns on
    /// minification and a production NODE_ENV for that build.
    #[arg(
        long,
        value_name = "FORMATS",
        value_delimiter = ',',
        default_values = ["esm", "cjs", "umd", "umd.min"]
    )]
    pub bundle: Vec<String>,

    /// Also build every format against preact into the preact directory
    #[arg(long = "p-react")]
    pub p_react: bool,

    /// Keep previous build output instead of removing it first
    #[arg(long)]
    pub no_clean: bool,

    /// Don't write preact/package.json after a --p-react build
    #[arg(long)]
    pub no_package_json: bool,
}

/// Arguments for the validate command
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidateArgs {
    /// Comma-separated scripts to run instead of the defaults
    ///
    /// Every listed script runs, whether or not package.json defines it.
    ///
    /// Example: fob-scripts validate build,test
    #[arg(value_name = "SCRIPTS")]
    pub scripts: Option<String>,
}

impl Default for BuildArgs {
    fn default() -> Self {
        Self {
            config: None,
            environment: None,
            watch: false,
            bundle: DEFAULT_FORMATS.iter().map(|f| f.to_string()).collect(),
            p_react: false,
            no_clean: false,
            no_package_json: false,
        }
    }
}
