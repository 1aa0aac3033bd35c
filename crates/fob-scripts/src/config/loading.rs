use crate::config::{Settings, ENV_PREFIX, SETTINGS_FILE};
use crate::error::{ConfigError, Result};
use figment::{
    providers::{Env, Format as _, Json, Serialized},
    Figment,
};
use std::path::Path;

impl Settings {
    /// Load settings for the project rooted at `root`.
    /// Priority: environment variables > fob-scripts.json > defaults
    pub fn load(root: &Path) -> Result<Self> {
        Self::figment(root).extract().map_err(|e| {
            ConfigError::InvalidValue {
                field: "settings".to_string(),
                value: e.to_string(),
                hint: format!(
                    "Check {} and {}* environment variables",
                    SETTINGS_FILE, ENV_PREFIX
                ),
            }
            .into()
        })
    }

    /// The layered providers behind [`Settings::load`].
    pub fn figment(root: &Path) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        let settings_file = root.join(SETTINGS_FILE);
        if settings_file.is_file() {
            tracing::debug!("Loading settings from {}", settings_file.display());
            figment = figment.merge(Json::file(settings_file));
        }

        // FOB_SCRIPTS_OUT_DIR -> out_dir, FOB_SCRIPTS_RUNNER -> runner, ...
        figment.merge(Env::prefixed(ENV_PREFIX))
    }
}
