//! Minimal package.json reader.
//!
//! Only the fields fob-scripts needs are parsed; everything else in the file
//! is ignored.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result, ResultExt};

/// Parsed package.json structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackageJson {
    /// npm scripts by name
    #[serde(default)]
    pub scripts: HashMap<String, String>,
    /// File path this was loaded from
    #[serde(skip)]
    pub path: PathBuf,
}

impl PackageJson {
    /// Read and parse a package.json file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).with_path(path)?;
        let mut pkg: Self =
            serde_json::from_str(&content).map_err(|source| ConfigError::InvalidPackageJson {
                path: path.to_path_buf(),
                source,
            })?;
        pkg.path = path.to_path_buf();
        Ok(pkg)
    }

    /// Read `<dir>/package.json` if it exists.
    pub fn find_in(dir: &Path) -> Result<Option<Self>> {
        let path = dir.join("package.json");
        if !path.is_file() {
            return Ok(None);
        }
        Self::from_path(&path).map(Some)
    }

    /// Whether an npm script called `name` is defined.
    pub fn has_script(&self, name: &str) -> bool {
        self.scripts.contains_key(name)
    }
}
