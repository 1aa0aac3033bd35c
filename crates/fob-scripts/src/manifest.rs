//! The package manifest written next to a preact build.
//!
//! After a dual-flavor build the preact directory holds its own CommonJS and
//! ESM bundles. A small `package.json` inside it lets consumers import
//! `my-lib/preact` and land on the right files.

use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{ManifestError, Result, ResultExt};

/// Suffix of the CommonJS bundle.
pub const CJS_SUFFIX: &str = ".cjs.js";

/// Suffix of the ESM bundle.
pub const ESM_SUFFIX: &str = ".esm.js";

/// Entry points of the preact flavor, relative to its directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreactManifest {
    pub main: String,
    #[serde(rename = "jsnext:main")]
    pub jsnext_main: String,
    pub module: String,
}

impl PreactManifest {
    /// Locate the CommonJS and ESM bundles under `dir`.
    ///
    /// # Errors
    ///
    /// Fails unless exactly one file matches each suffix.
    pub fn discover(dir: &Path) -> Result<Self> {
        let cjs = find_artifact(dir, CJS_SUFFIX)?;
        let esm = find_artifact(dir, ESM_SUFFIX)?;

        Ok(Self {
            main: cjs,
            jsnext_main: esm.clone(),
            module: esm,
        })
    }

    /// Write `<dir>/package.json`, returning its path.
    pub fn write(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join("package.json");
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        std::fs::write(&path, json).with_path(&path)?;
        Ok(path)
    }
}

/// Discover the preact bundles under `dir` and write its package.json.
pub fn write_preact_manifest(dir: &Path) -> Result<PathBuf> {
    let manifest = PreactManifest::discover(dir)?;
    let path = manifest.write(dir)?;
    tracing::debug!(?manifest, "Wrote {}", path.display());
    Ok(path)
}

/// Find the single file under `dir` whose name ends with `suffix`.
///
/// Returns its path relative to `dir`, `/`-separated.
pub fn find_artifact(dir: &Path, suffix: &str) -> Result<String, ManifestError> {
    let mut matches = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let is_match = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.ends_with(suffix));
        if is_match {
            matches.push(relative_entry(dir, entry.path()));
        }
    }

    match matches.len() {
        0 => Err(ManifestError::ArtifactNotFound {
            dir: dir.to_path_buf(),
            suffix: suffix.to_string(),
        }),
        1 => Ok(matches.remove(0)),
        _ => Err(ManifestError::AmbiguousArtifact {
            dir: dir.to_path_buf(),
            suffix: suffix.to_string(),
            matches,
        }),
    }
}

/// `file` relative to `dir` with `/` separators, as package.json expects.
fn relative_entry(dir: &Path, file: &Path) -> String {
    let relative = file.strip_prefix(dir).unwrap_or(file);
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
