//! Filesystem helpers for preparing build output.

use crate::error::{CliError, Result, ResultExt};
use std::fs;
use std::path::{Component, Path};

/// Refuse output directories that would take the project with them.
///
/// The directory must be strictly inside `root` and may not climb out of it
/// through `..` components.
pub fn validate_output_dir(dir: &Path, root: &Path) -> Result<()> {
    let escapes = dir
        .strip_prefix(root)
        .map(|rel| {
            rel.as_os_str().is_empty() || rel.components().any(|c| c == Component::ParentDir)
        })
        .unwrap_or(true);

    if escapes {
        return Err(CliError::InvalidArgument(format!(
            "Refusing to clean {}: output directories must live inside the project root {}",
            dir.display(),
            root.display()
        )));
    }
    Ok(())
}

/// Recursively remove `dir`. A missing directory is not an error.
pub fn remove_dir_if_exists(dir: &Path, root: &Path) -> Result<()> {
    validate_output_dir(dir, root)?;

    match fs::remove_dir_all(dir) {
        Ok(()) => {
            tracing::debug!("Removed {}", dir.display());
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e)
            .with_path(dir)
            .with_hint("Close programs using the output directory, or pass --no-clean"),
    }
}

/// Ensure an output directory exists, creating it if necessary.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir).with_path(dir)?;
        tracing::debug!("Created {}", dir.display());
    } else if !dir.is_dir() {
        return Err(CliError::InvalidArgument(format!(
            "Output path exists but is not a directory: {}",
            dir.display()
        )));
    }

    Ok(())
}
