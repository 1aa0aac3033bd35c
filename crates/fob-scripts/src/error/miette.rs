//! Miette diagnostic conversion for CLI errors.

use crate::error::CliError;
use ::miette::Report;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => ::miette::miette!("Configuration error: {}", e),
        CliError::Manifest(e) => ::miette::miette!("Failed to write preact/package.json: {}", e),
        CliError::Dispatch(e) => ::miette::miette!("{}", e),
        _ => ::miette::miette!("{}", err),
    }
}
