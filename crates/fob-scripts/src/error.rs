//! Error handling for fob-scripts.
//!
//! This module provides a hierarchical error type system using `thiserror`.
//! Every variant carries enough context to tell the user what to fix.
//!
//! # Architecture
//!
//! - **Top-level errors** (`CliError`) represent broad categories of failures
//! - **Domain-specific errors** (`ConfigError`, `TableError`, `ManifestError`,
//!   `DispatchError`) carry detailed context
//! - **Error conversion** is automatic via `#[from]` attributes
//! - **Context helpers** allow attaching paths and hints to errors
//!
//! Failures of the child processes themselves are *not* errors here: they
//! surface as the runner's non-zero exit code.
//!
//! # Example
//!
//! ```rust,no_run
//! use fob_scripts::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn read_manifest(path: &Path) -> Result<String> {
//!     std::fs::read_to_string(path)
//!         .with_path(path)
//!         .with_hint("Run the build before generating the manifest")
//! }
//! ```

mod miette;

use std::path::PathBuf;
use thiserror::Error;

pub use self::miette::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Settings or project metadata could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A command table could not be assembled
    #[error("Command table error: {0}")]
    Table(#[from] TableError),

    /// The preact package manifest could not be generated
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// The parallel runner could not be started
    #[error("Dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An error annotated with a hint for the user
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Layered settings failed to extract
    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The invalid value or extraction message
        value: String,
        /// Helpful hint for correct values
        hint: String,
    },

    /// package.json exists but is not valid JSON
    #[error("Invalid package.json at {}: {source}\n\nHint: Fix the JSON syntax so scripts can be detected", .path.display())]
    InvalidPackageJson {
        /// Location of the broken file
        path: PathBuf,
        /// Underlying parse error
        source: serde_json::Error,
    },
}

/// Errors raised while assembling command tables.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    /// Two entries would share the same label
    #[error("Duplicate command '{0}'\n\nHint: Each format or task can only be requested once")]
    DuplicateKey(String),
}

/// Errors raised while writing the preact package manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// No build output matched the expected suffix
    #[error("No '*{suffix}' file found under {}\n\nHint: Check that the rollup config emits a {suffix} bundle for preact", .dir.display())]
    ArtifactNotFound {
        /// Directory that was searched
        dir: PathBuf,
        /// File suffix that was looked for
        suffix: String,
    },

    /// More than one build output matched the expected suffix
    #[error("Multiple '*{suffix}' files found under {}: {}\n\nHint: Remove stale outputs or build with a single entry point", .dir.display(), .matches.join(", "))]
    AmbiguousArtifact {
        /// Directory that was searched
        dir: PathBuf,
        /// File suffix that was looked for
        suffix: String,
        /// Every match, relative to `dir`
        matches: Vec<String>,
    },

    /// Directory traversal failed
    #[error("Failed to scan build output: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Errors raised when handing a table to the parallel runner.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The runner executable could not be spawned
    #[error("Failed to start {}: {source}\n\nHint: Install it with `npm install --save-dev {}` or set FOB_SCRIPTS_RUNNER", .program.display(), .package)]
    Spawn {
        /// Executable that was spawned
        program: PathBuf,
        /// npm package providing the executable
        package: String,
        /// Underlying spawn error
        source: std::io::Error,
    },
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Add a file path to the error context.
    ///
    /// `NotFound` I/O errors become [`CliError::FileNotFound`] for `path`.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;

    /// Add a helpful hint to the error context.
    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            match err {
                CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                    CliError::FileNotFound(path.as_ref().to_path_buf())
                }
                CliError::Io(io_err) => CliError::Io(std::io::Error::new(
                    io_err.kind(),
                    format!("{}: {}", path.as_ref().display(), io_err),
                )),
                other => other,
            }
        })
    }

    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}\n\nHint: {}", err, hint))
        })
    }
}
