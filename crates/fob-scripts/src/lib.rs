//! Fob scripts - build and validation helpers for JavaScript packages.
//!
//! This crate provides the `fob-scripts` command-line tool, which wraps two
//! pieces of package-maintenance glue:
//!
//! - `fob-scripts build` runs rollup once per output format (ESM, CommonJS,
//!   UMD, minified UMD), optionally a second time against preact, with every
//!   invocation running side by side under `concurrently`.
//! - `fob-scripts validate` runs the project's `build`, `lint` and `flow`
//!   scripts (or an explicit list) side by side and reports the combined
//!   exit status.
//!
//! # Architecture
//!
//! Both commands are linear pipelines over a few small types:
//!
//! - [`cli`] - Argument definitions and forward-compatible flag filtering
//! - [`config`] - Layered tool settings (defaults, `fob-scripts.json`, env)
//! - [`context`] - The immutable [`ScriptContext`] shared by every step
//! - [`format`] - Output format descriptors (`umd.min` and friends)
//! - [`table`] - Structured commands and the ordered [`CommandTable`]
//! - [`dispatch`] - Handing a table to the external parallel runner
//! - [`manifest`] - The `package.json` written next to preact builds
//! - [`commands`] - The `build` and `validate` pipelines
//!
//! # Example
//!
//! ```rust
//! use fob_scripts::format::parse_formats;
//! use fob_scripts::table::{CommandSpec, CommandTable};
//!
//! let mut table = CommandTable::new();
//! for format in parse_formats(["esm", "umd.min"]) {
//!     let spec = CommandSpec::new("rollup")
//!         .env("BUILD_FORMAT", format.name())
//!         .env("NODE_ENV", format.node_env());
//!     table.insert(format.token(), spec).unwrap();
//! }
//! assert_eq!(table.keys().collect::<Vec<_>>(), ["esm", "umd.min"]);
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod dispatch;
pub mod error;
pub mod format;
pub mod logger;
pub mod manifest;
pub mod package_json;
pub mod table;

pub use context::ScriptContext;
pub use error::{CliError, ConfigError, Result, ResultExt};
pub use table::{CommandSpec, CommandTable};
