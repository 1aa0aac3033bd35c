//! Command implementations for fob-scripts.
//!
//! - [`build`] - Multi-format rollup builds
//! - [`validate`] - Concurrent validation scripts
//!
//! Each command provides an `execute` function taking the parsed arguments,
//! the [`ScriptContext`](crate::ScriptContext) and a
//! [`Dispatcher`](crate::dispatch::Dispatcher), and returning the exit code
//! of the run.

pub mod build;
pub(crate) mod utils;
pub mod validate;

pub use build::execute as build_execute;
pub use validate::execute as validate_execute;
