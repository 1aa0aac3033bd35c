//! Command-line interface definition for fob-scripts.
//!
//! The CLI is defined with clap v4's derive macros. Raw arguments are first
//! passed through [`retain_known_args`], which drops flags this tool does not
//! understand so that newer package scripts keep working with older releases.
//!
//! # Command Structure
//!
//! - `fob-scripts build` - Multi-format rollup build, optionally dual-flavor
//! - `fob-scripts validate` - Run build, lint and flow scripts concurrently

mod commands;
mod tests;
mod validation;

use clap::Parser;
use std::path::PathBuf;

pub use commands::{BuildArgs, Command, ValidateArgs};
pub use validation::{retain_known_args, split_list};

/// Fob scripts - build and validation helpers for JavaScript packages
#[derive(Parser, Debug)]
#[command(
    name = "fob-scripts",
    version,
    about = "Build and validation helpers for JavaScript packages",
    long_about = "fob-scripts drives rollup and the project's own npm scripts.\n\
                  Every build format or validation task runs as its own process under\n\
                  `concurrently`, and the combined exit status becomes ours."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    ///
    /// Shows the resolved binaries, the generated command table and every
    /// filesystem operation performed before and after the build.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Project root (defaults to the nearest directory with a package.json)
    #[arg(long, global = true, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
