//! Logging infrastructure for fob-scripts.
//!
//! Structured logging via the `tracing` ecosystem. The tool prints nothing of
//! its own at the default level: the children's output on the inherited
//! streams is the interesting part. `--verbose` exposes the resolved
//! binaries, the command table and every filesystem step.
//!
//! # Example
//!
//! ```rust,no_run
//! use fob_scripts::logger::init_logger;
//! use tracing::debug;
//!
//! init_logger(true, false, false);
//! debug!("Dispatching {} commands", 4);
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERBOSE_FILTER: &str = "fob_scripts=debug";
const QUIET_FILTER: &str = "fob_scripts=error";
const DEFAULT_FILTER: &str = "fob_scripts=warn";

/// Initialize the tracing subscriber with the specified options.
///
/// Should be called once at the start of the program, before any logging.
///
/// # Verbosity Levels
///
/// The logging level is determined in this order:
/// 1. `--verbose` flag: DEBUG for fob-scripts
/// 2. `--quiet` flag: ERROR only
/// 3. `RUST_LOG` environment variable: custom filter
/// 4. Default: WARN for fob-scripts
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    init_logger_with_filter(filter, no_color);
}

/// Initialize logger with custom environment filter.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// Check if colored output should be enabled.
///
/// # Environment Variables
///
/// - `NO_COLOR`: If set, disables colors
/// - `FORCE_COLOR`: If set, forces colors even in non-TTY
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::Term::stderr().features().colors_supported()
}
