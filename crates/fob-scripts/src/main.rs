//! Fob scripts CLI entry point.
//!
//! Parses arguments, initialises logging, resolves the project context and
//! dispatches to the `build` or `validate` pipeline. The exit code of the
//! parallel runner becomes the exit code of this process.

use clap::Parser;
use fob_scripts::dispatch::ConcurrentlyDispatcher;
use fob_scripts::{cli, commands, error, logger, ScriptContext};
use miette::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Unknown flags are dropped before clap sees them
    let args = cli::Cli::parse_from(cli::retain_known_args(std::env::args()));

    logger::init_logger(
        args.verbose,
        args.quiet,
        args.no_color || !logger::should_use_colors(),
    );

    let code = run(args).await.map_err(error::cli_error_to_miette)?;
    std::process::exit(code);
}

async fn run(args: cli::Cli) -> fob_scripts::Result<i32> {
    let ctx = ScriptContext::discover(args.cwd.as_deref())?;
    let dispatcher = ConcurrentlyDispatcher::new(&ctx);

    match args.command {
        cli::Command::Build(build_args) => {
            commands::build_execute(&build_args, &ctx, &dispatcher).await
        }
        cli::Command::Validate(validate_args) => {
            commands::validate_execute(&validate_args, &ctx, &dispatcher).await
        }
    }
}
