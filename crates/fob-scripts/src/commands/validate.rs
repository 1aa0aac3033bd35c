//! Validate command implementation.
//!
//! Runs the project's own npm scripts (build, lint, flow by default) side by
//! side through the dispatcher.

use crate::cli::{split_list, ValidateArgs};
use crate::context::ScriptContext;
use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::package_json::PackageJson;
use crate::table::{CommandSpec, CommandTable};

/// Scripts validated when none are named on the command line.
pub const DEFAULT_SCRIPTS: &[&str] = &["build", "lint", "flow"];

/// Default scripts skipped in pre-commit runs (lint-staged covers them).
pub const PRECOMMIT_SKIPPED: &[&str] = &["lint"];

/// Execute the validate command.
///
/// Returns the dispatcher's exit code. With nothing to run the exit code is 0.
pub async fn execute<D: Dispatcher>(
    args: &ValidateArgs,
    ctx: &ScriptContext,
    dispatcher: &D,
) -> Result<i32> {
    // Explicit lists never consult package.json
    let package_json = match args.scripts {
        Some(_) => None,
        None => ctx.package_json()?,
    };

    let scripts = select_scripts(
        args.scripts.as_deref(),
        package_json.as_ref(),
        ctx.precommit(),
    );
    if scripts.is_empty() {
        tracing::info!("No validation scripts to run");
    } else {
        tracing::info!(?scripts, precommit = ctx.precommit(), "Validating");
    }

    let table = validate_commands(&scripts, ctx)?;
    let outcome = dispatcher.dispatch(&table).await?;
    Ok(outcome.code)
}

/// Decide which scripts to run.
///
/// An explicit comma-separated list is taken as is. Otherwise each of
/// [`DEFAULT_SCRIPTS`] is kept only when package.json defines it, minus
/// [`PRECOMMIT_SKIPPED`] during pre-commit runs. Without a package.json the
/// default set is empty.
pub fn select_scripts(
    explicit: Option<&str>,
    package_json: Option<&PackageJson>,
    precommit: bool,
) -> Vec<String> {
    if let Some(list) = explicit {
        return split_list(list);
    }

    let Some(pkg) = package_json else {
        tracing::debug!("No package.json, nothing to validate");
        return Vec::new();
    };

    let scripts: Vec<String> = DEFAULT_SCRIPTS
        .iter()
        .filter(|script| !(precommit && PRECOMMIT_SKIPPED.contains(script)))
        .filter(|script| pkg.has_script(script))
        .map(|script| script.to_string())
        .collect();

    tracing::debug!(
        package_json = %pkg.path.display(),
        ?scripts,
        "Selected default scripts defined in package.json"
    );
    scripts
}

/// One `<package manager> run <script> --silent` entry per script.
pub fn validate_commands(scripts: &[String], ctx: &ScriptContext) -> Result<CommandTable> {
    let package_manager = &ctx.settings().package_manager;

    let mut table = CommandTable::new();
    for script in scripts {
        let spec =
            CommandSpec::new(package_manager.as_str()).args(["run", script.as_str(), "--silent"]);
        table.insert(script.as_str(), spec)?;
    }
    Ok(table)
}
