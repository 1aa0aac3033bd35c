//! Handing command tables to the external parallel runner.
//!
//! fob-scripts never runs build or validation commands itself. The whole
//! table goes to `concurrently`, which starts one process per entry, prefixes
//! their output with the entry label and exits non-zero when any of them
//! fails. Its exit code is the verdict of the run.
//!
//! The runner starts in the project root, so relative paths inside commands
//! resolve against it.

use std::path::PathBuf;
use std::process::Stdio;

use crate::context::ScriptContext;
use crate::error::{DispatchError, Result};
use crate::table::CommandTable;

/// Background colors cycled through for the runner's name prefixes.
pub const PREFIX_COLORS: &[&str] = &[
    "bgBlue",
    "bgGreen",
    "bgMagenta",
    "bgCyan",
    "bgWhite",
    "bgRed",
    "bgBlack",
    "bgYellow",
];

/// Aggregate result of running a command table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Exit code of the runner
    pub code: i32,
}

impl DispatchOutcome {
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

/// Runs every command of a table concurrently and waits for the verdict.
pub trait Dispatcher {
    async fn dispatch(&self, table: &CommandTable) -> Result<DispatchOutcome>;
}

/// [`Dispatcher`] backed by the `concurrently` npm package.
#[derive(Debug, Clone)]
pub struct ConcurrentlyDispatcher {
    program: PathBuf,
    root: PathBuf,
    package: String,
    env_setter: String,
    kill_others_on_fail: bool,
}

impl ConcurrentlyDispatcher {
    pub fn new(ctx: &ScriptContext) -> Self {
        let settings = ctx.settings();
        let env_setter = ctx.resolve_bin(&settings.env_setter);
        Self {
            program: ctx.resolve_bin(&settings.runner),
            root: ctx.root().to_path_buf(),
            package: settings.runner.clone(),
            env_setter: env_setter.to_string_lossy().into_owned(),
            kill_others_on_fail: settings.kill_others_on_fail,
        }
    }

    pub fn program(&self) -> &std::path::Path {
        &self.program
    }

    /// The runner's argument list for `table`.
    pub fn args(&self, table: &CommandTable) -> Vec<String> {
        concurrently_args(table, &self.env_setter, self.kill_others_on_fail)
    }
}

impl Dispatcher for ConcurrentlyDispatcher {
    async fn dispatch(&self, table: &CommandTable) -> Result<DispatchOutcome> {
        if table.is_empty() {
            tracing::debug!("Nothing to run");
            return Ok(DispatchOutcome { code: 0 });
        }

        let args = self.args(table);
        tracing::debug!(program = %self.program.display(), ?args, "Starting runner");

        let status = tokio::process::Command::new(&self.program)
            .args(&args)
            .current_dir(&self.root)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| DispatchError::Spawn {
                program: self.program.clone(),
                package: self.package.clone(),
                source,
            })?;

        // Killed by a signal: no code, still a failure
        let code = status.code().unwrap_or(1);
        tracing::debug!(code, "Runner finished");
        Ok(DispatchOutcome { code })
    }
}

/// Build the `concurrently` argument list for a table.
///
/// ```text
/// [--kill-others-on-fail] --prefix [{name}] --names a,b
///     --prefix-colors bgBlue.bold.reset,bgGreen.bold.reset <cmd a> <cmd b>
/// ```
///
/// Each command is one argument, already shell-quoted for the runner's shell.
pub fn concurrently_args(
    table: &CommandTable,
    env_setter: &str,
    kill_others_on_fail: bool,
) -> Vec<String> {
    let names = table.keys().collect::<Vec<_>>().join(",");
    let colors = (0..table.len())
        .map(|i| format!("{}.bold.reset", PREFIX_COLORS[i % PREFIX_COLORS.len()]))
        .collect::<Vec<_>>()
        .join(",");

    let mut args = Vec::with_capacity(table.len() + 7);
    if kill_others_on_fail {
        args.push("--kill-others-on-fail".to_string());
    }
    args.extend([
        "--prefix".to_string(),
        "[{name}]".to_string(),
        "--names".to_string(),
        names,
        "--prefix-colors".to_string(),
        colors,
    ]);
    args.extend(table.iter().map(|(_, spec)| spec.to_shell(env_setter)));
    args
}
