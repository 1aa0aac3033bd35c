//! Build command implementation.
//!
//! Builds the library once per requested format, all formats in parallel.
//! Every format becomes one bundler invocation in a [`CommandTable`]; the
//! table is handed to the [`Dispatcher`] after the output directories have
//! been prepared.

use std::path::Path;

use crate::cli::BuildArgs;
use crate::commands::utils;
use crate::config::ENV_PREFIX;
use crate::context::ScriptContext;
use crate::dispatch::Dispatcher;
use crate::error::{ConfigError, Result};
use crate::format::{parse_formats, FormatDescriptor};
use crate::manifest;
use crate::table::{CommandSpec, CommandTable};

/// Project-level rollup config picked up when present.
pub const PROJECT_CONFIG: &str = "rollup.config.js";

/// Key prefix of the preact flavor in dual-flavor builds.
pub const PREACT_PREFIX: &str = "preact.";

/// Marker variable set on preact flavor commands.
pub const PREACT_ENV: &str = "BUILD_PREACT";

/// Execute the build command.
///
/// # Steps
///
/// 1. Build the command table from the requested formats
/// 2. Clean `dist` (and `preact` for dual-flavor builds)
/// 3. Run the table through the dispatcher
/// 4. On success of a dual-flavor build, write `preact/package.json`
///
/// Returns the dispatcher's exit code.
///
/// # Errors
///
/// Fails before anything runs if the table cannot be built or a directory
/// cannot be prepared. A failed manifest write after a successful build is
/// an error as well.
pub async fn execute<D: Dispatcher>(
    args: &BuildArgs,
    ctx: &ScriptContext,
    dispatcher: &D,
) -> Result<i32> {
    let table = build_commands(args, ctx)?;
    tracing::info!(
        formats = ?table.keys().collect::<Vec<_>>(),
        "Building {} bundle(s)",
        table.len()
    );

    prepare_output_dirs(args, ctx)?;

    let outcome = dispatcher.dispatch(&table).await?;
    if !outcome.success() {
        tracing::debug!(code = outcome.code, "Build failed, skipping post-build steps");
        return Ok(outcome.code);
    }

    if args.p_react && !args.no_package_json {
        manifest::write_preact_manifest(&ctx.from_root(&ctx.settings().preact_dir))?;
    }

    Ok(outcome.code)
}

/// Build the full command table for `args`.
///
/// One entry per format, keyed by the format token. Dual-flavor builds add
/// the same formats again under [`PREACT_PREFIX`].
pub fn build_commands(args: &BuildArgs, ctx: &ScriptContext) -> Result<CommandTable> {
    let formats = parse_formats(&args.bundle);
    let react = format_table(&formats, args, ctx, &[])?;

    if !args.p_react {
        return Ok(react);
    }

    let preact =
        format_table(&formats, args, ctx, &[(PREACT_ENV, "true")])?.prefixed(PREACT_PREFIX);
    Ok(react.merge(preact)?)
}

fn format_table(
    formats: &[FormatDescriptor],
    args: &BuildArgs,
    ctx: &ScriptContext,
    extra_env: &[(&str, &str)],
) -> Result<CommandTable> {
    let mut table = CommandTable::new();
    for format in formats {
        table.insert(format.token(), bundler_command(format, args, ctx, extra_env)?)?;
    }
    Ok(table)
}

/// The bundler invocation for a single format.
pub fn bundler_command(
    format: &FormatDescriptor,
    args: &BuildArgs,
    ctx: &ScriptContext,
    extra_env: &[(&str, &str)],
) -> Result<CommandSpec> {
    let bundler = ctx.resolve_bin(&ctx.settings().bundler);

    let mut spec = CommandSpec::new(bundler.to_string_lossy())
        .env("BUILD_ROLLUP", "true")
        .env("BUILD_FORMAT", format.name())
        .env("BUILD_MINIFY", format.minify().to_string())
        .env("NODE_ENV", format.node_env())
        .envs(extra_env.iter().copied())
        .args(config_args(args, ctx)?);

    if let Some(environment) = &args.environment {
        spec = spec.arg("--environment").arg(environment);
    }
    if args.watch {
        spec = spec.arg("--watch");
    }
    Ok(spec)
}

/// Config arguments for the bundler.
///
/// An explicit `--config` wins. Otherwise a project `rollup.config.js` is
/// used through rollup's own default lookup, and failing that the built-in
/// config.
///
/// # Errors
///
/// Fails if the built-in config is needed but missing.
pub fn config_args(args: &BuildArgs, ctx: &ScriptContext) -> Result<Vec<String>> {
    let config = match &args.config {
        Some(path) => Some(path_arg(path)),
        None if ctx.has_file(PROJECT_CONFIG) => None,
        None => {
            let builtin = ctx.from_root(&ctx.settings().builtin_config);
            if !builtin.is_file() {
                return Err(ConfigError::InvalidValue {
                    field: "builtin_config".to_string(),
                    value: builtin.display().to_string(),
                    hint: format!(
                        "No such file. Add a {PROJECT_CONFIG} to the project, pass --config \
                         or point {ENV_PREFIX}BUILTIN_CONFIG at a rollup config"
                    ),
                }
                .into());
            }
            Some(path_arg(&builtin))
        }
    };

    Ok(std::iter::once("--config".to_string()).chain(config).collect())
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Clean and create output directories ahead of a build.
///
/// With cleaning enabled `dist` is removed, and for dual-flavor builds the
/// preact directory as well. The preact directory always exists afterwards
/// in dual-flavor mode. `--no-clean` without `--p-react` touches nothing.
pub fn prepare_output_dirs(args: &BuildArgs, ctx: &ScriptContext) -> Result<()> {
    let settings = ctx.settings();
    let clean = !args.no_clean;

    if clean {
        utils::remove_dir_if_exists(&ctx.from_root(&settings.out_dir), ctx.root())?;
    }

    if args.p_react {
        let preact_dir = ctx.from_root(&settings.preact_dir);
        if clean {
            utils::remove_dir_if_exists(&preact_dir, ctx.root())?;
        }
        utils::ensure_output_dir(&preact_dir)?;
    }

    Ok(())
}
