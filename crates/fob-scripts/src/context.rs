//! The immutable per-run context.
//!
//! Everything the pipelines would otherwise look up from the process
//! environment is resolved once here and passed down by reference: the
//! project root, the tool settings and the pre-commit signal.

use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::error::{CliError, Result};
use crate::package_json::PackageJson;

/// Environment variable signalling a pre-commit hook run.
pub const PRECOMMIT_ENV: &str = "SCRIPTS_PRECOMMIT";

/// Resolved project and tool state for one invocation.
#[derive(Debug, Clone)]
pub struct ScriptContext {
    root: PathBuf,
    settings: Settings,
    precommit: bool,
}

impl ScriptContext {
    pub fn new(root: impl Into<PathBuf>, settings: Settings, precommit: bool) -> Self {
        Self {
            root: root.into(),
            settings,
            precommit,
        }
    }

    /// Resolve the context from the process environment.
    ///
    /// The project root is `explicit_root` when given, otherwise the nearest
    /// ancestor of the current directory with a package.json, otherwise the
    /// current directory itself.
    pub fn discover(explicit_root: Option<&Path>) -> Result<Self> {
        let current_dir = std::env::current_dir()?;
        let root = match explicit_root {
            Some(dir) => {
                let dir = resolve_path(dir, &current_dir);
                if !dir.is_dir() {
                    return Err(CliError::InvalidArgument(format!(
                        "Specified --cwd is not a directory: {}",
                        dir.display()
                    )));
                }
                dir
            }
            None => find_package_json(&current_dir).unwrap_or_else(|| {
                tracing::debug!(
                    "No package.json found, using {} as project root",
                    current_dir.display()
                );
                current_dir.clone()
            }),
        };

        let settings = Settings::load(&root)?;
        let precommit = parse_env_flag(std::env::var(PRECOMMIT_ENV).ok().as_deref());

        tracing::debug!(root = %root.display(), precommit, "Resolved project context");
        Ok(Self::new(root, settings, precommit))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Whether this run happens inside a pre-commit hook.
    pub fn precommit(&self) -> bool {
        self.precommit
    }

    /// Resolve `path` against the project root.
    pub fn from_root(&self, path: impl AsRef<Path>) -> PathBuf {
        resolve_path(path.as_ref(), &self.root)
    }

    /// Whether the project root contains a file at `path`.
    pub fn has_file(&self, path: impl AsRef<Path>) -> bool {
        self.from_root(path).is_file()
    }

    /// Locate an npm-installed executable.
    ///
    /// Prefers `<root>/node_modules/.bin/<name>`, falling back to the bare
    /// name for a `PATH` lookup.
    pub fn resolve_bin(&self, name: &str) -> PathBuf {
        let local = self.root.join("node_modules").join(".bin").join(name);
        if local.is_file() {
            local
        } else {
            PathBuf::from(name)
        }
    }

    /// The project's package.json, if it has one.
    pub fn package_json(&self) -> Result<Option<PackageJson>> {
        PackageJson::find_in(&self.root)
    }
}

/// Resolve a path relative to a working directory.
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Walks up the directory tree to find the nearest package.json.
///
/// Returns the directory containing it, or `None` at the filesystem root.
pub fn find_package_json(start_dir: &Path) -> Option<PathBuf> {
    start_dir
        .ancestors()
        .find(|dir| dir.join("package.json").is_file())
        .map(Path::to_path_buf)
}

/// Interpret an environment variable as a boolean flag.
///
/// `true` and `1` (any case, surrounding whitespace ignored) are truthy;
/// everything else, including an unset variable, is false.
pub fn parse_env_flag(value: Option<&str>) -> bool {
    value
        .map(|v| v.trim().to_ascii_lowercase())
        .is_some_and(|v| v == "true" || v == "1")
}
