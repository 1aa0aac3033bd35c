use std::path::{Path, PathBuf};

pub fn default_bundler() -> String {
    "rollup".to_string()
}

pub fn default_runner() -> String {
    "concurrently".to_string()
}

pub fn default_env_setter() -> String {
    "cross-env".to_string()
}

pub fn default_package_manager() -> String {
    "npm".to_string()
}

/// Location of the rollup config shipped in this crate's `config/` directory.
pub const SHIPPED_CONFIG: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/config/rollup.config.js");

/// The shipped rollup config.
///
/// npm installs put the binary in `<pkg>/bin` next to `<pkg>/config`, so
/// `config/rollup.config.js` above the executable is tried first. Otherwise
/// the copy in the crate sources is used, which also covers `cargo install`
/// and `cargo run`.
pub fn default_builtin_config() -> PathBuf {
    let beside_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().and_then(Path::parent).map(Path::to_path_buf))
        .map(|pkg| pkg.join("config").join("rollup.config.js"));

    match beside_exe {
        Some(path) if path.is_file() => path,
        _ => PathBuf::from(SHIPPED_CONFIG),
    }
}

pub fn default_out_dir() -> PathBuf {
    PathBuf::from("dist")
}

pub fn default_preact_dir() -> PathBuf {
    PathBuf::from("preact")
}

pub fn default_kill_others_on_fail() -> bool {
    true
}
