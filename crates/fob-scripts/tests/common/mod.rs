//! Shared fixtures for the CLI integration tests.
//!
//! A fixture project carries a stub `node_modules/.bin/concurrently` that
//! records its arguments instead of running anything.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use tempfile::TempDir;

/// File the stub runner writes its arguments to, one per line.
pub const ARGS_FILE: &str = "concurrently-args.txt";

const STUB_RUNNER: &str = r#"#!/bin/sh
printf '%s\n' "$@" > concurrently-args.txt
if [ -n "$STUB_PREACT_OUTPUT" ]; then
    mkdir -p preact/dist
    echo 'module.exports = 1;' > preact/dist/lib.cjs.js
    echo 'export default 1;' > preact/dist/lib.esm.js
fi
exit "${STUB_EXIT:-0}"
"#;

pub struct Project {
    temp: TempDir,
}

impl Project {
    /// A project with the given npm scripts and a stub runner.
    pub fn new(scripts: &str) -> Self {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("package.json"),
            format!(r#"{{ "name": "fixture", "scripts": {scripts} }}"#),
        )
        .unwrap();

        let bin = temp.path().join("node_modules/.bin");
        fs::create_dir_all(&bin).unwrap();
        let runner = bin.join("concurrently");
        fs::write(&runner, STUB_RUNNER).unwrap();
        fs::set_permissions(&runner, fs::Permissions::from_mode(0o755)).unwrap();

        Self { temp }
    }

    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    pub fn write(&self, relative: &str, contents: &str) {
        let path = self.path(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    /// `fob-scripts --cwd <root>` with a clean environment.
    pub fn command(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("fob-scripts");
        cmd.arg("--cwd")
            .arg(self.root())
            .env_remove("SCRIPTS_PRECOMMIT")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");
        for (key, _) in std::env::vars() {
            if key.starts_with("FOB_SCRIPTS_") {
                cmd.env_remove(key);
            }
        }
        cmd
    }

    /// Arguments the stub runner received, if it ran.
    pub fn runner_args(&self) -> Option<Vec<String>> {
        let content = fs::read_to_string(self.path(ARGS_FILE)).ok()?;
        Some(content.lines().map(str::to_string).collect())
    }

    /// The value following `flag` in the runner's arguments.
    pub fn runner_flag(&self, flag: &str) -> Option<String> {
        let args = self.runner_args()?;
        let pos = args.iter().position(|a| a == flag)?;
        args.get(pos + 1).cloned()
    }
}
