//! Integration tests for the build command.
//!
//! The real binary runs against fixture projects whose parallel runner is a
//! recording shell stub.

#![cfg(unix)]

mod common;

use common::Project;
use predicates::prelude::*;
use std::fs;

#[test]
fn test_build_default_formats() {
    let project = Project::new("{}");

    project.command().arg("build").assert().success();

    assert_eq!(
        project.runner_flag("--names").as_deref(),
        Some("esm,cjs,umd,umd.min")
    );
    let args = project.runner_args().unwrap();
    assert_eq!(args[0], "--kill-others-on-fail");
    assert!(args.iter().any(|a| a.contains("BUILD_FORMAT=umd")));
}

#[test]
fn test_build_single_format_no_clean() {
    let project = Project::new("{}");
    project.write("dist/old.js", "old");

    project
        .command()
        .args(["build", "--bundle", "esm", "--no-clean", "--no-package-json"])
        .assert()
        .success();

    assert_eq!(project.runner_flag("--names").as_deref(), Some("esm"));
    assert!(project.path("dist/old.js").exists());
    assert!(!project.path("preact").exists());
}

#[test]
fn test_build_cleans_dist() {
    let project = Project::new("{}");
    project.write("dist/old.js", "old");

    project.command().args(["build", "--bundle", "cjs"]).assert().success();

    assert!(!project.path("dist").exists());
}

#[test]
fn test_build_unknown_flags_are_ignored() {
    let project = Project::new("{}");

    project
        .command()
        .args(["build", "--bundle", "esm", "--some-future-flag", "value"])
        .assert()
        .success();

    assert_eq!(project.runner_flag("--names").as_deref(), Some("esm"));
}

#[test]
fn test_build_dual_flavor_writes_manifest() {
    let project = Project::new("{}");

    project
        .command()
        .args(["build", "--bundle", "esm,cjs", "--p-react"])
        .env("STUB_PREACT_OUTPUT", "1")
        .assert()
        .success();

    assert_eq!(
        project.runner_flag("--names").as_deref(),
        Some("esm,cjs,preact.esm,preact.cjs")
    );

    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(project.path("preact/package.json")).unwrap())
            .unwrap();
    assert_eq!(manifest["main"], "dist/lib.cjs.js");
    assert_eq!(manifest["jsnext:main"], "dist/lib.esm.js");
    assert_eq!(manifest["module"], manifest["jsnext:main"]);
}

#[test]
fn test_build_failure_propagates_exit_code() {
    let project = Project::new("{}");

    project
        .command()
        .args(["build", "--p-react"])
        .env("STUB_EXIT", "3")
        .assert()
        .code(3);

    assert!(project.path("preact").is_dir());
    assert!(!project.path("preact/package.json").exists());
}

#[test]
fn test_build_missing_artifacts_reports_error() {
    let project = Project::new("{}");

    project
        .command()
        .args(["build", "--p-react"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(".cjs.js"));
}

#[test]
fn test_build_duplicate_format_reports_error() {
    let project = Project::new("{}");

    project
        .command()
        .args(["build", "--bundle", "esm,esm"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("esm"));

    assert!(project.runner_args().is_none());
}

#[test]
fn test_build_missing_runner() {
    let project = Project::new("{}");
    fs::remove_file(project.path("node_modules/.bin/concurrently")).unwrap();

    project
        .command()
        .arg("build")
        .env("FOB_SCRIPTS_RUNNER", "fob-scripts-missing-runner")
        .assert()
        .failure()
        .stderr(predicate::str::contains("fob-scripts-missing-runner"));
}

#[test]
fn test_build_missing_builtin_config_runs_nothing() {
    let project = Project::new("{}");
    project.write("dist/old.js", "old");

    project
        .command()
        .arg("build")
        .env("FOB_SCRIPTS_BUILTIN_CONFIG", "nowhere/rollup.config.js")
        .assert()
        .failure()
        .stderr(predicate::str::contains("builtin_config"));

    assert!(project.runner_args().is_none());
    assert!(project.path("dist/old.js").exists());
}

#[test]
fn test_build_project_config_uses_default_lookup() {
    let project = Project::new("{}");
    project.write("rollup.config.js", "module.exports = {}");

    project
        .command()
        .args(["build", "--bundle", "esm"])
        .env("FOB_SCRIPTS_BUILTIN_CONFIG", "nowhere/rollup.config.js")
        .assert()
        .success();

    let args = project.runner_args().unwrap();
    let command = args.last().unwrap();
    assert!(command.ends_with("--config"));
}
