//! End-to-end tests for the `bagpipe` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn write_unit(root: &Path, relative: &str, file_name: &str, yaml: &str) {
    let dir = root.join(relative);
    std::fs::create_dir_all(&dir).expect("Failed to create unit dir");
    std::fs::write(dir.join(file_name), yaml).expect("Failed to write unit file");
}

// project -> app -> tasks -> common, with `app` also naming a missing unit.
fn create_project(file_name: &str) -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let root = dir.path();

    write_unit(root, "project", file_name, "python: \"3.11\"\n");
    write_unit(root, "project/common", file_name, "requirements:\n  pyyaml: \">=6\"\n");
    write_unit(root, "project/tasks", file_name, "dependencies: [common]\n");
    write_unit(root, "project/app", file_name, "dependencies: [tasks, common, ghost]\n");

    dir
}

fn bagpipe() -> Command {
    let mut cmd = Command::cargo_bin("bagpipe").expect("Failed to find bagpipe binary");
    cmd.env_remove("BAGPIPE_LOG")
        .env_remove("CLICOLOR_FORCE")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_plan_text_output() {
    let dir = create_project("bag.yml");

    let output = bagpipe()
        .arg("plan")
        .arg("--context")
        .arg(dir.path().join("project/app"))
        .output()
        .expect("Failed to run bagpipe");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("stdout is not UTF-8");
    insta::assert_snapshot!(stdout, @r"
    1. common
    2. tasks
    3. app
    ");
}

#[test]
fn test_plan_json_output() {
    let dir = create_project("pipe.yml");

    let output = bagpipe()
        .args(["plan", "--kind", "pipe", "--format", "json", "--target", "tasks", "--context"])
        .arg(dir.path().join("project"))
        .output()
        .expect("Failed to run bagpipe");

    assert!(output.status.success());
    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).expect("Invalid JSON");
    assert_eq!(plan["target"], "tasks");
    assert_eq!(plan["dependencies"], serde_json::json!(["common"]));
}

#[test]
fn test_list_marks_root_and_unresolved() {
    let dir = create_project("bag.yml");

    bagpipe()
        .arg("list")
        .arg("--context")
        .arg(dir.path().join("project/common"))
        .assert()
        .success()
        .stdout(predicate::str::contains("project (root)"))
        .stdout(predicate::str::contains("app -> tasks, common, ghost?"))
        .stdout(predicate::str::contains("tasks -> common"));
}

#[test]
fn test_show_unit() {
    let dir = create_project("bag.yml");

    bagpipe()
        .args(["show", "common", "--context"])
        .arg(dir.path().join("project"))
        .assert()
        .success()
        .stdout(predicate::str::contains("requirements: pyyaml"))
        .stdout(predicate::str::contains("dependents:   app, tasks"));
}

#[test]
fn test_missing_target_fails() {
    let dir = create_project("bag.yml");

    bagpipe()
        .args(["plan", "--target", "nonexistent", "--context"])
        .arg(dir.path().join("project"))
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "The specified unit \"nonexistent\" does not exist",
        ));
}

#[test]
fn test_strict_rejects_missing_dependency() {
    let dir = create_project("bag.yml");

    bagpipe()
        .args(["list", "--strict", "--context"])
        .arg(dir.path().join("project"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("depends on 'ghost'"));
}

#[test]
fn test_wrong_kind_has_no_unit_file() {
    let dir = create_project("bag.yml");

    bagpipe()
        .args(["list", "--kind", "pipe", "--context"])
        .arg(dir.path().join("project"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("No pipe.yml found"));
}
