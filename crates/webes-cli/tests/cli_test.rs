//! CLI integration tests using assert_cmd
//!
//! These tests verify the CLI commands work correctly end-to-end.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Get a command instance for the webes binary
fn webes_cmd() -> Command {
    Command::cargo_bin("webes").expect("Failed to find webes binary")
}

/// Create a project root with one component
fn project_with_component(name: &str, content: &str) -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let components = temp_dir.path().join("dev").join("components");
    fs::create_dir_all(&components).expect("Failed to create components dir");
    fs::write(components.join(name), content).expect("Failed to write component");
    temp_dir
}

fn init_project(root: &Path) {
    webes_cmd().arg("init").arg(root).assert().success();
}

#[test]
fn test_help_command() {
    webes_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("webes - single-file component toolkit"));
}

#[test]
fn test_version_command() {
    webes_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("webes"));
}

#[test]
fn test_validate_help() {
    webes_cmd()
        .arg("validate")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Check components for unused classes, ids and functions",
        ));
}

#[test]
fn test_missing_subcommand_fails() {
    webes_cmd().assert().failure();
}

#[test]
fn test_init_creates_project_tree() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    webes_cmd()
        .arg("init")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("== Initializing Project =="))
        .stdout(predicate::str::contains("components/"));

    let root = temp_dir.path();
    assert!(root.join("dist/index.html").is_file());
    assert!(root.join("dev/styles/style.css").is_file());
    assert!(root.join("dev/components/_helloWorld.webes").is_file());
    assert!(root.join("dev/scripts/script.js").is_file());
    assert!(root.join("dist/imgs").is_dir());
}

#[test]
fn test_validate_starter_project() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    init_project(temp_dir.path());

    webes_cmd()
        .arg("validate")
        .arg(temp_dir.path())
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains("unused-template-class"))
        .stdout(predicate::str::contains("_helloWorld"))
        .stdout(predicate::str::contains("1 component: 0 errors, 1 warning"));
}

#[test]
fn test_validate_max_warnings_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    init_project(temp_dir.path());

    webes_cmd()
        .arg("validate")
        .arg(temp_dir.path())
        .arg("--max-warnings")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Too many warnings (1 > max 0)"));
}

#[test]
fn test_validate_json_output() {
    let project = project_with_component(
        "hello.webes",
        r#"<template><div id="title" class="_helloWorld"><h1>Hello</h1></div></template>
<style>.unusedStyle{color:red;} h1{font-size:250%;}</style>
<script></script>"#,
    );

    let output = webes_cmd()
        .arg("validate")
        .arg(project.path())
        .arg("--format")
        .arg("json")
        .output()
        .expect("Failed to run webes");
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output should be JSON");
    let kinds: Vec<_> = report["diagnostics"]
        .as_array()
        .expect("diagnostics array")
        .iter()
        .map(|d| {
            (
                d["kind"].as_str().unwrap().to_string(),
                d["identifier"].as_str().unwrap().to_string(),
            )
        })
        .collect();

    assert_eq!(
        kinds,
        vec![
            ("unused-style-class".to_string(), "unusedStyle".to_string()),
            ("unused-template-class".to_string(), "_helloWorld".to_string()),
            ("unused-template-id".to_string(), "title".to_string()),
        ]
    );
}

#[test]
fn test_validate_writes_markdown_file() {
    let project = project_with_component("a.webes", "<template></template>");
    let out = project.path().join("report.md");

    webes_cmd()
        .arg("validate")
        .arg(project.path())
        .arg("--format")
        .arg("markdown")
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote Markdown report"));

    let markdown = fs::read_to_string(out).expect("Report should exist");
    assert!(markdown.contains("# webes Validation Report"));
    assert!(markdown.contains("_No findings_"));
}

#[cfg(unix)]
#[test]
fn test_validate_unreadable_component_fails_but_reports_rest() {
    use std::os::unix::fs::PermissionsExt;

    let project = project_with_component("a.webes", "<template><p class=\"x\"></p></template>");
    let locked = project.path().join("dev/components/b.webes");
    fs::write(&locked, "<template></template>").unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
    if fs::read(&locked).is_ok() {
        // Permissions are not enforced (running as root)
        return;
    }

    webes_cmd()
        .arg("validate")
        .arg(project.path())
        .arg("--no-color")
        .assert()
        .failure()
        .stdout(predicate::str::contains("(!) file-read"))
        .stdout(predicate::str::contains("unused-template-class"));
}

#[test]
fn test_validate_non_utf8_component_is_analysed() {
    let project = project_with_component("a.webes", "");
    let mut content = b"<template><!-- ".to_vec();
    content.push(0xa9);
    content.extend_from_slice(b" --></template><style>.unused{}</style>");
    fs::write(project.path().join("dev/components/a.webes"), content).unwrap();

    webes_cmd()
        .arg("validate")
        .arg(project.path())
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains("unused-style-class"))
        .stdout(predicate::str::contains("file-read").not());
}

#[test]
fn test_validate_components_dir_override() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let ui = temp_dir.path().join("ui");
    fs::create_dir_all(&ui).unwrap();
    fs::write(ui.join("a.webes"), "<template><p class=\"x\"></p></template>").unwrap();

    webes_cmd()
        .arg("validate")
        .arg(temp_dir.path())
        .arg("--components-dir")
        .arg("ui")
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains("unused-template-class"))
        .stdout(predicate::str::contains("1 component: 0 errors, 1 warning"));
}

#[test]
fn test_validate_missing_components_dir() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    webes_cmd()
        .arg("validate")
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Failed to read components directory"));
}

#[test]
fn test_wipe_force_removes_project() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    init_project(temp_dir.path());
    fs::write(temp_dir.path().join("keep.txt"), "keep").unwrap();

    webes_cmd()
        .arg("wipe")
        .arg(temp_dir.path())
        .arg("--force")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 2 directories."));

    assert!(!temp_dir.path().join("dist").exists());
    assert!(!temp_dir.path().join("dev").exists());
    assert!(temp_dir.path().join("keep.txt").exists());
}

#[test]
fn test_wipe_declined_keeps_project() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    init_project(temp_dir.path());

    webes_cmd()
        .arg("wipe")
        .arg(temp_dir.path())
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled."));

    assert!(temp_dir.path().join("dev/components/_helloWorld.webes").exists());
}

#[test]
fn test_wipe_empty_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    webes_cmd()
        .arg("wipe")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to wipe"));
}
