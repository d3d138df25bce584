//! CLI integration tests for kac

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const KEEP_A_CHANGELOG: &str = "# Changelog

## [Unreleased]

### Added
- Experimental feature

## [1.0.0] - 2024-01-01

### Added
- Initial release
  * With docs

[Unreleased]: https://github.com/example/project/compare/v1.0.0...HEAD
[1.0.0]: https://github.com/example/project/releases/tag/v1.0.0
";

/// Get a command instance for the kac binary, isolated in `dir`
fn kac_cmd(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("kac"));
    cmd.current_dir(dir.path()).env("HOME", dir.path());
    cmd
}

/// Create a temporary directory holding a CHANGELOG.md
fn setup_changelog(content: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("CHANGELOG.md"), content).unwrap();
    dir
}

// =============================================================================
// Convert
// =============================================================================

#[test]
fn test_convert_prints_generic_text() {
    let dir = setup_changelog(KEEP_A_CHANGELOG);

    kac_cmd(&dir)
        .arg("convert")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unreleased Not Released\n"))
        .stdout(predicate::str::contains("1.0.0 2024-01-01\n"))
        .stdout(predicate::str::contains("  - With docs\n"))
        .stdout(predicate::str::contains("https://").not());
}

#[test]
fn test_convert_reads_stdin() {
    let dir = TempDir::new().unwrap();

    kac_cmd(&dir)
        .args(["convert", "-"])
        .write_stdin("## [2.0.0]\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("2.0.0 Unknown"));
}

#[test]
fn test_convert_writes_output_file() {
    let dir = setup_changelog("## [2.0.0]");

    kac_cmd(&dir)
        .args(["convert", "--output", "generic.txt"])
        .assert()
        .success();

    let written = fs::read_to_string(dir.path().join("generic.txt")).unwrap();
    assert_eq!(written, "2.0.0 Unknown");
}

#[test]
fn test_convert_unrecognized_exit_code() {
    let dir = setup_changelog("Revision history\n\n1.01 2024-01-01\n  - First version\n");

    kac_cmd(&dir).arg("convert").assert().code(3);
}

#[test]
fn test_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    kac_cmd(&dir)
        .args(["convert", "NOPE.md"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Changelog not found"));
}

// =============================================================================
// Parse
// =============================================================================

#[test]
fn test_parse_json_orders_oldest_first() {
    let dir = setup_changelog(KEEP_A_CHANGELOG);

    let output = kac_cmd(&dir)
        .args(["--format", "json", "parse"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["releases"][0]["version"], "1.0.0");
    assert_eq!(value["releases"][1]["version"], "Unreleased");
    assert_eq!(value["releases"][1]["date"], "Not Released");
    assert_eq!(
        value["releases"][1]["groups"][0]["entries"][0]["text"],
        "Experimental feature"
    );
}

#[test]
fn test_parse_text_summary() {
    let dir = setup_changelog(KEEP_A_CHANGELOG);

    kac_cmd(&dir)
        .args(["parse", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Changelog"))
        .stdout(predicate::str::contains("Not Released"))
        .stdout(predicate::str::contains("- Initial release"));
}

#[test]
fn test_parse_single_release() {
    let dir = setup_changelog(KEEP_A_CHANGELOG);

    let output = kac_cmd(&dir)
        .args(["--format", "json", "parse", "--release", "1.0.0"])
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["releases"].as_array().unwrap().len(), 1);
}

#[test]
fn test_parse_invalid_date_exit_code() {
    let dir = setup_changelog("## [1.0.0] - 2024-02-31\n");

    kac_cmd(&dir)
        .arg("parse")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Invalid release date"));
}

#[test]
fn test_parse_uses_config_release_order() {
    let dir = setup_changelog(KEEP_A_CHANGELOG);
    fs::write(
        dir.path().join("kac.toml"),
        "[parser]\nrelease_order = \"document-order\"\n",
    )
    .unwrap();

    let output = kac_cmd(&dir)
        .args(["--format", "json", "parse"])
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["releases"][0]["version"], "Unreleased");
}

#[test]
fn test_invalid_config_exit_code() {
    let dir = setup_changelog(KEEP_A_CHANGELOG);
    fs::write(dir.path().join("kac.toml"), "[parser]\ndialects = []\n").unwrap();

    kac_cmd(&dir).arg("parse").assert().code(2);
}

// =============================================================================
// Detect and render
// =============================================================================

#[test]
fn test_detect_dialects() {
    let dir = setup_changelog(KEEP_A_CHANGELOG);
    fs::write(dir.path().join("generic.txt"), "1.0.0 2024-01-01\n- thing\n").unwrap();
    fs::write(dir.path().join("notes.txt"), "nothing here\n").unwrap();

    kac_cmd(&dir)
        .arg("detect")
        .assert()
        .success()
        .stdout(predicate::str::contains("keep-a-changelog"));

    kac_cmd(&dir)
        .args(["detect", "generic.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("generic"));

    kac_cmd(&dir).args(["detect", "notes.txt"]).assert().code(3);
}

#[test]
fn test_render_markdown_round_trip() {
    let dir = setup_changelog(KEEP_A_CHANGELOG);

    kac_cmd(&dir)
        .args(["render", "--to", "markdown", "--output", "OUT.md"])
        .assert()
        .success();

    let rendered = fs::read_to_string(dir.path().join("OUT.md")).unwrap();
    assert!(rendered.starts_with("# Changelog\n"));
    assert!(rendered.contains("## [1.0.0] - 2024-01-01"));

    kac_cmd(&dir)
        .args(["convert", "OUT.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unreleased Not Released"));
}

#[test]
fn test_render_unknown_format() {
    let dir = setup_changelog(KEEP_A_CHANGELOG);

    kac_cmd(&dir)
        .args(["render", "--to", "html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown format"));
}

#[test]
fn test_completions() {
    let dir = TempDir::new().unwrap();

    kac_cmd(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("kac"));
}
