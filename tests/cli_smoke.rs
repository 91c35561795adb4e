#![allow(clippy::unwrap_used)]
//! CLI smoke tests to verify basic command functionality.
//!
//! Only paths that fail or exit before touching the clipboard are exercised
//! here, so the tests behave the same with or without a display.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn tclip(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tclip").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

#[test]
fn test_help_displays_usage() {
    let home = TempDir::new().unwrap();
    tclip(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Translate the selected text"))
        .stdout(predicate::str::contains("--known"))
        .stdout(predicate::str::contains("--learn"))
        .stdout(predicate::str::contains("--llm"))
        .stdout(predicate::str::contains("--append"))
        .stdout(predicate::str::contains("--list"));
}

#[test]
fn test_version_displays_version() {
    let home = TempDir::new().unwrap();
    tclip(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_legacy_flags_are_accepted() {
    let home = TempDir::new().unwrap();
    tclip(&home)
        .args(["-llm", "-append", "--help"])
        .assert()
        .success();
}

#[test]
fn test_helper_mode_is_hidden_from_help() {
    let home = TempDir::new().unwrap();
    tclip(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("clipboard-daemon").not());
}

#[test]
fn test_invalid_bool_value_is_a_usage_error() {
    let home = TempDir::new().unwrap();
    tclip(&home)
        .arg("-llm=maybe")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--llm"));
}

#[test]
fn test_invalid_language_code() {
    let home = TempDir::new().unwrap();
    tclip(&home)
        .args(["-k", "not a code"])
        .assert()
        .code(exitcode::USAGE)
        .stderr(predicate::str::contains("Invalid language code"));
}

#[test]
fn test_invalid_language_code_from_config() {
    let home = TempDir::new().unwrap();
    fs::create_dir_all(home.path().join("tclip")).unwrap();
    fs::write(home.path().join("tclip/config.toml"), "[tclip]\nlearn = \"12\"\n").unwrap();

    tclip(&home)
        .assert()
        .code(exitcode::USAGE)
        .stderr(predicate::str::contains("'12'"));
}

#[test]
fn test_broken_config_file() {
    let home = TempDir::new().unwrap();
    fs::create_dir_all(home.path().join("tclip")).unwrap();
    fs::write(home.path().join("tclip/config.toml"), "[tclip\nknown =").unwrap();

    tclip(&home)
        .assert()
        .code(exitcode::CONFIG)
        .stderr(predicate::str::contains("Failed to parse config file"));
}
