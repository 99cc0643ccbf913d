//! Tests for the `pathdiag_append` / `pathdiag_prepend` shell helpers.
#![cfg(unix)]
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

const VAR: &str = "PATHDIAG_SHELL_TEST_LIST";

/// Runs `script` in `sh` with the helpers sourced and the built binary on
/// `PATH`. The script should print the variable after calling a helper.
fn helper_cmd(script: &str) -> Command {
    let helpers = concat!(env!("CARGO_MANIFEST_DIR"), "/scripts/pathdiag-functions.sh");
    let bin = cargo_bin("pathdiag");
    let bin_dir = bin.parent().expect("binary has a parent directory");
    let path = format!("{}:/usr/bin:/bin", bin_dir.display());

    let mut cmd = Command::new("sh");
    cmd.env("PATH", path)
        .env_remove("PATHDIAG_VAR")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .arg("-c")
        .arg(format!(". '{}'\n{}", helpers, script));
    cmd
}

fn dir(temp: &TempDir, name: &str) -> String {
    let path = temp.path().join(name);
    fs::create_dir(&path).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn append_to_empty_variable_has_no_leading_delimiter() {
    let temp = TempDir::new().unwrap();
    let new = dir(&temp, "new");

    helper_cmd(&format!(
        "pathdiag_append '{new}' {VAR} && printf '%s' \"${VAR}\""
    ))
    .env(VAR, "")
    .assert()
    .success()
    .stdout(new.clone());
}

#[test]
fn prepend_to_empty_variable_has_no_trailing_delimiter() {
    let temp = TempDir::new().unwrap();
    let new = dir(&temp, "new");

    helper_cmd(&format!(
        "pathdiag_prepend '{new}' {VAR} && printf '%s' \"${VAR}\""
    ))
    .env(VAR, "")
    .assert()
    .success()
    .stdout(new.clone());
}

#[test]
fn append_adds_after_existing_entries() {
    let temp = TempDir::new().unwrap();
    let old = dir(&temp, "old");
    let new = dir(&temp, "new");

    helper_cmd(&format!(
        "pathdiag_append '{new}' {VAR} && printf '%s' \"${VAR}\""
    ))
    .env(VAR, &old)
    .assert()
    .success()
    .stdout(format!("{}:{}", old, new));
}

#[test]
fn prepend_adds_before_existing_entries() {
    let temp = TempDir::new().unwrap();
    let old = dir(&temp, "old");
    let new = dir(&temp, "new");

    helper_cmd(&format!(
        "pathdiag_prepend '{new}' {VAR} && printf '%s' \"${VAR}\""
    ))
    .env(VAR, &old)
    .assert()
    .success()
    .stdout(format!("{}:{}", new, old));
}

#[test]
fn rejected_candidate_leaves_variable_unchanged() {
    let temp = TempDir::new().unwrap();
    let old = dir(&temp, "old");
    let missing = temp.path().join("missing");
    let missing = missing.to_str().unwrap();

    helper_cmd(&format!(
        "pathdiag_append '{missing}' {VAR}; status=$?; printf '%s|%s' \"$status\" \"${VAR}\""
    ))
    .env(VAR, &old)
    .assert()
    .success()
    .stdout(format!("1|{}", old));
}
