//! CLI integration tests.
//!
//! These tests invoke the slowprint binary and verify its output and exit code.

#![allow(deprecated)] // cargo_bin is deprecated but still works

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to get a Command for the slowprint binary.
fn slowprint() -> Command {
    Command::cargo_bin("slowprint").unwrap()
}

#[test]
fn test_help_describes_program() {
    slowprint()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("progress bar"));
}

#[test]
fn test_version_flag() {
    slowprint()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_flag_is_rejected() {
    slowprint()
        .arg("--fast")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--fast"));
}

#[test]
#[ignore = "sleeps for 56 seconds of real time"]
fn test_full_run_output() {
    let tail = format!("\r{}\n", "*".repeat(21));

    let assert = slowprint()
        .assert()
        .success()
        .code(0)
        .stdout(predicate::str::starts_with("this is one string \n"))
        .stdout(predicate::str::ends_with(tail));

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.matches('\r').count(), 1000);
}
