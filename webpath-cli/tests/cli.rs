//! Integration tests for the webpath CLI surface.
//!
//! These tests verify argument parsing, help text, and version output.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_cli_no_arguments() {
    let env = TestEnv::new();
    env.command()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_cli_version_flag() {
    let env = TestEnv::new();
    env.command()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("webpath"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_help_flag() {
    let env = TestEnv::new();
    env.command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Manipulate slash-delimited paths"));
}

#[test]
fn test_cli_invalid_subcommand() {
    let env = TestEnv::new();
    env.command()
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid-command"));
}

#[test]
fn test_help_lists_subcommands() {
    let env = TestEnv::new();
    let assert = env.command().arg("--help").assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    for name in [
        "normalize",
        "join",
        "resolve",
        "is-absolute",
        "relative",
        "dirname",
        "basename",
        "extname",
        "parse",
        "format",
        "escape",
        "segments",
    ] {
        assert!(stdout.contains(name), "help is missing {name}");
    }
}

#[test]
fn test_completions_bash() {
    let env = TestEnv::new();
    env.command()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("webpath"));
}

#[test]
fn test_format_json_conflicts_with_fields() {
    let env = TestEnv::new();
    env.command()
        .args(["format", "--json", "{}", "--dir", "/a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
