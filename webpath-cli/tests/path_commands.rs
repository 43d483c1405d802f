//! Integration tests for the path subcommands.
//!
//! Each test runs the binary in an isolated environment; see `common`.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_normalize() {
    let env = TestEnv::new();
    assert_eq!(env.run(&["normalize", "a//b/../c/./"]), "a/c/");
    assert_eq!(env.run(&["normalize", ""]), ".");
    assert_eq!(env.run(&["normalize", "/../a"]), "/a");
}

#[test]
fn test_join() {
    let env = TestEnv::new();
    assert_eq!(env.run(&["join", "a", "b", "..", "c"]), "a/c");
    assert_eq!(env.run(&["join"]), ".");
}

#[test]
fn test_resolve_uses_cwd_flag() {
    let env = TestEnv::new();
    assert_eq!(
        env.run(&["--cwd", "/site/docs", "resolve", "guide", "../api"]),
        "/site/docs/api"
    );
    assert_eq!(env.run(&["resolve"]), "/");
}

#[test]
fn test_resolve_uses_cwd_env() {
    let env = TestEnv::new();
    env.command()
        .env("WEBPATH_CWD", "/from/env")
        .args(["resolve", "x"])
        .assert()
        .success()
        .stdout("/from/env/x\n");
}

#[test]
fn test_flag_overrides_env() {
    let env = TestEnv::new();
    env.command()
        .env("WEBPATH_CWD", "/from/env")
        .args(["--cwd", "/from/flag", "resolve", "x"])
        .assert()
        .success()
        .stdout("/from/flag/x\n");
}

#[test]
fn test_resolve_uses_config_file() {
    let env = TestEnv::new();
    let config = env.write_file("host.yaml", "cwd: /configured\n");
    let config = config.to_str().unwrap();
    assert_eq!(
        env.run(&["--config", config, "resolve", "page.html"]),
        "/configured/page.html"
    );
}

#[test]
fn test_resolve_discovers_project_config() {
    let env = TestEnv::new();
    env.write_file("webpath.yaml", "cwd: /project\n");
    assert_eq!(env.run(&["resolve", "a"]), "/project/a");
}

#[test]
fn test_is_absolute_exit_status() {
    let env = TestEnv::new();
    env.command()
        .args(["is-absolute", "/a"])
        .assert()
        .success()
        .stdout("true\n");
    env.command()
        .args(["is-absolute", "a"])
        .assert()
        .code(1)
        .stdout("false\n");
}

#[test]
fn test_is_absolute_with_origin() {
    let env = TestEnv::new();
    env.command()
        .args([
            "--origin",
            "https://example.com",
            "is-absolute",
            "https://example.com/x",
        ])
        .assert()
        .success();
}

#[test]
fn test_relative() {
    let env = TestEnv::new();
    assert_eq!(env.run(&["relative", "/a/b", "c"]), "/a/b/c");
}

#[test]
fn test_dirname_basename_extname() {
    let env = TestEnv::new();
    assert_eq!(env.run(&["dirname", "/a/b/c.txt"]), "/a/b");
    assert_eq!(env.run(&["basename", "/a/b/c.txt"]), "c.txt");
    assert_eq!(env.run(&["basename", "/a/b/c.txt", "--ext", ".txt"]), "c");
    assert_eq!(env.run(&["extname", "a.b.c"]), ".c");
    assert_eq!(env.run(&["extname", ".gitignore"]), "");
}

#[test]
fn test_parse_json() {
    let env = TestEnv::new();
    let out = env.run(&["parse", "/a/b/c.txt"]);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["root"], "/");
    assert_eq!(value["dir"], "/a/b");
    assert_eq!(value["base"], "c.txt");
    assert_eq!(value["ext"], ".txt");
    assert_eq!(value["name"], "c");
}

#[test]
fn test_parse_yaml() {
    let env = TestEnv::new();
    env.command()
        .args(["parse", "/a/b/c.txt", "--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("name: c"));
}

#[test]
fn test_format_from_flags() {
    let env = TestEnv::new();
    assert_eq!(
        env.run(&["format", "--dir", "/a/b", "--name", "c", "--ext", ".txt"]),
        "/a/b/c.txt"
    );
}

#[test]
fn test_format_from_parse_output() {
    let env = TestEnv::new();
    let parsed = env.run(&["parse", "../up/file.rs"]);
    assert_eq!(env.run(&["format", "--json", &parsed]), "../up/file.rs");
}

#[test]
fn test_format_invalid_json() {
    let env = TestEnv::new();
    env.command()
        .args(["format", "--json", "not json"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("invalid --json"));
}

#[test]
fn test_escape() {
    let env = TestEnv::new();
    assert_eq!(env.run(&["escape", "/a b"]), "%2Fa%20b");
}

#[test]
fn test_segments() {
    let env = TestEnv::new();
    assert_eq!(env.run(&["segments", "/a\\b//c/"]), "a\nb\nc");
    assert_eq!(env.run(&["segments", "a//b", "--keep-empty"]), "a\n\nb");
}

#[test]
fn test_empty_cwd_is_configuration_error() {
    let env = TestEnv::new();
    env.command()
        .args(["--cwd", "", "resolve", "x"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("cwd"));
}

#[test]
fn test_invalid_config_file_is_configuration_error() {
    let env = TestEnv::new();
    env.write_file("webpath.yaml", "cwd: [unclosed\n");
    env.command()
        .args(["resolve", "x"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("invalid configuration file"));
}
