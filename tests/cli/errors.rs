//! Tests for error handling and CLI flags.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_help() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "keyprops");
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_malformed_project_config() {
    let t = Test::with_properties(COMPLETE);
    t.write(".keyprops.toml", "this is not [ toml");

    let output = t.check();
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid .keyprops.toml");
    assert_stderr_contains(&output, "check .keyprops.toml");
}

#[test]
fn test_directory_in_place_of_property_file_is_absent() {
    let t = Test::new();
    std::fs::create_dir(t.path("key.properties")).unwrap();

    let output = t.cmd().args(["check", "--optional"]).output().unwrap();
    assert_success(&output);
}

#[test]
fn test_verbose_logs_to_stderr() {
    let t = Test::with_properties(COMPLETE);

    let output = t.cmd().args(["--verbose", "check"]).output().unwrap();
    assert_success(&output);
    assert_stderr_contains(&output, "loading property file");
    assert_never_printed(&output, "abc123");
    assert_never_printed(&output, "xyz789");
}

#[test]
fn test_default_no_debug_output() {
    let t = Test::with_properties(COMPLETE);

    let output = t.check();
    assert_success(&output);
    let err = stderr(&output);
    assert!(!err.contains("DEBUG"), "unexpected debug output: {}", err);
}

#[test]
fn test_log_env_var() {
    let t = Test::with_properties(COMPLETE);

    let output = t
        .cmd()
        .env("KEYPROPS_LOG", "keyprops=debug")
        .arg("check")
        .output()
        .unwrap();
    assert_success(&output);
    assert_stderr_contains(&output, "signing credentials resolved");
}

#[test]
fn test_completions_bash() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "bash"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "keyprops");
}

#[test]
fn test_missing_key_message_is_verbatim() {
    let t = Test::with_properties(STORE_ONLY);

    t.cmd()
        .arg("check")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("✗ Missing 'keyAlias' in key.properties."))
        .stderr(predicate::str::contains("abc123").not());
}
