//! Tests for `keyprops run`.

use crate::support::*;

#[cfg(unix)]
const PRINT_ENV: &str = r#"printf '%s|%s|%s|%s' "$KEYPROPS_STORE_FILE" "$KEYPROPS_STORE_PASSWORD" "$KEYPROPS_KEY_ALIAS" "$KEYPROPS_KEY_PASSWORD""#;

#[cfg(unix)]
#[test]
fn test_run_injects_credentials() {
    let t = Test::with_properties(COMPLETE);

    let output = t.run(&["sh", "-c", PRINT_ENV]);
    assert_success(&output);
    assert_eq!(stdout(&output), "./release.keystore|abc123|upload|xyz789");
}

#[cfg(unix)]
#[test]
fn test_run_uses_last_duplicate_value() {
    let t = Test::with_properties(COMPLEX);

    let output = t.run(&["sh", "-c", PRINT_ENV]);
    assert_success(&output);
    assert_eq!(stdout(&output), "./../keys/upload.jks|p@ss=w:rd#1|upload|xyz789");
}

#[cfg(unix)]
#[test]
fn test_run_propagates_exit_code() {
    let t = Test::with_properties(COMPLETE);

    let output = t.run(&["sh", "-c", "exit 7"]);
    assert_eq!(output.status.code(), Some(7));
}

#[test]
fn test_run_does_not_start_command_on_missing_key() {
    let t = Test::with_properties(STORE_ONLY);

    let output = t.run(&["sh", "-c", "touch started"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "Missing 'keyAlias' in key.properties.");
    assert!(!t.path("started").exists());
}

#[cfg(unix)]
#[test]
fn test_run_optional_without_file_runs_unsigned() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("KEYPROPS_STORE_PASSWORD", "leaked")
        .args(["run", "--optional", "--", "sh", "-c", PRINT_ENV])
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(stdout(&output), "|||");
}

#[test]
fn test_run_requires_command() {
    let t = Test::with_properties(COMPLETE);

    let output = t.cmd().arg("run").output().unwrap();
    assert_failure(&output);
}
