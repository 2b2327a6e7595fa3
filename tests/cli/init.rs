//! Tests for `keyprops init`.

use crate::support::*;

#[test]
fn test_init_writes_template() {
    let t = Test::new();

    let output = t.init();
    assert_success(&output);

    let content = t.read("key.properties");
    assert!(content.contains("storeFile="));
    assert!(content.contains("keyPassword="));
    assert!(t.read(".gitignore").contains("key.properties"));
}

#[test]
fn test_init_template_still_fails_check() {
    let t = Test::new();
    assert_success(&t.init());

    let output = t.check();
    assert_failure(&output);
    assert_stderr_contains(&output, "Missing 'storeFile' in key.properties.");
}

#[test]
fn test_init_refuses_overwrite() {
    let t = Test::with_properties(COMPLETE);

    let output = t.init();
    assert_failure(&output);
    assert_stderr_contains(&output, "already exists");
    assert_stderr_contains(&output, "keyprops init --force");
    assert_eq!(t.read("key.properties"), COMPLETE);
}

#[test]
fn test_init_force_overwrites() {
    let t = Test::with_properties(COMPLETE);

    let output = t.cmd().args(["init", "--force"]).output().unwrap();
    assert_success(&output);
    assert!(!t.read("key.properties").contains("abc123"));
}

#[test]
fn test_init_honors_project_config() {
    let t = Test::new();
    t.write(".keyprops.toml", "[signing]\nfile = \"android/key.properties\"\n");

    let output = t.init();
    assert_success(&output);
    assert!(t.path("android/key.properties").exists());
}

#[test]
fn test_init_custom_file_is_gitignored() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["init", "--file", "signing/release.properties"])
        .output()
        .unwrap();
    assert_success(&output);

    assert!(t.path("signing/release.properties").exists());
    let gitignore = t.read(".gitignore");
    assert!(
        gitignore.lines().any(|l| l == "signing/release.properties"),
        "missing entry, got: {}",
        gitignore
    );
}
