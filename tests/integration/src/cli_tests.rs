//! CLI-level tests driving the `rulesync` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, text: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, text).unwrap();
}

fn setup_repo() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    write(
        root,
        "resources/default-config.yaml",
        "version: 1.0\nvendor_files:\n  cursor: .cursor/rules\n  claude: CLAUDE.md\n",
    );
    write(
        root,
        "rules/auto-rules/style.mdc",
        "---\ndescription: Style\nalwaysApply: true\nglobs: []\n---\n# Style\nUse tabs.",
    );
    write(
        root,
        "rules/contextual-rules/python.mdc",
        "---\ndescription: Python conventions\nglobs: \"*.py\"\n---\n# Python",
    );

    dir
}

fn rulesync() -> Command {
    Command::cargo_bin("rulesync").unwrap()
}

#[test]
fn test_generate_single_vendor() {
    let dir = setup_repo();
    let root = dir.path();

    rulesync()
        .args(["generate", "--vendor", "claude"])
        .arg("--input")
        .arg(root)
        .arg("--output")
        .arg(root)
        .assert()
        .success()
        .stdout(predicate::str::contains("CLAUDE.md"));

    let manifest = fs::read_to_string(root.join("CLAUDE.md")).unwrap();
    assert!(manifest.contains("- @rules/auto-rules/style.mdc"));
}

#[test]
fn test_generate_dry_run_creates_nothing() {
    let dir = setup_repo();
    let root = dir.path();

    rulesync()
        .args(["generate", "--vendor", "claude", "--dry-run"])
        .arg("--input")
        .arg(root)
        .arg("--output")
        .arg(root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));

    assert!(!root.join("CLAUDE.md").exists());
}

#[test]
fn test_generate_all_uses_default_vendors() {
    let dir = setup_repo();
    let root = dir.path();

    rulesync()
        .arg("generate")
        .arg("--input")
        .arg(root)
        .arg("--output")
        .arg(root)
        .assert()
        .success();

    // Default vendor list: cursor, claude, continue, copilot.
    assert!(root.join(".cursor/rules/auto-style.mdc").symlink_metadata().is_ok());
    assert!(root.join("CLAUDE.md").exists());
    assert!(root.join(".continue/rules/auto-style.md").symlink_metadata().is_ok());
    assert!(root.join(".github/copilot-instructions.md").exists());
    assert!(!root.join("GEMINI.md").exists());
}

#[test]
fn test_validate_clean_rules_exits_zero() {
    let dir = setup_repo();

    rulesync()
        .arg("validate")
        .arg("--input")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No issues found"));
}

#[test]
fn test_validate_broken_rule_exits_nonzero() {
    let dir = setup_repo();
    write(
        dir.path(),
        "rules/auto-rules/broken.mdc",
        "---\ndescription: Broken\nalwaysApply: false\nglobs: []\n---\nx",
    );

    rulesync()
        .arg("validate")
        .arg("--input")
        .arg(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("alwaysApply: true"));
}

#[test]
fn test_generate_aborts_on_validation_errors() {
    let dir = setup_repo();
    let root = dir.path();
    write(
        root,
        "rules/auto-rules/broken.mdc",
        "---\ndescription: Broken\nalwaysApply: false\nglobs: []\n---\nx",
    );

    rulesync()
        .args(["generate", "--vendor", "claude"])
        .arg("--input")
        .arg(root)
        .arg("--output")
        .arg(root)
        .assert()
        .code(1);

    // Validation failed before any writes.
    assert!(!root.join("CLAUDE.md").exists());
}

#[test]
fn test_list_shows_rules_and_counts() {
    let dir = setup_repo();

    rulesync()
        .arg("list")
        .arg("--input")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("style"))
        .stdout(predicate::str::contains("python"))
        .stdout(predicate::str::contains("Total: 1 auto-rules, 1 contextual rules"));
}

#[test]
fn test_missing_config_path_fails() {
    let dir = setup_repo();

    rulesync()
        .arg("validate")
        .arg("--input")
        .arg(dir.path())
        .args(["--config-path", "/nonexistent/config.yaml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_unsupported_config_version_fails() {
    let dir = setup_repo();
    write(
        dir.path(),
        "resources/default-config.yaml",
        "version: 2.0\nvendor_files:\n  cursor: a\n  claude: b\n",
    );

    rulesync()
        .arg("validate")
        .arg("--input")
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unsupported config version"));
}
