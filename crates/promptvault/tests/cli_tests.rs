//! Integration tests for top-level CLI behavior

#![allow(deprecated)]

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo::CommandCargoExt;
use predicates::prelude::*;
use promptvault_testkit::{seed_category, temp_dir_in_workspace};
use std::process::Command;

fn promptvault() -> Command {
    let mut cmd = Command::cargo_bin("promptvault").unwrap();
    cmd.env_remove("PROMPTVAULT_ROOT").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_lists_commands() {
    promptvault()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("checklist"));
}

#[test]
fn test_version() {
    promptvault()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("promptvault"));
}

#[test]
fn test_welcome_without_subcommand() {
    let temp = temp_dir_in_workspace();
    seed_category(temp.path(), "support");

    promptvault()
        .arg("--root")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "PromptVault Repository Update Assistant",
        ))
        .stdout(predicate::str::contains("1. support"));
}

#[test]
fn test_categories_human() {
    let temp = temp_dir_in_workspace();
    seed_category(temp.path(), "writing");
    seed_category(temp.path(), "coding");

    promptvault()
        .arg("--root")
        .arg(temp.path())
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. coding"))
        .stdout(predicate::str::contains("2. writing"));
}

#[test]
fn test_categories_empty_vault() {
    let temp = temp_dir_in_workspace();

    promptvault()
        .arg("--root")
        .arg(temp.path())
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("No categories found"));
}

#[test]
fn test_categories_json() {
    let temp = temp_dir_in_workspace();
    seed_category(temp.path(), "support");

    let output = promptvault()
        .arg("--root")
        .arg(temp.path())
        .args(["categories", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["count"], 1);
    assert_eq!(json["categories"][0], "support");
}

#[test]
fn test_checklist() {
    promptvault()
        .arg("checklist")
        .assert()
        .success()
        .stdout(predicate::str::contains("COSTAR Analysis"))
        .stdout(predicate::str::contains("└─ At least 3 test cases"))
        .stdout(predicate::str::contains("CONTRIBUTING.md"));
}

#[test]
fn test_checklist_json() {
    let output = promptvault()
        .args(["checklist", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 8);
    assert_eq!(items[0]["item"], "COSTAR Analysis");
}

#[test]
fn test_changelog_with_date() {
    promptvault()
        .args([
            "changelog",
            "--version",
            "1.1.0",
            "--changes",
            "Tighter tone",
            "--date",
            "2024-03-05",
        ])
        .assert()
        .success()
        .stdout("\n### v1.1.0 (2024-03-05)\n- Tighter tone\n");
}

#[test]
fn test_changelog_rejects_bad_date() {
    promptvault()
        .args([
            "changelog",
            "--version",
            "1.1.0",
            "--changes",
            "x",
            "--date",
            "05/03/2024",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn test_invalid_config_is_error() {
    let temp = temp_dir_in_workspace();
    std::fs::write(temp.path().join("vault.toml"), "[prompt\n").unwrap();

    promptvault()
        .arg("--root")
        .arg(temp.path())
        .arg("categories")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("CONFIG_INVALID"));
}
