//! Smoke tests to verify command module wiring

use assert_cmd::Command;
use predicates::prelude::*;

// === Top-level Tests ===

#[test]
fn test_help() {
    let mut cmd = Command::cargo_bin("plantd").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("plant inventory"));
}

#[test]
fn test_requires_subcommand() {
    let mut cmd = Command::cargo_bin("plantd").unwrap();
    cmd.assert().failure();
}

// === Serve Command Tests ===

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("plantd").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Address to bind"))
        .stdout(predicate::str::contains("Database URL"));
}

// === Migrate Command Tests ===

#[test]
fn test_migrate_help() {
    let mut cmd = Command::cargo_bin("plantd").unwrap();
    cmd.arg("migrate").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Database URL"));
}

#[test]
fn test_migrate_creates_database() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("plants.db");
    let url = format!("sqlite://{}", db_path.display());

    let mut cmd = Command::cargo_bin("plantd").unwrap();
    cmd.arg("migrate").arg("--database-url").arg(&url);

    cmd.assert().success();
    assert!(db_path.exists());
}
