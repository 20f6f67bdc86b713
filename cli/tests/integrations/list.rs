use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_cli_list_collections() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("shop.dry"),
        "INTENT: Order\nSLOT: drink\n(a|one) <drink>\nENTITY: Drink\ntea|coffee\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("dryvac").unwrap();
    cmd.arg("list").arg(temp_dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Workspace contains 1 files, 2 collections"))
        .stdout(predicate::str::contains("Order"))
        .stdout(predicate::str::contains("Drink"))
        .stdout(predicate::str::contains("Sentences"));
}

#[test]
fn test_cli_list_empty_directory() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("dryvac").unwrap();
    cmd.arg("list").arg(temp_dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Workspace contains 0 files, 0 collections"));
}

#[test]
fn test_cli_list_missing_path() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("dryvac").unwrap();
    cmd.arg("list").arg(temp_dir.path().join("nowhere"));

    cmd.assert().failure().stderr(predicate::str::contains("Error"));
}
