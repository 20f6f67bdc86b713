use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_expand_alternation() {
    let mut cmd = Command::cargo_bin("dryvac").unwrap();
    cmd.arg("expand").arg("(turn|switch) on");

    cmd.assert().success().stdout("switch on\nturn on\n");
}

#[test]
fn test_cli_expand_with_variables() {
    let mut cmd = Command::cargo_bin("dryvac").unwrap();
    cmd.arg("expand")
        .arg("$greeting world")
        .arg("--var")
        .arg("greeting=hi|hello");

    cmd.assert().success().stdout("hello world\nhi world\n");
}

#[test]
fn test_cli_expand_no_order() {
    let mut cmd = Command::cargo_bin("dryvac").unwrap();
    cmd.arg("expand").arg("(b|a)").arg("--no-order");

    let output = cmd.assert().success().get_output().stdout.clone();
    let mut lines: Vec<String> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();
    lines.sort();
    assert_eq!(lines, vec!["a", "b"]);
}

#[test]
fn test_cli_expand_checks_declared_slots() {
    let mut cmd = Command::cargo_bin("dryvac").unwrap();
    cmd.arg("expand")
        .arg("play <song> by <artist>")
        .arg("--slot")
        .arg("song");

    cmd.assert()
        .success()
        .stdout("play <song> by <artist>\n")
        .stderr(predicate::str::contains("Undefined slot 'artist'"));
}

#[test]
fn test_cli_expand_rejects_bad_variable() {
    let mut cmd = Command::cargo_bin("dryvac").unwrap();
    cmd.arg("expand").arg("x").arg("--var").arg("novalue");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("expected name=definition"));
}
