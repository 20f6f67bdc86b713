use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SHOP: &str = r#"
INVOCATION: coffee shop
drink = coffee|tea

INTENT: Order
SLOT: drink :Drink
[please] (get|bring) me <drink>

ENTITY: Drink
$drink
"#;

#[test]
fn test_cli_build_alexa() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("shop.dry");
    fs::write(&source, SHOP).unwrap();
    let out = temp_dir.path().join("alexa");
    fs::create_dir(&out).unwrap();

    let mut cmd = Command::cargo_bin("dryvac").unwrap();
    cmd.arg("build").arg(&source).arg("--alexa").arg(&out);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Compiled 1 files: 1 intents, 1 entities, 6 sentences",
        ))
        .stdout(predicate::str::contains("en-US.json"));

    let written = fs::read_to_string(out.join("en-US.json")).unwrap();
    assert!(written.contains("\"invocationName\": \"coffee shop\""));
    assert!(written.contains("please bring me {drink}"));
}

#[test]
fn test_cli_build_dialogflow_from_directory() {
    let temp_dir = TempDir::new().unwrap();
    let project = temp_dir.path().join("project");
    fs::create_dir_all(project.join("nested")).unwrap();
    fs::write(project.join("vocabulary.dry"), "drink = coffee|tea\n").unwrap();
    fs::write(
        project.join("nested/order.dry"),
        "INTENT: Order\nSLOT: drink\n$drink <drink>\n",
    )
    .unwrap();
    fs::write(project.join("notes.txt"), "not a source\n").unwrap();
    let out = temp_dir.path().join("agent");
    fs::create_dir(&out).unwrap();

    let mut cmd = Command::cargo_bin("dryvac").unwrap();
    cmd.arg("build").arg(&project).arg("-d").arg(&out);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Compiled 2 files"));

    assert!(out.join("intents/Order.json").is_file());
    let user_says = fs::read_to_string(out.join("intents/Order_usersays_en.json")).unwrap();
    assert!(user_says.contains("\"alias\": \"drink\""));
}

#[test]
fn test_cli_build_requires_an_output() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("shop.dry");
    fs::write(&source, SHOP).unwrap();

    let mut cmd = Command::cargo_bin("dryvac").unwrap();
    cmd.arg("build").arg(&source);

    cmd.assert().failure();
}

#[test]
fn test_cli_build_missing_output_folder() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("shop.dry");
    fs::write(&source, SHOP).unwrap();

    let mut cmd = Command::cargo_bin("dryvac").unwrap();
    cmd.arg("build")
        .arg(&source)
        .arg("-a")
        .arg(temp_dir.path().join("missing"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Output folder does not exist"));
}

#[test]
fn test_cli_build_reports_parse_errors() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("broken.dry");
    fs::write(&source, "INTENT: Order\nSLOT:\n").unwrap();

    let mut cmd = Command::cargo_bin("dryvac").unwrap();
    cmd.arg("build").arg(&source).arg("-a").arg(temp_dir.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Malformed SLOT: declaration"));
    assert!(!temp_dir.path().join("en-US.json").exists());
}

#[test]
fn test_cli_build_warns_about_undefined_slots() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("play.dry");
    fs::write(&source, "INTENT: Play\nplay <song>\n").unwrap();

    let mut cmd = Command::cargo_bin("dryvac").unwrap();
    cmd.arg("build").arg(&source).arg("-a").arg(temp_dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1 warnings"))
        .stderr(predicate::str::contains("Undefined slot 'song'"));
}

#[test]
fn test_cli_build_verbose_logs_progress() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("shop.dry");
    fs::write(&source, SHOP).unwrap();

    let mut quiet = Command::cargo_bin("dryvac").unwrap();
    quiet
        .env_remove("RUST_LOG")
        .arg("build")
        .arg(&source)
        .arg("-a")
        .arg(temp_dir.path());
    quiet
        .assert()
        .success()
        .stderr(predicate::str::contains("Reading").not());

    let mut verbose = Command::cargo_bin("dryvac").unwrap();
    verbose
        .env_remove("RUST_LOG")
        .arg("-v")
        .arg("build")
        .arg(&source)
        .arg("-a")
        .arg(temp_dir.path());
    verbose
        .assert()
        .success()
        .stderr(predicate::str::contains("Reading"))
        .stderr(predicate::str::contains("shop.dry"))
        .stderr(predicate::str::contains("Wrote 1 output files"));
}
