use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn missing_command_argument_fails_with_usage() {
    Command::cargo_bin("leo_report_cli")
        .expect("binary exists")
        .assert()
        .failure()
        .stderr(predicate::str::contains("usage: leo_report_cli"));
}

#[test]
fn start_command_prints_readiness_message() {
    Command::cargo_bin("leo_report_cli")
        .expect("binary exists")
        .arg("/start")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bot is running"));
}

#[test]
fn malformed_leo_command_prints_usage_hint() {
    Command::cargo_bin("leo_report_cli")
        .expect("binary exists")
        .args(["--plain", "/leo13"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: /leoMM"));
}
