use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let mut cmd = Command::cargo_bin("zakboek").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("process"))
        .stdout(predicate::str::contains("register"))
        .stdout(predicate::str::contains("ledger"));
}

#[test]
fn test_version_flag() {
    let mut cmd = Command::cargo_bin("zakboek").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("zakboek"));
}

#[test]
fn test_unknown_command_fails() {
    let mut cmd = Command::cargo_bin("zakboek").unwrap();
    cmd.arg("shake").assert().failure();
}
