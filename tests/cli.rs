use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn missing_server_prints_usage() {
    Command::cargo_bin("nfshell")
        .unwrap()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("-server is required"))
        .stderr(predicate::str::contains("Usage of"));
}

#[test]
fn empty_server_prints_usage() {
    Command::cargo_bin("nfshell")
        .unwrap()
        .args(["-server", ""])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage of"));
}

#[test]
fn bad_flag_value_prints_usage() {
    Command::cargo_bin("nfshell")
        .unwrap()
        .args(["-server", "filer", "-gid", "staff"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid value \"staff\" for flag -gid"));
}

#[test]
fn help_goes_to_stdout() {
    Command::cargo_bin("nfshell")
        .unwrap()
        .arg("-help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage of"))
        .stdout(predicate::str::contains("server"));
}

#[cfg(not(feature = "libnfs"))]
#[test]
fn connection_failure_is_reported() {
    Command::cargo_bin("nfshell")
        .unwrap()
        .args(["-server", "filer:2049"])
        .write_stdin("ls\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Cannot connect to filer:2049"));
}
