use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("sesam")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("login"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("base-url"));
}

#[test]
fn test_login_help_shows_credential_args() {
    cargo_bin_cmd!("sesam")
        .args(["login", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("username"))
        .stdout(predicate::str::contains("password"));
}

#[test]
fn test_config_help_shows_subcommands() {
    cargo_bin_cmd!("sesam")
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("sesam")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1"));
}
