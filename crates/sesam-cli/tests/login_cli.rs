//! End-to-end tests for the headless login command.
//!
//! Drives the real binary against a stub portal and checks the reported
//! outcome for each row of the status table.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a temp SESAM_HOME directory for test isolation.
fn temp_sesam_home() -> TempDir {
    TempDir::new().expect("create temp sesam home")
}

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

async fn stub_portal(status: u16) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(status))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_login_success_reports_authorized() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_sesam_home();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(serde_json::json!({
            "username": "alice",
            "password": "correct",
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    cargo_bin_cmd!("sesam")
        .env("SESAM_HOME", home.path())
        .env("SESAM_BASE_URL", server.uri())
        .args(["login", "-u", "alice", "-p", "correct"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Authorized"));
}

#[tokio::test]
async fn test_login_401_reports_unauthorized() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_sesam_home();
    let server = stub_portal(401).await;

    cargo_bin_cmd!("sesam")
        .env("SESAM_HOME", home.path())
        .env("SESAM_BASE_URL", server.uri())
        .args(["login", "-u", "alice", "-p", "wrong"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unauthorized"));
}

#[tokio::test]
async fn test_login_406_reports_not_acceptable() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_sesam_home();
    let server = stub_portal(406).await;

    cargo_bin_cmd!("sesam")
        .env("SESAM_HOME", home.path())
        .env("SESAM_BASE_URL", server.uri())
        .args(["login", "-u", "alice", "-p", "correct"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not acceptable"));
}

#[tokio::test]
async fn test_login_500_reports_internal_server_error() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_sesam_home();
    let server = stub_portal(500).await;

    cargo_bin_cmd!("sesam")
        .env("SESAM_HOME", home.path())
        .env("SESAM_BASE_URL", server.uri())
        .args(["login", "-u", "alice", "-p", "correct"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Internal server error"));
}

#[tokio::test]
async fn test_login_unmapped_status_reports_unknown_error() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_sesam_home();
    let server = stub_portal(418).await;

    cargo_bin_cmd!("sesam")
        .env("SESAM_HOME", home.path())
        .env("SESAM_BASE_URL", server.uri())
        .args(["login", "-u", "alice", "-p", "correct"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown error"));
}

#[tokio::test]
async fn test_login_unreachable_portal_reports_connection_error() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_sesam_home();

    // Reserve an address, then shut the server down so the port refuses.
    let uri = {
        let server = MockServer::start().await;
        server.uri()
    };

    cargo_bin_cmd!("sesam")
        .env("SESAM_HOME", home.path())
        .env("SESAM_BASE_URL", uri)
        .args(["login", "-u", "alice", "-p", "correct"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Connection error"));
}

/// Two identical runs against the same stub end the same way both times.
#[tokio::test]
async fn test_login_is_idempotent_across_runs() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_sesam_home();
    let server = stub_portal(200).await;

    for _ in 0..2 {
        cargo_bin_cmd!("sesam")
            .env("SESAM_HOME", home.path())
            .env("SESAM_BASE_URL", server.uri())
            .args(["login", "-u", "alice", "-p", "correct"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Authorized"));
    }
}

#[test]
fn test_config_path_honors_sesam_home() {
    let home = temp_sesam_home();

    cargo_bin_cmd!("sesam")
        .env("SESAM_HOME", home.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_init_creates_file_once() {
    let home = temp_sesam_home();

    cargo_bin_cmd!("sesam")
        .env("SESAM_HOME", home.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    assert!(home.path().join("config.toml").exists());

    // Second init refuses to overwrite.
    cargo_bin_cmd!("sesam")
        .env("SESAM_HOME", home.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
