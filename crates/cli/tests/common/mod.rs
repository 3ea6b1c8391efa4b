//! Shared test utilities for vault2env integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory.
//! - Provide a mocked Vault server serving a fixed secret.
//!
//! Invariants / Assumptions:
//! - `VAULT_ADDR` and `VAULT_TOKEN` from the host never reach the binary.
//! - Every command runs inside its own temporary directory.

use assert_cmd::Command;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[allow(dead_code)]
pub const TOKEN: &str = "T";
#[allow(dead_code)]
pub const SECRET_PATH: &str = "secret/app";

/// Returns a hermetic `vault2env` command running in `dir`.
pub fn vault2env_cmd(dir: &TempDir) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("vault2env");

    cmd.current_dir(dir.path())
        .env_remove("VAULT_ADDR")
        .env_remove("VAULT_TOKEN")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a command with `--addr`, `--token` and `--path` pointing at `server`.
#[allow(dead_code)]
pub fn vault2env_cmd_for(dir: &TempDir, server: &MockServer) -> Command {
    let mut cmd = vault2env_cmd(dir);
    cmd.args(["--addr", &server.uri(), "--token", TOKEN, "--path", SECRET_PATH]);
    cmd
}

/// Starts a Vault mock answering reads of [`SECRET_PATH`] with `data`.
#[allow(dead_code)]
pub async fn vault_with_secrets(data: serde_json::Value) -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/v1/{SECRET_PATH}")))
        .and(header("X-Vault-Token", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "request_id": "5d4b1e2a",
            "lease_id": "",
            "lease_duration": 2764800,
            "renewable": false,
            "data": data,
            "warnings": null
        })))
        .mount(&server)
        .await;

    server
}
