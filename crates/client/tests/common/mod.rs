//! Common test utilities for integration tests.
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)
//! - Test-specific assertions or test logic

// Re-export commonly used types for test convenience
// These are used via `use common::*;` in test files
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use vault2env_client::endpoints;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use secrecy::SecretString;
use vault2env_client::VaultClient;

/// Build a client pointed at the mock server with token `T`.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> VaultClient {
    VaultClient::builder()
        .base_url(server.uri())
        .token(SecretString::new("T".to_string().into()))
        .build()
        .expect("client should build")
}
