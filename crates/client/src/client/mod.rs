//! Vault client and API methods.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Token acquisition or renewal; the token is used exactly as given
//!
//! # Invariants
//! - Each API method performs one request; nothing is retried

pub mod builder;

use secrecy::{ExposeSecret, SecretString};

use crate::endpoints;
use crate::error::Result;
use crate::models::SecretMap;

/// Vault HTTP API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use vault2env_client::VaultClient;
/// use secrecy::SecretString;
///
/// let client = VaultClient::builder()
///     .base_url("https://vault.example:8200".to_string())
///     .token(SecretString::new("hvs.example".to_string().into()))
///     .build()?;
/// let secrets = client.read_secrets("secret/app").await?;
/// ```
#[derive(Debug)]
pub struct VaultClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) token: SecretString,
}

impl VaultClient {
    /// Create a new client builder.
    pub fn builder() -> builder::VaultClientBuilder {
        builder::VaultClientBuilder::new()
    }

    /// Get the normalized base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Read the key/value data stored at `path`.
    pub async fn read_secrets(&self, path: &str) -> Result<SecretMap> {
        endpoints::read_secret(
            &self.http,
            &self.base_url,
            path,
            self.token.expose_secret(),
        )
        .await
    }
}
