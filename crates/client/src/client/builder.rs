//! Client builder for constructing [`VaultClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (base_url, token)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeout, TLS verification)
//!
//! # Invariants
//! - `base_url` and `token` must be provided before calling `build()`
//! - The base URL is an absolute `http` or `https` URL with no trailing slash
//! - No timeout is applied unless one is set explicitly

use std::time::Duration;

use secrecy::SecretString;
use url::Url;
use vault2env_config::RequestParameters;
use vault2env_config::constants::DEFAULT_MAX_REDIRECTS;

use crate::client::VaultClient;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`VaultClient`].
#[derive(Default)]
pub struct VaultClientBuilder {
    base_url: Option<String>,
    token: Option<SecretString>,
    skip_verify: bool,
    timeout: Option<Duration>,
}

impl VaultClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the address of the Vault server, e.g. `https://vault.example:8200`.
    ///
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the token sent with every request.
    pub fn token(mut self, token: SecretString) -> Self {
        self.token = Some(token);
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this against development servers with self-signed certificates.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set a transport timeout for the whole request.
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create a client builder from resolved request parameters.
    pub fn from_params(mut self, params: &RequestParameters) -> Self {
        self.base_url = Some(params.addr.clone());
        self.token = Some(params.token.clone());
        self.skip_verify = params.skip_verify;
        self.timeout = params.timeout;
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    ///
    /// - `"https://vault.example:8200/"` -> `"https://vault.example:8200"`
    /// - `"https://vault.example:8200//"` -> `"https://vault.example:8200"`
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    fn validate_base_url(url: &str) -> Result<()> {
        let parsed = Url::parse(url).map_err(|e| ClientError::InvalidUrl(format!("{url}: {e}")))?;
        match parsed.scheme() {
            "http" | "https" => Ok(()),
            other => Err(ClientError::InvalidUrl(format!(
                "{url}: unsupported scheme '{other}'"
            ))),
        }
    }

    /// Build the [`VaultClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` is missing or not an
    /// absolute http(s) URL, [`ClientError::MissingToken`] if no token was
    /// provided, and `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<VaultClient> {
        let base_url = self
            .base_url
            .map(Self::normalize_base_url)
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        Self::validate_base_url(&base_url)?;

        let token = self.token.ok_or(ClientError::MissingToken)?;

        let mut http_builder = reqwest::Client::builder()
            .user_agent(concat!("vault2env/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if let Some(timeout) = self.timeout {
            http_builder = http_builder.timeout(timeout);
        }

        if self.skip_verify {
            if base_url.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        Ok(VaultClient {
            http,
            base_url,
            token,
        })
    }
}
