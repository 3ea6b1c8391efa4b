//! Error types for the Vault client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while reading secrets from Vault.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport-level failure (DNS, connection, TLS, timeout).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success response from Vault.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// The response body is not valid JSON or lacks the secret envelope.
    #[error("Error while parsing JSON response from vault: {0}")]
    ResponseParse(String),

    /// A secret value cannot be represented as a single env-file value.
    #[error("Secret '{key}' is not a string, number or boolean")]
    NonScalarSecret { key: String },

    /// Invalid Vault address.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The client was built without a token.
    #[error("A Vault token is required")]
    MissingToken,
}
