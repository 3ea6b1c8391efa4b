//! Single-attempt request execution.
//!
//! Vault reads are issued exactly once: transport failures are returned
//! as-is and non-success statuses are turned into [`ClientError::ApiError`].

use reqwest::{RequestBuilder, Response};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::VaultErrors;

/// Sends an HTTP request and maps non-success responses to errors.
///
/// # Errors
///
/// Returns `ClientError::HttpError` when the request cannot be sent and
/// `ClientError::ApiError` for any non-2xx status. The API error message
/// joins Vault's `errors` array when the body has one, otherwise it is the
/// raw body.
pub async fn send_request(builder: RequestBuilder) -> Result<Response> {
    let response = builder.send().await?;

    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    debug!(status, url = %url, "Vault returned a non-success status");

    let message = match serde_json::from_str::<VaultErrors>(&body) {
        Ok(v) if !v.errors.is_empty() => v.errors.join("; "),
        _ => body,
    };

    Err(ClientError::ApiError {
        status,
        url,
        message,
    })
}
