//! Secret read endpoint.

use reqwest::Client;
use tracing::{debug, warn};
use vault2env_config::constants::TOKEN_HEADER;

use crate::endpoints::send_request;
use crate::endpoints::url_encoding::secret_url;
use crate::error::{ClientError, Result};
use crate::models::{SecretMap, SecretResponse};

/// Read the secret stored at `path` and return its `data` mapping.
pub async fn read_secret(
    client: &Client,
    base_url: &str,
    path: &str,
    token: &str,
) -> Result<SecretMap> {
    let url = secret_url(base_url, path);
    debug!(url = %url, "Reading secret");

    let builder = client
        .get(&url)
        .header(TOKEN_HEADER, token)
        .header("Accept", "application/json");
    let response = send_request(builder).await?;

    let body = response.text().await?;
    let envelope: SecretResponse =
        serde_json::from_str(&body).map_err(|e| ClientError::ResponseParse(e.to_string()))?;

    if let Some(warnings) = &envelope.warnings {
        for warning in warnings {
            warn!(path, "Vault warning: {}", warning);
        }
    }
    debug!(
        request_id = envelope.request_id.as_deref().unwrap_or(""),
        keys = envelope.data.len(),
        "Secret read"
    );

    envelope.into_secret_map()
}
