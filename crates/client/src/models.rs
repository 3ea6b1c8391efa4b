//! Data models for Vault API responses.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{ClientError, Result};

/// Secret name to secret value, in sorted key order.
pub type SecretMap = BTreeMap<String, String>;

/// Envelope returned by `GET /v1/<path>`.
///
/// Only `data` is used; the remaining fields are kept for logging.
#[derive(Debug, Clone, Deserialize)]
pub struct SecretResponse {
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub lease_id: Option<String>,
    #[serde(default)]
    pub lease_duration: Option<u64>,
    #[serde(default)]
    pub renewable: Option<bool>,
    pub data: Map<String, Value>,
    #[serde(default)]
    pub warnings: Option<Vec<String>>,
}

impl SecretResponse {
    /// Convert the `data` object into a [`SecretMap`].
    ///
    /// Strings are taken verbatim; numbers and booleans use their JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NonScalarSecret`] for the first (in key order)
    /// value that is an object, an array or null.
    pub fn into_secret_map(self) -> Result<SecretMap> {
        let data: BTreeMap<String, Value> = self.data.into_iter().collect();

        data.into_iter()
            .map(|(key, value)| match value {
                Value::String(s) => Ok((key, s)),
                Value::Number(n) => Ok((key, n.to_string())),
                Value::Bool(b) => Ok((key, b.to_string())),
                Value::Null | Value::Array(_) | Value::Object(_) => {
                    Err(ClientError::NonScalarSecret { key })
                }
            })
            .collect()
    }
}

/// Error body returned by Vault for non-success responses.
#[derive(Debug, Clone, Deserialize)]
pub struct VaultErrors {
    #[serde(default)]
    pub errors: Vec<String>,
}
