//! Resolved request parameters.
//!
//! Responsibilities:
//! - Hold the validated connection, request and merge-policy settings for one run.
//!
//! Does NOT handle:
//! - Resolving values from flags or environment variables (see `loader`).
//!
//! Invariants:
//! - `addr`, `token` and `path` are non-empty once a value of this type exists.
//! - The token is only reachable through `ExposeSecret`; `Debug` output redacts it.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;

/// Parameters for a single retrieval run.
///
/// Boolean fields are enabled by a bare flag or by `true`, `1`, `yes` or `on`
/// (any case). `false`, `0`, `no` and `off` disable them. Any other value also
/// leaves the field `false` and is kept verbatim in [`extras`](Self::extras)
/// under the parameter name, so callers can still see what was passed.
#[derive(Debug, Clone)]
pub struct RequestParameters {
    /// Vault server address, e.g. `https://vault.example:8200`.
    pub addr: String,
    /// Vault token sent in the `X-Vault-Token` header.
    pub token: SecretString,
    /// Secret path below the versioned API prefix, e.g. `secret/app`.
    pub path: String,
    /// Overwrite an existing env file and resolve key conflicts in favor of Vault.
    pub force: bool,
    /// Export retrieved secrets into the current process environment.
    pub pollute: bool,
    /// Merge into a non-empty env file key by key instead of refusing to touch it.
    pub merge: bool,
    /// Env file to create or update.
    pub env_file: PathBuf,
    /// Optional transport timeout.
    pub timeout: Option<Duration>,
    /// Skip TLS certificate verification.
    pub skip_verify: bool,
    /// Every raw parameter that is not one of the fields above, unmodified.
    pub extras: BTreeMap<String, String>,
}
