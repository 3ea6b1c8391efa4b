//! Centralized constants for the vault2env workspace.
//!
//! This module contains names and defaults used across crates to avoid
//! string duplication between the resolver, the client and the CLI.

// =============================================================================
// Environment Variables
// =============================================================================

/// Fallback environment variable for the Vault server address.
pub const VAULT_ADDR_ENV: &str = "VAULT_ADDR";

/// Fallback environment variable for the Vault token.
pub const VAULT_TOKEN_ENV: &str = "VAULT_TOKEN";

// =============================================================================
// Vault HTTP API
// =============================================================================

/// Versioned API prefix inserted between the server address and the secret path.
pub const VAULT_API_VERSION: &str = "v1";

/// Request header carrying the Vault token.
pub const TOKEN_HEADER: &str = "X-Vault-Token";

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Env File
// =============================================================================

/// Default env file written in the current working directory.
pub const DEFAULT_ENV_FILE: &str = ".env";

// =============================================================================
// Parameter Names
// =============================================================================

/// Raw parameter carrying the Vault server address.
pub const PARAM_ADDR: &str = "addr";

/// Raw parameter carrying the Vault token.
pub const PARAM_TOKEN: &str = "token";

/// Raw parameter carrying the secret path.
pub const PARAM_PATH: &str = "path";

/// Raw parameter enabling overwrite of an existing env file.
pub const PARAM_FORCE: &str = "force";

/// Raw parameter enabling export of secrets into the process environment.
pub const PARAM_POLLUTE: &str = "pollute";

/// Raw parameter enabling per-key merging into a non-empty env file.
pub const PARAM_MERGE: &str = "merge";

/// Raw parameter naming the env file to write.
pub const PARAM_ENV_FILE: &str = "env-file";

/// Raw parameter carrying the transport timeout in seconds.
pub const PARAM_TIMEOUT: &str = "timeout";

/// Raw parameter disabling TLS certificate verification.
pub const PARAM_SKIP_VERIFY: &str = "skip-verify";
