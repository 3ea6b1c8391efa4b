//! Tests for parameter resolution.
//!
//! Responsibilities:
//! - Test precedence between explicit flags and environment variables.
//! - Test error messages for missing required parameters.
//! - Test defaults and pass-through of optional parameters.
//!
//! Invariants:
//! - Tests use `serial_test` and `temp-env` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.

use std::sync::Mutex;

use crate::loader::resolve::RawParams;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Build raw parameters from string pairs.
pub fn raw(pairs: &[(&str, &str)]) -> RawParams {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Runs `f` with both Vault fallback variables removed.
pub fn without_vault_env<F: FnOnce()>(f: F) {
    temp_env::with_vars_unset(["VAULT_ADDR", "VAULT_TOKEN"], f);
}
