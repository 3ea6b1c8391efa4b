//! Error types for parameter resolution.
//!
//! Invariants:
//! - Every variant names the parameter it concerns.
//! - Messages never include the value of the Vault token.

use thiserror::Error;

/// Errors that can occur while resolving request parameters.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required parameter was not found in any of its sources.
    ///
    /// `hint` lists the sources that were checked, in priority order.
    #[error("You must provide {hint}.")]
    MissingParameter { field: &'static str, hint: String },

    #[error("Invalid value for --{param}: {message}")]
    InvalidValue { param: &'static str, message: String },
}
