//! Parameter resolution for vault2env.
//!
//! This crate turns the raw key/value parameters supplied by the command line
//! into validated [`RequestParameters`], falling back to the standard Vault
//! environment variables where an explicit value is missing.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, RawParams, Source, env_var_or_none, resolve};
pub use types::RequestParameters;
