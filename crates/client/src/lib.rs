//! Vault KV HTTP client.
//!
//! This crate provides a small, type-safe client for reading a secret from
//! the HashiCorp Vault HTTP API and returning its key/value data.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;

pub use client::VaultClient;
pub use client::builder::VaultClientBuilder;
pub use error::{ClientError, Result};
pub use models::SecretMap;
