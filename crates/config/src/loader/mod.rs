//! Parameter resolver for flags and environment variables.
//!
//! Responsibilities:
//! - Resolve required connection parameters from an ordered list of sources.
//! - Apply defaults for optional policy flags.
//! - Report every source that was checked when a required value is missing.
//!
//! Does NOT handle:
//! - Parsing the command line (the CLI flattens clap output into [`RawParams`]).
//! - Loading `.env` files; the env file is this tool's output, not its input.
//!
//! Invariants / Assumptions:
//! - Explicit flags take precedence over environment variables.
//! - Empty or whitespace-only values are treated as unset, wherever they come from.

mod env;
mod error;
mod resolve;
mod source;

pub use env::env_var_or_none;
pub use error::ConfigError;
pub use resolve::{RawParams, resolve};
pub use source::Source;

#[cfg(test)]
mod tests;
