//! Vault HTTP API endpoint implementations.

mod request;
mod secrets;
pub mod url_encoding;

pub use request::send_request;
pub use secrets::read_secret;
