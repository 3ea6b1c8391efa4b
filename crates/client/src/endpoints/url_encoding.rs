//! URL construction for Vault secret paths.
//!
//! Secret paths are slash-delimited (`secret/team/app`). Each segment is
//! percent-encoded on its own, so a segment can never introduce a query
//! string, a fragment or an extra path level, while the slashes between
//! segments are kept.
//!
//! # Example
//!
//! ```
//! use vault2env_client::endpoints::url_encoding::secret_url;
//!
//! let url = secret_url("https://vault.example/", "/secret/app/");
//! assert_eq!(url, "https://vault.example/v1/secret/app");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};
use vault2env_config::constants::VAULT_API_VERSION;

/// Characters that must be percent-encoded in a Vault path segment.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for use as a single URL path segment.
///
/// ```
/// use vault2env_client::endpoints::url_encoding::encode_path_segment;
///
/// assert_eq!(encode_path_segment("my app"), "my%20app");
/// assert_eq!(encode_path_segment("a?b"), "a%3Fb");
/// ```
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}

/// Build `{base_url}/v1/{path}` with exactly one slash between segments.
///
/// Trailing slashes on `base_url` and empty segments in `path` (leading,
/// trailing or doubled slashes) are dropped.
pub fn secret_url(base_url: &str, path: &str) -> String {
    let encoded: Vec<String> = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(encode_path_segment)
        .collect();

    format!(
        "{}/{}/{}",
        base_url.trim_end_matches('/'),
        VAULT_API_VERSION,
        encoded.join("/")
    )
}
