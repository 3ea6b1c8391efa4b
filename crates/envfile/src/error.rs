//! Error types for the env file merger.
//!
//! Invariants:
//! - Messages name keys and paths but never secret values.
//! - Every variant except `Io` is raised before anything is written.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while merging secrets into an env file.
#[derive(Error, Debug)]
pub enum MergeError {
    /// Nothing to write.
    #[error("No secrets to write!")]
    EmptySecretSet,

    /// The target already has content and neither force nor merge was requested.
    #[error("{} file already exists, use --force to overwrite.", .path.display())]
    FileExists { path: PathBuf },

    /// Keys already present in the target with a different value.
    #[error(
        "{} already sets {} to a different value, use --force to overwrite.",
        .path.display(),
        .keys.join(", ")
    )]
    KeyConflict { path: PathBuf, keys: Vec<String> },

    /// A secret name that the env file format cannot hold.
    #[error("Secret name '{key}' is not a valid environment variable name")]
    InvalidKey { key: String },

    /// A secret value that would not survive a write/read cycle.
    #[error("Secret '{key}' contains a line break or NUL byte and cannot be written to an env file")]
    UnrepresentableValue { key: String },

    /// Filesystem failure while reading or writing the target.
    #[error("Failed to access {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_exists_message() {
        let err = MergeError::FileExists {
            path: PathBuf::from(".env"),
        };
        assert_eq!(
            err.to_string(),
            ".env file already exists, use --force to overwrite."
        );
    }

    #[test]
    fn test_key_conflict_lists_keys() {
        let err = MergeError::KeyConflict {
            path: PathBuf::from(".env"),
            keys: vec!["A".to_string(), "B".to_string()],
        };
        assert_eq!(
            err.to_string(),
            ".env already sets A, B to a different value, use --force to overwrite."
        );
    }
}
