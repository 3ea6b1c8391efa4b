//! Merge a secret set into the target env file.
//!
//! Responsibilities:
//! - Guard against empty input, unrepresentable secrets, existing files and
//!   conflicting keys.
//! - Combine the secrets with the existing file and write the result.
//! - Export the secrets into an [`EnvSink`] when requested.
//!
//! Invariants:
//! - Every guard runs before anything is written; a failed merge leaves the
//!   file and the sink untouched.
//! - The sink only sees the secrets, never keys that were already in the file.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::MergeError;
use crate::format::{EnvFile, SetOutcome, is_representable_value, is_valid_key};
use crate::sink::EnvSink;
use crate::store::EnvFileStore;

/// Overwrite and export behavior for one merge call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergePolicy {
    /// Overwrite an existing file and any differing keys in it.
    pub force: bool,
    /// Export the secrets into the sink after writing.
    pub pollute: bool,
    /// Merge into an existing file, failing on differing keys unless `force`.
    pub merge: bool,
}

/// Keys touched by a merge, each list in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    pub added: Vec<String>,
    pub overwritten: Vec<String>,
    pub unchanged: Vec<String>,
}

/// Merge `secrets` into the file behind `store`.
pub fn merge<S, E>(
    secrets: &BTreeMap<String, String>,
    policy: MergePolicy,
    store: &S,
    sink: &mut E,
) -> Result<MergeOutcome, MergeError>
where
    S: EnvFileStore + ?Sized,
    E: EnvSink + ?Sized,
{
    if secrets.is_empty() {
        return Err(MergeError::EmptySecretSet);
    }
    validate(secrets)?;

    let mut file = load_existing(store, policy)?;

    if !policy.force {
        let conflicts: Vec<String> = secrets
            .iter()
            .filter(|(key, value)| file.values(key).any(|existing| existing != value.as_str()))
            .map(|(key, _)| key.clone())
            .collect();
        if !conflicts.is_empty() {
            return Err(MergeError::KeyConflict {
                path: store.path().to_path_buf(),
                keys: conflicts,
            });
        }
    }

    let mut outcome = MergeOutcome::default();
    for (key, value) in secrets {
        match file.set(key, value) {
            SetOutcome::Added => outcome.added.push(key.clone()),
            SetOutcome::Overwritten => outcome.overwritten.push(key.clone()),
            SetOutcome::Unchanged => outcome.unchanged.push(key.clone()),
        }
    }

    store
        .write(&file.serialize())
        .map_err(|source| MergeError::Io {
            path: store.path().to_path_buf(),
            source,
        })?;

    debug!(
        path = %store.path().display(),
        added = outcome.added.len(),
        overwritten = outcome.overwritten.len(),
        unchanged = outcome.unchanged.len(),
        "Merged secrets into env file"
    );

    if policy.pollute {
        for (key, value) in secrets {
            sink.set(key, value);
        }
    }

    Ok(outcome)
}

fn validate(secrets: &BTreeMap<String, String>) -> Result<(), MergeError> {
    for (key, value) in secrets {
        if !is_valid_key(key) {
            return Err(MergeError::InvalidKey { key: key.clone() });
        }
        if !is_representable_value(value) {
            return Err(MergeError::UnrepresentableValue { key: key.clone() });
        }
    }
    Ok(())
}

/// Read the target, or start from an empty file when there is nothing there.
fn load_existing<S>(store: &S, policy: MergePolicy) -> Result<EnvFile, MergeError>
where
    S: EnvFileStore + ?Sized,
{
    let io_err = |source| MergeError::Io {
        path: store.path().to_path_buf(),
        source,
    };

    if !store.exists().map_err(io_err)? {
        return Ok(EnvFile::new());
    }

    let contents = store.read().map_err(io_err)?;
    if contents.trim().is_empty() {
        return Ok(EnvFile::new());
    }

    if !policy.force && !policy.merge {
        return Err(MergeError::FileExists {
            path: store.path().to_path_buf(),
        });
    }

    Ok(EnvFile::parse(&contents))
}
