//! Resolution of raw invocation parameters into [`RequestParameters`].
//!
//! Responsibilities:
//! - Resolve `addr` and `token` from the flag first, then `VAULT_ADDR` / `VAULT_TOKEN`.
//! - Require `path` as an explicit flag.
//! - Default optional policy flags to `false` and parse the optional timeout.
//!
//! Does NOT handle:
//! - Validating that `addr` is a well-formed URL (the client builder does that).
//!
//! Invariants:
//! - Resolution fails on the first missing required field, in the order addr, token, path.
//! - Unrecognized raw keys are carried through unmodified in `extras`.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;

use super::env::non_blank;
use super::error::ConfigError;
use super::source::{FieldSpec, Source};
use crate::constants::{
    DEFAULT_ENV_FILE, PARAM_ADDR, PARAM_ENV_FILE, PARAM_FORCE, PARAM_MERGE, PARAM_PATH,
    PARAM_POLLUTE, PARAM_SKIP_VERIFY, PARAM_TIMEOUT, PARAM_TOKEN, VAULT_ADDR_ENV,
    VAULT_TOKEN_ENV,
};
use crate::types::RequestParameters;

/// Plain key/value parameters as supplied by the command line.
pub type RawParams = BTreeMap<String, String>;

const ADDR: FieldSpec = FieldSpec {
    name: PARAM_ADDR,
    label: Some("Vault addr"),
    sources: &[Source::Flag(PARAM_ADDR), Source::Env(VAULT_ADDR_ENV)],
};

const TOKEN: FieldSpec = FieldSpec {
    name: PARAM_TOKEN,
    label: Some("Vault token"),
    sources: &[Source::Flag(PARAM_TOKEN), Source::Env(VAULT_TOKEN_ENV)],
};

const PATH: FieldSpec = FieldSpec {
    name: PARAM_PATH,
    label: None,
    sources: &[Source::Flag(PARAM_PATH)],
};

const BOOLEAN_PARAMS: [&str; 4] = [PARAM_FORCE, PARAM_POLLUTE, PARAM_MERGE, PARAM_SKIP_VERIFY];

const KNOWN_PARAMS: [&str; 9] = [
    PARAM_ADDR,
    PARAM_TOKEN,
    PARAM_PATH,
    PARAM_FORCE,
    PARAM_POLLUTE,
    PARAM_MERGE,
    PARAM_ENV_FILE,
    PARAM_TIMEOUT,
    PARAM_SKIP_VERIFY,
];

/// Resolve raw parameters into validated [`RequestParameters`].
///
/// # Errors
///
/// Returns [`ConfigError::MissingParameter`] naming every checked source when
/// `addr`, `token` or `path` cannot be found, and [`ConfigError::InvalidValue`]
/// when `timeout` is not a whole number of seconds.
pub fn resolve(raw: &RawParams) -> Result<RequestParameters, ConfigError> {
    let addr = require(&ADDR, raw)?;
    let token = require(&TOKEN, raw)?;
    let path = require(&PATH, raw)?;

    let env_file = raw
        .get(PARAM_ENV_FILE)
        .and_then(|v| non_blank(v))
        .unwrap_or_else(|| DEFAULT_ENV_FILE.to_string());

    let timeout = match raw.get(PARAM_TIMEOUT).and_then(|v| non_blank(v)) {
        Some(secs) => Some(Duration::from_secs(secs.parse().map_err(|_| {
            ConfigError::InvalidValue {
                param: PARAM_TIMEOUT,
                message: "must be a whole number of seconds".to_string(),
            }
        })?)),
        None => None,
    };

    let mut extras: BTreeMap<String, String> = raw
        .iter()
        .filter(|(key, _)| !KNOWN_PARAMS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    for name in BOOLEAN_PARAMS {
        if let Some(value) = raw.get(name)
            && parse_flag(value).is_none()
        {
            tracing::debug!(param = name, "Unrecognized boolean value, treating as false");
            extras.insert(name.to_string(), value.clone());
        }
    }

    Ok(RequestParameters {
        addr,
        token: SecretString::new(token.into()),
        path,
        force: flag_enabled(raw, PARAM_FORCE),
        pollute: flag_enabled(raw, PARAM_POLLUTE),
        merge: flag_enabled(raw, PARAM_MERGE),
        env_file: PathBuf::from(env_file),
        timeout,
        skip_verify: flag_enabled(raw, PARAM_SKIP_VERIFY),
        extras,
    })
}

fn require(field: &FieldSpec, raw: &RawParams) -> Result<String, ConfigError> {
    field
        .lookup(raw)
        .ok_or_else(|| ConfigError::MissingParameter {
            field: field.name,
            hint: field.hint(),
        })
}

fn flag_enabled(raw: &RawParams, name: &str) -> bool {
    raw.get(name).and_then(|v| parse_flag(v)).unwrap_or(false)
}

/// Interpret a boolean-like raw value. A bare flag arrives as an empty string.
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
