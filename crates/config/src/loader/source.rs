//! Parameter sources and their lookup order.
//!
//! Each resolvable field carries an explicit, ordered list of [`Source`]s.
//! Resolution walks the list front to back and stops at the first source
//! that yields a non-blank value, so precedence is visible in one place.

use std::fmt;

use super::env::{env_var_or_none, is_blank};
use super::resolve::RawParams;

/// A place a parameter value can come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// An explicit invocation parameter (`--<name>`).
    Flag(&'static str),
    /// A process environment variable.
    Env(&'static str),
}

impl Source {
    /// Look the value up in this source.
    ///
    /// Explicit values are returned verbatim; only environment values are trimmed.
    pub fn lookup(&self, raw: &RawParams) -> Option<String> {
        match self {
            Source::Flag(name) => raw
                .get(*name)
                .filter(|v| !is_blank(v))
                .cloned(),
            Source::Env(var) => env_var_or_none(var),
        }
    }

    fn is_env(&self) -> bool {
        matches!(self, Source::Env(_))
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Flag(name) => write!(f, "--{name}"),
            Source::Env(var) => write!(f, "\"{var}\""),
        }
    }
}

/// A required field together with the sources consulted for it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FieldSpec {
    pub name: &'static str,
    /// Human label used in error messages, e.g. `Vault addr`.
    pub label: Option<&'static str>,
    pub sources: &'static [Source],
}

impl FieldSpec {
    /// First non-blank value across the sources, in priority order.
    pub fn lookup(&self, raw: &RawParams) -> Option<String> {
        self.sources.iter().find_map(|source| {
            let value = source.lookup(raw);
            if value.is_some() {
                tracing::debug!(field = self.name, source = %source, "Resolved parameter");
            }
            value
        })
    }

    /// Describe where the value was looked for.
    ///
    /// Environment variables are listed before flags, matching the wording
    /// users know from the Vault CLI documentation.
    pub fn hint(&self) -> String {
        let described: Vec<String> = self
            .sources
            .iter()
            .filter(|s| s.is_env())
            .chain(self.sources.iter().filter(|s| !s.is_env()))
            .map(ToString::to_string)
            .collect();
        let described = described.join(" or ");

        match self.label {
            Some(label) => format!("{label} by {described}"),
            None => described,
        }
    }
}
