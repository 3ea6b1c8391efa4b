//! The `KEY=VALUE` env file format.
//!
//! Responsibilities:
//! - Parse file contents into an ordered list of entries.
//! - Update or append keys while keeping every other line in place.
//! - Serialize entries back to text.
//!
//! Format:
//! - One entry per line, lines joined with `\n`, no trailing newline written.
//! - A pair is `KEY=VALUE` where `KEY` matches `[A-Za-z_][A-Za-z0-9_]*`.
//!   The line is split on the first `=`; the value is taken verbatim.
//! - Blank lines, `#` comments and lines that are not a valid pair are kept
//!   verbatim and take no part in merging.
//!
//! Invariants:
//! - `parse(serialize(f))` yields the same pairs as `f` as long as every
//!   value satisfies [`is_representable_value`].
//! - Parse warnings never include line contents, only line numbers.

use std::collections::BTreeMap;

use tracing::warn;

/// One line of an env file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Pair { key: String, value: String },
    Verbatim(String),
}

impl Entry {
    fn render(&self) -> String {
        match self {
            Entry::Pair { key, value } => format!("{key}={value}"),
            Entry::Verbatim(line) => line.clone(),
        }
    }
}

/// Result of setting a key on an [`EnvFile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    Added,
    Overwritten,
    Unchanged,
}

/// Parsed contents of an env file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvFile {
    entries: Vec<Entry>,
}

impl EnvFile {
    /// Create an empty file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse env file contents.
    pub fn parse(contents: &str) -> Self {
        let entries = contents
            .lines()
            .enumerate()
            .map(|(index, line)| parse_line(index + 1, line))
            .collect();
        Self { entries }
    }

    /// Build a file holding the given pairs, in iteration order.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let entries = pairs
            .into_iter()
            .map(|(key, value)| Entry::Pair {
                key: key.clone(),
                value: value.clone(),
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Iterate over key/value pairs in file order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Pair { key, value } => Some((key.as_str(), value.as_str())),
            Entry::Verbatim(_) => None,
        })
    }

    /// Effective value of `key`; with duplicate keys the last one wins.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs().filter(|(k, _)| *k == key).map(|(_, v)| v).last()
    }

    /// Every value assigned to `key`, in file order.
    pub fn values<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs().filter(move |(k, _)| *k == key).map(|(_, v)| v)
    }

    /// Set `key` to `value`.
    ///
    /// Every existing occurrence is updated in place; a new key is appended.
    pub fn set(&mut self, key: &str, value: &str) -> SetOutcome {
        let mut outcome = SetOutcome::Added;

        for entry in &mut self.entries {
            if let Entry::Pair { key: k, value: v } = entry
                && k == key
            {
                if v != value {
                    *v = value.to_string();
                    outcome = SetOutcome::Overwritten;
                } else if outcome == SetOutcome::Added {
                    outcome = SetOutcome::Unchanged;
                }
            }
        }

        if outcome == SetOutcome::Added {
            self.entries.push(Entry::Pair {
                key: key.to_string(),
                value: value.to_string(),
            });
        }
        outcome
    }

    /// Effective key/value mapping.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.pairs()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    /// Render the file contents.
    pub fn serialize(&self) -> String {
        self.entries
            .iter()
            .map(Entry::render)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn parse_line(number: usize, line: &str) -> Entry {
    let trimmed = line.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Entry::Verbatim(line.to_string());
    }

    match line.split_once('=') {
        Some((key, value)) if is_valid_key(key) => Entry::Pair {
            key: key.to_string(),
            value: value.to_string(),
        },
        _ => {
            warn!(line = number, "Keeping env file line that is not a KEY=VALUE pair");
            Entry::Verbatim(line.to_string())
        }
    }
}

/// Whether `key` is a valid variable name: `[A-Za-z_][A-Za-z0-9_]*`.
pub fn is_valid_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Whether `value` survives a write/read cycle and can be exported.
pub fn is_representable_value(value: &str) -> bool {
    !value.contains(['\n', '\r', '\0'])
}
