//! Destinations for exported secrets.
//!
//! [`ProcessEnv`] writes into the environment of the running process;
//! [`MemoryEnv`] records the exports so tests can observe them without
//! touching global state.

use std::collections::BTreeMap;

use tracing::debug;

/// Receives key/value pairs exported after a successful write.
pub trait EnvSink {
    fn set(&mut self, key: &str, value: &str);
}

/// Exports into the current process environment.
#[derive(Debug)]
pub struct ProcessEnv {
    _private: (),
}

impl ProcessEnv {
    /// Create a sink over the process environment.
    ///
    /// # Safety
    ///
    /// Setting environment variables is only sound while no other thread
    /// reads or writes the environment. The caller must ensure the process
    /// stays single-threaded for as long as the returned value is used.
    pub unsafe fn new() -> Self {
        Self { _private: () }
    }
}

impl EnvSink for ProcessEnv {
    fn set(&mut self, key: &str, value: &str) {
        debug!(key, "Exporting secret to process environment");
        // SAFETY: upheld by the caller of `ProcessEnv::new`.
        unsafe { std::env::set_var(key, value) };
    }
}

/// Records exports in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryEnv {
    vars: BTreeMap<String, String>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn vars(&self) -> &BTreeMap<String, String> {
        &self.vars
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl EnvSink for MemoryEnv {
    fn set(&mut self, key: &str, value: &str) {
        self.vars.insert(key.to_string(), value.to_string());
    }
}
