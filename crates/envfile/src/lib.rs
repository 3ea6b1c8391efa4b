//! Env file reading, merging and writing.
//!
//! This crate owns the on-disk `KEY=VALUE` file that vault2env produces:
//! the line format, the merge algorithm with its overwrite and conflict
//! rules, the filesystem driver and the optional export of values into the
//! running process's environment.

pub mod error;
pub mod format;
pub mod merge;
pub mod sink;
pub mod store;

pub use error::MergeError;
pub use format::{Entry, EnvFile, SetOutcome, is_representable_value, is_valid_key};
pub use merge::{MergeOutcome, MergePolicy, merge};
pub use sink::{EnvSink, MemoryEnv, ProcessEnv};
pub use store::{EnvFileStore, LocalEnvFile};
