//! Filesystem access for the target env file.
//!
//! Responsibilities:
//! - Check for, read and write the target file.
//!
//! Does NOT handle:
//! - Parsing or merging (see [`crate::format`] and [`crate::merge`]).
//!
//! Invariants:
//! - Writes are atomic (temp file + rename); the target never holds a
//!   partially written file.
//! - On unix the written file is readable by its owner only.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Storage backing the env file.
pub trait EnvFileStore {
    /// Path reported in messages.
    fn path(&self) -> &Path;

    fn exists(&self) -> io::Result<bool>;

    fn read(&self) -> io::Result<String>;

    /// Replace the file contents.
    fn write(&self, contents: &str) -> io::Result<()>;
}

/// An env file on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalEnvFile {
    path: PathBuf,
}

impl LocalEnvFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| OsString::from(".env"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl EnvFileStore for LocalEnvFile {
    fn path(&self) -> &Path {
        &self.path
    }

    fn exists(&self) -> io::Result<bool> {
        self.path.try_exists()
    }

    fn read(&self) -> io::Result<String> {
        std::fs::read_to_string(&self.path)
    }

    fn write(&self, contents: &str) -> io::Result<()> {
        let temp_path = self.temp_path();

        if let Err(e) = write_private(&temp_path, contents) {
            let _ = std::fs::remove_file(&temp_path);
            return Err(e);
        }

        if let Err(e) = std::fs::rename(&temp_path, &self.path) {
            let _ = std::fs::remove_file(&temp_path);
            return Err(e);
        }

        debug!(path = %self.path.display(), bytes = contents.len(), "Wrote env file");
        Ok(())
    }
}

#[cfg(unix)]
fn write_private(path: &Path, contents: &str) -> io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::OpenOptionsExt;

    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()
}

#[cfg(not(unix))]
fn write_private(path: &Path, contents: &str) -> io::Result<()> {
    std::fs::write(path, contents)
}
