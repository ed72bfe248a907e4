//! File access abstraction for configuration sources.
//!
//! Responsibilities:
//! - Define the [`FileStore`] seam the loader reads profile files through.
//! - Provide the two standard implementations: [`DirStore`] for real
//!   directories and [`MemoryStore`] for tests and embedded defaults.
//!
//! Invariants:
//! - Stores resolve bare file names (`default.env`), never paths; path
//!   construction is the store's concern.
//! - A missing file surfaces as `io::ErrorKind::NotFound` from every
//!   implementation.

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

/// Source of configuration file bytes.
///
/// The loader asks a store for a file by bare name and parses whatever
/// comes back. Implementations decide where the bytes live.
pub trait FileStore: Send + Sync {
    /// Read the full contents of the named file.
    ///
    /// # Errors
    ///
    /// Returns `io::ErrorKind::NotFound` when the store has no file with
    /// that name, or any underlying I/O error otherwise.
    fn read_file(&self, name: &str) -> io::Result<Vec<u8>>;
}

/// [`FileStore`] backed by a directory on disk.
#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    /// Create a store that resolves file names under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl FileStore for DirStore {
    fn read_file(&self, name: &str) -> io::Result<Vec<u8>> {
        std::fs::read(self.root.join(name))
    }
}

/// In-memory [`FileStore`], used by tests and callers that ship built-in
/// profiles.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    files: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, replacing any previous contents under the same name.
    #[must_use]
    pub fn with_file(mut self, name: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        self.files.insert(name.into(), contents.into());
        self
    }
}

impl FileStore for MemoryStore {
    fn read_file(&self, name: &str) -> io::Result<Vec<u8>> {
        self.files.get(name).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no such file: {name}"))
        })
    }
}
