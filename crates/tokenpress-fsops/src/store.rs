//! Text stores the pipeline reads inputs from and writes artifacts to.
//!
//! # Design
//! - Relative paths resolve against the store root; absolute paths pass through.
//! - Writes create missing parent directories.
//! - `MemoryStore` backs tests and dry runs without touching the disk.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{FsOpsError, FsOpsResult};

/// Read/write access to text files.
pub trait TextStore {
    /// Read the full contents of `path`.
    ///
    /// # Errors
    ///
    /// Returns [`FsOpsError::Io`] when the file is missing or unreadable.
    fn read_text(&self, path: &Path) -> FsOpsResult<String>;

    /// Replace the contents of `path`.
    ///
    /// # Errors
    ///
    /// Returns [`FsOpsError::Io`] when the file or its parents cannot be written.
    fn write_text(&mut self, path: &Path, contents: &str) -> FsOpsResult<()>;
}

/// Store backed by the local filesystem.
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    /// Store rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store rooted at the process working directory.
    ///
    /// # Errors
    ///
    /// Returns [`FsOpsError::Io`] when the working directory cannot be read.
    pub fn current_dir() -> FsOpsResult<Self> {
        let root =
            std::env::current_dir().map_err(|source| FsOpsError::io("fs_store.cwd", ".", source))?;
        Ok(Self { root })
    }

    /// Root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute location of `path` inside the store.
    #[must_use]
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

impl TextStore for FsStore {
    fn read_text(&self, path: &Path) -> FsOpsResult<String> {
        let target = self.resolve(path);
        fs::read_to_string(&target)
            .map_err(|source| FsOpsError::io("fs_store.read", target, source))
    }

    fn write_text(&mut self, path: &Path, contents: &str) -> FsOpsResult<()> {
        let target = self.resolve(path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .map_err(|source| FsOpsError::io("fs_store.create_parent", parent, source))?;
        }
        fs::write(&target, contents)
            .map_err(|source| FsOpsError::io("fs_store.write", &target, source))?;
        debug!(path = %target.display(), bytes = contents.len(), "wrote file");
        Ok(())
    }
}

/// In-memory store keyed by path.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    files: BTreeMap<PathBuf, String>,
}

impl MemoryStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file.
    pub fn insert(&mut self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        self.files.insert(path.into(), contents.into());
    }

    /// Contents of `path`, if present.
    #[must_use]
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }

    /// Stored paths in sorted order.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.files.keys().map(PathBuf::as_path)
    }
}

impl TextStore for MemoryStore {
    fn read_text(&self, path: &Path) -> FsOpsResult<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            FsOpsError::io(
                "memory_store.read",
                path,
                io::Error::from(io::ErrorKind::NotFound),
            )
        })
    }

    fn write_text(&mut self, path: &Path, contents: &str) -> FsOpsResult<()> {
        self.files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}
