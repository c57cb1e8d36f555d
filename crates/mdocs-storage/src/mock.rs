//! Mock storage implementation for testing.
//!
//! Provides [`MockStorage`] for unit testing without filesystem access.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::storage::{Storage, StorageError};

/// Backend identifier for error messages.
const BACKEND: &str = "Mock";

/// A file held in memory.
#[derive(Debug, Clone)]
struct MockFile {
    content: Vec<u8>,
    mtime: f64,
}

/// Mock storage for testing.
///
/// Stores files in memory, keyed by full path. Use the builder methods to configure
/// the mock with test data.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use mdocs_storage::{MockStorage, Storage};
///
/// let storage = MockStorage::new()
///     .with_file("/docs/guide.md", "# User Guide\n\nContent.")
///     .with_mtime("/docs/guide.md", 1000.0);
///
/// assert_eq!(storage.list(Path::new("/docs")).unwrap(), vec!["guide.md"]);
/// assert_eq!(storage.mtime(Path::new("/docs/guide.md")).unwrap(), 1000.0);
/// ```
#[derive(Debug, Default)]
pub struct MockStorage {
    files: RwLock<HashMap<PathBuf, MockFile>>,
    phantoms: RwLock<HashSet<PathBuf>>,
    dirs: RwLock<HashSet<PathBuf>>,
}

impl MockStorage {
    /// Create a new empty mock storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file with the given content and an mtime of `0.0`.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        self.insert(path, content);
        self
    }

    /// Set modification time for an existing file.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_mtime(self, path: impl Into<PathBuf>, mtime: f64) -> Self {
        if let Some(file) = self.files.write().unwrap().get_mut(&path.into()) {
            file.mtime = mtime;
        }
        self
    }

    /// Add a file that shows up in listings but cannot be read.
    ///
    /// Simulates a file deleted between listing a directory and reading it.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_phantom(self, path: impl Into<PathBuf>) -> Self {
        self.phantoms.write().unwrap().insert(path.into());
        self
    }

    /// Register an (empty) directory so that listing it succeeds.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_dir(self, path: impl Into<PathBuf>) -> Self {
        self.dirs.write().unwrap().insert(path.into());
        self
    }

    /// Insert or replace a file after construction.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn insert(&self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) {
        let path = path.into();
        let mut files = self.files.write().unwrap();
        let mtime = files.get(&path).map_or(0.0, |f| f.mtime);
        files.insert(
            path,
            MockFile {
                content: content.into(),
                mtime,
            },
        );
    }

    /// Remove a file after construction.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn remove(&self, path: impl AsRef<Path>) {
        self.files.write().unwrap().remove(path.as_ref());
    }

    fn get(&self, path: &Path) -> Result<MockFile, StorageError> {
        self.files
            .read()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| StorageError::not_found(path).with_backend(BACKEND))
    }
}

/// Convert `path` to a `/`-joined path relative to `root`, skipping hidden entries.
fn relative_to(path: &Path, root: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let segments: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if segments.is_empty() || segments.iter().any(|s| s.starts_with('.')) {
        return None;
    }
    Some(segments.join("/"))
}

impl Storage for MockStorage {
    fn list(&self, root: &Path) -> Result<Vec<String>, StorageError> {
        let files = self.files.read().unwrap();
        let phantoms = self.phantoms.read().unwrap();

        let known_root = self.dirs.read().unwrap().contains(root)
            || files.keys().chain(phantoms.iter()).any(|p| p.starts_with(root));
        if !known_root {
            return Err(StorageError::not_found(root).with_backend(BACKEND));
        }

        let mut listed: Vec<String> = files
            .keys()
            .chain(phantoms.iter())
            .filter_map(|p| relative_to(p, root))
            .collect();
        listed.sort();
        listed.dedup();
        Ok(listed)
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.read().unwrap().contains_key(path)
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>, StorageError> {
        self.get(path).map(|f| f.content)
    }

    fn mtime(&self, path: &Path) -> Result<f64, StorageError> {
        self.get(path).map(|f| f.mtime)
    }
}
