//! Filesystem storage implementation.
//!
//! Provides [`FsStorage`] for listing and reading markdown files from the local
//! filesystem. Nothing is cached: the page index is rebuilt from disk on every
//! request, so every call goes straight to the filesystem.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use crate::storage::{Storage, StorageError};

/// Backend identifier for error messages.
const BACKEND: &str = "Fs";

/// Filesystem storage implementation.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use mdocs_storage::{FsStorage, Storage};
///
/// let storage = FsStorage::new();
/// let files = storage.list(Path::new("docs"))?;
/// # Ok::<(), mdocs_storage::StorageError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct FsStorage;

impl FsStorage {
    /// Create a new filesystem storage.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Walk `dir_path` recursively, collecting `/`-joined paths relative to the root.
    fn walk(dir_path: &Path, prefix: &str, files: &mut Vec<String>) -> Result<(), StorageError> {
        let entries = fs::read_dir(dir_path).map_err(|e| {
            StorageError::io(e, Some(dir_path.to_path_buf())).with_backend(BACKEND)
        })?;

        for entry in entries.filter_map(Result::ok) {
            let name = entry.file_name().to_string_lossy().into_owned();

            // Skip hidden files and directories
            if name.starts_with('.') {
                continue;
            }

            let rel_path = if prefix.is_empty() {
                name
            } else {
                format!("{prefix}/{name}")
            };

            let Ok(file_type) = entry.file_type() else {
                continue;
            };

            if file_type.is_dir() {
                Self::walk(&entry.path(), &rel_path, files)?;
            } else if file_type.is_file() || entry.path().is_file() {
                // `entry.path().is_file()` follows symlinks to regular files
                files.push(rel_path);
            }
        }

        Ok(())
    }
}

impl Storage for FsStorage {
    fn list(&self, root: &Path) -> Result<Vec<String>, StorageError> {
        if !root.is_dir() {
            return Err(StorageError::not_found(root).with_backend(BACKEND));
        }

        let mut files = Vec::new();
        Self::walk(root, "", &mut files)?;
        files.sort();

        tracing::debug!(root = %root.display(), count = files.len(), "Listed files");
        Ok(files)
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>, StorageError> {
        fs::read(path)
            .map_err(|e| StorageError::io(e, Some(path.to_path_buf())).with_backend(BACKEND))
    }

    fn mtime(&self, path: &Path) -> Result<f64, StorageError> {
        let to_error = |e: std::io::Error| {
            StorageError::io(e, Some(PathBuf::from(path))).with_backend(BACKEND)
        };
        let modified = fs::metadata(path)
            .and_then(|m| m.modified())
            .map_err(to_error)?;
        Ok(modified
            .duration_since(UNIX_EPOCH)
            .map_or(0.0, |d| d.as_secs_f64()))
    }
}
