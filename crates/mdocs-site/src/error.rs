//! Error type for documentation operations.

use mdocs_storage::StorageError;

/// Error returned by set lookups and page resolution.
///
/// A page file that does not exist is not an error: the accessors return `None`
/// (or an empty value) instead.
#[derive(Debug, thiserror::Error)]
pub enum DocsError {
    /// No set is registered under this name.
    #[error("Set by name \"{0}\" not found.")]
    SetNotFound(String),
    /// A page path that would resolve outside its set root.
    #[error("Invalid page path: {0}")]
    InvalidPath(String),
    /// Listing or reading the set's files failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}
