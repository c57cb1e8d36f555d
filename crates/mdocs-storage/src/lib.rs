//! Filesystem source abstraction for mdocs.
//!
//! This crate provides a [`Storage`] trait that hides where the markdown files of a
//! document set live. Consumers only ever ask four questions of it:
//!
//! - which files exist below a root ([`Storage::list`])
//! - does a file exist ([`Storage::exists`])
//! - what does it contain ([`Storage::read`])
//! - when was it last modified ([`Storage::mtime`])
//!
//! # Implementations
//!
//! - [`FsStorage`]: local filesystem
//! - [`MockStorage`]: in-memory files for tests (behind the `mock` feature flag)
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use mdocs_storage::{FsStorage, Storage};
//!
//! let storage = FsStorage::new();
//! for path in storage.list(Path::new("docs"))? {
//!     println!("{path}");
//! }
//! # Ok::<(), mdocs_storage::StorageError>(())
//! ```

mod fs;
#[cfg(feature = "mock")]
mod mock;
mod storage;

pub use fs::FsStorage;
#[cfg(feature = "mock")]
pub use mock::MockStorage;
pub use storage::{Storage, StorageError, StorageErrorKind};
