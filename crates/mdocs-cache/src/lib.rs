//! Render cache store abstraction for mdocs.
//!
//! This crate provides the [`CacheStore`] trait: a key-value blob store addressed by
//! path-like string keys (e.g. `markdown_cache/docs/10-guides/20-intro.md/<checksum>`).
//! Consumers never invalidate entries explicitly; a changed key is simply a new entry.
//!
//! # Implementations
//!
//! - [`NullCache`]: No-op implementation (always misses)
//! - [`MemoryCache`]: Process-local map, useful for tests and short-lived hosts
//! - [`FileCache`]: File-based implementation with version validation
//!
//! # Example
//!
//! ```
//! use mdocs_cache::{CacheStore, NullCache};
//!
//! let cache = NullCache;
//! cache.put("markdown_cache/docs/intro.md/abc", b"<html>hello</html>");
//! assert_eq!(cache.get("markdown_cache/docs/intro.md/abc"), None); // NullCache always misses
//! ```

mod ext;
mod file;
mod memory;

pub use ext::CacheStoreExt;
pub use file::FileCache;
pub use memory::MemoryCache;

/// Key-value blob store backing the render cache.
///
/// Writes are best effort: a store that fails to persist an entry logs the failure
/// and carries on, because every cached value can be recomputed.
pub trait CacheStore: Send + Sync {
    /// Check whether an entry exists for `key`.
    fn exists(&self, key: &str) -> bool;

    /// Retrieve a cached value.
    ///
    /// Returns `None` on cache miss.
    fn get(&self, key: &str) -> Option<Vec<u8>>;

    /// Store a value, overwriting any existing entry for the same key.
    fn put(&self, key: &str, value: &[u8]);
}

/// No-op [`CacheStore`] that never stores or retrieves data.
///
/// Use when caching is disabled. Every `get` returns `None`; every `put` is
/// silently discarded.
pub struct NullCache;

impl CacheStore for NullCache {
    fn exists(&self, _key: &str) -> bool {
        false
    }

    fn get(&self, _key: &str) -> Option<Vec<u8>> {
        None
    }

    fn put(&self, _key: &str, _value: &[u8]) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_cache_always_misses() {
        let cache = NullCache;

        // A fresh store has no data
        assert_eq!(cache.get("key"), None);

        // Putting a value and reading it back still returns None
        cache.put("key", b"hello");
        assert_eq!(cache.get("key"), None);
        assert!(!cache.exists("key"));
    }

    #[test]
    fn test_stores_are_object_safe() {
        let stores: Vec<Box<dyn CacheStore>> = vec![Box::new(NullCache), Box::new(MemoryCache::new())];

        for store in &stores {
            assert_eq!(store.get("never-written"), None);
        }
    }
}
