//! In-memory cache implementation.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::CacheStore;

/// Process-local [`CacheStore`] backed by a `HashMap`.
///
/// Entries live as long as the store. A poisoned lock is treated as a miss on read
/// and a dropped write, like any other cache failure.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryCache {
    /// Create an empty in-memory cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().map_or(0, |e| e.len())
    }

    /// Whether the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CacheStore for MemoryCache {
    fn exists(&self, key: &str) -> bool {
        self.entries.read().is_ok_and(|e| e.contains_key(key))
    }

    fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.read().ok()?.get(key).cloned()
    }

    fn put(&self, key: &str, value: &[u8]) {
        match self.entries.write() {
            Ok(mut entries) => {
                entries.insert(key.to_owned(), value.to_vec());
            }
            Err(_) => tracing::warn!(key, "memory cache lock poisoned, dropping write"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_cache_miss_then_hit() {
        let cache = MemoryCache::new();

        assert_eq!(cache.get("markdown_cache/docs/intro.md/abc"), None);
        assert!(!cache.exists("markdown_cache/docs/intro.md/abc"));

        cache.put("markdown_cache/docs/intro.md/abc", b"<h1>Intro</h1>");

        assert!(cache.exists("markdown_cache/docs/intro.md/abc"));
        assert_eq!(
            cache.get("markdown_cache/docs/intro.md/abc"),
            Some(b"<h1>Intro</h1>".to_vec())
        );
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_memory_cache_overwrite() {
        let cache = MemoryCache::new();

        cache.put("key", b"first");
        cache.put("key", b"second");

        assert_eq!(cache.get("key"), Some(b"second".to_vec()));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_memory_cache_starts_empty() {
        assert!(MemoryCache::new().is_empty());
    }
}
