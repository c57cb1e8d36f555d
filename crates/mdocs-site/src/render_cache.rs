//! Checksum-addressed cache of rendered page HTML.
//!
//! Entries are never invalidated: an edited file has a new checksum, so its HTML
//! lands under a new key and the old entry is simply never read again.

use std::sync::Arc;

use mdocs_cache::{CacheStore, CacheStoreExt};

/// Key prefix of every render cache entry.
pub const CACHE_PREFIX: &str = "markdown_cache";

/// Build the cache key `markdown_cache/{set}/{path}/{checksum}`.
#[must_use]
pub fn cache_key(set_name: &str, path: &str, checksum: &str) -> String {
    format!("{CACHE_PREFIX}/{set_name}/{path}/{checksum}")
}

/// Render cache over a [`CacheStore`].
#[derive(Clone)]
pub struct RenderCache {
    store: Arc<dyn CacheStore>,
    write_back: bool,
}

impl RenderCache {
    /// Create a render cache.
    ///
    /// With `write_back` set, live renders after a miss are stored for next time.
    pub fn new(store: Arc<dyn CacheStore>, write_back: bool) -> Self {
        Self { store, write_back }
    }

    /// Whether misses are populated after a live render.
    #[must_use]
    pub fn write_back(&self) -> bool {
        self.write_back
    }

    /// Look up rendered HTML. `None` on miss.
    #[must_use]
    pub fn get(&self, set_name: &str, path: &str, checksum: &str) -> Option<String> {
        let key = cache_key(set_name, path, checksum);
        let html = self.store.get_string(&key);
        if html.is_some() {
            tracing::debug!(%key, "render cache hit");
        } else {
            tracing::debug!(%key, "render cache miss");
        }
        html
    }

    /// Store rendered HTML.
    pub fn put(&self, set_name: &str, path: &str, checksum: &str, html: &str) {
        let key = cache_key(set_name, path, checksum);
        self.store.put_string(&key, html);
    }
}

impl std::fmt::Debug for RenderCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderCache")
            .field("write_back", &self.write_back)
            .finish_non_exhaustive()
    }
}
