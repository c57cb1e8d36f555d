//! Extension trait for [`CacheStore`] with typed convenience methods.

use crate::CacheStore;

/// String convenience methods for [`CacheStore`].
///
/// Rendered HTML is the only payload the render cache stores, so these live on a
/// blanket extension trait and [`CacheStore`] implementors only handle raw bytes.
///
/// # Example
///
/// ```
/// use mdocs_cache::{CacheStoreExt, MemoryCache};
///
/// let cache = MemoryCache::new();
/// cache.put_string("markdown_cache/docs/intro.md/abc", "<h1>Intro</h1>");
/// assert_eq!(
///     cache.get_string("markdown_cache/docs/intro.md/abc").as_deref(),
///     Some("<h1>Intro</h1>")
/// );
/// ```
pub trait CacheStoreExt: CacheStore {
    /// Retrieve a cached UTF-8 string.
    ///
    /// Returns `None` on cache miss or invalid UTF-8.
    fn get_string(&self, key: &str) -> Option<String> {
        let bytes = self.get(key)?;
        String::from_utf8(bytes).ok()
    }

    /// Store a string value in the cache.
    fn put_string(&self, key: &str, value: &str) {
        self.put(key, value.as_bytes());
    }
}

impl<S: CacheStore + ?Sized> CacheStoreExt for S {}
