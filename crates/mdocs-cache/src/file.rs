//! File-based cache implementation.
//!
//! [`FileCache`] stores each entry as a single file whose path below the cache root
//! is the entry key itself, so `markdown_cache/docs/intro.md/3f2a...` lands at
//! `{root}/markdown_cache/docs/intro.md/3f2a...`.
//!
//! On construction, [`FileCache`] validates a `VERSION` file in the cache root.
//! If the version mismatches or is missing, the entire cache directory is wiped
//! and recreated. This ensures stale caches from previous builds are never used.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::CacheStore;

/// File-based [`CacheStore`] rooted at a directory on disk.
///
/// Directory layout:
/// ```text
/// {root}/
/// +-- VERSION                           # contains the cache version string
/// +-- markdown_cache/
///     +-- {set}/{path}/{checksum}       # rendered HTML
/// ```
pub struct FileCache {
    root: PathBuf,
}

impl FileCache {
    /// Create a new file-based cache at `root`, validating the cache version.
    ///
    /// If the `VERSION` file inside `root` does not match `version`, the entire
    /// cache directory is removed and recreated with the new version. Errors
    /// during validation are logged but never fatal.
    #[must_use]
    pub fn new(root: PathBuf, version: &str) -> Self {
        validate_version(&root, version);
        Self { root }
    }

    /// Root directory of the cache.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a key to a file below the root.
    ///
    /// Returns `None` for keys that could escape the root or collide with the
    /// `VERSION` file.
    fn entry_path(&self, key: &str) -> Option<PathBuf> {
        let rel = Path::new(key);
        let valid = !key.is_empty()
            && key != "VERSION"
            && rel.components().all(|c| matches!(c, Component::Normal(_)));
        valid.then(|| self.root.join(rel))
    }
}

impl CacheStore for FileCache {
    fn exists(&self, key: &str) -> bool {
        self.entry_path(key).is_some_and(|p| p.is_file())
    }

    fn get(&self, key: &str) -> Option<Vec<u8>> {
        let path = self.entry_path(key)?;
        fs::read(path).ok()
    }

    fn put(&self, key: &str, value: &[u8]) {
        let Some(path) = self.entry_path(key) else {
            tracing::warn!(key, "rejected cache key");
            return;
        };

        // Cache is optional: failures are logged and otherwise ignored
        if let Some(parent) = path.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            tracing::warn!(key, "failed to create cache directory: {e}");
            return;
        }

        if let Err(e) = fs::write(&path, value) {
            tracing::warn!(key, "failed to write cache entry: {e}");
        }
    }
}

/// Validate the cache version, wiping the directory on mismatch.
fn validate_version(root: &Path, version: &str) {
    let version_file = root.join("VERSION");

    match fs::read_to_string(&version_file) {
        Ok(stored) if stored == version => {
            tracing::debug!("cache version matches: {version}");
            return;
        }
        Ok(stored) => {
            tracing::info!(
                "cache version mismatch (stored={stored}, current={version}), wiping cache"
            );
        }
        Err(_) => {
            tracing::info!("no cache VERSION file found, initializing cache");
        }
    }

    // Wipe and recreate
    if root.exists()
        && let Err(e) = fs::remove_dir_all(root)
    {
        tracing::warn!("failed to remove cache directory: {e}");
    }
    if let Err(e) = fs::create_dir_all(root) {
        tracing::warn!("failed to create cache directory: {e}");
        return;
    }
    if let Err(e) = fs::write(&version_file, version) {
        tracing::warn!("failed to write cache VERSION file: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_cache_put_and_get() {
        let tmp = TempDir::new().unwrap();
        let cache = FileCache::new(tmp.path().join("cache"), "v1");

        cache.put("markdown_cache/docs/intro.md/abc123", b"<h1>Intro</h1>");

        assert!(cache.exists("markdown_cache/docs/intro.md/abc123"));
        assert_eq!(
            cache.get("markdown_cache/docs/intro.md/abc123"),
            Some(b"<h1>Intro</h1>".to_vec())
        );
        assert!(
            tmp.path()
                .join("cache/markdown_cache/docs/intro.md/abc123")
                .is_file()
        );
    }

    #[test]
    fn test_file_cache_get_nonexistent_key() {
        let tmp = TempDir::new().unwrap();
        let cache = FileCache::new(tmp.path().join("cache"), "v1");

        assert_eq!(cache.get("nonexistent"), None);
        assert!(!cache.exists("nonexistent"));
    }

    #[test]
    fn test_file_cache_overwrite() {
        let tmp = TempDir::new().unwrap();
        let cache = FileCache::new(tmp.path().join("cache"), "v1");

        cache.put("key", b"first");
        cache.put("key", b"second");

        assert_eq!(cache.get("key"), Some(b"second".to_vec()));
    }

    #[test]
    fn test_file_cache_rejects_escaping_keys() {
        let tmp = TempDir::new().unwrap();
        let cache = FileCache::new(tmp.path().join("cache"), "v1");

        cache.put("../outside", b"nope");
        cache.put("/absolute", b"nope");
        cache.put("VERSION", b"nope");

        assert!(!tmp.path().join("outside").exists());
        assert_eq!(cache.get("../outside"), None);
        assert_eq!(cache.get(""), None);
        let version = fs::read_to_string(tmp.path().join("cache/VERSION")).unwrap();
        assert_eq!(version, "v1");
    }

    #[test]
    fn test_file_cache_binary_data() {
        let tmp = TempDir::new().unwrap();
        let cache = FileCache::new(tmp.path().join("cache"), "v1");

        // Binary data including \n, \r, null bytes, and high bytes
        let binary_data: Vec<u8> = vec![0x00, 0x01, 0x0A, 0x0D, 0xFF, 0xFE, 0x80, 0x7F];
        cache.put("binary", &binary_data);
        assert_eq!(cache.get("binary"), Some(binary_data));
    }

    #[test]
    fn test_version_match_keeps_cache() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("cache");

        let cache = FileCache::new(root.clone(), "v1");
        cache.put("key", b"preserved");

        // Recreate with same version: data persists
        let cache2 = FileCache::new(root, "v1");
        assert_eq!(cache2.get("key"), Some(b"preserved".to_vec()));
    }

    #[test]
    fn test_version_mismatch_wipes_cache() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("cache");

        let cache = FileCache::new(root.clone(), "v1");
        cache.put("key", b"will-be-wiped");

        // Recreate with different version: data gone
        let cache2 = FileCache::new(root.clone(), "v2");
        assert_eq!(cache2.get("key"), None);

        let version = fs::read_to_string(root.join("VERSION")).unwrap();
        assert_eq!(version, "v2");
    }

    #[test]
    fn test_missing_version_file_wipes_cache() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("cache");

        // Manually create cache dir with an orphan file but no VERSION
        fs::create_dir_all(root.join("markdown_cache")).unwrap();
        fs::write(root.join("markdown_cache/orphan"), b"stale data").unwrap();

        let cache = FileCache::new(root.clone(), "v1");
        assert_eq!(cache.get("markdown_cache/orphan"), None);

        let version = fs::read_to_string(root.join("VERSION")).unwrap();
        assert_eq!(version, "v1");
    }

    #[test]
    fn test_nonexistent_root_creates_version() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("deeply/nested/cache");

        assert!(!root.exists());

        let cache = FileCache::new(root.clone(), "v1");

        assert!(root.exists());
        assert_eq!(cache.root(), root.as_path());
        let version = fs::read_to_string(root.join("VERSION")).unwrap();
        assert_eq!(version, "v1");
    }
}
