//! Page records and their path-derived identity.
//!
//! A page path such as `10-guides/20-intro.md` carries its own ordering: the
//! leading `10-` and `20-` tokens sort the category and the page, and are stripped
//! from the user-facing category and slug (`guides`, `guides/intro`).

use serde::Serialize;
use xxhash_rust::xxh3::xxh3_64;

use mdocs_markdown::FrontMatter;

use crate::render_cache;

/// Markdown file extension recognized as a page.
pub const MARKDOWN_EXTENSION: &str = ".md";

/// One markdown file of a set, derived fresh from its path and content.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Page {
    /// Name of the set the page belongs to.
    pub set_name: String,
    /// `/`-separated path relative to the set root.
    pub path: String,
    /// Front-matter `title`, else the first `<h1>` of the rendered page.
    pub title: Option<String>,
    /// First path segment, when the page lives in a directory.
    pub category_raw: Option<String>,
    /// `category_raw` without its ordinal prefix.
    pub category: Option<String>,
    /// Last path segment.
    pub filename: String,
    /// Category and file stem without ordinal prefixes, joined with `/`.
    pub slug: String,
    /// Modification time as seconds since the Unix epoch.
    pub last_modified: f64,
    /// xxh3 of the raw file bytes, as 16 hex digits.
    pub checksum: String,
    /// Parsed front-matter.
    pub matter: FrontMatter,
}

impl Page {
    /// Key of this page's rendered HTML in the render cache.
    #[must_use]
    pub fn cache_key(&self) -> String {
        render_cache::cache_key(&self.set_name, &self.path, &self.checksum)
    }

    /// Whether `other` is the same file (same set and path), whatever its content.
    #[must_use]
    pub fn is_same_file(&self, other: &Page) -> bool {
        self.set_name == other.set_name && self.path == other.path
    }
}

/// Content checksum: xxh3-64 of the raw bytes as lowercase hex.
#[must_use]
pub fn checksum(raw: impl AsRef<[u8]>) -> String {
    format!("{:016x}", xxh3_64(raw.as_ref()))
}

/// First path segment, if the path has a directory.
#[must_use]
pub fn category_raw(path: &str) -> Option<&str> {
    path.split_once('/').map(|(first, _)| first)
}

/// Category of a page path: [`category_raw`] without its ordinal prefix.
///
/// `None` for pages at the set root, or when nothing remains after the prefix.
#[must_use]
pub fn category(path: &str) -> Option<&str> {
    category_raw(path)
        .map(strip_ordinal)
        .filter(|c| !c.is_empty())
}

/// Last path segment.
#[must_use]
pub fn filename(path: &str) -> &str {
    path.rsplit_once('/').map_or(path, |(_, name)| name)
}

/// Slug of a page path: stripped category and stripped file stem joined with `/`.
///
/// Empty parts are left out, so `intro.md` yields `intro`.
#[must_use]
pub fn slug(path: &str) -> String {
    let name = filename(path);
    let stem = name.strip_suffix(MARKDOWN_EXTENSION).unwrap_or(name);

    [category(path).unwrap_or_default(), strip_ordinal(stem)]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Drop everything up to and including the first `-`, if any.
fn strip_ordinal(segment: &str) -> &str {
    segment.split_once('-').map_or(segment, |(_, rest)| rest)
}
