//! Page index: one [`Page`] per markdown file of every set.
//!
//! Nothing is kept between builds. Each build lists every set and reads every file
//! again, so the index always reflects what is on disk right now.

use crate::DocsError;
use crate::documentation::{Documentation, decode};
use crate::navigation::Navigation;
use crate::page::{self, Page};

/// Materialized pages of all sets, in set priority order then listing order.
#[derive(Clone, Debug, Default)]
pub struct PageIndex {
    pages: Vec<Page>,
}

impl PageIndex {
    /// Build the index of every registered set.
    ///
    /// # Errors
    ///
    /// Fails if a set root can't be listed or a file can't be read for a reason
    /// other than having disappeared.
    pub fn build(docs: &Documentation) -> Result<Self, DocsError> {
        let mut pages = Vec::new();
        for set in docs.sets() {
            pages.extend(build_set(docs, &set.name)?);
        }
        tracing::debug!(pages = pages.len(), "built page index");
        Ok(Self { pages })
    }

    /// Wrap already materialized pages.
    #[must_use]
    pub fn from_pages(pages: Vec<Page>) -> Self {
        Self { pages }
    }

    /// All pages.
    #[must_use]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Pages of one set.
    pub fn for_set<'a>(&'a self, set_name: &str) -> impl Iterator<Item = &'a Page> {
        self.pages.iter().filter(move |p| p.set_name == set_name)
    }

    /// Find a page by slug.
    ///
    /// Slugs are not guaranteed unique; the first match in index order wins.
    #[must_use]
    pub fn find(&self, set_name: &str, slug: &str) -> Option<&Page> {
        self.for_set(set_name).find(|p| p.slug == slug)
    }

    /// Find a page by its path within the set.
    #[must_use]
    pub fn get(&self, set_name: &str, path: &str) -> Option<&Page> {
        self.for_set(set_name).find(|p| p.path == path)
    }

    /// Navigation over one set's pages.
    #[must_use]
    pub fn navigation(&self, set_name: &str) -> Navigation {
        Navigation::new(set_name, self.for_set(set_name).cloned())
    }

    /// Number of pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether the index has no pages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Consume the index, returning its pages.
    #[must_use]
    pub fn into_pages(self) -> Vec<Page> {
        self.pages
    }
}

/// Build the pages of a single set.
///
/// Files that vanish between listing and reading are left out.
///
/// # Errors
///
/// Same as [`PageIndex::build`], plus [`DocsError::SetNotFound`].
pub fn build_set(docs: &Documentation, set_name: &str) -> Result<Vec<Page>, DocsError> {
    let paths = docs.pages(set_name)?;
    let mut pages = Vec::with_capacity(paths.len());

    for path in paths {
        match build_page(docs, set_name, &path)? {
            Some(page) => pages.push(page),
            None => tracing::warn!(set = set_name, %path, "page vanished during indexing, skipping"),
        }
    }

    Ok(pages)
}

/// Build one page record, `None` if its file no longer exists.
///
/// # Errors
///
/// Propagates set lookup and read failures other than a missing file.
pub fn build_page(docs: &Documentation, set_name: &str, path: &str) -> Result<Option<Page>, DocsError> {
    let Some(bytes) = docs.page_bytes(set_name, path)? else {
        return Ok(None);
    };
    let Some(last_modified) = docs.page_last_modified(set_name, path)? else {
        return Ok(None);
    };

    let checksum = page::checksum(&bytes);
    let raw = decode(bytes);
    let matter = docs.engine().extract_front_matter(&raw);
    let title = docs.title_of(&raw, &matter);

    Ok(Some(Page {
        set_name: set_name.to_owned(),
        path: path.to_owned(),
        title,
        category_raw: page::category_raw(path).map(str::to_owned),
        category: page::category(path).map(str::to_owned),
        filename: page::filename(path).to_owned(),
        slug: page::slug(path),
        last_modified,
        checksum,
        matter,
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use mdocs_markdown::PulldownEngine;
    use mdocs_storage::MockStorage;

    use super::*;
    use crate::sets::Set;

    fn docs(storage: MockStorage) -> Documentation {
        let mut docs = Documentation::new(Arc::new(storage), Arc::new(PulldownEngine::default()));
        docs.add_set(Set::new("docs", "/docs"));
        docs
    }

    #[test]
    fn test_build_page_fields() {
        let docs = docs(
            MockStorage::new()
                .with_file("/docs/10-guides/20-intro.md", "---\ntitle: Intro\n---\n# Body")
                .with_mtime("/docs/10-guides/20-intro.md", 42.0),
        );

        let page = build_page(&docs, "docs", "10-guides/20-intro.md")
            .unwrap()
            .unwrap();

        assert_eq!(page.set_name, "docs");
        assert_eq!(page.path, "10-guides/20-intro.md");
        assert_eq!(page.title.as_deref(), Some("Intro"));
        assert_eq!(page.category_raw.as_deref(), Some("10-guides"));
        assert_eq!(page.category.as_deref(), Some("guides"));
        assert_eq!(page.filename, "20-intro.md");
        assert_eq!(page.slug, "guides/intro");
        assert_eq!(page.last_modified, 42.0);
        assert_eq!(page.checksum, page::checksum("---\ntitle: Intro\n---\n# Body"));
        assert_eq!(page.matter.get("title"), Some(&serde_json::json!("Intro")));
    }

    #[test]
    fn test_identical_content_has_identical_checksum() {
        let docs = docs(
            MockStorage::new()
                .with_file("/docs/a.md", "# Same")
                .with_file("/docs/b.md", "# Same")
                .with_file("/docs/c.md", "# Same."),
        );

        let index = PageIndex::build(&docs).unwrap();
        let sum = |path| index.get("docs", path).unwrap().checksum.clone();

        assert_eq!(sum("a.md"), sum("b.md"));
        assert_ne!(sum("a.md"), sum("c.md"));
    }

    #[test]
    fn test_vanished_file_is_dropped() {
        let docs = docs(
            MockStorage::new()
                .with_file("/docs/a.md", "# A")
                .with_phantom("/docs/deleted.md")
                .with_file("/docs/z.md", "# Z"),
        );

        let index = PageIndex::build(&docs).unwrap();

        let paths: Vec<&str> = index.pages().iter().map(|p| p.path.as_str()).collect();
        assert_eq!(paths, vec!["a.md", "z.md"]);
    }

    #[test]
    fn test_non_utf8_page_is_indexed() {
        let docs = docs(
            MockStorage::new()
                .with_file("/docs/good.md", "# Good")
                .with_file("/docs/latin1.md", b"# Caf\xe9\n".to_vec()),
        );

        let index = PageIndex::build(&docs).unwrap();

        assert_eq!(index.len(), 2);
        let page = index.get("docs", "latin1.md").unwrap();
        assert_eq!(page.checksum, page::checksum(b"# Caf\xe9\n"));
        assert_eq!(page.title.as_deref(), Some("Caf\u{fffd}"));
    }

    #[test]
    fn test_sets_in_priority_order() {
        let mut docs = docs(
            MockStorage::new()
                .with_file("/docs/a.md", "# A")
                .with_file("/api/b.md", "# B"),
        );
        docs.add_set(Set::new("api", "/api").with_priority(0));

        let index = PageIndex::build(&docs).unwrap();

        let sets: Vec<&str> = index.pages().iter().map(|p| p.set_name.as_str()).collect();
        assert_eq!(sets, vec!["api", "docs"]);
        assert_eq!(index.for_set("docs").count(), 1);
    }

    #[test]
    fn test_find_by_slug() {
        let docs = docs(
            MockStorage::new()
                .with_file("/docs/10-guides/20-intro.md", "# Intro")
                .with_file("/docs/index.md", "# Home"),
        );

        let index = PageIndex::build(&docs).unwrap();

        assert_eq!(
            index.find("docs", "guides/intro").map(|p| p.path.as_str()),
            Some("10-guides/20-intro.md")
        );
        assert_eq!(index.find("docs", "index").map(|p| p.title.as_deref()), Some(Some("Home")));
        assert!(index.find("docs", "missing").is_none());
        assert!(index.find("other", "index").is_none());
    }

    #[test]
    fn test_found_page_outlives_set_name() {
        let docs = docs(MockStorage::new().with_file("/docs/a.md", "# A"));
        let index = PageIndex::build(&docs).unwrap();

        let (by_slug, by_path) = {
            let set_name = String::from("docs");
            (index.find(&set_name, "a"), index.get(&set_name, "a.md"))
        };

        assert_eq!(by_slug.map(|p| p.path.as_str()), Some("a.md"));
        assert_eq!(by_slug, by_path);
    }

    #[test]
    fn test_unlistable_set_fails_build() {
        let mut docs = docs(MockStorage::new().with_file("/docs/a.md", "# A"));
        docs.add_set(Set::new("broken", "/nowhere"));

        assert!(matches!(PageIndex::build(&docs), Err(DocsError::Storage(_))));
    }

    #[test]
    fn test_empty_set() {
        let docs = docs(MockStorage::new().with_dir("/docs"));

        let index = PageIndex::build(&docs).unwrap();

        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
    }
}
