//! Site facade tying the documentation service to the render cache.
//!
//! [`Site`] is handed to every consumer explicitly; there is no global instance.
//!
//! # Thread Safety
//!
//! All methods take `&self`. The set registry is filled before the site is shared
//! and never changes afterwards. Concurrent index builds each scan the filesystem
//! on their own; the render cache is keyed by content checksum, so concurrent
//! renders of the same page write identical entries.

use mdocs_markdown::Section;

use crate::DocsError;
use crate::documentation::{Documentation, decode};
use crate::index::{self, PageIndex};
use crate::navigation::Navigation;
use crate::page::{self, Page};
use crate::render_cache::RenderCache;
use crate::sets::Set;

/// Documentation sets with navigation and cached rendering.
#[derive(Debug)]
pub struct Site {
    docs: Documentation,
    cache: RenderCache,
}

impl Site {
    /// Create a site from a populated documentation service and a render cache.
    #[must_use]
    pub fn new(docs: Documentation, cache: RenderCache) -> Self {
        Self { docs, cache }
    }

    /// The documentation service.
    #[must_use]
    pub fn documentation(&self) -> &Documentation {
        &self.docs
    }

    /// The render cache.
    #[must_use]
    pub fn render_cache(&self) -> &RenderCache {
        &self.cache
    }

    /// All sets in priority order.
    #[must_use]
    pub fn sets(&self) -> Vec<&Set> {
        self.docs.sets()
    }

    /// Build the page index of every set from current filesystem state.
    ///
    /// # Errors
    ///
    /// See [`PageIndex::build`].
    pub fn build_index(&self) -> Result<PageIndex, DocsError> {
        PageIndex::build(&self.docs)
    }

    /// Navigation over one set, built from a fresh scan of that set.
    ///
    /// # Errors
    ///
    /// Returns [`DocsError::SetNotFound`] for unknown sets, or a storage error if
    /// the set can't be listed.
    pub fn navigation(&self, set_name: &str) -> Result<Navigation, DocsError> {
        let pages = index::build_set(&self.docs, set_name)?;
        Ok(Navigation::new(set_name, pages))
    }

    /// Page of a set by slug, `None` if no page has that slug.
    ///
    /// # Errors
    ///
    /// Same as [`navigation`](Self::navigation).
    pub fn page(&self, set_name: &str, slug: &str) -> Result<Option<Page>, DocsError> {
        let pages = index::build_set(&self.docs, set_name)?;
        Ok(pages.into_iter().find(|p| p.slug == slug))
    }

    /// Landing page of a set: its first page in navigation order.
    ///
    /// # Errors
    ///
    /// Same as [`navigation`](Self::navigation).
    pub fn entry_page(&self, set_name: &str) -> Result<Option<Page>, DocsError> {
        Ok(self.navigation(set_name)?.first().cloned())
    }

    /// Rendered HTML of a page.
    ///
    /// The render cache is checked first. On a miss the file is rendered live and,
    /// when write-back is enabled, the result is stored under the checksum of the
    /// content that was actually rendered. Returns `None` if the file is gone.
    ///
    /// # Errors
    ///
    /// Fails on unknown sets and read errors other than a missing file.
    pub fn page_content(&self, page: &Page) -> Result<Option<String>, DocsError> {
        if let Some(html) = self.cache.get(&page.set_name, &page.path, &page.checksum) {
            return Ok(Some(html));
        }

        let Some(bytes) = self.docs.page_bytes(&page.set_name, &page.path)? else {
            return Ok(None);
        };
        let checksum = page::checksum(&bytes);
        let Some(html) = self.docs.render(&decode(bytes)) else {
            return Ok(None);
        };

        if self.cache.write_back() {
            self.cache.put(&page.set_name, &page.path, &checksum, &html);
        }

        Ok(Some(html))
    }

    /// Rendered HTML of a page, bypassing the render cache entirely.
    ///
    /// # Errors
    ///
    /// Same as [`page_content`](Self::page_content).
    pub fn page_content_live(&self, page: &Page) -> Result<Option<String>, DocsError> {
        self.docs.page_content(&page.set_name, &page.path)
    }

    /// Raw markdown of a page.
    ///
    /// # Errors
    ///
    /// Same as [`page_content`](Self::page_content).
    pub fn page_content_raw(&self, page: &Page) -> Result<Option<String>, DocsError> {
        self.docs.page_content_raw(&page.set_name, &page.path)
    }

    /// Level 2+ headings of a page.
    ///
    /// # Errors
    ///
    /// Same as [`page_content`](Self::page_content).
    pub fn page_sections(&self, page: &Page) -> Result<Vec<Section>, DocsError> {
        self.docs.page_sections(&page.set_name, &page.path)
    }
}
