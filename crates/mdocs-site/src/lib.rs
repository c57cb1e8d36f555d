//! Document sets, page index, navigation and render cache for mdocs.
//!
//! This crate provides:
//! - [`SetRegistry`]: named document sets ordered by priority
//! - [`Documentation`]: page content, front-matter and titles of a set
//! - [`PageIndex`]: one [`Page`] per markdown file, rebuilt from disk on demand
//! - [`Navigation`]: category grouping and previous/next traversal
//! - [`RenderCache`]: rendered HTML keyed by content checksum
//! - [`Site`]: facade combining all of the above
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::sync::Arc;
//! use mdocs_cache::NullCache;
//! use mdocs_markdown::PulldownEngine;
//! use mdocs_site::{Documentation, RenderCache, Set, Site};
//! use mdocs_storage::FsStorage;
//!
//! let mut docs = Documentation::new(Arc::new(FsStorage::new()), Arc::new(PulldownEngine::default()));
//! docs.add_set(Set::new("guide", "docs/guide"));
//! let site = Site::new(docs, RenderCache::new(Arc::new(NullCache), false));
//!
//! if let Some(page) = site.page("guide", "getting-started/install")? {
//!     let html = site.page_content(&page)?;
//!     let nav = site.navigation("guide")?;
//!     let next = nav.next(&page);
//! }
//! # Ok(())
//! # }
//! ```

mod documentation;
mod error;
mod index;
mod navigation;
mod page;
mod render_cache;
mod sets;
mod site;

pub use documentation::Documentation;
pub use error::DocsError;
pub use index::{PageIndex, build_page, build_set};
pub use navigation::{CategoryGroup, Navigation};
pub use page::{MARKDOWN_EXTENSION, Page, category, category_raw, checksum, filename, slug};
pub use render_cache::{CACHE_PREFIX, RenderCache, cache_key};
pub use sets::{DEFAULT_PRIORITY, Set, SetRegistry};
pub use site::Site;
