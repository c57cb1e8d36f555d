//! Documentation service: resolves pages of registered sets.
//!
//! Every operation takes a set name and resolves it through the [`SetRegistry`]
//! first, so an unknown name always fails with [`DocsError::SetNotFound`]. A page
//! file that is missing is a normal outcome and yields `None` or an empty value.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use mdocs_markdown::{FrontMatter, MarkdownEngine, Section, first_h1, sections};
use mdocs_storage::Storage;

use crate::DocsError;
use crate::page::MARKDOWN_EXTENSION;
use crate::sets::{Set, SetRegistry};

/// Resolves set names and relative paths to page content and metadata.
pub struct Documentation {
    registry: SetRegistry,
    storage: Arc<dyn Storage>,
    engine: Arc<dyn MarkdownEngine>,
}

impl Documentation {
    /// Create a service with an empty set registry.
    pub fn new(storage: Arc<dyn Storage>, engine: Arc<dyn MarkdownEngine>) -> Self {
        Self::with_registry(SetRegistry::new(), storage, engine)
    }

    /// Create a service over an already populated registry.
    pub fn with_registry(
        registry: SetRegistry,
        storage: Arc<dyn Storage>,
        engine: Arc<dyn MarkdownEngine>,
    ) -> Self {
        Self {
            registry,
            storage,
            engine,
        }
    }

    /// Register or replace a set.
    pub fn add_set(&mut self, set: Set) {
        self.registry.add_set(set);
    }

    /// Look up a set by name.
    ///
    /// # Errors
    ///
    /// Returns [`DocsError::SetNotFound`] for unregistered names.
    pub fn set(&self, name: &str) -> Result<&Set, DocsError> {
        self.registry.set(name)
    }

    /// All sets in priority order.
    #[must_use]
    pub fn sets(&self) -> Vec<&Set> {
        self.registry.sets()
    }

    /// The underlying set registry.
    #[must_use]
    pub fn registry(&self) -> &SetRegistry {
        &self.registry
    }

    /// The markdown engine pages are rendered with.
    #[must_use]
    pub fn engine(&self) -> &dyn MarkdownEngine {
        self.engine.as_ref()
    }

    /// Relative paths of all markdown files of a set, `/`-separated and sorted.
    ///
    /// # Errors
    ///
    /// Returns [`DocsError::SetNotFound`] for unknown sets and [`DocsError::Storage`]
    /// if the set root can't be listed.
    pub fn pages(&self, set_name: &str) -> Result<Vec<String>, DocsError> {
        let set = self.set(set_name)?;
        let mut paths = self.storage.list(set.root())?;
        paths.retain(|p| p.ends_with(MARKDOWN_EXTENSION));
        Ok(paths)
    }

    /// [`pages`](Self::pages) of every set, in priority order.
    ///
    /// # Errors
    ///
    /// Fails on the first set whose root can't be listed.
    pub fn all_pages(&self) -> Result<Vec<(String, Vec<String>)>, DocsError> {
        self.sets()
            .into_iter()
            .map(|set| Ok((set.name.clone(), self.pages(&set.name)?)))
            .collect()
    }

    /// Absolute location of `path` inside a set.
    ///
    /// Leading slashes of `path` are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`DocsError::InvalidPath`] for empty paths and paths with `..` or
    /// other non-plain components.
    pub fn page_path(&self, set_name: &str, path: &str) -> Result<PathBuf, DocsError> {
        let set = self.set(set_name)?;
        let relative = Path::new(path.trim_start_matches('/'));

        let plain = relative.components().next().is_some()
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if !plain {
            return Err(DocsError::InvalidPath(path.to_owned()));
        }

        Ok(set.root().join(relative))
    }

    /// Raw bytes of a page, `None` if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`DocsError::Storage`] for read failures other than a missing file.
    pub fn page_bytes(&self, set_name: &str, path: &str) -> Result<Option<Vec<u8>>, DocsError> {
        let full = self.page_path(set_name, path)?;
        match self.storage.read(&full) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.is_not_found() => {
                tracing::debug!(set = set_name, path, "page file missing");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Raw text of a page, `None` if the file does not exist.
    ///
    /// Invalid UTF-8 sequences are replaced with `U+FFFD`.
    ///
    /// # Errors
    ///
    /// See [`page_bytes`](Self::page_bytes).
    pub fn page_content_raw(&self, set_name: &str, path: &str) -> Result<Option<String>, DocsError> {
        Ok(self.page_bytes(set_name, path)?.map(decode))
    }

    /// Rendered HTML of a page, `None` if the file is missing or empty.
    ///
    /// # Errors
    ///
    /// See [`page_content_raw`](Self::page_content_raw).
    pub fn page_content(&self, set_name: &str, path: &str) -> Result<Option<String>, DocsError> {
        Ok(self
            .page_content_raw(set_name, path)?
            .and_then(|raw| self.render(&raw)))
    }

    /// Front-matter of a page, empty if the file is missing or has none.
    ///
    /// Uses the engine's front-matter path only; nothing is rendered.
    ///
    /// # Errors
    ///
    /// See [`page_content_raw`](Self::page_content_raw).
    pub fn page_matter(&self, set_name: &str, path: &str) -> Result<FrontMatter, DocsError> {
        Ok(self
            .page_content_raw(set_name, path)?
            .map(|raw| self.engine.extract_front_matter(&raw))
            .unwrap_or_default())
    }

    /// Title of a page: front-matter `title`, else the first `<h1>` of its HTML.
    ///
    /// # Errors
    ///
    /// See [`page_content_raw`](Self::page_content_raw).
    pub fn page_title(&self, set_name: &str, path: &str) -> Result<Option<String>, DocsError> {
        let Some(raw) = self.page_content_raw(set_name, path)? else {
            return Ok(None);
        };
        let matter = self.engine.extract_front_matter(&raw);
        Ok(self.title_of(&raw, &matter))
    }

    /// Modification time of a page in seconds since the epoch, `None` if missing.
    ///
    /// # Errors
    ///
    /// Returns [`DocsError::Storage`] for failures other than a missing file.
    pub fn page_last_modified(&self, set_name: &str, path: &str) -> Result<Option<f64>, DocsError> {
        let full = self.page_path(set_name, path)?;
        match self.storage.mtime(&full) {
            Ok(mtime) => Ok(Some(mtime)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Level 2+ headings of a page, empty if the file is missing.
    ///
    /// # Errors
    ///
    /// See [`page_content_raw`](Self::page_content_raw).
    pub fn page_sections(&self, set_name: &str, path: &str) -> Result<Vec<Section>, DocsError> {
        Ok(self
            .page_content_raw(set_name, path)?
            .map(|raw| sections(&raw))
            .unwrap_or_default())
    }

    /// Render raw markdown, treating empty text as no content.
    pub(crate) fn render(&self, raw: &str) -> Option<String> {
        (!raw.is_empty()).then(|| self.engine.render_html(raw))
    }

    /// Title from already parsed front-matter, rendering only when needed.
    pub(crate) fn title_of(&self, raw: &str, matter: &FrontMatter) -> Option<String> {
        matter_title(matter).or_else(|| self.render(raw).as_deref().and_then(first_h1))
    }
}

impl std::fmt::Debug for Documentation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Documentation")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

/// Decode page bytes as UTF-8, lossily if needed.
pub(crate) fn decode(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap_or_else(|e| {
        tracing::debug!("page is not valid UTF-8, decoding lossily");
        String::from_utf8_lossy(e.as_bytes()).into_owned()
    })
}

/// Non-empty `title` value of the front-matter.
fn matter_title(matter: &FrontMatter) -> Option<String> {
    let title = match matter.get("title")? {
        serde_json::Value::String(s) => s.trim().to_owned(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    (!title.is_empty()).then_some(title)
}
