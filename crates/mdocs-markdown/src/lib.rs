//! Markdown engine for mdocs.
//!
//! The engine is the external capability the documentation core builds on: it
//! converts markdown to HTML and, separately, extracts the front-matter block
//! without rendering anything. Both live behind the [`MarkdownEngine`] trait so
//! hosts can swap the implementation.
//!
//! - [`PulldownEngine`]: pulldown-cmark backed implementation
//! - [`first_h1`]: title fallback from rendered HTML
//! - [`sections`]: sub-headings of a page for in-page navigation
//!
//! # Example
//!
//! ```
//! use mdocs_markdown::{EngineOptions, MarkdownEngine, PulldownEngine};
//!
//! let engine = PulldownEngine::new(EngineOptions::default());
//! let source = "---\ntitle: Hello\n---\n# Body";
//!
//! assert_eq!(engine.extract_front_matter(source)["title"], "Hello");
//! assert_eq!(engine.render_html(source), "<h1>Body</h1>\n");
//! ```

mod engine;
mod front_matter;
mod headings;

pub use engine::{EngineOptions, PulldownEngine};
pub use front_matter::{FrontMatter, extract_front_matter};
pub use headings::{Section, first_h1, sections, slugify};

/// Markdown conversion capability used by the documentation service.
///
/// Implementations must be cheap to share across threads; the service holds one
/// behind an `Arc` for its whole lifetime.
pub trait MarkdownEngine: Send + Sync {
    /// Convert markdown text to HTML.
    ///
    /// A leading front-matter block is never part of the output.
    fn render_html(&self, markdown: &str) -> String;

    /// Extract the front-matter block as a key-value map.
    ///
    /// Must not perform HTML rendering. Returns an empty map when the text has no
    /// front-matter block or the block is not a valid mapping.
    fn extract_front_matter(&self, markdown: &str) -> FrontMatter;
}
