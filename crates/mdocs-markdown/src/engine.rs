//! pulldown-cmark backed [`MarkdownEngine`].

use pulldown_cmark::{Options, Parser, html};

use crate::MarkdownEngine;
use crate::front_matter::{FrontMatter, extract_front_matter};

/// Option bag for [`PulldownEngine`].
///
/// Front-matter blocks are always recognized; everything else is opt-in except
/// GitHub Flavored Markdown, which is enabled by default.
#[derive(Clone, Debug, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct EngineOptions {
    /// Tables, strikethrough, task lists and GFM alerts.
    pub gfm: bool,
    /// Footnote references and definitions.
    pub footnotes: bool,
    /// Curly quotes, dashes and ellipses.
    pub smart_punctuation: bool,
    /// `{#id .class}` attributes on headings.
    pub heading_attributes: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            gfm: true,
            footnotes: false,
            smart_punctuation: false,
            heading_attributes: false,
        }
    }
}

impl EngineOptions {
    /// Get parser options for this configuration.
    #[must_use]
    pub fn parser_options(&self) -> Options {
        let mut options = Options::ENABLE_YAML_STYLE_METADATA_BLOCKS;
        if self.gfm {
            options |= Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS
                | Options::ENABLE_GFM;
        }
        if self.footnotes {
            options |= Options::ENABLE_FOOTNOTES;
        }
        if self.smart_punctuation {
            options |= Options::ENABLE_SMART_PUNCTUATION;
        }
        if self.heading_attributes {
            options |= Options::ENABLE_HEADING_ATTRIBUTES;
        }
        options
    }
}

/// Markdown engine backed by pulldown-cmark.
#[derive(Clone, Debug, Default)]
pub struct PulldownEngine {
    options: EngineOptions,
}

impl PulldownEngine {
    /// Create an engine with the given options.
    #[must_use]
    pub fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    /// Options this engine was built with.
    #[must_use]
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }
}

impl MarkdownEngine for PulldownEngine {
    fn render_html(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options.parser_options());
        let mut output = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut output, parser);
        output
    }

    fn extract_front_matter(&self, markdown: &str) -> FrontMatter {
        extract_front_matter(markdown)
    }
}
