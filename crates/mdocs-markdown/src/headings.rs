//! Heading helpers: page title fallback and in-page sections.

use std::sync::LazyLock;

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use regex::Regex;
use serde::Serialize;

static H1_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<h1[^>]*>(.*?)</h1>").expect("valid h1 regex"));

/// A sub-heading (level 2 or deeper) of a page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Heading text without markdown markup.
    pub title: String,
    /// URL-friendly anchor derived from the title.
    pub slug: String,
    /// Heading level (2 to 6).
    pub depth: u8,
}

/// Extract the inner HTML of the first `<h1>` element, trimmed.
///
/// Matching is case-insensitive and spans newlines. Returns `None` if there is no
/// `<h1>` or its content is blank.
#[must_use]
pub fn first_h1(html: &str) -> Option<String> {
    let inner = H1_REGEX.captures(html)?.get(1)?.as_str().trim();
    (!inner.is_empty()).then(|| inner.to_owned())
}

/// Collect the level 2+ headings of raw markdown, in document order.
///
/// Headings inside code blocks and the front-matter block are not headings and are
/// never reported.
#[must_use]
pub fn sections(markdown: &str) -> Vec<Section> {
    let parser = Parser::new_ext(markdown, Options::ENABLE_YAML_STYLE_METADATA_BLOCKS);

    let mut sections = Vec::new();
    let mut current: Option<(u8, String)> = None;

    for event in parser {
        match event {
            Event::Start(Tag::Heading { level, .. }) if level != HeadingLevel::H1 => {
                current = Some((heading_depth(level), String::new()));
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some((_, title)) = current.as_mut() {
                    title.push_str(&text);
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((depth, title)) = current.take() {
                    let title = title.trim().to_owned();
                    if !title.is_empty() {
                        sections.push(Section {
                            slug: slugify(&title),
                            title,
                            depth,
                        });
                    }
                }
            }
            _ => {}
        }
    }

    sections
}

/// Turn heading text into an anchor slug.
///
/// Lowercases, drops everything except letters, digits, `_`, `-` and spaces, then
/// replaces spaces with `-`.
#[must_use]
pub fn slugify(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | ' '))
        .map(|c| if c == ' ' { '-' } else { c })
        .collect()
}

fn heading_depth(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_first_h1_simple() {
        assert_eq!(first_h1("<h1>Welcome</h1>\n"), Some("Welcome".to_owned()));
    }

    #[test]
    fn test_first_h1_with_attributes_and_case() {
        let html = "<p>intro</p><H1 id=\"top\">\n  Getting Started \n</H1><h1>Second</h1>";

        assert_eq!(first_h1(html), Some("Getting Started".to_owned()));
    }

    #[test]
    fn test_first_h1_keeps_inner_markup() {
        assert_eq!(
            first_h1("<h1>Use <code>mdocs</code></h1>"),
            Some("Use <code>mdocs</code>".to_owned())
        );
    }

    #[test]
    fn test_first_h1_missing_or_blank() {
        assert_eq!(first_h1("<h2>Not a title</h2>"), None);
        assert_eq!(first_h1("<h1>   </h1>"), None);
        assert_eq!(first_h1(""), None);
    }

    #[test]
    fn test_sections_levels_and_slugs() {
        let source = "# Title\n\n## Getting Started\n\ntext\n\n### Install `mdocs`\n\n## FAQ & Help\n";

        let found = sections(source);

        assert_eq!(
            found,
            vec![
                Section {
                    title: "Getting Started".to_owned(),
                    slug: "getting-started".to_owned(),
                    depth: 2,
                },
                Section {
                    title: "Install mdocs".to_owned(),
                    slug: "install-mdocs".to_owned(),
                    depth: 3,
                },
                Section {
                    title: "FAQ & Help".to_owned(),
                    slug: "faq--help".to_owned(),
                    depth: 2,
                },
            ]
        );
    }

    #[test]
    fn test_sections_ignore_code_blocks_and_front_matter() {
        let source = "---\ntitle: Page\n---\n\n```bash\n## not a heading\n```\n\n## Real\n";

        let found = sections(source);

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Real");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("  What's new?  "), "whats-new");
        assert_eq!(slugify("snake_case-and-kebab"), "snake_case-and-kebab");
        assert_eq!(slugify("Über Größe"), "über-größe");
    }
}
