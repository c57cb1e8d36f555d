//! Front-matter extraction.
//!
//! A front-matter block is a YAML mapping fenced by `---` lines at the very top of
//! the file (closing fence `---` or `...`). Detection is delegated to pulldown-cmark's
//! metadata block support so the renderer and the extractor always agree on what
//! counts as front matter.

use pulldown_cmark::{Event, MetadataBlockKind, Options, Parser, Tag, TagEnd};

/// Parsed front-matter: string keys to arbitrary JSON-compatible values.
pub type FrontMatter = serde_json::Map<String, serde_json::Value>;

/// Extract the leading front-matter block of `markdown`.
///
/// Only the events of the metadata block are consumed; the rest of the document
/// is never inline-parsed or rendered. Text without a block, with an empty block,
/// or with YAML that is not a mapping yields an empty map.
#[must_use]
pub fn extract_front_matter(markdown: &str) -> FrontMatter {
    let mut events = Parser::new_ext(markdown, Options::ENABLE_YAML_STYLE_METADATA_BLOCKS);

    let Some(Event::Start(Tag::MetadataBlock(MetadataBlockKind::YamlStyle))) = events.next()
    else {
        return FrontMatter::new();
    };

    let mut yaml = String::new();
    for event in events {
        match event {
            Event::Text(text) => yaml.push_str(&text),
            Event::End(TagEnd::MetadataBlock(_)) => break,
            _ => {}
        }
    }

    parse_yaml_mapping(&yaml)
}

/// Parse YAML text as a mapping, falling back to an empty map.
fn parse_yaml_mapping(yaml: &str) -> FrontMatter {
    let trimmed = yaml.trim();
    if trimmed.is_empty() {
        return FrontMatter::new();
    }

    match serde_yaml::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::Object(map)) => map,
        Ok(_) => {
            tracing::debug!("front matter is not a mapping, ignoring");
            FrontMatter::new()
        }
        Err(e) => {
            tracing::debug!(error = %e, "malformed front matter, ignoring");
            FrontMatter::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_extract_title() {
        let matter = extract_front_matter("---\ntitle: Hello\n---\n# Body");

        assert_eq!(matter.len(), 1);
        assert_eq!(matter.get("title"), Some(&json!("Hello")));
    }

    #[test]
    fn test_extract_nested_values() {
        let source = "---\ntitle: \"Quoted\"\ntags:\n  - a\n  - b\nextra:\n  owner: team\n---\nBody";

        let matter = extract_front_matter(source);

        assert_eq!(matter.get("title"), Some(&json!("Quoted")));
        assert_eq!(matter.get("tags"), Some(&json!(["a", "b"])));
        assert_eq!(matter.get("extra"), Some(&json!({"owner": "team"})));
    }

    #[test]
    fn test_extract_dot_closing_fence() {
        let matter = extract_front_matter("---\ntitle: Dots\n...\nBody");

        assert_eq!(matter.get("title"), Some(&json!("Dots")));
    }

    #[test]
    fn test_no_front_matter() {
        assert!(extract_front_matter("# Welcome").is_empty());
        assert!(extract_front_matter("").is_empty());
    }

    #[test]
    fn test_block_not_at_top_is_ignored() {
        let matter = extract_front_matter("# Title\n\n---\ntitle: Late\n---\n");

        assert!(matter.is_empty());
    }

    #[test]
    fn test_malformed_yaml_is_empty() {
        let matter = extract_front_matter("---\ntitle: [unclosed\n---\nBody");

        assert!(matter.is_empty());
    }

    #[test]
    fn test_scalar_yaml_is_empty() {
        let matter = extract_front_matter("---\njust a string\n---\nBody");

        assert!(matter.is_empty());
    }
}
