//! CLI command implementations.

pub(crate) mod index;
pub(crate) mod nav;
pub(crate) mod render;
pub(crate) mod sets;

use std::sync::Arc;

use mdocs_cache::{CacheStore, FileCache, MemoryCache, NullCache};
use mdocs_config::{CacheStoreKind, Config, MarkdownConfig};
use mdocs_markdown::{EngineOptions, PulldownEngine};
use mdocs_site::{Documentation, RenderCache, Set, Site};
use mdocs_storage::FsStorage;

pub(crate) use index::IndexArgs;
pub(crate) use nav::NavArgs;
pub(crate) use render::RenderArgs;

/// Build the site described by `config`.
///
/// `version` tags the file cache; a different version wipes it.
pub(crate) fn build_site(config: &Config, version: &str) -> Site {
    let mut docs = Documentation::new(
        Arc::new(FsStorage::new()),
        Arc::new(PulldownEngine::new(engine_options(&config.markdown))),
    );
    for set in &config.sets_resolved {
        docs.add_set(
            Set::new(set.name.clone(), set.path.clone())
                .with_priority(set.priority)
                .with_metadata(set.metadata.clone()),
        );
    }

    let cache = &config.cache_resolved;
    let store: Arc<dyn CacheStore> = match cache.store {
        CacheStoreKind::File => Arc::new(FileCache::new(cache.dir.clone(), version)),
        CacheStoreKind::Memory => Arc::new(MemoryCache::new()),
        CacheStoreKind::Disabled => Arc::new(NullCache),
    };

    Site::new(docs, RenderCache::new(store, cache.write_back))
}

fn engine_options(markdown: &MarkdownConfig) -> EngineOptions {
    EngineOptions {
        gfm: markdown.gfm,
        footnotes: markdown.footnotes,
        smart_punctuation: markdown.smart_punctuation,
        heading_attributes: markdown.heading_attributes,
    }
}


#[cfg(test)]
mod tests {
    use std::path::Path;

    use pretty_assertions::assert_eq;

    use super::*;

    fn config(dir: &Path, toml: &str) -> Config {
        Config::from_toml_str(toml, dir).unwrap()
    }

    #[test]
    fn test_build_site_registers_sets() {
        let tmp = tempfile::TempDir::new().unwrap();
        let config = config(
            tmp.path(),
            r#"
[cache]
store = "none"

[[sets]]
name = "guide"
path = "guide"

[[sets]]
name = "api"
path = "api"
priority = 1
"#,
        );

        let site = build_site(&config, "test");

        let names: Vec<&str> = site.sets().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["api", "guide"]);
        assert_eq!(
            site.documentation().set("guide").unwrap().root(),
            tmp.path().join("guide")
        );
    }

    #[test]
    fn test_build_site_file_cache_writes_version() {
        let tmp = tempfile::TempDir::new().unwrap();
        let config = config(tmp.path(), "[cache]\ndir = \"cache\"\n");

        let site = build_site(&config, "1.2.3");

        assert!(site.render_cache().write_back());
        let version = std::fs::read_to_string(tmp.path().join("cache/VERSION")).unwrap();
        assert_eq!(version, "1.2.3");
    }

    #[test]
    fn test_engine_options_follow_config() {
        let markdown = MarkdownConfig {
            gfm: false,
            footnotes: true,
            smart_punctuation: false,
            heading_attributes: true,
        };

        let options = engine_options(&markdown);

        assert_eq!(
            options,
            EngineOptions {
                gfm: false,
                footnotes: true,
                smart_punctuation: false,
                heading_attributes: true,
            }
        );
    }
}
