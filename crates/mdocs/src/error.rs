//! CLI error types.

use mdocs_config::ConfigError;
use mdocs_site::DocsError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Docs(#[from] DocsError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("Page not found: \"{slug}\" in set \"{set}\"")]
    PageNotFound { set: String, slug: String },
}
