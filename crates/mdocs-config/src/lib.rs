//! Configuration management for mdocs.
//!
//! Parses `mdocs.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `cache.dir`
//! - `sets[].path`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the render cache backend.
    pub cache_store: Option<CacheStoreKind>,
    /// Override the render cache directory.
    pub cache_dir: Option<PathBuf>,
    /// Override cache write-back on misses.
    pub write_back: Option<bool>,
}

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "mdocs.toml";

/// Priority given to sets that don't declare one.
pub const DEFAULT_PRIORITY: i64 = 10;

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Render cache configuration (paths are relative strings from TOML).
    cache: CacheConfigRaw,
    /// Markdown rendering options.
    pub markdown: MarkdownConfig,
    /// Documentation sets as declared in TOML.
    sets: Vec<SetConfigRaw>,

    /// Resolved cache configuration (set after loading).
    #[serde(skip)]
    pub cache_resolved: CacheConfig,
    /// Resolved documentation sets (set after loading).
    #[serde(skip)]
    pub sets_resolved: Vec<SetConfig>,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Backend of the render cache.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheStoreKind {
    /// Rendered HTML persisted under the cache directory.
    #[default]
    File,
    /// Process-local cache, gone when the process exits.
    Memory,
    /// No cache: every page is rendered live.
    #[serde(rename = "none")]
    Disabled,
}

impl std::str::FromStr for CacheStoreKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "file" => Ok(Self::File),
            "memory" => Ok(Self::Memory),
            "none" => Ok(Self::Disabled),
            other => Err(ConfigError::Validation(format!(
                "unknown cache store '{other}' (expected file, memory or none)"
            ))),
        }
    }
}

/// Raw cache configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct CacheConfigRaw {
    store: Option<CacheStoreKind>,
    dir: Option<String>,
    write_back: Option<bool>,
}

/// Resolved render cache configuration with absolute paths.
#[derive(Debug, Default)]
pub struct CacheConfig {
    /// Cache backend.
    pub store: CacheStoreKind,
    /// Directory used by the file backend.
    pub dir: PathBuf,
    /// Store live renders after a cache miss.
    pub write_back: bool,
}

/// Markdown rendering options.
#[derive(Debug, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct MarkdownConfig {
    /// GitHub Flavored Markdown extensions.
    pub gfm: bool,
    /// Footnotes.
    pub footnotes: bool,
    /// Typographic quotes and dashes.
    pub smart_punctuation: bool,
    /// `{#id .class}` heading attributes.
    pub heading_attributes: bool,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            gfm: true,
            footnotes: false,
            smart_punctuation: false,
            heading_attributes: false,
        }
    }
}

/// Raw set declaration as parsed from TOML.
#[derive(Debug, Deserialize)]
struct SetConfigRaw {
    name: String,
    path: String,
    priority: Option<i64>,
    #[serde(default)]
    metadata: serde_json::Map<String, serde_json::Value>,
}

/// Resolved documentation set declaration.
#[derive(Clone, Debug, PartialEq)]
pub struct SetConfig {
    /// Unique set name.
    pub name: String,
    /// Absolute root directory of the set.
    pub path: PathBuf,
    /// Ordering priority; lower sorts first.
    pub priority: i64,
    /// Free-form metadata attached to the set.
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`sets[0].path`").
        field: String,
        /// Error message (e.g., "${`DOCS_ROOT`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `mdocs.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Parse configuration from TOML text, resolving paths against `config_dir`.
    ///
    /// # Errors
    ///
    /// Returns error if parsing, env expansion or validation fails.
    pub fn from_toml_str(content: &str, config_dir: &Path) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;
        config.validate_raw()?;
        config.resolve_paths(config_dir);

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(store) = settings.cache_store {
            self.cache_resolved.store = store;
        }
        if let Some(dir) = &settings.cache_dir {
            self.cache_resolved.dir.clone_from(dir);
        }
        if let Some(write_back) = settings.write_back {
            self.cache_resolved.write_back = write_back;
        }
    }

    /// Directory holding the config file, if one was loaded.
    #[must_use]
    pub fn config_dir(&self) -> Option<&Path> {
        self.config_path.as_deref().and_then(Path::parent)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            cache: CacheConfigRaw::default(),
            markdown: MarkdownConfig::default(),
            sets: Vec::new(),
            cache_resolved: CacheConfig {
                store: CacheStoreKind::File,
                dir: base.join(".mdocs").join("cache"),
                write_back: true,
            },
            sets_resolved: Vec::new(),
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config_dir = path.parent().unwrap_or(Path::new("."));

        let mut config = Self::from_toml_str(&content, config_dir)?;
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate declared values before resolution.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if a set has an empty name or path.
    fn validate_raw(&self) -> Result<(), ConfigError> {
        for (i, set) in self.sets.iter().enumerate() {
            require_non_empty(&set.name, &format!("sets[{i}].name"))?;
            require_non_empty(&set.path, &format!("sets[{i}].path"))?;
        }
        if let Some(dir) = &self.cache.dir {
            require_non_empty(dir, "cache.dir")?;
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref dir) = self.cache.dir {
            self.cache.dir = Some(expand::expand_env(dir, "cache.dir")?);
        }

        for (i, set) in self.sets.iter_mut().enumerate() {
            set.path = expand::expand_env(&set.path, &format!("sets[{i}].path"))?;
        }

        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.cache_resolved = CacheConfig {
            store: self.cache.store.unwrap_or_default(),
            dir: self.cache.dir.as_deref().map_or_else(
                || config_dir.join(".mdocs").join("cache"),
                |dir| config_dir.join(dir),
            ),
            write_back: self.cache.write_back.unwrap_or(true),
        };

        self.sets_resolved = self
            .sets
            .iter()
            .map(|set| SetConfig {
                name: set.name.clone(),
                path: config_dir.join(&set.path),
                priority: set.priority.unwrap_or(DEFAULT_PRIORITY),
                metadata: set.metadata.clone(),
            })
            .collect();
    }
}
