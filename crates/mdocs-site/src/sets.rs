//! Registry of named document sets.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::DocsError;

/// Priority given to sets registered without one.
pub const DEFAULT_PRIORITY: i64 = 10;

/// A named root directory of markdown files.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Set {
    /// Unique name, used as the lookup key.
    pub name: String,
    /// Root directory of the set's files.
    pub root: PathBuf,
    /// Free-form metadata for the host.
    pub metadata: serde_json::Map<String, serde_json::Value>,
    /// Ordering priority; lower sorts first.
    pub priority: i64,
}

impl Set {
    /// Create a set with empty metadata and the default priority.
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
            metadata: serde_json::Map::new(),
            priority: DEFAULT_PRIORITY,
        }
    }

    /// Set the ordering priority.
    #[must_use]
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Attach metadata.
    #[must_use]
    pub fn with_metadata(mut self, metadata: serde_json::Map<String, serde_json::Value>) -> Self {
        self.metadata = metadata;
        self
    }

    /// Root directory of the set.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// In-memory catalog of sets, keyed by name.
///
/// Populated once at startup; lookups afterwards take `&self`. The root directory
/// is not checked here, a missing root surfaces on the first listing.
#[derive(Clone, Debug, Default)]
pub struct SetRegistry {
    /// Sets in registration order.
    sets: Vec<Set>,
}

impl SetRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `set`, replacing any set with the same name.
    ///
    /// A replaced set keeps its original registration slot, which is what breaks
    /// priority ties in [`sets`](Self::sets).
    pub fn add_set(&mut self, set: Set) {
        match self.sets.iter_mut().find(|s| s.name == set.name) {
            Some(existing) => {
                tracing::debug!(set = %set.name, "replacing registered set");
                *existing = set;
            }
            None => self.sets.push(set),
        }
    }

    /// Look up a set by name.
    ///
    /// # Errors
    ///
    /// Returns [`DocsError::SetNotFound`] if no set is registered under `name`.
    pub fn set(&self, name: &str) -> Result<&Set, DocsError> {
        self.sets
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| DocsError::SetNotFound(name.to_owned()))
    }

    /// All sets sorted by ascending priority, ties in registration order.
    #[must_use]
    pub fn sets(&self) -> Vec<&Set> {
        let mut sorted: Vec<&Set> = self.sets.iter().collect();
        sorted.sort_by_key(|s| s.priority);
        sorted
    }

    /// Number of registered sets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Whether no set is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}
