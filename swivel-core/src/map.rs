//! Toggle map
//!
//! Key-value namespace holding the enablement state of behavior slugs.
//! Population happens up front from whatever source the caller uses;
//! during a selection episode the map is only read. Callers that refresh
//! state concurrently should swap in a fresh map rather than mutate one
//! that episodes are reading.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mapping from behavior slug to enabled state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Map {
    slugs: HashMap<String, bool>,
}

impl Map {
    /// Separator used to compose hierarchical slugs, e.g. `"Feature:variant"`.
    pub const DELIMITER: &'static str = ":";

    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the given slug is enabled. Absent slugs are disabled.
    pub fn enabled(&self, slug: &str) -> bool {
        self.slugs.get(slug).copied().unwrap_or(false)
    }

    /// Set the enabled state for a slug.
    pub fn set(&mut self, slug: impl Into<String>, enabled: bool) {
        self.slugs.insert(slug.into(), enabled);
    }

    /// Fold another map into this one. Entries from `other` win on conflict.
    pub fn merge(&mut self, other: Map) {
        self.slugs.extend(other.slugs);
    }

    /// Number of slugs with recorded state.
    pub fn len(&self) -> usize {
        self.slugs.len()
    }

    /// Whether the map holds no state at all.
    pub fn is_empty(&self) -> bool {
        self.slugs.is_empty()
    }
}

impl From<HashMap<String, bool>> for Map {
    fn from(slugs: HashMap<String, bool>) -> Self {
        Self { slugs }
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for Map {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        Self {
            slugs: iter.into_iter().map(|(s, on)| (s.into(), on)).collect(),
        }
    }
}
