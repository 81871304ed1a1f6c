//! Enablement lookups against the toggle map.

use crate::behavior::Behavior;
use crate::map::Map;
use std::sync::Arc;

/// Lookup facade answering whether a behavior is enabled.
///
/// The map is shared, not owned; the surrounding system may hand the
/// same map to many buckets, or swap in a fresh one between episodes.
#[derive(Debug, Clone)]
pub struct Bucket {
    map: Arc<Map>,
}

impl Bucket {
    /// Create a bucket over shared toggle state.
    pub fn new(map: Arc<Map>) -> Self {
        Self { map }
    }

    /// Whether the behavior's slug is enabled in the backing map.
    pub fn enabled(&self, behavior: &Behavior) -> bool {
        self.map.enabled(behavior.slug())
    }
}

impl From<Map> for Bucket {
    fn from(map: Map) -> Self {
        Self::new(Arc::new(map))
    }
}
