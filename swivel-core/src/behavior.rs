//! Named invocable units of alternate logic.

use crate::error::Result;
use crate::strategy::Strategy;
use serde_json::Value;

/// An immutable pairing of a slug and the strategy it runs.
#[derive(Debug, Clone)]
pub struct Behavior {
    slug: String,
    strategy: Strategy,
}

impl Behavior {
    /// Create a behavior for the given slug.
    pub fn new(slug: impl Into<String>, strategy: impl Into<Strategy>) -> Self {
        Self {
            slug: slug.into(),
            strategy: strategy.into(),
        }
    }

    /// The composite slug identifying this behavior in the toggle map.
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Run the strategy with the given positional arguments.
    ///
    /// Strategy failures propagate unchanged.
    pub fn execute(&self, args: &[Value]) -> Result<Value> {
        self.strategy.invoke(args)
    }
}
