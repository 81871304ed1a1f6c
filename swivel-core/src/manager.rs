//! Episode factory and one-shot invocation helpers.

use crate::bucket::Bucket;
use crate::builder::Builder;
use crate::error::{Error, Result};
use crate::logging::{Logger, NullLogger};
use crate::map::Map;
use crate::metrics::Metrics;
use crate::strategy::Strategy;
use serde_json::Value;
use std::sync::Arc;

/// Hands out pre-wired builders and offers one-shot shorthands.
///
/// A manager holds the toggle state and the collaborators shared across
/// selection episodes; each [`for_feature`](Manager::for_feature) call
/// starts a fresh episode.
pub struct Manager {
    bucket: Bucket,
    metrics: Option<Arc<dyn Metrics>>,
    logger: Arc<dyn Logger>,
}

impl Manager {
    /// Create a manager over the given toggle state.
    pub fn new(bucket: Bucket) -> Self {
        Self {
            bucket,
            metrics: None,
            logger: Arc::new(NullLogger),
        }
    }

    /// Inject a logging backend shared by all episodes.
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    /// Inject a metrics sink shared by all episodes.
    pub fn with_metrics(mut self, metrics: Arc<dyn Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Swap the toggle state used by subsequent episodes.
    pub fn set_bucket(&mut self, bucket: Bucket) {
        self.bucket = bucket;
    }

    /// Start a selection episode for the given feature.
    pub fn for_feature(&self, name: impl Into<String>) -> Builder {
        let mut builder = Builder::new(name, self.bucket.clone()).with_logger(self.logger.clone());
        if let Some(metrics) = &self.metrics {
            builder = builder.with_metrics(metrics.clone());
        }
        builder
    }

    /// One-shot selection: run `enabled` if the composite slug is on,
    /// otherwise `default`.
    ///
    /// The slug must contain [`Map::DELIMITER`], e.g. `"Feature:variant"`.
    pub fn invoke(
        &self,
        slug: &str,
        enabled: impl Into<Strategy>,
        default: impl Into<Strategy>,
    ) -> Result<Value> {
        let (feature, variant) = slug.split_once(Map::DELIMITER).ok_or_else(|| {
            Error::InvalidSlug(format!(
                "expected '<feature>{}<variant>', got '{}'",
                Map::DELIMITER,
                slug
            ))
        })?;
        self.for_feature(feature)
            .add_behavior(variant, enabled)
            .default_behavior(default)?
            .execute()
    }

    /// One-shot raw-value selection.
    pub fn return_value(&self, slug: &str, enabled: Value, default: Value) -> Result<Value> {
        self.invoke(slug, Strategy::Value(enabled), Strategy::Value(default))
    }
}
