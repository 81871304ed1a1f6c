//! Behavior registration and selection for a single feature.

use crate::behavior::Behavior;
use crate::bucket::Bucket;
use crate::error::{Error, Result};
use crate::logging::{Logger, NullLogger};
use crate::map::Map;
use crate::metrics::Metrics;
use crate::strategy::Strategy;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

// `default_behavior` and `no_default` are mutually exclusive once either
// has been applied; the tri-state makes the invalid transitions explicit.
#[derive(Debug, Clone)]
enum DefaultDisposition {
    Unset,
    Registered(Behavior, Vec<Value>),
    Declined,
}

/// Orchestrates behavior registration for a single feature name.
///
/// One builder per feature-selection episode: construct it with the
/// feature name and a [`Bucket`], register alternative behaviors, settle
/// the default, execute, discard.
///
/// # Examples
///
/// ```
/// use swivel_core::{Bucket, Builder, Map, Strategy};
/// use serde_json::json;
///
/// let map: Map = [("Payment:tokenized", true)].into_iter().collect();
///
/// let result = Builder::new("Payment", Bucket::from(map))
///     .add_behavior("tokenized", Strategy::callback(|_args| json!("token")))
///     .add_behavior("legacy", Strategy::callback(|_args| json!("card")))
///     .default_behavior(json!("cash"))
///     .unwrap()
///     .execute()
///     .unwrap();
///
/// assert_eq!(result, json!("token"));
/// ```
pub struct Builder {
    name: String,
    bucket: Bucket,
    selected: Option<(Behavior, Vec<Value>)>,
    default: DefaultDisposition,
    metrics: Option<Arc<dyn Metrics>>,
    logger: Arc<dyn Logger>,
}

impl std::fmt::Debug for Builder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Builder")
            .field("name", &self.name)
            .field("bucket", &self.bucket)
            .field("selected", &self.selected)
            .field("default", &self.default)
            .field("metrics", &self.metrics.as_ref().map(|_| "<dyn Metrics>"))
            .field("logger", &"<dyn Logger>")
            .finish()
    }
}

impl Builder {
    /// Slug reserved for the fallback behavior.
    pub const DEFAULT_SLUG: &'static str = "__swivel_default";

    /// Start a selection episode for the given feature.
    pub fn new(name: impl Into<String>, bucket: Bucket) -> Self {
        Self {
            name: name.into(),
            bucket,
            selected: None,
            default: DefaultDisposition::Unset,
            metrics: None,
            logger: Arc::new(NullLogger),
        }
    }

    /// Inject a logging backend.
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    /// Inject a metrics sink.
    pub fn with_metrics(mut self, metrics: Arc<dyn Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Build a behavior under this feature's namespace.
    ///
    /// An empty sub-slug yields the bare feature name; anything else is
    /// joined with [`Map::DELIMITER`].
    pub fn behavior(&self, sub_slug: &str, strategy: impl Into<Strategy>) -> Behavior {
        let slug = if sub_slug.is_empty() {
            self.name.clone()
        } else {
            format!("{}{}{}", self.name, Map::DELIMITER, sub_slug)
        };
        Behavior::new(slug, strategy)
    }

    /// Register an alternative behavior for this feature.
    ///
    /// The first registration whose slug is enabled in the bucket wins;
    /// later registrations still consult the bucket but cannot displace
    /// an existing selection.
    pub fn add_behavior(self, sub_slug: &str, strategy: impl Into<Strategy>) -> Self {
        self.add_behavior_with_args(sub_slug, strategy, Vec::new())
    }

    /// Register an alternative behavior along with the arguments it
    /// should receive when executed.
    pub fn add_behavior_with_args(
        mut self,
        sub_slug: &str,
        strategy: impl Into<Strategy>,
        args: Vec<Value>,
    ) -> Self {
        let behavior = self.behavior(sub_slug, strategy);
        if self.bucket.enabled(&behavior) && self.selected.is_none() {
            self.logger.debug(&format!(
                "feature '{}' selected behavior '{}'",
                self.name,
                behavior.slug()
            ));
            self.selected = Some((behavior, args));
        }
        self
    }

    /// Register the fallback behavior.
    ///
    /// Fails with [`Error::Logic`] if [`no_default`](Self::no_default)
    /// was already applied. Redefining an existing default is tolerated
    /// and logged as a warning.
    pub fn default_behavior(self, strategy: impl Into<Strategy>) -> Result<Self> {
        self.default_behavior_with_args(strategy, Vec::new())
    }

    /// Register the fallback behavior along with its execution arguments.
    pub fn default_behavior_with_args(
        mut self,
        strategy: impl Into<Strategy>,
        args: Vec<Value>,
    ) -> Result<Self> {
        match self.default {
            DefaultDisposition::Declined => {
                return Err(Error::Logic(format!(
                    "feature '{}' declared no default; a default behavior cannot be registered",
                    self.name
                )));
            }
            DefaultDisposition::Registered(..) => {
                self.logger
                    .warn(&format!("default behavior for feature '{}' redefined", self.name));
            }
            DefaultDisposition::Unset => {}
        }
        self.default =
            DefaultDisposition::Registered(Behavior::new(Self::DEFAULT_SLUG, strategy), args);
        Ok(self)
    }

    /// Declare that this feature has no fallback.
    ///
    /// Fails with [`Error::Logic`] if a default behavior is already
    /// registered. With nothing selected, [`execute`](Self::execute)
    /// then yields `Value::Null`.
    pub fn no_default(mut self) -> Result<Self> {
        if let DefaultDisposition::Registered(..) = self.default {
            return Err(Error::Logic(format!(
                "feature '{}' already has a default behavior",
                self.name
            )));
        }
        self.default = DefaultDisposition::Declined;
        Ok(self)
    }

    /// Run the selected behavior, or the fallback, and return the result.
    ///
    /// With neither a selection nor a default, returns `Value::Null`
    /// without invoking anything. Strategy failures propagate unchanged.
    pub fn execute(&self) -> Result<Value> {
        if let Some((behavior, args)) = &self.selected {
            if let Some(metrics) = &self.metrics {
                metrics.behavior_selected(&self.name, behavior.slug());
            }
            self.logger.debug(&format!(
                "feature '{}' executing behavior '{}'",
                self.name,
                behavior.slug()
            ));
            return behavior.execute(args);
        }
        match &self.default {
            DefaultDisposition::Registered(behavior, args) => behavior.execute(args),
            _ => Ok(Value::Null),
        }
    }

    /// Run [`execute`](Self::execute) and deserialize the result.
    pub fn execute_as<T: DeserializeOwned>(&self) -> Result<T> {
        let value = self.execute()?;
        serde_json::from_value(value).map_err(|e| Error::Deserialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bucket(pairs: &[(&str, bool)]) -> Bucket {
        let map: Map = pairs.iter().map(|&(slug, on)| (slug, on)).collect();
        Bucket::from(map)
    }

    #[test]
    fn test_behavior_composes_slug() {
        let builder = Builder::new("Test", bucket(&[]));
        let behavior = builder.behavior("a", json!(null));
        assert_eq!(behavior.slug(), "Test:a");
    }

    #[test]
    fn test_behavior_empty_sub_slug_is_bare_name() {
        let builder = Builder::new("Test", bucket(&[]));
        let behavior = builder.behavior("", json!(null));
        assert_eq!(behavior.slug(), "Test");
    }

    #[test]
    fn test_no_default_then_default_fails() {
        let err = Builder::new("Test", bucket(&[]))
            .no_default()
            .unwrap()
            .default_behavior(json!("abc"))
            .unwrap_err();
        assert!(matches!(err, Error::Logic(_)));
    }

    #[test]
    fn test_default_then_no_default_fails() {
        let err = Builder::new("Test", bucket(&[]))
            .default_behavior(json!("abc"))
            .unwrap()
            .no_default()
            .unwrap_err();
        assert!(matches!(err, Error::Logic(_)));
    }

    #[test]
    fn test_execute_raw_value_default() {
        let builder = Builder::new("Test", bucket(&[]))
            .default_behavior(json!("abc"))
            .unwrap();
        assert_eq!(builder.execute().unwrap(), json!("abc"));
    }

    #[test]
    fn test_execute_without_default_is_null() {
        let builder = Builder::new("Test", bucket(&[])).no_default().unwrap();
        assert_eq!(builder.execute().unwrap(), Value::Null);
    }

    #[test]
    fn test_execute_as_typed() {
        let builder = Builder::new("Test", bucket(&[]))
            .default_behavior(json!("abc"))
            .unwrap();
        let value: String = builder.execute_as().unwrap();
        assert_eq!(value, "abc");

        let err = builder.execute_as::<u32>().unwrap_err();
        assert!(matches!(err, Error::Deserialization(_)));
    }
}
