//! Prometheus metrics for Swivel
//!
//! Implements the core [`Metrics`] collaborator with a labeled counter
//! so operators can see which behavior each feature resolves to.
//!
//! # Quick Start
//!
//! ```
//! use swivel_metrics::{PrometheusMetrics, export_metrics};
//! use swivel_core::Metrics;
//!
//! let metrics = PrometheusMetrics::new().unwrap();
//! metrics.behavior_selected("Search", "Search:new_ranker");
//!
//! let text = export_metrics();
//! assert!(text.contains("swivel_behavior_selected_total"));
//! ```

use once_cell::sync::Lazy;
use prometheus::{CounterVec, Encoder, Opts, Registry, TextEncoder};
use swivel_core::Metrics;

/// Global default registry
static DEFAULT_REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

/// Get the default metrics registry
pub fn default_registry() -> &'static Registry {
    &DEFAULT_REGISTRY
}

/// Export all metrics as Prometheus text format
pub fn export_metrics() -> String {
    export_metrics_from_registry(&DEFAULT_REGISTRY)
}

/// Export metrics from a specific registry
pub fn export_metrics_from_registry(registry: &Registry) -> String {
    let encoder = TextEncoder::new();
    let metric_families = registry.gather();

    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!("Failed to encode metrics: {}", e);
        return String::from("# Error encoding metrics\n");
    }

    String::from_utf8(buffer)
        .unwrap_or_else(|_| String::from("# Error converting metrics to UTF-8\n"))
}

/// Metrics sink counting behavior selections by feature and slug.
pub struct PrometheusMetrics {
    selections: CounterVec,
}

impl PrometheusMetrics {
    /// Register the selection counter against the default registry.
    pub fn new() -> Result<Self, prometheus::Error> {
        Self::with_registry(default_registry())
    }

    /// Register the selection counter against a specific registry.
    pub fn with_registry(registry: &Registry) -> Result<Self, prometheus::Error> {
        let selections = CounterVec::new(
            Opts::new(
                "swivel_behavior_selected_total",
                "Behaviors selected, by feature and behavior slug",
            ),
            &["feature", "behavior"],
        )?;
        registry.register(Box::new(selections.clone()))?;
        Ok(Self { selections })
    }
}

impl Metrics for PrometheusMetrics {
    fn behavior_selected(&self, feature: &str, slug: &str) {
        self.selections.with_label_values(&[feature, slug]).inc();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_counter_increments() {
        let registry = Registry::new();
        let metrics = PrometheusMetrics::with_registry(&registry).unwrap();

        metrics.behavior_selected("Test", "Test:a");
        metrics.behavior_selected("Test", "Test:a");

        let count = metrics
            .selections
            .with_label_values(&["Test", "Test:a"])
            .get();
        assert_eq!(count, 2.0);
    }

    #[test]
    fn test_export_contains_counter() {
        let registry = Registry::new();
        let metrics = PrometheusMetrics::with_registry(&registry).unwrap();
        metrics.behavior_selected("Test", "Test:a");

        let text = export_metrics_from_registry(&registry);
        assert!(text.contains("swivel_behavior_selected_total"));
        assert!(text.contains("Test:a"));
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let registry = Registry::new();
        let _first = PrometheusMetrics::with_registry(&registry).unwrap();
        assert!(PrometheusMetrics::with_registry(&registry).is_err());
    }
}
