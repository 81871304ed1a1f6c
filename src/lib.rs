// Swivel - strategy-based feature toggles for Rust
//
// Callers register alternative behaviors for a feature against a map of
// toggle state; the first enabled behavior is selected and executed,
// falling back to a declared default.

// Re-export core functionality
pub use swivel_core::*;

// Re-export optional crates
#[cfg(feature = "metrics")]
pub use swivel_metrics;

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Behavior, Bucket, Builder, Error, LogFacade, Logger, Manager, Map, MethodTarget, Metrics,
        NoopMetrics, NullLogger, Result, Strategy, register_static,
    };
    pub use serde_json::{Value, json};
}
