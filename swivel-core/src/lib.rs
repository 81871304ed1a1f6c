//! Feature toggles for Swivel
//!
//! Strategy-based feature toggling: register named alternative behaviors
//! for a feature, and the first one whose slug is enabled in the toggle
//! map is selected and executed, falling back to a declared default.
//!
//! # Features
//!
//! - 🔀 **Behavior Selection** - First-enabled-wins dispatch over toggle state
//! - 🧩 **Strategy Shapes** - Closures, bound method references, registered statics, raw values
//! - 🪃 **Fallbacks** - Default behaviors, raw-value defaults, or an explicit no-default
//! - 📋 **Pluggable Logging** - Injectable logger with a silent default
//! - 📈 **Pluggable Metrics** - Record which behavior each feature resolved to
//!
//! # Quick Start
//!
//! ```
//! use swivel_core::{Bucket, Builder, Map, Strategy};
//! use serde_json::json;
//!
//! let mut map = Map::new();
//! map.set("Search:new_ranker", true);
//!
//! let result = Builder::new("Search", Bucket::from(map))
//!     .add_behavior("new_ranker", Strategy::callback(|_args| json!("ranked-v2")))
//!     .default_behavior(json!("ranked-v1"))
//!     .unwrap()
//!     .execute()
//!     .unwrap();
//!
//! assert_eq!(result, json!("ranked-v2"));
//! ```
//!
//! # One-Shot Invocation
//!
//! ```
//! use swivel_core::{Bucket, Manager, Map};
//! use serde_json::json;
//!
//! let mut map = Map::new();
//! map.set("Checkout:express", false);
//!
//! let manager = Manager::new(Bucket::from(map));
//! let lane = manager
//!     .return_value("Checkout:express", json!("express"), json!("standard"))
//!     .unwrap();
//!
//! assert_eq!(lane, json!("standard"));
//! ```

pub mod behavior;
pub mod bucket;
pub mod builder;
pub mod error;
pub mod logging;
pub mod manager;
pub mod map;
pub mod metrics;
pub mod strategy;

// Re-export commonly used types
pub use behavior::*;
pub use bucket::*;
pub use builder::*;
pub use error::*;
pub use logging::*;
pub use manager::*;
pub use map::*;
pub use metrics::*;
pub use strategy::*;
