//! Integration tests for common Swivel workflows.
//!
//! These tests verify that the most common use cases work through the
//! facade crate.

use swivel::prelude::*;

fn toggle_state(pairs: &[(&str, bool)]) -> Bucket {
    let map: Map = pairs.iter().map(|&(slug, on)| (slug, on)).collect();
    Bucket::from(map)
}

// =============================================================================
// Builder workflow
// =============================================================================

#[test]
fn test_feature_selection_end_to_end() {
    let bucket = toggle_state(&[("Search:new_ranker", true), ("Search:shadow", false)]);

    let result = Builder::new("Search", bucket)
        .add_behavior("shadow", Strategy::callback(|_args: &[Value]| json!("shadow")))
        .add_behavior(
            "new_ranker",
            Strategy::callback(|_args: &[Value]| json!("ranked-v2")),
        )
        .default_behavior(json!("ranked-v1"))
        .unwrap()
        .execute()
        .unwrap();

    assert_eq!(result, json!("ranked-v2"));
}

#[test]
fn test_default_only_episode() {
    let result = Builder::new("Test", toggle_state(&[]))
        .default_behavior(json!("abc"))
        .unwrap()
        .execute()
        .unwrap();

    assert_eq!(result, json!("abc"));
}

#[test]
fn test_typed_execution() {
    let builder = Builder::new("Limits", toggle_state(&[("Limits:raised", true)]))
        .add_behavior("raised", Strategy::callback(|_args: &[Value]| json!(500)))
        .default_behavior(json!(100))
        .unwrap();

    let limit: u32 = builder.execute_as().unwrap();
    assert_eq!(limit, 500);
}

// =============================================================================
// Manager workflow
// =============================================================================

#[test]
fn test_manager_hands_out_wired_builders() {
    let manager = Manager::new(toggle_state(&[("Checkout:express", true)]))
        .with_logger(std::sync::Arc::new(NullLogger));

    let result = manager
        .for_feature("Checkout")
        .add_behavior("express", Strategy::callback(|_args: &[Value]| json!("express")))
        .default_behavior(json!("standard"))
        .unwrap()
        .execute()
        .unwrap();

    assert_eq!(result, json!("express"));
}

#[test]
fn test_manager_one_shot_value() {
    let manager = Manager::new(toggle_state(&[("Checkout:express", false)]));

    let lane = manager
        .return_value("Checkout:express", json!("express"), json!("standard"))
        .unwrap();

    assert_eq!(lane, json!("standard"));
}
