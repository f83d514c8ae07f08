//! Replay mode against stub dispatchers.

use ingest_generator::{Shape, ShapeSelector};
use ingest_loadgen::testing::{FixedStatusDispatcher, RecordingDispatcher};
use ingest_loadgen::{run_replay, ReplayPlan};
use std::time::Duration;

#[tokio::test]
async fn test_replay_sends_identical_payloads() {
    let dispatcher = RecordingDispatcher::new();
    let mut plan = ReplayPlan::new(4, ShapeSelector::Fixed(Shape::Profile));
    plan.delay = Duration::ZERO;
    plan.schema_name = Some("test1".to_string());

    let summary = run_replay(&plan, &dispatcher).await.unwrap();

    assert_eq!(summary.successes, 4);
    let envelopes = dispatcher.envelopes();
    assert_eq!(envelopes.len(), 4);
    assert!(envelopes.iter().all(|e| e == &envelopes[0]));
    assert_eq!(envelopes[0].schema_name, "test1");
}

#[tokio::test]
async fn test_replay_counts_failures() {
    let dispatcher = FixedStatusDispatcher::new(413);
    let mut plan = ReplayPlan::new(3, ShapeSelector::Fixed(Shape::Profile));
    plan.delay = Duration::from_millis(1);

    let summary = run_replay(&plan, &dispatcher).await.unwrap();

    assert_eq!(summary.errors, 3);
    assert_eq!(summary.status_counts.get(&413), Some(&3));
    assert_eq!(dispatcher.calls(), 3);
}

#[tokio::test]
async fn test_replay_zero_count() {
    let dispatcher = FixedStatusDispatcher::new(200);
    let plan = ReplayPlan::new(0, ShapeSelector::Mixed);

    let summary = run_replay(&plan, &dispatcher).await.unwrap();

    assert_eq!(summary.completed(), 0);
    assert_eq!(dispatcher.calls(), 0);
}
