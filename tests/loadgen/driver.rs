//! Driver runs against stub dispatchers.

use async_trait::async_trait;
use ingest_dispatch::{DispatchResult, Dispatcher};
use ingest_generator::{Envelope, Shape, ShapeSelector};
use ingest_loadgen::testing::{
    AlternatingDispatcher, ConcurrencyProbe, FixedStatusDispatcher, RecordingDispatcher,
};
use ingest_loadgen::{run_load, LoadPlan};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test_all_failures_are_counted() {
    let dispatcher = Arc::new(FixedStatusDispatcher::new(500));
    let plan = LoadPlan::new(10, 3, ShapeSelector::Mixed).with_seed(1);

    let summary = run_load(&plan, dispatcher.clone()).await.unwrap();

    assert_eq!(summary.successes, 0);
    assert_eq!(summary.errors, 10);
    assert_eq!(summary.status_counts.get(&500), Some(&10));
    assert_eq!(dispatcher.calls(), 10);
}

#[tokio::test]
async fn test_every_unit_is_counted_once() {
    for concurrency in [1, 5, 100] {
        let dispatcher = Arc::new(AlternatingDispatcher::new());
        let plan = LoadPlan::new(50, concurrency, ShapeSelector::Mixed).with_seed(9);

        let summary = run_load(&plan, dispatcher.clone()).await.unwrap();

        assert_eq!(summary.completed(), 50, "concurrency {concurrency}");
        assert_eq!(summary.successes, 25, "concurrency {concurrency}");
        assert_eq!(summary.errors, 25, "concurrency {concurrency}");
        assert_eq!(dispatcher.calls(), 50);
    }
}

#[tokio::test]
async fn test_empty_run() {
    let dispatcher = Arc::new(FixedStatusDispatcher::new(200));
    let plan = LoadPlan::new(0, 4, ShapeSelector::Mixed);

    let summary = run_load(&plan, dispatcher.clone()).await.unwrap();

    assert_eq!(summary.completed(), 0);
    assert_eq!(dispatcher.calls(), 0);
    assert!(summary.completed_at.is_some());
}

#[tokio::test]
async fn test_in_flight_units_never_exceed_concurrency() {
    let dispatcher = Arc::new(ConcurrencyProbe::new(Duration::from_millis(5)));
    let plan = LoadPlan::new(40, 4, ShapeSelector::Fixed(Shape::Event)).with_seed(3);

    let summary = run_load(&plan, dispatcher.clone()).await.unwrap();

    assert_eq!(summary.successes, 40);
    assert!(dispatcher.peak() <= 4, "peak was {}", dispatcher.peak());
    assert!(dispatcher.peak() >= 2, "units did not overlap");
}

#[tokio::test]
async fn test_fixed_shape_envelopes() {
    let dispatcher = Arc::new(RecordingDispatcher::new());
    let plan = LoadPlan::new(12, 3, ShapeSelector::Fixed(Shape::Transaction)).with_seed(5);

    run_load(&plan, dispatcher.clone()).await.unwrap();

    let envelopes = dispatcher.envelopes();
    assert_eq!(envelopes.len(), 12);
    for envelope in &envelopes {
        assert_eq!(envelope.schema_name, "transaction");
        assert!(envelope.data.contains_key("transaction_id"));
    }
}

#[tokio::test]
async fn test_seeded_runs_send_the_same_records() {
    async fn collect(seed: u64, concurrency: usize) -> HashSet<(String, String)> {
        let dispatcher = Arc::new(RecordingDispatcher::new());
        let plan = LoadPlan::new(20, concurrency, ShapeSelector::Mixed).with_seed(seed);
        run_load(&plan, dispatcher.clone()).await.unwrap();
        dispatcher
            .envelopes()
            .into_iter()
            .map(|e| {
                let user_id = e.data["user_id"].as_str().unwrap().to_string();
                (e.schema_name, user_id)
            })
            .collect()
    }

    // Completion order differs with concurrency; the set of records does not
    let sequential = collect(77, 1).await;
    let concurrent = collect(77, 8).await;
    assert_eq!(sequential.len(), 20);
    assert_eq!(sequential, concurrent);
}

#[tokio::test]
async fn test_mixed_shape_stays_within_mixed_pool() {
    let dispatcher = Arc::new(RecordingDispatcher::new());
    let plan = LoadPlan::new(60, 10, ShapeSelector::Mixed).with_seed(11);

    run_load(&plan, dispatcher.clone()).await.unwrap();

    let names: HashSet<String> = dispatcher
        .envelopes()
        .into_iter()
        .map(|e| e.schema_name)
        .collect();
    for name in &names {
        assert!(
            Shape::MIXED.iter().any(|s| s.name() == name.as_str()),
            "unexpected schema {name}"
        );
    }
    assert!(names.len() > 1);
}

/// Panics on every third call.
#[derive(Default)]
struct PanickingDispatcher {
    calls: std::sync::atomic::AtomicUsize,
}

#[async_trait]
impl Dispatcher for PanickingDispatcher {
    async fn send(&self, _envelope: &Envelope) -> DispatchResult {
        let call = self
            .calls
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        if call % 3 == 2 {
            panic!("dispatcher blew up");
        }
        DispatchResult::Status(200)
    }
}

#[tokio::test]
async fn test_panicking_unit_counts_as_error() {
    let dispatcher = Arc::new(PanickingDispatcher::default());
    let plan = LoadPlan::new(9, 2, ShapeSelector::Mixed).with_seed(2);

    let summary = run_load(&plan, dispatcher).await.unwrap();

    assert_eq!(summary.completed(), 9);
    assert_eq!(summary.successes, 6);
    assert_eq!(summary.errors, 3);
    assert_eq!(summary.transport_errors, 3);
}
