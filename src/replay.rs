//! Replay mode: generate one payload and send it repeatedly, one at a time.

use crate::metrics::RunSummary;
use ingest_dispatch::{DispatchResult, Dispatcher};
use ingest_generator::{Envelope, RecordGenerator, ShapeSelector};
use rand::Rng;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// What a replay run should do.
#[derive(Debug, Clone)]
pub struct ReplayPlan {
    /// How many times to send the payload
    pub count: u64,
    /// Pause between consecutive sends
    pub delay: Duration,
    pub shape: ShapeSelector,
    pub seed: Option<u64>,
    /// Overrides the envelope's schema name
    pub schema_name: Option<String>,
}

impl ReplayPlan {
    pub fn new(count: u64, shape: ShapeSelector) -> Self {
        Self {
            count,
            delay: Duration::from_millis(100),
            shape,
            seed: None,
            schema_name: None,
        }
    }
}

/// Build the single envelope a replay run sends.
pub fn build_payload(plan: &ReplayPlan) -> Envelope {
    let seed = plan.seed.unwrap_or_else(|| rand::rng().random());
    let envelope = RecordGenerator::new(seed).envelope(plan.shape);
    match &plan.schema_name {
        Some(name) => Envelope::with_schema_name(name.clone(), envelope.data),
        None => envelope,
    }
}

/// Send the same payload `plan.count` times, sequentially, `plan.delay` apart.
pub async fn run_replay<D>(plan: &ReplayPlan, dispatcher: &D) -> anyhow::Result<RunSummary>
where
    D: Dispatcher + ?Sized,
{
    let payload = build_payload(plan);
    let size = payload.byte_len()?;
    info!(
        "Generated JSON size: {:.2} MB ({} bytes, schema '{}')",
        size as f64 / (1024.0 * 1024.0),
        size,
        payload.schema_name
    );

    let start = Instant::now();
    let mut summary = RunSummary::new(plan.count);
    for i in 0..plan.count {
        info!("Sending payload {}/{}", i + 1, plan.count);
        let result = dispatcher.send(&payload).await;
        match &result {
            DispatchResult::Status(code) => info!("Response status: {code}"),
            DispatchResult::Error(e) => warn!("Error sending payload: {e}"),
        }
        summary.record(&result);

        if i + 1 < plan.count && !plan.delay.is_zero() {
            tokio::time::sleep(plan.delay).await;
        }
    }
    summary.finish(start.elapsed());

    Ok(summary)
}
