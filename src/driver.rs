//! Load driver: a bounded worker pool of generate+send units.

use crate::metrics::RunSummary;
use ingest_dispatch::{DispatchResult, Dispatcher};
use ingest_generator::{RecordGenerator, ShapeSelector};
use rand::Rng;
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Default number of completed units between progress lines.
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 1000;

/// What a load run should do.
#[derive(Debug, Clone)]
pub struct LoadPlan {
    /// Number of dispatch units to run
    pub total_requests: u64,
    /// Maximum number of units executing at once
    pub concurrency: usize,
    /// Shape of the generated records
    pub shape: ShapeSelector,
    /// Base seed; a random one is drawn when unset
    pub seed: Option<u64>,
    /// Log progress every N completed units (0 disables)
    pub progress_interval: u64,
}

impl LoadPlan {
    pub fn new(total_requests: u64, concurrency: usize, shape: ShapeSelector) -> Self {
        Self {
            total_requests,
            concurrency,
            shape,
            seed: None,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = interval;
        self
    }
}

/// Errors that stop a run before it starts.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("Concurrency must be at least 1")]
    ZeroConcurrency,
}

/// Run `plan.total_requests` units with at most `plan.concurrency` in flight.
///
/// A new unit is spawned only when a previous one completes, so the number
/// of live tasks never exceeds the cap no matter how large the run is.
/// Results are folded into the summary here and nowhere else.
pub async fn run_load<D>(plan: &LoadPlan, dispatcher: Arc<D>) -> Result<RunSummary, DriverError>
where
    D: Dispatcher + ?Sized + 'static,
{
    if plan.concurrency == 0 {
        return Err(DriverError::ZeroConcurrency);
    }

    let seed = plan.seed.unwrap_or_else(|| rand::rng().random());
    info!(
        "Starting load run: {} requests with {} workers (shape: {}, seed: {})",
        plan.total_requests, plan.concurrency, plan.shape, seed
    );

    let start = Instant::now();
    let mut summary = RunSummary::new(plan.total_requests);
    let mut pool: JoinSet<DispatchResult> = JoinSet::new();
    let mut next_index: u64 = 0;

    while summary.completed() < plan.total_requests {
        while pool.len() < plan.concurrency && next_index < plan.total_requests {
            let dispatcher = Arc::clone(&dispatcher);
            let shape = plan.shape;
            let index = next_index;
            pool.spawn(async move { run_unit(dispatcher.as_ref(), shape, seed, index).await });
            next_index += 1;
        }

        let Some(joined) = pool.join_next().await else {
            break;
        };
        let result = joined.unwrap_or_else(|e| {
            warn!("Dispatch unit did not complete: {e}");
            DispatchResult::Error(format!("unit aborted: {e}"))
        });
        summary.record(&result);

        let completed = summary.completed();
        if plan.progress_interval > 0 && completed % plan.progress_interval == 0 {
            info!(
                "Progress: {}/{} | Success: {} | Errors: {}",
                completed, plan.total_requests, summary.successes, summary.errors
            );
        }
    }

    summary.finish(start.elapsed());
    info!(
        "Completed! Total: {} | Success: {} | Errors: {} ({:.1} req/s)",
        summary.completed(),
        summary.successes,
        summary.errors,
        summary.requests_per_second()
    );

    Ok(summary)
}

/// One dispatch unit: generate a record for unit `index`, then send it.
pub async fn run_unit<D>(
    dispatcher: &D,
    shape: ShapeSelector,
    seed: u64,
    index: u64,
) -> DispatchResult
where
    D: Dispatcher + ?Sized,
{
    let envelope = RecordGenerator::for_unit(seed, index).envelope(shape);
    let result = dispatcher.send(&envelope).await;
    debug!("Unit {index} ({}): {result}", envelope.schema_name);
    result
}
