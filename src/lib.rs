//! Ingest load generator
//!
//! Fires synthetic JSON records at an HTTP ingestion endpoint and reports how
//! the endpoint held up.
//!
//! # Modes
//!
//! - `send`: a bounded pool of concurrent generate+send units ([`driver`])
//! - `replay`: one payload sent repeatedly, one at a time ([`replay`])
//! - `scenario`: virtual users that register, log in and poll ([`scenario`])
//! - `sample`: print generated envelopes without sending anything
//!
//! Record generation lives in the `ingest-generator` crate and HTTP delivery
//! in `ingest-dispatch`. This crate wires them together and aggregates results.
//!
//! # CLI Usage
//!
//! ```bash
//! # 10k mixed records, 200 in flight
//! ingest-loadgen send --endpoint http://localhost:8083/ingest -n 10000 -c 200
//!
//! # Reproducible transaction records with an API key
//! ingest-loadgen send --shape transaction --seed 42 --auth-token "$KEY"
//!
//! # Replay one large profile payload 30 times
//! ingest-loadgen replay --count 30 --delay-ms 100 --schema-name test1
//!
//! # Session scenario against the API gateway
//! ingest-loadgen scenario --base-url http://localhost:8080 --users 20
//! ```

pub mod args;
pub mod driver;
pub mod metrics;
pub mod replay;
pub mod scenario;
pub mod testing;

pub use driver::{run_load, DriverError, LoadPlan};
pub use metrics::RunSummary;
pub use replay::{run_replay, ReplayPlan};
pub use scenario::{run_scenario, ScenarioConfig, ScenarioSummary};
