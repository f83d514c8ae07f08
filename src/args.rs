//! CLI argument definitions.

use crate::driver::{LoadPlan, DEFAULT_PROGRESS_INTERVAL};
use crate::replay::ReplayPlan;
use crate::scenario::ScenarioConfig;
use clap::Args;
use ingest_dispatch::config::parse_header;
use ingest_dispatch::DispatchConfig;
use ingest_generator::ShapeSelector;
use std::path::PathBuf;
use std::time::Duration;

/// Target endpoint and static headers, shared by `send` and `replay`.
#[derive(Args, Clone, Debug)]
pub struct DispatchArgs {
    /// Ingestion endpoint receiving the POSTed envelopes
    #[arg(long, env = "INGEST_ENDPOINT", default_value = "http://localhost:8083/ingest")]
    pub endpoint: String,

    /// Value of the Authorization header (sent verbatim)
    #[arg(long, env = "INGEST_AUTH_TOKEN", hide_env_values = true)]
    pub auth_token: Option<String>,

    /// Extra header as 'Name: value' (repeatable)
    #[arg(long = "header", value_name = "HEADER", value_parser = parse_header)]
    pub headers: Vec<(String, String)>,

    /// Read response bodies and log them
    #[arg(long)]
    pub capture_body: bool,
}

impl DispatchArgs {
    pub fn to_config(&self) -> DispatchConfig {
        DispatchConfig {
            endpoint: self.endpoint.clone(),
            auth_token: self.auth_token.clone(),
            extra_headers: self.headers.clone(),
            capture_body: self.capture_body,
        }
    }
}

/// Arguments for the concurrent `send` command.
#[derive(Args, Clone, Debug)]
pub struct SendArgs {
    #[command(flatten)]
    pub dispatch: DispatchArgs,

    /// Number of requests to send
    #[arg(long, short = 'n', default_value = "1000")]
    pub requests: u64,

    /// Maximum number of requests in flight
    #[arg(long, short = 'c', default_value = "100")]
    pub concurrency: usize,

    /// Record shape: user, transaction, event, profile or mixed
    #[arg(long, default_value = "mixed")]
    pub shape: ShapeSelector,

    /// Random seed for reproducible payloads (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log progress every N completed requests (0 disables)
    #[arg(long, default_value_t = DEFAULT_PROGRESS_INTERVAL)]
    pub progress_interval: u64,

    /// Write the run summary as JSON to this file
    #[arg(long)]
    pub metrics_output: Option<PathBuf>,
}

impl SendArgs {
    pub fn to_plan(&self) -> LoadPlan {
        LoadPlan {
            total_requests: self.requests,
            concurrency: self.concurrency,
            shape: self.shape,
            seed: self.seed,
            progress_interval: self.progress_interval,
        }
    }
}

/// Arguments for the sequential `replay` command.
#[derive(Args, Clone, Debug)]
pub struct ReplayArgs {
    #[command(flatten)]
    pub dispatch: DispatchArgs,

    /// Number of times to send the payload
    #[arg(long, default_value = "30")]
    pub count: u64,

    /// Pause between sends in milliseconds
    #[arg(long, default_value = "100")]
    pub delay_ms: u64,

    /// Record shape of the payload
    #[arg(long, default_value = "profile")]
    pub shape: ShapeSelector,

    /// Random seed for the payload
    #[arg(long)]
    pub seed: Option<u64>,

    /// Schema name to put in the envelope instead of the shape name
    #[arg(long)]
    pub schema_name: Option<String>,

    /// Write the run summary as JSON to this file
    #[arg(long)]
    pub metrics_output: Option<PathBuf>,
}

impl ReplayArgs {
    pub fn to_plan(&self) -> ReplayPlan {
        ReplayPlan {
            count: self.count,
            delay: Duration::from_millis(self.delay_ms),
            shape: self.shape,
            seed: self.seed,
            schema_name: self.schema_name.clone(),
        }
    }
}

/// Arguments for the `scenario` command.
#[derive(Args, Clone, Debug)]
pub struct ScenarioArgs {
    /// Base URL of the API gateway
    #[arg(long, env = "INGEST_BASE_URL", default_value = "http://localhost:8080")]
    pub base_url: String,

    /// Number of concurrent virtual users
    #[arg(long, default_value = "10")]
    pub users: usize,

    /// Tasks each user performs after logging in
    #[arg(long, default_value = "20")]
    pub iterations: u64,

    /// Minimum pause between tasks in milliseconds
    #[arg(long, default_value = "1000")]
    pub wait_min_ms: u64,

    /// Maximum pause between tasks in milliseconds
    #[arg(long, default_value = "3000")]
    pub wait_max_ms: u64,

    /// Password virtual users register with
    #[arg(long, default_value = "password123")]
    pub password: String,
}

impl ScenarioArgs {
    pub fn to_config(&self) -> ScenarioConfig {
        ScenarioConfig {
            base_url: self.base_url.clone(),
            users: self.users,
            iterations: self.iterations,
            wait_min: Duration::from_millis(self.wait_min_ms),
            wait_max: Duration::from_millis(self.wait_max_ms),
            password: self.password.clone(),
        }
    }
}

/// Arguments for the `sample` command.
#[derive(Args, Clone, Debug)]
pub struct SampleArgs {
    /// Record shape to print
    #[arg(long, default_value = "mixed")]
    pub shape: ShapeSelector,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of envelopes to print
    #[arg(long, default_value = "1")]
    pub count: u64,

    /// Pretty-print the JSON
    #[arg(long)]
    pub pretty: bool,
}
