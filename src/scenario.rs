//! Session scenario: virtual users that register, log in and poll their projects.

use ingest_dispatch::{DispatchResult, SessionClient};
use ingest_generator::generators::text;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::time::{Duration, Instant};
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, info, warn};

/// Scenario settings.
#[derive(Debug, Clone)]
pub struct ScenarioConfig {
    /// Base URL of the API gateway, e.g. `http://localhost:8080`
    pub base_url: String,
    /// Number of concurrent virtual users
    pub users: usize,
    /// Tasks each user performs after logging in
    pub iterations: u64,
    /// Lower bound of the pause between tasks
    pub wait_min: Duration,
    /// Upper bound of the pause between tasks
    pub wait_max: Duration,
    /// Password every virtual user registers with
    pub password: String,
}

impl ScenarioConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            users: 10,
            iterations: 20,
            wait_min: Duration::from_secs(1),
            wait_max: Duration::from_secs(3),
            password: "password123".to_string(),
        }
    }
}

/// A task a logged-in user can pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    BrowseProjects,
    CheckHealth,
}

impl Task {
    const ALL: [Task; 2] = [Task::BrowseProjects, Task::CheckHealth];

    fn weight(&self) -> u32 {
        match self {
            Task::BrowseProjects => 3,
            Task::CheckHealth => 1,
        }
    }
}

/// Outcome of one virtual user.
#[derive(Debug, Clone, Default)]
struct UserOutcome {
    registered: bool,
    logged_in: bool,
    browse_ok: u64,
    browse_failed: u64,
    health_checks: u64,
}

/// Totals across all virtual users.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScenarioSummary {
    pub users: usize,
    pub registrations_failed: u64,
    pub logins_failed: u64,
    /// Virtual users whose task panicked or was cancelled
    pub users_aborted: u64,
    pub browse_ok: u64,
    pub browse_failed: u64,
    pub health_checks: u64,
    pub duration_ms: u64,
}

impl ScenarioSummary {
    fn record(&mut self, outcome: &UserOutcome) {
        if !outcome.registered {
            self.registrations_failed += 1;
        } else if !outcome.logged_in {
            self.logins_failed += 1;
        }
        self.browse_ok += outcome.browse_ok;
        self.browse_failed += outcome.browse_failed;
        self.health_checks += outcome.health_checks;
    }

    fn record_joined(&mut self, joined: Result<UserOutcome, JoinError>) {
        match joined {
            Ok(outcome) => self.record(&outcome),
            Err(e) => {
                warn!("Virtual user did not complete: {e}");
                self.users_aborted += 1;
            }
        }
    }
}

/// Path polled by the browse task.
pub fn projects_path(username: &str) -> String {
    format!("/meta/projects/by-username/{username}")
}

/// Run every virtual user concurrently and total their outcomes.
pub async fn run_scenario(config: &ScenarioConfig) -> anyhow::Result<ScenarioSummary> {
    // Fail fast on a bad base URL instead of once per user
    SessionClient::new(&config.base_url)?;

    info!(
        "Starting session scenario: {} users x {} tasks against {}",
        config.users, config.iterations, config.base_url
    );

    let start = Instant::now();
    let mut users = JoinSet::new();
    for _ in 0..config.users {
        let config = config.clone();
        users.spawn(async move { run_user(&config).await });
    }

    let mut summary = ScenarioSummary {
        users: config.users,
        ..Default::default()
    };
    while let Some(joined) = users.join_next().await {
        summary.record_joined(joined);
    }
    summary.duration_ms = start.elapsed().as_millis() as u64;

    info!(
        "Scenario complete: browse ok {} / failed {}, registrations failed {}, logins failed {}, aborted {}",
        summary.browse_ok,
        summary.browse_failed,
        summary.registrations_failed,
        summary.logins_failed,
        summary.users_aborted
    );
    Ok(summary)
}

async fn run_user(config: &ScenarioConfig) -> UserOutcome {
    let mut rng = StdRng::from_rng(&mut rand::rng());
    let mut outcome = UserOutcome::default();

    let username = format!("loadtest_{}", text::lower_alphanumeric(&mut rng, 8));
    let email = format!("{username}@example.com");

    let mut client = match SessionClient::new(&config.base_url) {
        Ok(client) => client,
        Err(e) => {
            warn!("Failed to create client for {username}: {e}");
            return outcome;
        }
    };

    // Without a registration or login the user still polls, unauthenticated
    match client.register(&username, &config.password, &email).await {
        Ok(()) => {
            outcome.registered = true;
            match client.login(&username, &config.password).await {
                Ok(()) => outcome.logged_in = true,
                Err(e) => warn!("Failed to login {username}: {e}"),
            }
        }
        Err(e) => warn!("Failed to register {username}: {e}"),
    }

    let path = projects_path(&username);
    for i in 0..config.iterations {
        let task = Task::ALL
            .choose_weighted(&mut rng, Task::weight)
            .copied()
            .unwrap_or(Task::BrowseProjects);

        match task {
            Task::BrowseProjects => match client.get(&path).await {
                DispatchResult::Status(200) => outcome.browse_ok += 1,
                other => {
                    debug!("Browse projects failed for {username}: {other}");
                    outcome.browse_failed += 1;
                }
            },
            Task::CheckHealth => outcome.health_checks += 1,
        }

        if i + 1 < config.iterations {
            tokio::time::sleep(pause(&mut rng, config.wait_min, config.wait_max)).await;
        }
    }

    outcome
}

/// Uniform pause in `[min, max]`.
fn pause<R: Rng>(rng: &mut R, min: Duration, max: Duration) -> Duration {
    if max <= min {
        return min;
    }
    let millis = rng.random_range(min.as_millis()..=max.as_millis());
    Duration::from_millis(millis as u64)
}
