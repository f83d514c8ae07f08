//! Command-line interface for ingest-loadgen
//!
//! # Usage Examples
//!
//! ```bash
//! # Concurrent load run, summary written as JSON
//! ingest-loadgen send -n 5000 -c 100 --metrics-output summary.json
//!
//! # Extra headers are repeatable
//! ingest-loadgen send --header "X-Project: demo" --header "X-Env: staging"
//!
//! # Inspect what would be sent
//! ingest-loadgen sample --shape user --seed 7 --pretty
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use anyhow::Context;
use clap::{Parser, Subcommand};
use ingest_dispatch::HttpDispatcher;
use ingest_generator::RecordGenerator;
use ingest_loadgen::args::{ReplayArgs, SampleArgs, ScenarioArgs, SendArgs};
use ingest_loadgen::{run_load, run_replay, run_scenario, RunSummary};
use rand::Rng;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ingest-loadgen")]
#[command(about = "Send synthetic JSON records to an HTTP ingestion endpoint")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send generated records concurrently
    Send(SendArgs),

    /// Send one generated payload repeatedly
    Replay(ReplayArgs),

    /// Run the register/login/browse session scenario
    Scenario(ScenarioArgs),

    /// Print generated envelopes to stdout
    Sample(SampleArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Send(args) => run_send(args).await,
        Commands::Replay(args) => run_replay_command(args).await,
        Commands::Scenario(args) => run_scenario_command(args).await,
        Commands::Sample(args) => run_sample(args),
    }
}

async fn run_send(args: SendArgs) -> anyhow::Result<()> {
    let dispatcher = HttpDispatcher::new(&args.dispatch.to_config())
        .context("Failed to set up HTTP dispatcher")?;
    let summary = run_load(&args.to_plan(), Arc::new(dispatcher)).await?;
    report(&summary, args.metrics_output.as_deref())
}

async fn run_replay_command(args: ReplayArgs) -> anyhow::Result<()> {
    let dispatcher = HttpDispatcher::new(&args.dispatch.to_config())
        .context("Failed to set up HTTP dispatcher")?;
    let summary = run_replay(&args.to_plan(), &dispatcher).await?;
    report(&summary, args.metrics_output.as_deref())
}

async fn run_scenario_command(args: ScenarioArgs) -> anyhow::Result<()> {
    let summary = run_scenario(&args.to_config()).await?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn run_sample(args: SampleArgs) -> anyhow::Result<()> {
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    for index in 0..args.count {
        let envelope = RecordGenerator::for_unit(seed, index).envelope(args.shape);
        let json = if args.pretty {
            serde_json::to_string_pretty(&envelope)?
        } else {
            serde_json::to_string(&envelope)?
        };
        println!("{json}");
    }
    Ok(())
}

fn report(summary: &RunSummary, metrics_output: Option<&Path>) -> anyhow::Result<()> {
    println!("{}", summary.format_table());
    if let Some(path) = metrics_output {
        summary.write_json(path)?;
        tracing::info!("Run summary written to {}", path.display());
    }
    Ok(())
}
