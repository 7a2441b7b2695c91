//! queue-lab CLI: interactive linear or circular queue session.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use queue_lab::config::Config;
use queue_lab::error::Error;
use queue_lab::menu::Menu;
use queue_lab::model::QueueKind;
use queue_lab::queue::{self, AnyQueue};
use queue_lab::telemetry::{TelemetryConfig, init_telemetry};

#[derive(Parser)]
#[command(name = "queue-lab", about = "Interactive linear and circular queues")]
struct Cli {
    /// TOML config file; values override the environment
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print `display` results as JSON snapshots
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Front/rear window that grows when rear reaches the end
    Linear {
        /// Initial capacity (asked for interactively when omitted)
        #[arg(long)]
        capacity: Option<usize>,
    },
    /// Ring buffer whose rear wraps back to slot 0
    Circular {
        /// Initial capacity (asked for interactively when omitted)
        #[arg(long)]
        capacity: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(ref path) = cli.config {
        config = config.merge(Config::from_file(path)?);
    }

    let (kind, capacity) = match cli.command {
        Some(Command::Linear { capacity }) => (QueueKind::Linear, capacity),
        Some(Command::Circular { capacity }) => (QueueKind::Circular, capacity),
        None => (
            config.kind.context("choose a queue: `linear` or `circular`")?,
            None,
        ),
    };
    let capacity = capacity.or(config.initial_capacity);

    let guard = init_telemetry(TelemetryConfig::from_config(&config, "queue-lab"))?;

    let json = cli.json;
    let outcome = tokio::task::spawn_blocking(move || run_session(kind, capacity, json)).await?;
    guard.force_flush();
    outcome
}

fn run_session(kind: QueueKind, capacity: Option<usize>, json: bool) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut menu = Menu::new(stdin.lock(), stdout.lock()).json(json);

    let capacity = match capacity {
        Some(c) => c,
        None => menu.read_initial_capacity()?,
    };

    let mut queue = build_queue(kind, capacity)?;
    tracing::info!(%kind, capacity, "queue created");

    menu.run(&mut queue)?;
    Ok(())
}

/// Construct the session's queue. Failing here ends the process.
fn build_queue(kind: QueueKind, capacity: usize) -> anyhow::Result<AnyQueue> {
    queue::build(kind, capacity).map_err(|e| match e {
        Error::AllocationFailed { .. } => anyhow::Error::new(e)
            .context(format!("Memory Allocation Failed...Try again... ({kind} queue, size {capacity})")),
        other => anyhow::Error::new(other).context(format!("cannot create {kind} queue")),
    })
}
