//! qlab - Qubit Lab command-line driver
//!
//! Drives the single-qubit density-matrix engine through its command channel.
//!
//! ## Modes
//! - `qlab serve` (default): one JSON request per stdin line, one JSON
//!   response per stdout line
//! - `qlab demo plus|dephase`: canned sequences printed as a table
//!
//! ## Environment Variables
//! - `RUST_LOG`: log filter (default: `qlab=info,qlab_engine=info`), logs go to stderr
//! - `QLAB_CHANNEL_CAPACITY`, `QLAB_VALIDATE_RANGES`, `QLAB_RANGE_TOLERANCE`,
//!   `QLAB_DRIFT_TOLERANCE`: engine configuration (also read from `.env`)

mod demo;
mod serve;

use anyhow::Result;
use clap::{Parser, Subcommand};
use qlab_engine::EngineConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use demo::DemoKind;

#[derive(Parser)]
#[command(name = "qlab")]
#[command(author = "Qubit Lab Contributors")]
#[command(version)]
#[command(about = "Qubit Lab - single-qubit density-matrix playground", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Capacity of the request/response queues
    #[arg(long, global = true)]
    capacity: Option<usize>,

    /// Accept dephasing p outside [0, 1] and Bloch vectors longer than 1
    #[arg(long, global = true, default_value_t = false)]
    no_validate: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve JSON-lines requests from stdin
    Serve,

    /// Run a canned demo sequence
    Demo {
        /// Which sequence to run
        #[arg(value_enum)]
        kind: DemoKind,
    },
}

impl Cli {
    fn engine_config(&self) -> EngineConfig {
        let mut config = EngineConfig::from_env();
        if let Some(capacity) = self.capacity {
            config = config.with_capacity(capacity);
        }
        if self.no_validate {
            config = config.unchecked();
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // stdout fica reservado para o protocolo
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "qlab=info,qlab_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.engine_config();
    tracing::debug!(?config, "engine configuration");

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve::run(config).await,
        Commands::Demo { kind } => demo::run(kind, config).await,
    }
}
