mod commands;
mod config;
mod render;
mod replay;
mod script;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "eventcal")]
#[command(about = "Replay agenda scripts into an in-memory event calendar")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply every step of an agenda script and print the resulting agenda
    Run {
        /// Path to the TOML agenda script
        script: PathBuf,

        /// Show agenda events from this instant (RFC 3339)
        #[arg(long)]
        from: Option<String>,

        /// Show agenda events until this instant (RFC 3339)
        #[arg(long)]
        to: Option<String>,

        /// Allow overlapping events in every step
        #[arg(long)]
        allow_overlapping: bool,

        /// Use deterministic ids (PREFIX-1, PREFIX-2, ...) instead of UUIDs
        #[arg(long, value_name = "PREFIX")]
        seed_ids: Option<String>,
    },
    /// Show config path and effective settings
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load_config()?;
    init_logging(&config.log_level);

    match cli.command {
        Commands::Run {
            script,
            from,
            to,
            allow_overlapping,
            seed_ids,
        } => commands::run::run(
            &script,
            commands::run::RunArgs {
                from,
                to,
                allow_overlapping,
                seed_ids,
            },
            &config,
        ),
        Commands::Config => commands::config::run(&config),
    }
}

/// RUST_LOG wins over the configured level.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
