//! Tic-tac-toe Duel - terminal front end for the game engine.

#![warn(missing_docs)]

mod cli;
mod console;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use tictactoe_engine::{Engine, EngineConfig};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => EngineConfig::default(),
    };
    let config = match cli.seed {
        Some(seed) => config.with_seed(Some(seed)),
        None => config,
    };
    debug!(?config, "Effective configuration");

    let mut engine = Engine::from_config(&config);
    info!(json = cli.json, "Starting console session");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    console::run(&mut engine, stdin.lock(), stdout.lock(), cli.json)
}
