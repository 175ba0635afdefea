//! Command-line interface for tictactoe_duel.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe against a rule-based computer opponent.
///
/// Type 1-9 (or a cell name such as "center") to move, "r" to play again,
/// "q" to quit.
#[derive(Parser, Debug)]
#[command(name = "tictactoe_duel")]
#[command(version)]
pub struct Cli {
    /// Path to an engine config file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for the computer's random fallback (overrides the config file)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print each snapshot as JSON instead of a text board
    #[arg(long)]
    pub json: bool,
}
