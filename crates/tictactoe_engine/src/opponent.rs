//! Computer opponent move selection.
//!
//! [`HeuristicOpponent`] runs a fixed priority chain on every turn:
//!
//! 1. complete one of its own lines,
//! 2. block a line the human would complete next move,
//! 3. take the center,
//! 4. pick a random empty cell.
//!
//! There is no lookahead past one ply and no fork detection, so a careful
//! human can still beat it.

use super::rules::find_completion;
use super::{Board, Position, Side};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Chooses the computer's next cell.
///
/// The engine calls [`select`](MoveSelector::select) only while the
/// computer is to move and at least one cell is empty.
pub trait MoveSelector {
    /// Picks an empty cell, or `None` if there is nothing to play.
    fn select(&mut self, board: &Board) -> Option<Position>;

    /// Returns the selector's display name.
    fn name(&self) -> &str;
}

/// Which rule of the priority chain produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    /// Completes an opponent line.
    WinNow,
    /// Stops a player line.
    Block,
    /// Takes the center cell.
    Center,
    /// Uniform pick among empty cells.
    Random,
}

/// Rule-based opponent: win, block, center, random.
#[derive(Debug, Clone)]
pub struct HeuristicOpponent {
    rng: StdRng,
}

impl HeuristicOpponent {
    /// Creates an opponent whose random fallback is seeded from `seed`,
    /// or from OS entropy when `None`.
    #[instrument]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Creates a deterministic opponent.
    pub fn seeded(seed: u64) -> Self {
        Self::new(Some(seed))
    }

    /// Runs the priority chain and reports which tier fired.
    #[instrument(skip(self))]
    pub fn choose(&mut self, board: &Board) -> Option<(Position, Tier)> {
        if let Some(pos) = find_completion(board, Side::Opponent) {
            return Some((pos, Tier::WinNow));
        }
        if let Some(pos) = find_completion(board, Side::Player) {
            return Some((pos, Tier::Block));
        }
        if board.is_empty(Position::Center) {
            return Some((Position::Center, Tier::Center));
        }
        board
            .empty_positions()
            .choose(&mut self.rng)
            .map(|pos| (*pos, Tier::Random))
    }
}

impl Default for HeuristicOpponent {
    fn default() -> Self {
        Self::new(None)
    }
}

impl MoveSelector for HeuristicOpponent {
    fn select(&mut self, board: &Board) -> Option<Position> {
        let (pos, tier) = self.choose(board)?;
        debug!(position = pos.number(), ?tier, "Opponent chose cell");
        Some(pos)
    }

    fn name(&self) -> &str {
        "heuristic"
    }
}
