//! Input events and move errors.
//!
//! The presentation layer translates raw input (taps, key presses, stdin
//! lines) into [`UserAction`]s; the engine decides what they mean.

use super::{Position, Turn};
use serde::{Deserialize, Serialize};

/// An input event from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserAction {
    /// The human tapped a cell.
    BoardTapped(Position),
    /// The human asked for another game.
    PlayAgain,
}

impl std::fmt::Display for UserAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserAction::BoardTapped(pos) => write!(f, "tap {}", pos),
            UserAction::PlayAgain => write!(f, "play again"),
        }
    }
}

/// Why a move was not applied.
///
/// The engine never changes state when it returns one of these, so a caller
/// that ignores the error sees the move silently absorbed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The number does not name a board cell (1-9).
    #[display("Position {} is off the board (expected 1-9)", _0)]
    OutOfRange(u8),

    /// The cell already holds a mark.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),

    /// The human tried to move while the turn belongs elsewhere.
    #[display("Not the player's turn (turn: {:?})", _0)]
    NotPlayersTurn(Turn),
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_display() {
        let tap = UserAction::BoardTapped(Position::Center);
        assert_eq!(tap.to_string(), format!("tap {}", Position::Center));
        assert_eq!(UserAction::PlayAgain.to_string(), "play again");
    }
}
