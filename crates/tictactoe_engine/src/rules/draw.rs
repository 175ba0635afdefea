//! Draw detection.

use super::super::{Board, Cell, Side};
use super::win::check_victory;
use tracing::instrument;

/// Checks if every cell holds a mark.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// A full board on which neither side completed a line.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board)
        && check_victory(board, Side::Player).is_none()
        && check_victory(board, Side::Opponent).is_none()
}
