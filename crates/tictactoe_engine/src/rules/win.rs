//! Win detection and one-move completions.

use super::super::{Board, Position, Side};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Which line completed a win.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::EnumIter,
)]
pub enum VictoryLine {
    /// No line completed.
    #[default]
    None,
    /// Top row (1-2-3).
    Horizontal1,
    /// Middle row (4-5-6).
    Horizontal2,
    /// Bottom row (7-8-9).
    Horizontal3,
    /// Left column (1-4-7).
    Vertical1,
    /// Middle column (2-5-8).
    Vertical2,
    /// Right column (3-6-9).
    Vertical3,
    /// Falling diagonal (1-5-9).
    Diagonal1,
    /// Rising diagonal (3-5-7).
    Diagonal2,
}

impl VictoryLine {
    /// Cells of the line, or `None` for [`VictoryLine::None`].
    pub fn positions(self) -> Option<[Position; 3]> {
        LINES
            .iter()
            .find(|(line, _)| *line == self)
            .map(|(_, cells)| *cells)
    }
}

/// The 8 winning lines in detection order: rows, columns, diagonals.
pub const LINES: [(VictoryLine, [Position; 3]); 8] = [
    // Rows
    (
        VictoryLine::Horizontal1,
        [Position::TopLeft, Position::TopCenter, Position::TopRight],
    ),
    (
        VictoryLine::Horizontal2,
        [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    ),
    (
        VictoryLine::Horizontal3,
        [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    ),
    // Columns
    (
        VictoryLine::Vertical1,
        [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    ),
    (
        VictoryLine::Vertical2,
        [Position::TopCenter, Position::Center, Position::BottomCenter],
    ),
    (
        VictoryLine::Vertical3,
        [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    ),
    // Diagonals
    (
        VictoryLine::Diagonal1,
        [Position::TopLeft, Position::Center, Position::BottomRight],
    ),
    (
        VictoryLine::Diagonal2,
        [Position::TopRight, Position::Center, Position::BottomLeft],
    ),
];

/// Returns the first line fully marked by `side`, in [`LINES`] order.
#[instrument]
pub fn check_victory(board: &Board, side: Side) -> Option<VictoryLine> {
    LINES
        .iter()
        .find(|(_, cells)| cells.iter().all(|pos| board.is_marked_by(*pos, side)))
        .map(|(line, _)| *line)
}

/// Directional triples `(a, b, target)`: if `a` and `b` share a mark and
/// `target` is empty, playing `target` completes the line.
///
/// Each line `[p, q, r]` yields three rotations in the order
/// `(p, q, r)`, `(p, r, q)`, `(q, r, p)`, so every cell of every line is a
/// target exactly once: 24 triples in all.
pub fn completion_triples() -> impl Iterator<Item = (Position, Position, Position)> {
    LINES
        .into_iter()
        .flat_map(|(_, [p, q, r])| [(p, q, r), (p, r, q), (q, r, p)])
}

/// First cell that would complete a line for `side`, if any.
#[instrument]
pub fn find_completion(board: &Board, side: Side) -> Option<Position> {
    completion_triples()
        .find(|(a, b, target)| {
            board.is_marked_by(*a, side) && board.is_marked_by(*b, side) && board.is_empty(*target)
        })
        .map(|(_, _, target)| target)
}

#[cfg(test)]
mod tests {
    use super::super::super::Cell;
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    fn mark(board: &mut Board, side: Side, cells: &[Position]) {
        for pos in cells {
            board.set(*pos, Cell::Occupied(side));
        }
    }

    #[test]
    fn test_no_victory_empty_board() {
        let board = Board::new();
        assert_eq!(check_victory(&board, Side::Player), None);
        assert_eq!(check_victory(&board, Side::Opponent), None);
    }

    #[test]
    fn test_every_line_is_tagged() {
        for (line, cells) in LINES {
            let mut board = Board::new();
            mark(&mut board, Side::Opponent, &cells);
            assert_eq!(check_victory(&board, Side::Opponent), Some(line));
            assert_eq!(check_victory(&board, Side::Player), None);
        }
    }

    #[test]
    fn test_victory_only_for_own_mark() {
        let mut board = Board::new();
        mark(
            &mut board,
            Side::Player,
            &[Position::TopLeft, Position::TopCenter],
        );
        mark(&mut board, Side::Opponent, &[Position::TopRight]);
        assert_eq!(check_victory(&board, Side::Player), None);
        assert_eq!(check_victory(&board, Side::Opponent), None);
    }

    #[test]
    fn test_positions_round_trip() {
        assert_eq!(VictoryLine::None.positions(), None);
        for line in VictoryLine::iter().skip(1) {
            let cells = line.positions().expect("every real line has cells");
            assert!(LINES.contains(&(line, cells)));
        }
    }

    #[test]
    fn test_triples_cover_every_line_cell_once() {
        let triples: Vec<_> = completion_triples().collect();
        assert_eq!(triples.len(), 24);

        let mut seen = HashSet::new();
        for (a, b, target) in &triples {
            let mut key = [*a, *b, *target];
            key.sort();
            assert!(seen.insert((key, *target)), "duplicate triple {:?}", key);
        }

        for (_, cells) in LINES {
            for target in cells {
                let mut key = cells;
                key.sort();
                assert!(seen.contains(&(key, target)));
            }
        }
    }

    #[test]
    fn test_completion_first_cell_of_middle_row() {
        let mut board = Board::new();
        mark(
            &mut board,
            Side::Opponent,
            &[Position::Center, Position::MiddleRight],
        );
        assert_eq!(
            find_completion(&board, Side::Opponent),
            Some(Position::MiddleLeft)
        );
    }

    #[test]
    fn test_completion_blocked_cell_ignored() {
        let mut board = Board::new();
        mark(
            &mut board,
            Side::Player,
            &[Position::TopLeft, Position::TopCenter],
        );
        mark(&mut board, Side::Opponent, &[Position::TopRight]);
        assert_eq!(find_completion(&board, Side::Player), None);
    }

    #[test]
    fn test_completion_follows_line_order() {
        let mut board = Board::new();
        // Both the top row and the left column are one short.
        mark(
            &mut board,
            Side::Player,
            &[Position::TopLeft, Position::TopCenter, Position::MiddleLeft],
        );
        assert_eq!(
            find_completion(&board, Side::Player),
            Some(Position::TopRight)
        );
    }
}
