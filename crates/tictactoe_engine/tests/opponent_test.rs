//! Tests for the computer's priority chain on hand-built boards.

use tictactoe_engine::rules::find_completion;
use tictactoe_engine::{Board, Cell, HeuristicOpponent, MoveSelector, Position, Side, Tier};

fn board(marks: &str) -> Board {
    let mut board = Board::new();
    for (pos, c) in Position::ALL.iter().zip(marks.chars()) {
        match c {
            'O' => board.set(*pos, Cell::Occupied(Side::Player)),
            'X' => board.set(*pos, Cell::Occupied(Side::Opponent)),
            _ => {}
        }
    }
    board
}

#[test]
fn test_completes_own_line_first() {
    let mut ai = HeuristicOpponent::seeded(0);
    assert_eq!(
        ai.choose(&board("XX.......")),
        Some((Position::TopRight, Tier::WinNow))
    );
}

#[test]
fn test_blocks_player_line() {
    let mut ai = HeuristicOpponent::seeded(0);
    assert_eq!(
        ai.choose(&board("OO.......")),
        Some((Position::TopRight, Tier::Block))
    );
}

#[test]
fn test_win_preferred_over_block() {
    let mut ai = HeuristicOpponent::seeded(0);
    // O threatens 3, X can finish 7-8-9.
    assert_eq!(
        ai.choose(&board("OO....XX.")),
        Some((Position::BottomRight, Tier::WinNow))
    );
}

#[test]
fn test_takes_center_on_empty_board() {
    let mut ai = HeuristicOpponent::seeded(0);
    assert_eq!(ai.select(&Board::new()), Some(Position::Center));
}

#[test]
fn test_every_gap_of_every_line_is_found() {
    // One mark missing from each line, at each of its three cells.
    let cases = [
        ("XX.......", 3),
        ("X.X......", 2),
        (".XX......", 1),
        ("....XX...", 4),
        ("...X.X...", 5),
        ("...XX....", 6),
        (".......XX", 7),
        ("......X.X", 8),
        ("......XX.", 9),
        ("...X..X..", 1),
        ("X.....X..", 4),
        ("X..X.....", 7),
        ("....X..X.", 2),
        (".X.....X.", 5),
        (".X..X....", 8),
        (".....X..X", 3),
        ("..X.....X", 6),
        ("..X..X...", 9),
        ("....X...X", 1),
        ("X.......X", 5),
        ("X...X....", 9),
        ("....X.X..", 3),
        ("..X...X..", 5),
        ("..X.X....", 7),
    ];

    for (marks, expected) in cases {
        let expected = Position::new(expected).expect("valid position");
        assert_eq!(
            find_completion(&board(marks), Side::Opponent),
            Some(expected),
            "board {}",
            marks
        );
    }
}

#[test]
fn test_random_fallback_is_reproducible() {
    let b = board("X...O...O");
    // X at 1, O at 5 and 9: O's diagonal is blocked, nothing to win.
    let picks: Vec<_> = (0..3)
        .map(|_| HeuristicOpponent::seeded(42).choose(&b))
        .collect();

    assert!(picks.iter().all(|p| p == &picks[0]));
    let (pos, tier) = picks[0].expect("empty cells remain");
    assert_eq!(tier, Tier::Random);
    assert!(b.is_empty(pos));
}
