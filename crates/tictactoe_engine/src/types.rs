//! Core domain types for the game.

use super::rules::VictoryLine;
use super::Position;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the two sides at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The human, playing `O`.
    Player,
    /// The computer, playing `X`.
    Opponent,
}

impl Side {
    /// Returns the other side.
    pub fn other(self) -> Self {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    /// The mark this side draws on the board.
    pub fn mark(self) -> char {
        match self {
            Side::Player => 'O',
            Side::Opponent => 'X',
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Marked by a side.
    Occupied(Side),
}

/// Whose move is next.
///
/// `None` marks a won game. A drawn game keeps the turn of the side that
/// filled the last cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    /// Waiting for the human.
    Player,
    /// The computer is to move.
    Opponent,
    /// The game has been won.
    None,
}

impl From<Side> for Turn {
    fn from(side: Side) -> Self {
        match side {
            Side::Player => Turn::Player,
            Side::Opponent => Turn::Opponent,
        }
    }
}

/// 3x3 board, always exactly 9 cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order.
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at a position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Sets the cell at a position.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.index()] = cell;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Checks whether a cell carries the given side's mark.
    pub fn is_marked_by(&self, pos: Position, side: Side) -> bool {
        self.get(pos) == Cell::Occupied(side)
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Empty positions in board order.
    #[instrument(skip(self))]
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }
}

/// Renders the board with marks, and cell numbers for empty cells.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in Position::ALL.chunks(3).enumerate() {
            let symbols: Vec<String> = cells
                .iter()
                .map(|pos| match self.get(*pos) {
                    Cell::Empty => pos.number().to_string(),
                    Cell::Occupied(side) => side.mark().to_string(),
                })
                .collect();
            write!(f, "{}", symbols.join("|"))?;
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Session scoreboard. Survives [`reset_game`](crate::Engine::reset_game).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_new::new,
)]
pub struct Tally {
    /// Games won by the human.
    pub player_wins: u32,
    /// Games won by the computer.
    pub opponent_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Tally {
    /// Tally with one more win for `side`.
    pub fn with_win(self, side: Side) -> Self {
        match side {
            Side::Player => Self {
                player_wins: self.player_wins + 1,
                ..self
            },
            Side::Opponent => Self {
                opponent_wins: self.opponent_wins + 1,
                ..self
            },
        }
    }

    /// Tally with one more draw.
    pub fn with_draw(self) -> Self {
        Self {
            draws: self.draws + 1,
            ..self
        }
    }

    /// Total games finished this session.
    pub fn games(&self) -> u32 {
        self.player_wins + self.opponent_wins + self.draws
    }
}

/// Where a single game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// The engine waits for the human's move.
    AwaitingPlayer,
    /// The computer is to move. Only observable if its selector came up empty.
    AwaitingOpponent,
    /// A side completed a line.
    Won(Side),
    /// Board full, nobody won.
    Drawn,
}

impl Phase {
    /// Whether the game is over and waits for a reset.
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Won(_) | Phase::Drawn)
    }
}

/// Immutable snapshot of the engine after a transition.
///
/// The engine replaces its snapshot wholesale on every transition;
/// collaborators only ever read it.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameState {
    /// Board contents.
    pub(crate) board: Board,
    /// Whose move is next.
    pub(crate) turn: Turn,
    #[getter(skip)]
    pub(crate) has_won: bool,
    /// The completed line, if any.
    pub(crate) victory_line: VictoryLine,
    /// Status line for display, derived from the other fields.
    pub(crate) status_text: String,
    /// Session scoreboard.
    pub(crate) tally: Tally,
}

impl GameState {
    /// Fresh game with the given side to move.
    pub(crate) fn opening(starter: Side, tally: Tally) -> Self {
        Self {
            board: Board::new(),
            turn: starter.into(),
            has_won: false,
            victory_line: VictoryLine::None,
            status_text: turn_text(starter),
            tally,
        }
    }

    /// Set once a line is completed.
    pub fn has_won(&self) -> bool {
        self.has_won
    }

    /// The winning side, read off the completed line.
    pub fn winner(&self) -> Option<Side> {
        if !self.has_won {
            return None;
        }
        let [first, _, _] = self.victory_line.positions()?;
        match self.board.get(first) {
            Cell::Occupied(side) => Some(side),
            Cell::Empty => None,
        }
    }

    /// Derives the current phase.
    pub fn phase(&self) -> Phase {
        if let Some(side) = self.winner() {
            return Phase::Won(side);
        }
        if super::rules::is_full(&self.board) {
            return Phase::Drawn;
        }
        match self.turn {
            Turn::Opponent => Phase::AwaitingOpponent,
            Turn::Player | Turn::None => Phase::AwaitingPlayer,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::opening(Side::Player, Tally::default())
    }
}

/// Status text while `side` is to move.
pub(crate) fn turn_text(side: Side) -> String {
    format!("Player '{}' turn", side.mark())
}

/// Status text after `side` won.
pub(crate) fn won_text(side: Side) -> String {
    format!("Player '{}' Won", side.mark())
}

/// Status text after a draw.
pub(crate) const DRAW_TEXT: &str = "Game Draw";
