//! The game engine: one session of human versus computer.
//!
//! The engine owns the current [`GameState`] snapshot and replaces it on
//! every transition. Two operations drive it: [`Engine::submit_move`] for
//! the human's cell choice and [`Engine::reset_game`] for another round.
//! When the human's move leaves the computer to play, the computer's reply
//! runs inside the same call, so callers only ever observe settled states.
//!
//! The engine is not reentrant. Share it across threads behind a mutex
//! around the whole engine.

use super::action::{MoveError, UserAction};
use super::config::EngineConfig;
use super::opponent::{HeuristicOpponent, MoveSelector};
use super::rules::{check_victory, is_full, VictoryLine};
use super::types::{turn_text, won_text, DRAW_TEXT};
use super::{Cell, GameState, Phase, Position, Side, Tally, Turn};
use tracing::{debug, info, instrument, warn};

/// Human-versus-computer tic-tac-toe session.
#[derive(Debug, Clone)]
pub struct Engine<S = HeuristicOpponent> {
    state: GameState,
    /// Side that opened the current game.
    starter: Side,
    selector: S,
}

impl Engine<HeuristicOpponent> {
    /// Creates an engine with an entropy-seeded heuristic opponent.
    #[instrument]
    pub fn new() -> Self {
        Self::with_selector(HeuristicOpponent::default())
    }

    /// Creates an engine from configuration.
    #[instrument]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::with_selector(HeuristicOpponent::new(*config.seed()))
    }
}

impl Default for Engine<HeuristicOpponent> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: MoveSelector> Engine<S> {
    /// Creates an engine whose computer moves come from `selector`.
    ///
    /// The first game always opens with the human.
    pub fn with_selector(selector: S) -> Self {
        info!(selector = selector.name(), "New session");
        Self {
            state: GameState::opening(Side::Player, Tally::default()),
            starter: Side::Player,
            selector,
        }
    }

    /// Current snapshot.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current phase, derived from the snapshot.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Side that opened the current game.
    pub fn starter(&self) -> Side {
        self.starter
    }

    /// Places the human's mark and, if the game goes on, the computer's reply.
    ///
    /// # Errors
    ///
    /// - [`MoveError::NotPlayersTurn`] while the game is won or the turn
    ///   belongs to the computer.
    /// - [`MoveError::CellOccupied`] if the cell holds a mark. Drawn boards
    ///   are full, so every move after a draw lands here.
    ///
    /// The snapshot is unchanged on every error path.
    #[instrument(skip(self, position), fields(position = position.number()))]
    pub fn submit_move(&mut self, position: Position) -> Result<&GameState, MoveError> {
        if self.state.turn != Turn::Player {
            return Err(MoveError::NotPlayersTurn(self.state.turn));
        }
        if !self.state.board.is_empty(position) {
            return Err(MoveError::CellOccupied(position));
        }

        self.place(position, Side::Player);
        self.opponent_move();
        Ok(&self.state)
    }

    /// Clears the board for another game, keeping the tally.
    ///
    /// The opening side alternates from game to game. When the computer
    /// opens, its first move is played before this returns.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) -> &GameState {
        let starter = self.starter.other();
        self.starter = starter;
        self.state = GameState::opening(starter, self.state.tally);
        info!(
            ?starter,
            games = self.state.tally.games(),
            tally = ?self.state.tally,
            "Game reset"
        );

        self.opponent_move();
        &self.state
    }

    /// Dispatches a presentation-layer event.
    ///
    /// Rejected moves are logged and otherwise ignored.
    #[instrument(skip(self))]
    pub fn on_action(&mut self, action: UserAction) -> &GameState {
        match action {
            UserAction::BoardTapped(position) => {
                if let Err(e) = self.submit_move(position) {
                    debug!(error = %e, "Ignoring tap");
                }
                &self.state
            }
            UserAction::PlayAgain => self.reset_game(),
        }
    }

    /// Plays the computer's move if it is the computer's turn.
    fn opponent_move(&mut self) {
        if self.state.turn != Turn::Opponent {
            return;
        }

        match self.selector.select(&self.state.board) {
            Some(position) if self.state.board.is_empty(position) => {
                self.place(position, Side::Opponent);
            }
            Some(position) => {
                warn!(
                    selector = self.selector.name(),
                    position = position.number(),
                    "Selector chose an occupied cell"
                );
            }
            None => {
                warn!(selector = self.selector.name(), "Selector found no move");
            }
        }
    }

    /// Marks an empty cell for `side` and computes the next snapshot.
    fn place(&mut self, position: Position, side: Side) {
        let mut board = self.state.board;
        board.set(position, Cell::Occupied(side));
        debug!(position = position.number(), ?side, "Mark placed");

        let tally = self.state.tally;
        self.state = if let Some(line) = check_victory(&board, side) {
            info!(?side, ?line, "Game won");
            GameState {
                board,
                turn: Turn::None,
                has_won: true,
                victory_line: line,
                status_text: won_text(side),
                tally: tally.with_win(side),
            }
        } else if is_full(&board) {
            info!("Game drawn");
            GameState {
                board,
                turn: self.state.turn,
                has_won: false,
                victory_line: VictoryLine::None,
                status_text: DRAW_TEXT.to_string(),
                tally: tally.with_draw(),
            }
        } else {
            let next = side.other();
            GameState {
                board,
                turn: next.into(),
                has_won: false,
                victory_line: VictoryLine::None,
                status_text: turn_text(next),
                tally,
            }
        };
    }
}
