//! Tic-tac-toe engine: a human against a rule-based computer opponent.
//!
//! # Architecture
//!
//! - **Types**: board, cells, turn, tally and the [`GameState`] snapshot
//! - **Rules**: win/draw detection and one-move line completions
//! - **Opponent**: the [`MoveSelector`] seam and the [`HeuristicOpponent`]
//! - **Engine**: turn sequencing, scoring and game alternation
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Engine, EngineConfig, Position, Turn};
//!
//! let mut engine = Engine::from_config(&EngineConfig::new(Some(7)));
//! let state = engine.submit_move(Position::TopLeft)?;
//!
//! // The computer has already answered by taking the center.
//! assert_eq!(state.turn(), &Turn::Player);
//! assert!(!state.board().is_empty(Position::Center));
//! # Ok::<(), tictactoe_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod engine;
mod opponent;
mod position;
pub mod rules;
mod types;

pub use action::{MoveError, UserAction};
pub use config::{ConfigError, EngineConfig};
pub use engine::Engine;
pub use opponent::{HeuristicOpponent, MoveSelector, Tier};
pub use position::Position;
pub use rules::VictoryLine;
pub use types::{Board, Cell, GameState, Phase, Side, Tally, Turn};
