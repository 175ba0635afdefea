//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board): win detection, draw
//! detection, and the directional triples the opponent scans for one-move
//! completions. Rules are kept apart from the engine so they can be tested
//! on hand-built boards.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_victory, completion_triples, find_completion, VictoryLine, LINES};
