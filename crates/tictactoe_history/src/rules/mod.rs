//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). They never touch engine
//! state, so the engine and its invariants can both call them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WINNING_LINES, WinResult, evaluate_board};
