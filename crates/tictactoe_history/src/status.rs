//! Game status derived from the displayed board.

use super::{Board, Player, rules};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// What the status line shows for the displayed step.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Status {
    /// A line is complete.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// The board is full with no complete line.
    #[display("Draw: Cat's game")]
    Draw,
    /// Play continues with this player.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

impl Status {
    /// Evaluates `board`, falling back to `next` when the game is still open.
    #[instrument(level = "trace")]
    pub fn evaluate(board: &Board, next: Player) -> Self {
        if let Some(win) = rules::evaluate_board(board) {
            Status::Winner(win.mark())
        } else if rules::is_full(board) {
            Status::Draw
        } else {
            Status::NextPlayer(next)
        }
    }
}
