//! Immutable board snapshots recorded in the move history.

use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};

/// The board as it stood after one move, plus the cell placed to reach it.
///
/// The initial snapshot is the empty board with no placed cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snapshot {
    board: Board,
    placed: Option<Position>,
}

impl Snapshot {
    /// The empty starting board.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            placed: None,
        }
    }

    /// The snapshot reached by placing `mark` at `position` on this board.
    pub(crate) fn after(&self, position: Position, mark: Player) -> Self {
        Self {
            board: self.board.with_mark(position, mark),
            placed: Some(position),
        }
    }

    /// The board at this point in the game.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The cell placed on this move, or `None` for the initial snapshot.
    pub fn placed(&self) -> Option<Position> {
        self.placed
    }

    /// The mark placed on this move.
    pub fn mark(&self) -> Option<Player> {
        self.placed.and_then(|pos| self.board.get(pos).player())
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::initial()
    }
}
