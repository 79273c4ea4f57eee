//! Plain game state owned by the engine.

use super::{Player, Snapshot};
use serde::Serialize;
use tracing::instrument;

/// Complete game state: history, selected step and move-list order.
///
/// Whose turn it is never appears here. It follows from the parity of
/// `current_step`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// Snapshots in play order. Never empty; entry 0 is the empty board.
    pub(crate) history: Vec<Snapshot>,
    /// Index of the displayed snapshot.
    pub(crate) current_step: usize,
    /// Whether the move list is shown oldest-first.
    pub(crate) sort_ascending: bool,
}

impl GameState {
    /// Creates a fresh game with the move list newest-first.
    #[instrument]
    pub fn new() -> Self {
        Self::with_sort_order(false)
    }

    /// Creates a fresh game with the given move-list order.
    #[instrument]
    pub fn with_sort_order(sort_ascending: bool) -> Self {
        Self {
            history: vec![Snapshot::initial()],
            current_step: 0,
            sort_ascending,
        }
    }

    /// Returns the full history.
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// Returns the selected step.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Returns whether the move list is oldest-first.
    pub fn sort_ascending(&self) -> bool {
        self.sort_ascending
    }

    /// Returns the displayed snapshot.
    pub fn current(&self) -> &Snapshot {
        &self.history[self.current_step]
    }

    /// Returns the player to move from the selected step.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.current_step)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
