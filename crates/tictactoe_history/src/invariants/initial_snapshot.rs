//! Initial snapshot invariant: history starts from the empty board.

use super::super::{GameState, Snapshot};
use super::Invariant;

/// Invariant: `history[0]` is the empty board with no placed cell.
pub struct InitialSnapshotInvariant;

impl Invariant<GameState> for InitialSnapshotInvariant {
    fn holds(state: &GameState) -> bool {
        state.history().first() == Some(&Snapshot::initial())
    }

    fn description() -> &'static str {
        "History begins with the empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_fresh_state_holds() {
        assert!(InitialSnapshotInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_empty_history_violates() {
        let mut state = GameState::new();
        state.history.clear();
        assert!(!InitialSnapshotInvariant::holds(&state));
    }

    #[test]
    fn test_marked_start_violates() {
        let mut state = GameState::new();
        state.history[0] = Snapshot::initial().after(Position::Center, Player::X);
        assert!(!InitialSnapshotInvariant::holds(&state));
    }
}
