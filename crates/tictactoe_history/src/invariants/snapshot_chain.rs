//! Snapshot chain invariant: each step adds exactly one mark.

use super::super::{GameState, Player, Position, Square};
use super::Invariant;

/// Invariant: every snapshot after the first is its predecessor plus one mark.
///
/// The added cell is the recorded position, was empty before, and holds the
/// mark of the player whose turn it was (X from even steps, O from odd).
/// Every other cell is unchanged.
pub struct SnapshotChainInvariant;

impl Invariant<GameState> for SnapshotChainInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .windows(2)
            .enumerate()
            .all(|(step, pair)| {
                let [prev, next] = pair else {
                    return false;
                };
                let Some(placed) = next.placed() else {
                    return false;
                };
                let mark = Player::for_step(step);

                prev.board().get(placed) == Square::Empty
                    && next.board().get(placed) == Square::Occupied(mark)
                    && Position::ALL
                        .iter()
                        .filter(|pos| **pos != placed)
                        .all(|pos| prev.board().get(*pos) == next.board().get(*pos))
            })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to its predecessor"
    }
}
