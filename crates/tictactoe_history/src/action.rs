//! Outcomes of the engine's mutating operations.
//!
//! A click on a filled cell or on a finished board is not a failure. It is
//! reported as [`Placement::Ignored`] so callers can log it, and the state is
//! left exactly as it was.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// Result of [`GameEngine::apply_move`](super::GameEngine::apply_move).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Placement {
    /// A mark was placed, producing a new step.
    Placed {
        /// The step the new snapshot occupies.
        step: usize,
        /// The mark that was placed.
        mark: Player,
        /// Where it was placed.
        position: Position,
    },
    /// The gesture had no effect.
    Ignored(IgnoreReason),
}

impl Placement {
    /// Returns true if a mark was placed.
    pub fn is_placed(&self) -> bool {
        matches!(self, Placement::Placed { .. })
    }
}

/// Why a placement had no effect.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum IgnoreReason {
    /// The displayed board already has a winning line.
    #[display("Game is already over")]
    GameOver,

    /// The target cell is filled.
    #[display("Square {} is already occupied", _0)]
    Occupied(Position),
}

/// Error returned when jumping to a step the history does not have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum JumpError {
    /// The requested step is past the end of the history.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time of the request.
        len: usize,
    },
}

impl std::error::Error for JumpError {}
