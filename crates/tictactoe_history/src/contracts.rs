//! Contract-based validation for engine operations.
//!
//! Contracts formalize Hoare-style reasoning: {P} action {Q}. Preconditions
//! always run and decide whether an operation proceeds. Postconditions run in
//! debug builds only.

use super::action::{IgnoreReason, JumpError};
use super::invariants::{EngineInvariants, InvariantSet, InvariantViolation};
use super::{GameState, Position, rules};
use tracing::{error, instrument};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// What a failed precondition reports.
    type Rejection;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Self::Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the displayed board has no winning line.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects with [`IgnoreReason::GameOver`] once a line is complete.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), IgnoreReason> {
        if rules::evaluate_board(state.current().board()).is_some() {
            Err(IgnoreReason::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell is empty on the displayed board.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects with [`IgnoreReason::Occupied`] for a filled cell.
    #[instrument(skip(state))]
    pub fn check(position: Position, state: &GameState) -> Result<(), IgnoreReason> {
        if state.current().board().is_empty(position) {
            Ok(())
        } else {
            Err(IgnoreReason::Occupied(position))
        }
    }
}

/// Precondition: the requested step exists in the history.
pub struct StepInRange;

impl StepInRange {
    /// Rejects with [`JumpError::StepOutOfRange`] past the end of history.
    #[instrument(skip(state))]
    pub fn check(step: usize, state: &GameState) -> Result<(), JumpError> {
        let len = state.history().len();
        if step < len {
            Ok(())
        } else {
            Err(JumpError::StepOutOfRange { step, len })
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Operation Contracts
// ─────────────────────────────────────────────────────────────

/// Contract for placing a mark.
///
/// Preconditions: no winning line on the displayed board, target cell empty.
///
/// Postconditions: the step advanced by one, history ends at the new step,
/// and all engine invariants hold.
pub struct PlacementContract;

impl Contract<GameState, Position> for PlacementContract {
    type Rejection = IgnoreReason;

    fn pre(state: &GameState, position: &Position) -> Result<(), IgnoreReason> {
        GameNotOver::check(state)?;
        CellIsEmpty::check(*position, state)?;
        Ok(())
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = EngineInvariants::check_all(after).err().unwrap_or_default();
        if after.current_step() != before.current_step() + 1 {
            violations.push(InvariantViolation::new("Placement advances the step by one"));
        }
        if after.history().len() != after.current_step() + 1 {
            violations.push(InvariantViolation::new(
                "Placement discards snapshots past the new step",
            ));
        }
        if after.history().get(..after.current_step())
            != before.history().get(..=before.current_step())
        {
            violations.push(InvariantViolation::new(
                "Placement keeps the history up to the old step",
            ));
        }
        into_result(violations)
    }
}

/// Contract for jumping to a step.
///
/// Precondition: the step exists.
///
/// Postconditions: history unchanged and all engine invariants hold.
pub struct JumpContract;

impl Contract<GameState, usize> for JumpContract {
    type Rejection = JumpError;

    fn pre(state: &GameState, step: &usize) -> Result<(), JumpError> {
        StepInRange::check(*step, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = EngineInvariants::check_all(after).err().unwrap_or_default();
        if before.history() != after.history() {
            violations.push(InvariantViolation::new("Jumping leaves history unchanged"));
        }
        into_result(violations)
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// Logs and asserts on a failed postcondition (debug builds only).
pub(crate) fn report_violations(operation: &str, result: Result<(), Vec<InvariantViolation>>) {
    if let Err(violations) = result {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        error!(operation, %descriptions, "Postcondition failed");
        debug_assert!(false, "{operation} postcondition failed: {descriptions}");
    }
}

/// Asserts that all engine invariants hold (panics on violation in debug builds).
#[instrument(skip(state))]
pub fn assert_invariants(state: &GameState) {
    report_violations("invariants", EngineInvariants::check_all(state));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameEngine, Player, Snapshot};

    #[test]
    fn test_precondition_empty_square() {
        let state = GameState::new();
        assert!(PlacementContract::pre(&state, &Position::Center).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let mut engine = GameEngine::new();
        engine.apply_move(Position::Center);
        assert_eq!(
            PlacementContract::pre(engine.state(), &Position::Center),
            Err(IgnoreReason::Occupied(Position::Center))
        );
    }

    #[test]
    fn test_game_over_is_checked_before_occupancy() {
        let mut engine = GameEngine::new();
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ] {
            engine.apply_move(pos);
        }
        assert_eq!(
            PlacementContract::pre(engine.state(), &Position::TopLeft),
            Err(IgnoreReason::GameOver)
        );
    }

    #[test]
    fn test_jump_precondition() {
        let state = GameState::new();
        assert!(JumpContract::pre(&state, &0).is_ok());
        assert_eq!(
            JumpContract::pre(&state, &1),
            Err(JumpError::StepOutOfRange { step: 1, len: 1 })
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let mut engine = GameEngine::new();
        let before = engine.state().clone();
        engine.apply_move(Position::Center);
        assert!(PlacementContract::post(&before, engine.state()).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let mut engine = GameEngine::new();
        let before = engine.state().clone();
        engine.apply_move(Position::Center);

        let mut after = engine.state().clone();
        after.history[1] = Snapshot::initial().after(Position::TopLeft, Player::O);

        let violations = PlacementContract::post(&before, &after).unwrap_err();
        assert!(!violations.is_empty());
    }

    #[test]
    fn test_jump_postcondition_detects_rewritten_history() {
        let mut engine = GameEngine::new();
        engine.apply_move(Position::Center);
        let before = engine.state().clone();

        let mut after = before.clone();
        after.history.truncate(1);
        after.current_step = 0;

        assert!(JumpContract::post(&before, &after).is_err());
    }
}
