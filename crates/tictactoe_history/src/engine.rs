//! Game engine with move history and time-travel.
//!
//! The engine is the only writer of [`GameState`]. A presentation layer
//! forwards gestures to the four mutating operations and reads everything it
//! draws back through the projections below, which are recomputed on every
//! call.

use super::action::{JumpError, Placement};
use super::contracts::{self, Contract, JumpContract, PlacementContract};
use super::move_list::{MoveEntry, MoveLabel};
use super::rules::{self, WinResult};
use super::{Board, GameState, Player, Position, Status};
use tracing::{debug, info, instrument};

/// Tic-tac-toe engine.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Creates an engine with a fresh game and the move list newest-first.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Creates an engine with a fresh game and the given move-list order.
    #[instrument]
    pub fn with_sort_order(sort_ascending: bool) -> Self {
        Self {
            state: GameState::with_sort_order(sort_ascending),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    // ─────────────────────────────────────────────────────────────
    //  Mutations
    // ─────────────────────────────────────────────────────────────

    /// Places the next player's mark at `position`.
    ///
    /// Ignored when the displayed board already has a winning line or the
    /// cell is filled. Otherwise any snapshots after the displayed step are
    /// discarded before the new one is appended.
    #[instrument(skip(self), fields(step = self.state.current_step))]
    pub fn apply_move(&mut self, position: Position) -> Placement {
        if let Err(reason) = PlacementContract::pre(&self.state, &position) {
            debug!(%reason, "Placement ignored");
            return Placement::Ignored(reason);
        }

        #[cfg(debug_assertions)]
        let before = self.state.clone();

        let mark = self.state.next_player();
        let next = self.state.current().after(position, mark);
        let discarded = self.state.history.len() - (self.state.current_step + 1);
        self.state.history.truncate(self.state.current_step + 1);
        self.state.history.push(next);
        self.state.current_step = self.state.history.len() - 1;

        #[cfg(debug_assertions)]
        contracts::report_violations(
            "apply_move",
            PlacementContract::post(&before, &self.state),
        );

        info!(
            %mark,
            %position,
            step = self.state.current_step,
            discarded,
            "Mark placed"
        );
        Placement::Placed {
            step: self.state.current_step,
            mark,
            position,
        }
    }

    /// Displays the snapshot at `step`.
    ///
    /// History is left intact; the next placement truncates it.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::StepOutOfRange`] if `step` is not in the history.
    /// The state is unchanged in that case.
    #[instrument(skip(self), fields(from = self.state.current_step))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), JumpError> {
        JumpContract::pre(&self.state, &step)?;

        #[cfg(debug_assertions)]
        let before = self.state.clone();

        self.state.current_step = step;

        #[cfg(debug_assertions)]
        contracts::report_violations("jump_to", JumpContract::post(&before, &self.state));

        debug!(step, next = %self.state.next_player(), "Jumped");
        Ok(())
    }

    /// Starts over from the empty board, keeping the move-list order.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        let sort_ascending = self.state.sort_ascending;
        self.state = GameState::with_sort_order(sort_ascending);

        #[cfg(debug_assertions)]
        contracts::assert_invariants(&self.state);

        info!("New game");
    }

    /// Flips the move-list order.
    #[instrument(skip(self))]
    pub fn toggle_sort_order(&mut self) {
        self.state.sort_ascending = !self.state.sort_ascending;

        #[cfg(debug_assertions)]
        contracts::assert_invariants(&self.state);

        debug!(ascending = self.state.sort_ascending, "Sort order toggled");
    }

    // ─────────────────────────────────────────────────────────────
    //  Projections
    // ─────────────────────────────────────────────────────────────

    /// The displayed board.
    pub fn current_board(&self) -> &Board {
        self.state.current().board()
    }

    /// The completed line on the displayed board, if any.
    pub fn win_result(&self) -> Option<WinResult> {
        rules::evaluate_board(self.current_board())
    }

    /// Indices of the winning cells on the displayed board.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        self.win_result().map(|win| win.indices())
    }

    /// Whether `position` is part of a completed line on the displayed board.
    pub fn is_winning_cell(&self, position: Position) -> bool {
        self.win_result().is_some_and(|win| win.contains(position))
    }

    /// Status line for the displayed step.
    pub fn status(&self) -> Status {
        Status::evaluate(self.current_board(), self.next_player())
    }

    /// Player to move from the displayed step.
    pub fn next_player(&self) -> Player {
        self.state.next_player()
    }

    /// The displayed step.
    pub fn current_step(&self) -> usize {
        self.state.current_step
    }

    /// Number of snapshots in the history, including the start.
    pub fn history_len(&self) -> usize {
        self.state.history.len()
    }

    /// Whether the move list is oldest-first.
    pub fn sort_ascending(&self) -> bool {
        self.state.sort_ascending
    }

    /// Empty cells a placement would accept. Empty once the game is won.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.win_result().is_some() {
            Vec::new()
        } else {
            Position::valid_moves(self.current_board())
        }
    }

    /// The move list in display order.
    ///
    /// Built oldest-first from the history and reversed as a whole when the
    /// list is sorted newest-first.
    #[instrument(skip(self), fields(ascending = self.state.sort_ascending))]
    pub fn ordered_move_list(&self) -> Vec<MoveEntry> {
        let mut entries: Vec<MoveEntry> = self
            .state
            .history
            .iter()
            .enumerate()
            .map(|(step, snapshot)| {
                MoveEntry::new(
                    step,
                    MoveLabel::for_snapshot(snapshot),
                    step == self.state.current_step,
                )
            })
            .collect();

        if !self.state.sort_ascending {
            entries.reverse();
        }
        entries
    }
}
