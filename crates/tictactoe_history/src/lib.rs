//! Tic-tac-toe game engine with move history and time-travel.
//!
//! # Architecture
//!
//! - **Rules**: pure win/draw evaluation over a [`Board`]
//! - **State**: [`GameState`] holds the snapshot history, the displayed step
//!   and the move-list order. Whose turn it is follows from step parity.
//! - **Engine**: [`GameEngine`] owns the state, applies gestures and derives
//!   everything a front end draws
//! - **Contracts**: preconditions decide whether an operation proceeds;
//!   postconditions and [`invariants`] are checked in debug builds
//!
//! # Example
//!
//! ```
//! use tictactoe_history::{GameEngine, Player, Position, Status};
//!
//! let mut engine = GameEngine::new();
//! engine.apply_move(Position::Center);
//! engine.apply_move(Position::TopLeft);
//! assert_eq!(engine.status(), Status::NextPlayer(Player::X));
//!
//! // Go back to the first move and play somewhere else.
//! engine.jump_to(1).unwrap();
//! engine.apply_move(Position::BottomRight);
//! assert_eq!(engine.history_len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod engine;
mod move_list;
mod position;
mod snapshot;
mod state;
mod status;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{IgnoreReason, JumpError, Placement};
pub use contracts::{
    CellIsEmpty, Contract, GameNotOver, JumpContract, PlacementContract, StepInRange,
    assert_invariants,
};
pub use engine::GameEngine;
pub use move_list::{MoveEntry, MoveLabel};
pub use position::Position;
pub use rules::{WinResult, evaluate_board};
pub use snapshot::Snapshot;
pub use state::GameState;
pub use status::Status;
pub use types::{Board, Player, Square};
