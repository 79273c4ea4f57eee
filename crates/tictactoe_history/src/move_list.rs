//! Display entries for the move history list.

use super::{Player, Snapshot};
use serde::{Deserialize, Serialize};

/// Label for one history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveLabel {
    /// The game start. Carries no coordinates and renders as an empty label.
    Start,
    /// A placed mark with its 1-based column and row.
    Placed {
        /// Mark placed on this move.
        mark: Player,
        /// Column, 1-based.
        column: usize,
        /// Row, 1-based.
        row: usize,
    },
}

impl MoveLabel {
    /// Builds the label for a snapshot.
    pub fn for_snapshot(snapshot: &Snapshot) -> Self {
        match (snapshot.placed(), snapshot.mark()) {
            (Some(pos), Some(mark)) => MoveLabel::Placed {
                mark,
                column: pos.column() + 1,
                row: pos.row() + 1,
            },
            _ => MoveLabel::Start,
        }
    }
}

impl std::fmt::Display for MoveLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveLabel::Start => Ok(()),
            MoveLabel::Placed { mark, column, row } => write!(f, "{} ({}, {})", mark, column, row),
        }
    }
}

/// One row of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveEntry {
    step: usize,
    label: MoveLabel,
    is_current: bool,
}

impl MoveEntry {
    pub(crate) fn new(step: usize, label: MoveLabel, is_current: bool) -> Self {
        Self {
            step,
            label,
            is_current,
        }
    }

    /// Step this entry jumps to.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Mark and coordinates of the move.
    pub fn label(&self) -> MoveLabel {
        self.label
    }

    /// Whether this is the displayed step.
    pub fn is_current(&self) -> bool {
        self.is_current
    }

    /// Text for the jump button.
    pub fn description(&self) -> String {
        if self.step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", self.step)
        }
    }
}
