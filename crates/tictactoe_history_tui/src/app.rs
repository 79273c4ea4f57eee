//! Application state and key handling.

use crossterm::event::KeyCode;
use tictactoe_history::{GameEngine, Placement, Position};
use tracing::{debug, instrument, warn};

use crate::input::{digit_cell, move_cursor};

/// Panel that receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move through the move list.
    Moves,
}

impl Focus {
    /// Switches to the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::Moves,
            Self::Moves => Self::Board,
        }
    }
}

/// What the main loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the TUI.
    Quit,
}

/// Main application state.
///
/// Game state lives in the engine. The app only adds the board cursor, the
/// focused panel and the highlighted move-list row.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    focus: Focus,
    selected: usize,
    message: Option<String>,
}

impl App {
    /// Creates a new application.
    pub fn new(sort_ascending: bool) -> Self {
        let mut app = Self {
            engine: GameEngine::with_sort_order(sort_ascending),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            message: None,
        };
        app.sync_selection();
        app
    }

    /// The game engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted row in the displayed move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Feedback from the last gesture, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) -> AppAction {
        self.message = None;

        match key {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Tab => self.focus = self.focus.toggle(),
            KeyCode::Char('s') => {
                self.engine.toggle_sort_order();
                self.sync_selection();
            }
            KeyCode::Char('n') => {
                self.engine.new_game();
                self.sync_selection();
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.place(self.cursor),
                Focus::Moves => self.jump_to_selected(),
            },
            KeyCode::Char(_) => {
                if let Some(pos) = digit_cell(key) {
                    self.cursor = pos;
                    self.place(pos);
                }
            }
            _ => match self.focus {
                Focus::Board => self.cursor = move_cursor(self.cursor, key),
                Focus::Moves => self.move_selection(key),
            },
        }

        AppAction::Continue
    }

    fn place(&mut self, pos: Position) {
        match self.engine.apply_move(pos) {
            Placement::Placed { .. } => self.sync_selection(),
            Placement::Ignored(reason) => {
                debug!(%reason, "Click ignored");
                self.message = Some(reason.to_string());
            }
        }
    }

    fn jump_to_selected(&mut self) {
        let Some(entry) = self.engine.ordered_move_list().get(self.selected).copied() else {
            return;
        };
        if let Err(e) = self.engine.jump_to(entry.step()) {
            warn!(error = %e, "Jump rejected");
            self.message = Some(e.to_string());
        }
    }

    fn move_selection(&mut self, key: KeyCode) {
        let len = self.engine.history_len();
        self.selected = match key {
            KeyCode::Up => self.selected.saturating_sub(1),
            KeyCode::Down => (self.selected + 1).min(len - 1),
            KeyCode::Home => 0,
            KeyCode::End => len - 1,
            _ => self.selected,
        };
    }

    /// Points the move-list highlight at the displayed step.
    fn sync_selection(&mut self) {
        self.selected = self
            .engine
            .ordered_move_list()
            .iter()
            .position(|entry| entry.is_current())
            .unwrap_or(0);
    }
}
