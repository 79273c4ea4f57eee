//! Command-line interface for tictactoe_history.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_history::Position;
use tracing::instrument;

/// Default config file, looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "tictactoe_history.toml";

/// Tic-tac-toe with move history and time-travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe_history")]
#[command(about = "Tic-tac-toe with move history and time-travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Path to the TOML config file
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// Start with the move list oldest-first
        #[arg(long)]
        ascending: bool,

        /// Write logs here instead of the configured file
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Play moves headlessly and print the resulting status and move list
    Status {
        /// Comma-separated cells, zero-based indices or labels (e.g. `4,0,center`)
        #[arg(short, long, default_value = "")]
        moves: String,

        /// Step to display after playing the moves
        #[arg(short, long)]
        jump: Option<usize>,

        /// Print the move list oldest-first
        #[arg(long)]
        ascending: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            config: PathBuf::from(DEFAULT_CONFIG_PATH),
            ascending: false,
            log_file: None,
        }
    }
}

/// Parses a comma-separated list of cells.
///
/// Blank input yields no moves. Each token is a zero-based index or a
/// position label.
#[instrument]
pub fn parse_moves(list: &str) -> Result<Vec<Position>> {
    if list.trim().is_empty() {
        return Ok(Vec::new());
    }

    list.split(',')
        .map(|token| {
            let token = token.trim();
            if token.is_empty() {
                bail!("Empty entry in move list");
            }
            Position::from_label_or_number(token)
                .with_context(|| format!("Invalid cell '{}': expected 0-8 or a label", token))
        })
        .collect()
}
