//! Tic-tac-toe with move history and time-travel - terminal front end.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod ui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::TuiConfig;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::Duration;
use tictactoe_history::GameEngine;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use app::{App, AppAction};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Play {
            config,
            ascending,
            log_file,
        } => run_play(config, ascending, log_file),
        Command::Status {
            moves,
            jump,
            ascending,
        } => run_status(&moves, jump, ascending),
    }
}

/// Run the terminal UI.
fn run_play(config_path: PathBuf, ascending: bool, log_file: Option<PathBuf>) -> Result<()> {
    let config = TuiConfig::load_or_default(&config_path)?.with_overrides(ascending, log_file);
    init_file_tracing(&config)?;

    info!(config = %config_path.display(), "Starting tic-tac-toe TUI");

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let app = App::new(*config.sort_ascending());

    let res = run_session(
        || {
            enable_raw_mode()?;
            execute!(io::stdout(), EnterAlternateScreen)
        },
        || run_app(&mut terminal, app),
        || {
            disable_raw_mode()?;
            execute!(io::stdout(), LeaveAlternateScreen, Show)
        },
    );

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Exiting");
    res
}

/// Runs `body` inside a terminal session.
///
/// `leave` runs whenever `enter` was attempted, so a half-entered session
/// (raw mode on, alternate screen failed) is still restored.
fn run_session<T>(
    enter: impl FnOnce() -> io::Result<()>,
    body: impl FnOnce() -> Result<T>,
    leave: impl FnOnce() -> io::Result<()>,
) -> Result<T> {
    let res = enter().map_err(anyhow::Error::from).and_then(|()| body());
    leave()?;
    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if app.handle_key(key.code) == AppAction::Quit {
                    info!("User quit");
                    return Ok(());
                }
            }
        }
    }
}

/// Play moves headlessly and print the result.
fn run_status(moves: &str, jump: Option<usize>, ascending: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let moves = cli::parse_moves(moves)?;
    let mut engine = GameEngine::with_sort_order(ascending);
    for pos in moves {
        let placement = engine.apply_move(pos);
        if !placement.is_placed() {
            warn!(?placement, %pos, "Move had no effect");
        }
    }
    if let Some(step) = jump {
        engine.jump_to(step)?;
    }

    println!("{}", engine.current_board().display());
    println!();
    println!("{}", engine.status());
    println!();
    for entry in engine.ordered_move_list() {
        let marker = if entry.is_current() { '>' } else { ' ' };
        println!("{} {:<18}{}", marker, entry.description(), entry.label());
    }
    Ok(())
}

/// Routes logs to the configured file so they don't draw over the TUI.
fn init_file_tracing(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}
