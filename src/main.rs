//! Tic-tac-toe board - terminal host CLI.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::{Path, PathBuf};
use tictactoe_board::{
    InstanceState, ViewConfig,
    tui::{TuiOptions, run_tui},
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            state,
            fresh,
            log_file,
        } => play(config, state, fresh, &log_file),
        Command::Show { state } => show(&state),
    }
}

/// Run the board in the terminal.
#[instrument(skip_all, fields(config_path = %config.display()))]
fn play(config: PathBuf, state: PathBuf, fresh: bool, log_file: &Path) -> Result<()> {
    initialize_tracing(log_file)?;

    let config = ViewConfig::load_or_default(&config)?;
    info!(?config, "Configuration ready");

    run_tui(TuiOptions {
        config,
        state_path: state,
        fresh,
    })
}

/// Print a saved board without touching its parent state.
fn show(state: &Path) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let saved = InstanceState::<serde_json::Value>::load_from(state)?;
    let (_parent, board) = saved.into_board();
    let board = board.with_context(|| format!("Saved board in {} is invalid", state.display()))?;

    println!("{}", board);
    println!("Next: {}", board.next_mark());
    Ok(())
}

/// Send logs to a file so they do not corrupt the terminal UI.
fn initialize_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tictactoe_board=debug")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!("Tracing initialized");
    Ok(())
}
