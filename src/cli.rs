//! Command-line interface for tictactoe_board.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe board widget hosted in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe_board")]
#[command(about = "Tic-tac-toe board with mouse input and saved state", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play on the board in the terminal
    Play {
        /// Path to the appearance config (TOML); defaults apply if missing
        #[arg(short, long, default_value = "tictactoe_board.toml")]
        config: PathBuf,

        /// File the board is restored from and saved to on exit
        #[arg(short, long, default_value = "tictactoe_board_state.json")]
        state: PathBuf,

        /// Start from a blank board even if a saved one exists
        #[arg(long)]
        fresh: bool,

        /// Log file (the terminal is taken over by the board)
        #[arg(long, default_value = "tictactoe_board.log")]
        log_file: PathBuf,
    },

    /// Print a saved board
    Show {
        /// Saved state file
        #[arg(short, long, default_value = "tictactoe_board_state.json")]
        state: PathBuf,
    },
}
