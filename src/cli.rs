//! Command-line interface for the terminal front end.

use clap::{Parser, Subcommand};

/// Tic-tac-toe with rewindable history
#[derive(Parser, Debug)]
#[command(name = "tictactoe_timetravel")]
#[command(about = "Two-player tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Print each view snapshot as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    pub log_filter: String,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, reading intents from stdin
    ///
    /// Enter `N` or `click N` to mark square N (0-8), `jump N` to return
    /// to step N, `new` to restart, `quit` to leave.
    Play,

    /// Apply a sequence of intents and print the final view
    Replay {
        /// Intents such as `4`, `click 0`, `jump 2`
        #[arg(required = true)]
        intents: Vec<String>,
    },
}
