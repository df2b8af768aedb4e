//! Tic-tac-toe with time travel - terminal front end
//!
//! A thin view over [`GameController`]: it turns text into intents and
//! prints the resulting snapshots.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io::{self, BufRead, Write};
use tictactoe_timetravel::{GameController, GameView};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_filter)),
        )
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Play => run_interactive(cli.json),
        Command::Replay { intents } => run_replay(&intents, cli.json),
    }
}

/// Writes a snapshot to stdout.
fn print_view(out: &mut impl Write, view: &GameView, json: bool) -> Result<()> {
    if json {
        let encoded = serde_json::to_string(view).context("Failed to encode view")?;
        writeln!(out, "{}", encoded)?;
    } else {
        writeln!(out, "{}\n", view.render_text())?;
    }
    Ok(())
}

/// Reads intents from stdin until EOF or `quit`.
#[instrument]
fn run_interactive(json: bool) -> Result<()> {
    info!("Starting interactive game");

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    let mut game = GameController::new();
    print_view(&mut out, &game.view(), json)?;

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;
        let command = line.trim();

        match command {
            "" => continue,
            "quit" | "q" | "exit" => break,
            "new" => game = GameController::new(),
            _ => {
                if let Err(e) = game.apply_text(command) {
                    warn!(command, error = %e, "Intent rejected");
                    writeln!(out, "{}", e)?;
                    continue;
                }
            }
        }

        print_view(&mut out, &game.view(), json)?;
    }

    info!("Leaving interactive game");
    Ok(())
}

/// Applies each intent in order, stopping at the first failure.
#[instrument(skip(intents), fields(count = intents.len()))]
fn run_replay(intents: &[String], json: bool) -> Result<()> {
    let mut game = GameController::new();

    for (n, text) in intents.iter().enumerate() {
        let applied = game
            .apply_text(text)
            .with_context(|| format!("Failed to apply intent #{} ({:?})", n + 1, text))?;
        info!(%text, ?applied, "Applied intent");
    }

    print_view(&mut io::stdout().lock(), &game.view(), json)
}
