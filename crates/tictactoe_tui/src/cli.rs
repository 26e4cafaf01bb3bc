//! Command-line interface for tictactoe.

use crate::settings::FirstPlayer;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_core::DEFAULT_MISTAKE_CHANCE;

/// Tic Tac Toe - play against a beatable computer in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Terminal tic-tac-toe against a beatable computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play(PlayArgs),

    /// Run computer-versus-computer games and print the tally as JSON
    Simulate {
        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Seed for the shared random source
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Chance that either player makes a random move
        #[arg(long, default_value_t = DEFAULT_MISTAKE_CHANCE)]
        mistake_chance: f64,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play(PlayArgs::default())
    }
}

/// Options for the interactive game.
#[derive(Args, Debug, Default, Clone)]
pub struct PlayArgs {
    /// Path to the TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Who opens each game
    #[arg(long, value_enum)]
    pub first_player: Option<FirstPlayer>,

    /// Pause before the computer replies, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Seed for the computer's random source
    #[arg(long)]
    pub seed: Option<u64>,
}
