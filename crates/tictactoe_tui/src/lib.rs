//! Terminal front end for tic-tac-toe against a beatable computer.
//!
//! The interactive game runs in a ratatui screen; the `simulate` command
//! plays computer-versus-computer games headlessly.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod controller;
pub mod input;
pub mod settings;
pub mod simulate;
pub mod ui;

pub use app::App;
pub use cli::{Cli, Command, PlayArgs};
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, TuiConfig};
pub use controller::MatchController;
pub use settings::FirstPlayer;
pub use simulate::run_simulation;
