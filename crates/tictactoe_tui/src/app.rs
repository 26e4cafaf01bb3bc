//! Application state and logic.

use crate::config::TuiConfig;
use crate::controller::MatchController;
use crate::input::{Command, command_for};
use crossterm::event::KeyCode;
use std::time::Duration;
use tictactoe_core::{Outcome, Position, SelectError};
use tracing::{debug, instrument};

/// Main application state.
#[derive(Debug)]
pub struct App {
    controller: MatchController,
    cursor: Position,
    thinking_delay: Duration,
    notice: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application around a match.
    pub fn new(controller: MatchController, thinking_delay: Duration) -> Self {
        Self {
            controller,
            cursor: Position::Center,
            thinking_delay,
            notice: None,
            should_quit: false,
        }
    }

    /// Creates a new application from configuration.
    pub fn from_config(config: &TuiConfig) -> Self {
        Self::new(MatchController::from_config(config), config.thinking_delay())
    }

    /// The match being played.
    pub fn controller(&self) -> &MatchController {
        &self.controller
    }

    /// Square under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Pause before each computer move.
    pub fn thinking_delay(&self) -> Duration {
        self.thinking_delay
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        let Some(command) = command_for(self.cursor, key) else {
            return;
        };
        debug!(?command, "Handling command");
        self.notice = None;

        match command {
            Command::Cursor(pos) => self.cursor = pos,
            Command::PlaceAtCursor => self.place(self.cursor),
            Command::Place(pos) => {
                self.cursor = pos;
                self.place(pos);
            }
            Command::NewGame => self.controller.new_game(),
            Command::ResetScores => self.controller.reset_scores(),
            Command::Quit => self.should_quit = true,
        }
    }

    /// Handles a click on a square: moves the cursor there and places.
    #[instrument(skip(self))]
    pub fn handle_click(&mut self, pos: Position) {
        self.notice = None;
        self.cursor = pos;
        self.place(pos);
    }

    fn place(&mut self, pos: Position) {
        if self.controller.select(pos) {
            return;
        }
        if self.controller.is_human_turn() {
            self.notice = Some(format!("{} is taken", pos.label()));
        }
    }

    /// Plays the computer's pending move, if any.
    #[instrument(skip(self))]
    pub fn play_computer_turn(&mut self) -> Result<(), SelectError> {
        if let Some(pos) = self.controller.play_computer_move()? {
            self.notice = Some(format!("Computer played {}", pos.label()));
        }
        Ok(())
    }

    /// Status line describing whose turn it is or how the game ended.
    pub fn status(&self) -> String {
        let engine = self.controller.engine();
        match engine.winner() {
            Some(Outcome::Winner(mark)) if mark == self.controller.human_mark() => {
                format!("{} wins! You beat the computer. Press 'n' for a new game.", mark)
            }
            Some(Outcome::Winner(mark)) => {
                format!("{} wins! The computer got you. Press 'n' for a new game.", mark)
            }
            Some(Outcome::Draw) => "It's a draw! Press 'n' for a new game.".to_string(),
            None if self.controller.awaiting_computer() => "Computer is thinking...".to_string(),
            None => {
                let turn = format!("Your turn ({})", self.controller.human_mark());
                match &self.notice {
                    Some(notice) => format!("{}. {}", notice, turn),
                    None => turn,
                }
            }
        }
    }
}
