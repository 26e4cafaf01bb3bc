//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board. Rules are
//! kept apart from board storage so the engine and the computer player
//! share one definition of "three in a row".

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{Line, WinningLine, completes_line, find_winning_line};
