//! Game engine for tic-tac-toe.

use super::phases::{GameStatus, Outcome};
use super::position::Position;
use super::rules::{WinningLine, find_winning_line, is_draw};
use super::types::{Board, Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// State of one game, from construction or reset until the next reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    /// The board.
    board: Board,
    /// Mark to move next.
    current_player: Mark,
    /// Phase of the game.
    status: GameStatus,
    /// Completed line, present only when a mark has won.
    winning_line: Option<WinningLine>,
}

impl GameSession {
    /// Creates a fresh session: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Mark::FIRST,
            status: GameStatus::InProgress,
            winning_line: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move next.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the winning line, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Tic-tac-toe game engine.
///
/// Owns one [`GameSession`] and is its only writer. Illegal moves are
/// rejected with `false` and leave the session untouched.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    session: GameSession,
}

impl GameEngine {
    /// Creates a new game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            session: GameSession::new(),
        }
    }

    /// Makes a move for the current player at `(row, col)`.
    ///
    /// Returns `false` without changing anything when the coordinates are
    /// off the board, the square is occupied, or the game is over.
    #[instrument(skip(self), fields(player = %self.session.current_player))]
    pub fn make_move(&mut self, row: usize, col: usize) -> bool {
        match Position::from_coords(row, col) {
            Some(pos) => self.place(pos),
            None => {
                debug!(row, col, "Rejected move outside the board");
                false
            }
        }
    }

    /// Makes a move for the current player at `pos`.
    ///
    /// Same contract as [`GameEngine::make_move`].
    #[instrument(skip(self), fields(player = %self.session.current_player))]
    pub fn place(&mut self, pos: Position) -> bool {
        if self.is_game_over() {
            debug!(?pos, "Rejected move after game over");
            return false;
        }

        if !self.session.board.is_empty(pos) {
            debug!(?pos, "Rejected move on occupied square");
            return false;
        }

        let mark = self.session.current_player;
        self.session.board.set(pos, Square::Occupied(mark));
        debug!(?pos, %mark, "Mark placed");

        self.update_status();
        self.session.current_player = mark.opponent();
        true
    }

    /// Evaluates the board after a placement.
    fn update_status(&mut self) {
        if let Some((winner, line)) = find_winning_line(&self.session.board) {
            info!(%winner, ?line, "Game won");
            self.session.status = GameStatus::Finished(Outcome::Winner(winner));
            self.session.winning_line = Some(line);
        } else if is_draw(&self.session.board) {
            info!("Game drawn");
            self.session.status = GameStatus::Finished(Outcome::Draw);
            self.session.winning_line = None;
        }
    }

    /// Returns a copy of the board.
    pub fn board(&self) -> Board {
        self.session.board
    }

    /// Returns the mark to move next.
    ///
    /// After the game ends this is still the mark that would have moved.
    pub fn current_player(&self) -> Mark {
        self.session.current_player
    }

    /// Returns the outcome, or `None` while the game is in progress.
    pub fn winner(&self) -> Option<Outcome> {
        self.session.status.outcome()
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.session.status
    }

    /// Returns the completed line when a mark has won.
    pub fn winning_cells(&self) -> Option<WinningLine> {
        self.session.winning_line
    }

    /// Returns all empty positions in row-major order.
    #[instrument(skip(self))]
    pub fn available_moves(&self) -> Vec<Position> {
        Position::valid_moves(&self.session.board)
    }

    /// Number of marks placed this game.
    pub fn move_count(&self) -> usize {
        self.session.board.occupied()
    }

    /// Returns a copy of the whole session.
    pub fn session(&self) -> GameSession {
        self.session.clone()
    }

    /// Returns true once the game has an outcome.
    pub fn is_game_over(&self) -> bool {
        self.session.status != GameStatus::InProgress
    }

    /// Starts a new game. External score state is not touched.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        self.session = GameSession::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winning_move_still_switches_player() {
        let mut engine = GameEngine::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            assert!(engine.make_move(row, col));
        }
        assert_eq!(engine.winner(), Some(Outcome::Winner(Mark::X)));
        assert_eq!(engine.current_player(), Mark::O);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let mut engine = GameEngine::new();
        for (row, col) in [(0, 0), (0, 2), (0, 1), (1, 0), (1, 2), (1, 1), (2, 0), (2, 2)] {
            assert!(engine.make_move(row, col));
            assert_eq!(engine.winner(), None);
        }
        assert!(engine.make_move(2, 1));
        assert_eq!(engine.winner(), Some(Outcome::Draw));
        assert_eq!(engine.winning_cells(), None);
    }

    #[test]
    fn test_board_snapshot_is_detached() {
        let mut engine = GameEngine::new();
        let before = engine.board();
        assert!(engine.make_move(1, 1));
        assert!(before.is_empty(Position::Center));
        assert!(!engine.board().is_empty(Position::Center));
    }
}
