//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use super::win::find_winning_line;
use tracing::instrument;

/// A full board with no completed line is a draw.
#[instrument(level = "debug")]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && find_winning_line(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::super::super::{Mark, Position};
    use super::*;

    #[test]
    fn test_empty_board_not_draw() {
        assert!(!is_draw(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_draw() {
        let board = Board::new().with(Position::Center, Mark::X);
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X X O / O O X / X O X
        let board = Board::new()
            .with(Position::TopLeft, Mark::X)
            .with(Position::TopCenter, Mark::X)
            .with(Position::TopRight, Mark::O)
            .with(Position::MiddleLeft, Mark::O)
            .with(Position::Center, Mark::O)
            .with(Position::MiddleRight, Mark::X)
            .with(Position::BottomLeft, Mark::X)
            .with(Position::BottomCenter, Mark::O)
            .with(Position::BottomRight, Mark::X);

        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board = board.with(pos, Mark::X);
        }
        assert!(board.is_full());
        assert!(!is_draw(&board));
    }
}
