//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position, Square};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// The three positions of a completed row, column or diagonal.
pub type WinningLine = [Position; 3];

/// One of the eight lines that win the game.
///
/// Variant order is the evaluation order: rows top to bottom, columns
/// left to right, then the main diagonal and the anti-diagonal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Line {
    /// Row 0.
    TopRow,
    /// Row 1.
    MiddleRow,
    /// Row 2.
    BottomRow,
    /// Column 0.
    LeftColumn,
    /// Column 1.
    CenterColumn,
    /// Column 2.
    RightColumn,
    /// (0,0) to (2,2).
    MainDiagonal,
    /// (0,2) to (2,0).
    AntiDiagonal,
}

impl Line {
    /// Positions on this line, ordered by ascending row then column.
    pub fn positions(self) -> WinningLine {
        use Position::*;

        match self {
            Line::TopRow => [TopLeft, TopCenter, TopRight],
            Line::MiddleRow => [MiddleLeft, Center, MiddleRight],
            Line::BottomRow => [BottomLeft, BottomCenter, BottomRight],
            Line::LeftColumn => [TopLeft, MiddleLeft, BottomLeft],
            Line::CenterColumn => [TopCenter, Center, BottomCenter],
            Line::RightColumn => [TopRight, MiddleRight, BottomRight],
            Line::MainDiagonal => [TopLeft, Center, BottomRight],
            Line::AntiDiagonal => [TopRight, Center, BottomLeft],
        }
    }

    /// Returns the mark owning all three squares of this line, if any.
    pub fn owner(self, board: &Board) -> Option<Mark> {
        let [a, b, c] = self.positions();
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            sq.mark()
        } else {
            None
        }
    }
}

/// Finds the first completed line on the board.
///
/// Returns the owning mark and the line's positions, or `None` when no
/// line is complete.
#[instrument(level = "debug")]
pub fn find_winning_line(board: &Board) -> Option<(Mark, WinningLine)> {
    Line::iter().find_map(|line| line.owner(board).map(|mark| (mark, line.positions())))
}

/// Checks whether placing `mark` at `pos` would give `mark` three in a row.
///
/// The check runs against a copy of the board; `board` is not modified.
#[instrument(level = "trace")]
pub fn completes_line(board: &Board, pos: Position, mark: Mark) -> bool {
    let hypothetical = board.with(pos, mark);
    Line::iter().any(|line| line.owner(&hypothetical) == Some(mark))
}
