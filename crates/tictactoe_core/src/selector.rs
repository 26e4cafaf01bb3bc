//! Computer player: a fixed-priority heuristic with a deliberate
//! random "mistake" branch that keeps it beatable.

use super::engine::GameEngine;
use super::position::Position;
use super::rules::completes_line;
use super::types::{Board, Mark};
use derive_more::{Display, Error};
use rand::Rng;
use tracing::{debug, instrument};

/// Chance that the computer ignores its heuristic and plays a random move.
pub const DEFAULT_MISTAKE_CHANCE: f64 = 0.2;

/// Errors raised by [`MoveSelector::calculate_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SelectError {
    /// The board has no empty square. Callers must not ask for a move once
    /// the game is over.
    #[display("No available moves")]
    NoMovesAvailable,
}

/// Why the selector picked a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Reason {
    /// Random move from the mistake branch.
    Mistake,
    /// Completes a line for the mover.
    Win,
    /// Stops the opponent completing a line.
    Block,
    /// Takes the center.
    Center,
    /// Takes the first free corner.
    Corner,
    /// First free square.
    Fallback,
}

/// Picks moves for the computer player.
///
/// The selector holds no game state: every call is a pure function of the
/// engine's board, the mark to move and the supplied random source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveSelector {
    mistake_chance: f64,
}

impl MoveSelector {
    /// Creates a selector with the standard 20% mistake chance.
    #[instrument]
    pub fn new() -> Self {
        Self {
            mistake_chance: DEFAULT_MISTAKE_CHANCE,
        }
    }

    /// Creates a selector with a custom mistake chance, clamped to `[0, 1]`.
    ///
    /// `0.0` always plays the heuristic; `1.0` always plays randomly.
    #[instrument]
    pub fn with_mistake_chance(mistake_chance: f64) -> Self {
        let mistake_chance = if mistake_chance.is_nan() {
            DEFAULT_MISTAKE_CHANCE
        } else {
            mistake_chance.clamp(0.0, 1.0)
        };
        Self { mistake_chance }
    }

    /// Returns the configured mistake chance.
    pub fn mistake_chance(&self) -> f64 {
        self.mistake_chance
    }

    /// Chooses a move for the engine's current player.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::NoMovesAvailable`] when the board is full.
    #[instrument(skip(self, engine, rng), fields(player = %engine.current_player()))]
    pub fn calculate_move<R: Rng>(
        &self,
        engine: &GameEngine,
        rng: &mut R,
    ) -> Result<Position, SelectError> {
        self.calculate_move_with_reason(engine, rng)
            .map(|(pos, _)| pos)
    }

    /// Like [`MoveSelector::calculate_move`], also reporting which rule fired.
    #[instrument(skip(self, engine, rng), fields(player = %engine.current_player()))]
    pub fn calculate_move_with_reason<R: Rng>(
        &self,
        engine: &GameEngine,
        rng: &mut R,
    ) -> Result<(Position, Reason), SelectError> {
        let available = engine.available_moves();
        if available.is_empty() {
            return Err(SelectError::NoMovesAvailable);
        }

        let roll: f64 = rng.random();
        let choice = if roll < self.mistake_chance {
            let pick = available[rng.random_range(0..available.len())];
            (pick, Reason::Mistake)
        } else {
            smart_move(&engine.board(), engine.current_player(), &available)
        };

        debug!(position = ?choice.0, reason = %choice.1, "Computer chose move");
        Ok(choice)
    }
}

impl Default for MoveSelector {
    fn default() -> Self {
        Self::new()
    }
}

/// Heuristic priority: win, block, center, corner, first free square.
///
/// `available` must be non-empty and in row-major order.
fn smart_move(board: &Board, mover: Mark, available: &[Position]) -> (Position, Reason) {
    let opponent = mover.opponent();

    if let Some(pos) = first_completing(board, mover, available) {
        return (pos, Reason::Win);
    }
    if let Some(pos) = first_completing(board, opponent, available) {
        return (pos, Reason::Block);
    }
    if available.contains(&Position::Center) {
        return (Position::Center, Reason::Center);
    }
    if let Some(corner) = Position::CORNERS
        .into_iter()
        .find(|corner| available.contains(corner))
    {
        return (corner, Reason::Corner);
    }
    (available[0], Reason::Fallback)
}

fn first_completing(board: &Board, mark: Mark, available: &[Position]) -> Option<Position> {
    available
        .iter()
        .copied()
        .find(|pos| completes_line(board, *pos, mark))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_of(xs: &[Position], os: &[Position]) -> Board {
        let board = xs.iter().fold(Board::new(), |b, p| b.with(*p, Mark::X));
        os.iter().fold(board, |b, p| b.with(*p, Mark::O))
    }

    #[test]
    fn test_win_beats_block() {
        // X threatens the top row, O threatens the middle row; O to move.
        let board = board_of(
            &[Position::TopLeft, Position::TopCenter, Position::BottomRight],
            &[Position::MiddleLeft, Position::Center],
        );
        let available = Position::valid_moves(&board);
        assert_eq!(
            smart_move(&board, Mark::O, &available),
            (Position::MiddleRight, Reason::Win)
        );
    }

    #[test]
    fn test_block() {
        let board = board_of(
            &[Position::TopLeft, Position::TopCenter],
            &[Position::MiddleLeft],
        );
        let available = Position::valid_moves(&board);
        assert_eq!(
            smart_move(&board, Mark::O, &available),
            (Position::TopRight, Reason::Block)
        );
    }

    #[test]
    fn test_center_then_corner_then_fallback() {
        let empty = Board::new();
        assert_eq!(
            smart_move(&empty, Mark::X, &Position::valid_moves(&empty)),
            (Position::Center, Reason::Center)
        );

        let center_taken = board_of(&[Position::Center], &[]);
        assert_eq!(
            smart_move(&center_taken, Mark::O, &Position::valid_moves(&center_taken)),
            (Position::TopLeft, Reason::Corner)
        );

        // X O X / O O X / X _ O: one square left and it is not a corner.
        let board = board_of(
            &[
                Position::TopLeft,
                Position::TopRight,
                Position::MiddleRight,
                Position::BottomLeft,
            ],
            &[
                Position::TopCenter,
                Position::MiddleLeft,
                Position::Center,
                Position::BottomRight,
            ],
        );
        let available = Position::valid_moves(&board);
        assert_eq!(available, vec![Position::BottomCenter]);
        assert_eq!(
            smart_move(&board, Mark::X, &available).0,
            Position::BottomCenter
        );
    }

    #[test]
    fn test_mistake_chance_is_clamped() {
        assert_eq!(MoveSelector::with_mistake_chance(-1.0).mistake_chance(), 0.0);
        assert_eq!(MoveSelector::with_mistake_chance(7.5).mistake_chance(), 1.0);
        assert_eq!(
            MoveSelector::with_mistake_chance(f64::NAN).mistake_chance(),
            DEFAULT_MISTAKE_CHANCE
        );
    }
}
