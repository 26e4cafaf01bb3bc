//! Tic-tac-toe core: game engine, beatable computer player and score tally.
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`] owns the board, turn order and outcome.
//! - **Computer**: [`MoveSelector`] picks moves from a read-only engine
//!   and an injected random source.
//! - **Score**: [`ScoreTracker`] counts results across games.
//!
//! # Example
//!
//! ```
//! use rand::{SeedableRng, rngs::SmallRng};
//! use tictactoe_core::{GameEngine, MoveSelector, ScoreTracker};
//!
//! let mut engine = GameEngine::new();
//! let selector = MoveSelector::new();
//! let mut scores = ScoreTracker::new();
//! let mut rng = SmallRng::seed_from_u64(7);
//!
//! assert!(engine.make_move(1, 1));
//! let reply = selector.calculate_move(&engine, &mut rng).unwrap();
//! assert!(engine.place(reply));
//!
//! while !engine.is_game_over() {
//!     let pos = selector.calculate_move(&engine, &mut rng).unwrap();
//!     engine.place(pos);
//! }
//! scores.record_result(engine.winner());
//! assert_eq!(scores.stats().total(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod phases;
mod position;
pub mod rules;
mod score;
mod selector;
mod types;

pub use engine::{GameEngine, GameSession};
pub use phases::{GameStatus, Outcome};
pub use position::Position;
pub use rules::{Line, WinningLine};
pub use score::{ScoreRecord, ScoreTracker};
pub use selector::{DEFAULT_MISTAKE_CHANCE, MoveSelector, Reason, SelectError};
pub use types::{Board, Mark, Square};
