//! Match controller: sequences human and computer turns around one engine.

use crate::config::TuiConfig;
use crate::settings::FirstPlayer;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tictactoe_core::{
    GameEngine, Mark, MoveSelector, Outcome, Position, ScoreRecord, ScoreTracker, SelectError,
};
use tracing::{debug, info, instrument, warn};

/// One human-versus-computer match: a game engine, the computer player,
/// the running score and the turn-exclusion flag.
///
/// While the computer's reply is pending, human input is refused, and the
/// computer plays at most once per pending reply. Every concluded game is
/// counted exactly once, at the moment the engine's outcome first appears.
#[derive(Debug)]
pub struct MatchController {
    engine: GameEngine,
    selector: MoveSelector,
    scores: ScoreTracker,
    rng: SmallRng,
    first_player: FirstPlayer,
    computer_pending: bool,
}

impl MatchController {
    /// Creates a controller and opens the first game.
    #[instrument(skip(selector, rng))]
    pub fn new(first_player: FirstPlayer, selector: MoveSelector, rng: SmallRng) -> Self {
        let controller = Self {
            engine: GameEngine::new(),
            selector,
            scores: ScoreTracker::for_human(first_player.human_mark()),
            rng,
            first_player,
            computer_pending: first_player == FirstPlayer::Computer,
        };
        info!(first = %first_player, human = %controller.human_mark(), "Match created");
        controller
    }

    /// Creates a controller from configuration, seeding the computer's
    /// random source from the config or from the thread RNG.
    #[instrument(skip(config))]
    pub fn from_config(config: &TuiConfig) -> Self {
        let rng = match config.seed() {
            Some(seed) => {
                info!(seed, "Using fixed seed");
                SmallRng::seed_from_u64(*seed)
            }
            None => SmallRng::from_rng(&mut rand::rng()),
        };
        Self::new(
            *config.first_player(),
            MoveSelector::with_mistake_chance(*config.mistake_chance()),
            rng,
        )
    }

    /// The engine, read-only.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Current tally.
    pub fn scores(&self) -> ScoreRecord {
        self.scores.stats()
    }

    /// Who opens each game.
    pub fn first_player(&self) -> FirstPlayer {
        self.first_player
    }

    /// Mark played by the human.
    pub fn human_mark(&self) -> Mark {
        self.first_player.human_mark()
    }

    /// Mark played by the computer.
    pub fn computer_mark(&self) -> Mark {
        self.first_player.computer_mark()
    }

    /// True while the computer owes a reply.
    pub fn awaiting_computer(&self) -> bool {
        self.computer_pending
    }

    /// True when a human move would be accepted (square permitting).
    pub fn is_human_turn(&self) -> bool {
        !self.computer_pending
            && !self.engine.is_game_over()
            && self.engine.current_player() == self.human_mark()
    }

    /// Submits the human's move.
    ///
    /// Returns `false` when the move is refused: the computer's reply is
    /// pending, the game is over, or the square is taken.
    #[instrument(skip(self))]
    pub fn select(&mut self, pos: Position) -> bool {
        if !self.is_human_turn() {
            debug!(pending = self.computer_pending, "Ignoring input out of turn");
            return false;
        }

        if !self.apply(pos) {
            return false;
        }

        if !self.engine.is_game_over() {
            self.computer_pending = true;
        }
        true
    }

    /// Plays the pending computer reply.
    ///
    /// Returns `Ok(None)` when no reply is pending.
    ///
    /// # Errors
    ///
    /// Propagates [`SelectError`] if the computer is asked to move on a
    /// full board, which means the turn sequencing is broken.
    #[instrument(skip(self))]
    pub fn play_computer_move(&mut self) -> Result<Option<Position>, SelectError> {
        if !self.computer_pending {
            debug!("No computer move pending");
            return Ok(None);
        }
        self.computer_pending = false;

        let pos = self.selector.calculate_move(&self.engine, &mut self.rng)?;
        if !self.apply(pos) {
            warn!(?pos, "Engine rejected computer move");
            return Ok(None);
        }
        Ok(Some(pos))
    }

    /// Places a mark and records the result if this move ended the game.
    fn apply(&mut self, pos: Position) -> bool {
        let before: Option<Outcome> = self.engine.winner();
        if !self.engine.place(pos) {
            return false;
        }
        let after = self.engine.winner();
        if before.is_none() && after.is_some() {
            self.scores.record_result(after);
        }
        true
    }

    /// Starts a new game, keeping the score.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        self.engine.reset();
        self.computer_pending = self.first_player == FirstPlayer::Computer;
        info!(computer_first = self.computer_pending, "New game");
    }

    /// Zeroes the score; the current game carries on.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        self.scores.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(first: FirstPlayer, mistake_chance: f64) -> MatchController {
        MatchController::new(
            first,
            MoveSelector::with_mistake_chance(mistake_chance),
            SmallRng::seed_from_u64(11),
        )
    }

    #[test]
    fn test_human_move_raises_pending_flag() {
        let mut c = controller(FirstPlayer::Human, 0.0);
        assert!(c.is_human_turn());
        assert!(c.select(Position::TopLeft));
        assert!(c.awaiting_computer());
        assert!(!c.is_human_turn());
    }

    #[test]
    fn test_input_refused_while_computer_pending() {
        let mut c = controller(FirstPlayer::Human, 0.0);
        assert!(c.select(Position::TopLeft));
        assert!(!c.select(Position::BottomRight));
        assert_eq!(c.engine().move_count(), 1);
    }

    #[test]
    fn test_computer_plays_once_per_human_move() {
        let mut c = controller(FirstPlayer::Human, 0.0);
        assert!(c.select(Position::TopLeft));
        assert_eq!(c.play_computer_move(), Ok(Some(Position::Center)));
        assert_eq!(c.play_computer_move(), Ok(None));
        assert_eq!(c.engine().move_count(), 2);
        assert!(c.is_human_turn());
    }

    #[test]
    fn test_occupied_square_keeps_turn() {
        let mut c = controller(FirstPlayer::Human, 0.0);
        assert!(c.select(Position::TopLeft));
        c.play_computer_move().expect("computer can move");
        assert!(!c.select(Position::Center));
        assert!(c.is_human_turn());
        assert!(!c.awaiting_computer());
    }

    #[test]
    fn test_computer_first_opens_pending() {
        let mut c = controller(FirstPlayer::Computer, 0.0);
        assert!(c.awaiting_computer());
        assert!(!c.select(Position::TopLeft));
        assert_eq!(c.play_computer_move(), Ok(Some(Position::Center)));
        assert_eq!(c.engine().board().get(Position::Center).mark(), Some(Mark::X));
        assert!(c.is_human_turn());
    }

    #[test]
    fn test_result_recorded_once() {
        // The computer never errs, so playing the first free square loses.
        let mut c = controller(FirstPlayer::Human, 0.0);
        while !c.engine().is_game_over() {
            let pos = c.engine().available_moves()[0];
            assert!(c.select(pos));
            c.play_computer_move().expect("computer can move");
        }
        let stats = c.scores();
        assert_eq!(stats.total(), 1);
        assert_eq!(*stats.computer_wins(), 1);

        // Further calls after the game ended change nothing.
        assert!(!c.select(Position::BottomRight));
        assert_eq!(c.play_computer_move(), Ok(None));
        assert_eq!(c.scores(), stats);
    }

    #[test]
    fn test_new_game_keeps_score() {
        let mut c = controller(FirstPlayer::Human, 0.0);
        while !c.engine().is_game_over() {
            let pos = c.engine().available_moves()[0];
            c.select(pos);
            c.play_computer_move().expect("computer can move");
        }
        c.new_game();
        assert_eq!(c.engine().move_count(), 0);
        assert_eq!(c.scores().total(), 1);
        assert!(c.is_human_turn());

        c.reset_scores();
        assert_eq!(c.scores(), ScoreRecord::default());
    }

    #[test]
    fn test_new_game_while_pending_clears_flag() {
        let mut c = controller(FirstPlayer::Human, 0.0);
        assert!(c.select(Position::TopLeft));
        c.new_game();
        assert!(!c.awaiting_computer());
        assert_eq!(c.play_computer_move(), Ok(None));
    }
}
