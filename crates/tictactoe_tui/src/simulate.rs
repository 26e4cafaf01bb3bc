//! Headless computer-versus-computer runs.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use tictactoe_core::{GameEngine, Mark, MoveSelector, ScoreRecord, ScoreTracker, SelectError};
use tracing::{debug, info, instrument, warn};

/// Plays `games` games between two computer players and tallies them.
///
/// X stands in for the human side of the score record. Both players share
/// one random source seeded from `seed`, so a seed fully determines the
/// resulting record.
///
/// # Errors
///
/// Propagates [`SelectError`] if a selector is asked to move on a full
/// board.
#[instrument]
pub fn run_simulation(
    games: u32,
    seed: u64,
    mistake_chance: f64,
) -> Result<ScoreRecord, SelectError> {
    let selector = MoveSelector::with_mistake_chance(mistake_chance);
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut scores = ScoreTracker::for_human(Mark::X);
    let mut engine = GameEngine::new();

    for game in 0..games {
        engine.reset();
        while !engine.is_game_over() {
            let pos = selector.calculate_move(&engine, &mut rng)?;
            if !engine.place(pos) {
                warn!(game, ?pos, "Engine rejected simulated move");
                break;
            }
        }
        debug!(game, outcome = ?engine.winner(), moves = engine.move_count(), "Game finished");
        scores.record_result(engine.winner());
    }

    let stats = scores.stats();
    info!(
        games,
        x_wins = *stats.human_wins(),
        o_wins = *stats.computer_wins(),
        draws = *stats.draws(),
        "Simulation complete"
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_play_always_draws() {
        let stats = run_simulation(20, 3, 0.0).expect("simulation runs");
        assert_eq!(*stats.draws(), 20);
    }

    #[test]
    fn test_every_game_ends_with_a_result() {
        for seed in 0..10 {
            let stats = run_simulation(30, seed, 1.0).expect("simulation runs");
            assert_eq!(stats.total(), 30, "seed {}", seed);
        }
    }

    #[test]
    fn test_zero_games() {
        let stats = run_simulation(0, 3, 0.2).expect("simulation runs");
        assert_eq!(stats, ScoreRecord::default());
    }
}
