//! Running win/draw tally across games.

use super::Mark;
use super::phases::Outcome;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Counters for concluded games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Games won by the human.
    human_wins: u32,
    /// Games won by the computer.
    computer_wins: u32,
    /// Drawn games.
    draws: u32,
}

impl ScoreRecord {
    /// Number of games counted.
    pub fn total(&self) -> u32 {
        self.human_wins + self.computer_wins + self.draws
    }
}

/// Accumulates results across successive games.
///
/// The tracker does not guard against counting one game twice: callers
/// record a result only when the engine's outcome changes from `None`.
/// Resetting the engine never resets the tally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTracker {
    human: Mark,
    record: ScoreRecord,
}

impl ScoreTracker {
    /// Creates a tracker where the human plays X.
    #[instrument]
    pub fn new() -> Self {
        Self::for_human(Mark::X)
    }

    /// Creates a tracker where the human plays `human`.
    #[instrument]
    pub fn for_human(human: Mark) -> Self {
        Self {
            human,
            record: ScoreRecord::default(),
        }
    }

    /// Mark played by the human.
    pub fn human_mark(&self) -> Mark {
        self.human
    }

    /// Counts one concluded game. `None` (game in progress) is ignored.
    #[instrument(skip(self))]
    pub fn record_result(&mut self, outcome: Option<Outcome>) {
        match outcome {
            Some(Outcome::Winner(mark)) if mark == self.human => self.record.human_wins += 1,
            Some(Outcome::Winner(_)) => self.record.computer_wins += 1,
            Some(Outcome::Draw) => self.record.draws += 1,
            None => {
                debug!("Ignoring result for unfinished game");
                return;
            }
        }
        info!(stats = ?self.record, "Result recorded");
    }

    /// Returns a copy of the counters.
    pub fn stats(&self) -> ScoreRecord {
        self.record
    }

    /// Zeroes all counters.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting scores");
        self.record = ScoreRecord::default();
    }
}

impl Default for ScoreTracker {
    fn default() -> Self {
        Self::new()
    }
}
