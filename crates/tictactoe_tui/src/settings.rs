//! Match settings: which side opens each game.

use serde::{Deserialize, Serialize};
use tictactoe_core::Mark;
use tracing::instrument;

/// Which side takes the first move (X) in every game.
///
/// Defaults to [`FirstPlayer::Human`] so the player moves first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    /// The human plays X.
    #[default]
    #[strum(to_string = "Player")]
    Human,
    /// The computer plays X.
    Computer,
}

impl FirstPlayer {
    /// Mark played by the human under this setting.
    #[instrument]
    pub fn human_mark(self) -> Mark {
        match self {
            Self::Human => Mark::X,
            Self::Computer => Mark::O,
        }
    }

    /// Mark played by the computer under this setting.
    pub fn computer_mark(self) -> Mark {
        self.human_mark().opponent()
    }
}
