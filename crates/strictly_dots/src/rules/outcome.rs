//! Final result of a game.

use super::super::types::{PlayerId, Scores};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result once every line is drawn.
///
/// Decided purely by box tally; drawing the last line earns nothing extra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// One player holds more boxes.
    Winner(PlayerId),
    /// Both players hold the same number of boxes.
    Tie,
}

impl Outcome {
    /// Reads the outcome off a final tally.
    #[instrument]
    pub fn from_scores(scores: &Scores) -> Self {
        let one = scores.get(PlayerId::One);
        let two = scores.get(PlayerId::Two);
        match one.cmp(&two) {
            std::cmp::Ordering::Greater => Outcome::Winner(PlayerId::One),
            std::cmp::Ordering::Less => Outcome::Winner(PlayerId::Two),
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Tie => None,
        }
    }

    /// Returns true if the game was tied.
    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::Tie)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Winner: {player}"),
            Outcome::Tie => write!(f, "TIE"),
        }
    }
}
