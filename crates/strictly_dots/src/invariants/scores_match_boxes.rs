//! Tally invariant: every completed box is credited to someone.

use super::super::state::GameState;
use super::Invariant;

/// Invariant: the two players' tallies add up to the completed boxes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoresMatchBoxesInvariant;

impl Invariant<GameState> for ScoresMatchBoxesInvariant {
    fn holds(game: &GameState) -> bool {
        game.scores().total() == game.completed_count()
    }

    fn description() -> &'static str {
        "Player tallies add up to the completed boxes"
    }
}
