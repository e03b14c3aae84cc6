//! Properties every [`GameState`](crate::GameState) keeps between turns.
//!
//! Three are tracked, and the claim contract re-checks all of them after
//! each line in debug builds:
//!
//! - one drawn line per completed turn ([`LinesMatchTurnsInvariant`])
//! - a box is complete exactly when its four sides are drawn ([`BoxesClosedInvariant`])
//! - the two tallies add up to the completed boxes ([`ScoresMatchBoxesInvariant`])

pub mod boxes_closed;
pub mod lines_match_turns;
pub mod scores_match_boxes;

pub use boxes_closed::BoxesClosedInvariant;
pub use lines_match_turns::LinesMatchTurnsInvariant;
pub use scores_match_boxes::ScoresMatchBoxesInvariant;

/// One named property of a game state.
pub trait Invariant<S> {
    /// True while the property holds.
    fn holds(state: &S) -> bool;

    /// Sentence reported when it does not.
    fn description() -> &'static str;
}

/// A broken invariant, by description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// The failed invariant's [`Invariant::description`].
    pub description: String,
}

impl InvariantViolation {
    /// Wraps a description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Invariants checked as a group, reporting every failure at once.
pub trait InvariantSet<S> {
    /// `Err` lists each failed invariant in declaration order.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, A, B, C> InvariantSet<S> for (A, B, C)
where
    A: Invariant<S>,
    B: Invariant<S>,
    C: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let checks: [(fn(&S) -> bool, &'static str); 3] = [
            (A::holds, A::description()),
            (B::holds, B::description()),
            (C::holds, C::description()),
        ];

        let violations: Vec<_> = checks
            .iter()
            .filter(|(holds, _)| !holds(state))
            .map(|(_, description)| InvariantViolation::new(*description))
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// The full set checked after every claim.
pub type DotsInvariants = (
    LinesMatchTurnsInvariant,
    BoxesClosedInvariant,
    ScoresMatchBoxesInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoardConfig, BoxIndex, Direction, GameState, Move};

    #[test]
    fn test_fresh_game_satisfies_all() {
        let game = GameState::new(BoardConfig::default());
        assert!(DotsInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_closed_box_satisfies_all() {
        let moves = [
            Move::new(0, 0, Direction::Right),
            Move::new(0, 0, Direction::Down),
            Move::new(1, 1, Direction::Up),
            Move::new(1, 1, Direction::Left),
        ];
        let game = GameState::replay(BoardConfig::default(), &moves).unwrap();
        assert_eq!(game.completed_count(), 1);
        assert!(DotsInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_open_box_marked_complete_names_both_failures() {
        let mut game = GameState::new(BoardConfig::default());
        game.completed[BoxIndex::new(3).get()] = true;

        // Marked without its sides, and nobody credited for it.
        let violations = DotsInvariants::check_all(&game).unwrap_err();
        assert_eq!(
            violations,
            vec![
                InvariantViolation::new(BoxesClosedInvariant::description()),
                InvariantViolation::new(ScoresMatchBoxesInvariant::description()),
            ]
        );
    }

    #[test]
    fn test_uncounted_line_names_turn_invariant_only() {
        let mut game = GameState::new(BoardConfig::default());
        game.ledger.force(crate::LineIndex::new(0), true);

        let violations = DotsInvariants::check_all(&game).unwrap_err();
        assert_eq!(
            violations,
            vec![InvariantViolation::new(LinesMatchTurnsInvariant::description())]
        );
    }
}
