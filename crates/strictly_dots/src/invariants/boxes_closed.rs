//! Box completion invariant: a box is complete exactly when closed.

use super::super::state::GameState;
use super::Invariant;

/// Invariant: a box is marked complete if and only if all four of its
/// sides are drawn.
///
/// Holds between turns; the scorer runs straight after every claim.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoxesClosedInvariant;

impl Invariant<GameState> for BoxesClosedInvariant {
    fn holds(game: &GameState) -> bool {
        let geometry = game.geometry();
        geometry.boxes().all(|index| {
            let closed = geometry
                .box_sides(index)
                .all()
                .iter()
                .all(|&line| game.ledger().is_drawn(line));
            closed == game.is_box_complete(index)
        })
    }

    fn description() -> &'static str {
        "Boxes are complete exactly when all four sides are drawn"
    }
}
