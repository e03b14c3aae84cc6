//! Line count invariant: one drawn line per counted turn.

use super::super::state::GameState;
use super::Invariant;

/// Invariant: the ledger holds exactly `turn_count` drawn lines, and
/// `turn_count` never passes the number of lines on the board.
///
/// Rejected moves neither draw a line nor count a turn, so the two
/// numbers move together.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinesMatchTurnsInvariant;

impl Invariant<GameState> for LinesMatchTurnsInvariant {
    fn holds(game: &GameState) -> bool {
        game.ledger().drawn_count() == game.turn_count()
            && game.turn_count() <= game.geometry().max_moves()
    }

    fn description() -> &'static str {
        "Drawn lines match the turn count and never exceed the board"
    }
}
