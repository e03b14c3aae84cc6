//! Box completion and turn passing.

use super::super::state::GameState;
use super::super::types::BoxPair;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Boxes closed by a single claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TurnScore {
    /// How many boxes went from open to complete. Zero, one or two.
    pub win_count: usize,
    /// Which boxes they were.
    pub completed: BoxPair,
}

/// Scores a turn after its line has been claimed.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoxScorer;

impl BoxScorer {
    /// Scans open boxes for any whose four sides are now drawn.
    ///
    /// Every box found is marked complete and credited to the current
    /// player, who then moves again. If none are found the turn passes.
    #[instrument(skip(state), fields(player = %state.current_player()))]
    pub fn score_turn(state: &mut GameState) -> TurnScore {
        let mut score = TurnScore::default();

        for index in state.geometry.boxes() {
            if state.completed[index.get()] {
                continue;
            }
            let sides = state.geometry.box_sides(index);
            if sides.all().iter().all(|&line| state.ledger.is_drawn(line)) {
                state.completed[index.get()] = true;
                score.win_count += 1;
                if let Err(extra) = score.completed.push(index) {
                    warn!(%extra, "More boxes closed than one line borders");
                }
            }
        }

        let player = state.current_player;
        if score.win_count == 0 {
            state.current_player = player.opponent();
            debug!(next = %state.current_player, "No box closed, turn passes");
        } else {
            state.players[player.index()].credit(score.win_count);
            info!(%player, boxes = score.win_count, "Boxes completed, player moves again");
        }
        score
    }
}
