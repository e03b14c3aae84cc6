//! Owned game state and the per-move pipeline.

use super::action::{Move, MoveError};
use super::config::BoardConfig;
use super::contracts::{ClaimContract, Contract};
use super::geometry::BoardGeometry;
use super::ledger::LineLedger;
use super::rules::{BoxScorer, Outcome};
use super::types::{BoxIndex, BoxPair, LineIndex, Player, PlayerColor, PlayerId, Scores};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Everything one game needs, created when the board size is confirmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) geometry: BoardGeometry,
    pub(crate) ledger: LineLedger,
    pub(crate) completed: Box<[bool]>,
    pub(crate) players: [Player; 2],
    pub(crate) current_player: PlayerId,
    pub(crate) turn_count: usize,
}

/// What a successful move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// The normalized move.
    pub mv: Move,
    /// The line it drew.
    pub line: LineIndex,
    /// Who drew it.
    pub player: PlayerId,
    /// Boxes the line closed.
    pub completed: BoxPair,
    /// Who moves next.
    pub next_player: PlayerId,
    /// Lines drawn so far, including this one.
    pub turn_count: usize,
    /// True when this was the last line on the board.
    pub game_over: bool,
}

impl TurnReport {
    /// Number of boxes the line closed.
    pub fn boxes_won(&self) -> usize {
        self.completed.len()
    }
}

impl GameState {
    /// Creates a fresh game. Player 1 (red) moves first.
    #[instrument]
    pub fn new(config: BoardConfig) -> Self {
        let geometry = BoardGeometry::new(config);
        Self {
            ledger: LineLedger::new(geometry.max_moves()),
            completed: vec![false; geometry.boxes_to_win()].into_boxed_slice(),
            geometry,
            players: [
                Player::new(PlayerColor::Red),
                Player::new(PlayerColor::Blue),
            ],
            current_player: PlayerId::One,
            turn_count: 0,
        }
    }

    /// Rebuilds a game by applying `moves` in order.
    ///
    /// Stops at the first rejected move.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(config: BoardConfig, moves: &[Move]) -> Result<Self, MoveError> {
        let mut state = Self::new(config);
        for mv in moves {
            state.apply_move(*mv)?;
        }
        Ok(state)
    }

    /// Validates, claims and scores one move, then advances the turn.
    ///
    /// Parse, validation and ledger errors leave the state untouched and
    /// the same player moves again.
    ///
    /// In debug builds the postcondition runs after the claim. If it fails
    /// with [`MoveError::InvariantViolation`] the line stays drawn and the
    /// turn stays counted; nothing is rolled back. That only happens when
    /// the state was already corrupt.
    #[instrument(skip(self, mv), fields(%mv, player = %self.current_player))]
    pub fn apply_move(&mut self, mv: Move) -> Result<TurnReport, MoveError> {
        ClaimContract::pre(self, &mv)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let line = self.geometry.line_index(&mv);
        self.ledger.claim(line)?;

        let player = self.current_player;
        let score = BoxScorer::score_turn(self);
        self.turn_count += 1;

        #[cfg(debug_assertions)]
        ClaimContract::post(&before, self)?;

        info!(%line, turn = self.turn_count, boxes = score.win_count, "Line drawn");

        Ok(TurnReport {
            mv,
            line,
            player,
            completed: score.completed,
            next_player: self.current_player,
            turn_count: self.turn_count,
            game_over: self.is_over(),
        })
    }

    /// Board dimensions.
    pub fn config(&self) -> &BoardConfig {
        self.geometry.config()
    }

    /// Index arithmetic for this board.
    pub fn geometry(&self) -> &BoardGeometry {
        &self.geometry
    }

    /// Drawn lines.
    pub fn ledger(&self) -> &LineLedger {
        &self.ledger
    }

    /// Player to move.
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Lines drawn so far.
    pub fn turn_count(&self) -> usize {
        self.turn_count
    }

    /// A player's record.
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Current tally.
    pub fn scores(&self) -> Scores {
        Scores::new(
            self.players[0].boxes_won(),
            self.players[1].boxes_won(),
        )
    }

    /// Whether `index` has been completed.
    pub fn is_box_complete(&self, index: BoxIndex) -> bool {
        self.completed.get(index.get()).copied().unwrap_or(false)
    }

    /// Number of completed boxes.
    pub fn completed_count(&self) -> usize {
        self.completed.iter().filter(|&&c| c).count()
    }

    /// True once every line is drawn.
    pub fn is_over(&self) -> bool {
        self.turn_count == self.geometry.max_moves()
    }

    /// Final result, once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        self.is_over().then(|| Outcome::from_scores(&self.scores()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Direction, LedgerError, ValidationError};

    #[test]
    fn test_new_game() {
        let state = GameState::new(BoardConfig::default());
        assert_eq!(state.current_player(), PlayerId::One);
        assert_eq!(state.turn_count(), 0);
        assert_eq!(state.player(PlayerId::Two).color(), PlayerColor::Blue);
        assert!(!state.is_over());
        assert_eq!(state.outcome(), None);
    }

    #[test]
    fn test_apply_move_advances() {
        let mut state = GameState::new(BoardConfig::default());
        let report = state.apply_move(Move::new(0, 0, Direction::Right)).unwrap();
        assert_eq!(report.line, LineIndex::new(0));
        assert_eq!(report.player, PlayerId::One);
        assert_eq!(report.next_player, PlayerId::Two);
        assert_eq!(state.turn_count(), 1);
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut state = GameState::new(BoardConfig::default());
        state.apply_move(Move::new(0, 0, Direction::Right)).unwrap();
        let before = state.clone();

        let same_line = Move::new(0, 1, Direction::Left);
        assert_eq!(
            state.apply_move(same_line),
            Err(MoveError::Ledger(LedgerError::AlreadyClaimed {
                line: LineIndex::new(0)
            }))
        );
        assert!(matches!(
            state.apply_move(Move::new(0, 0, Direction::Up)),
            Err(MoveError::Validation(ValidationError::OutOfBounds { .. }))
        ));
        assert_eq!(state, before);
    }

    #[test]
    fn test_replay_stops_at_bad_move() {
        let moves = [
            Move::new(0, 0, Direction::Right),
            Move::new(0, 0, Direction::Right),
        ];
        assert!(GameState::replay(BoardConfig::default(), &moves).is_err());
    }

    #[cfg(debug_assertions)]
    #[test]
    fn test_failed_postcondition_keeps_claim() {
        let mut state = GameState::new(BoardConfig::default());
        // Box 3 marked complete with no sides drawn.
        state.completed[BoxIndex::new(3).get()] = true;

        let result = state.apply_move(Move::new(0, 0, Direction::Right));
        assert!(matches!(result, Err(MoveError::InvariantViolation { .. })));
        assert!(state.ledger().is_drawn(LineIndex::new(0)));
        assert_eq!(state.turn_count(), 1);
    }
}
