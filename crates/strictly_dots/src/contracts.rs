//! Contract-based validation for dots and boxes.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} claim {Q}

use super::action::{Move, MoveError};
use super::invariants::{DotsInvariants, InvariantSet};
use super::state::GameState;
use super::validator::MoveValidator;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Claim Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: some line is still undrawn.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with [`MoveError::GameOver`] once every line is drawn.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), MoveError> {
        if game.is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: the game is running and the move stays on the board.
///
/// Whether the line is free is left to the ledger, which checks and sets
/// in one step.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mv: &Move, game: &GameState) -> Result<(), MoveError> {
        GameNotOver::check(game)?;
        MoveValidator::check(mv, game.geometry())?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Claim Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for claiming a line.
///
/// Preconditions:
/// - Game is not over
/// - Move stays on the board
///
/// Postconditions:
/// - Exactly one more line is drawn and the turn counter moved by one
/// - All [`DotsInvariants`] hold
#[derive(Debug, Clone, Copy, Default)]
pub struct ClaimContract;

impl Contract<GameState, Move> for ClaimContract {
    fn pre(game: &GameState, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        if after.turn_count() != before.turn_count() + 1 {
            warn!(
                before = before.turn_count(),
                after = after.turn_count(),
                "Turn counter did not advance by one"
            );
            return Err(MoveError::InvariantViolation {
                description: "Postcondition failed: turn counter did not advance by one"
                    .to_string(),
            });
        }

        DotsInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Invariant violated after claim");
            MoveError::InvariantViolation {
                description: format!("Postcondition failed: {}", descriptions),
            }
        })
    }
}
