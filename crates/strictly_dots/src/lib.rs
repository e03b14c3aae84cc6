//! Pure dots-and-boxes game logic.
//!
//! The core is driven one character at a time, the way a polling
//! super-loop hands over bytes from a serial link:
//!
//! ```text
//! char -> MoveParser -> normalize -> MoveValidator -> LineLedger -> BoxScorer -> turn advance
//! ```
//!
//! # Example
//!
//! ```
//! use strictly_dots::{BoardConfig, PromptAction, TurnEngine};
//!
//! let config = BoardConfig::new(3, 3).expect("3x3 is a valid board");
//! let mut engine = TurnEngine::new(config);
//!
//! assert_eq!(engine.process_char('0'), PromptAction::Echo('0'));
//! assert_eq!(engine.process_char('0'), PromptAction::Echo('0'));
//! assert!(matches!(
//!     engine.process_char('r'),
//!     PromptAction::MoveAccepted { echo: 'R', .. }
//! ));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod contracts;
mod engine;
mod geometry;
mod invariants;
mod ledger;
mod parser;
pub mod protocol;
mod rules;
mod state;
mod types;
mod validator;

pub use action::{Direction, LedgerError, Move, MoveError, ParseError, ValidationError};
pub use config::{BoardConfig, ConfigError, DEFAULT_DIM, MAX_DIM, MIN_DIM};
pub use contracts::{ClaimContract, Contract, GameNotOver, LegalMove};
pub use engine::{DrawnLine, EnginePhase, PromptAction, TurnEngine};
pub use geometry::{BoardGeometry, BoxSides};
pub use invariants::{
    BoxesClosedInvariant, DotsInvariants, Invariant, InvariantSet, InvariantViolation,
    LinesMatchTurnsInvariant, ScoresMatchBoxesInvariant,
};
pub use ledger::LineLedger;
pub use parser::{DIRECTIONAL_LEN, Intake, MoveParser, PAIR_LEN, RawToken, normalize};
pub use rules::{BoxScorer, Outcome, TurnScore};
pub use state::{GameState, TurnReport};
pub use types::{BoxIndex, BoxPair, LineIndex, Player, PlayerColor, PlayerId, Scores};
pub use validator::MoveValidator;
