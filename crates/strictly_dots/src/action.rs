//! First-class move and error types for dots and boxes.
//!
//! A move names a dot and a direction to draw in. It carries no board
//! knowledge; the validator and geometry decide what it means.

use super::types::LineIndex;
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};

/// Direction to draw a line from a dot.
///
/// `x` counts dot rows and `y` counts dot columns, so `Up` and `Down`
/// move along the row axis while `Left` and `Right` move along a row.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Direction {
    /// Towards row `x - 1`.
    #[display("U")]
    Up,
    /// Towards row `x + 1`.
    #[display("D")]
    Down,
    /// Towards column `y - 1`.
    #[display("L")]
    Left,
    /// Towards column `y + 1`.
    #[display("R")]
    Right,
}

impl Direction {
    /// Parses a direction letter, ignoring case.
    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'U' => Some(Direction::Up),
            'D' => Some(Direction::Down),
            'L' => Some(Direction::Left),
            'R' => Some(Direction::Right),
            _ => None,
        }
    }

    /// The uppercase letter for this direction.
    pub fn letter(self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Down => 'D',
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }
}

/// A normalized move: draw from dot `(x, y)` towards `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display("{x}{y}{direction}")]
pub struct Move {
    /// Dot row.
    pub x: usize,
    /// Dot column.
    pub y: usize,
    /// Where the line goes.
    pub direction: Direction,
}

impl Move {
    /// Creates a new move.
    pub fn new(x: usize, y: usize, direction: Direction) -> Self {
        Self { x, y, direction }
    }
}

/// The token could not be turned into a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error, Serialize, Deserialize)]
pub enum ParseError {
    /// Coordinate pair is diagonal, too long, or does not move at all.
    #[display("Move is not in a recognized format")]
    InvalidFormat,
}

/// The move points off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error, Serialize, Deserialize)]
pub enum ValidationError {
    /// Dot is outside the grid, or the line would leave its outer edge.
    #[display("Move {x}{y}{direction} leaves the board")]
    OutOfBounds {
        /// Dot row.
        x: usize,
        /// Dot column.
        y: usize,
        /// Requested direction.
        direction: Direction,
    },
}

/// The ledger refused a claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error, Serialize, Deserialize)]
pub enum LedgerError {
    /// The line has already been drawn.
    #[display("{line} is already drawn")]
    AlreadyClaimed {
        /// Line that was requested.
        line: LineIndex,
    },
    /// The index is past the end of the ledger.
    #[display("{line} is not on this board")]
    OutOfRange {
        /// Line that was requested.
        line: LineIndex,
    },
}

/// Any reason a submitted move was rejected.
///
/// Every variant is recoverable: the player is shown the instructions
/// again and may enter a new move.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From, Serialize, Deserialize)]
pub enum MoveError {
    /// Token did not normalize.
    #[display("{}", _0)]
    Parse(#[error(source)] ParseError),

    /// Move points off the board.
    #[display("{}", _0)]
    Validation(#[error(source)] ValidationError),

    /// Line is already drawn.
    #[display("{}", _0)]
    Ledger(#[error(source)] LedgerError),

    /// Every line is drawn.
    #[display("Game is already over")]
    #[from(ignore)]
    GameOver,

    /// A postcondition failed after a claim.
    #[display("Invariant violation: {description}")]
    #[from(ignore)]
    InvariantViolation {
        /// Violated invariants, joined.
        description: String,
    },
}
