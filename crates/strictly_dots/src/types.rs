//! Core domain types for dots and boxes.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Flat index of a line, in `0..max_moves`.
///
/// Horizontal and vertical lines share one numbering: a row of
/// horizontal edges, then the row of vertical edges below it, and so on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display("line {}", _0)]
pub struct LineIndex(usize);

impl LineIndex {
    /// Wraps a raw line number.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw line number.
    pub fn get(self) -> usize {
        self.0
    }
}

/// Row-major index of a box, in `0..boxes_to_win`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display("box {}", _0)]
pub struct BoxIndex(usize);

impl BoxIndex {
    /// Wraps a raw box number.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw box number.
    pub fn get(self) -> usize {
        self.0
    }
}

/// Up to two boxes: as many as one line borders, and so as many as
/// one claim can close.
///
/// Fixed size; slots fill from the front.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoxPair {
    slots: [Option<BoxIndex>; 2],
}

impl BoxPair {
    /// No boxes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a box, handing it back if both slots are taken.
    pub fn push(&mut self, index: BoxIndex) -> Result<(), BoxIndex> {
        match self.slots.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(index);
                Ok(())
            }
            None => Err(index),
        }
    }

    /// Number of boxes held.
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// True when no box is held.
    pub fn is_empty(&self) -> bool {
        self.slots[0].is_none()
    }

    /// The boxes, in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = BoxIndex> + '_ {
        self.slots.iter().flatten().copied()
    }

    /// Whether `index` is held.
    pub fn contains(&self, index: BoxIndex) -> bool {
        self.slots.contains(&Some(index))
    }
}

/// One of the two seats at the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum PlayerId {
    /// Moves first.
    #[display("Player 1")]
    One,
    /// Moves second.
    #[display("Player 2")]
    Two,
}

impl PlayerId {
    /// Both seats, in turn order.
    pub const ALL: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    /// Returns the other player.
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Zero-based seat index.
    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    /// One-based seat number, as shown to players.
    pub fn number(self) -> usize {
        self.index() + 1
    }
}

/// Color a player's lines are drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum PlayerColor {
    /// First player's color.
    Red,
    /// Second player's color.
    Blue,
}

/// A player and their running tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    boxes_won: usize,
    color: PlayerColor,
}

impl Player {
    /// Creates a player with no boxes.
    pub fn new(color: PlayerColor) -> Self {
        Self {
            boxes_won: 0,
            color,
        }
    }

    /// Boxes this player has completed.
    pub fn boxes_won(&self) -> usize {
        self.boxes_won
    }

    /// Color of this player's lines.
    pub fn color(&self) -> PlayerColor {
        self.color
    }

    pub(crate) fn credit(&mut self, boxes: usize) {
        self.boxes_won += boxes;
    }
}

/// Box tally for both players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scores([usize; 2]);

impl Scores {
    /// Creates a tally from explicit counts.
    pub fn new(one: usize, two: usize) -> Self {
        Self([one, two])
    }

    /// Boxes won by `player`.
    pub fn get(&self, player: PlayerId) -> usize {
        self.0[player.index()]
    }

    /// Boxes won by both players together.
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }
}

impl std::fmt::Display for Scores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.0[0], self.0[1])
    }
}
