//! Game rules for dots and boxes.
//!
//! Scoring runs after every successful claim; the outcome is read off
//! the final tally once every line is drawn.

pub mod outcome;
pub mod scoring;

pub use outcome::Outcome;
pub use scoring::{BoxScorer, TurnScore};
