//! Character-at-a-time move parser.
//!
//! The serial link hands over one character per polling tick. The parser
//! keeps the partial token between ticks and reports, for each character,
//! whether it was dropped, accepted, or closed out a whole token.

use super::action::{Direction, Move, ParseError};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Length of a coordinate-pair token (`X1 Y1 X2 Y2`).
pub const PAIR_LEN: usize = 4;
/// Length of a directional token (`X Y Dir`).
pub const DIRECTIONAL_LEN: usize = 3;

/// A complete token, before normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RawToken {
    /// `X Y Dir`.
    Directional {
        /// Dot row.
        x: usize,
        /// Dot column.
        y: usize,
        /// Direction letter, already uppercased.
        direction: Direction,
    },
    /// `X1 Y1 X2 Y2`.
    Pair {
        /// Start row.
        x1: usize,
        /// Start column.
        y1: usize,
        /// End row.
        x2: usize,
        /// End column.
        y2: usize,
    },
}

/// What happened to one character fed to the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intake {
    /// Not valid at this position; not stored, not echoed.
    Ignored,
    /// Stored. Echo the contained (normalized) character.
    Accepted(char),
    /// Stored and the token is complete. Echo `echo`, then handle `token`.
    Complete {
        /// Character to echo.
        echo: char,
        /// The finished token.
        token: RawToken,
    },
}

/// Accumulates one token across polling ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MoveParser {
    digits: [usize; PAIR_LEN],
    len: usize,
}

impl MoveParser {
    /// Creates an empty parser.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of characters accepted into the current token.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no token is in progress.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops any partial token.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Feeds one character.
    ///
    /// Digits `0..=max_digit` are accepted in every position. A direction
    /// letter (any case) is accepted only in the third position, where it
    /// ends the token. Anything else is ignored and the cursor stays put.
    #[instrument(level = "trace", skip(self), fields(pos = self.len))]
    pub fn feed(&mut self, c: char, max_digit: usize) -> Intake {
        if let Some(digit) = c.to_digit(10).map(|d| d as usize)
            && digit <= max_digit
        {
            self.digits[self.len] = digit;
            self.len += 1;
            if self.len < PAIR_LEN {
                return Intake::Accepted(c);
            }
            let [x1, y1, x2, y2] = self.digits;
            self.reset();
            debug!(x1, y1, x2, y2, "Coordinate pair token complete");
            return Intake::Complete {
                echo: c,
                token: RawToken::Pair { x1, y1, x2, y2 },
            };
        }

        if self.len == DIRECTIONAL_LEN - 1
            && let Some(direction) = Direction::from_letter(c)
        {
            let [x, y, ..] = self.digits;
            self.reset();
            debug!(x, y, %direction, "Directional token complete");
            return Intake::Complete {
                echo: direction.letter(),
                token: RawToken::Directional { x, y, direction },
            };
        }

        Intake::Ignored
    }
}

/// Converts a token to directional form.
///
/// A coordinate pair must name two dots exactly one step apart along a
/// single axis. The direction points from the first dot to the second:
/// a smaller row is `Up`, a larger row `Down`, a smaller column `Left`,
/// a larger column `Right`.
#[instrument]
pub fn normalize(token: RawToken) -> Result<Move, ParseError> {
    match token {
        RawToken::Directional { x, y, direction } => Ok(Move::new(x, y, direction)),
        RawToken::Pair { x1, y1, x2, y2 } => {
            let dx = x1 as isize - x2 as isize;
            let dy = y1 as isize - y2 as isize;

            if dx.abs() > 1 || dy.abs() > 1 {
                return Err(ParseError::InvalidFormat);
            }
            if dx != 0 && dy != 0 {
                return Err(ParseError::InvalidFormat);
            }

            let direction = match (dx.signum(), dy.signum()) {
                (1, _) => Direction::Up,
                (-1, _) => Direction::Down,
                (_, 1) => Direction::Left,
                (_, -1) => Direction::Right,
                _ => return Err(ParseError::InvalidFormat),
            };
            Ok(Move::new(x1, y1, direction))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_all(parser: &mut MoveParser, text: &str, max_digit: usize) -> Vec<Intake> {
        text.chars().map(|c| parser.feed(c, max_digit)).collect()
    }

    #[test]
    fn test_directional_token_ends_at_three() {
        let mut parser = MoveParser::new();
        let intakes = feed_all(&mut parser, "11u", 2);
        assert_eq!(intakes[0], Intake::Accepted('1'));
        assert_eq!(intakes[1], Intake::Accepted('1'));
        assert_eq!(
            intakes[2],
            Intake::Complete {
                echo: 'U',
                token: RawToken::Directional {
                    x: 1,
                    y: 1,
                    direction: Direction::Up
                },
            }
        );
        assert!(parser.is_empty());
    }

    #[test]
    fn test_pair_token_ends_at_four() {
        let mut parser = MoveParser::new();
        let intakes = feed_all(&mut parser, "1101", 2);
        assert_eq!(
            intakes[3],
            Intake::Complete {
                echo: '1',
                token: RawToken::Pair {
                    x1: 1,
                    y1: 1,
                    x2: 0,
                    y2: 1
                },
            }
        );
    }

    #[test]
    fn test_out_of_range_digit_ignored() {
        let mut parser = MoveParser::new();
        assert_eq!(parser.feed('3', 2), Intake::Ignored);
        assert_eq!(parser.feed('2', 2), Intake::Accepted('2'));
        assert_eq!(parser.len(), 1);
    }

    #[test]
    fn test_letter_only_in_third_position() {
        let mut parser = MoveParser::new();
        assert_eq!(parser.feed('U', 2), Intake::Ignored);
        feed_all(&mut parser, "000", 2);
        assert_eq!(parser.len(), 3);
        assert_eq!(parser.feed('R', 2), Intake::Ignored);
        assert_eq!(parser.len(), 3);
    }

    #[test]
    fn test_noise_does_not_advance() {
        let mut parser = MoveParser::new();
        let intakes = feed_all(&mut parser, "1 x\r1", 2);
        assert_eq!(intakes[1], Intake::Ignored);
        assert_eq!(intakes[2], Intake::Ignored);
        assert_eq!(intakes[3], Intake::Ignored);
        assert_eq!(parser.len(), 2);
    }

    #[test]
    fn test_normalize_pair_directions() {
        let pair = |x1, y1, x2, y2| normalize(RawToken::Pair { x1, y1, x2, y2 });
        assert_eq!(pair(1, 1, 0, 1), Ok(Move::new(1, 1, Direction::Up)));
        assert_eq!(pair(1, 1, 2, 1), Ok(Move::new(1, 1, Direction::Down)));
        assert_eq!(pair(1, 1, 1, 0), Ok(Move::new(1, 1, Direction::Left)));
        assert_eq!(pair(1, 1, 1, 2), Ok(Move::new(1, 1, Direction::Right)));
    }

    #[test]
    fn test_normalize_rejects_bad_pairs() {
        let pair = |x1, y1, x2, y2| normalize(RawToken::Pair { x1, y1, x2, y2 });
        assert_eq!(pair(1, 1, 1, 1), Err(ParseError::InvalidFormat));
        assert_eq!(pair(0, 0, 1, 1), Err(ParseError::InvalidFormat));
        assert_eq!(pair(0, 0, 2, 0), Err(ParseError::InvalidFormat));
        assert_eq!(pair(0, 2, 0, 0), Err(ParseError::InvalidFormat));
    }
}
