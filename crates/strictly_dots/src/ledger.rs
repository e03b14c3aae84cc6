//! Record of drawn lines.

use super::action::LedgerError;
use super::types::LineIndex;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Which lines have been drawn.
///
/// Sized once from the board and never resized. Lines only ever go from
/// undrawn to drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineLedger {
    drawn: Box<[bool]>,
}

impl LineLedger {
    /// Creates a ledger with `max_moves` undrawn lines.
    pub fn new(max_moves: usize) -> Self {
        Self {
            drawn: vec![false; max_moves].into_boxed_slice(),
        }
    }

    /// Marks `line` drawn, or fails without changing anything.
    #[instrument(skip(self))]
    pub fn claim(&mut self, line: LineIndex) -> Result<(), LedgerError> {
        match self.drawn.get_mut(line.get()) {
            Some(slot) if !*slot => {
                *slot = true;
                Ok(())
            }
            Some(_) => {
                debug!(%line, "Line already drawn");
                Err(LedgerError::AlreadyClaimed { line })
            }
            None => Err(LedgerError::OutOfRange { line }),
        }
    }

    /// Whether `line` has been drawn. Lines off the board never are.
    pub fn is_drawn(&self, line: LineIndex) -> bool {
        self.drawn.get(line.get()).copied().unwrap_or(false)
    }

    /// Number of lines drawn so far.
    pub fn drawn_count(&self) -> usize {
        self.drawn.iter().filter(|&&d| d).count()
    }

    /// Number of lines on the board.
    pub fn len(&self) -> usize {
        self.drawn.len()
    }

    /// True for a board with no lines.
    pub fn is_empty(&self) -> bool {
        self.drawn.is_empty()
    }

    /// True once every line is drawn.
    pub fn is_full(&self) -> bool {
        self.drawn.iter().all(|&d| d)
    }

    /// Indices of drawn lines, ascending.
    pub fn drawn_lines(&self) -> impl Iterator<Item = LineIndex> + '_ {
        self.drawn
            .iter()
            .enumerate()
            .filter(|(_, d)| **d)
            .map(|(i, _)| LineIndex::new(i))
    }

    #[cfg(test)]
    pub(crate) fn force(&mut self, line: LineIndex, drawn: bool) {
        self.drawn[line.get()] = drawn;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_once() {
        let mut ledger = LineLedger::new(12);
        assert!(ledger.claim(LineIndex::new(3)).is_ok());
        assert!(ledger.is_drawn(LineIndex::new(3)));
        assert_eq!(ledger.drawn_count(), 1);
    }

    #[test]
    fn test_second_claim_rejected_without_change() {
        let mut ledger = LineLedger::new(12);
        ledger.claim(LineIndex::new(3)).unwrap();
        let before = ledger.clone();

        for _ in 0..2 {
            assert_eq!(
                ledger.claim(LineIndex::new(3)),
                Err(LedgerError::AlreadyClaimed {
                    line: LineIndex::new(3)
                })
            );
            assert_eq!(ledger, before);
        }
    }

    #[test]
    fn test_out_of_range() {
        let mut ledger = LineLedger::new(4);
        assert!(matches!(
            ledger.claim(LineIndex::new(4)),
            Err(LedgerError::OutOfRange { .. })
        ));
        assert!(!ledger.is_drawn(LineIndex::new(40)));
    }

    #[test]
    fn test_full() {
        let mut ledger = LineLedger::new(2);
        ledger.claim(LineIndex::new(0)).unwrap();
        assert!(!ledger.is_full());
        ledger.claim(LineIndex::new(1)).unwrap();
        assert!(ledger.is_full());
        assert_eq!(ledger.drawn_lines().count(), 2);
    }
}
