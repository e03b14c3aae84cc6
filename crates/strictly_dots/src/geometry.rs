//! Line and box numbering.
//!
//! Lines are numbered in row-major scan order: the `width - 1` horizontal
//! lines along dot row 0, then the `width` vertical lines hanging below
//! it, then the horizontal lines along dot row 1, and so on. Every index
//! calculation in the crate goes through this module so the ledger, the
//! validator and the scorer always agree on what a number means.

use super::action::{Direction, Move};
use super::config::BoardConfig;
use super::types::{BoxIndex, BoxPair, LineIndex};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The four lines bounding one box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoxSides {
    /// Horizontal line above the box.
    pub top: LineIndex,
    /// Horizontal line below the box.
    pub bottom: LineIndex,
    /// Vertical line on the left.
    pub left: LineIndex,
    /// Vertical line on the right.
    pub right: LineIndex,
}

impl BoxSides {
    /// All four sides, top first.
    pub fn all(&self) -> [LineIndex; 4] {
        [self.top, self.left, self.right, self.bottom]
    }

    /// Whether `line` is one of the four sides.
    pub fn contains(&self, line: LineIndex) -> bool {
        self.all().contains(&line)
    }
}

/// Index arithmetic derived from a [`BoardConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardGeometry {
    config: BoardConfig,
}

impl BoardGeometry {
    /// Derives geometry for a board.
    pub fn new(config: BoardConfig) -> Self {
        Self { config }
    }

    /// The configuration this geometry was derived from.
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Horizontal lines per dot row, and boxes per box row.
    fn spacing(&self) -> usize {
        self.config.width() - 1
    }

    /// Lines in one horizontal row plus the vertical row beneath it.
    fn row_stride(&self) -> usize {
        2 * self.spacing() + 1
    }

    /// Total number of lines.
    pub fn max_moves(&self) -> usize {
        self.config.max_moves()
    }

    /// Total number of boxes.
    pub fn boxes_to_win(&self) -> usize {
        self.config.boxes_to_win()
    }

    /// Every box index, row-major.
    pub fn boxes(&self) -> impl Iterator<Item = BoxIndex> + use<> {
        (0..self.boxes_to_win()).map(BoxIndex::new)
    }

    /// Index of the line along the top of `index`.
    pub fn box_top_line(&self, index: BoxIndex) -> LineIndex {
        let row = index.get() / self.spacing();
        let col = index.get() % self.spacing();
        LineIndex::new(row * self.row_stride() + col)
    }

    /// The four lines bounding `index`.
    pub fn box_sides(&self, index: BoxIndex) -> BoxSides {
        let top = self.box_top_line(index).get();
        let spacing = self.spacing();
        BoxSides {
            top: LineIndex::new(top),
            bottom: LineIndex::new(top + spacing + 1 + spacing),
            left: LineIndex::new(top + spacing),
            right: LineIndex::new(top + spacing + 1),
        }
    }

    /// Boxes that have `line` as a side. At most two.
    #[instrument(skip(self))]
    pub fn boxes_adjacent_to(&self, line: LineIndex) -> BoxPair {
        let mut adjacent = BoxPair::new();
        for index in self.boxes().filter(|&index| self.box_sides(index).contains(line)) {
            if adjacent.push(index).is_err() {
                break;
            }
        }
        adjacent
    }

    /// Index of the line a move draws.
    ///
    /// The move must already have passed [`MoveValidator`](crate::MoveValidator);
    /// an `Up` from row 0 or a `Left` from column 0 has no line.
    pub fn line_index(&self, mv: &Move) -> LineIndex {
        let stride = self.row_stride();
        let spacing = self.spacing();
        let Move { x, y, direction } = *mv;
        let index = match direction {
            Direction::Up => stride * (x - 1) + y + spacing,
            Direction::Down => stride * x + y + spacing,
            Direction::Left => stride * x + (y - 1),
            Direction::Right => stride * x + y,
        };
        LineIndex::new(index)
    }
}
