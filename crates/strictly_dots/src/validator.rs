//! Edge-of-board checks for normalized moves.

use super::action::{Direction, Move, ValidationError};
use super::geometry::BoardGeometry;
use super::types::LineIndex;
use tracing::{debug, instrument};

/// Precondition: the move names a dot on the board and does not draw
/// past the outer edge.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveValidator;

impl MoveValidator {
    /// Checks `mv` against the board and returns the line it draws.
    #[instrument(skip(geometry), fields(board = %geometry.config()))]
    pub fn check(mv: &Move, geometry: &BoardGeometry) -> Result<LineIndex, ValidationError> {
        let config = geometry.config();
        let Move { x, y, direction } = *mv;
        let last_row = config.height() - 1;
        let last_col = config.width() - 1;

        let off_board = x > last_row
            || y > last_col
            || match direction {
                Direction::Up => x == 0,
                Direction::Down => x == last_row,
                Direction::Left => y == 0,
                Direction::Right => y == last_col,
            };

        if off_board {
            debug!(%mv, "Move leaves the board");
            return Err(ValidationError::OutOfBounds { x, y, direction });
        }
        Ok(geometry.line_index(mv))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BoardConfig;
    use strum::IntoEnumIterator;

    fn geometry(width: usize, height: usize) -> BoardGeometry {
        BoardGeometry::new(BoardConfig::new(width, height).unwrap())
    }

    #[test]
    fn test_up_from_top_row_rejected() {
        let geo = geometry(3, 3);
        for y in 0..3 {
            let mv = Move::new(0, y, Direction::Up);
            assert!(matches!(
                MoveValidator::check(&mv, &geo),
                Err(ValidationError::OutOfBounds { .. })
            ));
        }
    }

    #[test]
    fn test_right_from_last_column_rejected() {
        let geo = geometry(3, 3);
        for x in 0..3 {
            let mv = Move::new(x, 2, Direction::Right);
            assert!(MoveValidator::check(&mv, &geo).is_err());
        }
    }

    #[test]
    fn test_dot_outside_grid_rejected() {
        // 2 rows, 5 columns: the parser lets '4' through as a row.
        let geo = geometry(5, 2);
        let mv = Move::new(4, 0, Direction::Up);
        assert_eq!(
            MoveValidator::check(&mv, &geo),
            Err(ValidationError::OutOfBounds {
                x: 4,
                y: 0,
                direction: Direction::Up
            })
        );
    }

    #[test]
    fn test_centre_dot_accepts_every_direction() {
        let geo = geometry(3, 3);
        for direction in Direction::iter() {
            let line = MoveValidator::check(&Move::new(1, 1, direction), &geo).unwrap();
            assert!(line.get() < geo.max_moves());
        }
    }
}
