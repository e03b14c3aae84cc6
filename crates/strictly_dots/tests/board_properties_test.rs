//! Board-wide properties, checked over every supported board size.

use std::collections::{BTreeMap, BTreeSet};
use strictly_dots::{
    BoardConfig, BoardGeometry, Direction, Move, MoveValidator, RawToken, ValidationError,
    MAX_DIM, MIN_DIM, normalize,
};
use strum::IntoEnumIterator;

fn all_configs() -> impl Iterator<Item = BoardConfig> {
    (MIN_DIM..=MAX_DIM).flat_map(|width| {
        (MIN_DIM..=MAX_DIM).map(move |height| BoardConfig::new(width, height).unwrap())
    })
}

/// Every on-board move, grouped by the line it draws.
fn moves_by_line(geometry: &BoardGeometry) -> BTreeMap<usize, Vec<Move>> {
    let config = geometry.config();
    let mut lines: BTreeMap<usize, Vec<Move>> = BTreeMap::new();
    for x in 0..config.height() {
        for y in 0..config.width() {
            for direction in Direction::iter() {
                let mv = Move::new(x, y, direction);
                if let Ok(line) = MoveValidator::check(&mv, geometry) {
                    lines.entry(line.get()).or_default().push(mv);
                }
            }
        }
    }
    lines
}

#[test]
fn test_counts_follow_dimensions() {
    for config in all_configs() {
        let (w, h) = (config.width(), config.height());
        assert_eq!(config.max_moves(), w * (h - 1) + h * (w - 1), "{config}");
        assert_eq!(config.boxes_to_win(), (w - 1) * (h - 1), "{config}");
    }
}

#[test]
fn test_box_sides_distinct_and_on_board() {
    for config in all_configs() {
        let geometry = BoardGeometry::new(config);
        for index in geometry.boxes() {
            let sides = geometry.box_sides(index).all();
            let distinct: BTreeSet<_> = sides.iter().collect();
            assert_eq!(distinct.len(), 4, "{config} {index}");
            for line in sides {
                assert!(line.get() < config.max_moves(), "{config} {index} {line}");
            }
        }
    }
}

#[test]
fn test_every_line_reachable_from_both_ends() {
    for config in all_configs() {
        let geometry = BoardGeometry::new(config);
        let lines = moves_by_line(&geometry);

        let expected: Vec<usize> = (0..config.max_moves()).collect();
        assert_eq!(lines.keys().copied().collect::<Vec<_>>(), expected, "{config}");
        for (line, moves) in &lines {
            assert_eq!(moves.len(), 2, "{config} line {line}: {moves:?}");
        }
    }
}

#[test]
fn test_inner_lines_border_two_boxes() {
    for config in all_configs() {
        let geometry = BoardGeometry::new(config);
        let mut border_count = 0;
        for line in 0..config.max_moves() {
            let boxes = geometry.boxes_adjacent_to(strictly_dots::LineIndex::new(line));
            assert!(matches!(boxes.len(), 1 | 2), "{config} line {line}");
            border_count += boxes.len();
        }
        assert_eq!(border_count, 4 * config.boxes_to_win(), "{config}");
    }
}

#[test]
fn test_pair_token_matches_directional_token() {
    let config = BoardConfig::new(3, 3).unwrap();
    let geometry = BoardGeometry::new(config);

    let pair = normalize(RawToken::Pair {
        x1: 1,
        y1: 1,
        x2: 0,
        y2: 1,
    })
    .unwrap();
    let directional = normalize(RawToken::Directional {
        x: 1,
        y: 1,
        direction: Direction::Up,
    })
    .unwrap();

    assert_eq!(pair, Move::new(1, 1, Direction::Up));
    assert_eq!(
        MoveValidator::check(&pair, &geometry),
        MoveValidator::check(&directional, &geometry)
    );
}

#[test]
fn test_pair_tokens_agree_on_every_board() {
    for config in all_configs() {
        let geometry = BoardGeometry::new(config);
        for moves in moves_by_line(&geometry).values() {
            // The two ends of a line, written as a pair either way round.
            let (a, b) = (moves[0], moves[1]);
            let forward = normalize(RawToken::Pair {
                x1: a.x,
                y1: a.y,
                x2: b.x,
                y2: b.y,
            })
            .unwrap();
            let backward = normalize(RawToken::Pair {
                x1: b.x,
                y1: b.y,
                x2: a.x,
                y2: a.y,
            })
            .unwrap();
            assert_eq!(
                MoveValidator::check(&forward, &geometry),
                MoveValidator::check(&backward, &geometry),
                "{config} {a} {b}"
            );
        }
    }
}

#[test]
fn test_three_by_three_edges() {
    let geometry = BoardGeometry::new(BoardConfig::new(3, 3).unwrap());
    for y in 0..3 {
        assert!(matches!(
            MoveValidator::check(&Move::new(0, y, Direction::Up), &geometry),
            Err(ValidationError::OutOfBounds { .. })
        ));
    }
    for x in 0..3 {
        assert!(matches!(
            MoveValidator::check(&Move::new(x, 2, Direction::Right), &geometry),
            Err(ValidationError::OutOfBounds { .. })
        ));
    }
}
