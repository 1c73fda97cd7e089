// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use star_battle::{Line, PuzzleDefinition, SearchState};

/// A 10×10 puzzle with exactly one solution.
pub const UNIQUE_10: &str = "\
    2855555555\
    2888355355\
    2281333355\
    2111199335\
    2222199995\
    4422996655\
    0442999666\
    0444966676\
    0004464476\
    0000444776";

/// Star cells of the only solution of [`UNIQUE_10`].
pub const UNIQUE_10_SOLUTION: [usize; 20] = [
    1, 9, 13, 17, 25, 29, 30, 32, 44, 48, 52, 56, 60, 64, 76, 78, 81, 83, 95, 97,
];

/// Ten horizontal 2×5 blocks.
pub const BLOCKS_10: &str = "\
    0000011111\
    0000011111\
    2222233333\
    2222233333\
    4444455555\
    4444455555\
    6666677777\
    6666677777\
    8888899999\
    8888899999";

/// Star cells of the first solution of [`BLOCKS_10`] in cell order.
pub const BLOCKS_10_FIRST: [usize; 20] = [
    0, 2, 15, 17, 20, 23, 35, 38, 41, 43, 56, 58, 61, 64, 76, 79, 82, 84, 97, 99,
];

/// Shape 0 is two adjacent cells, so it can never hold two stars.
pub const IMPOSSIBLE_10: &str = "\
    0022211111\
    2222211111\
    2222233333\
    2222233333\
    4444455555\
    4444455555\
    6666677777\
    6666677777\
    8888899999\
    8888899999";

/// A solvable 14×14 puzzle.
pub const LARGE_14: &str = "\
    00000000000001\
    11111111111111\
    13222222222131\
    33333333333331\
    55534444444333\
    55555555555557\
    55776666665557\
    77777777777777\
    97799888888997\
    99999999999999\
    99bbbaaaaabb99\
    ccbbbbbbbbbbbb\
    cccccccccddddb\
    ccdddddddddddd";

/// Star cells of the first solution of [`LARGE_14`] in cell order.
pub const LARGE_14_FIRST: [usize; 42] = [
    0, 2, 4, 20, 22, 26, 30, 32, 38, 42, 48, 54, 60, 64, 66, 70, 72, 82, 89, 91, 93, 99, 101,
    109, 117, 119, 121, 127, 137, 139, 145, 147, 149, 157, 165, 167, 169, 174, 176, 185, 192,
    195,
];

pub fn definition(text: &str) -> PuzzleDefinition {
    text.parse().expect("fixture should be a valid puzzle")
}

/// Shape ids of [`BLOCKS_10`].
pub fn block_ids() -> Vec<u8> {
    (0..100)
        .map(|i| ((i / 10) / 2 * 2 + (i % 10) / 5) as u8)
        .collect()
}

/// Check that `state` is a complete, valid solution of `definition`.
pub fn assert_valid_solution(definition: &PuzzleDefinition, state: &SearchState) {
    let side = definition.side();
    let quota = definition.stars_per_line();
    assert_eq!(state.star_count(), definition.total_stars());

    for i in 0..side {
        let row = (0..side).filter(|&c| state.has_star(i * side + c)).count();
        let col = (0..side).filter(|&r| state.has_star(r * side + i)).count();
        let shape = definition
            .cells_of_shape(i as u8)
            .iter()
            .filter(|&&cell| state.has_star(cell))
            .count();
        assert_eq!(row, quota, "row {}", i);
        assert_eq!(col, quota, "column {}", i);
        assert_eq!(shape, quota, "shape {}", i);
        assert_eq!(state.stars_in(Line::Row(i)), quota);
        assert_eq!(state.stars_in(Line::Column(i)), quota);
        assert_eq!(state.stars_in(Line::Shape(i as u8)), quota);
    }

    let stars: Vec<_> = state.star_cells().collect();
    for (n, &a) in stars.iter().enumerate() {
        for &b in &stars[n + 1..] {
            let (ra, ca) = (a / side, a % side);
            let (rb, cb) = (b / side, b % side);
            assert!(
                ra.abs_diff(rb) > 1 || ca.abs_diff(cb) > 1,
                "stars at {} and {} touch",
                a,
                b
            );
        }
    }
}
