// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Building puzzle definitions from shape ids, text and files.

mod common;

use common::*;
use star_battle::puzzle::parse_shape_ids;
use star_battle::{DefinitionError, GridSize, LoadError, ParseError, PuzzleDefinition};
use std::fs;

#[test]
fn test_block_grid_is_valid() {
    let definition = PuzzleDefinition::new(block_ids()).unwrap();
    assert_eq!(definition.size(), GridSize::Normal);
    assert_eq!(definition.stars_per_line(), 2);
    assert_eq!(definition.total_stars(), 20);
    for shape in 0..10u8 {
        assert_eq!(definition.cells_of_shape(shape).len(), 10);
    }
    assert_eq!(definition, common::definition(BLOCKS_10));
}

#[test]
fn test_one_cell_shape_is_too_small() {
    // Shape 9 shrinks to the bottom right cell; the rest of it joins shape 8.
    let mut ids = block_ids();
    for id in ids.iter_mut().take(99) {
        if *id == 9 {
            *id = 8;
        }
    }
    assert_eq!(
        PuzzleDefinition::new(ids),
        Err(DefinitionError::ShapeTooSmall {
            shape: 9,
            cells: 1,
            minimum: 2
        })
    );
}

#[test]
fn test_large_grid_is_valid() {
    let definition = definition(LARGE_14);
    assert_eq!(definition.size(), GridSize::Large);
    assert_eq!(definition.side(), 14);
    assert_eq!(definition.stars_per_line(), 3);
    assert_eq!(definition.total_stars(), 42);
    let cells: usize = (0..14u8).map(|s| definition.cells_of_shape(s).len()).sum();
    assert_eq!(cells, 196);
}

#[test]
fn test_unsupported_lengths() {
    for cells in [0, 99, 101, 144, 195, 197] {
        assert_eq!(
            PuzzleDefinition::new(vec![0; cells]),
            Err(DefinitionError::UnsupportedSize { cells })
        );
    }
}

#[test]
fn test_too_few_shapes() {
    let ids: Vec<u8> = block_ids().into_iter().map(|id| id.min(8)).collect();
    assert_eq!(
        PuzzleDefinition::new(ids),
        Err(DefinitionError::ShapeCount {
            expected: 10,
            found: 9
        })
    );
}

#[test]
fn test_ids_must_start_at_zero() {
    let ids: Vec<u8> = block_ids().into_iter().map(|id| id + 1).collect();
    assert_eq!(
        PuzzleDefinition::new(ids),
        Err(DefinitionError::NonContiguousId {
            shape: 10,
            side: 10
        })
    );
}

#[test]
fn test_isolated_cell() {
    // Swap two cells so each sits alone inside the other's shape.
    let mut ids = block_ids();
    ids.swap(22, 27);
    assert_eq!(
        PuzzleDefinition::new(ids),
        Err(DefinitionError::IsolatedCell {
            shape: 3,
            row: 2,
            col: 2
        })
    );
}

#[test]
fn test_disconnected_shape_is_accepted() {
    // Columns 0-1 and 8-9 of rows 0-1 form shape 0; the middle belongs to shape 1.
    let mut ids = block_ids();
    for row in 0..2 {
        for col in 0..10 {
            ids[row * 10 + col] = if col < 2 || col >= 8 { 0 } else { 1 };
        }
    }
    let definition = PuzzleDefinition::new(ids).unwrap();
    assert_eq!(definition.cells_of_shape(0), &[0, 1, 8, 9, 10, 11, 18, 19]);
}

#[test]
fn test_parse_ignores_layout() {
    let flat = parse_shape_ids(BLOCKS_10).unwrap();
    let spaced: String = BLOCKS_10
        .as_bytes()
        .chunks(10)
        .map(|row| format!("{}\r\n", std::str::from_utf8(row).unwrap()))
        .collect();
    assert_eq!(parse_shape_ids(&spaced).unwrap(), flat);
    assert_eq!(
        parse_shape_ids(&LARGE_14.to_uppercase()).unwrap(),
        parse_shape_ids(LARGE_14).unwrap()
    );
}

#[test]
fn test_parse_error_surfaces_through_from_str() {
    let text = BLOCKS_10.replacen('1', "x", 1);
    match text.parse::<PuzzleDefinition>() {
        Err(LoadError::Parse(ParseError::InvalidCharacter {
            character: 'x',
            position: 5,
        })) => {}
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!("star-battle-{}-load.txt", std::process::id()));
    let text: String = UNIQUE_10
        .as_bytes()
        .chunks(10)
        .map(|row| format!("{}\n", std::str::from_utf8(row).unwrap()))
        .collect();
    fs::write(&path, text).unwrap();
    let loaded = PuzzleDefinition::load(&path);
    fs::remove_file(&path).unwrap();
    assert_eq!(loaded.unwrap(), definition(UNIQUE_10));
}

#[test]
fn test_load_missing_file() {
    let path = std::env::temp_dir().join("star-battle-no-such-puzzle.txt");
    assert!(matches!(PuzzleDefinition::load(path), Err(LoadError::Io(_))));
}
