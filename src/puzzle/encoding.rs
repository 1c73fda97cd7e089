// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Text encoding of puzzles.
//!
//! A puzzle is written as one hexadecimal digit per cell, row-major. Case is
//! ignored and so is all whitespace, so the usual layout is one grid row per
//! line:
//!
//! ```text
//! 0000011111
//! 0000011111
//! 2222233333
//! ...
//! ```

use crate::puzzle::errors::{LoadError, ParseError};
use crate::puzzle::PuzzleDefinition;
use std::path::Path;
use std::str::FromStr;

/// Decode hex-digit text into row-major shape ids.
///
/// The length of the result is not checked here; that is part of
/// [`PuzzleDefinition::new`].
///
/// ```
/// use star_battle::puzzle::parse_shape_ids;
///
/// assert_eq!(parse_shape_ids("0a\n B f").unwrap(), vec![0, 10, 11, 15]);
/// assert!(parse_shape_ids("01x").is_err());
/// ```
pub fn parse_shape_ids(text: &str) -> Result<Vec<u8>, ParseError> {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .enumerate()
        .map(|(position, character)| {
            character
                .to_digit(16)
                .map(|digit| digit as u8)
                .ok_or(ParseError::InvalidCharacter {
                    character,
                    position,
                })
        })
        .collect()
}

impl FromStr for PuzzleDefinition {
    type Err = LoadError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let shapes = parse_shape_ids(text)?;
        Ok(PuzzleDefinition::new(shapes)?)
    }
}

impl PuzzleDefinition {
    /// Read, decode and validate a puzzle file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let text = std::fs::read_to_string(path)?;
        let definition: PuzzleDefinition = text.parse()?;
        tracing::debug!(cells = text.len(), "loaded puzzle definition");
        Ok(definition)
    }
}
