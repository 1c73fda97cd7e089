// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for loading and validating puzzle definitions.
//!
//! Definition errors are deterministic: the same input always fails the same
//! way, so nothing here is retried or repaired.

use strum_macros::EnumCount as EnumCountMacro;
use thiserror::Error;

/// A shape assignment that does not describe a valid puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Error, EnumCountMacro)]
pub enum DefinitionError {
    /// Cell count is neither 100 (10×10) nor 196 (14×14).
    #[error("unsupported grid of {cells} cells (expected 100 or 196)")]
    UnsupportedSize { cells: usize },

    /// Number of distinct shape ids differs from the side length.
    #[error("grid contains {found} distinct shapes, expected {expected}")]
    ShapeCount { expected: usize, found: usize },

    /// A shape has fewer cells than the stars it must hold.
    #[error("shape {shape} has {cells} cells < {minimum} minimum")]
    ShapeTooSmall {
        shape: u8,
        cells: usize,
        minimum: usize,
    },

    /// Shape ids are not exactly `0..side`.
    #[error("shape id {shape} is outside the contiguous range 0..{side}")]
    NonContiguousId { shape: u8, side: usize },

    /// A cell has no orthogonal neighbour in its own shape.
    #[error("shape {shape} has isolated cell at row {row}, column {col}")]
    IsolatedCell { shape: u8, row: usize, col: usize },
}

/// Malformed puzzle text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A significant (non-whitespace) character that is not a hex digit.
    #[error("invalid character {character:?} at cell {position}")]
    InvalidCharacter { character: char, position: usize },
}

/// Anything that can go wrong between a file on disk and a validated definition.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("invalid puzzle: {0}")]
    Definition(#[from] DefinitionError),
}
