// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Immutable puzzle definitions.
//!
//! A [`PuzzleDefinition`] is validated once, when it is built, and never
//! changes afterwards. Every search thread reads the same definition through
//! a shared reference.
//!
//! # Validation
//!
//! Construction rejects, in this order:
//!
//! 1. a cell count other than 100 or 196,
//! 2. a number of distinct shapes other than the side length,
//! 3. a shape with fewer cells than stars per line,
//! 4. shape ids that are not exactly `0..side`,
//! 5. a cell with no orthogonal neighbour in its own shape.
//!
//! Check 5 is local: a shape made of two separate blobs, each at least two
//! cells wide, is accepted.

pub mod encoding;
pub mod errors;

pub use encoding::parse_shape_ids;
pub use errors::{DefinitionError, LoadError, ParseError};

use crate::geometry::GridSize;

/// Validated shape layout of a Star Battle puzzle.
///
/// # Example
///
/// ```
/// use star_battle::PuzzleDefinition;
///
/// // Ten horizontal 2×5 blocks.
/// let shapes: Vec<u8> = (0..100)
///     .map(|i| ((i / 10) / 2 * 2 + (i % 10) / 5) as u8)
///     .collect();
/// let definition = PuzzleDefinition::new(shapes).unwrap();
///
/// assert_eq!(definition.side(), 10);
/// assert_eq!(definition.stars_per_line(), 2);
/// assert_eq!(definition.cells_of_shape(1), &[5, 6, 7, 8, 9, 15, 16, 17, 18, 19]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleDefinition {
    size: GridSize,
    /// Shape id of every cell, row-major.
    shape_of: Vec<u8>,
    /// Cell indices of every shape, increasing.
    cells_of_shape: Vec<Vec<usize>>,
}

impl PuzzleDefinition {
    /// Validate a row-major shape assignment and build the definition.
    pub fn new(shape_of: Vec<u8>) -> Result<Self, DefinitionError> {
        let size = GridSize::from_cell_count(shape_of.len()).ok_or(
            DefinitionError::UnsupportedSize {
                cells: shape_of.len(),
            },
        )?;
        let side = size.side();
        let minimum = size.stars_per_line();

        let mut tally = [0usize; u8::MAX as usize + 1];
        for &shape in &shape_of {
            tally[shape as usize] += 1;
        }

        let found = tally.iter().filter(|&&cells| cells > 0).count();
        if found != side {
            return Err(DefinitionError::ShapeCount {
                expected: side,
                found,
            });
        }

        if let Some((shape, &cells)) = tally
            .iter()
            .enumerate()
            .find(|&(_, &cells)| cells > 0 && cells < minimum)
        {
            return Err(DefinitionError::ShapeTooSmall {
                shape: shape as u8,
                cells,
                minimum,
            });
        }

        if let Some(shape) = (side..tally.len()).find(|&shape| tally[shape] > 0) {
            return Err(DefinitionError::NonContiguousId {
                shape: shape as u8,
                side,
            });
        }

        for (index, &shape) in shape_of.iter().enumerate() {
            let (row, col) = (size.row_of(index), size.col_of(index));
            if !size
                .orthogonal_neighbors(row, col)
                .any(|neighbor| shape_of[neighbor] == shape)
            {
                return Err(DefinitionError::IsolatedCell { shape, row, col });
            }
        }

        let mut cells_of_shape: Vec<Vec<usize>> = tally[..side]
            .iter()
            .map(|&cells| Vec::with_capacity(cells))
            .collect();
        for (index, &shape) in shape_of.iter().enumerate() {
            cells_of_shape[shape as usize].push(index);
        }

        Ok(Self {
            size,
            shape_of,
            cells_of_shape,
        })
    }

    #[inline]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Side length, which is also the number of shapes.
    #[inline]
    pub fn side(&self) -> usize {
        self.size.side()
    }

    #[inline]
    pub fn stars_per_line(&self) -> usize {
        self.size.stars_per_line()
    }

    /// Stars in a complete solution.
    #[inline]
    pub fn total_stars(&self) -> usize {
        self.size.total_stars()
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.shape_of.len()
    }

    /// Shape id of the cell at a linear index.
    #[inline]
    pub fn shape_of(&self, index: usize) -> u8 {
        self.shape_of[index]
    }

    #[inline]
    pub fn shape_at(&self, row: usize, col: usize) -> u8 {
        self.shape_of[self.size.index_of(row, col)]
    }

    /// Cell indices of a shape in increasing order.
    #[inline]
    pub fn cells_of_shape(&self, shape: u8) -> &[usize] {
        &self.cells_of_shape[shape as usize]
    }

    /// The full row-major shape assignment.
    #[inline]
    pub fn shape_ids(&self) -> &[u8] {
        &self.shape_of
    }
}

impl TryFrom<Vec<u8>> for PuzzleDefinition {
    type Error = DefinitionError;

    fn try_from(shape_of: Vec<u8>) -> Result<Self, Self::Error> {
        Self::new(shape_of)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blocks(side: usize, block_cols: usize) -> Vec<u8> {
        let per_row = side / block_cols;
        (0..side * side)
            .map(|i| ((i / side) / 2 * per_row + (i % side) / block_cols) as u8)
            .collect()
    }

    #[test]
    fn test_valid_normal_blocks() {
        let definition = PuzzleDefinition::new(blocks(10, 5)).unwrap();
        assert_eq!(definition.size(), GridSize::Normal);
        assert_eq!(definition.total_stars(), 20);
        for shape in 0..10 {
            assert_eq!(definition.cells_of_shape(shape).len(), 10);
        }
        assert_eq!(definition.shape_at(9, 9), 9);
    }

    #[test]
    fn test_valid_large_blocks() {
        let definition = PuzzleDefinition::new(blocks(14, 7)).unwrap();
        assert_eq!(definition.size(), GridSize::Large);
        assert_eq!(definition.stars_per_line(), 3);
        assert_eq!(definition.cells_of_shape(13).len(), 14);
    }

    #[test]
    fn test_unsupported_size() {
        let err = PuzzleDefinition::new(vec![0; 99]).unwrap_err();
        assert_eq!(err, DefinitionError::UnsupportedSize { cells: 99 });
    }

    #[test]
    fn test_shape_count() {
        let err = PuzzleDefinition::new(vec![0; 100]).unwrap_err();
        assert_eq!(
            err,
            DefinitionError::ShapeCount {
                expected: 10,
                found: 1
            }
        );
    }

    #[test]
    fn test_non_contiguous_id() {
        let shapes: Vec<u8> = blocks(10, 5)
            .into_iter()
            .map(|shape| if shape == 4 { 12 } else { shape })
            .collect();
        let err = PuzzleDefinition::new(shapes).unwrap_err();
        assert_eq!(
            err,
            DefinitionError::NonContiguousId {
                shape: 12,
                side: 10
            }
        );
    }

    #[test]
    fn test_isolated_cell() {
        // Swap two cells between neighbouring blocks so each becomes an island.
        let mut shapes = blocks(10, 5);
        shapes[4] = 1;
        shapes[5] = 0;
        let err = PuzzleDefinition::new(shapes).unwrap_err();
        assert!(matches!(err, DefinitionError::IsolatedCell { .. }));
    }

    #[test]
    fn test_disconnected_shape_is_accepted() {
        // Shape 0 keeps its left 2×2 corner and also owns a 2×2 patch of shape 1;
        // shape 1 takes the rest of shape 0's block.
        let mut shapes = blocks(10, 5);
        for &i in &[2, 3, 4, 12, 13, 14] {
            shapes[i] = 1;
        }
        for &i in &[8, 9, 18, 19] {
            shapes[i] = 0;
        }
        let definition = PuzzleDefinition::new(shapes).unwrap();
        assert_eq!(definition.cells_of_shape(0), &[0, 1, 8, 9, 10, 11, 18, 19]);
    }
}
