// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable per-node search state.
//!
//! A [`SearchState`] is layered on a [`PuzzleDefinition`] but does not hold a
//! reference to it; every operation that needs the shape layout takes the
//! definition as an argument. This keeps states plain owned buffers that can
//! be preallocated in an arena and copied slot to slot without touching the
//! allocator.
//!
//! # Propagation
//!
//! Placing a star eliminates its 3×3 neighbourhood, and every line (row,
//! column or shape) that reaches its quota has its remaining free cells
//! eliminated. All counters are maintained incrementally, so the dead-line
//! test in [`SearchState::starved_line`] is O(side).

pub mod statistics;

use crate::puzzle::PuzzleDefinition;
use std::fmt;

/// A row, column or shape: the groups that each need exactly
/// `stars_per_line` stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    Row(usize),
    Column(usize),
    Shape(u8),
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Row(row) => write!(f, "row {}", row),
            Line::Column(col) => write!(f, "column {}", col),
            Line::Shape(shape) => write!(f, "shape {}", shape),
        }
    }
}

/// Star placements, eliminated cells and per-line counters for one search node.
///
/// Star cells are always eliminated as well, so `free` counts only cells that
/// could still receive a star.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    star_at: Vec<bool>,
    eliminated: Vec<bool>,
    star_count: usize,
    stars_in_row: Vec<u8>,
    stars_in_col: Vec<u8>,
    stars_in_shape: Vec<u8>,
    free_in_row: Vec<u8>,
    free_in_col: Vec<u8>,
    free_in_shape: Vec<u8>,
}

impl SearchState {
    /// Empty state: no stars, every cell free.
    pub fn new(definition: &PuzzleDefinition) -> Self {
        let side = definition.side();
        let cells = definition.cell_count();
        Self {
            star_at: vec![false; cells],
            eliminated: vec![false; cells],
            star_count: 0,
            stars_in_row: vec![0; side],
            stars_in_col: vec![0; side],
            stars_in_shape: vec![0; side],
            free_in_row: vec![side as u8; side],
            free_in_col: vec![side as u8; side],
            free_in_shape: (0..side)
                .map(|shape| definition.cells_of_shape(shape as u8).len() as u8)
                .collect(),
        }
    }

    /// Overwrite this state with `other` without reallocating.
    ///
    /// # Panics
    ///
    /// Panics if the two states were built for grids of different sizes.
    pub fn copy_from(&mut self, other: &SearchState) {
        self.star_at.copy_from_slice(&other.star_at);
        self.eliminated.copy_from_slice(&other.eliminated);
        self.star_count = other.star_count;
        self.stars_in_row.copy_from_slice(&other.stars_in_row);
        self.stars_in_col.copy_from_slice(&other.stars_in_col);
        self.stars_in_shape.copy_from_slice(&other.stars_in_shape);
        self.free_in_row.copy_from_slice(&other.free_in_row);
        self.free_in_col.copy_from_slice(&other.free_in_col);
        self.free_in_shape.copy_from_slice(&other.free_in_shape);
    }

    /// Place a star and propagate its consequences.
    ///
    /// Placing a star on a cell that already holds one is a no-op. The cell
    /// must not otherwise be eliminated.
    pub fn place_star(&mut self, definition: &PuzzleDefinition, row: usize, col: usize) {
        let size = definition.size();
        let index = size.index_of(row, col);
        if self.star_at[index] {
            return;
        }
        debug_assert!(
            !self.eliminated[index],
            "star placed on eliminated cell ({}, {})",
            row,
            col
        );

        let shape = definition.shape_of(index);
        self.star_at[index] = true;
        self.star_count += 1;
        self.stars_in_row[row] += 1;
        self.stars_in_col[col] += 1;
        self.stars_in_shape[shape as usize] += 1;

        for r in size.span(row) {
            for c in size.span(col) {
                self.eliminate(definition, size.index_of(r, c));
            }
        }

        let quota = definition.stars_per_line() as u8;
        if self.stars_in_shape[shape as usize] == quota {
            for &cell in definition.cells_of_shape(shape) {
                self.eliminate(definition, cell);
            }
        }
        if self.stars_in_row[row] == quota {
            for c in 0..size.side() {
                self.eliminate(definition, size.index_of(row, c));
            }
        }
        if self.stars_in_col[col] == quota {
            for r in 0..size.side() {
                self.eliminate(definition, size.index_of(r, col));
            }
        }
    }

    /// Mark a cell as unable to hold a star, updating the free counters once.
    #[inline]
    fn eliminate(&mut self, definition: &PuzzleDefinition, index: usize) {
        if self.eliminated[index] {
            return;
        }
        let size = definition.size();
        self.eliminated[index] = true;
        self.free_in_row[size.row_of(index)] -= 1;
        self.free_in_col[size.col_of(index)] -= 1;
        self.free_in_shape[definition.shape_of(index) as usize] -= 1;
    }

    /// The first line that can no longer reach its quota, if any.
    ///
    /// Lines are checked column, row, shape for each index in turn. A state
    /// with a starved line can never be completed.
    pub fn starved_line(&self, definition: &PuzzleDefinition) -> Option<Line> {
        let quota = definition.stars_per_line() as u8;
        (0..definition.side()).find_map(|i| {
            if self.free_in_col[i] + self.stars_in_col[i] < quota {
                Some(Line::Column(i))
            } else if self.free_in_row[i] + self.stars_in_row[i] < quota {
                Some(Line::Row(i))
            } else if self.free_in_shape[i] + self.stars_in_shape[i] < quota {
                Some(Line::Shape(i as u8))
            } else {
                None
            }
        })
    }

    /// Whether every line holds its full quota.
    #[inline]
    pub fn is_complete(&self, definition: &PuzzleDefinition) -> bool {
        self.star_count == definition.total_stars()
    }

    #[inline]
    pub fn has_star(&self, index: usize) -> bool {
        self.star_at[index]
    }

    #[inline]
    pub fn is_eliminated(&self, index: usize) -> bool {
        self.eliminated[index]
    }

    /// A cell that could still receive a star.
    #[inline]
    pub fn is_free(&self, index: usize) -> bool {
        !self.eliminated[index] && !self.star_at[index]
    }

    #[inline]
    pub fn star_count(&self) -> usize {
        self.star_count
    }

    #[inline]
    pub fn stars_in(&self, line: Line) -> usize {
        (match line {
            Line::Row(row) => self.stars_in_row[row],
            Line::Column(col) => self.stars_in_col[col],
            Line::Shape(shape) => self.stars_in_shape[shape as usize],
        }) as usize
    }

    #[inline]
    pub fn free_in(&self, line: Line) -> usize {
        (match line {
            Line::Row(row) => self.free_in_row[row],
            Line::Column(col) => self.free_in_col[col],
            Line::Shape(shape) => self.free_in_shape[shape as usize],
        }) as usize
    }

    /// Indices of all starred cells, increasing.
    pub fn star_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.star_at
            .iter()
            .enumerate()
            .filter_map(|(index, &star)| star.then_some(index))
    }
}
