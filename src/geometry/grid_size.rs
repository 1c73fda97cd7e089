// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The two supported grid sizes and row-major index arithmetic.

use crate::geometry::constants::{
    LARGE_SIDE, LARGE_STARS_PER_LINE, NORMAL_SIDE, NORMAL_STARS_PER_LINE,
};
use std::fmt;
use std::ops::Range;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

/// Size class of a puzzle.
///
/// The side length determines how many stars every line needs:
///
/// ```
/// use star_battle::geometry::GridSize;
///
/// let size = GridSize::from_cell_count(196).unwrap();
/// assert_eq!(size, GridSize::Large);
/// assert_eq!(size.side(), 14);
/// assert_eq!(size.stars_per_line(), 3);
/// assert_eq!(size.total_stars(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCountMacro)]
pub enum GridSize {
    /// 10×10, two stars per line.
    Normal,
    /// 14×14, three stars per line.
    Large,
}

impl GridSize {
    /// Infer the grid size from a flat cell count.
    ///
    /// Returns `None` for any count other than 100 or 196.
    pub const fn from_cell_count(cells: usize) -> Option<Self> {
        if cells == NORMAL_SIDE * NORMAL_SIDE {
            Some(GridSize::Normal)
        } else if cells == LARGE_SIDE * LARGE_SIDE {
            Some(GridSize::Large)
        } else {
            None
        }
    }

    /// Side length of the grid (also the number of shapes).
    #[inline]
    pub const fn side(self) -> usize {
        match self {
            GridSize::Normal => NORMAL_SIDE,
            GridSize::Large => LARGE_SIDE,
        }
    }

    /// Stars required in every row, column and shape.
    #[inline]
    pub const fn stars_per_line(self) -> usize {
        match self {
            GridSize::Normal => NORMAL_STARS_PER_LINE,
            GridSize::Large => LARGE_STARS_PER_LINE,
        }
    }

    /// Number of cells in the grid.
    #[inline]
    pub const fn cell_count(self) -> usize {
        self.side() * self.side()
    }

    /// Number of stars in a complete solution.
    #[inline]
    pub const fn total_stars(self) -> usize {
        self.side() * self.stars_per_line()
    }

    #[inline]
    pub const fn index_of(self, row: usize, col: usize) -> usize {
        row * self.side() + col
    }

    #[inline]
    pub const fn row_of(self, index: usize) -> usize {
        index / self.side()
    }

    #[inline]
    pub const fn col_of(self, index: usize) -> usize {
        index % self.side()
    }

    /// The one-step neighbourhood `u-1..=u+1` of a row or column, clipped to the grid.
    #[inline]
    pub fn span(self, u: usize) -> Range<usize> {
        u.saturating_sub(1)..(u + 2).min(self.side())
    }

    /// Cell indices of the orthogonal (4-directional) neighbours of a cell.
    pub fn orthogonal_neighbors(self, row: usize, col: usize) -> impl Iterator<Item = usize> {
        let side = self.side();
        let up = (row > 0).then(|| self.index_of(row - 1, col));
        let down = (row + 1 < side).then(|| self.index_of(row + 1, col));
        let left = (col > 0).then(|| self.index_of(row, col - 1));
        let right = (col + 1 < side).then(|| self.index_of(row, col + 1));
        [up, down, left, right].into_iter().flatten()
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.side(), self.side())
    }
}
