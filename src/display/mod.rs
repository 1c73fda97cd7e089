// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Presentation of puzzles and solutions.
//!
//! The search core only answers "what symbol does this cell show"; the boxed
//! text layout lives in [`render`], parameterised by a [`CellDisplay`].

pub mod elapsed;
pub mod render;

pub use elapsed::format_elapsed;
pub use render::render;

use crate::puzzle::PuzzleDefinition;
use crate::state::SearchState;
use std::fmt;

/// What a single cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellSymbol {
    Star,
    Blocked,
    Empty,
}

impl CellSymbol {
    pub const fn as_char(self) -> char {
        match self {
            CellSymbol::Star => '*',
            CellSymbol::Blocked => 'o',
            CellSymbol::Empty => '_',
        }
    }
}

impl fmt::Display for CellSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Symbol of cell `index` in `state`.
///
/// A star wins over elimination, since every star cell is also eliminated.
pub fn cell_symbol(state: &SearchState, index: usize) -> CellSymbol {
    if state.has_star(index) {
        CellSymbol::Star
    } else if state.is_eliminated(index) {
        CellSymbol::Blocked
    } else {
        CellSymbol::Empty
    }
}

/// Chooses the symbol shown for each cell of a rendered grid.
pub trait CellDisplay {
    fn symbol(&self, definition: &PuzzleDefinition, index: usize) -> CellSymbol;
}

/// An unsolved grid: every cell empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainGrid;

impl CellDisplay for PlainGrid {
    fn symbol(&self, _definition: &PuzzleDefinition, _index: usize) -> CellSymbol {
        CellSymbol::Empty
    }
}

/// A grid showing the stars and eliminated cells of a search state.
#[derive(Debug, Clone, Copy)]
pub struct SolvedGrid<'a>(pub &'a SearchState);

impl CellDisplay for SolvedGrid<'_> {
    fn symbol(&self, _definition: &PuzzleDefinition, index: usize) -> CellSymbol {
        cell_symbol(self.0, index)
    }
}
