// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Boxed text rendering with shape borders.
//!
//! Each cell is three characters wide. A `|` separates horizontally adjacent
//! cells of different shapes, and a `---` run under a cell marks a shape
//! boundary below it. For a 2×2 grid split into columns:
//!
//! ```text
//! |-------|
//! | _ | _ |
//! |   -   |
//! | _ | _ |
//! |-------|
//! ```

use super::CellDisplay;
use crate::puzzle::PuzzleDefinition;

/// Render `definition` with the symbols chosen by `display`.
///
/// Every line, including the last, ends with a newline.
pub fn render(definition: &PuzzleDefinition, display: &dyn CellDisplay) -> String {
    let side = definition.side();
    let size = definition.size();
    // Header, then a cell line and a border line per row.
    let mut out = String::with_capacity((2 * side + 1) * (4 * side + 2));

    out.push('|');
    for col in 0..side {
        out.push_str("---");
        out.push(if col + 1 == side { '|' } else { '-' });
    }
    out.push('\n');

    for row in 0..side {
        let mut cells = String::from("|");
        let mut border = String::from("|");
        for col in 0..side {
            let index = size.index_of(row, col);
            let shape = definition.shape_of(index);

            cells.push(' ');
            cells.push(display.symbol(definition, index).as_char());
            cells.push(' ');
            cells.push(if col + 1 == side || shape != definition.shape_at(row, col + 1) {
                '|'
            } else {
                ' '
            });

            border.push_str(if row + 1 == side || shape != definition.shape_at(row + 1, col) {
                "---"
            } else {
                "   "
            });
            border.push(if col + 1 == side { '|' } else { '-' });
        }
        out.push_str(&cells);
        out.push('\n');
        out.push_str(&border);
        out.push('\n');
    }
    out
}
