// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Fixed puzzle dimensions.
//!
//! Only two grid sizes are supported. The grid size is inferred from the number
//! of cells in the input, never configured at compile time.
//!
//! | Grid    | Side | Cells | Stars per line | Stars in a solution |
//! |---------|------|-------|----------------|---------------------|
//! | Normal  | 10   | 100   | 2              | 20                  |
//! | Large   | 14   | 196   | 3              | 42                  |

/// Side length of a normal grid.
pub const NORMAL_SIDE: usize = 10;

/// Side length of a large grid.
pub const LARGE_SIDE: usize = 14;

/// Stars required in every row, column and shape of a normal grid.
pub const NORMAL_STARS_PER_LINE: usize = 2;

/// Stars required in every row, column and shape of a large grid.
pub const LARGE_STARS_PER_LINE: usize = 3;

/// Largest side length of any supported grid.
pub const MAX_SIDE: usize = LARGE_SIDE;

/// Largest number of cells of any supported grid.
pub const MAX_CELLS: usize = MAX_SIDE * MAX_SIDE;

/// Number of distinct shape ids expressible in the text encoding (one hex digit).
pub const MAX_ENCODED_SHAPE_ID: u8 = 0xf;
