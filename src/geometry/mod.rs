// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Grid geometry shared by every other module.
//!
//! - constants: the two fixed grid dimensions
//! - GridSize: size class with row-major index arithmetic and neighbourhoods

pub mod constants;
pub mod grid_size;

pub use constants::*;
pub use grid_size::GridSize;
