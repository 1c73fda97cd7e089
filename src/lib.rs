// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Parallel solver for Star Battle puzzles.
//!
//! A Star Battle grid of side 10 (or 14) is divided into 10 (or 14) shapes.
//! A solution places 2 (or 3) stars in every row, every column and every
//! shape, with no two stars touching, not even diagonally.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: Definition (Immutable)
//!
//! [`PuzzleDefinition`] holds the validated shape layout, built once from a
//! sequence of shape ids and shared by reference across all search threads.
//!
//! ## Tier 2: Search State (Mutable)
//!
//! [`SearchState`] holds stars, eliminated cells and per-line counters. Each
//! search owns an arena with one state per depth; a child is a copy of its
//! parent with one more star, so backtracking is just returning.
//!
//! # Search Algorithm
//!
//! Stars are placed in increasing cell order. Placing a star eliminates its
//! neighbours and, when a row, column or shape reaches its quota, the rest of
//! that line. A branch fails as soon as a line cannot reach its quota or the
//! scan has passed a row that is still short of stars.
//!
//! # Parallelization
//!
//! [`ParallelCoordinator`] splits the choice of the first star across
//! workers by stride, runs each share to completion on its own thread and
//! stops the rest once any worker reports a solution.

pub mod config;
pub mod display;
pub mod engine;
pub mod geometry;
pub mod parallel;
pub mod puzzle;
pub mod state;

// Re-export commonly used types
pub use config::SolverConfig;
pub use display::{render, CellDisplay, CellSymbol, PlainGrid, SolvedGrid};
pub use engine::{Partition, Searcher};
pub use geometry::GridSize;
pub use parallel::{ParallelCoordinator, SolveReport, SolverOutcome, SolverRequest};
pub use puzzle::{DefinitionError, LoadError, ParseError, PuzzleDefinition};
pub use state::statistics::{Counters, Statistics};
pub use state::{Line, SearchState};
