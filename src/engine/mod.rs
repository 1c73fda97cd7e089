// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Backtracking search over star placements.
//!
//! The search places stars in strictly increasing cell order, so each set of
//! stars is visited once. At every node it:
//!
//! 1. succeeds if the state holds `total_stars` stars,
//! 2. fails if some line can no longer reach its quota,
//! 3. scans candidate cells from the parent's last star onwards, failing as
//!    soon as the scan enters a row whose predecessor is short of stars,
//! 4. for each free candidate, copies the state into the next arena slot,
//!    places the star and recurses.
//!
//! Only the root scan is partitioned: with stride `n` and offset `k` a worker
//! tries first stars `k, k + n, k + 2n, ...` and searches each subtree fully.
//!
//! # Example
//!
//! ```
//! use star_battle::engine::{Partition, Searcher};
//! use star_battle::PuzzleDefinition;
//!
//! let shapes: Vec<u8> = (0..100)
//!     .map(|i| ((i / 10) / 2 * 2 + (i % 10) / 5) as u8)
//!     .collect();
//! let definition = PuzzleDefinition::new(shapes).unwrap();
//!
//! let mut searcher = Searcher::new(&definition);
//! let solution = searcher.solve(Partition::whole()).unwrap();
//! assert_eq!(solution.star_count(), 20);
//! ```

pub mod arena;

pub use arena::StateArena;

use crate::puzzle::PuzzleDefinition;
use crate::state::statistics::{Counters, Statistics};
use crate::state::{Line, SearchState};
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::trace;

/// The share of root-level first-star choices given to one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    offset: usize,
    stride: NonZeroUsize,
}

impl Partition {
    /// Every first-star choice.
    pub const fn whole() -> Self {
        Self {
            offset: 0,
            stride: NonZeroUsize::MIN,
        }
    }

    /// Partition `index` of `count`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= count`.
    pub fn for_worker(index: usize, count: NonZeroUsize) -> Self {
        assert!(
            index < count.get(),
            "worker index {} out of range for {} workers",
            index,
            count
        );
        Self {
            offset: index,
            stride: count,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn stride(&self) -> usize {
        self.stride.get()
    }

    /// The root-level cells this partition may choose as a first star.
    pub fn root_cells(&self, cell_count: usize) -> impl Iterator<Item = usize> {
        (self.offset..cell_count).step_by(self.stride.get())
    }
}

impl Default for Partition {
    fn default() -> Self {
        Self::whole()
    }
}

/// Why a subtree produced no solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Solved,
    Exhausted,
    Cancelled,
}

/// A single-threaded search with its own arena.
///
/// A searcher may be reused: each call to [`Searcher::solve`] starts again
/// from the empty state. Statistics accumulate across calls.
#[derive(Debug)]
pub struct Searcher<'a> {
    definition: &'a PuzzleDefinition,
    arena: StateArena,
    statistics: Statistics,
    cancel: Option<&'a AtomicBool>,
}

impl<'a> Searcher<'a> {
    pub fn new(definition: &'a PuzzleDefinition) -> Self {
        Self {
            definition,
            arena: StateArena::new(definition),
            statistics: Statistics::new(),
            cancel: None,
        }
    }

    /// Abandon the search once `cancel` is set.
    ///
    /// The flag is checked before every placement.
    pub fn with_cancellation(mut self, cancel: &'a AtomicBool) -> Self {
        self.cancel = Some(cancel);
        self
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Search the given partition.
    ///
    /// Returns the first solution found, or `None` if the partition holds no
    /// solution or the search was cancelled.
    pub fn solve(&mut self, partition: Partition) -> Option<SearchState> {
        self.arena.reset_root(self.definition);
        match self.descend(0, partition.offset(), partition.stride()) {
            Step::Solved => Some(self.arena.slot(self.definition.total_stars()).clone()),
            Step::Exhausted => None,
            Step::Cancelled => {
                self.statistics.increment(Counters::Cancellations);
                None
            }
        }
    }

    fn descend(&mut self, depth: usize, start: usize, stride: usize) -> Step {
        let definition = self.definition;
        self.statistics.increment(Counters::Nodes);

        let current = self.arena.slot(depth);
        if current.is_complete(definition) {
            return Step::Solved;
        }
        if let Some(line) = current.starved_line(definition) {
            trace!(depth, %line, "line starved");
            self.statistics.increment(Counters::QuotaPrunes);
            return Step::Exhausted;
        }

        let size = definition.size();
        let quota = definition.stars_per_line();
        for index in (start..definition.cell_count()).step_by(stride) {
            let current = self.arena.slot(depth);
            let row = size.row_of(index);
            if row > 0 && current.stars_in(Line::Row(row - 1)) < quota {
                self.statistics.increment(Counters::RowGateCuts);
                return Step::Exhausted;
            }
            if current.is_eliminated(index) {
                continue;
            }
            if self.is_cancelled() {
                return Step::Cancelled;
            }
            if depth == 0 {
                trace!(cell = index, "trying first star");
            }

            self.arena
                .copy_to_child(depth)
                .place_star(definition, row, size.col_of(index));
            self.statistics.increment(Counters::Placements);

            match self.descend(depth + 1, index, 1) {
                Step::Exhausted => {}
                found_or_cancelled => return found_or_cancelled,
            }
        }
        Step::Exhausted
    }

    #[inline]
    fn is_cancelled(&self) -> bool {
        self.cancel
            .is_some_and(|cancel| cancel.load(Ordering::Relaxed))
    }
}

/// Search the whole puzzle on the calling thread.
///
/// Deterministic: returns the solution whose star cells are
/// lexicographically first, or `None` if there is none.
pub fn solve(definition: &PuzzleDefinition) -> Option<SearchState> {
    Searcher::new(definition).solve(Partition::whole())
}
