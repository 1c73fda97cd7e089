// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Preallocated search states, one per depth.

use crate::puzzle::PuzzleDefinition;
use crate::state::SearchState;

/// One [`SearchState`] per possible star count, `0..=total_stars`.
///
/// Slot `d` holds the state after `d` stars have been placed on the current
/// branch. The recursive search copies slot `d` into slot `d + 1` before
/// placing the next star, so the hot path never allocates.
#[derive(Debug)]
pub struct StateArena {
    slots: Vec<SearchState>,
}

impl StateArena {
    pub fn new(definition: &PuzzleDefinition) -> Self {
        let empty = SearchState::new(definition);
        Self {
            slots: vec![empty; definition.total_stars() + 1],
        }
    }

    /// Number of slots; one more than the stars in a solution.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Reset slot 0 to the empty state.
    pub fn reset_root(&mut self, definition: &PuzzleDefinition) {
        self.slots[0] = SearchState::new(definition);
    }

    pub fn slot(&self, depth: usize) -> &SearchState {
        &self.slots[depth]
    }

    /// Overwrite the child slot `depth + 1` with the parent slot `depth` and
    /// return the child for mutation.
    pub fn copy_to_child(&mut self, depth: usize) -> &mut SearchState {
        let (parents, children) = self.slots.split_at_mut(depth + 1);
        let child = &mut children[0];
        child.copy_from(&parents[depth]);
        child
    }
}
