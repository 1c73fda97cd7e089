// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Parallel solving by splitting the first star across workers.
//!
//! Each worker owns a [`Searcher`] and an arena; the puzzle definition is
//! shared read-only. The only state crossing threads is a per-worker
//! cancellation flag and a per-worker result slot, locked only for the brief
//! write or read of a result.
//!
//! The coordinator polls the result slots. It stops every worker as soon as
//! one slot holds a solution or all workers have finished, joins them, and
//! then reads the slots once more so that a solution written just before the
//! stop is not lost.

use crate::config::SolverConfig;
use crate::engine::{Partition, Searcher};
use crate::puzzle::PuzzleDefinition;
use crate::state::statistics::{Counters, Statistics};
use crate::state::SearchState;
use std::num::NonZeroUsize;
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info, trace};

/// One worker's share of a parallel solve.
#[derive(Debug, Clone, Copy)]
pub struct SolverRequest<'a> {
    pub definition: &'a PuzzleDefinition,
    pub worker_index: usize,
    pub worker_count: NonZeroUsize,
    pub cancel: &'a AtomicBool,
}

impl SolverRequest<'_> {
    pub fn partition(&self) -> Partition {
        Partition::for_worker(self.worker_index, self.worker_count)
    }

    /// Search this request's partition on the calling thread.
    pub fn run(&self) -> (SolverOutcome, Statistics) {
        let mut searcher = Searcher::new(self.definition).with_cancellation(self.cancel);
        let outcome = match searcher.solve(self.partition()) {
            Some(state) => SolverOutcome::Solution(state),
            None => SolverOutcome::NoSolution,
        };
        (outcome, searcher.statistics().clone())
    }
}

/// Result of a search: a solved state, or no solution.
///
/// For a single partition "no solution" also covers a cancelled search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverOutcome {
    Solution(SearchState),
    NoSolution,
}

impl SolverOutcome {
    pub fn is_solution(&self) -> bool {
        matches!(self, SolverOutcome::Solution(_))
    }

    pub fn solution(&self) -> Option<&SearchState> {
        match self {
            SolverOutcome::Solution(state) => Some(state),
            SolverOutcome::NoSolution => None,
        }
    }

    pub fn into_solution(self) -> Option<SearchState> {
        match self {
            SolverOutcome::Solution(state) => Some(state),
            SolverOutcome::NoSolution => None,
        }
    }
}

impl From<Option<SearchState>> for SolverOutcome {
    fn from(state: Option<SearchState>) -> Self {
        state.map_or(SolverOutcome::NoSolution, SolverOutcome::Solution)
    }
}

/// Outcome of a parallel solve with merged statistics and wall time.
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub outcome: SolverOutcome,
    pub statistics: Statistics,
    pub elapsed: Duration,
}

#[derive(Debug, Default)]
struct WorkerSlot {
    cancel: AtomicBool,
    result: Mutex<Option<SearchState>>,
}

impl WorkerSlot {
    /// Slots are only ever written whole, so a poisoned slot is still consistent.
    fn lock_result(&self) -> MutexGuard<'_, Option<SearchState>> {
        self.result.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Runs one [`Searcher`] per partition and collects the first solution.
#[derive(Debug, Clone, Default)]
pub struct ParallelCoordinator {
    config: SolverConfig,
}

impl ParallelCoordinator {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solve with the configured number of workers.
    pub fn solve(&self, definition: &PuzzleDefinition) -> SolveReport {
        self.run(definition, self.config.workers())
    }

    /// Solve with `workers` partitions, returning only the outcome.
    pub fn solve_parallel(
        &self,
        definition: &PuzzleDefinition,
        workers: NonZeroUsize,
    ) -> SolverOutcome {
        self.run(definition, workers).outcome
    }

    /// Solve with `workers` partitions.
    ///
    /// Blocks until every worker has stopped. A panic in a worker is resumed
    /// on the calling thread.
    pub fn run(&self, definition: &PuzzleDefinition, workers: NonZeroUsize) -> SolveReport {
        let started = Instant::now();
        let count = workers.get();
        info!(workers = count, size = %definition.size(), "solving");

        let slots: Vec<WorkerSlot> = (0..count).map(|_| WorkerSlot::default()).collect();
        let mut statistics = Statistics::new();

        let found = thread::scope(|scope| {
            let handles: Vec<_> = slots
                .iter()
                .enumerate()
                .map(|(worker_index, slot)| {
                    scope.spawn(move || {
                        let request = SolverRequest {
                            definition,
                            worker_index,
                            worker_count: workers,
                            cancel: &slot.cancel,
                        };
                        let (outcome, statistics) = request.run();
                        if let SolverOutcome::Solution(state) = outcome {
                            *slot.lock_result() = Some(state);
                        }
                        statistics
                    })
                })
                .collect();

            let mut found = loop {
                if let Some(state) = take_first(&slots) {
                    break Some(state);
                }
                if handles.iter().all(|handle| handle.is_finished()) {
                    break None;
                }
                thread::sleep(self.config.poll_interval());
            };

            for slot in &slots {
                slot.cancel.store(true, Ordering::Relaxed);
            }
            trace!("cancellation requested");

            for (worker_index, handle) in handles.into_iter().enumerate() {
                match handle.join() {
                    Ok(worker_statistics) => {
                        debug!(
                            worker = worker_index,
                            nodes = worker_statistics.get(Counters::Nodes),
                            placements = worker_statistics.get(Counters::Placements),
                            cancelled = worker_statistics.get(Counters::Cancellations) > 0,
                            "worker finished"
                        );
                        statistics.merge(&worker_statistics);
                    }
                    Err(payload) => panic::resume_unwind(payload),
                }
            }

            if found.is_none() {
                found = take_first(&slots);
            }
            found
        });

        let elapsed = started.elapsed();
        info!(
            solved = found.is_some(),
            nodes = statistics.get(Counters::Nodes),
            elapsed_ms = elapsed.as_millis() as u64,
            "finished"
        );
        SolveReport {
            outcome: found.into(),
            statistics,
            elapsed,
        }
    }
}

/// Take the first result present, in worker order.
fn take_first(slots: &[WorkerSlot]) -> Option<SearchState> {
    slots.iter().find_map(|slot| slot.lock_result().take())
}
