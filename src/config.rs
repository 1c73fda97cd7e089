// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Solver configuration.

use std::num::NonZeroUsize;
use std::thread;
use std::time::Duration;

/// How often the coordinator inspects worker results by default.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Settings for a parallel solve.
///
/// ```
/// use star_battle::SolverConfig;
/// use std::num::NonZeroUsize;
/// use std::time::Duration;
///
/// let config = SolverConfig::default()
///     .with_workers(NonZeroUsize::new(4).unwrap())
///     .with_poll_interval(Duration::from_millis(10));
/// assert_eq!(config.workers().get(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    workers: NonZeroUsize,
    poll_interval: Duration,
}

impl SolverConfig {
    pub fn new(workers: NonZeroUsize, poll_interval: Duration) -> Self {
        Self {
            workers,
            poll_interval,
        }
    }

    pub fn with_workers(mut self, workers: NonZeroUsize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub fn workers(&self) -> NonZeroUsize {
        self.workers
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }
}

impl Default for SolverConfig {
    /// One worker per available core, polled every 100 ms.
    fn default() -> Self {
        Self::new(default_workers(), DEFAULT_POLL_INTERVAL)
    }
}

/// Available hardware parallelism, or 1 if it cannot be determined.
pub fn default_workers() -> NonZeroUsize {
    thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
}
