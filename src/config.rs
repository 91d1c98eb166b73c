//! Worker-count and threshold settings captured by each matrix.

use std::env;
use std::num::NonZeroUsize;
use std::thread;

/// Sizes at or below this run on the calling thread.
pub const DEFAULT_SEQUENTIAL_THRESHOLD: usize = 10;

/// Environment variable overriding the worker count.
pub const WORKERS_ENV: &str = "PARMAT_WORKERS";

/// Environment variable overriding the sequential threshold.
pub const THRESHOLD_ENV: &str = "PARMAT_SEQUENTIAL_THRESHOLD";

/// How an operation splits its element range.
///
/// `workers` is the number of partitions (and scoped tasks) each operation
/// fans out to. It is always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParallelConfig {
    workers: usize,
    sequential_threshold: usize,
}

impl ParallelConfig {
    /// Config with an explicit worker count and the default threshold.
    ///
    /// A worker count of 0 is clamped to 1.
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
            sequential_threshold: DEFAULT_SEQUENTIAL_THRESHOLD,
        }
    }

    /// One worker per hardware execution context.
    pub fn hardware() -> Self {
        Self::new(hardware_concurrency())
    }

    /// Hardware defaults, overridden by `PARMAT_WORKERS` and
    /// `PARMAT_SEQUENTIAL_THRESHOLD` when they parse.
    pub fn from_env() -> Self {
        let mut config = Self::hardware();
        if let Some(workers) = read_env_usize(WORKERS_ENV) {
            config = config.with_workers(usable_workers(WORKERS_ENV, workers));
        }
        if let Some(threshold) = read_env_usize(THRESHOLD_ENV) {
            config = config.with_sequential_threshold(threshold);
        }
        config
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn with_sequential_threshold(mut self, threshold: usize) -> Self {
        self.sequential_threshold = threshold;
        self
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn sequential_threshold(&self) -> usize {
        self.sequential_threshold
    }

    /// Whether a range of `size` elements stays on the calling thread.
    pub fn runs_sequentially(&self, size: usize) -> bool {
        size <= self.sequential_threshold || self.workers == 1
    }
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self::hardware()
    }
}

/// Number of hardware execution contexts, or 1 if the host can't say.
pub fn hardware_concurrency() -> usize {
    thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

fn usable_workers(key: &str, workers: usize) -> usize {
    if workers == 0 {
        log::warn!("{}=0 is not a usable worker count, using 1", key);
        return 1;
    }
    workers
}

fn read_env_usize(key: &str) -> Option<usize> {
    let raw = env::var(key).ok()?;
    match raw.trim().parse::<usize>() {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("ignoring {}={:?}: {}", key, raw, err);
            None
        }
    }
}
