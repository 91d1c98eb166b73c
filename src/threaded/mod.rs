//! Multi-threaded matrix operations.
//!
//! Every operation splits its destination buffer with
//! [`crate::partition::partitions`] and hands each worker an exclusive
//! sub-slice, so workers never write to the same element and no locking is
//! involved. Workers are scoped threads joined before the call returns.
//!
//! Available implementations:
//! - `elementwise`: add, subtract, scalar multiply
//! - `transpose_mt`: cyclic-permutation and direct-remap transpose

pub mod elementwise;
pub mod transpose_mt;

use std::ops::Range;
use std::thread;

use crate::config::ParallelConfig;
use crate::partition::{partitions, split_by_partitions};

/// Run `kernel` over `dst`, one call per non-empty partition.
///
/// `kernel` gets the global index range and the matching slice of `dst`.
/// Small buffers (see [`ParallelConfig::runs_sequentially`]) get a single
/// call on the calling thread. Blocks until every worker has finished; a
/// panicking worker is re-raised here after the others are joined.
pub(crate) fn fan_out<T, F>(op: &str, config: &ParallelConfig, dst: &mut [T], kernel: F)
where
    T: Send,
    F: Fn(Range<usize>, &mut [T]) + Sync,
{
    let size = dst.len();

    if config.runs_sequentially(size) {
        log::debug!("{}: {} elements on calling thread", op, size);
        kernel(0..size, dst);
        return;
    }

    let parts = partitions(size, config.workers());
    log::debug!("{}: {} elements across {} workers", op, size, parts.len());

    let kernel = &kernel;
    thread::scope(|scope| {
        for (tid, (part, chunk)) in split_by_partitions(dst, &parts).into_iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            log::trace!("{}: worker {} takes [{}, {})", op, tid, part.lower, part.upper);
            scope.spawn(move || kernel(part.range(), chunk));
        }
    });
}
