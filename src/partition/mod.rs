//! Splitting a flat index range into per-worker partitions.
//!
//! The planner is a pure function of `(size, workers)`: boundary placement
//! never depends on scheduling, so every run with the same inputs hands each
//! worker the same indices.

use std::ops::Range;

/// Half-open interval `[lower, upper)` of flat buffer indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    pub lower: usize,
    pub upper: usize,
}

impl Partition {
    pub fn len(&self) -> usize {
        self.upper - self.lower
    }

    pub fn is_empty(&self) -> bool {
        self.lower == self.upper
    }

    pub fn range(&self) -> Range<usize> {
        self.lower..self.upper
    }
}

/// Boundaries for splitting `size` elements across `workers` partitions.
///
/// Returns `workers + 1` non-decreasing boundaries starting at 0 and ending
/// at `size`. The first `size % workers` partitions get one extra element,
/// so partition sizes differ by at most 1. With `workers > size` the tail
/// partitions are empty.
///
/// # Panics
///
/// Panics if `workers` is 0.
///
/// # Example
///
/// ```
/// use parmat::plan_partitions;
///
/// assert_eq!(plan_partitions(10, 4), vec![0, 3, 6, 8, 10]);
/// assert_eq!(plan_partitions(2, 4), vec![0, 1, 2, 2, 2]);
/// ```
pub fn plan_partitions(size: usize, workers: usize) -> Vec<usize> {
    assert!(workers > 0, "at least one worker is required");

    let base = size / workers;
    let remainder = size - base * workers;

    let mut bounds = Vec::with_capacity(workers + 1);
    let mut bound = 0;
    bounds.push(bound);
    for i in 0..workers {
        bound += if i < remainder { base + 1 } else { base };
        bounds.push(bound);
    }
    bounds
}

/// Same plan as [`plan_partitions`], as `Partition` values.
pub fn partitions(size: usize, workers: usize) -> Vec<Partition> {
    plan_partitions(size, workers)
        .windows(2)
        .map(|w| Partition {
            lower: w[0],
            upper: w[1],
        })
        .collect()
}

/// Carve `dst` into one exclusive sub-slice per partition.
///
/// Each returned slice covers exactly `partition.range()` of `dst`. The
/// partitions must be contiguous and cover `dst` from index 0, which is what
/// [`partitions`] produces for `dst.len()`.
pub fn split_by_partitions<'a, T>(
    mut dst: &'a mut [T],
    parts: &[Partition],
) -> Vec<(Partition, &'a mut [T])> {
    let mut out = Vec::with_capacity(parts.len());
    for &part in parts {
        let (head, tail) = dst.split_at_mut(part.len());
        out.push((part, head));
        dst = tail;
    }
    debug_assert!(dst.is_empty(), "partitions must cover the whole slice");
    out
}
