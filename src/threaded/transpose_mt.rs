//! Multi-threaded in-place transpose.
//!
//! Two engines share the same fan-out: [`transpose_cyclic`] reads each
//! destination element through the cyclic permutation
//! `src = (cols * i) mod (n - 1)`, and [`transpose_direct`] decodes the
//! destination index into `(col, row)` and reads `src[row * cols + col]`.
//!
//! For an R×C source with `n = R * C`, destination index `i = c * R + r`
//! holds `src[r * C + c]`. Since `n ≡ 1 (mod n - 1)`,
//! `C * i = c * n + r * C ≡ r * C + c`, and `r * C + c < n - 1` for every
//! index except `i = n - 1`, the permutation's fixed point. That one slot is
//! copied straight across after the workers join.

use super::fan_out;
use crate::matrix::{Element, Matrix};

/// Transpose `m` in place through the cyclic index permutation.
///
/// Workers fill a fresh buffer over disjoint destination ranges; the buffer
/// then replaces `m`'s wholesale and `rows`/`cols` are swapped.
pub fn transpose_cyclic<T: Element>(m: &mut Matrix<T>) {
    let size = m.data.len();

    // 1x1 has nothing to move and no modulus to reduce by
    if size >= 2 {
        let last = size - 1;
        let cols = m.cols as u128;
        let src = &m.data;

        let mut temp = vec![T::default(); size];
        fan_out("transpose", &m.config, &mut temp, |range, dst| {
            for (i, d) in range.zip(dst.iter_mut()) {
                if i == last {
                    continue;
                }
                // widened: cols * i can exceed usize for very wide matrices
                let from = (cols * i as u128 % last as u128) as usize;
                *d = src[from];
            }
        });
        temp[last] = src[last];

        m.data = temp;
    }

    std::mem::swap(&mut m.rows, &mut m.cols);
}

/// Transpose `m` in place with the direct `(row, col)` remap.
pub fn transpose_direct<T: Element>(m: &mut Matrix<T>) {
    let (rows, cols) = (m.rows, m.cols);
    let src = &m.data;

    let mut temp = vec![T::default(); src.len()];
    fan_out("transpose_direct", &m.config, &mut temp, |range, dst| {
        for (i, d) in range.zip(dst.iter_mut()) {
            let (col, row) = (i / rows, i % rows);
            *d = src[row * cols + col];
        }
    });

    m.data = temp;
    std::mem::swap(&mut m.rows, &mut m.cols);
}
