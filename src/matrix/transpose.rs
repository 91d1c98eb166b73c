//! Single-threaded transpose over raw row-major buffers.
//!
//! This is the oracle the parallel engines in `threaded::transpose_mt` are
//! tested and benchmarked against: no partitions, no modular arithmetic, one
//! pass over the source.

/// Write the transpose of the `rows x cols` buffer `src` into `dst`.
///
/// `dst` ends up as a `cols x rows` row-major buffer, so source element
/// `(r, c)` lands at `dst[c * rows + r]`. Walks `src` in storage order and
/// scatters into `dst`.
///
/// # Panics
///
/// If either buffer's length isn't `rows * cols`.
///
/// ```
/// use parmat::matrix::transpose::transpose;
///
/// let src = [10, 20, 30, 40, 50, 60];
/// let mut dst = [0; 6];
/// transpose(&src, &mut dst, 3, 2);
/// assert_eq!(dst, [10, 30, 50, 20, 40, 60]);
/// ```
pub fn transpose<T: Copy>(src: &[T], dst: &mut [T], rows: usize, cols: usize) {
    assert_eq!(src.len(), rows * cols, "src: expected {}x{} elements", rows, cols);
    assert_eq!(dst.len(), src.len(), "dst: expected {}x{} elements", cols, rows);

    for (offset, &value) in src.iter().enumerate() {
        let (r, c) = (offset / cols, offset % cols);
        dst[c * rows + r] = value;
    }
}
