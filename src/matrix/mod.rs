//! The dense matrix entity and its sequential helpers.
//!
//! A [`Matrix`] owns a row-major buffer of exactly `rows * cols` elements and
//! the [`ParallelConfig`] its operations fan out with. Arithmetic lives in
//! [`crate::threaded`]; this module covers construction, element access and
//! the text surface in [`io`].

pub mod io;
pub mod transpose;

use std::fmt::{Debug, Display};
use std::ops::{Add, Index, IndexMut, Mul, Sub};

use crate::config::ParallelConfig;
use crate::error::{MatrixError, Result};
use crate::threaded::{elementwise, transpose_mt};

/// Element types a [`Matrix`] can hold.
///
/// `Default` supplies the zero for [`Matrix::zeros`]. Blanket-implemented for
/// every type with the listed bounds, so `i32`, `i64`, `f32`, `f64` and
/// friends all qualify.
pub trait Element:
    Copy
    + Default
    + Send
    + Sync
    + PartialEq
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
{
}

impl<T> Element for T where
    T: Copy
        + Default
        + Send
        + Sync
        + PartialEq
        + Debug
        + Display
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
{
}

/// Dense row-major matrix.
///
/// Element `(row, col)` lives at offset `row * cols + col`.
///
/// # Example
///
/// ```
/// use parmat::Matrix;
///
/// let a = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
/// let b = Matrix::from_vec(2, 2, vec![5, 6, 7, 8]).unwrap();
///
/// let sum = a.add(&b).unwrap();
/// assert_eq!(sum.as_slice(), &[6, 8, 10, 12]);
/// ```
#[derive(Debug, Clone)]
pub struct Matrix<T> {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) data: Vec<T>,
    pub(crate) config: ParallelConfig,
}

/// Element count of a `rows x cols` matrix.
///
/// Zero dimensions and products that overflow `usize` are `InvalidShape`.
pub(crate) fn check_shape(rows: usize, cols: usize) -> Result<usize> {
    if rows == 0 || cols == 0 {
        return Err(MatrixError::InvalidShape { rows, cols });
    }
    rows.checked_mul(cols)
        .ok_or(MatrixError::InvalidShape { rows, cols })
}

impl<T: Element> Matrix<T> {
    /// Zero-filled `rows x cols` matrix with one worker per hardware thread.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        let size = check_shape(rows, cols)?;
        Ok(Self::from_parts(
            rows,
            cols,
            vec![T::default(); size],
            ParallelConfig::default(),
        ))
    }

    /// Matrix over `data` laid out row-major.
    ///
    /// # Errors
    ///
    /// `InvalidShape` for a zero dimension, `LengthMismatch` if
    /// `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        let size = check_shape(rows, cols)?;
        if data.len() != size {
            return Err(MatrixError::LengthMismatch {
                expected: size,
                actual: data.len(),
            });
        }
        Ok(Self::from_parts(rows, cols, data, ParallelConfig::default()))
    }

    pub fn from_slice(rows: usize, cols: usize, data: &[T]) -> Result<Self> {
        Self::from_vec(rows, cols, data.to_vec())
    }

    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<T>, config: ParallelConfig) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self {
            rows,
            cols,
            data,
            config,
        }
    }

    /// Same matrix, fanning out with `config` from now on.
    pub fn with_config(mut self, config: ParallelConfig) -> Self {
        self.config = config;
        self
    }

    /// Shorthand for `with_config(config.with_workers(workers))`.
    pub fn with_workers(self, workers: usize) -> Self {
        let config = self.config.with_workers(workers);
        self.with_config(config)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of elements, `rows * cols`.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Partitions each operation on this matrix is split into.
    pub fn worker_count(&self) -> usize {
        self.config.workers()
    }

    pub fn config(&self) -> &ParallelConfig {
        &self.config
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row < self.rows && col < self.cols {
            self.data.get_mut(row * self.cols + col)
        } else {
            None
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Overwrite every element from `values` (row-major).
    ///
    /// Leaves the matrix untouched and returns `LengthMismatch` when
    /// `values.len() != rows * cols`.
    pub fn assign_from_slice(&mut self, values: &[T]) -> Result<()> {
        if values.len() != self.data.len() {
            return Err(MatrixError::LengthMismatch {
                expected: self.data.len(),
                actual: values.len(),
            });
        }
        self.data.copy_from_slice(values);
        Ok(())
    }

    /// Elementwise `self + other` as a new matrix.
    pub fn add(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        elementwise::add(self, other)
    }

    /// Elementwise `self - other` as a new matrix.
    pub fn subtract(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        elementwise::subtract(self, other)
    }

    /// `k * self` as a new matrix.
    pub fn scale(&self, k: T) -> Matrix<T> {
        elementwise::scalar_multiply(k, self)
    }

    /// Transpose in place using the parallel cyclic-permutation remap.
    ///
    /// Swaps `rows` and `cols` and replaces the whole buffer.
    ///
    /// ```
    /// use parmat::Matrix;
    ///
    /// let mut m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
    /// m.transpose();
    /// assert_eq!(m.shape(), (3, 2));
    /// assert_eq!(m.as_slice(), &[1, 4, 2, 5, 3, 6]);
    /// ```
    pub fn transpose(&mut self) -> &mut Self {
        transpose_mt::transpose_cyclic(self);
        self
    }

    /// Transpose in place using the parallel direct `(row, col)` remap.
    pub fn transpose_direct(&mut self) -> &mut Self {
        transpose_mt::transpose_direct(self);
        self
    }

    /// Transposed copy; `self` is left as is.
    pub fn transposed(&self) -> Matrix<T> {
        let mut out = self.clone();
        out.transpose();
        out
    }
}

/// Shape and contents only; the worker config doesn't take part.
impl<T: PartialEq> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.data == other.data
    }
}

impl<T: Eq> Eq for Matrix<T> {}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        &mut self.data[row * self.cols + col]
    }
}
