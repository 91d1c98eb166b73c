//! Elementwise add/subtract and scalar multiply.

use super::fan_out;
use crate::error::{MatrixError, Result};
use crate::matrix::{Element, Matrix};

/// Apply `op` to each pair of elements of two same-shaped matrices.
///
/// The result is a new matrix with `a`'s config. Shapes are checked before
/// anything is allocated.
///
/// # Errors
///
/// `DimensionMismatch` if `a` and `b` differ in rows or columns.
pub fn apply_binary<T, F>(name: &str, op: F, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>>
where
    T: Element,
    F: Fn(T, T) -> T + Sync,
{
    if a.shape() != b.shape() {
        return Err(MatrixError::DimensionMismatch {
            expected: a.shape(),
            actual: b.shape(),
        });
    }

    let mut out = vec![T::default(); a.len()];
    fan_out(name, &a.config, &mut out, |range, dst| {
        let lhs = &a.data[range.clone()];
        let rhs = &b.data[range];
        for ((d, &x), &y) in dst.iter_mut().zip(lhs).zip(rhs) {
            *d = op(x, y);
        }
    });

    Ok(Matrix::from_parts(a.rows, a.cols, out, a.config))
}

/// Apply `op` to each element of `a`.
pub fn apply_unary<T, F>(name: &str, op: F, a: &Matrix<T>) -> Matrix<T>
where
    T: Element,
    F: Fn(T) -> T + Sync,
{
    let mut out = vec![T::default(); a.len()];
    fan_out(name, &a.config, &mut out, |range, dst| {
        for (d, &x) in dst.iter_mut().zip(&a.data[range]) {
            *d = op(x);
        }
    });

    Matrix::from_parts(a.rows, a.cols, out, a.config)
}

/// `a + b`, elementwise.
pub fn add<T: Element>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    apply_binary("add", |x, y| x + y, a, b)
}

/// `a - b`, elementwise.
pub fn subtract<T: Element>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    apply_binary("subtract", |x, y| x - y, a, b)
}

/// `k * a`. Right-multiplication goes through here too.
pub fn scalar_multiply<T: Element>(k: T, a: &Matrix<T>) -> Matrix<T> {
    apply_unary("scalar_multiply", move |x| k * x, a)
}
