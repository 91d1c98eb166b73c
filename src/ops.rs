//! Operator overloads.
//!
//! `&a + &b` and `&a - &b` return `Result` because the shapes may not line
//! up. Scalar multiplication works from either side for the primitive
//! numeric types; `&a * k` is defined as `k * &a`.

use std::ops::{Add, Mul, Sub};

use crate::error::Result;
use crate::matrix::{Element, Matrix};
use crate::threaded::elementwise;

impl<T: Element> Add for &Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn add(self, rhs: &Matrix<T>) -> Self::Output {
        elementwise::add(self, rhs)
    }
}

impl<T: Element> Sub for &Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn sub(self, rhs: &Matrix<T>) -> Self::Output {
        elementwise::subtract(self, rhs)
    }
}

impl<T: Element> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, k: T) -> Matrix<T> {
        elementwise::scalar_multiply(k, self)
    }
}

impl<T: Element> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, k: T) -> Matrix<T> {
        elementwise::scalar_multiply(k, &self)
    }
}

macro_rules! impl_scalar_lhs {
    ($($t:ty),*) => {
        $(
            impl Mul<&Matrix<$t>> for $t {
                type Output = Matrix<$t>;

                fn mul(self, rhs: &Matrix<$t>) -> Matrix<$t> {
                    elementwise::scalar_multiply(self, rhs)
                }
            }

            impl Mul<Matrix<$t>> for $t {
                type Output = Matrix<$t>;

                fn mul(self, rhs: Matrix<$t>) -> Matrix<$t> {
                    elementwise::scalar_multiply(self, &rhs)
                }
            }
        )*
    };
}

impl_scalar_lhs!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
