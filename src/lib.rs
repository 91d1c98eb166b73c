//! Dense matrices whose arithmetic fans out across worker threads.
//!
//! Every operation splits the flat element range `[0, rows * cols)` into one
//! contiguous partition per worker, gives each worker an exclusive slice of
//! the output, and blocks until they all finish. Partitions are disjoint by
//! construction, so there are no locks anywhere on the write path.
//!
//! ## Usage
//!
//! ```
//! use parmat::Matrix;
//!
//! let a: Matrix<i32> = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
//! let b = Matrix::from_vec(2, 2, vec![5, 6, 7, 8]).unwrap();
//!
//! assert_eq!((&a + &b).unwrap().as_slice(), &[6, 8, 10, 12]);
//! assert_eq!((&a - &b).unwrap().as_slice(), &[-4, -4, -4, -4]);
//! assert_eq!((3 * &a).as_slice(), &[3, 6, 9, 12]);
//! ```
//!
//! Worker count defaults to the host's hardware concurrency and can be
//! pinned per matrix:
//!
//! ```
//! use parmat::{Matrix, ParallelConfig};
//!
//! let mut m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6])
//!     .unwrap()
//!     .with_config(ParallelConfig::new(2));
//!
//! m.transpose();
//! assert_eq!(m.shape(), (3, 2));
//! assert_eq!(m.as_slice(), &[1, 4, 2, 5, 3, 6]);
//! ```
//!
//! ## What's inside
//!
//! - Balanced partition planner (sizes differ by at most one)
//! - Scoped fan-out/join over disjoint output slices
//! - Cyclic-permutation transpose, plus a direct-remap one to check it against
//! - CSV loading with located parse errors

pub mod config;
pub mod error;
pub mod matrix;
pub mod ops;
pub mod partition;
pub mod threaded;

pub use config::ParallelConfig;
pub use error::{MatrixError, Result};
pub use matrix::{Element, Matrix};
pub use partition::{Partition, partitions, plan_partitions};
pub use threaded::elementwise::{add, scalar_multiply, subtract};
