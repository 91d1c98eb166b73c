//! Error types for matrix construction and arithmetic.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for matrix operations
pub type Result<T> = std::result::Result<T, MatrixError>;

/// Errors that can occur while building or combining matrices.
///
/// Every variant is reported before any destination buffer is produced, so a
/// failed call never leaves a half-filled matrix behind.
#[derive(Debug, Error)]
pub enum MatrixError {
    /// Operands of an elementwise operation have different shapes.
    #[error("Dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        /// Shape of the left operand as (rows, cols)
        expected: (usize, usize),
        /// Shape of the right operand as (rows, cols)
        actual: (usize, usize),
    },

    /// Delimited source could not be opened
    #[error("Cannot open {}: {source}", .path.display())]
    SourceUnavailable {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Read failed after the source was opened
    #[error("Read error: {0}")]
    Read(#[from] io::Error),

    /// A token is not a valid literal for the element type
    #[error("Malformed token {token:?} at row {row}, column {col}")]
    MalformedToken {
        /// Row of the offending token
        row: usize,
        /// Column of the offending token
        col: usize,
        /// Raw token text
        token: String,
    },

    /// Element count does not match `rows * cols`
    #[error("Length mismatch: expected {expected} elements, got {actual}")]
    LengthMismatch {
        /// rows * cols
        expected: usize,
        /// Elements supplied
        actual: usize,
    },

    /// Zero rows or zero columns
    #[error("Invalid shape {rows}x{cols}: dimensions must be positive")]
    InvalidShape {
        /// Requested rows
        rows: usize,
        /// Requested columns
        cols: usize,
    },
}
