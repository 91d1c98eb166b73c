//! Comma-separated text in, comma-separated text out.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use super::{Element, Matrix, check_shape};
use crate::config::ParallelConfig;
use crate::error::{MatrixError, Result};

const INITIAL_CAPACITY: usize = 4096;

impl<T: Element + FromStr> Matrix<T> {
    /// Load `rows * cols` comma-separated values from a file, row-major.
    ///
    /// Line breaks count as separators, and empty tokens (trailing commas)
    /// are skipped, so the output of [`Matrix::render`] loads back.
    ///
    /// # Errors
    ///
    /// `SourceUnavailable` if the file can't be opened, `MalformedToken` with
    /// the logical position of the first unparsable token, `LengthMismatch`
    /// if the token count isn't `rows * cols`.
    pub fn from_csv_path(path: impl AsRef<Path>, rows: usize, cols: usize) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| MatrixError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loading {}x{} matrix from {}", rows, cols, path.display());
        Self::from_csv_reader(BufReader::new(file), rows, cols)
    }

    /// Same as [`Matrix::from_csv_path`] over any buffered reader.
    pub fn from_csv_reader<R: BufRead>(reader: R, rows: usize, cols: usize) -> Result<Self> {
        let expected = check_shape(rows, cols)?;
        // declared dimensions aren't trusted until the tokens show up
        let mut data = Vec::with_capacity(expected.min(INITIAL_CAPACITY));
        let mut seen = 0;

        for line in reader.lines() {
            let line = line?;
            for token in line.split(',').map(str::trim).filter(|t| !t.is_empty()) {
                if seen < expected {
                    let value = token.parse::<T>().map_err(|_| MatrixError::MalformedToken {
                        row: seen / cols,
                        col: seen % cols,
                        token: token.to_string(),
                    })?;
                    data.push(value);
                }
                seen += 1;
            }
        }

        if seen != expected {
            return Err(MatrixError::LengthMismatch {
                expected,
                actual: seen,
            });
        }
        Ok(Self::from_parts(rows, cols, data, ParallelConfig::default()))
    }

    pub fn from_csv_str(text: &str, rows: usize, cols: usize) -> Result<Self> {
        Self::from_csv_reader(text.as_bytes(), rows, cols)
    }
}

impl<T: Element> Matrix<T> {
    /// One line per row, values separated by `", "`.
    ///
    /// ```
    /// use parmat::Matrix;
    ///
    /// let m = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
    /// assert_eq!(m.render(), "1, 2\n3, 4\n");
    /// ```
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl<T: Element> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.cols) {
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
