//! Error types for grid construction.

use std::error::Error;
use std::fmt;

/// Structural problems with a candidate grid.
///
/// Raised synchronously while building a [`Grid`](crate::Grid) or a game
/// from raw nested rows. These are the only recoverable errors in the
/// system: the caller must supply a corrected grid and try again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// The grid has zero rows.
    EmptyGrid,
    /// The first row has zero columns.
    EmptyRow,
    /// A row's length differs from the first row's length.
    RaggedRow {
        /// Zero-based index of the offending row.
        index: usize,
        /// Length of the offending row.
        actual_len: usize,
        /// Length of the first row.
        expected_len: usize,
    },
    /// A grid was requested with a zero width or height.
    ZeroDimension {
        /// Requested number of columns.
        width: usize,
        /// Requested number of rows.
        height: usize,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid has no rows"),
            Self::EmptyRow => write!(f, "first row has no cells"),
            Self::RaggedRow {
                index,
                actual_len,
                expected_len,
            } => write!(
                f,
                "row {index} has length {actual_len}, expected {expected_len}"
            ),
            Self::ZeroDimension { width, height } => {
                write!(f, "grid dimensions must be non-zero, got {width}x{height}")
            }
        }
    }
}

impl Error for ValidationError {}
