//! Error types for the chart core.

use std::fmt;

/// Recoverable failures of the numeric core.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartError {
    /// A large value needs a suffix beyond the configured table.
    SuffixOutOfRange { exponent: i32, suffixes: usize },
    /// A flat `[x0, y0, x1, y1, ...]` buffer with an odd number of values.
    OddBufferLength(usize),
    /// An entry or data set index outside the collection.
    IndexOutOfRange { index: usize, len: usize },
    /// A transform matrix with a zero determinant.
    NonInvertible,
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartError::SuffixOutOfRange { exponent, suffixes } => write!(
                f,
                "magnitude 1e{} exceeds configured suffix table ({} suffixes)",
                exponent, suffixes
            ),
            ChartError::OddBufferLength(len) => {
                write!(f, "point buffer length {} is not a multiple of 2", len)
            }
            ChartError::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for length {}", index, len)
            }
            ChartError::NonInvertible => write!(f, "transform matrix is not invertible"),
        }
    }
}

impl std::error::Error for ChartError {}

pub type ChartResult<T> = Result<T, ChartError>;
