use std::error::Error;
use std::fmt;

/// Failure values shared by every fallible operation in the crate.
#[derive(Debug, Clone, PartialEq)]
pub enum LinalgError {
    /// A buffer of `len` elements cannot fill a `rows` x `cols` matrix.
    InvalidShape {
        rows: usize,
        cols: usize,
        len: usize,
    },
    /// A nested-row constructor received rows of unequal length.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Operand shapes are incompatible for the requested operation.
    DimensionMismatch {
        operation: &'static str,
        expected: (usize, usize),
        found: (usize, usize),
    },
    /// An inverse was requested on a matrix whose determinant is (near) zero.
    Singular { det: f64 },
    /// An out-of-domain flag or parameter, e.g. an unrecognized axis mode.
    InvalidArgument(String),
}

impl fmt::Display for LinalgError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LinalgError::InvalidShape { rows, cols, len } => {
                write!(f, "invalid shape ({}, {}) for buffer of length {}", rows, cols, len)
            }
            LinalgError::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} elements, expected {} (matrix rows must be equal length)",
                row, found, expected
            ),
            LinalgError::DimensionMismatch {
                operation,
                expected,
                found,
            } => write!(
                f,
                "{}: operand shape {:?} is incompatible with {:?}",
                operation, found, expected
            ),
            LinalgError::Singular { det } => {
                write!(f, "matrix is singular (determinant {:e})", det)
            }
            LinalgError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
        }
    }
}

impl Error for LinalgError {}
