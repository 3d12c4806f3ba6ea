//! Errors produced by grid addressing.
//!
//! Every error here is a violation of a calling contract, not a transient
//! condition, so none of them are worth retrying.

use std::error::Error;
use std::fmt;

/// Result type returned by fallible grid routines.
pub type CaResult<T> = Result<T, CaError>;

/// Error encountered while addressing cells in a grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CaError {
    /// A position or delta vector has a different number of components than
    /// the grid has dimensions.
    DimensionMismatch {
        /// Number of components the grid needs.
        expected: usize,
        /// Number of components that were given.
        got: usize,
    },
    /// An index is past the end of a buffer or vector.
    IndexOutOfRange {
        /// Index that was requested.
        index: usize,
        /// Length of the thing being indexed.
        len: usize,
    },
    /// A sentinel site was resolved using a boundary policy that has no
    /// sentinel cell.
    NoSentinel,
    /// A neighborhood has more cells than fit in a `usize`.
    TooManyNeighbors {
        /// Number of dimensions requested.
        order: usize,
    },
}
impl fmt::Display for CaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaError::DimensionMismatch { expected, got } => write!(
                f,
                "Dimension mismatch: expected {} components; got {}",
                expected, got,
            ),
            CaError::IndexOutOfRange { index, len } => {
                write!(f, "Index {} out of range for length {}", index, len)
            }
            CaError::NoSentinel => write!(f, "Boundary policy has no sentinel cell"),
            CaError::TooManyNeighbors { order } => {
                write!(f, "Neighborhood in {} dimensions is too large", order)
            }
        }
    }
}
impl Error for CaError {}

/// Returns a `DimensionMismatch` error unless `got == expected`.
#[inline]
pub(crate) fn check_ndim(expected: usize, got: usize) -> CaResult<()> {
    if expected == got {
        Ok(())
    } else {
        Err(CaError::DimensionMismatch { expected, got })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            "Dimension mismatch: expected 2 components; got 3",
            CaError::DimensionMismatch {
                expected: 2,
                got: 3,
            }
            .to_string(),
        );
        assert_eq!(
            "Index 9 out of range for length 4",
            CaError::IndexOutOfRange { index: 9, len: 4 }.to_string(),
        );
        assert_eq!(
            "Neighborhood in 64 dimensions is too large",
            CaError::TooManyNeighbors { order: 64 }.to_string(),
        );
    }

    #[test]
    fn test_check_ndim() {
        assert_eq!(Ok(()), check_ndim(3, 3));
        assert_eq!(
            Err(CaError::DimensionMismatch {
                expected: 1,
                got: 2
            }),
            check_ndim(1, 2),
        );
    }
}
