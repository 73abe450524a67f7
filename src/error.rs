//! Errors reported by the checked (`try_*`) operations of [`DenseArray`].
//!
//! The unchecked operations never return these; they panic or silently
//! address a different element instead.
//!
//! [`DenseArray`]: super::DenseArray

use thiserror::Error;

/// Why a checked operation on a [`DenseArray`] was refused.
///
/// Every checked operation reports its error before writing anything.
///
/// [`DenseArray`]: super::DenseArray
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("rank mismatch: expected {expected} extents, got {got}")]
    RankMismatch { expected: usize, got: usize },

    #[error("index {index} is out of bounds for axis {axis} with extent {extent}")]
    IndexOutOfBounds { axis: usize, index: usize, extent: usize },

    #[error("range {start}..{end} is out of bounds for axis {axis} with extent {extent}")]
    RangeOutOfBounds { axis: usize, start: usize, end: usize, extent: usize },

    #[error("axis {axis} is invalid for an array of rank {rank}")]
    InvalidAxis { axis: usize, rank: usize },

    #[error("storage holds {got} elements but the extents require {expected}")]
    LengthMismatch { expected: usize, got: usize },

    #[error("the number of elements for extents {sizes:?} overflows usize")]
    SizeOverflow { sizes: Vec<usize> },
}

/// Result type of the checked operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

// ----------------------------------------------------------------------------
