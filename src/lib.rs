//! Dense multi-dimensional arrays whose rank is fixed at compile time.
//!
//! [`DenseArray<T, D, S>`] represents an array of `T` with `D` axes. The `T`
//! values are stored in a single contiguous buffer `S`, row-major, i.e. the
//! last axis varies fastest. The buffer type can be any [`Storage`]; by default
//! it is a [`Vec<T>`].
//!
//! Elements are addressed by `[usize; D]`, so the number of coordinates always
//! matches the rank. The coordinates are not individually checked on the fast
//! path: the caller is expected to keep them in range. Element access and
//! range fill have `try_` twins that check their arguments and return an
//! [`Error`] instead.
//!
//! Besides element access, the main operations are [`DenseArray::fill()`],
//! which overwrites every element, and [`DenseArray::fill_range()`], which
//! overwrites a rectangular region using one bulk write per contiguous row.
//!
//! ```
//! use multiarray::dense_array;
//! let mut grid = dense_array![f64; 4, 5, 6];
//! grid.fill(1.0);
//! grid.fill_range([1..3, 0..5, 2..6], 0.5);
//! assert_eq!(grid[[1, 4, 2]], 0.5);
//! assert_eq!(grid[[0, 4, 2]], 1.0);
//! assert_eq!(grid.index([1, 4, 2]), 1 * 30 + 4 * 6 + 2);
//! ```

mod error;
pub use error::{Error, Result};

pub mod shape;

mod storage;
pub use storage::{Storage};

mod array;
pub use array::{DenseArray};

mod fill;

mod property_tests;

/// Constructs a default-filled [`DenseArray`] from its element type and
/// extents. The rank is the number of extents.
///
/// An optional storage type may follow the element type.
///
/// ```
/// use multiarray::{dense_array, DenseArray};
/// let a: DenseArray<i32, 3> = dense_array![i32; 2, 3, 4];
/// assert_eq!(a.len(), 24);
/// let b: DenseArray<u8, 2, Box<[u8]>> = dense_array![u8, Box<[u8]>; 3, 3];
/// assert_eq!(b.len(), 9);
/// ```
#[macro_export]
macro_rules! dense_array {
    ($t:ty; $($size:expr),+ $(,)?) => {
        $crate::dense_array!($t, ::std::vec::Vec<$t>; $($size),+)
    };
    ($t:ty, $s:ty; $($size:expr),+ $(,)?) => {
        $crate::DenseArray::<$t, { [$(stringify!($size)),+].len() }, $s>::from_sizes([$($size),+])
    };
}
