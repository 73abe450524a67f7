//! Row-major address arithmetic over a list of extents.
//!
//! The last axis is contiguous. Axis `k` has stride equal to the product of
//! the extents of axes `k + 1 .. D`. Nothing here is cached: every function
//! recomputes what it needs from `sizes`, in `O(D)` time.

use std::ops::{Range};

use super::{Error, Result};

/// Returns the number of elements of an array with extents `sizes`.
///
/// Panics if the product overflows `usize`.
pub fn length<const D: usize>(sizes: [usize; D]) -> usize {
    match checked_length(&sizes) {
        Some(length) => length,
        None => panic!("Extents {:?} have too many elements", sizes),
    }
}

/// Returns the number of elements of an array with extents `sizes`, or `None`
/// if that number overflows `usize`.
pub fn checked_length(sizes: &[usize]) -> Option<usize> {
    sizes.iter().try_fold(1usize, |acc, &size| acc.checked_mul(size))
}

/// Returns the distance in storage between neighbouring elements along `axis`.
///
/// The product wraps on overflow, which can only happen when some extent is
/// zero and the array is empty.
///
/// ```
/// use multiarray::shape;
/// assert_eq!(shape::stride([2, 3, 4], 0), 12);
/// assert_eq!(shape::stride([2, 3, 4], 1), 4);
/// assert_eq!(shape::stride([2, 3, 4], 2), 1);
/// ```
pub fn stride<const D: usize>(sizes: [usize; D], axis: usize) -> usize {
    sizes[axis + 1..].iter().fold(1usize, |acc, &size| acc.wrapping_mul(size))
}

/// Returns the strides of all axes. Overflow wraps, as in [`stride()`].
pub fn strides<const D: usize>(sizes: [usize; D]) -> [usize; D] {
    let mut strides = [1usize; D];
    for axis in (0..D.saturating_sub(1)).rev() {
        strides[axis] = strides[axis + 1].wrapping_mul(sizes[axis + 1]);
    }
    strides
}

/// Returns `Σ coords[k] * stride(sizes, k)`.
///
/// The coordinates are not checked against `sizes`.
///
/// ```
/// use multiarray::shape;
/// assert_eq!(shape::offset([2, 3, 4], [1, 2, 3]), 23);
/// ```
#[inline]
pub fn offset<const D: usize>(sizes: [usize; D], coords: [usize; D]) -> usize {
    let mut index = 0;
    for axis in 0..D {
        index = index * sizes[axis] + coords[axis];
    }
    index
}

/// The inverse of [`offset()`]: returns the coordinates of the element at
/// `offset`.
///
/// The result is meaningful only if `offset < length(sizes)`.
pub fn coords<const D: usize>(sizes: [usize; D], offset: usize) -> [usize; D] {
    let mut coords = [0; D];
    let mut rest = offset;
    for axis in (0..D).rev() {
        if sizes[axis] == 0 { return coords; }
        coords[axis] = rest % sizes[axis];
        rest /= sizes[axis];
    }
    coords
}

// ----------------------------------------------------------------------------

/// Checks every coordinate against the corresponding extent.
pub fn check_coords<const D: usize>(sizes: [usize; D], coords: [usize; D]) -> Result<()> {
    for axis in 0..D {
        if coords[axis] >= sizes[axis] {
            return Err(Error::IndexOutOfBounds {axis, index: coords[axis], extent: sizes[axis]});
        }
    }
    Ok(())
}

/// Checks that every range satisfies `start <= end <= extent`.
pub fn check_ranges<const D: usize>(sizes: [usize; D], ranges: &[Range<usize>; D]) -> Result<()> {
    for axis in 0..D {
        let (start, end) = (ranges[axis].start, ranges[axis].end);
        if start > end || end > sizes[axis] {
            return Err(Error::RangeOutOfBounds {axis, start, end, extent: sizes[axis]});
        }
    }
    Ok(())
}

// ----------------------------------------------------------------------------
