//! Filling a rectangular region of a [`DenseArray`].
//!
//! The region is a half-open `Range` per axis. The outer axes are swept one
//! coordinate at a time. The last axis is contiguous in storage, so each row
//! of the region is a single slice, and is filled with one call to
//! `<[T]>::fill()` rather than element by element.

use std::ops::{Range};

use super::{shape, DenseArray, Result, Storage};

impl<T: Clone, const D: usize, S: Storage<T>> DenseArray<T, D, S> {
    /// Sets every element whose coordinate along each axis `k` lies in
    /// `ranges[k]` to `value`. All other elements are left alone.
    ///
    /// A range with `start >= end` on any axis selects nothing. The ranges are
    /// not checked against the extents; an out-of-range bound fills the wrong
    /// elements or panics. Use [`try_fill_range()`] to check them first.
    ///
    /// ```
    /// use multiarray::DenseArray;
    /// let mut a: DenseArray<u8, 2> = DenseArray::new([3, 3]);
    /// a.fill_range([0..2, 1..3], 9);
    /// assert_eq!(a.as_slice(), [
    ///     0, 9, 9,
    ///     0, 9, 9,
    ///     0, 0, 0,
    /// ]);
    /// ```
    ///
    /// [`try_fill_range()`]: Self::try_fill_range
    pub fn fill_range(&mut self, ranges: [Range<usize>; D], value: T) -> &mut Self {
        log::trace!("fill_range {:?} of array with extents {:?}", ranges, self.extents());
        let mut coords = [0; D];
        self.fill_axis(0, &ranges, &mut coords, &value);
        self
    }

    /// Like [`fill_range()`], but first checks that every range satisfies
    /// `start <= end <= extent`. Nothing is written if the check fails.
    ///
    /// ```
    /// use multiarray::{DenseArray, Error};
    /// let mut a: DenseArray<u8, 2> = DenseArray::new([3, 3]);
    /// assert_eq!(
    ///     a.try_fill_range([0..2, 1..4], 9).map(|_| ()),
    ///     Err(Error::RangeOutOfBounds {axis: 1, start: 1, end: 4, extent: 3}),
    /// );
    /// assert!(a.iter().all(|&x| x == 0));
    /// ```
    ///
    /// [`fill_range()`]: Self::fill_range
    pub fn try_fill_range(&mut self, ranges: [Range<usize>; D], value: T) -> Result<&mut Self> {
        shape::check_ranges(*self.extents(), &ranges)?;
        Ok(self.fill_range(ranges, value))
    }

    /// Fills the part of the region whose coordinates before `axis` are
    /// `coords[..axis]`.
    fn fill_axis(&mut self, axis: usize, ranges: &[Range<usize>; D], coords: &mut [usize; D], value: &T) {
        if axis + 1 < D {
            for i in ranges[axis].clone() {
                coords[axis] = i;
                self.fill_axis(axis + 1, ranges, coords, value);
            }
        } else {
            let row = ranges[axis].clone();
            let count = row.len();
            self.touched += count;
            if count == 0 { return; }
            coords[axis] = row.start;
            let begin = self.index(*coords);
            self.as_mut_slice()[begin..begin + count].fill(value.clone());
        }
    }
}

// ----------------------------------------------------------------------------
