use std::marker::{PhantomData};

use super::{shape, Error, Result, Storage};

/// A dense array of `T`s with `D` axes, stored row-major in an `S`.
///
/// The extents are fixed at construction, and so is the number of elements.
/// Afterwards, elements can only be overwritten.
///
/// Element access takes exactly `D` coordinates, so passing the wrong number
/// is a type error. The coordinates are not checked against the extents; see
/// [`DenseArray::get()`] and the checked variants such as
/// [`DenseArray::try_get()`].
///
/// ```
/// use multiarray::DenseArray;
/// let mut a: DenseArray<f32, 2> = DenseArray::new([2, 3]);
/// a[[1, 2]] = 5.0;
/// assert_eq!(a.as_slice(), [0.0, 0.0, 0.0, 0.0, 0.0, 5.0]);
/// ```
#[derive(Debug, Clone)]
pub struct DenseArray<T, const D: usize, S: Storage<T> = Vec<T>> {
    sizes: [usize; D],
    items: S,
    pub(crate) touched: usize,
    marker: PhantomData<T>,
}

impl<T, const D: usize, S: Storage<T>> DenseArray<T, D, S> {
    const NONZERO_RANK: () = assert!(D > 0, "A DenseArray must have at least one axis");

    fn new_inner(sizes: [usize; D], items: S) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NONZERO_RANK;
        debug_assert_eq!(items.as_ref().len(), shape::length(sizes));
        log::debug!("new {}-dimensional array with extents {:?}", D, sizes);
        Self {sizes, items, touched: 0, marker: PhantomData}
    }

    /// Constructs an array with extents `sizes` whose elements are computed
    /// from their coordinates.
    ///
    /// `f` is called exactly once per element, in storage order.
    ///
    /// ```
    /// use multiarray::DenseArray;
    /// let a: DenseArray<(usize, usize), 2> = DenseArray::from_fn([2, 2], |[i, j]| (i, j));
    /// assert_eq!(a.as_slice(), [(0, 0), (0, 1), (1, 0), (1, 1)]);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the number of elements overflows `usize`.
    pub fn from_fn(sizes: [usize; D], mut f: impl FnMut([usize; D]) -> T) -> Self {
        let items = S::from_fn(shape::length(sizes), |i| f(shape::coords(sizes, i)));
        Self::new_inner(sizes, items)
    }

    /// Constructs an array with extents `sizes` filled with `T::default()`.
    ///
    /// This works for any [`Storage`]. For `Vec` storage, [`DenseArray::new()`]
    /// is shorter.
    pub fn from_sizes(sizes: [usize; D]) -> Self where T: Default {
        let items = S::from_fn(shape::length(sizes), |_| T::default());
        Self::new_inner(sizes, items)
    }

    /// Constructs an array with extents `sizes` filled with copies of `value`.
    pub fn from_elem(sizes: [usize; D], value: T) -> Self where T: Clone {
        let items = S::from_fn(shape::length(sizes), |_| value.clone());
        Self::new_inner(sizes, items)
    }

    /// Wraps an existing buffer, whose length must be the product of `sizes`.
    ///
    /// ```
    /// use multiarray::{DenseArray, Error};
    /// let a: DenseArray<u8, 2> = DenseArray::from_storage([2, 2], vec![1, 2, 3, 4]).unwrap();
    /// assert_eq!(a[[1, 0]], 3);
    /// let e = DenseArray::<u8, 2>::from_storage([2, 2], vec![1, 2, 3]).unwrap_err();
    /// assert_eq!(e, Error::LengthMismatch {expected: 4, got: 3});
    /// ```
    pub fn from_storage(sizes: [usize; D], items: S) -> Result<Self> {
        let expected = shape::checked_length(&sizes)
            .ok_or_else(|| Error::SizeOverflow {sizes: sizes.to_vec()})?;
        let got = items.as_ref().len();
        if got != expected { return Err(Error::LengthMismatch {expected, got}); }
        Ok(Self::new_inner(sizes, items))
    }

    /// Constructs a default-filled array from extents whose number is only
    /// known at run time.
    ///
    /// Fails if `sizes.len() != D`, or if the number of elements overflows.
    ///
    /// ```
    /// use multiarray::{DenseArray, Error};
    /// let a = DenseArray::<i32, 3>::try_from_slice(&[2, 3, 4]).unwrap();
    /// assert_eq!(a.len(), 24);
    /// let e = DenseArray::<i32, 3>::try_from_slice(&[2, 3]).unwrap_err();
    /// assert_eq!(e, Error::RankMismatch {expected: 3, got: 2});
    /// ```
    pub fn try_from_slice(sizes: &[usize]) -> Result<Self> where T: Default {
        let sizes: [usize; D] = sizes.try_into()
            .map_err(|_| Error::RankMismatch {expected: D, got: sizes.len()})?;
        let length = shape::checked_length(&sizes)
            .ok_or_else(|| Error::SizeOverflow {sizes: sizes.to_vec()})?;
        Ok(Self::new_inner(sizes, S::from_fn(length, |_| T::default())))
    }

    /// Returns the backing buffer.
    pub fn into_storage(self) -> S { self.items }

    // ------------------------------------------------------------------------

    /// The number of axes.
    pub const fn rank(&self) -> usize { D }

    /// The extent along `axis`.
    ///
    /// Panics if `axis >= D`.
    pub fn extent(&self, axis: usize) -> usize { self.sizes[axis] }

    /// The extent along `axis`, or an error if `axis >= D`.
    pub fn try_extent(&self, axis: usize) -> Result<usize> {
        self.sizes.get(axis).copied().ok_or(Error::InvalidAxis {axis, rank: D})
    }

    /// The extents of all axes.
    pub fn extents(&self) -> &[usize; D] { &self.sizes }

    /// The number of elements, which is the product of the extents.
    pub fn len(&self) -> usize { self.items.as_ref().len() }

    /// Returns `true` if some extent is zero.
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    // ------------------------------------------------------------------------

    /// Returns the position in storage of the element at `coords`.
    ///
    /// This is `Σ coords[k] * self.stride(k)`. The coordinates are not
    /// checked, so the result is only meaningful if they are in range.
    ///
    /// ```
    /// use multiarray::DenseArray;
    /// let a: DenseArray<u8, 3> = DenseArray::new([2, 3, 4]);
    /// assert_eq!(a.index([1, 2, 3]), 23);
    /// ```
    #[inline]
    pub fn index(&self, coords: [usize; D]) -> usize { shape::offset(self.sizes, coords) }

    /// The inverse of [`index()`](Self::index).
    pub fn coords(&self, index: usize) -> [usize; D] { shape::coords(self.sizes, index) }

    /// The distance in storage between neighbouring elements along `axis`.
    pub fn stride(&self, axis: usize) -> usize { shape::stride(self.sizes, axis) }

    /// The strides of all axes. The last is always `1`.
    pub fn strides(&self) -> [usize; D] { shape::strides(self.sizes) }

    // ------------------------------------------------------------------------

    /// Returns the element at `coords`.
    ///
    /// The coordinates are not checked individually. An out-of-range
    /// coordinate either selects some other element or, if the computed
    /// position is past the end of storage, panics.
    #[inline]
    pub fn get(&self, coords: [usize; D]) -> &T {
        &self.items.as_ref()[self.index(coords)]
    }

    /// Returns the element at `coords`. See [`get()`](Self::get).
    #[inline]
    pub fn get_mut(&mut self, coords: [usize; D]) -> &mut T {
        let index = self.index(coords);
        &mut self.items.as_mut()[index]
    }

    /// Returns a copy of the element at `coords`.
    #[inline]
    pub fn at(&self, coords: [usize; D]) -> T where T: Clone { self.get(coords).clone() }

    /// Returns the element at `coords` without any checking.
    ///
    /// # Safety
    ///
    /// Every `coords[k]` must be less than `self.extent(k)`.
    #[inline]
    pub unsafe fn get_unchecked(&self, coords: [usize; D]) -> &T {
        self.items.as_ref().get_unchecked(self.index(coords))
    }

    /// Returns the element at `coords` without any checking.
    ///
    /// # Safety
    ///
    /// Every `coords[k]` must be less than `self.extent(k)`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, coords: [usize; D]) -> &mut T {
        let index = self.index(coords);
        self.items.as_mut().get_unchecked_mut(index)
    }

    /// Returns the element at `coords`, or an error naming the first
    /// coordinate that is out of range.
    ///
    /// ```
    /// use multiarray::{DenseArray, Error};
    /// let a: DenseArray<u8, 2> = DenseArray::new([2, 3]);
    /// assert_eq!(a.try_get([1, 2]), Ok(&0));
    /// assert_eq!(a.try_get([0, 3]), Err(Error::IndexOutOfBounds {axis: 1, index: 3, extent: 3}));
    /// ```
    pub fn try_get(&self, coords: [usize; D]) -> Result<&T> {
        shape::check_coords(self.sizes, coords)?;
        Ok(self.get(coords))
    }

    /// Returns the element at `coords`, or an error naming the first
    /// coordinate that is out of range.
    pub fn try_get_mut(&mut self, coords: [usize; D]) -> Result<&mut T> {
        shape::check_coords(self.sizes, coords)?;
        Ok(self.get_mut(coords))
    }

    // ------------------------------------------------------------------------

    /// Overwrites every element with `value`.
    pub fn fill(&mut self, value: T) -> &mut Self where T: Clone {
        self.items.as_mut().fill(value);
        self
    }

    /// The number of elements written by range fills since construction or
    /// the last [`reset_touched()`](Self::reset_touched).
    pub fn touched(&self) -> usize { self.touched }

    /// Resets [`touched()`](Self::touched) to zero.
    pub fn reset_touched(&mut self) { self.touched = 0; }

    // ------------------------------------------------------------------------

    /// The backing buffer.
    pub fn as_storage(&self) -> &S { &self.items }

    /// The elements in storage order.
    pub fn as_slice(&self) -> &[T] { self.items.as_ref() }

    /// The elements in storage order. The length cannot be changed.
    pub fn as_mut_slice(&mut self) -> &mut [T] { self.items.as_mut() }

    /// Iterates over the elements in storage order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> { self.as_slice().iter() }

    /// Iterates over the elements in storage order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> { self.as_mut_slice().iter_mut() }
}

impl<T: Default, const D: usize> DenseArray<T, D> {
    /// Constructs a `Vec`-backed array with extents `sizes` filled with
    /// `T::default()`.
    ///
    /// Any extent may be zero, giving an empty array.
    ///
    /// ```
    /// use multiarray::DenseArray;
    /// let a: DenseArray<u32, 3> = DenseArray::new([2, 3, 4]);
    /// assert_eq!(a.len(), 24);
    /// assert_eq!(a.extent(1), 3);
    /// ```
    pub fn new(sizes: [usize; D]) -> Self { Self::from_sizes(sizes) }
}

impl<T, const D: usize, S: Storage<T>> std::convert::AsRef<[T]> for DenseArray<T, D, S> {
    fn as_ref(&self) -> &[T] { self.as_slice() }
}

impl<T, const D: usize, S: Storage<T>> std::convert::AsMut<[T]> for DenseArray<T, D, S> {
    fn as_mut(&mut self) -> &mut [T] { self.as_mut_slice() }
}

// Equality and hashing see only the extents and the elements, not `touched`.

impl<T: PartialEq, const D: usize, S: Storage<T>> PartialEq for DenseArray<T, D, S> {
    fn eq(&self, other: &Self) -> bool {
        self.sizes == other.sizes && self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, const D: usize, S: Storage<T>> Eq for DenseArray<T, D, S> {}

impl<T: std::hash::Hash, const D: usize, S: Storage<T>> std::hash::Hash for DenseArray<T, D, S> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.sizes.hash(state);
        self.as_slice().hash(state);
    }
}

impl<T, const D: usize, S: Storage<T>> std::ops::Index<[usize; D]> for DenseArray<T, D, S> {
    type Output = T;
    #[inline(always)]
    fn index(&self, coords: [usize; D]) -> &T { self.get(coords) }
}

impl<T, const D: usize, S: Storage<T>> std::ops::IndexMut<[usize; D]> for DenseArray<T, D, S> {
    #[inline(always)]
    fn index_mut(&mut self, coords: [usize; D]) -> &mut T { self.get_mut(coords) }
}

impl<'a, T, const D: usize, S: Storage<T>> IntoIterator for &'a DenseArray<T, D, S> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<'a, T, const D: usize, S: Storage<T>> IntoIterator for &'a mut DenseArray<T, D, S> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter { self.iter_mut() }
}

// ----------------------------------------------------------------------------
