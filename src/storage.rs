//! Contiguous buffers that can back a [`DenseArray`].
//!
//! [`DenseArray`]: super::DenseArray

/// A contiguous, owned buffer of `T`s whose length is chosen at construction.
///
/// Implementations must keep the length fixed: [`DenseArray`] only ever
/// overwrites elements through the slices returned by `as_ref()` and
/// `as_mut()`, and it relies on their length never changing.
///
/// You are encouraged to implement `Storage` for your own buffers, e.g. a
/// slice carved out of an arena.
///
/// [`DenseArray`]: super::DenseArray
pub trait Storage<T>: AsRef<[T]> + AsMut<[T]> {
    /// Construct a buffer of length `len` whose item `i` is `f(i)`.
    ///
    /// `f` is called exactly once for each `i`, in increasing order.
    fn from_fn(len: usize, f: impl FnMut(usize) -> T) -> Self;
}

impl<T> Storage<T> for Vec<T> {
    fn from_fn(len: usize, f: impl FnMut(usize) -> T) -> Self {
        let mut items = Vec::with_capacity(len);
        items.extend((0..len).map(f));
        items
    }
}

impl<T> Storage<T> for Box<[T]> {
    fn from_fn(len: usize, f: impl FnMut(usize) -> T) -> Self {
        <Vec<T> as Storage<T>>::from_fn(len, f).into_boxed_slice()
    }
}

/// Keeps up to `A::size()` items inline, which suits small lookup tables.
#[cfg(feature = "smallvec")]
impl<A: smallvec::Array> Storage<A::Item> for smallvec::SmallVec<A> {
    fn from_fn(len: usize, f: impl FnMut(usize) -> A::Item) -> Self {
        let mut items = smallvec::SmallVec::with_capacity(len);
        items.extend((0..len).map(f));
        items
    }
}

// ----------------------------------------------------------------------------
