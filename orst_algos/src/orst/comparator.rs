//! The ordering predicate consumed by every sorter.

/// Decides whether one element must be placed before another.
///
/// A comparator is expected to be a strict weak ordering. The sorters never check this: with a
/// comparator that is not one, the output is still a permutation of the input, but its order is
/// unspecified.
///
/// Every `FnMut(&T, &T) -> bool` closure is a comparator.
///
/// # Usage
///```
/// use orst_algos::orst::{Comparator, Descending};
///
/// let mut by_length = |a: &&str, b: &&str| a.len() < b.len();
/// assert!(by_length.precedes(&"ab", &"abc"));
/// assert!(Descending.precedes(&3, &2));
///```
pub trait Comparator<T: ?Sized> {
    /// Returns `true` if `a` must precede `b`.
    fn precedes(&mut self, a: &T, b: &T) -> bool;
}

impl<T, F> Comparator<T> for F
where
    T: ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    #[inline]
    fn precedes(&mut self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Ascending order of [`Ord`] elements. The comparator used when none is given.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Ascending;

impl<T: Ord + ?Sized> Comparator<T> for Ascending {
    #[inline]
    fn precedes(&mut self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Descending order of [`Ord`] elements.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Descending;

impl<T: Ord + ?Sized> Comparator<T> for Descending {
    #[inline]
    fn precedes(&mut self, a: &T, b: &T) -> bool {
        b < a
    }
}

/// Flips the order of the wrapped comparator.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Reversed<C>(pub C);

impl<T, C> Comparator<T> for Reversed<C>
where
    T: ?Sized,
    C: Comparator<T>,
{
    #[inline]
    fn precedes(&mut self, a: &T, b: &T) -> bool {
        self.0.precedes(b, a)
    }
}
