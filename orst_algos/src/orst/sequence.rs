//! Positions over mutable sequences, tagged by how they can move.
//!
//! Every sorter in [`orst`](crate::orst) is written against one of three traits:
//!
//! - [`ForwardSequence`]: positions can only be advanced, one step at a time.
//! - [`BidirectionalSequence`]: positions can also be retreated.
//! - [`RandomAccessSequence`]: positions can jump by any offset in constant time and are ordered.
//!
//! A sequence also names its [`Capability`] tag through
//! [`ForwardSequence::Capability`]. Sorters that pick a different strategy depending on the
//! capability (heap sort, shaker sort) implement a strategy trait on the tag types, so the choice
//! is resolved while monomorphizing and never at runtime.
//!
//! Slices, [`Vec`] and [`VecDeque`] are random access. [`Restricted`] hides the random access of a
//! slice so the forward and bidirectional strategies can be exercised on ordinary data, and
//! [`List`](crate::orst::List) is a linked list that is genuinely bidirectional only.
//!
//! ```
//! use orst_algos::orst::{BidirectionalSequence, ForwardSequence};
//!
//! let mut values = vec![3, 1, 2];
//! let last = values.prev(values.end());
//! values.swap_elements(values.begin(), last);
//! assert_eq!(values, [2, 1, 3]);
//! ```

use std::collections::VecDeque;
use std::fmt::Debug;
use std::marker::PhantomData;

mod sealed {
    pub trait Sealed {}
}

/// The traversal capability of a sequence's positions.
///
/// This trait is sealed, the only capabilities are [`Forward`], [`Bidirectional`] and
/// [`RandomAccess`].
pub trait Capability: sealed::Sealed {
    /// Human readable name of the capability.
    const NAME: &'static str;
}

/// Positions can only move forward one step at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Forward;

/// Positions can move forward and backward one step at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bidirectional;

/// Positions can move by any offset in constant time and are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomAccess;

impl sealed::Sealed for Forward {}
impl sealed::Sealed for Bidirectional {}
impl sealed::Sealed for RandomAccess {}

impl Capability for Forward {
    const NAME: &'static str = "forward";
}

impl Capability for Bidirectional {
    const NAME: &'static str = "bidirectional";
}

impl Capability for RandomAccess {
    const NAME: &'static str = "random access";
}

/// A mutable sequence whose positions can be advanced.
///
/// Positions are plain `Copy` values that stay valid for the whole sort: sorters only ever
/// exchange or overwrite the elements stored at positions, they never insert or remove any. The
/// past-the-end position returned by [`end`](ForwardSequence::end) may be compared against and
/// reached with [`next`](ForwardSequence::next) but never dereferenced.
pub trait ForwardSequence {
    /// The element stored in the sequence.
    type Item;

    /// An opaque cursor into the sequence.
    type Position: Copy + Eq + Debug;

    /// The capability tag of this sequence's positions.
    type Capability: Capability;

    /// Position of the first element.
    fn begin(&self) -> Self::Position;

    /// The past-the-end position.
    fn end(&self) -> Self::Position;

    /// The position one step after `pos`.
    fn next(&self, pos: Self::Position) -> Self::Position;

    /// Reference to the element at `pos`.
    fn element(&self, pos: Self::Position) -> &Self::Item;

    /// Mutable reference to the element at `pos`.
    fn element_mut(&mut self, pos: Self::Position) -> &mut Self::Item;

    /// Exchanges the elements at `a` and `b`. `a == b` is allowed.
    fn swap_elements(&mut self, a: Self::Position, b: Self::Position);

    /// The position `n` steps after `pos`.
    ///
    /// Walks one step at a time. Random access sequences override this with a constant time
    /// version.
    fn advance(&self, mut pos: Self::Position, n: usize) -> Self::Position {
        for _ in 0..n {
            pos = self.next(pos);
        }
        pos
    }

    /// Number of steps from `from` to `to`. `to` must be reachable from `from`.
    fn distance(&self, mut from: Self::Position, to: Self::Position) -> usize {
        let mut steps = 0;
        while from != to {
            from = self.next(from);
            steps += 1;
        }
        steps
    }
}

/// A [`ForwardSequence`] whose positions can also move backwards.
pub trait BidirectionalSequence: ForwardSequence {
    /// The position one step before `pos`.
    fn prev(&self, pos: Self::Position) -> Self::Position;

    /// The position `n` steps before `pos`.
    fn retreat(&self, mut pos: Self::Position, n: usize) -> Self::Position {
        for _ in 0..n {
            pos = self.prev(pos);
        }
        pos
    }

    /// Moves the element at `last` to `first`, shifting everything in `[first, last)` one step
    /// to the right.
    fn rotate_one_right(&mut self, first: Self::Position, last: Self::Position) {
        let mut current = last;
        while current != first {
            let behind = self.prev(current);
            self.swap_elements(behind, current);
            current = behind;
        }
    }
}

/// A [`BidirectionalSequence`] with constant time jumps and ordered positions.
pub trait RandomAccessSequence: BidirectionalSequence<Position: Ord> {
    /// The position `delta` steps away from `pos` in either direction.
    fn offset(&self, pos: Self::Position, delta: isize) -> Self::Position;
}

macro_rules! contiguous_sequence {
    ($(impl[$($generics:tt)*] $ty:ty;)*) => {$(
        impl<$($generics)*> ForwardSequence for $ty {
            type Item = T;
            type Position = usize;
            type Capability = RandomAccess;

            #[inline]
            fn begin(&self) -> usize {
                0
            }

            #[inline]
            fn end(&self) -> usize {
                self.len()
            }

            #[inline]
            fn next(&self, pos: usize) -> usize {
                pos + 1
            }

            #[inline]
            fn element(&self, pos: usize) -> &T {
                &self[pos]
            }

            #[inline]
            fn element_mut(&mut self, pos: usize) -> &mut T {
                &mut self[pos]
            }

            #[inline]
            fn swap_elements(&mut self, a: usize, b: usize) {
                <[T]>::swap(self, a, b)
            }

            #[inline]
            fn advance(&self, pos: usize, n: usize) -> usize {
                pos + n
            }

            #[inline]
            fn distance(&self, from: usize, to: usize) -> usize {
                to - from
            }
        }

        impl<$($generics)*> BidirectionalSequence for $ty {
            #[inline]
            fn prev(&self, pos: usize) -> usize {
                pos - 1
            }

            #[inline]
            fn retreat(&self, pos: usize, n: usize) -> usize {
                pos - n
            }

            fn rotate_one_right(&mut self, first: usize, last: usize) {
                self[first..=last].rotate_right(1);
            }
        }

        impl<$($generics)*> RandomAccessSequence for $ty {
            #[inline]
            fn offset(&self, pos: usize, delta: isize) -> usize {
                pos.wrapping_add_signed(delta)
            }
        }
    )*};
}

contiguous_sequence! {
    impl[T] [T];
    impl[T] Vec<T>;
    impl[T, const N: usize] [T; N];
}

impl<T> ForwardSequence for VecDeque<T> {
    type Item = T;
    type Position = usize;
    type Capability = RandomAccess;

    fn begin(&self) -> usize {
        0
    }

    fn end(&self) -> usize {
        self.len()
    }

    fn next(&self, pos: usize) -> usize {
        pos + 1
    }

    fn element(&self, pos: usize) -> &T {
        &self[pos]
    }

    fn element_mut(&mut self, pos: usize) -> &mut T {
        &mut self[pos]
    }

    fn swap_elements(&mut self, a: usize, b: usize) {
        VecDeque::swap(self, a, b)
    }

    fn advance(&self, pos: usize, n: usize) -> usize {
        pos + n
    }

    fn distance(&self, from: usize, to: usize) -> usize {
        to - from
    }
}

impl<T> BidirectionalSequence for VecDeque<T> {
    fn prev(&self, pos: usize) -> usize {
        pos - 1
    }

    fn retreat(&self, pos: usize, n: usize) -> usize {
        pos - n
    }
}

impl<T> RandomAccessSequence for VecDeque<T> {
    fn offset(&self, pos: usize, delta: isize) -> usize {
        pos.wrapping_add_signed(delta)
    }
}

/// Name of the capability tag of `seq`.
pub fn capability_name<S>(_seq: &S) -> &'static str
where
    S: ForwardSequence + ?Sized,
{
    <S::Capability as Capability>::NAME
}

/// Capabilities a [`Restricted`] view can be narrowed down to.
pub trait Restrictable: Capability {}

impl Restrictable for Forward {}
impl Restrictable for Bidirectional {}

/// Opaque position of a [`Restricted`] view. It can only be stepped, never compared by order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor(usize);

/// A view over a mutable slice that only exposes the traversal capability `C`.
///
/// Sorting through the view walks the slice one step at a time, exactly like it would walk a
/// singly (with [`Forward`]) or doubly (with [`Bidirectional`]) linked list.
///
/// # Usage
///```
/// use orst_algos::orst::{BubbleSorter, Restricted, Sorter};
///
/// let mut values = [3, 1, 2];
/// BubbleSorter.sort(&mut Restricted::forward(&mut values));
/// assert_eq!(values, [1, 2, 3]);
///```
pub struct Restricted<'a, T, C: Restrictable> {
    slice: &'a mut [T],
    _capability: PhantomData<C>,
}

impl<'a, T> Restricted<'a, T, Forward> {
    /// A forward-only view over `slice`.
    pub fn forward(slice: &'a mut [T]) -> Self {
        Self {
            slice,
            _capability: PhantomData,
        }
    }
}

impl<'a, T> Restricted<'a, T, Bidirectional> {
    /// A bidirectional view over `slice`.
    pub fn bidirectional(slice: &'a mut [T]) -> Self {
        Self {
            slice,
            _capability: PhantomData,
        }
    }
}

impl<T, C: Restrictable> Restricted<'_, T, C> {
    /// Number of elements in the view.
    pub fn len(&self) -> usize {
        self.slice.len()
    }

    /// Returns `true` if the view holds no elements.
    pub fn is_empty(&self) -> bool {
        self.slice.is_empty()
    }

    /// The elements in their current order.
    pub fn as_slice(&self) -> &[T] {
        self.slice
    }
}

impl<T, C: Restrictable> ForwardSequence for Restricted<'_, T, C> {
    type Item = T;
    type Position = Cursor;
    type Capability = C;

    fn begin(&self) -> Cursor {
        Cursor(0)
    }

    fn end(&self) -> Cursor {
        Cursor(self.slice.len())
    }

    fn next(&self, pos: Cursor) -> Cursor {
        debug_assert!(pos.0 < self.slice.len(), "advanced past the end");
        Cursor(pos.0 + 1)
    }

    fn element(&self, pos: Cursor) -> &T {
        &self.slice[pos.0]
    }

    fn element_mut(&mut self, pos: Cursor) -> &mut T {
        &mut self.slice[pos.0]
    }

    fn swap_elements(&mut self, a: Cursor, b: Cursor) {
        self.slice.swap(a.0, b.0)
    }
}

impl<T> BidirectionalSequence for Restricted<'_, T, Bidirectional> {
    fn prev(&self, pos: Cursor) -> Cursor {
        Cursor(pos.0 - 1)
    }
}
