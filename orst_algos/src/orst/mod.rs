//! In-place comparison sorts over sequences of any traversal capability.
//!
//! Implementation of sorting algorithms from [Crust of Rust: Sorting
//! Algorithms](https://www.youtube.com/watch?v=h4RkCyJyXmM), generalized from slices to every
//! sequence described in [`sequence`]. Each algorithm comes in three shapes:
//!
//! - a free function sorting `[first, last)` in ascending order, e.g. [`bubble_sort`],
//! - a free function taking a [`Comparator`], e.g. [`bubble_sort_by`],
//! - a zero sized [`Sorter`], e.g. [`BubbleSorter`], sorting a whole sequence.
//!
//! What a sequence must support is expressed as trait bounds, so asking for an algorithm the
//! sequence cannot support is a compile error:
//!
//! | Sorter | Needs | Stable |
//! |---|---|---|
//! | [`BubbleSorter`] | forward | yes |
//! | [`ShakerSorter`] | bidirectional | no |
//! | [`CombSorter`] | forward | no |
//! | [`InsertionSorter`] | bidirectional | yes |
//! | [`SelectionSorter`] | forward | no |
//! | [`QuickSorter`] | bidirectional | no |
//! | [`MergeSorter`] | forward, `Default` elements | yes |
//! | [`InPlaceMergeSorter`] | forward | yes |
//! | [`HeapSorter`] | forward | no |
//!
//! # Example
//!
//! ```
//! use orst_algos::orst::BubbleSorter;
//! use orst_algos::orst::Sorter;
//!
//! let mut slice = vec![1, 3, 2, 5, 4];
//! BubbleSorter.sort(&mut slice);
//! assert_eq!(vec![1, 2, 3, 4, 5], slice);
//! ```

pub mod benchmark;
mod comparator;
mod list;
pub mod sequence;
mod sorters;

pub use comparator::{Ascending, Comparator, Descending, Reversed};
pub use list::{Iter, List, Node};
pub use sequence::{
    Bidirectional, BidirectionalSequence, Capability, Cursor, Forward, ForwardSequence,
    RandomAccess, RandomAccessSequence, Restricted,
};

pub use sorters::bubble_sorter::{bubble_sort, bubble_sort_by, BubbleSorter};
pub use sorters::comb_sorter::{comb_sort, comb_sort_by, CombSorter, COMB_SHRINK_FACTOR};
pub use sorters::heap_sorter::{heap_sort, heap_sort_by, HeapSorter, HeapStrategy};
pub use sorters::insertion_sorter::{insertion_sort, insertion_sort_by, InsertionSorter};
pub use sorters::merge_sorter::{
    merge_sort, merge_sort_by, merge_sort_in_place, merge_sort_in_place_by, InPlaceMergeSorter,
    MergeSorter,
};
pub use sorters::quick_sorter::{quick_sort, quick_sort_by, QuickSorter};
pub use sorters::selection_sorter::{selection_sort, selection_sort_by, SelectionSorter};
pub use sorters::shaker_sorter::{shaker_sort, shaker_sort_by, ShakerSorter, ShakerStrategy};

/// The sorting algorithm must implement the trait `Sorter`.
///
/// A sorter is implemented for every sequence type `S` it can handle.
pub trait Sorter<S>
where
    S: ForwardSequence + ?Sized,
{
    /// Sorts `[first, last)` of `seq` so that no element precedes its predecessor under `pred`.
    fn sort_range_by<F>(&self, seq: &mut S, first: S::Position, last: S::Position, pred: F)
    where
        F: Comparator<S::Item>;

    /// Sorts the whole of `seq` with `pred`.
    fn sort_by<F>(&self, seq: &mut S, pred: F)
    where
        F: Comparator<S::Item>,
    {
        let (first, last) = (seq.begin(), seq.end());
        self.sort_range_by(seq, first, last, pred);
    }

    /// Sorts the whole of `seq` in ascending order.
    fn sort(&self, seq: &mut S)
    where
        S::Item: Ord,
    {
        self.sort_by(seq, Ascending);
    }
}

/// Sorts a sequence in place with a given [`Sorter`].
///
/// ```
/// use orst_algos::orst::{Descending, Orst, QuickSorter};
///
/// let mut values = vec![2, 3, 1];
/// values.orst_by(QuickSorter, Descending);
/// assert_eq!(values, [3, 2, 1]);
/// ```
pub trait Orst: ForwardSequence {
    fn orst<S>(&mut self, sorter: S)
    where
        S: Sorter<Self>,
        Self::Item: Ord,
    {
        sorter.sort(self);
    }

    fn orst_by<S, F>(&mut self, sorter: S, pred: F)
    where
        S: Sorter<Self>,
        F: Comparator<Self::Item>,
    {
        sorter.sort_by(self, pred);
    }
}

impl<T: ForwardSequence + ?Sized> Orst for T {}
