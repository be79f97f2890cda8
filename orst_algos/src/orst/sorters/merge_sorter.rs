use std::mem;

use super::{collect_positions, gather};
use crate::orst::{Ascending, Comparator, ForwardSequence, Sorter};

/// An implementation of [Merge Sort](https://en.wikipedia.org/wiki/Merge_sort) with an auxiliary
/// buffer.
///
/// # Usage
///```
/// use orst_algos::orst::{MergeSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// MergeSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
/// # Explanation
///
/// Merge sort splits the list in two halves, sorts both halves recursively and merges the two
/// sorted halves into one. Merging always takes from the left half when the heads compare equal,
/// so the sort is stable.
///
/// # Algorithm
///
/// One buffer with a [`Default`] slot per element is allocated up front and shared by all levels
/// of the recursion, each level addressing its own `(lo, hi)` window of it. A merge first decides
/// the order of the whole window, then moves the elements into the buffer and back. No element
/// leaves the sequence before every comparison of the merge has returned, so a panicking
/// comparator leaves the sequence a permutation of what it was.
///
/// Elements without a [`Default`] value can be sorted with [`InPlaceMergeSorter`].
#[derive(Debug, Default, Clone, Copy)]
pub struct MergeSorter;

/// Merge sort that never moves an element out of the sequence.
///
/// # Usage
///```
/// use orst_algos::orst::{InPlaceMergeSorter, Sorter};
///
/// // No `Default` for `Name`, so `MergeSorter` would not compile here.
/// struct Name<'a>(&'a str);
///
/// let mut names = [Name("mallory"), Name("alice"), Name("bob")];
/// InPlaceMergeSorter.sort_by(&mut names, |a: &Name, b: &Name| a.0 < b.0);
/// assert_eq!(names.map(|name| name.0), ["alice", "bob", "mallory"]);
///```
/// # Algorithm
///
/// The recursion and the merge decisions are the same as [`MergeSorter`]'s, so the results are
/// identical. Instead of copying into a buffer, each merge is applied to the sequence as a
/// permutation made of swaps, using a table of the positions of the range built once per call.
/// This needs neither [`Default`] nor [`Clone`] of the elements.
#[derive(Debug, Default, Clone, Copy)]
pub struct InPlaceMergeSorter;

impl<S> Sorter<S> for MergeSorter
where
    S: ForwardSequence + ?Sized,
    S::Item: Default,
{
    #[inline]
    fn sort_range_by<F>(&self, seq: &mut S, first: S::Position, last: S::Position, pred: F)
    where
        F: Comparator<S::Item>,
    {
        merge_sort_by(seq, first, last, pred)
    }
}

impl<S> Sorter<S> for InPlaceMergeSorter
where
    S: ForwardSequence + ?Sized,
{
    #[inline]
    fn sort_range_by<F>(&self, seq: &mut S, first: S::Position, last: S::Position, pred: F)
    where
        F: Comparator<S::Item>,
    {
        merge_sort_in_place_by(seq, first, last, pred)
    }
}

/// Sorts `[first, last)` of `seq` in ascending order with buffered merge sort.
pub fn merge_sort<S>(seq: &mut S, first: S::Position, last: S::Position)
where
    S: ForwardSequence + ?Sized,
    S::Item: Ord + Default,
{
    merge_sort_by(seq, first, last, Ascending)
}

/// Sorts `[first, last)` of `seq` with buffered merge sort, ordering elements by `pred`.
pub fn merge_sort_by<S, F>(seq: &mut S, first: S::Position, last: S::Position, mut pred: F)
where
    S: ForwardSequence + ?Sized,
    S::Item: Default,
    F: Comparator<S::Item>,
{
    if first == last {
        return;
    }

    let len = seq.distance(first, last);
    let mut buffer: MergeBuffer<S::Item> = MergeBuffer {
        slots: std::iter::repeat_with(Default::default).take(len).collect(),
        takes_left: vec![false; len],
    };
    let before_last = seq.advance(first, len - 1);

    buffered_merge_sort(seq, first, before_last, &mut buffer, (0, len - 1), &mut pred);
}

/// Sorts `[first, last)` of `seq` in ascending order with in-place merge sort.
pub fn merge_sort_in_place<S>(seq: &mut S, first: S::Position, last: S::Position)
where
    S: ForwardSequence + ?Sized,
    S::Item: Ord,
{
    merge_sort_in_place_by(seq, first, last, Ascending)
}

/// Sorts `[first, last)` of `seq` with in-place merge sort, ordering elements by `pred`.
pub fn merge_sort_in_place_by<S, F>(seq: &mut S, first: S::Position, last: S::Position, mut pred: F)
where
    S: ForwardSequence + ?Sized,
    F: Comparator<S::Item>,
{
    if first == last {
        return;
    }

    let positions = collect_positions(seq, first, last);
    let len = positions.len();
    let mut table = PositionTable {
        positions,
        sources: vec![0; len],
        visited: vec![false; len],
    };

    in_place_merge_sort(seq, &mut table, (0, len - 1), &mut pred);
}

struct MergeBuffer<T> {
    slots: Vec<T>,
    takes_left: Vec<bool>,
}

// `[first, before_last]` occupies `range` of the buffer, both ends inclusive.
fn buffered_merge_sort<S, F>(
    seq: &mut S,
    first: S::Position,
    before_last: S::Position,
    buffer: &mut MergeBuffer<S::Item>,
    range: (usize, usize),
    pred: &mut F,
) where
    S: ForwardSequence + ?Sized,
    S::Item: Default,
    F: Comparator<S::Item>,
{
    if first == before_last {
        return;
    }

    let (lo, hi) = range;
    let half = (hi - lo) / 2;
    let middle = seq.advance(first, half);
    let right = seq.next(middle);

    buffered_merge_sort(seq, first, middle, buffer, (lo, lo + half), pred);
    buffered_merge_sort(seq, right, before_last, buffer, (lo + half + 1, hi), pred);

    let takes_left = &mut buffer.takes_left[lo..=hi];
    plan_merge(seq, (first, half + 1), (right, hi - lo - half), takes_left, pred);

    let (mut left, mut right) = (first, right);
    for (slot, &from_left) in buffer.slots[lo..=hi].iter_mut().zip(takes_left.iter()) {
        let from = if from_left {
            let from = left;
            left = seq.next(left);
            from
        } else {
            let from = right;
            right = seq.next(right);
            from
        };
        *slot = mem::take(seq.element_mut(from));
    }

    let mut to = first;
    for slot in buffer.slots[lo..=hi].iter_mut() {
        *seq.element_mut(to) = mem::take(slot);
        to = seq.next(to);
    }
}

/// Decides, for every slot of a merge of two sorted runs, whether it is filled from the left run.
///
/// Each run is given as its first position and its length. Ties go to the left run.
fn plan_merge<S, F>(
    seq: &S,
    (mut left, mut left_len): (S::Position, usize),
    (mut right, mut right_len): (S::Position, usize),
    takes_left: &mut [bool],
    pred: &mut F,
) where
    S: ForwardSequence + ?Sized,
    F: Comparator<S::Item>,
{
    for from_left in takes_left.iter_mut() {
        *from_left = right_len == 0
            || (left_len != 0 && !pred.precedes(seq.element(right), seq.element(left)));

        if *from_left {
            left_len -= 1;
            if left_len != 0 {
                left = seq.next(left);
            }
        } else {
            right_len -= 1;
            if right_len != 0 {
                right = seq.next(right);
            }
        }
    }
}

struct PositionTable<P> {
    positions: Vec<P>,
    sources: Vec<usize>,
    visited: Vec<bool>,
}

fn in_place_merge_sort<S, F>(
    seq: &mut S,
    table: &mut PositionTable<S::Position>,
    (lo, hi): (usize, usize),
    pred: &mut F,
) where
    S: ForwardSequence + ?Sized,
    F: Comparator<S::Item>,
{
    if lo == hi {
        return;
    }

    let half = (hi - lo) / 2;
    in_place_merge_sort(seq, table, (lo, lo + half), pred);
    in_place_merge_sort(seq, table, (lo + half + 1, hi), pred);

    let PositionTable {
        positions,
        sources,
        visited,
    } = table;
    let positions = &positions[lo..=hi];
    let sources = &mut sources[lo..=hi];

    // Sources are offsets into this window: the left run is `0..=half`, the right run the rest.
    let (mut left, mut right) = (0, half + 1);
    for source in sources.iter_mut() {
        let from_left = right == positions.len()
            || (left <= half
                && !pred.precedes(seq.element(positions[right]), seq.element(positions[left])));

        if from_left {
            *source = left;
            left += 1;
        } else {
            *source = right;
            right += 1;
        }
    }

    gather(seq, positions, sources, &mut visited[lo..=hi]);
}
