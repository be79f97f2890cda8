use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::BTreeSet;

use super::{collect_positions, gather};
use crate::orst::{
    Ascending, Bidirectional, Comparator, Forward, ForwardSequence, RandomAccess,
    RandomAccessSequence, Sorter,
};

/// An implementation of [Heap Sort](https://en.wikipedia.org/wiki/Heapsort)
///
/// # Usage
///```
/// use orst_algos::orst::{HeapSorter, List, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// HeapSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///
/// let mut list: List<_> = [1, 5, 4, 2, 3].into_iter().collect();
/// HeapSorter.sort(&mut list);
/// assert_eq!(list.into_vec(), [1, 2, 3, 4, 5]);
///```
/// # Explanation
///
/// Heapsort arranges the list as a binary max-heap, whose largest element is always at the root,
/// and then repeatedly moves the root behind the shrinking heap.
///
/// # Algorithm
///
/// A binary heap needs to jump from a node to its children, which only random access sequences
/// can do in constant time. The strategy is picked by [`HeapStrategy`] on the capability tag:
///
/// - [`RandomAccess`] sequences are sorted in place with a binary heap.
/// - [`Forward`] and [`Bidirectional`] sequences use an ordered set as a surrogate heap. Every
///   element is entered into the set by position, the set is drained in ascending order, and the
///   elements are then swapped into that order. Until the drain is complete nothing in the
///   sequence has moved, so a panicking comparator leaves the sequence untouched.
///
/// Neither strategy is stable.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeapSorter;

/// The heap sort strategy for sequences with capability `Self`.
pub trait HeapStrategy<S>
where
    S: ForwardSequence + ?Sized,
{
    fn heap_sort<F>(seq: &mut S, first: S::Position, last: S::Position, pred: F)
    where
        F: Comparator<S::Item>;
}

impl<S> HeapStrategy<S> for RandomAccess
where
    S: RandomAccessSequence + ?Sized,
{
    fn heap_sort<F>(seq: &mut S, first: S::Position, last: S::Position, mut pred: F)
    where
        F: Comparator<S::Item>,
    {
        let len = seq.distance(first, last);
        make_heap(seq, first, len, &mut pred);

        for end in (1..len).rev() {
            pop_heap(seq, first, end + 1, &mut pred);
        }
    }
}

impl<S> HeapStrategy<S> for Bidirectional
where
    S: ForwardSequence + ?Sized,
{
    fn heap_sort<F>(seq: &mut S, first: S::Position, last: S::Position, pred: F)
    where
        F: Comparator<S::Item>,
    {
        surrogate_heap_sort(seq, first, last, pred)
    }
}

impl<S> HeapStrategy<S> for Forward
where
    S: ForwardSequence + ?Sized,
{
    fn heap_sort<F>(seq: &mut S, first: S::Position, last: S::Position, pred: F)
    where
        F: Comparator<S::Item>,
    {
        surrogate_heap_sort(seq, first, last, pred)
    }
}

impl<S> Sorter<S> for HeapSorter
where
    S: ForwardSequence + ?Sized,
    S::Capability: HeapStrategy<S>,
{
    #[inline]
    fn sort_range_by<F>(&self, seq: &mut S, first: S::Position, last: S::Position, pred: F)
    where
        F: Comparator<S::Item>,
    {
        heap_sort_by(seq, first, last, pred)
    }
}

/// Sorts `[first, last)` of `seq` in ascending order with heap sort.
pub fn heap_sort<S>(seq: &mut S, first: S::Position, last: S::Position)
where
    S: ForwardSequence + ?Sized,
    S::Capability: HeapStrategy<S>,
    S::Item: Ord,
{
    heap_sort_by(seq, first, last, Ascending)
}

/// Sorts `[first, last)` of `seq` with heap sort, ordering elements by `pred`.
pub fn heap_sort_by<S, F>(seq: &mut S, first: S::Position, last: S::Position, pred: F)
where
    S: ForwardSequence + ?Sized,
    S::Capability: HeapStrategy<S>,
    F: Comparator<S::Item>,
{
    <S::Capability as HeapStrategy<S>>::heap_sort(seq, first, last, pred)
}

#[inline]
fn nth<S>(seq: &S, first: S::Position, n: usize) -> S::Position
where
    S: RandomAccessSequence + ?Sized,
{
    seq.offset(first, n as isize)
}

/// Turns the `len` elements from `first` into a max-heap under `pred`.
fn make_heap<S, F>(seq: &mut S, first: S::Position, len: usize, pred: &mut F)
where
    S: RandomAccessSequence + ?Sized,
    F: Comparator<S::Item>,
{
    for node in (0..len / 2).rev() {
        sift_down(seq, first, node, len, pred);
    }
}

/// Moves the root of the heap of `len` elements from `first` behind the remaining heap.
fn pop_heap<S, F>(seq: &mut S, first: S::Position, len: usize, pred: &mut F)
where
    S: RandomAccessSequence + ?Sized,
    F: Comparator<S::Item>,
{
    let last = nth(seq, first, len - 1);
    seq.swap_elements(first, last);
    sift_down(seq, first, 0, len - 1, pred);
}

// This binary heap respects the invariant `parent >= child`.
fn sift_down<S, F>(seq: &mut S, first: S::Position, mut node: usize, len: usize, pred: &mut F)
where
    S: RandomAccessSequence + ?Sized,
    F: Comparator<S::Item>,
{
    loop {
        let left = 2 * node + 1;
        if left >= len {
            break;
        }

        // Choose the greater child.
        let right = left + 1;
        let child = if right < len
            && pred.precedes(
                seq.element(nth(seq, first, left)),
                seq.element(nth(seq, first, right)),
            ) {
            right
        } else {
            left
        };

        let (node_pos, child_pos) = (nth(seq, first, node), nth(seq, first, child));
        if !pred.precedes(seq.element(node_pos), seq.element(child_pos)) {
            break;
        }

        seq.swap_elements(node_pos, child_pos);
        node = child;
    }
}

/// An element of the surrogate heap: the element at `position`, ordered by the comparator and
/// then by `ordinal`, its offset in the range, so equal elements stay distinct.
struct Keyed<'a, S, F>
where
    S: ForwardSequence + ?Sized,
{
    position: S::Position,
    ordinal: usize,
    seq: &'a S,
    pred: &'a RefCell<F>,
}

impl<S, F> Ord for Keyed<'_, S, F>
where
    S: ForwardSequence + ?Sized,
    F: Comparator<S::Item>,
{
    fn cmp(&self, other: &Self) -> Ordering {
        let (this, that) = (self.seq.element(self.position), self.seq.element(other.position));
        let mut pred = self.pred.borrow_mut();

        if pred.precedes(this, that) {
            Ordering::Less
        } else if pred.precedes(that, this) {
            Ordering::Greater
        } else {
            self.ordinal.cmp(&other.ordinal)
        }
    }
}

impl<S, F> PartialOrd for Keyed<'_, S, F>
where
    S: ForwardSequence + ?Sized,
    F: Comparator<S::Item>,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S, F> PartialEq for Keyed<'_, S, F>
where
    S: ForwardSequence + ?Sized,
    F: Comparator<S::Item>,
{
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S, F> Eq for Keyed<'_, S, F>
where
    S: ForwardSequence + ?Sized,
    F: Comparator<S::Item>,
{
}

fn surrogate_heap_sort<S, F>(seq: &mut S, first: S::Position, last: S::Position, pred: F)
where
    S: ForwardSequence + ?Sized,
    F: Comparator<S::Item>,
{
    let positions = collect_positions(seq, first, last);

    let sources: Vec<usize> = {
        let view: &S = seq;
        let pred = RefCell::new(pred);

        // Not `collect`: it sorts with `slice::sort`, which can panic when `pred` is not a
        // strict weak ordering.
        let mut heap = BTreeSet::new();
        for (ordinal, &position) in positions.iter().enumerate() {
            heap.insert(Keyed {
                position,
                ordinal,
                seq: view,
                pred: &pred,
            });
        }

        heap.into_iter().map(|keyed| keyed.ordinal).collect()
    };

    let mut visited = vec![false; positions.len()];
    gather(seq, &positions, &sources, &mut visited);
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::orst::{Descending, List, Restricted};

    #[test]
    fn arbitrary_array() {
        let mut slice = [1, 5, 4, 2, 3];
        HeapSorter.sort(&mut slice);
        assert_eq!(slice, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn sorted_array() {
        let mut slice = (1..10).collect::<Vec<_>>();
        HeapSorter.sort(&mut slice);
        assert_eq!(slice, (1..10).collect::<Vec<_>>());

        let mut list = (1..10).collect::<List<_>>();
        HeapSorter.sort(&mut list);
        assert_eq!(list.into_vec(), (1..10).collect::<Vec<_>>());
    }

    #[test]
    fn very_unsorted() {
        let mut slice = (1..1000).rev().collect::<Vec<_>>();
        HeapSorter.sort(&mut slice);
        assert_eq!(slice, (1..1000).collect::<Vec<_>>());

        let mut slice = (1..1000).rev().collect::<Vec<_>>();
        HeapSorter.sort(&mut Restricted::forward(&mut slice));
        assert_eq!(slice, (1..1000).collect::<Vec<_>>());
    }

    #[test]
    fn simple_edge_cases() {
        let mut empty: Vec<i32> = vec![];
        HeapSorter.sort(&mut empty);
        assert!(empty.is_empty());

        let mut empty: List<i32> = List::new();
        HeapSorter.sort(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![1];
        HeapSorter.sort(&mut one);
        assert_eq!(one, vec![1]);

        let mut two = vec![2, 1];
        HeapSorter.sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut three = vec![3, 1, 2];
        HeapSorter.sort(&mut three);
        assert_eq!(three, vec![1, 2, 3]);
    }

    #[test]
    fn all_equal_on_both_strategies() {
        let mut slice = [4, 4, 4, 4];
        HeapSorter.sort(&mut slice);
        assert_eq!(slice, [4, 4, 4, 4]);

        let mut list: List<_> = [4, 4, 4, 4].into_iter().collect();
        HeapSorter.sort(&mut list);
        assert_eq!(list.into_vec(), [4, 4, 4, 4]);
    }

    #[test]
    fn duplicates_survive_the_surrogate() {
        let mut slice = [3, 1, 3, 2, 1, 3];
        HeapSorter.sort_by(&mut Restricted::bidirectional(&mut slice), Descending);
        assert_eq!(slice, [3, 3, 3, 2, 1, 1]);
    }

    #[test]
    fn surrogate_tolerates_inconsistent_comparators() {
        let input: Vec<u32> = (0..200).map(|i| (i * 7919) % 211).collect();

        let mut state = 0x2545_f491_u32;
        let coin = move |_: &u32, _: &u32| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state & 1 == 1
        };

        let mut list: List<_> = input.iter().copied().collect();
        HeapSorter.sort_by(&mut list, coin);
        let mut values = list.into_vec();
        values.sort();
        let mut expected = input.clone();
        expected.sort();
        assert_eq!(values, expected);

        let mut values = input.clone();
        HeapSorter.sort_by(&mut Restricted::forward(&mut values), |_: &u32, _: &u32| true);
        values.sort();
        assert_eq!(values, expected);
    }

    #[test]
    fn heap_primitives() {
        let mut slice = [2, 7, 1, 8, 2, 8, 1, 8];
        let len = slice.len();
        make_heap(&mut slice[..], 0, len, &mut Ascending);
        assert_eq!(slice[0], 8);
        for node in 1..len {
            assert!(slice[(node - 1) / 2] >= slice[node]);
        }

        pop_heap(&mut slice[..], 0, len, &mut Ascending);
        assert_eq!(slice[len - 1], 8);
        assert_eq!(slice[0], 8);
    }
}
