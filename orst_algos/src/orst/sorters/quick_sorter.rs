use crate::orst::{Ascending, BidirectionalSequence, Comparator, Sorter};

/// An implementation of [Quick Sort](https://en.wikipedia.org/wiki/Quicksort)
///
/// # Usage
///```
/// use orst_algos::orst::{QuickSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// QuickSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
///
/// # Explanation
///
/// Quicksort is an in-place sorting algorithm. Developed
/// by British computer scientist Tony Hoare in 1959 and published
/// in 1961 it is still a commonly used algorithm for
/// sorting. When implemented well, it can be somewhat
/// faster than merge sort and about two or three times
/// faster than heapsort.
///
/// # Algorithm
///
/// Quicksort is a divide-and-conquer algorithm.
/// It works by selecting a 'pivot' element from
/// the array and partitioning the other elements into two sub
/// -arrays, according to whether they are less than
/// or greater than the pivot. For this reason,
/// it is sometimes called partition-exchange sort.
/// The sub-arrays are then sorted recursively.
///
/// The pivot is always the last element of the range and the partition walks left to right, so
/// bidirectional traversal is enough. Already sorted and reverse sorted input are the worst case:
/// every partition splits off a single element and the work is quadratic. Only the smaller side
/// of each partition is sorted recursively while the larger side is handled by the loop, so the
/// recursion never gets deeper than `log2(n)` even then.
#[derive(Debug, Default, Clone, Copy)]
pub struct QuickSorter;

impl<S> Sorter<S> for QuickSorter
where
    S: BidirectionalSequence + ?Sized,
{
    #[inline]
    fn sort_range_by<F>(&self, seq: &mut S, first: S::Position, last: S::Position, pred: F)
    where
        F: Comparator<S::Item>,
    {
        quick_sort_by(seq, first, last, pred)
    }
}

/// Sorts `[first, last)` of `seq` in ascending order with quicksort.
pub fn quick_sort<S>(seq: &mut S, first: S::Position, last: S::Position)
where
    S: BidirectionalSequence + ?Sized,
    S::Item: Ord,
{
    quick_sort_by(seq, first, last, Ascending)
}

/// Sorts `[first, last)` of `seq` with quicksort, ordering elements by `pred`.
pub fn quick_sort_by<S, F>(seq: &mut S, first: S::Position, last: S::Position, mut pred: F)
where
    S: BidirectionalSequence + ?Sized,
    F: Comparator<S::Item>,
{
    if first != last {
        let len = seq.distance(first, last);
        let before_last = seq.prev(last);
        quicksort(seq, first, before_last, len, &mut pred);
    }
}

// Sorts the inclusive range `[first, before_last]` holding `len` elements.
fn quicksort<S, F>(
    seq: &mut S,
    mut first: S::Position,
    mut before_last: S::Position,
    mut len: usize,
    pred: &mut F,
) where
    S: BidirectionalSequence + ?Sized,
    F: Comparator<S::Item>,
{
    while first != before_last {
        let (pivot, less) = partition(seq, first, before_last, pred);
        let greater = len - less - 1;

        if less <= greater {
            if pivot != first {
                let end_of_less = seq.prev(pivot);
                quicksort(seq, first, end_of_less, less, pred);
            }
            if pivot == before_last {
                return;
            }
            first = seq.next(pivot);
            len = greater;
        } else {
            if pivot != before_last {
                let start_of_greater = seq.next(pivot);
                quicksort(seq, start_of_greater, before_last, greater, pred);
            }
            if pivot == first {
                return;
            }
            before_last = seq.prev(pivot);
            len = less;
        }
    }
}

/// Partitions `[first, before_last]` around the element at `before_last`.
///
/// Returns the final position of the pivot and the number of elements placed before it.
fn partition<S, F>(
    seq: &mut S,
    first: S::Position,
    before_last: S::Position,
    pred: &mut F,
) -> (S::Position, usize)
where
    S: BidirectionalSequence + ?Sized,
    F: Comparator<S::Item>,
{
    let mut less = first;
    let mut less_count = 0;

    let mut current = first;
    while current != before_last {
        // Everything the pivot does not precede belongs on its left.
        if !pred.precedes(seq.element(before_last), seq.element(current)) {
            if current != less {
                seq.swap_elements(current, less);
            }
            less = seq.next(less);
            less_count += 1;
        }
        current = seq.next(current);
    }

    if less != before_last {
        seq.swap_elements(less, before_last);
    }
    (less, less_count)
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::orst::{List, Restricted};

    #[test]
    fn arbitrary_array() {
        let mut slice = [1, 5, 4, 2, 3];
        QuickSorter.sort(&mut slice);
        assert_eq!(slice, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn sorted_array() {
        let mut slice = (1..10).collect::<Vec<_>>();
        QuickSorter.sort(&mut slice);
        assert_eq!(slice, (1..10).collect::<Vec<_>>());
    }

    #[test]
    fn very_unsorted() {
        let mut slice = (1..1000).rev().collect::<Vec<_>>();
        QuickSorter.sort(&mut slice);
        assert_eq!(slice, (1..1000).collect::<Vec<_>>());
    }

    #[test]
    fn deep_worst_case_on_a_list() {
        let mut list = (0..5_000).rev().collect::<List<u32>>();
        QuickSorter.sort(&mut list);
        assert_eq!(list.into_vec(), (0..5_000).collect::<Vec<_>>());
    }

    #[test]
    fn reverse_sorted() {
        let mut slice = [9, 8, 7, 6, 5];
        QuickSorter.sort(&mut Restricted::bidirectional(&mut slice));
        assert_eq!(slice, [5, 6, 7, 8, 9]);
    }

    #[test]
    fn simple_edge_cases() {
        let mut empty: Vec<i32> = vec![];
        QuickSorter.sort(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![1];
        QuickSorter.sort(&mut one);
        assert_eq!(one, vec![1]);

        let mut two = vec![1, 2];
        QuickSorter.sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut two = vec![2, 1];
        QuickSorter.sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut three = vec![3, 1, 2];
        QuickSorter.sort(&mut three);
        assert_eq!(three, vec![1, 2, 3]);
    }

    #[test]
    fn partition_places_pivot() {
        let mut slice = [6, 1, 8, 3, 5];
        let mut pred = Ascending;

        let (pivot, less) = partition(&mut slice[..], 0, 4, &mut pred);
        assert_eq!((pivot, less), (2, 2));
        assert_eq!(slice[2], 5);
        assert!(slice[..2].iter().all(|&x| x <= 5));
        assert!(slice[3..].iter().all(|&x| x > 5));
    }
}
