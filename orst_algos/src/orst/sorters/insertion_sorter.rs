use crate::orst::{Ascending, BidirectionalSequence, Comparator, Sorter};

/// An implementation of [Insertion Sort](https://en.wikipedia.org/wiki/Insertion_sort)
///
/// # Explanation
///
/// Insertion sort is a simple sorting algorithm that builds the final sorted array (or list) one
/// item at a time
///
/// Insertion sort iterates, consuming one input element each repetition, and grows a sorted output
/// list. At each iteration, insertion sort removes one element from the input data, finds the
/// location it belongs within the sorted list, and inserts it there. It repeats until no input
/// elements remain.
///
/// Sorting is done in-place, by iterating up the sequence, growing the sorted list behind it. The
/// current element is compared against the sorted list walking backwards until an element that
/// does not come after it is found, then a single rotation moves it into that spot and shifts the
/// larger values up by one. The walk stops at the first element that is not strictly after the
/// current one, which keeps the sort stable.
///
/// # Usage
///```
/// use orst_algos::orst::{InsertionSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// InsertionSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
#[derive(Debug, Default, Clone, Copy)]
pub struct InsertionSorter;

impl<S> Sorter<S> for InsertionSorter
where
    S: BidirectionalSequence + ?Sized,
{
    #[inline]
    fn sort_range_by<F>(&self, seq: &mut S, first: S::Position, last: S::Position, pred: F)
    where
        F: Comparator<S::Item>,
    {
        insertion_sort_by(seq, first, last, pred)
    }
}

/// Sorts `[first, last)` of `seq` in ascending order with insertion sort.
pub fn insertion_sort<S>(seq: &mut S, first: S::Position, last: S::Position)
where
    S: BidirectionalSequence + ?Sized,
    S::Item: Ord,
{
    insertion_sort_by(seq, first, last, Ascending)
}

/// Sorts `[first, last)` of `seq` with insertion sort, ordering elements by `pred`.
pub fn insertion_sort_by<S, F>(seq: &mut S, first: S::Position, last: S::Position, mut pred: F)
where
    S: BidirectionalSequence + ?Sized,
    F: Comparator<S::Item>,
{
    let mut unsorted = first;
    while unsorted != last {
        let mut slot = unsorted;
        while slot != first {
            let behind = seq.prev(slot);
            if !pred.precedes(seq.element(unsorted), seq.element(behind)) {
                break;
            }
            slot = behind;
        }

        if slot != unsorted {
            seq.rotate_one_right(slot, unsorted);
        }
        unsorted = seq.next(unsorted);
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::orst::{List, Restricted};

    #[test]
    fn arbitrary_array() {
        let mut slice = [1, 5, 4, 2, 3];
        InsertionSorter.sort(&mut slice);
        assert_eq!(slice, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn arbitrary_array_bidirectional() {
        let mut slice = [1, 5, 4, 2, 3];
        InsertionSorter.sort(&mut Restricted::bidirectional(&mut slice));
        assert_eq!(slice, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn sorted_array() {
        let mut slice = (1..10).collect::<Vec<_>>();
        InsertionSorter.sort(&mut slice);
        assert_eq!(slice, (1..10).collect::<Vec<_>>());
    }

    #[test]
    fn very_unsorted() {
        let mut slice = (1..1000).rev().collect::<Vec<_>>();
        InsertionSorter.sort(&mut slice);
        assert_eq!(slice, (1..1000).collect::<Vec<_>>());
    }

    #[test]
    fn very_unsorted_list() {
        let mut list = (1..1000).rev().collect::<List<_>>();
        InsertionSorter.sort(&mut list);
        assert_eq!(list.into_vec(), (1..1000).collect::<Vec<_>>());
    }

    #[test]
    fn simple_edge_cases() {
        let mut empty: Vec<i32> = vec![];
        InsertionSorter.sort(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![1];
        InsertionSorter.sort(&mut one);
        assert_eq!(one, vec![1]);

        let mut two = vec![1, 2];
        InsertionSorter.sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut two = vec![2, 1];
        InsertionSorter.sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut three = vec![3, 1, 2];
        InsertionSorter.sort(&mut three);
        assert_eq!(three, vec![1, 2, 3]);
    }

    #[test]
    fn stable_on_equal_keys() {
        let by_key = |a: &(u8, &str), b: &(u8, &str)| a.0 < b.0;

        let mut pairs = [(1, "a"), (1, "b"), (2, "c")];
        InsertionSorter.sort_by(&mut pairs, by_key);
        assert_eq!(pairs, [(1, "a"), (1, "b"), (2, "c")]);

        let mut list: List<_> = [(2, "c"), (1, "a"), (2, "d"), (1, "b")].into_iter().collect();
        InsertionSorter.sort_by(&mut list, by_key);
        assert_eq!(list.into_vec(), [(1, "a"), (1, "b"), (2, "c"), (2, "d")]);
    }
}
