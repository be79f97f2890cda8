use crate::orst::{Ascending, Comparator, ForwardSequence, Sorter};

/// An implementation of [Selection Sort](https://en.wikipedia.org/wiki/Selection_sort)
///
/// # Usage
///```
/// use orst_algos::orst::{SelectionSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// SelectionSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
/// # Explanation
///
/// Selection sort is an in-place comparison sorting
/// algorithm. It has an O(n2) time complexity, which
/// makes it inefficient on large  lists, and generally
/// performs worse than the similar insertion sort. Selection sort is noted for its
/// simplicity and has performance advantages over more complicated algorithms
/// in certain situations, particularly where auxiliary memory is
/// limited.
///
/// # Algorithm
///
/// The algorithm divides the input list into two parts:
/// a sorted sublist of items which is built
/// up from left to right at the front (
/// left) of the list and a sublist of
/// the remaining unsorted items that occupy the rest of
/// the list. Initially, the sorted sublist is
/// empty and the unsorted sublist is the entire input
/// list. The algorithm proceeds by finding the most suitable element
/// (the first one no other element precedes) in the unsorted sublist, exchanging (swapping
/// ) it with the leftmost unsorted element (putting
/// it in sorted order), and moving the sublist
/// boundaries one element to the right.
///
/// The swap can carry an element past others equal to it, so the sort is not stable.
#[derive(Debug, Default, Clone, Copy)]
pub struct SelectionSorter;

impl<S> Sorter<S> for SelectionSorter
where
    S: ForwardSequence + ?Sized,
{
    fn sort_range_by<F>(&self, seq: &mut S, first: S::Position, last: S::Position, pred: F)
    where
        F: Comparator<S::Item>,
    {
        selection_sort_by(seq, first, last, pred)
    }
}

/// Sorts `[first, last)` of `seq` in ascending order with selection sort.
pub fn selection_sort<S>(seq: &mut S, first: S::Position, last: S::Position)
where
    S: ForwardSequence + ?Sized,
    S::Item: Ord,
{
    selection_sort_by(seq, first, last, Ascending)
}

/// Sorts `[first, last)` of `seq` with selection sort, ordering elements by `pred`.
pub fn selection_sort_by<S, F>(seq: &mut S, first: S::Position, last: S::Position, mut pred: F)
where
    S: ForwardSequence + ?Sized,
    F: Comparator<S::Item>,
{
    let mut unsorted = first;
    while unsorted != last {
        let most_suitable = most_suitable(seq, unsorted, last, &mut pred);
        if unsorted != most_suitable {
            seq.swap_elements(unsorted, most_suitable);
        }
        unsorted = seq.next(unsorted);
    }
}

// `first` must not be `last`.
fn most_suitable<S, F>(seq: &S, first: S::Position, last: S::Position, pred: &mut F) -> S::Position
where
    S: ForwardSequence + ?Sized,
    F: Comparator<S::Item>,
{
    let mut best = first;
    let mut current = seq.next(first);
    while current != last {
        if pred.precedes(seq.element(current), seq.element(best)) {
            best = current;
        }
        current = seq.next(current);
    }
    best
}
