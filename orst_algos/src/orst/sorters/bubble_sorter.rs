use crate::orst::{Ascending, Comparator, ForwardSequence, Sorter};

/// An implementation of [Bubble Sort](https://en.wikipedia.org/wiki/Bubble_sort)
///
/// # Usage
///```
/// use orst_algos::orst::{BubbleSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// BubbleSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
/// # Explanation
///
/// Bubble sort, sometimes referred to as sinking sort,
/// is a simple sorting algorithm that repeatedly steps
/// through the list, compares adjacent elements and swaps
/// them if they are in the wrong order. The pass through
/// the list is repeated until the list is sorted. The
/// algorithm, which is a comparison sort, is named for the
/// way smaller or larger elements "bubble" to the top of the list.
///
/// # Algorithm
///
/// After pass `i` the last `i` elements are in their final place, so every pass stops one step
/// earlier than the previous one. A pass without a single swap ends the sort. Only forward
/// traversal is needed, and equal elements are never swapped past each other, so the sort is
/// stable.
#[derive(Debug, Default, Clone, Copy)]
pub struct BubbleSorter;

impl<S> Sorter<S> for BubbleSorter
where
    S: ForwardSequence + ?Sized,
{
    #[inline]
    fn sort_range_by<F>(&self, seq: &mut S, first: S::Position, last: S::Position, pred: F)
    where
        F: Comparator<S::Item>,
    {
        bubble_sort_by(seq, first, last, pred)
    }
}

/// Sorts `[first, last)` of `seq` in ascending order with bubble sort.
pub fn bubble_sort<S>(seq: &mut S, first: S::Position, last: S::Position)
where
    S: ForwardSequence + ?Sized,
    S::Item: Ord,
{
    bubble_sort_by(seq, first, last, Ascending)
}

/// Sorts `[first, last)` of `seq` with bubble sort, ordering elements by `pred`.
pub fn bubble_sort_by<S, F>(seq: &mut S, first: S::Position, last: S::Position, mut pred: F)
where
    S: ForwardSequence + ?Sized,
    F: Comparator<S::Item>,
{
    let len = seq.distance(first, last);
    bubble_passes(seq, first, len, &mut pred);
}

/// Bubble passes over the `len` elements starting at `first`.
pub(crate) fn bubble_passes<S, F>(seq: &mut S, first: S::Position, len: usize, pred: &mut F)
where
    S: ForwardSequence + ?Sized,
    F: Comparator<S::Item>,
{
    for pass in 0..len.saturating_sub(1) {
        let last_in_pass = seq.advance(first, len - pass);
        let mut swapped = false;

        let mut current = first;
        let mut ahead = seq.next(current);
        while ahead != last_in_pass {
            if pred.precedes(seq.element(ahead), seq.element(current)) {
                seq.swap_elements(current, ahead);
                swapped = true;
            }
            current = ahead;
            ahead = seq.next(ahead);
        }

        if !swapped {
            break;
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::orst::{Descending, List, Restricted};

    #[test]
    fn arbitrary_array() {
        let mut slice = [1, 5, 4, 2, 3];
        BubbleSorter.sort(&mut slice);
        assert_eq!(slice, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn sorted_array() {
        let mut slice = (1..10).collect::<Vec<_>>();
        BubbleSorter.sort(&mut slice);
        assert_eq!(slice, (1..10).collect::<Vec<_>>());
    }

    #[test]
    fn very_unsorted() {
        let mut slice = (1..1000).rev().collect::<Vec<_>>();
        BubbleSorter.sort(&mut slice);
        assert_eq!(slice, (1..1000).collect::<Vec<_>>());
    }

    #[test]
    fn simple_edge_cases() {
        let mut empty: Vec<i32> = vec![];
        BubbleSorter.sort(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![1];
        BubbleSorter.sort(&mut one);
        assert_eq!(one, vec![1]);

        let mut two = vec![1, 2];
        BubbleSorter.sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut two = vec![2, 1];
        BubbleSorter.sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut three = vec![3, 1, 2];
        BubbleSorter.sort(&mut three);
        assert_eq!(three, vec![1, 2, 3]);
    }

    #[test]
    fn forward_only() {
        let mut slice = [5, 3, 8, 1, 9, 2];
        BubbleSorter.sort(&mut Restricted::forward(&mut slice));
        assert_eq!(slice, [1, 2, 3, 5, 8, 9]);
    }

    #[test]
    fn linked_list_descending() {
        let mut list: List<_> = [5, 3, 8, 1, 9, 2].into_iter().collect();
        BubbleSorter.sort_by(&mut list, Descending);
        assert_eq!(list.into_vec(), [9, 8, 5, 3, 2, 1]);
    }

    #[test]
    fn sub_range_only() {
        let mut slice = [9, 4, 3, 2, 1, 0];
        bubble_sort(&mut slice, 1, 5);
        assert_eq!(slice, [9, 1, 2, 3, 4, 0]);
    }

    #[test]
    fn stable_on_equal_keys() {
        let mut pairs = [(1, 'a'), (0, 'x'), (1, 'b'), (0, 'y'), (1, 'c')];
        bubble_sort_by(&mut pairs, 0, 5, |a: &(i32, char), b: &(i32, char)| a.0 < b.0);
        assert_eq!(pairs, [(0, 'x'), (0, 'y'), (1, 'a'), (1, 'b'), (1, 'c')]);
    }
}
