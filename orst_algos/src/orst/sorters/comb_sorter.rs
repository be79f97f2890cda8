use super::bubble_sorter::bubble_passes;
use crate::orst::{Ascending, Comparator, ForwardSequence, Sorter};

/// Each round of comb sort divides the gap by this factor.
pub const COMB_SHRINK_FACTOR: f64 = 1.247;

/// An implementation of [Comb Sort](https://en.wikipedia.org/wiki/Comb_sort)
///
/// # Usage
///```
/// use orst_algos::orst::{CombSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// CombSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
/// # Explanation
///
/// Comb sort improves on bubble sort by comparing elements that are a gap apart instead of
/// neighbours. Small elements near the end of the list ("turtles") are what make bubble sort
/// slow, and a large gap moves them towards the front in few swaps.
///
/// # Algorithm
///
/// The gap starts at the length of the range and is divided by [`COMB_SHRINK_FACTOR`] after every
/// round, as long as it stays at least one. Shrinking alone does not guarantee a sorted result,
/// so the rounds are followed by a bubble sort, which usually stops after its first pass.
#[derive(Debug, Default, Clone, Copy)]
pub struct CombSorter;

impl<S> Sorter<S> for CombSorter
where
    S: ForwardSequence + ?Sized,
{
    #[inline]
    fn sort_range_by<F>(&self, seq: &mut S, first: S::Position, last: S::Position, pred: F)
    where
        F: Comparator<S::Item>,
    {
        comb_sort_by(seq, first, last, pred)
    }
}

/// Sorts `[first, last)` of `seq` in ascending order with comb sort.
pub fn comb_sort<S>(seq: &mut S, first: S::Position, last: S::Position)
where
    S: ForwardSequence + ?Sized,
    S::Item: Ord,
{
    comb_sort_by(seq, first, last, Ascending)
}

/// Sorts `[first, last)` of `seq` with comb sort, ordering elements by `pred`.
pub fn comb_sort_by<S, F>(seq: &mut S, first: S::Position, last: S::Position, mut pred: F)
where
    S: ForwardSequence + ?Sized,
    F: Comparator<S::Item>,
{
    let len = seq.distance(first, last);

    let mut gap = len as f64;
    while gap >= 1.0 {
        let step = gap as usize;

        let mut left = first;
        let mut right = seq.advance(first, step);
        while right != last {
            if pred.precedes(seq.element(right), seq.element(left)) {
                seq.swap_elements(left, right);
            }
            left = seq.next(left);
            right = seq.next(right);
        }

        gap /= COMB_SHRINK_FACTOR;
    }

    bubble_passes(seq, first, len, &mut pred);
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::orst::{List, Restricted};

    #[test]
    fn arbitrary_array() {
        let mut slice = [1, 5, 4, 2, 3];
        CombSorter.sort(&mut slice);
        assert_eq!(slice, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn sorted_array() {
        let mut slice = (1..10).collect::<Vec<_>>();
        CombSorter.sort(&mut slice);
        assert_eq!(slice, (1..10).collect::<Vec<_>>());
    }

    #[test]
    fn very_unsorted() {
        let mut slice = (1..1000).rev().collect::<Vec<_>>();
        CombSorter.sort(&mut slice);
        assert_eq!(slice, (1..1000).collect::<Vec<_>>());

        let mut slice = (1..1000).rev().collect::<Vec<_>>();
        CombSorter.sort(&mut Restricted::forward(&mut slice));
        assert_eq!(slice, (1..1000).collect::<Vec<_>>());
    }

    #[test]
    fn simple_edge_cases() {
        let mut empty: Vec<i32> = vec![];
        CombSorter.sort(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![1];
        CombSorter.sort(&mut one);
        assert_eq!(one, vec![1]);

        let mut two = vec![2, 1];
        CombSorter.sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut three = vec![3, 1, 2];
        CombSorter.sort(&mut three);
        assert_eq!(three, vec![1, 2, 3]);
    }

    #[test]
    fn duplicates_on_a_list() {
        let mut list: List<_> = [4, 1, 4, 0, 1, 4, 2].into_iter().collect();
        let (first, last) = (list.begin(), list.end());
        comb_sort(&mut list, first, last);
        assert_eq!(list.into_vec(), [0, 1, 1, 2, 4, 4, 4]);
    }
}
