use crate::orst::{
    Ascending, Bidirectional, BidirectionalSequence, Comparator, RandomAccess,
    RandomAccessSequence, Sorter,
};

/// An implementation of [Shaker Sort](https://en.wikipedia.org/wiki/Cocktail_shaker_sort), also
/// known as cocktail sort.
///
/// # Usage
///```
/// use orst_algos::orst::{ShakerSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// ShakerSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
/// # Explanation
///
/// Shaker sort is a bubble sort that walks the list in both directions. A forward pass carries
/// the largest unplaced element to the right end of the window, a backward pass carries the
/// smallest one to the left end, and the window shrinks by one from the side that was just
/// finished.
///
/// # Algorithm
///
/// The outer loop is picked by [`ShakerStrategy`] on the capability tag of the sequence.
/// Bidirectional sequences stop once the window boundaries meet, checked by position equality,
/// and finish with a pairwise fix-up of the last window. Random access sequences compare the
/// boundaries by order instead. Both produce the same output.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShakerSorter;

/// The outer loop of shaker sort for sequences with capability `Self`.
pub trait ShakerStrategy<S>
where
    S: BidirectionalSequence + ?Sized,
{
    /// Sorts the inclusive range `[first, before_last]`.
    fn shake<F>(seq: &mut S, first: S::Position, before_last: S::Position, pred: &mut F)
    where
        F: Comparator<S::Item>;
}

impl<S> ShakerStrategy<S> for Bidirectional
where
    S: BidirectionalSequence + ?Sized,
{
    fn shake<F>(seq: &mut S, mut first: S::Position, mut before_last: S::Position, pred: &mut F)
    where
        F: Comparator<S::Item>,
    {
        while first != before_last && seq.next(first) != before_last {
            forward_pass(seq, first, before_last, pred);
            before_last = seq.prev(before_last);
            backward_pass(seq, first, before_last, pred);
            first = seq.next(first);
        }

        // At most two elements are left.
        if first != before_last && pred.precedes(seq.element(before_last), seq.element(first)) {
            seq.swap_elements(first, before_last);
        }
    }
}

impl<S> ShakerStrategy<S> for RandomAccess
where
    S: RandomAccessSequence + ?Sized,
    S::Position: Ord,
{
    fn shake<F>(seq: &mut S, mut first: S::Position, mut before_last: S::Position, pred: &mut F)
    where
        F: Comparator<S::Item>,
    {
        while first < before_last {
            forward_pass(seq, first, before_last, pred);
            before_last = seq.prev(before_last);
            backward_pass(seq, first, before_last, pred);
            first = seq.next(first);
        }
    }
}

impl<S> Sorter<S> for ShakerSorter
where
    S: BidirectionalSequence + ?Sized,
    S::Capability: ShakerStrategy<S>,
{
    #[inline]
    fn sort_range_by<F>(&self, seq: &mut S, first: S::Position, last: S::Position, pred: F)
    where
        F: Comparator<S::Item>,
    {
        shaker_sort_by(seq, first, last, pred)
    }
}

/// Sorts `[first, last)` of `seq` in ascending order with shaker sort.
pub fn shaker_sort<S>(seq: &mut S, first: S::Position, last: S::Position)
where
    S: BidirectionalSequence + ?Sized,
    S::Capability: ShakerStrategy<S>,
    S::Item: Ord,
{
    shaker_sort_by(seq, first, last, Ascending)
}

/// Sorts `[first, last)` of `seq` with shaker sort, ordering elements by `pred`.
pub fn shaker_sort_by<S, F>(seq: &mut S, first: S::Position, last: S::Position, mut pred: F)
where
    S: BidirectionalSequence + ?Sized,
    S::Capability: ShakerStrategy<S>,
    F: Comparator<S::Item>,
{
    if first != last {
        let before_last = seq.prev(last);
        <S::Capability as ShakerStrategy<S>>::shake(seq, first, before_last, &mut pred);
    }
}

// Carries the largest element of `[left, right]` to `right`.
fn forward_pass<S, F>(seq: &mut S, mut left: S::Position, right: S::Position, pred: &mut F)
where
    S: BidirectionalSequence + ?Sized,
    F: Comparator<S::Item>,
{
    while left != right {
        let ahead = seq.next(left);
        if pred.precedes(seq.element(ahead), seq.element(left)) {
            seq.swap_elements(left, ahead);
        }
        left = ahead;
    }
}

// Carries the smallest element of `[left, right]` to `left`.
fn backward_pass<S, F>(seq: &mut S, left: S::Position, mut right: S::Position, pred: &mut F)
where
    S: BidirectionalSequence + ?Sized,
    F: Comparator<S::Item>,
{
    while right != left {
        let behind = seq.prev(right);
        if pred.precedes(seq.element(right), seq.element(behind)) {
            seq.swap_elements(behind, right);
        }
        right = behind;
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::orst::{Descending, List, Restricted};

    #[test]
    fn arbitrary_array() {
        let mut slice = [1, 5, 4, 2, 3];
        ShakerSorter.sort(&mut slice);
        assert_eq!(slice, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn sorted_array() {
        let mut slice = (1..10).collect::<Vec<_>>();
        ShakerSorter.sort(&mut slice);
        assert_eq!(slice, (1..10).collect::<Vec<_>>());
    }

    #[test]
    fn very_unsorted() {
        let mut slice = (1..1000).rev().collect::<Vec<_>>();
        ShakerSorter.sort(&mut slice);
        assert_eq!(slice, (1..1000).collect::<Vec<_>>());

        let mut list = (1..1000).rev().collect::<List<_>>();
        ShakerSorter.sort(&mut list);
        assert_eq!(list.into_vec(), (1..1000).collect::<Vec<_>>());
    }

    #[test]
    fn simple_edge_cases() {
        let mut empty: Vec<i32> = vec![];
        ShakerSorter.sort(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![1];
        ShakerSorter.sort(&mut one);
        assert_eq!(one, vec![1]);

        let mut two = vec![1, 2];
        ShakerSorter.sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut three = vec![3, 1, 2];
        ShakerSorter.sort(&mut three);
        assert_eq!(three, vec![1, 2, 3]);
    }

    #[test]
    fn pairwise_fix_up() {
        let mut two = vec![2, 1];
        ShakerSorter.sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut two = [2, 1];
        ShakerSorter.sort(&mut Restricted::bidirectional(&mut two));
        assert_eq!(two, [1, 2]);
    }

    #[test]
    fn strategies_agree() {
        let input = [7, 3, 3, 9, 0, -4, 12, 5, 5, 1, 8];

        let mut random_access = input;
        shaker_sort_by(&mut random_access, 0, input.len(), Descending);

        let mut bidirectional = input;
        ShakerSorter.sort_by(&mut Restricted::bidirectional(&mut bidirectional), Descending);

        assert_eq!(random_access, bidirectional);
        assert_eq!(random_access, [12, 9, 8, 7, 5, 5, 3, 3, 1, 0, -4]);
    }
}
