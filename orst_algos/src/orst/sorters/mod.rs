pub mod bubble_sorter;
pub mod comb_sorter;
pub mod heap_sorter;
pub mod insertion_sorter;
pub mod merge_sorter;
pub mod quick_sorter;
pub mod selection_sorter;
pub mod shaker_sorter;

use super::sequence::ForwardSequence;

/// Rearranges the elements at `slots` so that `slots[k]` ends up holding the element that was at
/// `slots[sources[k]]`.
///
/// `sources` must be a permutation of `0..slots.len()`. Elements only ever move by swaps, so the
/// sequence is a permutation of itself at every step. `visited` is scratch space of the same
/// length.
pub(crate) fn gather<S>(
    seq: &mut S,
    slots: &[S::Position],
    sources: &[usize],
    visited: &mut [bool],
) where
    S: ForwardSequence + ?Sized,
{
    debug_assert_eq!(slots.len(), sources.len());
    debug_assert_eq!(slots.len(), visited.len());

    visited.fill(false);
    for start in 0..slots.len() {
        if visited[start] {
            continue;
        }

        // Walk the cycle through `start`, pulling every element into place behind us.
        let mut at = start;
        loop {
            visited[at] = true;
            let from = sources[at];
            if from == start {
                break;
            }
            seq.swap_elements(slots[at], slots[from]);
            at = from;
        }
    }
}

/// Positions of `[first, last)` in order.
pub(crate) fn collect_positions<S>(seq: &S, first: S::Position, last: S::Position) -> Vec<S::Position>
where
    S: ForwardSequence + ?Sized,
{
    let mut positions = Vec::new();
    let mut current = first;
    while current != last {
        positions.push(current);
        current = seq.next(current);
    }
    positions
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::orst::List;

    #[test]
    fn gather_follows_cycles() {
        let mut values = vec!['a', 'b', 'c', 'd', 'e'];
        let slots = collect_positions(&values, 0, 5);
        let mut visited = vec![false; 5];

        gather(&mut values, &slots, &[3, 0, 4, 1, 2], &mut visited);
        assert_eq!(values, ['d', 'a', 'e', 'b', 'c']);
    }

    #[test]
    fn gather_identity_is_a_no_op() {
        let mut list: List<_> = (0..4).collect();
        let slots = collect_positions(&list, list.begin(), list.end());
        let mut visited = vec![true; 4];

        gather(&mut list, &slots, &[0, 1, 2, 3], &mut visited);
        assert_eq!(list.into_vec(), [0, 1, 2, 3]);
    }
}
