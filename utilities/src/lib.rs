//! Fixtures shared by the integration tests of the workspace.

use std::cell::Cell;
use std::rc::Rc;

use rand::{rngs::StdRng, Rng, SeedableRng};

/// A value with a tag that takes no part in ordering, to observe what a sort does with equal keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tagged<K> {
    pub key: K,
    pub tag: usize,
}

impl<K> Tagged<K> {
    /// Tags every key with its index.
    pub fn tag_all(keys: impl IntoIterator<Item = K>) -> Vec<Self> {
        keys.into_iter()
            .enumerate()
            .map(|(tag, key)| Tagged { key, tag })
            .collect()
    }
}

/// Orders [`Tagged`] values by key only.
pub fn by_key<K: Ord>(a: &Tagged<K>, b: &Tagged<K>) -> bool {
    a.key < b.key
}

/// An element without a [`Default`] value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct NoDefault(pub String);

/// `len` reproducible random values in `0..len`, so duplicates are likely.
pub fn random_values(len: usize, seed: u64) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let bound = len.max(1) as i32;
    (0..len).map(|_| rng.gen_range(0..bound)).collect()
}

/// The interesting shapes of input of length `len`: random, sorted, reversed, all equal, and
/// few distinct values.
pub fn input_shapes(len: usize, seed: u64) -> Vec<(&'static str, Vec<i32>)> {
    let mut rng = StdRng::seed_from_u64(seed);
    vec![
        ("random", random_values(len, seed)),
        ("sorted", (0..len as i32).collect()),
        ("reversed", (0..len as i32).rev().collect()),
        ("all equal", vec![7; len]),
        ("few distinct", (0..len).map(|_| rng.gen_range(0..3)).collect()),
    ]
}

/// `true` if no element of `values` precedes the one before it under `pred`.
pub fn is_sorted_by<T>(values: &[T], mut pred: impl FnMut(&T, &T) -> bool) -> bool {
    values.windows(2).all(|pair| !pred(&pair[1], &pair[0]))
}

/// `true` if `a` is a permutation of `b`.
pub fn same_elements<T: Ord + Clone>(a: &[T], b: &[T]) -> bool {
    let (mut a, mut b) = (a.to_vec(), b.to_vec());
    a.sort();
    b.sort();
    a == b
}

/// A comparator counting how often it is called, through a shared counter.
#[derive(Debug, Clone, Default)]
pub struct Counting {
    calls: Rc<Cell<usize>>,
}

impl Counting {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ascending order on anything ordered, counting the call.
    pub fn less<T: Ord>(&self) -> impl FnMut(&T, &T) -> bool + '_ {
        move |a, b| {
            self.calls.set(self.calls.get() + 1);
            a < b
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

/// A comparator that panics on its `limit`th call and behaves as `<` before that.
pub fn panics_after<T: Ord>(limit: usize) -> impl FnMut(&T, &T) -> bool {
    let mut calls = 0;
    move |a, b| {
        calls += 1;
        if calls == limit {
            panic!("comparator gave up after {limit} calls");
        }
        a < b
    }
}

/// A comparator answering with seeded coin flips, which is no ordering at all.
pub fn coin_flips<T>(seed: u64) -> impl FnMut(&T, &T) -> bool {
    let mut rng = StdRng::seed_from_u64(seed);
    move |_, _| rng.gen()
}
