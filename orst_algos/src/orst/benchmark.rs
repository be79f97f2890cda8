//! Counts the comparisons and measures the time every sorter needs on random input.
//!
//! Run it through the binary with `orst sorts bench`.

use std::{
    cell::Cell,
    rc::Rc,
    time::{Duration, Instant},
};

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use prettytable::{row, Table};
use rand::{self, Rng};

use super::{
    BubbleSorter, CombSorter, ForwardSequence, HeapSorter, InPlaceMergeSorter, InsertionSorter,
    List, MergeSorter, QuickSorter, SelectionSorter, ShakerSorter, Sorter,
};

const ZERO: usize = 0;
const ONE: usize = 1;
const HUNDRED: usize = 100;
const TEN_THOUSAND: usize = 10_000;
const HUNDRED_THOUSAND: usize = 100_000;
const MILLION: usize = 1_000_000;

/// Largest input the quadratic sorters are run on.
pub const QUADRATIC_LIMIT: usize = TEN_THOUSAND;

/// Number of rows [`measure`] produces.
pub const SORTER_COUNT: u64 = 10;

/// The sizes benchmarked when no limit is given.
pub const DEFAULT_SIZES: [usize; 6] = [ZERO, ONE, HUNDRED, TEN_THOUSAND, HUNDRED_THOUSAND, MILLION];

// In this the `elem` will be compared and the `comparison_counter` will be ignored.
struct SortEvaluator<T> {
    elem: T,
    // Shared by every element of one run and bumped on each comparison.
    comparison_counter: Rc<Cell<usize>>,
}

impl<T> SortEvaluator<T> {
    fn new(elem: T, comparison_counter: Rc<Cell<usize>>) -> Self {
        Self {
            elem,
            comparison_counter,
        }
    }

    fn count(&self) {
        self.comparison_counter
            .set(self.comparison_counter.get() + 1);
    }
}

// Only the merge buffer creates these, and it never compares them.
impl<T: Default> Default for SortEvaluator<T> {
    fn default() -> Self {
        Self::new(T::default(), Rc::default())
    }
}

impl<T: Eq> Eq for SortEvaluator<T> {}

impl<T: PartialEq> PartialEq for SortEvaluator<T> {
    fn eq(&self, other: &Self) -> bool {
        self.count();
        self.elem == other.elem
    }
}

impl<T: PartialOrd> PartialOrd for SortEvaluator<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.count();
        self.elem.partial_cmp(&other.elem)
    }

    // The sorters compare with `<` only, so that is the operator that has to count.
    fn lt(&self, other: &Self) -> bool {
        self.count();
        self.elem < other.elem
    }
}

impl<T: Ord> Ord for SortEvaluator<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.count();
        self.elem.cmp(&other.elem)
    }
}

/// One row of the result table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    pub sorter: &'static str,
    /// `None` when the input was too large for the sorter.
    pub comparisons: Option<usize>,
    pub elapsed: Option<Duration>,
}

fn run_bench<S, Q>(
    sorter: Q,
    values: &mut S,
    comparisons: &Rc<Cell<usize>>,
) -> (usize, Duration)
where
    S: ForwardSequence<Item = SortEvaluator<i32>> + ?Sized,
    Q: Sorter<S>,
{
    comparisons.set(0);
    let now = Instant::now();
    sorter.sort(values);

    (comparisons.get(), now.elapsed())
}

/// Sorts a fresh copy of `input` with every sorter and returns the measurements.
///
/// Quadratic sorters are skipped for inputs above [`QUADRATIC_LIMIT`]. `on_sorter` is called
/// after each sorter, finished or skipped.
pub fn measure(input: &[i32], mut on_sorter: impl FnMut(&'static str)) -> Vec<Measurement> {
    let counter = Rc::new(Cell::new(0));
    let fresh = || -> Vec<SortEvaluator<i32>> {
        input
            .iter()
            .map(|&elem| SortEvaluator::new(elem, counter.clone()))
            .collect()
    };
    let quadratic = input.len() <= QUADRATIC_LIMIT;

    let mut results = Vec::new();
    let mut record = |sorter: &'static str, outcome: Option<(usize, Duration)>| {
        results.push(Measurement {
            sorter,
            comparisons: outcome.map(|(comparisons, _)| comparisons),
            elapsed: outcome.map(|(_, elapsed)| elapsed),
        });
        on_sorter(sorter);
    };

    macro_rules! bench {
        ($name:literal, $sorter:expr, quadratic) => {
            let outcome = quadratic.then(|| run_bench($sorter, &mut fresh(), &counter));
            record($name, outcome);
        };
        ($name:literal, $sorter:expr) => {
            let outcome = run_bench($sorter, &mut fresh(), &counter);
            record($name, Some(outcome));
        };
    }

    bench!("Bubble Sort", BubbleSorter, quadratic);
    bench!("Shaker Sort", ShakerSorter, quadratic);
    bench!("Comb Sort", CombSorter, quadratic);
    bench!("Insertion Sort", InsertionSorter, quadratic);
    bench!("Selection Sort", SelectionSorter, quadratic);
    bench!("Quick Sort", QuickSorter);
    bench!("Merge Sort", MergeSorter);
    bench!("Merge Sort (in place)", InPlaceMergeSorter);
    bench!("Heap Sort", HeapSorter);

    let mut list: List<_> = fresh().into_iter().collect();
    let outcome = run_bench(HeapSorter, &mut list, &counter);
    record("Heap Sort (linked list)", Some(outcome));

    results
}

/// Prints a table of comparisons and timings for every input size up to `max_size`.
pub fn run_orst(max_size: usize) -> anyhow::Result<()> {
    let mut random = rand::thread_rng();

    let sizes = DEFAULT_SIZES.into_iter().filter(|&n| n <= max_size);

    let style = ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {msg}")?
        .progress_chars("#>-");

    for n in sizes {
        let input: Vec<i32> = (0..n).map(|_| random.gen()).collect();

        println!(
            "{} {}",
            "List Size -> ".bold().underline().blue(),
            n.to_string().bold()
        );

        let bar = ProgressBar::new(SORTER_COUNT).with_style(style.clone());
        let results = measure(&input, |sorter| {
            bar.set_message(sorter);
            bar.inc(1);
        });
        bar.finish_and_clear();

        let mut table = Table::new();
        table.add_row(row![
            "Sorter".bold(),
            "Comparisons Made".bold(),
            "Time Taken".bold()
        ]);

        for Measurement {
            sorter,
            comparisons,
            elapsed,
        } in results
        {
            match (comparisons, elapsed) {
                (Some(comparisons), Some(elapsed)) => {
                    table.add_row(row![sorter, comparisons.to_string(), format!("{elapsed:?}")]);
                }
                _ => {
                    table.add_row(row![sorter, "Not Doing It".red(), "It is Stupid"]);
                }
            }
        }

        table.printstd();
        println!();
    }

    Ok(())
}
