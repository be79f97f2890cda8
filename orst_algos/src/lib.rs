//! # Introduction
//!
//! In-place comparison sorting over any mutable sequence, from forward-only linked structures to
//! slices. The algorithms live in [`orst`]; this crate root wires them into the command line.

pub mod orst;

use anyhow::Context;
use clap::{Args, Subcommand, ValueEnum};
use colored::Colorize;

use orst::{
    sequence::capability_name, BidirectionalSequence, BubbleSorter, CombSorter, Comparator,
    HeapSorter, HeapStrategy, InPlaceMergeSorter, InsertionSorter, List, MergeSorter, Orst,
    QuickSorter, Restricted, SelectionSorter, ShakerSorter, ShakerStrategy,
};

/// Sort values from the command line or benchmark the sorters. Install the `orst` binary and run
/// `orst sorts --help` to see what options are available
#[derive(Debug, Args)]
#[command(flatten_help = true, subcommand_required = true)]
pub struct SortArgs {
    #[command(subcommand)]
    command: SortCommands,
}

#[derive(Clone, Subcommand, Debug)]
#[command(arg_required_else_help = true)]
enum SortCommands {
    /// Sort a list of integers and print the result.
    Run {
        /// The sorting algorithm to use.
        #[arg(short, long, value_enum)]
        algorithm: Algorithm,

        /// The traversal capability of the sequence the values are stored in.
        #[arg(short, long, value_enum, default_value_t = Tier::RandomAccess)]
        tier: Tier,

        /// Sort from largest to smallest.
        #[arg(short, long)]
        descending: bool,

        /// The values to sort.
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Count the comparisons and time every sorter takes on random input.
    Bench {
        /// Largest input size to benchmark.
        #[arg(short, long, default_value_t = 100_000)]
        max_size: usize,
    },
}

/// A sorting algorithm selectable from the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    Bubble,
    Shaker,
    Comb,
    Insertion,
    Selection,
    Quick,
    /// Merge sort with an auxiliary buffer
    Merge,
    /// Merge sort without an auxiliary buffer
    MergeInPlace,
    Heap,
}

impl Algorithm {
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble sort",
            Algorithm::Shaker => "shaker sort",
            Algorithm::Comb => "comb sort",
            Algorithm::Insertion => "insertion sort",
            Algorithm::Selection => "selection sort",
            Algorithm::Quick => "quicksort",
            Algorithm::Merge => "merge sort",
            Algorithm::MergeInPlace => "in-place merge sort",
            Algorithm::Heap => "heap sort",
        }
    }
}

/// The kind of sequence the values are sorted in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Tier {
    /// A slice view that can only step forward
    Forward,
    /// A doubly linked list
    Bidirectional,
    /// A vector
    RandomAccess,
}

impl SortArgs {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            SortCommands::Run {
                algorithm,
                tier,
                descending,
                values,
            } => {
                let (capability, sorted) = sort_values(algorithm, tier, descending, values)?;

                println!(
                    "{} {} {}",
                    "Sorted with".bold().blue(),
                    algorithm.name().bold(),
                    format!("over a {capability} sequence").blue()
                );
                let sorted: Vec<String> = sorted.iter().map(i64::to_string).collect();
                println!("{}", sorted.join(" "));
            }

            SortCommands::Bench { max_size } => {
                orst::benchmark::run_orst(max_size).context("benchmark failed")?
            }
        }
        Ok(())
    }
}

/// Sorts `values` with `algorithm` stored in a sequence of the given `tier`.
///
/// Returns the name of the capability the sequence had, along with the sorted values. Fails if the
/// algorithm needs more than the tier can do.
pub fn sort_values(
    algorithm: Algorithm,
    tier: Tier,
    descending: bool,
    mut values: Vec<i64>,
) -> anyhow::Result<(&'static str, Vec<i64>)> {
    let pred = move |a: &i64, b: &i64| if descending { b < a } else { a < b };

    match tier {
        Tier::RandomAccess => {
            sort_bidirectional(&mut values, algorithm, pred);
            Ok((capability_name(&values), values))
        }

        Tier::Bidirectional => {
            let mut list: List<i64> = values.into_iter().collect();
            sort_bidirectional(&mut list, algorithm, pred);
            Ok((capability_name(&list), list.into_vec()))
        }

        Tier::Forward => {
            let mut view = Restricted::forward(&mut values);
            let capability = capability_name(&view);
            match algorithm {
                Algorithm::Bubble => view.orst_by(BubbleSorter, pred),
                Algorithm::Comb => view.orst_by(CombSorter, pred),
                Algorithm::Selection => view.orst_by(SelectionSorter, pred),
                Algorithm::Merge => view.orst_by(MergeSorter, pred),
                Algorithm::MergeInPlace => view.orst_by(InPlaceMergeSorter, pred),
                Algorithm::Heap => view.orst_by(HeapSorter, pred),
                Algorithm::Shaker | Algorithm::Insertion | Algorithm::Quick => {
                    anyhow::bail!(
                        "{} needs a bidirectional sequence, try `--tier bidirectional`",
                        algorithm.name()
                    )
                }
            }
            Ok((capability, values))
        }
    }
}

fn sort_bidirectional<S, F>(seq: &mut S, algorithm: Algorithm, pred: F)
where
    S: BidirectionalSequence<Item = i64> + ?Sized,
    S::Capability: ShakerStrategy<S> + HeapStrategy<S>,
    F: Comparator<i64>,
{
    match algorithm {
        Algorithm::Bubble => seq.orst_by(BubbleSorter, pred),
        Algorithm::Shaker => seq.orst_by(ShakerSorter, pred),
        Algorithm::Comb => seq.orst_by(CombSorter, pred),
        Algorithm::Insertion => seq.orst_by(InsertionSorter, pred),
        Algorithm::Selection => seq.orst_by(SelectionSorter, pred),
        Algorithm::Quick => seq.orst_by(QuickSorter, pred),
        Algorithm::Merge => seq.orst_by(MergeSorter, pred),
        Algorithm::MergeInPlace => seq.orst_by(InPlaceMergeSorter, pred),
        Algorithm::Heap => seq.orst_by(HeapSorter, pred),
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    const ALL: [Algorithm; 9] = [
        Algorithm::Bubble,
        Algorithm::Shaker,
        Algorithm::Comb,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Quick,
        Algorithm::Merge,
        Algorithm::MergeInPlace,
        Algorithm::Heap,
    ];

    #[test]
    fn every_algorithm_on_the_richer_tiers() {
        for algorithm in ALL {
            for (tier, capability) in [
                (Tier::RandomAccess, "random access"),
                (Tier::Bidirectional, "bidirectional"),
            ] {
                let sorted = sort_values(algorithm, tier, false, vec![5, 3, 8, 1, 9, 2]).unwrap();
                assert_eq!(sorted, (capability, vec![1, 2, 3, 5, 8, 9]), "{algorithm:?}");

                let sorted = sort_values(algorithm, tier, true, vec![-1, 4, 0, 4]).unwrap();
                assert_eq!(sorted.1, [4, 4, 0, -1], "{algorithm:?}");
            }
        }
    }

    #[test]
    fn forward_tier_rejects_bidirectional_algorithms() {
        for algorithm in ALL {
            let result = sort_values(algorithm, Tier::Forward, false, vec![2, 1]);
            match algorithm {
                Algorithm::Shaker | Algorithm::Insertion | Algorithm::Quick => {
                    let error = result.unwrap_err().to_string();
                    assert!(error.contains("needs a bidirectional sequence"), "{error}");
                }
                _ => assert_eq!(result.unwrap(), ("forward", vec![1, 2])),
            }
        }
    }

    #[test]
    fn nothing_to_sort() {
        for algorithm in ALL {
            let sorted = sort_values(algorithm, Tier::Bidirectional, false, vec![]).unwrap();
            assert!(sorted.1.is_empty());
        }
    }
}
