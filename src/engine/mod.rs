//! The algorithm engine: six instrumented sort procedures
//!
//! Each procedure mutates the working copy it is given, positionally and in
//! place, and reports everything observable through the [`StepSink`]: which
//! positions are being compared or exchanged, which pseudocode line is
//! live, and the comparison/swap counters. [`StepSink::delay`] is the sole
//! suspension point; no procedure blocks anywhere else.
//!
//! Counting conventions (deliberate, and pinned by the tests):
//!
//! - Insertion counts each one-place shift on the swap counter even though
//!   a shift is not an exchange.
//! - Merge write-backs are direct assignments and touch no counter; merge
//!   steps grow through its comparisons only.
//! - Selection, quick and heap skip an exchange whose two indices coincide
//!   and leave the swap counter alone when they do.
//!
//! The procedures are generic over `T: Ord + Copy + Into<u32>` so tests can
//! run key-tagged elements through the identical code paths; the run
//! controller instantiates them at `u32`.

pub mod bubble;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;

use crate::sink::{SortInterrupted, StepSink};

/// Time/space behavior summary shown in the info pane
#[derive(Debug, Clone, Copy)]
pub struct Complexity {
    pub time: &'static str,
    pub space: &'static str,
    pub stable: bool,
}

/// The six supported sorting algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Insertion,
    Selection,
    Quick,
    Merge,
    Heap,
}

impl Algorithm {
    /// All algorithms, in keyboard-shortcut order (`1`..`6`)
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Quick,
        Algorithm::Merge,
        Algorithm::Heap,
    ];

    /// Stable identifier used in exported run reports and file names
    pub fn key(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Insertion => "insertion",
            Algorithm::Selection => "selection",
            Algorithm::Quick => "quick",
            Algorithm::Merge => "merge",
            Algorithm::Heap => "heap",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Heap => "Heap Sort",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Algorithm::Bubble => {
                "Repeatedly compares adjacent elements and swaps them when they \
                 are out of order. Larger values bubble toward the end of the array."
            }
            Algorithm::Insertion => {
                "Inserts each element into its correct position among the \
                 already-sorted elements before it, the way a hand of cards is sorted."
            }
            Algorithm::Selection => {
                "Finds the minimum of the unsorted suffix on every pass and \
                 moves it into place, growing a sorted prefix."
            }
            Algorithm::Quick => {
                "Divide and conquer: pick a pivot, partition the range around \
                 it, then recurse into both partitions."
            }
            Algorithm::Merge => {
                "Recursively splits the array into halves, sorts each half, \
                 then merges the sorted halves back together."
            }
            Algorithm::Heap => {
                "Builds a max-heap in place, then repeatedly exchanges the \
                 root with the last unsorted element and re-sifts."
            }
        }
    }

    pub fn complexity(self) -> Complexity {
        match self {
            Algorithm::Bubble => Complexity {
                time: "O(n²) worst case, O(n) best case",
                space: "O(1) — in place",
                stable: true,
            },
            Algorithm::Insertion => Complexity {
                time: "O(n²) worst case, O(n) best case",
                space: "O(1) — in place",
                stable: true,
            },
            Algorithm::Selection => Complexity {
                time: "O(n²) in every case",
                space: "O(1) — in place",
                stable: false,
            },
            Algorithm::Quick => Complexity {
                time: "O(n log n) average, O(n²) worst case",
                space: "O(log n) recursion",
                stable: false,
            },
            Algorithm::Merge => Complexity {
                time: "O(n log n) in every case",
                space: "O(n) temporary buffers",
                stable: true,
            },
            Algorithm::Heap => Complexity {
                time: "O(n log n) in every case",
                space: "O(1) — in place",
                stable: false,
            },
        }
    }

    /// Principle-of-operation summary shown in the info pane
    pub fn principle(self) -> &'static [&'static str] {
        match self {
            Algorithm::Bubble => &[
                "Scan the array left to right",
                "Compare each pair of adjacent elements",
                "Swap when the left element is greater",
                "Stop early once a full pass makes no swaps",
            ],
            Algorithm::Insertion => &[
                "Start from the second element",
                "Compare against the elements before it",
                "Shift greater elements one place right",
                "Insert the key at the first non-greater position",
            ],
            Algorithm::Selection => &[
                "Find the minimum of the unsorted suffix",
                "Exchange it with the first unsorted element",
                "Grow the sorted prefix by one",
                "Repeat until everything is sorted",
            ],
            Algorithm::Quick => &[
                "Pick the last element of the range as pivot",
                "Partition: smaller-or-equal values to the left",
                "Place the pivot at its final position",
                "Recurse into both partitions",
            ],
            Algorithm::Merge => &[
                "Split the range into two halves",
                "Sort each half recursively",
                "Merge the two sorted halves",
                "Single-element ranges are the base case",
            ],
            Algorithm::Heap => &[
                "Build a max-heap bottom-up",
                "Exchange the root with the last unsorted element",
                "Shrink the heap and sift the new root down",
                "Repeat until the heap is empty",
            ],
        }
    }

    /// Pseudocode displayed in the code pane; `highlight_line` values
    /// emitted by the procedure are 1-based lines into this text
    pub fn pseudocode(self) -> &'static str {
        match self {
            Algorithm::Bubble => bubble::PSEUDOCODE,
            Algorithm::Insertion => insertion::PSEUDOCODE,
            Algorithm::Selection => selection::PSEUDOCODE,
            Algorithm::Quick => quick::PSEUDOCODE,
            Algorithm::Merge => merge::PSEUDOCODE,
            Algorithm::Heap => heap::PSEUDOCODE,
        }
    }

    /// Run this algorithm over `values`, reporting through `sink`.
    /// Suspends at every `delay()`; unwinds with [`SortInterrupted`] when
    /// the run is cancelled.
    pub fn sort<T>(self, values: &mut [T], sink: &StepSink) -> Result<(), SortInterrupted>
    where
        T: Ord + Copy + Into<u32>,
    {
        match self {
            Algorithm::Bubble => bubble::sort(values, sink),
            Algorithm::Insertion => insertion::sort(values, sink),
            Algorithm::Selection => selection::sort(values, sink),
            Algorithm::Quick => quick::sort(values, sink),
            Algorithm::Merge => merge::sort(values, sink),
            Algorithm::Heap => heap::sort(values, sink),
        }
    }
}
