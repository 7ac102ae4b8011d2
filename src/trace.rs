//! Step-at-a-time bubble sort.
//!
//! [`Trace`] owns the loop state of one sort and yields a [`Step`] per
//! comparison. Nothing is buffered: a caller renders each step as it arrives
//! or drains the iterator to get the sorted slice and its [`SortStats`].

use std::fmt;
use std::iter::FusedIterator;

use log::{debug, info};
use serde::Serialize;

/// Which bubble sort to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Always n-1 passes
    Basic,
    /// Stops after the first pass without a swap
    Optimized,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic => write!(f, "basic"),
            Self::Optimized => write!(f, "optimized"),
        }
    }
}

/// One comparison of `data[j]` with `data[j + 1]` during pass `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// 1-based comparison counter
    pub number: usize,
    pub i: usize,
    pub j: usize,
    /// Values at `j` and `j + 1` after the comparison (and swap, if any)
    pub pair: (i32, i32),
    pub swapped: bool,
}

impl Step {
    pub fn status(&self) -> &'static str {
        if self.swapped {
            "Next Swap"
        } else {
            "**No Swap"
        }
    }
}

/// Counters accumulated over one sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SortStats {
    pub comparisons: usize,
    pub swaps: usize,
    pub passes: usize,
    /// The optimized variant stopped before running all n-1 passes
    pub early_exit: bool,
}

/// Lazy bubble sort over a borrowed slice.
///
/// Each call to [`Iterator::next`] performs exactly one comparison (and the
/// swap it calls for) and reports it. The iterator is fused and cannot be
/// restarted; once it returns `None` the slice is sorted.
///
/// The slice stays readable through [`Trace::sequence`] between steps, which
/// is how renderers show the full array state per comparison:
///
/// ```
/// use bubble_trace::{Trace, Variant};
///
/// let mut data = [3, 1, 2];
/// let mut trace = Trace::new(&mut data, Variant::Basic);
/// let first = trace.next().unwrap();
/// assert!(first.swapped);
/// assert_eq!(trace.sequence(), &[1, 3, 2]);
/// let stats = trace.finish();
/// assert_eq!(stats.comparisons, 3);
/// assert_eq!(data, [1, 2, 3]);
/// ```
pub struct Trace<'a> {
    data: &'a mut [i32],
    variant: Variant,
    i: usize,
    j: usize,
    pass_swaps: usize,
    stats: SortStats,
    done: bool,
}

impl<'a> Trace<'a> {
    pub fn new(data: &'a mut [i32], variant: Variant) -> Self {
        let done = data.len() < 2;
        Self {
            data,
            variant,
            i: 0,
            j: 0,
            pass_swaps: 0,
            stats: SortStats::default(),
            done,
        }
    }

    /// Current state of the slice being sorted
    pub fn sequence(&self) -> &[i32] {
        self.data
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Counters so far; final once the iterator is exhausted
    pub fn stats(&self) -> SortStats {
        self.stats
    }

    pub fn is_finished(&self) -> bool {
        self.done
    }

    /// Run the remaining comparisons without reporting them.
    pub fn finish(mut self) -> SortStats {
        self.by_ref().for_each(drop);
        self.stats
    }

    fn end_pass(&mut self) {
        let n = self.data.len();
        self.stats.passes += 1;
        debug!(
            "{} pass {} done: {} swaps",
            self.variant,
            self.i,
            self.pass_swaps
        );

        let last_pass = self.i + 2 >= n;
        if self.variant == Variant::Optimized && self.pass_swaps == 0 {
            self.done = true;
            if !last_pass {
                self.stats.early_exit = true;
                info!(
                    "optimized: pass {} made no swaps, stopping after {} of {} passes",
                    self.i,
                    self.stats.passes,
                    n - 1
                );
            }
        }

        self.i += 1;
        self.j = 0;
        self.pass_swaps = 0;
        if last_pass {
            self.done = true;
        }

        if self.done {
            info!(
                "{} sort of {} values: {} comparisons, {} swaps, {} passes",
                self.variant,
                n,
                self.stats.comparisons,
                self.stats.swaps,
                self.stats.passes
            );
        }
    }
}

impl Iterator for Trace<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.done {
            return None;
        }

        let (i, j) = (self.i, self.j);
        let swapped = self.data[j] > self.data[j + 1];
        if swapped {
            swap(self.data, j, j + 1);
            self.pass_swaps += 1;
            self.stats.swaps += 1;
        }
        self.stats.comparisons += 1;

        let step = Step {
            number: self.stats.comparisons,
            i,
            j,
            pair: (self.data[j], self.data[j + 1]),
            swapped,
        };

        self.j += 1;
        if self.j + i + 1 == self.data.len() {
            self.end_pass();
        }

        Some(step)
    }
}

impl FusedIterator for Trace<'_> {}

/// Exchange two positions.
///
/// # Panics
///
/// If either index is out of bounds; callers only pass indices inside the
/// current pass.
#[inline]
pub fn swap(data: &mut [i32], x: usize, y: usize) {
    data.swap(x, y);
}
