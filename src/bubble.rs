use std::io::{self, Write};

use crate::render::write_trace;
use crate::trace::{SortStats, Trace, Variant};
use crate::{Result, Sorter};

/// Bubble sort with all n-1 passes, whatever the input.
///
/// With `verbose` set, every comparison is printed to stdout.
pub fn basic_sort(data: &mut [i32], verbose: bool) -> Result<SortStats> {
    sort_to(data, Variant::Basic, verbose, &mut io::stdout().lock())
}

/// Bubble sort that stops after the first pass without a swap.
///
/// With `verbose` set, every comparison is printed to stdout.
pub fn optimized_sort(data: &mut [i32], verbose: bool) -> Result<SortStats> {
    sort_to(data, Variant::Optimized, verbose, &mut io::stdout().lock())
}

/// Sort `data` in place, writing the trace to `out` when `verbose`.
pub fn sort_to<W: Write>(
    data: &mut [i32],
    variant: Variant,
    verbose: bool,
    out: &mut W,
) -> Result<SortStats> {
    let trace = Trace::new(data, variant);
    if verbose {
        write_trace(trace, out)
    } else {
        Ok(trace.finish())
    }
}

/// Classic O(n²) bubble sort, no early exit
pub struct BasicBubbleSort;

impl Sorter for BasicBubbleSort {
    fn sort(&self, data: &mut [i32]) {
        Trace::new(data, Variant::Basic).finish();
    }
}

/// Bubble sort with the swapped-flag early exit; O(n) on sorted input
pub struct OptimizedBubbleSort;

impl Sorter for OptimizedBubbleSort {
    fn sort(&self, data: &mut [i32]) {
        Trace::new(data, Variant::Optimized).finish();
    }
}
