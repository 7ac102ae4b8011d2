//! Bubble Sort Trace
//!
//! Bubble sort over `i32` slices in two flavours: a basic version that always
//! runs n-1 passes and an optimized one that stops once a pass makes no swap.
//! Every comparison can be traced, which makes the O(n²) vs O(n) best case
//! difference visible step by step.

pub mod bubble;
pub mod cli;
pub mod error;
pub mod render;
pub mod trace;

pub use bubble::{basic_sort, optimized_sort, sort_to, BasicBubbleSort, OptimizedBubbleSort};
pub use error::{Result, TraceError};
pub use render::{render, write_trace, Rendered, TraceLine};
pub use trace::{swap, SortStats, Step, Trace, Variant};

/// Trait for sorting implementations
pub trait Sorter {
    /// Sort the slice in-place in ascending order
    fn sort(&self, data: &mut [i32]);
}

/// Non-decreasing order check
pub fn is_sorted(data: &[i32]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256PlusPlus;

    /// Reference result for the bubble sorts
    struct StdSort;

    impl Sorter for StdSort {
        fn sort(&self, data: &mut [i32]) {
            data.sort();
        }
    }

    fn test_sorter<S: Sorter>(sorter: &S) {
        // Empty
        let mut empty: Vec<i32> = vec![];
        sorter.sort(&mut empty);
        assert!(empty.is_empty());

        // Single element
        let mut single = vec![42];
        sorter.sort(&mut single);
        assert_eq!(single, vec![42]);

        // Already sorted
        let mut sorted: Vec<i32> = (0..100).collect();
        sorter.sort(&mut sorted);
        assert_eq!(sorted, (0..100).collect::<Vec<i32>>());

        // Reverse sorted
        let mut reverse: Vec<i32> = (0..100).rev().collect();
        sorter.sort(&mut reverse);
        assert!(is_sorted(&reverse));

        // Random, checked against std
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(12345);
        let mut random: Vec<i32> = (0..500).map(|_| rng.gen_range(-10000..10000)).collect();
        let mut expected = random.clone();
        StdSort.sort(&mut expected);
        sorter.sort(&mut random);
        assert_eq!(random, expected);

        // All same
        let mut same = vec![7; 100];
        sorter.sort(&mut same);
        assert_eq!(same, vec![7; 100]);

        // Two elements
        let mut two = vec![5, 3];
        sorter.sort(&mut two);
        assert_eq!(two, vec![3, 5]);

        // Extremes
        let mut extremes = vec![i32::MAX, 0, i32::MIN, -1];
        sorter.sort(&mut extremes);
        assert_eq!(extremes, vec![i32::MIN, -1, 0, i32::MAX]);
    }

    #[test]
    fn test_basic_bubble() {
        test_sorter(&BasicBubbleSort);
    }

    #[test]
    fn test_optimized_bubble() {
        test_sorter(&OptimizedBubbleSort);
    }

    #[test]
    fn test_std_sort() {
        test_sorter(&StdSort);
    }

    #[test]
    fn test_is_sorted() {
        assert!(is_sorted(&[]));
        assert!(is_sorted(&[1, 1, 2]));
        assert!(!is_sorted(&[2, 1]));
    }
}
