//! Array exercises: positional edits, single-pass scans, ranking and subarrays.

pub mod editing;
pub mod ranking;
pub mod scanning;
pub mod subarray;

pub use ranking::{kth_largest, kth_largest_heap, second_largest, third_largest};
pub use subarray::{max_subarray_sum, merge_intervals, product_except_self, Interval};
