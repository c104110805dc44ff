//! Two-pointer scans: converging from both ends, or a slow/fast pair moving
//! in the same direction.

pub mod containers;
pub mod in_place;
pub mod pairs;
pub mod window;

pub use containers::{max_area, trap_water};
pub use in_place::{move_zeros, remove_duplicates_sorted, reverse_in_place};
pub use pairs::{three_sum, two_sum_sorted};
pub use window::{is_palindrome_alnum, longest_unique_substring};
