//! Grouping engine: bucket items by a derived key, keeping first-seen key order.

pub mod groups;
pub mod keys;
pub mod problems;

pub use groups::{group_by, Groups};
pub use problems::{
    group_anagrams, group_by_digit_sum, group_by_first_char, group_by_length, group_shifted_strings,
};
