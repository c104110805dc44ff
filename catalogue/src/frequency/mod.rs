//! Frequency counting and the duplicate-detection problems built on it.

pub mod counter;
pub mod duplicates;
pub mod text;

pub use counter::{top_k_frequent, FrequencyMap};
