//! String exercises: palindromes, character profiles, transformations,
//! parsing and pattern matching.

pub mod matching;
pub mod palindrome;
pub mod parsing;
pub mod profile;
pub mod transform;

pub use profile::{analyze, StringProfile};
pub use transform::{apply_pipeline, Transform};
