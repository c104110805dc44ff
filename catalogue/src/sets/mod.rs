//! Set and tuple exercises: set algebra, membership-driven problems and
//! small numeric helpers from the tuple walkthroughs.

pub mod algebra;
pub mod numbers;
pub mod problems;

pub use algebra::{detect_changes, intersection, Changes};
pub use problems::{is_happy, is_valid_sudoku, longest_consecutive, single_number};
