//! # DSA Catalogue
//!
//! Classic array, hash map, set and string exercises, a handful of small
//! map-backed systems, and object modelling with traits.
//!
//! ## Modules
//!
//! - `frequency` – Frequency counter (`FrequencyMap`), text counting, duplicate detection
//! - `complement` – Complement search (two-sum family, generic over the pairing rule)
//! - `two_pointer` – Converging and same-direction scans, sliding windows
//! - `grouping` – Grouping engine (anagrams, digit sums, lengths, shift patterns)
//! - `arrays` – Positional edits, scans, ranking, subarrays and intervals
//! - `strings` – Palindromes, profiles, transformations, parsing, matching
//! - `sets` – Set algebra, membership problems, tuple/number helpers
//! - `systems` – LRU cache, Bloom filter, permissions, tagging, social graph
//! - `modeling` – Encapsulation, composition and trait-object polymorphism
//! - `catalogue_map` – Technique and complexity of every algorithm
//! - `walkthrough` – Runnable demos with expected answers
//!
//! ---
//!
//! ## Usage Example
//!
//! ```rust
//! use catalogue::complement::two_sum;
//! use catalogue::grouping::group_anagrams;
//!
//! assert_eq!(two_sum(&[2, 7, 11, 15], 9), Some((0, 1)));
//!
//! let groups = group_anagrams(&["eat", "tea", "tan", "ate", "nat", "bat"]);
//! assert_eq!(groups.len(), 3);
//! ```

pub mod arrays;
pub mod catalogue_map;
pub mod complement;
pub mod error;
pub mod frequency;
pub mod grouping;
pub mod modeling;
pub mod sets;
pub mod strings;
pub mod systems;
pub mod two_pointer;
pub mod walkthrough;

pub use error::{CatalogueError, Result};
