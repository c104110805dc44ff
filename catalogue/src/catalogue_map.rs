//! Mapping of every public algorithm in this crate to the technique it
//! uses and its time/space cost.

use serde::Serialize;

use crate::walkthrough::Topic;
use Topic::{Arrays, Hashmaps, Modeling, Sets, Strings, Systems};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogueEntry {
    pub path:      &'static str,
    pub topic:     Topic,
    pub technique: &'static str,
    pub time:      &'static str,
    pub space:     &'static str,
}

const fn entry(
    path: &'static str,
    topic: Topic,
    technique: &'static str,
    time: &'static str,
    space: &'static str,
) -> CatalogueEntry {
    CatalogueEntry { path, topic, technique, time, space }
}

pub const CATALOGUE: &[CatalogueEntry] = &[
    // Frequency counter
    entry("frequency::FrequencyMap", Hashmaps, "Frequency counter", "O(1) per update", "O(U)"),
    entry("frequency::top_k_frequent", Hashmaps, "Frequency counter", "O(n + U log U)", "O(U)"),
    entry("frequency::text::count_words", Hashmaps, "Frequency counter", "O(n)", "O(U)"),
    entry("frequency::text::count_letters", Hashmaps, "Frequency counter", "O(n)", "O(U)"),
    entry("frequency::text::count_vowels_consonants", Strings, "Linear scan", "O(n)", "O(1)"),
    entry("frequency::duplicates::contains_duplicate", Hashmaps, "Seen set", "O(n)", "O(n)"),
    entry("frequency::duplicates::first_duplicate", Hashmaps, "Seen set", "O(n)", "O(n)"),
    entry("frequency::duplicates::find_all_duplicates", Hashmaps, "Frequency counter", "O(n)", "O(n)"),
    entry("frequency::duplicates::first_unique", Hashmaps, "Frequency counter", "O(n)", "O(n)"),
    entry("frequency::duplicates::first_unique_char_index", Strings, "Frequency counter", "O(n)", "O(U)"),
    entry("frequency::duplicates::contains_nearby_duplicate", Hashmaps, "Last-index map", "O(n)", "O(n)"),
    entry("frequency::duplicates::contains_nearby_duplicate_window", Sets, "Sliding window set", "O(n)", "O(k)"),
    // Complement search
    entry("complement::two_sum", Hashmaps, "Complement search", "O(n)", "O(n)"),
    entry("complement::two_sum_brute_force", Arrays, "Nested loops", "O(n^2)", "O(1)"),
    entry("complement::two_sum_values", Sets, "Complement search", "O(n)", "O(n)"),
    entry("complement::two_sum_all_pairs", Hashmaps, "Complement search", "O(n)", "O(n)"),
    entry("complement::count_pairs", Hashmaps, "Complement search", "O(n)", "O(n)"),
    entry("complement::find_complement_pair", Hashmaps, "Complement search", "O(n)", "O(n)"),
    // Two-pointer scanner
    entry("two_pointer::two_sum_sorted", Arrays, "Converging pointers", "O(n)", "O(1)"),
    entry("two_pointer::three_sum", Arrays, "Sort + converging pointers", "O(n^2)", "O(1)"),
    entry("two_pointer::move_zeros", Arrays, "Read/write pointers", "O(n)", "O(1)"),
    entry("two_pointer::move_zeros_fill", Arrays, "Read/write pointers", "O(n)", "O(1)"),
    entry("two_pointer::move_zeros_copied", Arrays, "Filter + pad", "O(n)", "O(n)"),
    entry("two_pointer::remove_duplicates_sorted", Arrays, "Read/write pointers", "O(n)", "O(1)"),
    entry("two_pointer::reverse_in_place", Arrays, "Converging pointers", "O(n)", "O(1)"),
    entry("two_pointer::max_area", Arrays, "Converging pointers", "O(n)", "O(1)"),
    entry("two_pointer::trap_water", Arrays, "Converging pointers", "O(n)", "O(1)"),
    entry("two_pointer::is_palindrome_alnum", Strings, "Converging pointers", "O(n)", "O(n)"),
    entry("two_pointer::longest_unique_substring", Strings, "Sliding window", "O(n)", "O(U)"),
    // Grouping engine
    entry("grouping::group_by", Hashmaps, "Grouping engine", "O(n)", "O(n)"),
    entry("grouping::group_anagrams", Hashmaps, "Grouping by sorted key", "O(n m log m)", "O(n m)"),
    entry("grouping::group_by_digit_sum", Hashmaps, "Grouping engine", "O(n d)", "O(n)"),
    entry("grouping::group_by_length", Hashmaps, "Grouping engine", "O(n)", "O(n)"),
    entry("grouping::group_by_first_char", Hashmaps, "Grouping engine", "O(n)", "O(n)"),
    entry("grouping::group_shifted_strings", Hashmaps, "Grouping by shift pattern", "O(n m)", "O(n m)"),
    // Arrays
    entry("arrays::editing::insert_at", Arrays, "Manual shift", "O(n)", "O(1)"),
    entry("arrays::editing::delete_at", Arrays, "Manual shift", "O(n)", "O(1)"),
    entry("arrays::scanning::find_min_max", Arrays, "Linear scan", "O(n)", "O(1)"),
    entry("arrays::scanning::find_max_index", Arrays, "Linear scan", "O(n)", "O(1)"),
    entry("arrays::scanning::find_missing_number", Arrays, "Arithmetic series", "O(n)", "O(1)"),
    entry("arrays::scanning::is_armstrong", Arrays, "Digit decomposition", "O(d)", "O(d)"),
    entry("arrays::scanning::add_arrays", Arrays, "Element-wise zip", "O(n)", "O(n)"),
    entry("arrays::scanning::statistics", Arrays, "Linear scan", "O(n)", "O(1)"),
    entry("arrays::second_largest", Arrays, "Running top-2", "O(n)", "O(1)"),
    entry("arrays::third_largest", Arrays, "Running top-3", "O(n)", "O(1)"),
    entry("arrays::kth_largest", Arrays, "Partial bubble sort", "O(n k)", "O(k)"),
    entry("arrays::kth_largest_heap", Arrays, "Min-heap of size k", "O(n log k)", "O(k)"),
    entry("arrays::max_subarray_sum", Arrays, "Kadane", "O(n)", "O(1)"),
    entry("arrays::product_except_self", Arrays, "Prefix/suffix products", "O(n)", "O(1) extra"),
    entry("arrays::merge_intervals", Arrays, "Sort + sweep", "O(n log n)", "O(n)"),
    // Strings
    entry("strings::palindrome::is_palindrome_simple", Strings, "Reverse compare", "O(n)", "O(n)"),
    entry("strings::palindrome::longest_palindrome_substring", Strings, "Expand around centre", "O(n^2)", "O(n)"),
    entry("strings::profile::analyze", Strings, "Frequency counter", "O(n)", "O(U)"),
    entry("strings::profile::max_occurring_char", Strings, "Frequency counter", "O(n)", "O(U)"),
    entry("strings::transform::compress", Strings, "Run-length encoding", "O(n)", "O(n)"),
    entry("strings::transform::decompress", Strings, "Run-length decoding", "O(n + output)", "O(output)"),
    entry("strings::transform::remove_duplicate_chars", Strings, "Seen set", "O(n)", "O(U)"),
    entry("strings::transform::reverse_words", Strings, "Split + reverse", "O(n)", "O(n)"),
    entry("strings::transform::title_case", Strings, "Linear scan", "O(n)", "O(n)"),
    entry("strings::transform::toggle_case", Strings, "Linear scan", "O(n)", "O(n)"),
    entry("strings::apply_pipeline", Strings, "Transform pipeline", "O(n t)", "O(n)"),
    entry("strings::parsing::string_to_int", Strings, "Linear scan", "O(n)", "O(1)"),
    entry("strings::parsing::is_valid_parentheses", Strings, "Stack", "O(n)", "O(n)"),
    entry("strings::parsing::zigzag_convert", Strings, "Row simulation", "O(n)", "O(n)"),
    entry("strings::parsing::is_valid_username", Strings, "Character classes", "O(n)", "O(1)"),
    entry("strings::matching::are_anagrams", Strings, "Sorted compare", "O(n log n)", "O(n)"),
    entry("strings::matching::are_anagrams_by_count", Strings, "Frequency counter", "O(n)", "O(U)"),
    entry("strings::matching::longest_common_prefix", Strings, "Horizontal scan", "O(S)", "O(1)"),
    entry("strings::matching::longest_common_prefix_vertical", Strings, "Vertical scan", "O(S)", "O(1)"),
    entry("strings::matching::kmp_search", Strings, "Knuth-Morris-Pratt", "O(n + m)", "O(m)"),
    entry("strings::matching::word_pattern_match", Strings, "Backtracking bijection", "O(n^m)", "O(m)"),
    // Sets
    entry("sets::algebra::intersection", Sets, "Set intersection", "O(n + m)", "O(n)"),
    entry("sets::algebra::union_all", Sets, "Set union", "O(n + m)", "O(n + m)"),
    entry("sets::algebra::symmetric_difference", Sets, "Set difference", "O(n + m)", "O(n + m)"),
    entry("sets::algebra::intersect_all", Sets, "Repeated intersection", "O(total)", "O(n)"),
    entry("sets::algebra::common_in_order", Sets, "Membership filter", "O(n + m)", "O(m)"),
    entry("sets::algebra::detect_changes", Sets, "Set difference", "O(n + m)", "O(n + m)"),
    entry("sets::algebra::cartesian_product", Sets, "Nested iteration", "O(n m)", "O(n m)"),
    entry("sets::algebra::power_set", Sets, "Bitmask enumeration", "O(n 2^n)", "O(n 2^n)"),
    entry("sets::algebra::ranges_overlap", Sets, "Sort + sweep", "O(n log n)", "O(n)"),
    entry("sets::algebra::find_missing_and_duplicate", Sets, "Seen set", "O(n)", "O(n)"),
    entry("sets::is_happy", Sets, "Cycle detection with seen set", "O(log n)", "O(log n)"),
    entry("sets::single_number", Sets, "XOR fold", "O(n)", "O(1)"),
    entry("sets::longest_consecutive", Sets, "Sequence starts in a set", "O(n)", "O(n)"),
    entry("sets::problems::length_of_longest_substring", Sets, "Sliding window set", "O(n)", "O(U)"),
    entry("sets::is_valid_sudoku", Sets, "Row/column/box sets", "O(81)", "O(81)"),
    entry("sets::numbers::is_prime", Sets, "Trial division", "O(sqrt n)", "O(1)"),
    entry("sets::numbers::Fibonacci", Sets, "Memoisation", "O(n)", "O(n)"),
    entry("sets::numbers::divide_with_remainder", Sets, "Floor division", "O(1)", "O(1)"),
    entry("sets::numbers::manhattan_distance", Sets, "Coordinate tuples", "O(1)", "O(1)"),
    // Systems
    entry("systems::LruCache", Systems, "Map + recency queue", "O(n) per touch", "O(capacity)"),
    entry("systems::BloomFilter", Systems, "Bit array, two hashes", "O(1)", "O(bits)"),
    entry("systems::PermissionSystem", Systems, "Role -> action sets", "O(roles)", "O(users + roles)"),
    entry("systems::TaggingSystem", Systems, "Inverted index", "O(tags)", "O(items + tags)"),
    entry("systems::Deduplicator", Systems, "Seen set", "O(1)", "O(n)"),
    entry("systems::SocialNetwork", Systems, "Adjacency sets", "O(degree^2)", "O(V + E)"),
    entry("systems::CoordinateCache", Systems, "Tuple-keyed map", "O(1)", "O(cells)"),
    entry("systems::EdgeWeights", Systems, "Unordered-pair keys", "O(1)", "O(E)"),
    // Modeling
    entry("modeling::BankAccount", Modeling, "Encapsulation", "O(1)", "O(1)"),
    entry("modeling::User", Modeling, "Encapsulation + SHA-256", "O(len)", "O(1)"),
    entry("modeling::Employee", Modeling, "Validated setter", "O(1)", "O(1)"),
    entry("modeling::Manager", Modeling, "Composition", "O(1)", "O(1)"),
    entry("modeling::Shape", Modeling, "Trait objects", "O(1)", "O(1)"),
    entry("modeling::Animal", Modeling, "Default trait methods", "O(1)", "O(1)"),
    entry("modeling::Duck", Modeling, "Several capability traits", "O(1)", "O(1)"),
    entry("modeling::Database", Modeling, "Trait abstraction", "O(1)", "O(1)"),
];

pub fn entries_for(topic: Option<Topic>) -> impl Iterator<Item = &'static CatalogueEntry> {
    CATALOGUE.iter().filter(move |e| topic.map_or(true, |t| e.topic == t))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn paths_are_unique() {
        let paths: HashSet<&str> = CATALOGUE.iter().map(|e| e.path).collect();
        assert_eq!(paths.len(), CATALOGUE.len());
    }

    #[test]
    fn every_topic_is_covered() {
        for topic in Topic::ALL {
            assert!(entries_for(Some(topic)).next().is_some(), "{topic} has no entries");
        }
        assert_eq!(entries_for(None).count(), CATALOGUE.len());
    }

    #[test]
    fn costs_follow_the_implementations() {
        let cost = |path: &str| CATALOGUE.iter().find(|e| e.path == path).map(|e| (e.time, e.space));
        assert_eq!(cost("arrays::kth_largest"), Some(("O(n k)", "O(k)")));
        assert_eq!(cost("sets::algebra::ranges_overlap"), Some(("O(n log n)", "O(n)")));
    }
}
