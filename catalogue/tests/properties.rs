//! Property-based tests: alternative implementations of the same problem
//! must agree, and transformations must keep their contracts.

use catalogue::arrays::{kth_largest, kth_largest_heap, max_subarray_sum, product_except_self};
use catalogue::complement::{count_pairs, two_sum, two_sum_all_pairs, two_sum_brute_force};
use catalogue::error::CatalogueError;
use catalogue::frequency::duplicates::{contains_nearby_duplicate, contains_nearby_duplicate_window};
use catalogue::frequency::FrequencyMap;
use catalogue::grouping::group_anagrams;
use catalogue::grouping::keys::anagram_key;
use catalogue::sets::longest_consecutive;
use catalogue::strings::matching::{are_anagrams, are_anagrams_by_count, kmp_search};
use catalogue::strings::transform::{compress, decompress};
use catalogue::two_pointer::in_place::{move_zeros, move_zeros_copied, move_zeros_fill};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_two_sum_matches_brute_force_existence(
        nums in prop::collection::vec(-50i64..50, 0..30),
        target in -100i64..100,
    ) {
        let fast = two_sum(&nums, target);
        let slow = two_sum_brute_force(&nums, target);
        prop_assert_eq!(fast.is_some(), slow.is_some());
        if let Some((i, j)) = fast {
            prop_assert!(i < j);
            prop_assert_eq!(nums[i] + nums[j], target);
            // Both scan right endpoints in order, so they agree on `j`.
            prop_assert_eq!(Some(j), slow.map(|(_, j)| j));
        }
    }

    #[test]
    fn prop_count_pairs_matches_quadratic_count(
        nums in prop::collection::vec(-10i64..10, 0..25),
        target in -20i64..20,
    ) {
        let mut expected = 0;
        for j in 0..nums.len() {
            for i in 0..j {
                if nums[i] + nums[j] == target {
                    expected += 1;
                }
            }
        }
        prop_assert_eq!(count_pairs(&nums, target), expected);
        for (i, j) in two_sum_all_pairs(&nums, target) {
            prop_assert!(i < j);
            prop_assert_eq!(nums[i] + nums[j], target);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_kth_largest_variants_agree(nums in prop::collection::vec(-1000i64..1000, 1..40), k in 1usize..40) {
        prop_assume!(k <= nums.len());
        let mut sorted = nums.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        prop_assert_eq!(kth_largest(&nums, k), Ok(sorted[k - 1]));
        prop_assert_eq!(kth_largest_heap(&nums, k), Ok(sorted[k - 1]));
    }

    #[test]
    fn prop_kadane_beats_every_window(nums in prop::collection::vec(-100i64..100, 1..30)) {
        let best = max_subarray_sum(&nums).unwrap();
        for i in 0..nums.len() {
            for j in i + 1..=nums.len() {
                prop_assert!(nums[i..j].iter().sum::<i64>() <= best);
            }
        }
    }

    #[test]
    fn prop_product_except_self_matches_wide_product(nums in prop::collection::vec(-1_000_000i64..1_000_000, 0..7)) {
        let wide: Vec<i128> = (0..nums.len())
            .map(|i| nums.iter().enumerate().filter(|&(j, _)| j != i).map(|(_, &n)| i128::from(n)).product())
            .collect();
        match product_except_self(&nums) {
            Ok(out) => prop_assert!(out.iter().zip(&wide).all(|(&o, &w)| i128::from(o) == w)),
            Err(e) => {
                prop_assert_eq!(e, CatalogueError::Overflow);
                prop_assert!(wide.iter().any(|&w| i64::try_from(w).is_err()));
            }
        }
    }

    #[test]
    fn prop_move_zeros_variants_agree(nums in prop::collection::vec(prop_oneof![Just(0i64), -5i64..5], 0..30)) {
        let copied = move_zeros_copied(&nums);
        let mut swapped = nums.clone();
        move_zeros(&mut swapped);
        let mut filled = nums.clone();
        move_zeros_fill(&mut filled);
        prop_assert_eq!(&swapped, &copied);
        prop_assert_eq!(&filled, &copied);
        let non_zero: Vec<i64> = nums.iter().copied().filter(|&x| x != 0).collect();
        prop_assert_eq!(&copied[..non_zero.len()], &non_zero[..]);
        prop_assert!(copied[non_zero.len()..].iter().all(|&x| x == 0));
    }

    #[test]
    fn prop_longest_consecutive_bounded(nums in prop::collection::vec(-50i64..50, 0..40)) {
        let run = longest_consecutive(&nums);
        let distinct: std::collections::HashSet<_> = nums.iter().collect();
        prop_assert!(run <= distinct.len());
        prop_assert_eq!(run == 0, nums.is_empty());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_compress_then_decompress(s in "[a-z]{0,40}") {
        prop_assert_eq!(decompress(&compress(&s)), Ok(s));
    }

    #[test]
    fn prop_nearby_duplicate_variants_agree(nums in prop::collection::vec(0u8..8, 0..30), k in 0usize..10) {
        prop_assert_eq!(contains_nearby_duplicate(&nums, k), contains_nearby_duplicate_window(&nums, k));
    }

    #[test]
    fn prop_anagram_checks_agree(a in "[a-c]{0,8}", b in "[a-c]{0,8}") {
        prop_assert_eq!(are_anagrams(&a, &b), are_anagrams_by_count(&a, &b));
    }

    #[test]
    fn prop_anagram_groups_partition_input(words in prop::collection::vec("[a-d]{1,4}", 0..20)) {
        let groups = group_anagrams(&words);
        let total: usize = groups.iter().map(Vec::len).sum();
        prop_assert_eq!(total, words.len());
        for group in &groups {
            let key = anagram_key(&group[0]);
            prop_assert!(group.iter().all(|w| anagram_key(w) == key));
        }
    }

    #[test]
    fn prop_kmp_matches_naive(text in "[ab]{0,30}", pattern in "[ab]{1,4}") {
        let t: Vec<char> = text.chars().collect();
        let p: Vec<char> = pattern.chars().collect();
        let naive: Vec<usize> = (0..t.len().saturating_sub(p.len() - 1))
            .filter(|&i| i + p.len() <= t.len() && t[i..i + p.len()] == p[..])
            .collect();
        prop_assert_eq!(kmp_search(&text, &pattern), naive);
    }

    #[test]
    fn prop_frequency_total_is_length(s in ".{0,40}") {
        let counts: FrequencyMap<char> = s.chars().collect();
        prop_assert_eq!(counts.total(), s.chars().count());
    }
}
