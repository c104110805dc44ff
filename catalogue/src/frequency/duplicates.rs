use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use super::counter::FrequencyMap;

/// Returns on the first repeat.
pub fn contains_duplicate<T: Hash + Eq>(items: &[T]) -> bool {
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().any(|item| !seen.insert(item))
}

pub fn all_unique<T: Hash + Eq>(items: &[T]) -> bool {
    !contains_duplicate(items)
}

/// The first element whose value already appeared earlier.
pub fn first_duplicate<T: Hash + Eq + Clone>(items: &[T]) -> Option<T> {
    let mut seen = HashSet::new();
    items.iter().find(|item| !seen.insert(*item)).cloned()
}

/// Every value that occurs more than once, each reported once, in first-seen order.
pub fn find_all_duplicates<T: Hash + Eq + Clone>(items: &[T]) -> Vec<T> {
    let counts: FrequencyMap<T> = items.iter().cloned().collect();
    counts.more_than(1).into_iter().cloned().collect()
}

/// The first element that occurs exactly once.
pub fn first_unique<T: Hash + Eq + Clone>(items: &[T]) -> Option<T> {
    let counts: FrequencyMap<&T> = items.iter().collect();
    items.iter().find(|item| counts.count(item) == 1).cloned()
}

/// Char index (not byte offset) of the first non-repeating character.
pub fn first_unique_char_index(s: &str) -> Option<usize> {
    let counts: FrequencyMap<char> = s.chars().collect();
    s.chars().position(|ch| counts.count(&ch) == 1)
}

/// True when two equal values sit at most `k` positions apart.
pub fn contains_nearby_duplicate<T: Hash + Eq>(items: &[T], k: usize) -> bool {
    let mut last_seen: HashMap<&T, usize> = HashMap::new();
    for (i, item) in items.iter().enumerate() {
        if let Some(&j) = last_seen.get(item) {
            if i - j <= k {
                return true;
            }
        }
        last_seen.insert(item, i);
    }
    false
}

/// Same answer as [`contains_nearby_duplicate`] using a window set of at most `k` values.
pub fn contains_nearby_duplicate_window<T: Hash + Eq>(items: &[T], k: usize) -> bool {
    let mut window: HashSet<&T> = HashSet::new();
    for (i, item) in items.iter().enumerate() {
        if !window.insert(item) {
            return true;
        }
        if window.len() > k {
            window.remove(&items[i - k]);
        }
    }
    false
}

pub fn count_distinct<T: Hash + Eq>(items: &[T]) -> usize {
    items.iter().collect::<HashSet<_>>().len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_duplicates() {
        assert!(contains_duplicate(&[1, 2, 3, 1]));
        assert!(!contains_duplicate(&[1, 2, 3, 4]));
        assert!(all_unique::<i32>(&[]));
    }

    #[test]
    fn first_duplicate_is_first_repeat_not_first_value() {
        assert_eq!(first_duplicate(&[2, 1, 3, 5, 3, 2]), Some(3));
        assert_eq!(first_duplicate(&[1, 2, 3]), None);
    }

    #[test]
    fn all_duplicates_reported_once() {
        assert_eq!(find_all_duplicates(&[4, 3, 2, 7, 8, 2, 3, 1, 2]), vec![3, 2]);
    }

    #[test]
    fn first_unique_values() {
        assert_eq!(first_unique(&[4, 5, 1, 2, 0, 4]), Some(5));
        assert_eq!(first_unique(&[1, 1]), None);
        assert_eq!(first_unique_char_index("leetcode"), Some(0));
        assert_eq!(first_unique_char_index("loveleetcode"), Some(2));
        assert_eq!(first_unique_char_index("aabb"), None);
    }

    #[test]
    fn nearby_duplicates_agree() {
        let cases: [(&[i32], usize, bool); 4] = [
            (&[1, 2, 3, 1], 3, true),
            (&[1, 0, 1, 1], 1, true),
            (&[1, 2, 3, 1, 2, 3], 2, false),
            (&[1, 1], 0, false),
        ];
        for (nums, k, expected) in cases {
            assert_eq!(contains_nearby_duplicate(nums, k), expected, "{nums:?} k={k}");
            assert_eq!(contains_nearby_duplicate_window(nums, k), expected, "{nums:?} k={k}");
        }
    }

    #[test]
    fn distinct_count() {
        assert_eq!(count_distinct(&["a", "b", "a"]), 2);
    }
}
