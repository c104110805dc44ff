//! Insertion-ordered frequency table.
//!
//! Variables:
//!   entries : Vec<(T, usize)>     — (key, count) in first-seen order
//!   index   : HashMap<T, usize>   — key -> position in `entries`
//!
//! Equations:
//!   increment(k): index[k] exists => entries[index[k]].1 += 1     O(1)
//!                 else push (k, 1), index[k] = len - 1             O(1) amortised
//!   count(k)    = entries[index[k]].1, or 0 when absent           O(1)
//!   most_common(n): stable sort by count desc, first n            O(U log U)

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone)]
pub struct FrequencyMap<T: Hash + Eq + Clone> {
    entries: Vec<(T, usize)>,
    index:   HashMap<T, usize>,
}

impl<T: Hash + Eq + Clone> Default for FrequencyMap<T> {
    fn default() -> Self { Self::new() }
}

impl<T: Hash + Eq + Clone> FrequencyMap<T> {
    pub fn new() -> Self {
        Self { entries: Vec::new(), index: HashMap::new() }
    }

    pub fn increment(&mut self, key: T) {
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    pub fn count(&self, key: &T) -> usize {
        self.index.get(key).map_or(0, |&slot| self.entries[slot].1)
    }

    pub fn contains(&self, key: &T) -> bool { self.index.contains_key(key) }
    pub fn len(&self) -> usize              { self.entries.len() }
    pub fn is_empty(&self) -> bool          { self.entries.is_empty() }
    pub fn total(&self) -> usize            { self.entries.iter().map(|(_, c)| c).sum() }

    /// Iterate `(key, count)` in the order keys were first seen.
    pub fn iter(&self) -> impl Iterator<Item = (&T, usize)> {
        self.entries.iter().map(|(k, c)| (k, *c))
    }

    pub fn keys(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Up to `n` entries by descending count. Equal counts keep first-seen order.
    pub fn most_common(&self, n: usize) -> Vec<(&T, usize)> {
        let mut ranked: Vec<(&T, usize)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }

    /// Highest count; the earliest key wins a tie.
    pub fn most_frequent(&self) -> Option<(&T, usize)> {
        let mut best: Option<(&T, usize)> = None;
        for (k, c) in self.iter() {
            if best.map_or(true, |(_, bc)| c > bc) {
                best = Some((k, c));
            }
        }
        best
    }

    /// Lowest count; the latest key wins a tie, matching the tail of `most_common`.
    pub fn least_frequent(&self) -> Option<(&T, usize)> {
        let mut worst: Option<(&T, usize)> = None;
        for (k, c) in self.iter() {
            if worst.map_or(true, |(_, wc)| c <= wc) {
                worst = Some((k, c));
            }
        }
        worst
    }

    pub fn with_count(&self, n: usize) -> Vec<&T> {
        self.iter().filter(|&(_, c)| c == n).map(|(k, _)| k).collect()
    }

    pub fn more_than(&self, n: usize) -> Vec<&T> {
        self.iter().filter(|&(_, c)| c > n).map(|(k, _)| k).collect()
    }

    /// Keys seen exactly once.
    pub fn unique(&self) -> Vec<&T> { self.with_count(1) }

    /// Equal when both hold the same keys with the same counts, ignoring order.
    pub fn same_counts(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, c)| other.count(k) == c)
    }
}

impl<T: Hash + Eq + Clone> FromIterator<T> for FrequencyMap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut map = Self::new();
        for item in iter {
            map.increment(item);
        }
        map
    }
}

impl<T: Hash + Eq + Clone> Extend<T> for FrequencyMap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.increment(item);
        }
    }
}

/// The `k` most frequent items, most frequent first.
pub fn top_k_frequent<T: Hash + Eq + Clone>(items: &[T], k: usize) -> Vec<T> {
    let counts: FrequencyMap<T> = items.iter().cloned().collect();
    counts.most_common(k).into_iter().map(|(item, _)| item.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_keep_first_seen_order() {
        let counts: FrequencyMap<char> = "hello".chars().collect();
        let pairs: Vec<(char, usize)> = counts.iter().map(|(k, c)| (*k, c)).collect();
        assert_eq!(pairs, vec![('h', 1), ('e', 1), ('l', 2), ('o', 1)]);
        assert_eq!(counts.total(), 5);
        assert_eq!(counts.count(&'z'), 0);
    }

    #[test]
    fn most_common_breaks_ties_by_first_seen() {
        let counts: FrequencyMap<&str> = ["b", "a", "a", "b", "c"].into_iter().collect();
        let top = counts.most_common(2);
        assert_eq!(top, vec![(&"b", 2), (&"a", 2)]);
        assert_eq!(counts.most_frequent(), Some((&"b", 2)));
        assert_eq!(counts.least_frequent(), Some((&"c", 1)));
    }

    #[test]
    fn filters_by_count() {
        let counts: FrequencyMap<i32> = [1, 2, 2, 3, 3, 3].into_iter().collect();
        assert_eq!(counts.with_count(2), vec![&2]);
        assert_eq!(counts.more_than(1), vec![&2, &3]);
        assert_eq!(counts.unique(), vec![&1]);
    }

    #[test]
    fn top_k_returns_most_frequent_first() {
        assert_eq!(top_k_frequent(&[1, 1, 1, 2, 2, 3], 2), vec![1, 2]);
        assert!(top_k_frequent::<i32>(&[], 3).is_empty());
    }

    #[test]
    fn empty_map_has_no_extremes() {
        let counts: FrequencyMap<u8> = FrequencyMap::new();
        assert!(counts.is_empty());
        assert_eq!(counts.most_frequent(), None);
        assert_eq!(counts.least_frequent(), None);
    }
}
