use std::collections::HashSet;
use std::hash::Hash;

/// Remembers every key it has been shown. Composite keys are plain tuples.
#[derive(Debug)]
pub struct Deduplicator<T: Hash + Eq> {
    seen: HashSet<T>,
}

impl<T: Hash + Eq> Default for Deduplicator<T> {
    fn default() -> Self { Self { seen: HashSet::new() } }
}

impl<T: Hash + Eq + Clone> Deduplicator<T> {
    pub fn new() -> Self { Self::default() }

    /// True if `item` was seen before; records it otherwise.
    pub fn is_duplicate(&mut self, item: &T) -> bool {
        if self.seen.contains(item) {
            return true;
        }
        self.seen.insert(item.clone());
        false
    }

    /// First occurrences from `items`, in order, across all earlier calls.
    pub fn process_stream(&mut self, items: impl IntoIterator<Item = T>) -> Vec<T> {
        items.into_iter().filter(|item| !self.is_duplicate(item)).collect()
    }

    pub fn len(&self) -> usize     { self.seen.len() }
    pub fn is_empty(&self) -> bool { self.seen.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_keeps_first_occurrences() {
        let mut dedup = Deduplicator::new();
        assert_eq!(dedup.process_stream([1, 2, 1, 3, 2]), vec![1, 2, 3]);
        assert_eq!(dedup.process_stream([3, 4]), vec![4]);
        assert_eq!(dedup.len(), 4);
    }

    #[test]
    fn composite_keys() {
        let mut dedup: Deduplicator<(u32, &str, u64)> = Deduplicator::new();
        assert!(!dedup.is_duplicate(&(1, "login", 1000)));
        assert!(dedup.is_duplicate(&(1, "login", 1000)));
        assert!(!dedup.is_duplicate(&(1, "login", 1001)));
    }
}
