use std::collections::{HashMap, VecDeque};

/// Least-recently-used cache. `order` holds keys from least to most recent.
pub struct LruCache<K: Eq + std::hash::Hash + Clone, V> {
    capacity: usize,
    map: HashMap<K, V>,
    order: VecDeque<K>,
}

impl<K: Eq + std::hash::Hash + Clone, V> LruCache<K, V> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            map: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
        }
    }

    /// Inserts or overwrites `key`, evicting the least recent entry when full.
    /// Returns the evicted key.
    pub fn put(&mut self, key: K, value: V) -> Option<K> {
        if self.capacity == 0 {
            return None;
        }
        if self.map.contains_key(&key) {
            self.touch(&key);
            self.map.insert(key, value);
            return None;
        }
        let mut evicted = None;
        if self.map.len() >= self.capacity {
            if let Some(old) = self.order.pop_front() {
                self.map.remove(&old);
                evicted = Some(old);
            }
        }
        self.map.insert(key.clone(), value);
        self.order.push_back(key);
        evicted
    }

    /// Reads `key` and marks it most recently used.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        if self.map.contains_key(key) {
            self.touch(key);
        }
        self.map.get(key)
    }

    /// Membership test that leaves recency untouched.
    pub fn contains(&self, key: &K) -> bool { self.map.contains_key(key) }
    pub fn len(&self) -> usize               { self.map.len() }
    pub fn is_empty(&self) -> bool           { self.map.is_empty() }
    pub fn capacity(&self) -> usize          { self.capacity }

    /// Keys from least to most recently used.
    pub fn keys(&self) -> impl Iterator<Item = &K> { self.order.iter() }

    fn touch(&mut self, key: &K) {
        if let Some(pos) = self.order.iter().position(|k| k == key) {
            if let Some(k) = self.order.remove(pos) {
                self.order.push_back(k);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evicts_least_recently_used() {
        let mut cache = LruCache::new(2);
        cache.put("a", 1);
        cache.put("b", 2);
        assert_eq!(cache.get(&"a"), Some(&1));
        assert_eq!(cache.put("c", 3), Some("b"));
        assert!(!cache.contains(&"b"));
        assert_eq!(cache.keys().copied().collect::<Vec<_>>(), vec!["a", "c"]);
    }

    #[test]
    fn overwrite_refreshes_without_growing() {
        let mut cache = LruCache::new(2);
        cache.put(1, "one");
        cache.put(2, "two");
        assert_eq!(cache.put(1, "uno"), None);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.put(3, "three"), Some(2));
        assert_eq!(cache.get(&1), Some(&"uno"));
    }

    #[test]
    fn contains_does_not_refresh() {
        let mut cache = LruCache::new(2);
        cache.put('x', 0);
        cache.put('y', 0);
        assert!(cache.contains(&'x'));
        assert_eq!(cache.put('z', 0), Some('x'));
    }

    #[test]
    fn zero_capacity_stores_nothing() {
        let mut cache: LruCache<u8, u8> = LruCache::new(0);
        assert_eq!(cache.put(1, 1), None);
        assert!(cache.is_empty());
        assert_eq!(cache.get(&1), None);
    }
}
