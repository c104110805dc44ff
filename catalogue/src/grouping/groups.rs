//! Ordered multimap used by every grouping problem.
//!
//! Variables:
//!   buckets : Vec<(K, Vec<T>)>   — groups in first-seen key order
//!   index   : HashMap<K, usize>  — key -> bucket position
//!
//! Equations:
//!   insert(k, t): bucket(k).push(t), creating it at the end if absent    O(1) amortised
//!   group_by(xs, f) = fold insert(f(x), x) over xs                        O(n · cost(f))

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone)]
pub struct Groups<K: Hash + Eq + Clone, T> {
    buckets: Vec<(K, Vec<T>)>,
    index:   HashMap<K, usize>,
}

impl<K: Hash + Eq + Clone, T> Default for Groups<K, T> {
    fn default() -> Self { Self::new() }
}

impl<K: Hash + Eq + Clone, T> Groups<K, T> {
    pub fn new() -> Self {
        Self { buckets: Vec::new(), index: HashMap::new() }
    }

    pub fn insert(&mut self, key: K, item: T) {
        match self.index.get(&key) {
            Some(&slot) => self.buckets[slot].1.push(item),
            None => {
                self.index.insert(key.clone(), self.buckets.len());
                self.buckets.push((key, vec![item]));
            }
        }
    }

    pub fn get(&self, key: &K) -> Option<&[T]> {
        self.index.get(key).map(|&slot| self.buckets[slot].1.as_slice())
    }

    pub fn len(&self) -> usize     { self.buckets.len() }
    pub fn is_empty(&self) -> bool { self.buckets.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &[T])> {
        self.buckets.iter().map(|(k, v)| (k, v.as_slice()))
    }

    pub fn into_values(self) -> Vec<Vec<T>> {
        self.buckets.into_iter().map(|(_, v)| v).collect()
    }

    pub fn into_pairs(self) -> Vec<(K, Vec<T>)> { self.buckets }
}

impl<K: Hash + Eq + Clone, T> FromIterator<(K, T)> for Groups<K, T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut groups = Self::new();
        for (k, t) in iter {
            groups.insert(k, t);
        }
        groups
    }
}

pub fn group_by<T, K, F>(items: impl IntoIterator<Item = T>, mut key: F) -> Groups<K, T>
where
    K: Hash + Eq + Clone,
    F: FnMut(&T) -> K,
{
    items.into_iter().map(|item| (key(&item), item)).collect()
}
