//! Bloom filter with two hash positions per item.
//!
//! Variables:
//!   bits : Vec<bool>  — length M
//!
//! Equations:
//!   h1(x) = sip(x) mod M
//!   h2(x) = sip(x, SALT) mod M
//!   add(x):           bits[h1] = bits[h2] = true
//!   might_contain(x): bits[h1] && bits[h2]      (false => definitely absent)

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

const SALT: &str = "salt";

pub struct BloomFilter {
    bits: Vec<bool>,
    inserted: usize,
}

impl Default for BloomFilter {
    fn default() -> Self { Self::with_size(100) }
}

impl BloomFilter {
    /// `size` is clamped to at least one bit.
    pub fn with_size(size: usize) -> Self {
        Self { bits: vec![false; size.max(1)], inserted: 0 }
    }

    fn positions<T: Hash + ?Sized>(&self, item: &T) -> [usize; 2] {
        let m = self.bits.len() as u64;
        let mut h1 = DefaultHasher::new();
        item.hash(&mut h1);
        let mut h2 = DefaultHasher::new();
        item.hash(&mut h2);
        SALT.hash(&mut h2);
        [(h1.finish() % m) as usize, (h2.finish() % m) as usize]
    }

    pub fn add<T: Hash + ?Sized>(&mut self, item: &T) {
        for p in self.positions(item) {
            self.bits[p] = true;
        }
        self.inserted += 1;
    }

    /// May return false positives, never false negatives.
    pub fn might_contain<T: Hash + ?Sized>(&self, item: &T) -> bool {
        self.positions(item).iter().all(|&p| self.bits[p])
    }

    pub fn size(&self) -> usize     { self.bits.len() }
    pub fn inserted(&self) -> usize { self.inserted }
    pub fn set_bits(&self) -> usize { self.bits.iter().filter(|b| **b).count() }
}
