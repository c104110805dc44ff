//! Complement search: for each `x`, ask whether `target - x` was already seen.
//!
//! Variables:
//!   seen : HashMap<i64, usize>  — value -> most recent index
//!
//! Equations:
//!   c(x)          = target - x                       (additive)
//!   c(x)          = target / x  iff x | target       (multiplicative)
//!   pair at j     = (seen[c(nums[j])], j)            O(n) total

use std::collections::{HashMap, HashSet};

/// How the partner of a value is derived from the target.
pub trait Complement {
    fn complement(&self, target: i64, value: i64) -> Option<i64>;
}

/// `a + b = target`
pub struct Additive;

/// `a * b = target`
pub struct Multiplicative;

impl Complement for Additive {
    fn complement(&self, target: i64, value: i64) -> Option<i64> {
        target.checked_sub(value)
    }
}

impl Complement for Multiplicative {
    fn complement(&self, target: i64, value: i64) -> Option<i64> {
        if value == 0 || target % value != 0 {
            return None;
        }
        Some(target / value)
    }
}

/// First pair `(i, j)`, `i < j`, whose values combine to `target` under `op`.
pub fn find_complement_pair<C: Complement>(nums: &[i64], target: i64, op: &C) -> Option<(usize, usize)> {
    let mut seen: HashMap<i64, usize> = HashMap::with_capacity(nums.len());
    for (j, &num) in nums.iter().enumerate() {
        if let Some(i) = op.complement(target, num).and_then(|c| seen.get(&c)) {
            return Some((*i, j));
        }
        seen.insert(num, j);
    }
    None
}

/// Indices of the first pair summing to `target`.
pub fn two_sum(nums: &[i64], target: i64) -> Option<(usize, usize)> {
    find_complement_pair(nums, target, &Additive)
}

pub fn two_sum_brute_force(nums: &[i64], target: i64) -> Option<(usize, usize)> {
    for j in 1..nums.len() {
        for i in 0..j {
            if nums[i].checked_add(nums[j]) == Some(target) {
                return Some((i, j));
            }
        }
    }
    None
}

/// Values `(complement, current)` of the first pair summing to `target`.
pub fn two_sum_values(nums: &[i64], target: i64) -> Option<(i64, i64)> {
    let mut seen = HashSet::with_capacity(nums.len());
    for &num in nums {
        if let Some(c) = target.checked_sub(num).filter(|c| seen.contains(c)) {
            return Some((c, num));
        }
        seen.insert(num);
    }
    None
}

pub fn has_pair_with_sum(nums: &[i64], target: i64) -> bool {
    two_sum_values(nums, target).is_some()
}

/// One pair per right-hand index, paired with the most recent matching left index.
pub fn two_sum_all_pairs(nums: &[i64], target: i64) -> Vec<(usize, usize)> {
    let mut seen: HashMap<i64, usize> = HashMap::new();
    let mut pairs = Vec::new();
    for (j, &num) in nums.iter().enumerate() {
        if let Some(&i) = target.checked_sub(num).and_then(|c| seen.get(&c)) {
            pairs.push((i, j));
        }
        seen.insert(num, j);
    }
    pairs
}

/// Number of index pairs `i < j` with `nums[i] + nums[j] == target`.
pub fn count_pairs(nums: &[i64], target: i64) -> usize {
    let mut seen: HashMap<i64, usize> = HashMap::new();
    let mut count = 0;
    for &num in nums {
        if let Some(&n) = target.checked_sub(num).and_then(|c| seen.get(&c)) {
            count += n;
        }
        *seen.entry(num).or_insert(0) += 1;
    }
    count
}
