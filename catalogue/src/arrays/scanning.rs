use serde::Serialize;

use crate::error::{CatalogueError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub min:   i64,
    pub max:   i64,
    pub sum:   i64,
    pub count: usize,
}

/// Minimum and maximum in a single pass.
pub fn find_min_max(nums: &[i64]) -> Result<(i64, i64)> {
    let (&first, rest) = nums.split_first().ok_or(CatalogueError::EmptyInput)?;
    Ok(rest.iter().fold((first, first), |(lo, hi), &n| (lo.min(n), hi.max(n))))
}

/// Index of the first maximum.
pub fn find_max_index(nums: &[i64]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, &n) in nums.iter().enumerate() {
        if best.map_or(true, |b| n > nums[b]) {
            best = Some(i);
        }
    }
    best
}

/// The value missing from a permutation of `1..=n` with one element removed.
/// `None` when the sum exceeds `n(n+1)/2`, so no single value can be missing.
pub fn find_missing_number(nums: &[u64]) -> Option<u64> {
    let n = nums.len() as u128 + 1;
    let expected = n * (n + 1) / 2;
    let actual = nums.iter().map(|&x| u128::from(x)).sum::<u128>();
    let missing = expected.checked_sub(actual)?;
    u64::try_from(missing).ok().filter(|&m| m != 0)
}

/// True when `n` equals the sum of its digits each raised to the digit count.
pub fn is_armstrong(n: u64) -> bool {
    let digits: Vec<u64> = n.to_string().bytes().map(|b| u64::from(b - b'0')).collect();
    let power = digits.len() as u32;
    let mut total: u64 = 0;
    for d in digits {
        match d.checked_pow(power).and_then(|p| total.checked_add(p)) {
            Some(t) => total = t,
            None => return false,
        }
    }
    total == n
}

/// Element-wise sum of two equal-length slices.
pub fn add_arrays(left: &[i64], right: &[i64]) -> Result<Vec<i64>> {
    if left.len() != right.len() {
        return Err(CatalogueError::LengthMismatch { left: left.len(), right: right.len() });
    }
    left.iter()
        .zip(right)
        .map(|(a, b)| a.checked_add(*b).ok_or(CatalogueError::Overflow))
        .collect()
}

pub fn statistics(nums: &[i64]) -> Result<Statistics> {
    let (min, max) = find_min_max(nums)?;
    let sum = nums
        .iter()
        .try_fold(0i64, |acc, &n| acc.checked_add(n))
        .ok_or(CatalogueError::Overflow)?;
    Ok(Statistics { min, max, sum, count: nums.len() })
}
