use serde::{Deserialize, Serialize};

use crate::error::{CatalogueError, Result};

/// Closed interval `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Interval {
    pub start: i64,
    pub end:   i64,
}

impl Interval {
    pub fn new(start: i64, end: i64) -> Self { Self { start, end } }
}

impl From<(i64, i64)> for Interval {
    fn from((start, end): (i64, i64)) -> Self { Self { start, end } }
}

/// Kadane: best sum of a non-empty contiguous run.
pub fn max_subarray_sum(nums: &[i64]) -> Result<i64> {
    let (&first, rest) = nums.split_first().ok_or(CatalogueError::EmptyInput)?;
    let (mut current, mut best) = (first, first);
    for &n in rest {
        // A negative running sum is always dropped, so only a positive one can overflow.
        current = if current > 0 { current.checked_add(n).ok_or(CatalogueError::Overflow)? } else { n };
        best = best.max(current);
    }
    Ok(best)
}

/// `out[i]` is the product of every element except `nums[i]`, without division.
/// `Overflow` when any answer does not fit in `i64`.
pub fn product_except_self(nums: &[i64]) -> Result<Vec<i64>> {
    let zeros = nums.iter().filter(|&&n| n == 0).count();
    if zeros > 1 {
        return Ok(vec![0; nums.len()]);
    }
    // Products of non-zero factors never shrink in magnitude, so an accumulator
    // past 2^63 stays past it and is kept as `None`.
    let mut out = vec![Some(1i128); nums.len()];
    let mut prefix = Some(1i128);
    for (i, &n) in nums.iter().enumerate() {
        out[i] = prefix;
        prefix = bounded_mul(prefix, n);
    }
    let mut suffix = Some(1i128);
    for (i, &n) in nums.iter().enumerate().rev() {
        out[i] = out[i].zip(suffix).map(|(p, s)| p * s);
        suffix = bounded_mul(suffix, n);
    }
    out.into_iter()
        .zip(nums)
        .map(|(product, &n)| match product {
            // One zero elsewhere zeroes this answer whatever the rest multiply to.
            _ if zeros == 1 && n != 0 => Ok(0),
            Some(p) => i64::try_from(p).map_err(|_| CatalogueError::Overflow),
            None => Err(CatalogueError::Overflow),
        })
        .collect()
}

fn bounded_mul(acc: Option<i128>, n: i64) -> Option<i128> {
    const LIMIT: i128 = 1 << 63;
    match n {
        0 => acc,
        _ => acc.map(|p| p * i128::from(n)).filter(|p| p.abs() <= LIMIT),
    }
}

/// Merges overlapping (or touching) intervals; output is sorted by start.
pub fn merge_intervals(mut intervals: Vec<Interval>) -> Vec<Interval> {
    intervals.sort_by_key(|iv| iv.start);
    let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
    for iv in intervals {
        match merged.last_mut() {
            Some(last) if iv.start <= last.end => last.end = last.end.max(iv.end),
            _ => merged.push(iv),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kadane() {
        assert_eq!(max_subarray_sum(&[-2, 1, -3, 4, -1, 2, 1, -5, 4]), Ok(6));
        assert_eq!(max_subarray_sum(&[-3, -1, -2]), Ok(-1));
        assert_eq!(max_subarray_sum(&[]), Err(CatalogueError::EmptyInput));
    }

    #[test]
    fn kadane_at_i64_bounds() {
        assert_eq!(max_subarray_sum(&[i64::MAX, 1]), Err(CatalogueError::Overflow));
        assert_eq!(max_subarray_sum(&[i64::MAX, -1, 1]), Ok(i64::MAX));
        assert_eq!(max_subarray_sum(&[i64::MIN, i64::MIN]), Ok(i64::MIN));
        assert_eq!(max_subarray_sum(&[i64::MIN, 5, i64::MAX - 5]), Ok(i64::MAX));
    }

    #[test]
    fn products() {
        assert_eq!(product_except_self(&[1, 2, 3, 4]), Ok(vec![24, 12, 8, 6]));
        assert_eq!(product_except_self(&[0, 4, 0]), Ok(vec![0, 0, 0]));
        assert_eq!(product_except_self(&[2, 0, 3]), Ok(vec![0, 6, 0]));
        assert_eq!(product_except_self(&[]), Ok(vec![]));
    }

    #[test]
    fn products_past_i64_overflow() {
        let nums: Vec<i64> = (1..=21).collect();
        assert_eq!(product_except_self(&nums), Err(CatalogueError::Overflow));
        assert_eq!(product_except_self(&[i64::MAX, 2]), Ok(vec![2, i64::MAX]));
        assert_eq!(product_except_self(&[i64::MAX, 2, 2]), Err(CatalogueError::Overflow));
        assert_eq!(product_except_self(&[i64::MAX, 2, 0, 0]), Ok(vec![0, 0, 0, 0]));
        assert_eq!(product_except_self(&[i64::MAX, 1, 0]), Ok(vec![0, 0, i64::MAX]));
        assert_eq!(product_except_self(&[i64::MAX, 2, 0]), Err(CatalogueError::Overflow));
        assert_eq!(product_except_self(&[i64::MIN, 1, 1]), Ok(vec![1, i64::MIN, i64::MIN]));
        assert_eq!(product_except_self(&[i64::MIN, -1]), Err(CatalogueError::Overflow));
    }

    #[test]
    fn merging() {
        let input: Vec<Interval> = [(8, 10), (1, 3), (15, 18), (2, 6)].into_iter().map(Interval::from).collect();
        let merged = merge_intervals(input);
        assert_eq!(merged, vec![Interval::new(1, 6), Interval::new(8, 10), Interval::new(15, 18)]);
        assert_eq!(merge_intervals(vec![(1, 4).into(), (4, 5).into()]), vec![Interval::new(1, 5)]);
        assert!(merge_intervals(Vec::new()).is_empty());
    }
}
