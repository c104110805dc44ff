//! Set algebra over slices. Results that are sets are returned sorted so
//! callers get a deterministic order.

use std::collections::HashSet;
use std::hash::Hash;

use serde::Serialize;

use crate::error::{CatalogueError, Result};

/// Largest input accepted by [`power_set`].
pub const POWER_SET_MAX: usize = 20;

fn sorted<T: Ord>(set: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut v: Vec<T> = set.into_iter().collect();
    v.sort_unstable();
    v
}

pub fn intersection<T: Hash + Eq + Ord + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let right: HashSet<&T> = b.iter().collect();
    let both: HashSet<&T> = a.iter().filter(|x| right.contains(x)).collect();
    sorted(both.into_iter().cloned())
}

pub fn union_all<T: Hash + Eq + Ord + Clone>(lists: &[Vec<T>]) -> Vec<T> {
    sorted(lists.iter().flatten().cloned().collect::<HashSet<T>>())
}

/// Values in exactly one of the two inputs.
pub fn symmetric_difference<T: Hash + Eq + Ord + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let left: HashSet<&T> = a.iter().collect();
    let right: HashSet<&T> = b.iter().collect();
    sorted(left.symmetric_difference(&right).map(|x| (*x).clone()))
}

/// Same distinct members, ignoring order and multiplicity.
pub fn same_members<T: Hash + Eq>(a: &[T], b: &[T]) -> bool {
    a.iter().collect::<HashSet<_>>() == b.iter().collect::<HashSet<_>>()
}

/// Values present in every array.
pub fn intersect_all<T: Hash + Eq + Ord + Clone>(arrays: &[Vec<T>]) -> Vec<T> {
    let Some((first, rest)) = arrays.split_first() else {
        return Vec::new();
    };
    let mut acc: HashSet<&T> = first.iter().collect();
    for arr in rest {
        let next: HashSet<&T> = arr.iter().collect();
        acc.retain(|x| next.contains(x));
    }
    sorted(acc.into_iter().cloned())
}

/// Elements of `a` (order and repeats kept) that also occur in `b`.
pub fn common_in_order<T: Hash + Eq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let lookup: HashSet<&T> = b.iter().collect();
    a.iter().filter(|x| lookup.contains(x)).cloned().collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Changes<T> {
    pub added:   Vec<T>,
    pub removed: Vec<T>,
}

pub fn detect_changes<T: Hash + Eq + Ord + Clone>(old: &[T], new: &[T]) -> Changes<T> {
    let before: HashSet<&T> = old.iter().collect();
    let after: HashSet<&T> = new.iter().collect();
    Changes {
        added:   sorted(after.difference(&before).map(|x| (*x).clone())),
        removed: sorted(before.difference(&after).map(|x| (*x).clone())),
    }
}

/// Every `(a, b)` pair over the distinct members of each side.
pub fn cartesian_product<A, B>(a: &[A], b: &[B]) -> Vec<(A, B)>
where
    A: Hash + Eq + Ord + Clone,
    B: Hash + Eq + Ord + Clone,
{
    let left = sorted(a.iter().cloned().collect::<HashSet<A>>());
    let right = sorted(b.iter().cloned().collect::<HashSet<B>>());
    let mut out = Vec::with_capacity(left.len() * right.len());
    for x in &left {
        for y in &right {
            out.push((x.clone(), y.clone()));
        }
    }
    out
}

/// All subsets of the distinct members, enumerated by bitmask.
pub fn power_set<T: Hash + Eq + Ord + Clone>(items: &[T]) -> Result<Vec<Vec<T>>> {
    let members = sorted(items.iter().cloned().collect::<HashSet<T>>());
    let n = members.len();
    if n > POWER_SET_MAX {
        return Err(CatalogueError::TooLarge { len: n, max: POWER_SET_MAX });
    }
    Ok((0u32..1 << n)
        .map(|mask| {
            (0..n)
                .filter(|j| mask >> j & 1 == 1)
                .map(|j| members[j].clone())
                .collect()
        })
        .collect())
}

/// True when any two closed ranges `[start, end]` share a value.
/// A range with `start > end` is empty and overlaps nothing.
pub fn ranges_overlap(ranges: &[(i64, i64)]) -> bool {
    let mut sorted: Vec<(i64, i64)> = ranges.iter().copied().filter(|(start, end)| start <= end).collect();
    sorted.sort_unstable();
    sorted.windows(2).any(|pair| pair[1].0 <= pair[0].1)
}

/// For values meant to be `1..=n`: `(missing, duplicate)`, smallest of each.
pub fn find_missing_and_duplicate(nums: &[u64], n: u64) -> (Option<u64>, Option<u64>) {
    let mut seen = HashSet::with_capacity(nums.len());
    let mut duplicates = Vec::new();
    for &x in nums {
        if !seen.insert(x) {
            duplicates.push(x);
        }
    }
    let missing = (1..=n).find(|x| !seen.contains(x));
    (missing, duplicates.into_iter().min())
}
