//! Order statistics without a full sort.
//!
//! Variables:
//!   top : Vec<i64>  — at most k values, descending
//!
//! Equations:
//!   second/third largest: cascading slots over distinct values     O(n)
//!   kth_largest:          insert into `top`, bubble towards front  O(n·k)
//!   kth_largest_heap:     min-heap of size k, root is the answer   O(n log k)

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::error::{CatalogueError, Result};

/// Largest value strictly below the maximum.
pub fn second_largest(nums: &[i64]) -> Option<i64> {
    let mut first: Option<i64> = None;
    let mut second: Option<i64> = None;
    for &n in nums {
        if first.map_or(true, |f| n > f) {
            second = first;
            first = Some(n);
        } else if Some(n) != first && second.map_or(true, |s| n > s) {
            second = Some(n);
        }
    }
    second
}

/// Third distinct value from the top.
pub fn third_largest(nums: &[i64]) -> Option<i64> {
    let mut slots: [Option<i64>; 3] = [None; 3];
    for &n in nums {
        if slots.contains(&Some(n)) {
            continue;
        }
        if slots[0].map_or(true, |v| n > v) {
            slots = [Some(n), slots[0], slots[1]];
        } else if slots[1].map_or(true, |v| n > v) {
            slots = [slots[0], Some(n), slots[1]];
        } else if slots[2].map_or(true, |v| n > v) {
            slots[2] = Some(n);
        }
    }
    slots[2]
}

fn check_rank(k: usize, len: usize) -> Result<()> {
    if k == 0 || k > len {
        return Err(CatalogueError::RankOutOfRange { k, len });
    }
    Ok(())
}

/// k-th largest (1-based) counting duplicates: `[5, 5, 4]` has 5 as its 2nd largest.
pub fn kth_largest(nums: &[i64], k: usize) -> Result<i64> {
    check_rank(k, nums.len())?;
    let mut top: Vec<i64> = Vec::with_capacity(k);
    for &n in nums {
        if top.len() < k {
            top.push(n);
        } else if n > top[k - 1] {
            top[k - 1] = n;
        } else {
            continue;
        }
        let mut i = top.len() - 1;
        while i > 0 && top[i] > top[i - 1] {
            top.swap(i, i - 1);
            i -= 1;
        }
    }
    Ok(top[k - 1])
}

/// Same answer as [`kth_largest`] using a bounded min-heap.
pub fn kth_largest_heap(nums: &[i64], k: usize) -> Result<i64> {
    check_rank(k, nums.len())?;
    let mut heap: BinaryHeap<Reverse<i64>> = BinaryHeap::with_capacity(k + 1);
    for &n in nums {
        heap.push(Reverse(n));
        if heap.len() > k {
            heap.pop();
        }
    }
    heap.peek()
        .map(|Reverse(v)| *v)
        .ok_or(CatalogueError::EmptyInput)
}
