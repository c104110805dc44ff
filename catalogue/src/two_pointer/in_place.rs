//! Slow/fast pointer rewrites that work inside the caller's buffer.
//!
//! Variables:
//!   slow : usize  — next write position
//!   fast : usize  — read position, slow <= fast
//!
//! Equations:
//!   move_zeros:        a[fast] != 0 => swap(a[slow], a[fast]), slow += 1     O(n)
//!   remove_duplicates: a[fast] != a[slow] => slow += 1, a[slow] = a[fast]     O(n)

/// Moves zeros to the end with one pass of swaps; non-zero order is kept.
pub fn move_zeros(nums: &mut [i64]) {
    let mut slow = 0;
    for fast in 0..nums.len() {
        if nums[fast] != 0 {
            nums.swap(slow, fast);
            slow += 1;
        }
    }
}

/// Compacts non-zeros forward, then fills the tail with zeros.
pub fn move_zeros_fill(nums: &mut [i64]) {
    let mut pos = 0;
    for i in 0..nums.len() {
        if nums[i] != 0 {
            nums[pos] = nums[i];
            pos += 1;
        }
    }
    nums[pos..].fill(0);
}

/// Allocating variant of [`move_zeros`].
pub fn move_zeros_copied(nums: &[i64]) -> Vec<i64> {
    let mut out: Vec<i64> = nums.iter().copied().filter(|&n| n != 0).collect();
    out.resize(nums.len(), 0);
    out
}

/// Deduplicates a sorted slice in place and returns the length of the unique prefix.
pub fn remove_duplicates_sorted<T: PartialEq + Clone>(sorted: &mut [T]) -> usize {
    if sorted.is_empty() {
        return 0;
    }
    let mut slow = 0;
    for fast in 1..sorted.len() {
        if sorted[fast] != sorted[slow] {
            slow += 1;
            sorted[slow] = sorted[fast].clone();
        }
    }
    slow + 1
}

pub fn reverse_in_place<T>(items: &mut [T]) {
    if items.is_empty() {
        return;
    }
    let (mut l, mut r) = (0, items.len() - 1);
    while l < r {
        items.swap(l, r);
        l += 1;
        r -= 1;
    }
}
