/// Indices of a pair in an ascending slice that sums to `target`.
pub fn two_sum_sorted(sorted: &[i64], target: i64) -> Option<(usize, usize)> {
    if sorted.len() < 2 {
        return None;
    }
    let (mut l, mut r) = (0, sorted.len() - 1);
    while l < r {
        let sum = sorted[l] as i128 + sorted[r] as i128;
        match sum.cmp(&(target as i128)) {
            std::cmp::Ordering::Equal   => return Some((l, r)),
            std::cmp::Ordering::Less    => l += 1,
            std::cmp::Ordering::Greater => r -= 1,
        }
    }
    None
}

/// All unique triplets summing to zero, each ascending, listed in ascending order.
pub fn three_sum(nums: &[i64]) -> Vec<[i64; 3]> {
    let mut sorted = nums.to_vec();
    sorted.sort_unstable();
    let n = sorted.len();
    let mut out = Vec::new();

    for i in 0..n.saturating_sub(2) {
        if i > 0 && sorted[i] == sorted[i - 1] {
            continue;
        }
        let target = -(sorted[i] as i128);
        let (mut l, mut r) = (i + 1, n - 1);
        while l < r {
            let sum = sorted[l] as i128 + sorted[r] as i128;
            if sum == target {
                out.push([sorted[i], sorted[l], sorted[r]]);
                while l < r && sorted[l] == sorted[l + 1] { l += 1; }
                while l < r && sorted[r] == sorted[r - 1] { r -= 1; }
                l += 1;
                r -= 1;
            } else if sum < target {
                l += 1;
            } else {
                r -= 1;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_pair() {
        assert_eq!(two_sum_sorted(&[1, 2, 3, 4, 5, 6], 9), Some((2, 5)));
        assert_eq!(two_sum_sorted(&[1, 2, 3, 4, 5], 9), Some((3, 4)));
        assert_eq!(two_sum_sorted(&[1, 2], 9), None);
        assert_eq!(two_sum_sorted(&[], 0), None);
    }

    #[test]
    fn triplets_are_unique_and_sorted() {
        assert_eq!(three_sum(&[-1, 0, 1, 2, -1, -4]), vec![[-1, -1, 2], [-1, 0, 1]]);
        assert_eq!(three_sum(&[0, 0, 0, 0]), vec![[0, 0, 0]]);
        assert!(three_sum(&[1, 2]).is_empty());
    }
}
