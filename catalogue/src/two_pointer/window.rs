use std::collections::HashSet;

/// Palindrome check over alphanumeric characters only, ignoring case.
pub fn is_palindrome_alnum(s: &str) -> bool {
    let cleaned: Vec<char> = s
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();
    if cleaned.is_empty() {
        return true;
    }
    let (mut l, mut r) = (0, cleaned.len() - 1);
    while l < r {
        if cleaned[l] != cleaned[r] {
            return false;
        }
        l += 1;
        r -= 1;
    }
    true
}

/// Length and first occurrence of the longest substring without repeated characters.
pub fn longest_unique_substring(s: &str) -> (usize, String) {
    let chars: Vec<char> = s.chars().collect();
    let mut window: HashSet<char> = HashSet::new();
    let (mut left, mut best_len, mut best_start) = (0, 0, 0);

    for right in 0..chars.len() {
        while window.contains(&chars[right]) {
            window.remove(&chars[left]);
            left += 1;
        }
        window.insert(chars[right]);
        if right - left + 1 > best_len {
            best_len = right - left + 1;
            best_start = left;
        }
    }
    (best_len, chars[best_start..best_start + best_len].iter().collect())
}
