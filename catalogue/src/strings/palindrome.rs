/// Exact, case-sensitive palindrome over all characters.
pub fn is_palindrome_simple(s: &str) -> bool {
    s.chars().eq(s.chars().rev())
}

/// Longest palindromic substring by expanding around every centre.
/// The earliest one wins among equal lengths.
pub fn longest_palindrome_substring(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() < 2 {
        return s.to_owned();
    }
    let (mut best_start, mut best_len) = (0, 0);
    for centre in 0..chars.len() {
        for (l, r) in [(centre, centre), (centre, centre + 1)] {
            let (start, len) = expand(&chars, l, r);
            if len > best_len {
                best_start = start;
                best_len = len;
            }
        }
    }
    chars[best_start..best_start + best_len].iter().collect()
}

/// Grows `[l, r]` while the ends match; returns `(start, len)` of the palindrome found.
fn expand(chars: &[char], l: usize, r: usize) -> (usize, usize) {
    if r >= chars.len() || chars[l] != chars[r] {
        return (l, if l == r { 1 } else { 0 });
    }
    let (mut l, mut r) = (l, r);
    while l > 0 && r + 1 < chars.len() && chars[l - 1] == chars[r + 1] {
        l -= 1;
        r += 1;
    }
    (l, r - l + 1)
}
