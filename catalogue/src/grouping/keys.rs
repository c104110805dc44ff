/// Sorted characters; equal for all anagrams of a word.
pub fn anagram_key(word: &str) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    chars.sort_unstable();
    chars.into_iter().collect()
}

/// Sum of decimal digits of `|n|`.
pub fn digit_sum(n: i64) -> u32 {
    let mut n = n.unsigned_abs();
    let mut sum = 0;
    while n > 0 {
        sum += (n % 10) as u32;
        n /= 10;
    }
    sum
}

/// Successive character differences mod 26; equal for strings that are
/// shifts of each other ("abc", "bcd", "xyz").
pub fn shift_pattern(word: &str) -> Vec<u8> {
    let codes: Vec<u32> = word.chars().map(u32::from).collect();
    codes
        .windows(2)
        .map(|w| ((w[1] as i64 - w[0] as i64).rem_euclid(26)) as u8)
        .collect()
}
