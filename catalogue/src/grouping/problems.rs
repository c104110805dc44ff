use super::groups::{group_by, Groups};
use super::keys::{anagram_key, digit_sum, shift_pattern};

/// Partition words into anagram classes; groups and members keep input order.
pub fn group_anagrams<S: AsRef<str>>(words: &[S]) -> Vec<Vec<String>> {
    group_by(words.iter().map(|w| w.as_ref().to_owned()), |w| anagram_key(w)).into_values()
}

pub fn group_by_digit_sum(nums: &[i64]) -> Vec<Vec<i64>> {
    group_by(nums.iter().copied(), |&n| digit_sum(n)).into_values()
}

/// Char length -> words.
pub fn group_by_length<S: AsRef<str>>(words: &[S]) -> Groups<usize, String> {
    group_by(words.iter().map(|w| w.as_ref().to_owned()), |w| w.chars().count())
}

/// Lowercased first character -> words. Empty words are skipped.
pub fn group_by_first_char<S: AsRef<str>>(words: &[S]) -> Groups<char, String> {
    words
        .iter()
        .filter_map(|w| {
            let w: &str = w.as_ref();
            let first = w.chars().next()?.to_lowercase().next()?;
            Some((first, w.to_owned()))
        })
        .collect()
}

pub fn group_shifted_strings<S: AsRef<str>>(words: &[S]) -> Vec<Vec<String>> {
    group_by(words.iter().map(|w| w.as_ref().to_owned()), |w| shift_pattern(w)).into_values()
}
