use std::collections::{HashMap, HashSet};

use crate::frequency::FrequencyMap;

/// Anagram check by comparing sorted characters.
pub fn are_anagrams(a: &str, b: &str) -> bool {
    let mut x: Vec<char> = a.chars().collect();
    let mut y: Vec<char> = b.chars().collect();
    if x.len() != y.len() {
        return false;
    }
    x.sort_unstable();
    y.sort_unstable();
    x == y
}

/// Anagram check by comparing character counts.
pub fn are_anagrams_by_count(a: &str, b: &str) -> bool {
    let x: FrequencyMap<char> = a.chars().collect();
    let y: FrequencyMap<char> = b.chars().collect();
    x.same_counts(&y)
}

/// Shrinks the first string until every other string starts with it.
pub fn longest_common_prefix<S: AsRef<str>>(strings: &[S]) -> String {
    let Some((first, rest)) = strings.split_first() else {
        return String::new();
    };
    let mut prefix: &str = first.as_ref();
    for s in rest {
        while !s.as_ref().starts_with(prefix) {
            let mut chars = prefix.chars();
            chars.next_back();
            prefix = chars.as_str();
            if prefix.is_empty() {
                return String::new();
            }
        }
    }
    prefix.to_owned()
}

/// Column-by-column scan; same result as [`longest_common_prefix`].
pub fn longest_common_prefix_vertical<S: AsRef<str>>(strings: &[S]) -> String {
    let Some((first, rest)) = strings.split_first() else {
        return String::new();
    };
    let first = first.as_ref();
    let others: Vec<Vec<char>> = rest.iter().map(|s| s.as_ref().chars().collect()).collect();
    for (i, (byte_pos, ch)) in first.char_indices().enumerate() {
        if others.iter().any(|o| o.get(i) != Some(&ch)) {
            return first[..byte_pos].to_owned();
        }
    }
    first.to_owned()
}

/// `table[i]` is the length of the longest proper prefix of `pattern[..=i]`
/// that is also a suffix of it.
fn prefix_table(pattern: &[char]) -> Vec<usize> {
    let mut table = vec![0; pattern.len()];
    let mut border = 0;
    for (i, &ch) in pattern.iter().enumerate().skip(1) {
        while border > 0 && ch != pattern[border] {
            border = table[border - 1];
        }
        if ch == pattern[border] {
            border += 1;
        }
        table[i] = border;
    }
    table
}

/// Knuth–Morris–Pratt search. Returns the char offset of every match,
/// overlapping matches included. An empty pattern matches nowhere.
pub fn kmp_search(text: &str, pattern: &str) -> Vec<usize> {
    let pattern: Vec<char> = pattern.chars().collect();
    if pattern.is_empty() {
        return Vec::new();
    }
    let table = prefix_table(&pattern);

    let mut offsets = Vec::new();
    let mut matched = 0;
    for (pos, ch) in text.chars().enumerate() {
        while matched > 0 && ch != pattern[matched] {
            matched = table[matched - 1];
        }
        if ch == pattern[matched] {
            matched += 1;
        }
        if matched == pattern.len() {
            offsets.push(pos + 1 - matched);
            matched = table[matched - 1];
        }
    }
    offsets
}

/// True when some bijection from pattern letters to non-empty substrings
/// spells out `s` exactly ("abab" matches "redblueredblue").
pub fn word_pattern_match(pattern: &str, s: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = s.chars().collect();
    let mut mapping: HashMap<char, Vec<char>> = HashMap::new();
    let mut used: HashSet<Vec<char>> = HashSet::new();
    backtrack(&pattern, &text, 0, 0, &mut mapping, &mut used)
}

fn backtrack(
    pattern: &[char],
    text: &[char],
    pi: usize,
    ti: usize,
    mapping: &mut HashMap<char, Vec<char>>,
    used: &mut HashSet<Vec<char>>,
) -> bool {
    if pi == pattern.len() || ti == text.len() {
        return pi == pattern.len() && ti == text.len();
    }
    let symbol = pattern[pi];
    if let Some(word) = mapping.get(&symbol).cloned() {
        let end = ti + word.len();
        return end <= text.len()
            && text[ti..end] == word[..]
            && backtrack(pattern, text, pi + 1, end, mapping, used);
    }
    for end in ti + 1..=text.len() {
        let word = text[ti..end].to_vec();
        if used.contains(&word) {
            continue;
        }
        mapping.insert(symbol, word.clone());
        used.insert(word.clone());
        if backtrack(pattern, text, pi + 1, end, mapping, used) {
            return true;
        }
        mapping.remove(&symbol);
        used.remove(&word);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anagram_checks_agree() {
        for (a, b, expected) in [("listen", "silent", true), ("hello", "world", false), ("ab", "abb", false), ("", "", true)] {
            assert_eq!(are_anagrams(a, b), expected, "{a} / {b}");
            assert_eq!(are_anagrams_by_count(a, b), expected, "{a} / {b}");
        }
    }

    #[test]
    fn common_prefix_strategies_agree() {
        let cases: [(&[&str], &str); 5] = [
            (&["flower", "flow", "flight"], "fl"),
            (&["dog", "racecar", "car"], ""),
            (&["interview", "internet", "interval"], "inter"),
            (&["alone"], "alone"),
            (&[], ""),
        ];
        for (words, expected) in cases {
            assert_eq!(longest_common_prefix(words), expected);
            assert_eq!(longest_common_prefix_vertical(words), expected);
        }
    }

    #[test]
    fn prefix_table_tracks_borders() {
        let table = |p: &str| prefix_table(&p.chars().collect::<Vec<_>>());
        assert_eq!(table("ababd"), vec![0, 0, 1, 2, 0]);
        assert_eq!(table("aabaaab"), vec![0, 1, 0, 1, 2, 2, 3]);
        assert_eq!(table("aaaa"), vec![0, 1, 2, 3]);
        assert!(table("").is_empty());
    }

    #[test]
    fn kmp_finds_overlapping_matches() {
        assert_eq!(kmp_search("ababcabcabababd", "ababd"), vec![10]);
        assert_eq!(kmp_search("aaaa", "aa"), vec![0, 1, 2]);
        assert_eq!(kmp_search("héllo héllo", "llo"), vec![2, 8]);
        assert!(kmp_search("abc", "").is_empty());
        assert!(kmp_search("abc", "abcd").is_empty());
    }

    #[test]
    fn pattern_bijection() {
        assert!(word_pattern_match("abab", "redblueredblue"));
        assert!(word_pattern_match("aaaa", "asdasdasdasd"));
        assert!(!word_pattern_match("aabb", "xyzabcxzyabc"));
        assert!(!word_pattern_match("ab", "aa"));
        assert!(word_pattern_match("", ""));
    }
}
