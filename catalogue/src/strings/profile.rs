use serde::Serialize;

use crate::frequency::text::count_vowels_consonants;
use crate::frequency::FrequencyMap;

pub fn character_frequency(s: &str) -> FrequencyMap<char> {
    s.chars().collect()
}

pub fn first_non_repeating_char(s: &str) -> Option<char> {
    let counts = character_frequency(s);
    s.chars().find(|ch| counts.count(ch) == 1)
}

/// Characters that repeat, each listed once in first-seen order.
pub fn duplicate_chars(s: &str) -> Vec<char> {
    character_frequency(s).more_than(1).into_iter().copied().collect()
}

/// Most frequent character; the one seen first wins a tie.
pub fn max_occurring_char(s: &str) -> Option<(char, usize)> {
    character_frequency(s).most_frequent().map(|(&ch, n)| (ch, n))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringProfile {
    pub length:              usize,
    pub top_characters:      Vec<(char, usize)>,
    pub first_non_repeating: Option<char>,
    pub duplicates:          Vec<char>,
    pub max_occurring:       Option<(char, usize)>,
    pub vowels:              usize,
    pub consonants:          usize,
}

/// Everything above in one pass over the counts.
pub fn analyze(s: &str) -> StringProfile {
    let counts = character_frequency(s);
    let (vowels, consonants) = count_vowels_consonants(s);
    StringProfile {
        length: s.chars().count(),
        top_characters: counts.most_common(5).into_iter().map(|(&ch, n)| (ch, n)).collect(),
        first_non_repeating: s.chars().find(|ch| counts.count(ch) == 1),
        duplicates: counts.more_than(1).into_iter().copied().collect(),
        max_occurring: counts.most_frequent().map(|(&ch, n)| (ch, n)),
        vowels,
        consonants,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn character_queries() {
        assert_eq!(first_non_repeating_char("swiss"), Some('w'));
        assert_eq!(first_non_repeating_char("aabb"), None);
        assert_eq!(duplicate_chars("programming"), vec!['r', 'g', 'm']);
        assert_eq!(max_occurring_char("hello world"), Some(('l', 3)));
        assert_eq!(max_occurring_char(""), None);
    }

    #[test]
    fn profile_of_text() {
        let profile = analyze("banana");
        assert_eq!(profile.length, 6);
        assert_eq!(profile.top_characters, vec![('a', 3), ('n', 2), ('b', 1)]);
        assert_eq!(profile.first_non_repeating, Some('b'));
        assert_eq!(profile.duplicates, vec!['a', 'n']);
        assert_eq!(profile.max_occurring, Some(('a', 3)));
        assert_eq!((profile.vowels, profile.consonants), (3, 3));
    }
}
