use super::counter::FrequencyMap;

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

pub fn count_characters(s: &str) -> FrequencyMap<char> {
    s.chars().collect()
}

/// Word counts over a whitespace split. Case-sensitive.
pub fn count_words(text: &str) -> FrequencyMap<String> {
    text.split_whitespace().map(str::to_owned).collect()
}

pub fn count_words_case_insensitive(text: &str) -> FrequencyMap<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

/// Alphabetic characters only, lowercased.
pub fn count_letters(text: &str) -> FrequencyMap<char> {
    text.chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect()
}

/// `(vowels, consonants)`; non-alphabetic characters are ignored.
pub fn count_vowels_consonants(text: &str) -> (usize, usize) {
    text.chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .fold((0, 0), |(v, c), ch| {
            if VOWELS.contains(&ch) { (v + 1, c) } else { (v, c + 1) }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_split_on_any_whitespace() {
        let counts = count_words("the cat  and\tthe hat");
        assert_eq!(counts.count(&"the".to_string()), 2);
        assert_eq!(counts.len(), 4);
    }

    #[test]
    fn case_insensitive_words_merge() {
        let counts = count_words_case_insensitive("Python python PYTHON java");
        assert_eq!(counts.count(&"python".to_string()), 3);
        assert_eq!(counts.count(&"java".to_string()), 1);
    }

    #[test]
    fn letters_skip_punctuation_and_fold_case() {
        let counts = count_letters("Hello, World!");
        assert_eq!(counts.count(&'l'), 3);
        assert_eq!(counts.count(&'h'), 1);
        assert!(!counts.contains(&','));
    }

    #[test]
    fn vowels_and_consonants() {
        assert_eq!(count_vowels_consonants("Hello World"), (3, 7));
        assert_eq!(count_vowels_consonants("123 !"), (0, 0));
    }
}
