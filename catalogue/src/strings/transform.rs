use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{CatalogueError, Result};

/// Keeps the first occurrence of every character.
pub fn remove_duplicate_chars(s: &str) -> String {
    let mut seen = HashSet::new();
    s.chars().filter(|ch| seen.insert(*ch)).collect()
}

/// Run-length encoding as `char` followed by its run length: "aaabbc" -> "a3b2c1".
///
/// Digits in the input are not escaped, so for text containing digits the
/// output cannot be decoded back: "a11" compresses to "a112", which
/// [`decompress`] reads as 112 copies of 'a'.
pub fn compress(s: &str) -> String {
    let mut out = String::new();
    let mut chars = s.chars().peekable();
    while let Some(ch) = chars.next() {
        let mut run = 1;
        while chars.peek() == Some(&ch) {
            chars.next();
            run += 1;
        }
        out.push(ch);
        out.push_str(&run.to_string());
    }
    out
}

/// [`compress`] only when the result is strictly shorter.
pub fn compress_if_shorter(s: &str) -> String {
    let compressed = compress(s);
    if compressed.chars().count() < s.chars().count() { compressed } else { s.to_owned() }
}

/// Longest output [`decompress`] will build, in characters.
pub const DECOMPRESS_MAX: usize = 1 << 20;

/// Inverse of [`compress`] for digit-free text; a character without a count
/// expands to itself once.
///
/// `Overflow` when a count does not fit in `usize`, `TooLarge` when the output
/// would pass [`DECOMPRESS_MAX`] characters.
pub fn decompress(s: &str) -> Result<String> {
    let mut out = String::new();
    let mut produced = 0usize;
    let mut chars = s.chars().peekable();
    while let Some(ch) = chars.next() {
        let mut digits = String::new();
        while let Some(d) = chars.peek().filter(|d| d.is_ascii_digit()) {
            digits.push(*d);
            chars.next();
        }
        let run = if digits.is_empty() { 1 } else { digits.parse::<usize>().map_err(|_| CatalogueError::Overflow)? };
        let len = produced.checked_add(run).ok_or(CatalogueError::Overflow)?;
        if len > DECOMPRESS_MAX {
            return Err(CatalogueError::TooLarge { len, max: DECOMPRESS_MAX });
        }
        produced = len;
        out.extend(std::iter::repeat(ch).take(run));
    }
    Ok(out)
}

pub fn reverse_words(s: &str) -> String {
    s.split_whitespace().rev().collect::<Vec<_>>().join(" ")
}

pub fn reverse_each_word(s: &str) -> String {
    s.split_whitespace()
        .map(|w| w.chars().rev().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn remove_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Capitalises each whitespace-separated word and lowercases the rest of it.
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn toggle_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_uppercase() {
            out.extend(c.to_lowercase());
        } else if c.is_lowercase() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

pub fn replace_spaces(s: &str, replacement: &str) -> String {
    s.replace(' ', replacement)
}

/// One step of a transformation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Transform {
    RemoveDuplicates,
    Compress,
    Reverse,
    Upper,
    Lower,
    RemoveSpaces,
}

impl Transform {
    pub const ALL: [Transform; 6] = [
        Transform::RemoveDuplicates,
        Transform::Compress,
        Transform::Reverse,
        Transform::Upper,
        Transform::Lower,
        Transform::RemoveSpaces,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Transform::RemoveDuplicates => "remove-duplicates",
            Transform::Compress         => "compress",
            Transform::Reverse          => "reverse",
            Transform::Upper            => "upper",
            Transform::Lower            => "lower",
            Transform::RemoveSpaces     => "remove-spaces",
        }
    }

    pub fn apply(self, s: &str) -> String {
        match self {
            Transform::RemoveDuplicates => remove_duplicate_chars(s),
            Transform::Compress         => compress(s),
            Transform::Reverse          => s.chars().rev().collect(),
            Transform::Upper            => s.to_uppercase(),
            Transform::Lower            => s.to_lowercase(),
            Transform::RemoveSpaces     => remove_whitespace(s),
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Transform {
    type Err = CatalogueError;

    /// Accepts kebab or snake case: `remove-spaces`, `remove_spaces`.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Transform::ALL
            .into_iter()
            .find(|t| t.name() == wanted)
            .ok_or_else(|| CatalogueError::UnknownTransform(s.to_owned()))
    }
}

/// Applies each step left to right.
pub fn apply_pipeline(s: &str, steps: &[Transform]) -> String {
    steps.iter().fold(s.to_owned(), |acc, step| step.apply(&acc))
}
