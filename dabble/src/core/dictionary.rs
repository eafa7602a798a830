//! Read-only word membership oracle.

use std::collections::HashSet;

/// Membership test used by the scanner. Implementations compare
/// case-insensitively; the scanner always passes uppercase text.
pub trait WordList {
    fn contains(&self, word: &str) -> bool;
}

/// In-memory set of uppercase words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a newline-separated word list (`\n` or `\r\n`). Lines are
    /// trimmed and uppercased; blank lines are skipped.
    pub fn from_text(text: &str) -> Self {
        text.lines().collect()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim();
        if word.is_empty() {
            return false;
        }
        self.words.insert(word.to_uppercase())
    }
}

impl WordList for Dictionary {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_uppercase())
    }
}

impl<W: WordList + ?Sized> WordList for &W {
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

impl<'a> FromIterator<&'a str> for Dictionary {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut dictionary = Dictionary::new();
        for word in iter {
            dictionary.insert(word);
        }
        dictionary
    }
}
