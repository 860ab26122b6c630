//! Turns free vacancy text into a set of normalized candidate words.

use std::collections::HashSet;

use crate::config::DEFAULT_PUNCTUATION;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenizer {
    punctuation: Vec<char>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(DEFAULT_PUNCTUATION)
    }
}

impl Tokenizer {
    pub fn new(punctuation: impl Into<Vec<char>>) -> Self {
        Self {
            punctuation: punctuation.into(),
        }
    }

    /// Strips punctuation from both ends until none is left, then lower-cases.
    ///
    /// `"word)."` becomes `"word"`; characters outside the set (like `+` in
    /// `"C++,"`) are kept.
    pub fn clean_word(&self, word: &str) -> String {
        word.trim_matches(|c: char| self.punctuation.contains(&c))
            .to_lowercase()
    }

    /// Whitespace-separated words of `text`, cleaned and split on `/`.
    ///
    /// `"java/scala"` contributes both `"java"` and `"scala"`. Empty pieces are
    /// dropped and duplicates collapse.
    pub fn extract_words(&self, text: &str) -> HashSet<String> {
        let mut words = HashSet::new();
        for raw in text.split_whitespace() {
            let cleaned = self.clean_word(raw);
            words.extend(
                cleaned
                    .split('/')
                    .filter(|part| !part.is_empty())
                    .map(str::to_owned),
            );
        }
        words
    }
}
