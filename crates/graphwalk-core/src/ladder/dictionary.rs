use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::error::{GraphwalkError, Result};
use crate::trace_time;

/// Set of lowercase words. Iterates in sorted order so searches are repeatable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordDictionary {
    words: BTreeSet<String>,
}

impl WordDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from whitespace separated text
    pub fn from_text(text: &str) -> Self {
        text.split_whitespace().collect()
    }

    /// Insert a word, lowercased. Returns false if it was already present.
    pub fn insert(&mut self, word: &str) -> bool {
        self.words.insert(word.to_lowercase())
    }

    /// Exact membership test; callers pass already-lowercased words
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordDictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut dictionary = Self::new();
        for word in iter {
            dictionary.insert(word.as_ref());
        }
        dictionary
    }
}

/// Load a dictionary file of whitespace separated words
pub fn load_dictionary(path: &Path) -> Result<WordDictionary> {
    let start = Instant::now();

    let text = fs::read_to_string(path)
        .map_err(|e| GraphwalkError::io_operation("open dictionary file", path.display(), e))?;
    let dictionary = WordDictionary::from_text(&text);

    trace_time!(start, "load_dictionary", words = dictionary.len());
    Ok(dictionary)
}
