use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::ladder::edit::is_one_edit_apart;

/// Reasons a ladder search is refused before it starts.
///
/// Carries the words exactly as the caller supplied them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LadderError {
    #[error("error with words '{begin}' and '{end}': start and end words must be different")]
    IdenticalWords { begin: String, end: String },

    #[error("error with words '{begin}' and '{end}': end word not in dictionary")]
    EndWordNotFound { begin: String, end: String },
}

impl LadderError {
    pub fn error_type(&self) -> &'static str {
        match self {
            LadderError::IdenticalWords { .. } => "identical_words",
            LadderError::EndWordNotFound { .. } => "end_word_not_found",
        }
    }
}

/// A word ladder from start word to end word. Empty means no ladder exists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Ladder(Vec<String>);

impl Ladder {
    pub fn new(words: Vec<String>) -> Self {
        Self(words)
    }

    pub fn words(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of single-character edits along the ladder
    pub fn steps(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Every consecutive pair is one edit apart
    pub fn is_valid_chain(&self) -> bool {
        self.0.windows(2).all(|pair| is_one_edit_apart(&pair[0], &pair[1]))
    }
}

impl fmt::Display for Ladder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}
