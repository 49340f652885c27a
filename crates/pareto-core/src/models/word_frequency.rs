use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A keyword and how often it occurs across the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
}

impl WordFrequency {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}
