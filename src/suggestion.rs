//! Suggestion type returned by prefix queries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A word with its stored frequency; higher frequency ranks first.
///
/// A plain value pair with no identity beyond its fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub word: String,
    pub frequency: u32,
}

impl Suggestion {
    pub fn new<T: Into<String>>(word: T, frequency: u32) -> Self {
        Suggestion {
            word: word.into(),
            frequency,
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (freq: {})", self.word, self.frequency)
    }
}
