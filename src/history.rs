//! Bounded most-recent-first selection history.

use std::collections::VecDeque;

/// Maximum number of entries retained in a [`SearchHistory`].
pub const HISTORY_CAPACITY: usize = 50;

/// A bounded list of recently selected words, most recent first.
///
/// Pushing beyond [`HISTORY_CAPACITY`] evicts the oldest entry.
#[derive(Debug, Clone, Default)]
pub struct SearchHistory {
    entries: VecDeque<String>,
}

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a selection at the front of the history.
    pub fn push(&mut self, word: &str) {
        self.entries.push_front(word.to_string());
        if self.entries.len() > HISTORY_CAPACITY {
            self.entries.pop_back();
        }
    }

    /// At most `limit` most-recent entries, most recent first.
    pub fn recent(&self, limit: usize) -> Vec<String> {
        self.entries.iter().take(limit).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
