//! Per-word selection statistics.

use std::collections::HashMap;

/// Cumulative selection counts keyed by word.
///
/// Counts only ever grow; the map itself is unbounded. Ranking output uses a
/// deterministic ordering: count descending, ties broken by word ascending.
#[derive(Debug, Clone, Default)]
pub struct UsageStats {
    counts: HashMap<String, u32>,
}

impl UsageStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a single selection of `word`.
    pub fn record(&mut self, word: &str) {
        self.record_count(word, 1);
    }

    /// Record `delta` selections of `word` at once (bulk frequency updates).
    pub fn record_count(&mut self, word: &str, delta: u32) {
        if delta == 0 {
            return;
        }
        let entry = self.counts.entry(word.to_string()).or_insert(0);
        *entry = entry.saturating_add(delta);
    }

    /// Cumulative count for `word`, zero if never selected.
    pub fn count(&self, word: &str) -> u32 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// The `n` most selected words with their counts.
    ///
    /// Ordered by count descending, then word ascending.
    pub fn top_selected(&self, n: usize) -> Vec<(String, u32)> {
        let mut entries: Vec<(String, u32)> = self
            .counts
            .iter()
            .map(|(word, count)| (word.clone(), *count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries.truncate(n);
        entries
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
