//! Autocomplete service: trie engine plus history, statistics and caching.
//!
//! `AutocompleteSystem` wraps the [`Trie`] with the bookkeeping a front end
//! needs: a bounded selection history, per-word usage statistics, and an LRU
//! prefix cache that is cleared on every mutation so learning is reflected
//! immediately.

use std::cell::RefCell;
use std::num::NonZeroUsize;

use lru::LruCache;
use serde::Serialize;
use tracing::debug;

use crate::history::SearchHistory;
use crate::stats::UsageStats;
use crate::suggestion::Suggestion;
use crate::trie::Trie;
use crate::utils;
use crate::vocab::{VocabEntry, DEFAULT_VOCABULARY};
use crate::Config;

/// Number of top selected words included in a [`StatsSnapshot`].
const TOP_SELECTED: usize = 5;

/// Point-in-time view of system statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    /// Total distinct words stored in the trie.
    pub total_words: usize,
    /// Number of entries currently in the selection history.
    pub recent_searches: usize,
    /// Most selected words, count descending then word ascending.
    pub top_selected: Vec<(String, u32)>,
}

/// The autocomplete service.
///
/// Owns all state for one logical user; no internal synchronization. Callers
/// that share an instance across threads must add their own locking.
pub struct AutocompleteSystem {
    trie: Trie,
    history: SearchHistory,
    stats: UsageStats,
    cache: RefCell<LruCache<String, Vec<Suggestion>>>,
    cache_hits: RefCell<usize>,
    cache_misses: RefCell<usize>,
}

impl AutocompleteSystem {
    /// Create an empty system with the given configuration.
    pub fn new(config: &Config) -> Self {
        let capacity =
            NonZeroUsize::new(config.max_cache_size.max(1)).unwrap_or(NonZeroUsize::MIN);
        Self {
            trie: Trie::new(),
            history: SearchHistory::new(),
            stats: UsageStats::new(),
            cache: RefCell::new(LruCache::new(capacity)),
            cache_hits: RefCell::new(0),
            cache_misses: RefCell::new(0),
        }
    }

    /// Create a system preloaded with the given word/frequency pairs.
    pub fn with_vocabulary(config: &Config, words: &[(&str, u32)]) -> Self {
        let mut system = Self::new(config);
        for (word, frequency) in words {
            system.trie.insert(word, *frequency);
        }
        debug!(words = words.len(), "vocabulary preloaded");
        system
    }

    /// Create a system preloaded with the built-in demo vocabulary.
    pub fn with_default_vocabulary() -> Self {
        Self::with_vocabulary(&Config::default(), DEFAULT_VOCABULARY)
    }

    /// Add vocabulary entries loaded from a file (see [`crate::vocab`]).
    pub fn extend_vocabulary(&mut self, entries: &[VocabEntry]) {
        for entry in entries {
            self.trie.insert(&entry.word, entry.frequency);
        }
        self.invalidate_cache();
    }

    /// Ranked suggestions for a prefix.
    ///
    /// A blank prefix yields an empty list without touching the engine.
    /// Results are cached per normalized prefix until the next mutation.
    pub fn suggestions(&self, prefix: &str) -> Vec<Suggestion> {
        let normalized = utils::normalize(prefix);
        if normalized.is_empty() {
            return Vec::new();
        }

        if let Some(cached) = self.cache.borrow_mut().get(&normalized) {
            *self.cache_hits.borrow_mut() += 1;
            return cached.clone();
        }
        *self.cache_misses.borrow_mut() += 1;

        let results = self.trie.search(&normalized);
        self.cache.borrow_mut().put(normalized, results.clone());
        results
    }

    /// Record that the user chose `word` from the suggestions.
    ///
    /// Bumps the word's frequency by one, pushes it to the front of the
    /// history, and counts the selection in the usage statistics.
    pub fn select(&mut self, word: &str) {
        self.trie.update_frequency(word, 1);
        self.history.push(word);
        self.stats.record(word);
        self.invalidate_cache();
        debug!(word, "suggestion selected");
    }

    /// Raise a word's frequency by `increment`, learning it if absent.
    ///
    /// The same amount is recorded in the usage statistics.
    pub fn update_frequency(&mut self, word: &str, increment: u32) {
        self.trie.update_frequency(word, increment);
        self.stats.record_count(word, increment);
        self.invalidate_cache();
    }

    /// Add a word with an explicit frequency.
    pub fn add_word(&mut self, word: &str, frequency: u32) {
        self.trie.insert(word, frequency);
        self.invalidate_cache();
        debug!(word, frequency, "word added");
    }

    /// At most `limit` most-recent selections, most recent first.
    pub fn history(&self, limit: usize) -> Vec<String> {
        self.history.recent(limit)
    }

    /// Every stored word ranked by frequency (descending, ties by word).
    pub fn all_words(&self) -> Vec<Suggestion> {
        self.trie.all_words()
    }

    /// Total distinct words stored.
    pub fn word_count(&self) -> usize {
        self.trie.word_count()
    }

    /// Snapshot of vocabulary size, history length, and top selections.
    pub fn statistics(&self) -> StatsSnapshot {
        StatsSnapshot {
            total_words: self.trie.word_count(),
            recent_searches: self.history.len(),
            top_selected: self.stats.top_selected(TOP_SELECTED),
        }
    }

    /// Cache hit/miss counters since creation or the last clear.
    pub fn cache_stats(&self) -> (usize, usize) {
        (*self.cache_hits.borrow(), *self.cache_misses.borrow())
    }

    /// Cache hit rate as a percentage, `None` before any lookup.
    pub fn cache_hit_rate(&self) -> Option<f32> {
        let hits = *self.cache_hits.borrow();
        let misses = *self.cache_misses.borrow();
        let total = hits + misses;
        if total == 0 {
            None
        } else {
            Some((hits as f32 / total as f32) * 100.0)
        }
    }

    /// Clear the suggestion cache and reset its counters.
    pub fn clear_cache(&self) {
        self.cache.borrow_mut().clear();
        *self.cache_hits.borrow_mut() = 0;
        *self.cache_misses.borrow_mut() = 0;
    }

    /// Drop cached suggestions after a mutation; counters are kept so hit
    /// rate remains meaningful across updates.
    fn invalidate_cache(&self) {
        self.cache.borrow_mut().clear();
    }
}
