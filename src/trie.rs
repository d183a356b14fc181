/// Prefix trie with frequency-ranked retrieval.
use std::collections::HashMap;

use crate::suggestion::Suggestion;
use crate::utils;

/// Maximum number of results returned by [`Trie::search`].
pub const SUGGESTION_LIMIT: usize = 5;

/// A single node in the prefix tree.
///
/// Terminal nodes cache the complete lowercase word so collection does not
/// have to reconstruct it from the path.
#[derive(Debug, Default)]
pub struct TrieNode {
    children: HashMap<char, Box<TrieNode>>,
    is_end: bool,
    /// Meaningful only when `is_end` is true.
    frequency: u32,
    /// When `is_end` is true, `word` contains the full lowercase word.
    word: Option<String>,
}

impl TrieNode {
    fn new() -> Self {
        Self::default()
    }
}

/// A prefix tree storing lowercase words with selection frequencies.
///
/// All lowercase folding happens inside the trie, so callers may pass input
/// in any case and get consistent results.
///
/// # Example
/// ```
/// use typeahead_core::Trie;
///
/// let mut trie = Trie::new();
/// trie.insert("Apple", 15);
/// trie.insert("app", 20);
///
/// let results = trie.search("AP");
/// assert_eq!(results[0].word, "app");
/// assert_eq!(results[1].word, "apple");
/// ```
#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
    words: usize,
}

impl Trie {
    /// Create a new empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct words stored.
    pub fn word_count(&self) -> usize {
        self.words
    }

    /// Whether the trie holds no words.
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Insert a word with the given frequency.
    ///
    /// The word is folded to lowercase first. Re-inserting an existing word
    /// keeps the higher of the stored and provided frequencies, so a repeated
    /// bootstrap import can never lower a learned frequency. Empty or
    /// whitespace-only input is ignored.
    pub fn insert(&mut self, word: &str, frequency: u32) {
        let normalized = utils::normalize(word);
        if normalized.is_empty() {
            return;
        }
        self.insert_normalized(&normalized, frequency);
    }

    fn insert_normalized(&mut self, normalized: &str, frequency: u32) {
        let mut node = &mut self.root;
        for ch in normalized.chars() {
            node = node
                .children
                .entry(ch)
                .or_insert_with(|| Box::new(TrieNode::new()));
        }
        if !node.is_end {
            node.is_end = true;
            self.words += 1;
        }
        node.frequency = node.frequency.max(frequency);
        node.word = Some(normalized.to_string());
    }

    /// Increase a word's frequency by `increment`, learning the word if it
    /// is not stored yet.
    ///
    /// Three cases:
    /// - the word exists: its frequency grows by `increment` (saturating at
    ///   `u32::MAX`);
    /// - the path is missing: the word is inserted fresh at `increment`;
    /// - the full path exists but only as a prefix of longer words: the final
    ///   node becomes terminal at `increment`.
    pub fn update_frequency(&mut self, word: &str, increment: u32) {
        let normalized = utils::normalize(word);
        if normalized.is_empty() {
            return;
        }
        if self.node(&normalized).is_none() {
            // Word was never inserted, learn it fresh.
            self.insert_normalized(&normalized, increment);
            return;
        }
        if let Some(node) = self.node_mut(&normalized) {
            if node.is_end {
                node.frequency = node.frequency.saturating_add(increment);
            } else {
                node.is_end = true;
                node.frequency = increment;
                node.word = Some(normalized);
                self.words += 1;
            }
        }
    }

    /// Check whether the trie contains exactly the given word.
    ///
    /// Returns `true` only if `word` exists as a complete word, not just as
    /// a prefix of stored words.
    pub fn contains(&self, word: &str) -> bool {
        let normalized = utils::normalize(word);
        match self.node(&normalized) {
            Some(node) => node.is_end,
            None => false,
        }
    }

    /// Stored frequency for a word, or `None` if the word is absent.
    pub fn frequency(&self, word: &str) -> Option<u32> {
        let normalized = utils::normalize(word);
        match self.node(&normalized) {
            Some(node) if node.is_end => Some(node.frequency),
            _ => None,
        }
    }

    /// Return the top ranked words starting with `prefix`.
    ///
    /// Collects every word under the prefix node (including the prefix
    /// itself when it is a stored word), sorts by frequency descending with
    /// ties broken lexicographically, and returns at most
    /// [`SUGGESTION_LIMIT`] entries. An empty prefix yields an empty result,
    /// not the whole vocabulary; an unknown prefix yields an empty result as
    /// a normal outcome.
    pub fn search(&self, prefix: &str) -> Vec<Suggestion> {
        let normalized = utils::normalize(prefix);
        if normalized.is_empty() {
            return Vec::new();
        }
        let node = match self.node(&normalized) {
            Some(node) => node,
            None => return Vec::new(),
        };

        let mut results = Vec::new();
        collect_words(node, &mut results);
        results.sort_by(|a, b| {
            b.frequency
                .cmp(&a.frequency)
                .then_with(|| a.word.cmp(&b.word))
        });
        results.truncate(SUGGESTION_LIMIT);
        results
    }

    /// Return every stored word ranked by frequency.
    ///
    /// Sorted by frequency descending; ties are broken lexicographically so
    /// the ordering is deterministic regardless of map iteration order.
    pub fn all_words(&self) -> Vec<Suggestion> {
        let mut results = Vec::new();
        collect_words(&self.root, &mut results);
        results.sort_by(|a, b| {
            b.frequency
                .cmp(&a.frequency)
                .then_with(|| a.word.cmp(&b.word))
        });
        results
    }

    /// Walk to the node for `path`, if the full path exists.
    fn node(&self, path: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for ch in path.chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }

    fn node_mut(&mut self, path: &str) -> Option<&mut TrieNode> {
        let mut node = &mut self.root;
        for ch in path.chars() {
            node = node.children.get_mut(&ch)?;
        }
        Some(node)
    }
}

/// Depth-first collection of every terminal node under `node`.
///
/// Traversal order is irrelevant; callers sort afterwards.
fn collect_words(node: &TrieNode, results: &mut Vec<Suggestion>) {
    if node.is_end {
        if let Some(word) = &node.word {
            results.push(Suggestion::new(word.clone(), node.frequency));
        }
    }
    for child in node.children.values() {
        collect_words(child, results);
    }
}
