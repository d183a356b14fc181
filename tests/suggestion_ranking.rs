//! Engine-level ranking properties for the prefix trie.
//!
//! Covers the ranking contract: frequency-descending order with
//! lexicographic tie-breaks, the fixed top-5 cut, max-merge insert
//! semantics, and learn-on-update for unknown words.

use typeahead_core::{Suggestion, Trie, DEFAULT_VOCABULARY, SUGGESTION_LIMIT};

fn demo_trie() -> Trie {
    let mut trie = Trie::new();
    for (word, frequency) in DEFAULT_VOCABULARY {
        trie.insert(word, *frequency);
    }
    trie
}

#[test]
fn reference_example_ordering() {
    let mut trie = Trie::new();
    trie.insert("app", 20);
    trie.insert("apple", 15);
    trie.insert("apply", 8);
    trie.insert("application", 12);
    trie.insert("api", 18);

    let results = trie.search("ap");
    let expected = vec![
        Suggestion::new("app", 20),
        Suggestion::new("api", 18),
        Suggestion::new("apple", 15),
        Suggestion::new("application", 12),
        Suggestion::new("apply", 8),
    ];
    assert_eq!(results, expected);
}

#[test]
fn repeated_insert_stores_maximum_frequency() {
    let mut trie = Trie::new();
    for frequency in [3, 12, 7, 12, 1] {
        trie.insert("engine", frequency);
    }
    assert_eq!(trie.frequency("engine"), Some(12));
}

#[test]
fn update_on_absent_word_matches_fresh_insert() {
    let mut inserted = Trie::new();
    inserted.insert("zebra", 4);

    let mut updated = Trie::new();
    updated.update_frequency("zebra", 4);

    assert_eq!(inserted.search("ze"), updated.search("ze"));
    assert_eq!(inserted.all_words(), updated.all_words());
}

#[test]
fn all_words_is_idempotent_without_mutation() {
    let trie = demo_trie();
    assert_eq!(trie.all_words(), trie.all_words());
}

#[test]
fn search_results_all_share_the_prefix() {
    let trie = demo_trie();
    for prefix in ["a", "ba", "cat", "d", "e", "fun"] {
        let results = trie.search(prefix);
        assert!(results.len() <= SUGGESTION_LIMIT);
        for suggestion in &results {
            assert!(
                suggestion.word.starts_with(prefix),
                "{} does not start with {}",
                suggestion.word,
                prefix
            );
        }
    }
}

#[test]
fn every_word_is_findable_under_each_of_its_prefixes() {
    let trie = demo_trie();
    let vocabulary = trie.all_words();

    for suggestion in &vocabulary {
        for end in 1..=suggestion.word.len() {
            let prefix = &suggestion.word[..end];

            // Rank among all matches under this prefix, by the search order.
            let mut matches: Vec<&Suggestion> = vocabulary
                .iter()
                .filter(|s| s.word.starts_with(prefix))
                .collect();
            matches.sort_by(|a, b| {
                b.frequency
                    .cmp(&a.frequency)
                    .then_with(|| a.word.cmp(&b.word))
            });
            let rank = matches
                .iter()
                .position(|s| s.word == suggestion.word)
                .unwrap();

            let results = trie.search(prefix);
            if rank < SUGGESTION_LIMIT {
                assert!(
                    results.iter().any(|s| s.word == suggestion.word),
                    "{} missing from search({:?}) despite rank {}",
                    suggestion.word,
                    prefix,
                    rank
                );
            }
        }
    }
}

#[test]
fn learning_reorders_suggestions() {
    let mut trie = demo_trie();
    assert_eq!(trie.search("ap")[0].word, "app");

    // "apply" starts at 8; app leads at 20. Thirteen selections close the gap.
    for _ in 0..13 {
        trie.update_frequency("apply", 1);
    }
    let results = trie.search("ap");
    assert_eq!(results[0].word, "apply");
    assert_eq!(results[0].frequency, 21);
}
