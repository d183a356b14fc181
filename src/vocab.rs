//! Bootstrap vocabulary: built-in demo word list and JSON vocabulary files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single vocabulary entry as stored in vocabulary JSON files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabEntry {
    pub word: String,
    pub frequency: u32,
}

/// Built-in word/frequency pairs used to seed a demo system.
pub const DEFAULT_VOCABULARY: &[(&str, u32)] = &[
    // Tech words
    ("application", 12),
    ("apple", 15),
    ("apply", 8),
    ("app", 20),
    ("api", 18),
    ("algorithm", 7),
    ("array", 10),
    ("abstract", 6),
    // Common words
    ("banana", 11),
    ("band", 6),
    ("bandit", 3),
    ("bank", 14),
    ("basketball", 9),
    ("baseball", 7),
    ("battery", 8),
    // Animals & nature
    ("cat", 16),
    ("catalog", 5),
    ("category", 8),
    ("catering", 4),
    ("dog", 13),
    ("dolphin", 6),
    ("dragon", 7),
    // Programming
    ("function", 15),
    ("frontend", 12),
    ("framework", 10),
    ("feature", 11),
    ("factory", 7),
    // Data
    ("data", 17),
    ("database", 14),
    ("dashboard", 9),
    ("delete", 8),
    ("design", 13),
    ("developer", 15),
    // Extra words
    ("elephant", 5),
    ("engine", 10),
    ("engineering", 12),
    ("environment", 8),
    ("example", 14),
    ("execute", 6),
    ("export", 9),
];

/// Load vocabulary entries from a JSON file.
///
/// The file holds an array of `{"word": ..., "frequency": ...}` objects.
pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Vec<VocabEntry>> {
    let content = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("read vocabulary {}", path.as_ref().display()))?;
    from_json_str(&content)
}

/// Parse vocabulary entries from a JSON string.
pub fn from_json_str(content: &str) -> Result<Vec<VocabEntry>> {
    serde_json::from_str(content).context("parse vocabulary JSON")
}
