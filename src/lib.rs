//! typeahead-core
//!
//! Prefix-based word suggestion with frequency-driven ranking and simple
//! usage-based learning: selecting a suggestion bumps its frequency so future
//! lookups favor frequently chosen completions.
//!
//! Public API:
//! - `Trie` - Prefix tree engine: insert, frequency update, ranked top-5 search
//! - `Suggestion` - Word/frequency pair returned by queries
//! - `AutocompleteSystem` - Service wrapping the trie with history, usage
//!   statistics and a suggestion cache
//! - `Config` - Configuration with TOML load/save
//! - `error` - Boundary frequency parsing with a distinct invalid-input kind
//! - `vocab` - Built-in demo vocabulary and JSON vocabulary loading

use serde::{Deserialize, Serialize};

pub mod trie;
pub use trie::{Trie, SUGGESTION_LIMIT};

pub mod suggestion;
pub use suggestion::Suggestion;

pub mod history;
pub use history::{SearchHistory, HISTORY_CAPACITY};

pub mod stats;
pub use stats::UsageStats;

pub mod system;
pub use system::{AutocompleteSystem, StatsSnapshot};

pub mod error;
pub use error::{parse_frequency, parse_frequency_or, Error, DEFAULT_FREQUENCY};

pub mod vocab;
pub use vocab::{VocabEntry, DEFAULT_VOCABULARY};

/// Configuration for an [`AutocompleteSystem`].
///
/// The ranking constants (top-5 suggestions, 50-entry history) are part of
/// the engine contract and are not configurable here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Frequency applied when a user-supplied value fails validation.
    pub default_frequency: u32,

    /// Maximum number of entries in the prefix -> suggestions cache.
    pub max_cache_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_frequency: error::DEFAULT_FREQUENCY,
            max_cache_size: 1000,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        use anyhow::Context;
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("read config {}", path.as_ref().display()))?;
        Ok(toml::from_str(&content)?)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        use anyhow::Context;
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("write config {}", path.as_ref().display()))?;
        Ok(())
    }

    /// Load configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Utility helpers.
pub mod utils {
    /// Normalize input: trim surrounding whitespace and fold to lowercase.
    ///
    /// Lowercase folding is the only normalization applied; no further
    /// Unicode normalization is performed.
    pub fn normalize(s: &str) -> String {
        s.trim().to_lowercase()
    }
}
