//! Boundary error types and frequency parsing.
//!
//! The trie and service never fail: blank words and unknown prefixes are
//! treated as no-ops or empty results. The only error-prone spot is parsing
//! a user-supplied frequency string at the boundary, handled here.

use std::ops::RangeInclusive;
use thiserror::Error;

/// Accepted range for user-supplied frequencies.
pub const FREQUENCY_RANGE: RangeInclusive<u32> = 1..=20;

/// Fallback frequency applied when user input fails validation.
pub const DEFAULT_FREQUENCY: u32 = 5;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid frequency {input:?}: expected an integer between {min} and {max}")]
    InvalidFrequency { input: String, min: u32, max: u32 },
}

/// Parse a user-supplied frequency string.
///
/// Accepts integers within [`FREQUENCY_RANGE`]; everything else is rejected
/// with [`Error::InvalidFrequency`].
pub fn parse_frequency(input: &str) -> Result<u32, Error> {
    let trimmed = input.trim();
    match trimmed.parse::<u32>() {
        Ok(value) if FREQUENCY_RANGE.contains(&value) => Ok(value),
        _ => Err(Error::InvalidFrequency {
            input: trimmed.to_string(),
            min: *FREQUENCY_RANGE.start(),
            max: *FREQUENCY_RANGE.end(),
        }),
    }
}

/// Parse a frequency string, falling back to `fallback` on invalid input.
pub fn parse_frequency_or(input: &str, fallback: u32) -> u32 {
    match parse_frequency(input) {
        Ok(value) => value,
        Err(err) => {
            tracing::debug!(%err, fallback, "rejected frequency input");
            fallback
        }
    }
}
