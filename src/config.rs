//! Scoring policy configuration.

use crate::blocklist::{Blocklist, BlocklistError};

/// Every symbol the scorer classifies and accepts, in reference order. The
/// order matters: the sequential-symbol detector slides its windows over
/// this exact string.
pub const SYMBOL_SET: &str = "!\"£#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Lowercase alphabet scanned by the sequential-alpha detector.
pub const ALPHA_SET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Digit run scanned by the sequential-number detector.
pub const NUMBER_SET: &str = "0123456789";

/// Environment variable naming a replacement strict blocklist file.
pub const STRICT_BLOCKLIST_ENV: &str = "PWD_STRICT_BLOCKLIST_PATH";

/// Environment variable naming a replacement medium blocklist file.
pub const MEDIUM_BLOCKLIST_ENV: &str = "PWD_MEDIUM_BLOCKLIST_PATH";

/// Immutable scoring policy. Built once (typically at startup) and shared
/// across every check; the scorer never mutates it.
///
/// Field values are trusted as-is. A policy with, say, negative multipliers
/// is accepted and produces correspondingly odd scores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyConfig {
    pub min_length: usize,
    pub max_length: usize,
    /// Weight per character for the starting score.
    pub character_multiplier: i64,
    pub number_multiplier: i64,
    pub symbol_multiplier: i64,
    /// Weight per mid-position digit or symbol.
    pub num_mid_chars: i64,
    pub consecutive_uppercase_chars: i64,
    pub consecutive_lowercase_chars: i64,
    pub consecutive_numbers: i64,
    pub sequential_alpha_chars: i64,
    pub sequential_numbers: i64,
    pub sequential_symbols: i64,
    pub sequential_alpha_chars_string: String,
    pub sequential_numbers_string: String,
    pub sequential_symbols_string: String,
    pub common_passwords_strict: Blocklist,
    pub common_passwords_medium_strict: Blocklist,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            min_length: 8,
            max_length: 64,
            character_multiplier: 4,
            number_multiplier: 4,
            symbol_multiplier: 6,
            num_mid_chars: 2,
            consecutive_uppercase_chars: 2,
            consecutive_lowercase_chars: 2,
            consecutive_numbers: 2,
            sequential_alpha_chars: 3,
            sequential_numbers: 3,
            sequential_symbols: 3,
            sequential_alpha_chars_string: ALPHA_SET.to_string(),
            sequential_numbers_string: NUMBER_SET.to_string(),
            sequential_symbols_string: SYMBOL_SET.to_string(),
            common_passwords_strict: Blocklist::default_strict(),
            common_passwords_medium_strict: Blocklist::default_medium(),
        }
    }
}

impl PolicyConfig {
    /// Default policy, with blocklists swapped for the files named by
    /// [`STRICT_BLOCKLIST_ENV`] / [`MEDIUM_BLOCKLIST_ENV`] when those are set.
    pub fn from_env() -> Result<Self, BlocklistError> {
        let mut policy = Self::default();
        policy.common_passwords_strict =
            Blocklist::from_env_or(STRICT_BLOCKLIST_ENV, policy.common_passwords_strict)?;
        policy.common_passwords_medium_strict =
            Blocklist::from_env_or(MEDIUM_BLOCKLIST_ENV, policy.common_passwords_medium_strict)?;
        Ok(policy)
    }

    /// Whether every character of the candidate is acceptable: ASCII letters,
    /// digits, underscore, or the fixed symbol set.
    pub fn is_allowed(&self, candidate: &str) -> bool {
        !candidate.is_empty()
            && candidate
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || SYMBOL_SET.contains(c))
    }
}
