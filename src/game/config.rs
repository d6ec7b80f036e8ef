//! Game rules that can be tuned from the command line

use super::scoring::ScoringRule;

/// Shortest word accepted by default
pub const DEFAULT_MIN_WORD_LEN: usize = 3;

/// Rules for one game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Words shorter than this (in letters, `QU` counting as two) are rejected
    pub min_word_len: usize,
    pub scoring: ScoringRule,
}

impl GameConfig {
    #[must_use]
    pub const fn new(min_word_len: usize, scoring: ScoringRule) -> Self {
        Self {
            min_word_len,
            scoring,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_WORD_LEN, ScoringRule::Classic)
    }
}
