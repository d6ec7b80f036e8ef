//! Word scoring

use clap::ValueEnum;
use std::fmt;

/// How accepted words are scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ScoringRule {
    /// Standard Boggle table: 1, 1, 2, 3, 5, 11 for lengths 3 to 8+
    #[default]
    Classic,
    /// Word Hunt table: 100, 400, 800, 1400, 1800, 2200, then +400 per letter
    WordHunt,
}

impl ScoringRule {
    /// Points for a word of the given letter count
    ///
    /// `QU` counts as two letters. Words under three letters score nothing.
    ///
    /// # Examples
    /// ```
    /// use boggle::game::ScoringRule;
    ///
    /// assert_eq!(ScoringRule::Classic.points(4), 1);
    /// assert_eq!(ScoringRule::Classic.points(8), 11);
    /// assert_eq!(ScoringRule::WordHunt.points(5), 800);
    /// ```
    #[must_use]
    pub const fn points(self, letters: usize) -> u32 {
        match self {
            Self::Classic => match letters {
                0..=2 => 0,
                3 | 4 => 1,
                5 => 2,
                6 => 3,
                7 => 5,
                _ => 11,
            },
            Self::WordHunt => match letters {
                0..=2 => 0,
                3 => 100,
                4 => 400,
                5 => 800,
                6 => 1400,
                7 => 1800,
                n => 2200 + 400 * (n as u32 - 8),
            },
        }
    }

    /// Points for a word
    #[must_use]
    pub fn score(self, word: &str) -> u32 {
        self.points(word.chars().count())
    }
}

impl fmt::Display for ScoringRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Classic => write!(f, "classic"),
            Self::WordHunt => write!(f, "word-hunt"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_table() {
        let rule = ScoringRule::Classic;
        let expected = [(2, 0), (3, 1), (4, 1), (5, 2), (6, 3), (7, 5), (8, 11), (12, 11)];
        for (len, points) in expected {
            assert_eq!(rule.points(len), points, "length {len}");
        }
    }

    #[test]
    fn word_hunt_table_extends_past_eight() {
        let rule = ScoringRule::WordHunt;
        assert_eq!(rule.points(2), 0);
        assert_eq!(rule.points(3), 100);
        assert_eq!(rule.points(7), 1800);
        assert_eq!(rule.points(8), 2200);
        assert_eq!(rule.points(9), 2600);
        assert_eq!(rule.points(10), 3000);
    }

    #[test]
    fn qu_counts_as_two_letters() {
        assert_eq!(ScoringRule::Classic.score("QUEEN"), 2);
        assert_eq!(ScoringRule::Classic.score("QUIT"), 1);
    }

    #[test]
    fn default_is_classic() {
        assert_eq!(ScoringRule::default(), ScoringRule::Classic);
        assert_eq!(ScoringRule::WordHunt.to_string(), "word-hunt");
    }
}
