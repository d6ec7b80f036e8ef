//! The word list
//!
//! A `Lexicon` holds the valid words in uppercase together with every proper
//! prefix of those words, so a board search can stop as soon as a path no
//! longer leads anywhere.

mod embedded;
pub mod loader;

pub use embedded::{BOGWORDS, BOGWORDS_COUNT};

use rustc_hash::FxHashSet;

/// Set of valid words
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: FxHashSet<String>,
    prefixes: FxHashSet<String>,
}

impl Lexicon {
    /// Build a lexicon from any collection of words
    ///
    /// Entries are trimmed and uppercased; empty or non-alphabetic entries are
    /// skipped.
    ///
    /// # Examples
    /// ```
    /// use boggle::lexicon::Lexicon;
    ///
    /// let lexicon = Lexicon::from_words(["put", " Pit ", "x-ray", ""]);
    /// assert_eq!(lexicon.len(), 2);
    /// assert!(lexicon.contains("PUT"));
    /// assert!(lexicon.contains("pit"));
    /// assert!(lexicon.is_prefix("PI"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Self::default();
        for word in words {
            lexicon.insert(word.as_ref());
        }
        lexicon
    }

    /// The word list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(BOGWORDS)
    }

    /// Add a word, returning whether it was new
    pub fn insert(&mut self, word: &str) -> bool {
        let Some(word) = normalize(word) else {
            return false;
        };
        for end in 1..word.len() {
            self.prefixes.insert(word[..end].to_string());
        }
        self.words.insert(word)
    }

    /// Whether the word is valid (case-insensitive)
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        normalize(word).is_some_and(|w| self.words.contains(&w))
    }

    /// Whether some word continues past `prefix`
    ///
    /// Expects an uppercase prefix, as produced by board letters.
    #[must_use]
    pub fn is_prefix(&self, prefix: &str) -> bool {
        self.prefixes.contains(prefix)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

fn normalize(word: &str) -> Option<String> {
    let trimmed = word.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(trimmed.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_count_matches_const() {
        assert_eq!(BOGWORDS.len(), BOGWORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_uppercase_letters() {
        for &word in BOGWORDS {
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn embedded_lexicon_has_common_words() {
        let lexicon = Lexicon::embedded();
        assert!(!lexicon.is_empty());
        for word in ["PUT", "SPIT", "QUEEN", "ZEBRA", "arm"] {
            assert!(lexicon.contains(word), "{word} missing");
        }
    }

    #[test]
    fn embedded_lexicon_reaches_the_top_scoring_lengths() {
        let lexicon = Lexicon::embedded();
        for word in ["STRIPES", "TOURIST", "STRANGER", "QUARTERS", "BUTTERFLY"] {
            assert!(lexicon.contains(word), "{word} missing");
        }
        let sevens = lexicon.iter().filter(|w| w.len() == 7).count();
        let eight_plus = lexicon.iter().filter(|w| w.len() >= 8).count();
        assert!(sevens >= 100, "only {sevens} seven-letter words");
        assert!(eight_plus >= 100, "only {eight_plus} words of 8+ letters");
    }

    #[test]
    fn entries_are_normalized() {
        let lexicon = Lexicon::from_words(["  tip", "TOP", "tOp", "don't", "", "42"]);
        assert_eq!(lexicon.len(), 2);
        assert!(lexicon.contains("TIP"));
        assert!(lexicon.contains(" top "));
        assert!(!lexicon.contains("DONT"));
    }

    #[test]
    fn prefixes_exclude_whole_words() {
        let lexicon = Lexicon::from_words(["PITS"]);
        assert!(lexicon.is_prefix("P"));
        assert!(lexicon.is_prefix("PIT"));
        assert!(!lexicon.is_prefix("PITS"));
        assert!(!lexicon.contains("PIT"));
    }

    #[test]
    fn insert_reports_new_words() {
        let mut lexicon = Lexicon::default();
        assert!(lexicon.insert("ram"));
        assert!(!lexicon.insert("RAM"));
        assert!(!lexicon.insert("r4m"));
        assert_eq!(lexicon.iter().collect::<Vec<_>>(), vec!["RAM"]);
    }
}
