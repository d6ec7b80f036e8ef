//! Exhaustive word search
//!
//! Finds every lexicon word that can be traced on a board. The search runs a
//! depth-first walk from each of the sixteen cells, abandoning a branch as soon
//! as the letters so far are not a prefix of any word. Starting cells are
//! searched in parallel.

use crate::core::{Board, Position};
use crate::game::ScoringRule;
use crate::lexicon::Lexicon;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// A word found on the board together with one path that spells it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundWord {
    pub word: String,
    pub path: Vec<Position>,
}

/// Every word of at least `min_len` letters that can be traced on the board
///
/// Results are unique, sorted longest first and then alphabetically.
///
/// # Examples
/// ```
/// use boggle::core::Board;
/// use boggle::lexicon::Lexicon;
/// use boggle::solver::find_all_words;
///
/// let board = Board::from_layout("UTPU TITS RRVS MAIO").unwrap();
/// let lexicon = Lexicon::from_words(["PUT", "SPIT", "ZEBRA"]);
/// let words: Vec<String> = find_all_words(&board, &lexicon, 3)
///     .into_iter()
///     .map(|found| found.word)
///     .collect();
/// assert_eq!(words, ["SPIT", "PUT"]);
/// ```
#[must_use]
pub fn find_all_words(board: &Board, lexicon: &Lexicon, min_len: usize) -> Vec<FoundWord> {
    let letters: Vec<String> = Position::all().map(|pos| board.letter_at(pos)).collect();

    let per_start: Vec<Vec<FoundWord>> = Position::all()
        .collect::<Vec<_>>()
        .par_iter()
        .map(|&start| {
            let mut found = Vec::new();
            let mut path = Vec::new();
            let mut prefix = String::new();
            search(&letters, lexicon, min_len, start, 0, &mut path, &mut prefix, &mut found);
            found
        })
        .collect();

    let mut unique: FxHashMap<String, Vec<Position>> = FxHashMap::default();
    for found in per_start.into_iter().flatten() {
        unique.entry(found.word).or_insert(found.path);
    }

    let mut words: Vec<FoundWord> = unique
        .into_iter()
        .map(|(word, path)| FoundWord { word, path })
        .collect();
    words.sort_by(|a, b| b.word.len().cmp(&a.word.len()).then_with(|| a.word.cmp(&b.word)));

    tracing::debug!(layout = %board.layout(), count = words.len(), "board solved");
    words
}

#[allow(clippy::too_many_arguments)] // recursion state kept on the stack
fn search(
    letters: &[String],
    lexicon: &Lexicon,
    min_len: usize,
    pos: Position,
    used: u16,
    path: &mut Vec<Position>,
    prefix: &mut String,
    found: &mut Vec<FoundWord>,
) {
    let bit = 1 << pos.index();
    if used & bit != 0 {
        return;
    }

    let before = prefix.len();
    prefix.push_str(&letters[pos.index()]);
    path.push(pos);

    if prefix.len() >= min_len && lexicon.contains(prefix) {
        found.push(FoundWord {
            word: prefix.clone(),
            path: path.clone(),
        });
    }
    if lexicon.is_prefix(prefix) {
        for next in pos.neighbors() {
            search(letters, lexicon, min_len, next, used | bit, path, prefix, found);
        }
    }

    path.pop();
    prefix.truncate(before);
}

/// Total points available from a set of words
#[must_use]
pub fn max_score(words: &[FoundWord], rule: ScoringRule) -> u32 {
    words.iter().map(|found| rule.score(&found.word)).sum()
}
