//! Survey command
//!
//! Deals many random boards and measures how many words each one holds.

use crate::core::Dealer;
use crate::game::GameConfig;
use crate::lexicon::Lexicon;
use crate::solver::{find_all_words, max_score};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Width of the word-count buckets in the distribution
pub const BUCKET_SIZE: usize = 10;

/// Statistics over a batch of boards
#[derive(Debug)]
pub struct SurveyResult {
    pub boards: usize,
    pub total_words: usize,
    pub average_words: f64,
    pub min_words: usize,
    pub max_words: usize,
    pub average_score: f64,
    pub best_score: u32,
    pub best_layout: Option<String>,
    pub empty_boards: usize,
    /// Boards per word-count bucket, keyed by the bucket's lower bound
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub boards_per_second: f64,
}

/// Deal and solve `count` boards
pub fn run_survey(
    dealer: &mut Dealer,
    lexicon: &Lexicon,
    config: GameConfig,
    count: usize,
    show_progress: bool,
) -> SurveyResult {
    let pb = if show_progress {
        ProgressBar::new(count as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let mut total_words = 0;
    let mut min_words = usize::MAX;
    let mut max_words = 0;
    let mut total_score: u64 = 0;
    let mut best_score = 0;
    let mut best_layout = None;
    let mut empty_boards = 0;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();

    for _ in 0..count {
        let board = dealer.deal();
        let words = find_all_words(&board, lexicon, config.min_word_len);
        let score = max_score(&words, config.scoring);

        total_words += words.len();
        min_words = min_words.min(words.len());
        max_words = max_words.max(words.len());
        total_score += u64::from(score);
        if words.is_empty() {
            empty_boards += 1;
        }
        if best_layout.is_none() || score > best_score {
            best_score = score;
            best_layout = Some(board.layout());
        }
        *distribution
            .entry(words.len() / BUCKET_SIZE * BUCKET_SIZE)
            .or_insert(0) += 1;

        pb.set_message(format!("best: {best_score} pts"));
        pb.inc(1);
    }
    pb.finish_and_clear();

    let duration = start.elapsed();
    let divisor = count.max(1) as f64;

    SurveyResult {
        boards: count,
        total_words,
        average_words: total_words as f64 / divisor,
        min_words: if count == 0 { 0 } else { min_words },
        max_words,
        average_score: total_score as f64 / divisor,
        best_score,
        best_layout,
        empty_boards,
        distribution,
        duration,
        boards_per_second: count as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, PredictableDie, PredictableShuffler};
    use crate::solver::find_all_words;

    #[test]
    fn predictable_boards_give_identical_counts() {
        let lexicon = Lexicon::embedded();
        let mut dealer = Dealer::predictable();
        let result = run_survey(&mut dealer, &lexicon, GameConfig::default(), 3, false);

        let mut board = Board::new();
        board.shake(&mut PredictableShuffler, &mut PredictableDie::default());
        let expected = find_all_words(&board, &lexicon, 3).len();

        assert_eq!(result.boards, 3);
        assert_eq!(result.total_words, expected * 3);
        assert_eq!(result.min_words, expected);
        assert_eq!(result.max_words, expected);
        assert_eq!(result.best_layout.as_deref(), Some("UTPU/TITS/RRVS/MAIO"));
        assert_eq!(result.distribution.values().sum::<usize>(), 3);
    }

    #[test]
    fn zero_boards_is_well_defined() {
        let lexicon = Lexicon::embedded();
        let mut dealer = Dealer::random(Some(1));
        let result = run_survey(&mut dealer, &lexicon, GameConfig::default(), 0, false);
        assert_eq!(result.boards, 0);
        assert_eq!(result.min_words, 0);
        assert!(result.best_layout.is_none());
        assert!(result.average_words.abs() < f64::EPSILON);
    }
}
