//! Solve command
//!
//! Lists every word that can be played on a board.

use crate::core::Board;
use crate::game::GameConfig;
use crate::lexicon::Lexicon;
use crate::solver::{FoundWord, find_all_words, max_score};

/// Result of solving one board
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub board: Board,
    pub words: Vec<FoundWord>,
    pub max_score: u32,
    pub config: GameConfig,
}

/// Find every playable word on the board under the given rules
#[must_use]
pub fn solve_board(board: Board, lexicon: &Lexicon, config: GameConfig) -> SolveResult {
    let words = find_all_words(&board, lexicon, config.min_word_len);
    let max_score = max_score(&words, config.scoring);

    SolveResult {
        board,
        words,
        max_score,
        config,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ScoringRule;

    #[test]
    fn solve_board_scores_all_words() {
        let board = Board::from_layout("UTPU TITS RRVS MAIO").unwrap();
        let lexicon = Lexicon::from_words(["PUT", "SPIT", "PITS"]);
        let config = GameConfig::new(3, ScoringRule::WordHunt);

        let result = solve_board(board, &lexicon, config);
        assert_eq!(result.words.len(), 3);
        assert_eq!(result.max_score, 100 + 400 + 400);
        assert_eq!(result.config, config);
    }
}
