//! One round of play on one board
//!
//! The player builds a word by selecting cubes. Selection follows these rules:
//!
//! 1. With nothing selected, any cube starts a new word.
//! 2. An unselected cube next to the most recent one extends the word.
//! 3. An unselected cube elsewhere is ignored.
//! 4. A cube already in the word (but not the most recent) is ignored.
//! 5. Selecting the most recent cube again submits the word. Accepted words
//!    are recorded and scored; either way the selection is cleared.

use super::config::GameConfig;
use crate::core::{Board, Position, find_path, validate_path};
use crate::error::BoggleError;
use crate::lexicon::Lexicon;
use crate::solver::{FoundWord, find_all_words};
use rustc_hash::FxHashSet;
use tracing::debug;

/// Selection state of a single cube
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CubeStatus {
    Unselected,
    Selected,
    MostRecentlySelected,
}

/// What happened in response to a selection or submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// A new word was started
    Started { word: String },
    /// The word grew by one cube
    Extended { word: String },
    /// The cube does not touch the most recent one
    NotAdjacent,
    /// The cube is already part of the word
    AlreadyUsed,
    /// The word was submitted and accepted
    Accepted { word: String, points: u32 },
    /// The word was submitted and rejected
    Rejected { word: String, reason: BoggleError },
}

impl SelectionOutcome {
    /// Whether this outcome ended the current word
    #[must_use]
    pub const fn is_submission(&self) -> bool {
        matches!(self, Self::Accepted { .. } | Self::Rejected { .. })
    }
}

/// An accepted word and the points it earned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedWord {
    pub word: String,
    pub points: u32,
}

/// Game state for one board
pub struct Session<'a> {
    board: Board,
    lexicon: &'a Lexicon,
    config: GameConfig,
    path: Vec<Position>,
    completed: Vec<CompletedWord>,
    found: FxHashSet<String>,
    score: u32,
}

impl<'a> Session<'a> {
    #[must_use]
    pub fn new(board: Board, lexicon: &'a Lexicon, config: GameConfig) -> Self {
        Self {
            board,
            lexicon,
            config,
            path: Vec::new(),
            completed: Vec::new(),
            found: FxHashSet::default(),
            score: 0,
        }
    }

    /// Select the cube at a position
    ///
    /// # Examples
    /// ```
    /// use boggle::core::{Board, Position};
    /// use boggle::game::{GameConfig, SelectionOutcome, Session};
    /// use boggle::lexicon::Lexicon;
    ///
    /// let lexicon = Lexicon::from_words(["PUT"]);
    /// let board = Board::from_layout("UTPU TITS RRVS MAIO").unwrap();
    /// let mut session = Session::new(board, &lexicon, GameConfig::default());
    ///
    /// let p = Position::new(0, 2).unwrap();
    /// let u = Position::new(0, 3).unwrap();
    /// let t = Position::new(1, 2).unwrap();
    /// session.select(p);
    /// session.select(u);
    /// session.select(t);
    /// assert_eq!(session.word_so_far(), "PUT");
    ///
    /// let outcome = session.select(t);
    /// assert_eq!(outcome, SelectionOutcome::Accepted { word: "PUT".into(), points: 1 });
    /// assert_eq!(session.score(), 1);
    /// ```
    pub fn select(&mut self, pos: Position) -> SelectionOutcome {
        let outcome = match self.status_at(pos) {
            CubeStatus::MostRecentlySelected => return self.submit(),
            CubeStatus::Selected => SelectionOutcome::AlreadyUsed,
            CubeStatus::Unselected => match self.path.last().copied() {
                None => {
                    self.path.push(pos);
                    SelectionOutcome::Started {
                        word: self.word_so_far(),
                    }
                }
                Some(last) if last.is_adjacent(pos) => {
                    self.path.push(pos);
                    SelectionOutcome::Extended {
                        word: self.word_so_far(),
                    }
                }
                Some(_) => SelectionOutcome::NotAdjacent,
            },
        };
        debug!(cell = %pos, ?outcome, "cube selected");
        outcome
    }

    /// Select a cube by its id, wherever it currently sits
    ///
    /// # Errors
    /// Returns `BoggleError::UnknownCube` if no cube has that id.
    pub fn select_cube(&mut self, cube_id: usize) -> Result<SelectionOutcome, BoggleError> {
        let pos = self.board.position_of(cube_id)?;
        Ok(self.select(pos))
    }

    /// Submit the word so far and clear the selection
    pub fn submit(&mut self) -> SelectionOutcome {
        let path = std::mem::take(&mut self.path);
        let outcome = match validate_path(&self.board, &path) {
            Ok(word) => match self.accept(&word) {
                Ok(points) => SelectionOutcome::Accepted { word, points },
                Err(reason) => SelectionOutcome::Rejected { word, reason },
            },
            Err(reason) => SelectionOutcome::Rejected {
                word: String::new(),
                reason,
            },
        };
        debug!(?outcome, score = self.score, "word submitted");
        outcome
    }

    /// Play a typed word: trace it on the board, then submit it
    ///
    /// Any selection in progress is discarded.
    pub fn play_word(&mut self, text: &str) -> SelectionOutcome {
        self.path.clear();
        let word = text.trim().to_ascii_uppercase();
        match find_path(&self.board, &word) {
            Some(path) => {
                self.path = path;
                self.submit()
            }
            None => SelectionOutcome::Rejected {
                reason: BoggleError::NotOnBoard(word.clone()),
                word,
            },
        }
    }

    fn accept(&mut self, word: &str) -> Result<u32, BoggleError> {
        if word.len() < self.config.min_word_len {
            return Err(BoggleError::TooShort {
                word: word.to_string(),
                min: self.config.min_word_len,
            });
        }
        if !self.lexicon.contains(word) {
            return Err(BoggleError::NotInLexicon(word.to_string()));
        }
        if !self.found.insert(word.to_string()) {
            return Err(BoggleError::AlreadyFound(word.to_string()));
        }

        let points = self.config.scoring.score(word);
        self.score += points;
        self.completed.push(CompletedWord {
            word: word.to_string(),
            points,
        });
        Ok(points)
    }

    /// Drop the most recently selected cube
    pub fn undo(&mut self) -> Option<Position> {
        self.path.pop()
    }

    /// Clear the word so far and every cube's selection
    pub fn reset_word(&mut self) {
        self.path.clear();
    }

    /// Start over on a new board, clearing words and score
    pub fn new_board(&mut self, board: Board) {
        self.board = board;
        self.path.clear();
        self.completed.clear();
        self.found.clear();
        self.score = 0;
    }

    /// Selection state of the cube at a position
    #[must_use]
    pub fn status_at(&self, pos: Position) -> CubeStatus {
        match self.path.iter().position(|&p| p == pos) {
            Some(index) if index + 1 == self.path.len() => CubeStatus::MostRecentlySelected,
            Some(_) => CubeStatus::Selected,
            None => CubeStatus::Unselected,
        }
    }

    /// Letters of the selected cubes, in selection order
    #[must_use]
    pub fn word_so_far(&self) -> String {
        self.path.iter().map(|&p| self.board.letter_at(p)).collect()
    }

    #[must_use]
    pub fn selected_path(&self) -> &[Position] {
        &self.path
    }

    #[must_use]
    pub fn completed_words(&self) -> &[CompletedWord] {
        &self.completed
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Every playable word on this board
    #[must_use]
    pub fn all_words(&self) -> Vec<FoundWord> {
        find_all_words(&self.board, self.lexicon, self.config.min_word_len)
    }

    /// Playable words not yet found, longest first
    #[must_use]
    pub fn missed_words(&self) -> Vec<FoundWord> {
        self.all_words()
            .into_iter()
            .filter(|found| !self.found.contains(&found.word))
            .collect()
    }

    /// A word still waiting to be found, if any
    #[must_use]
    pub fn hint(&self) -> Option<FoundWord> {
        self.missed_words().into_iter().last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{NonShuffler, PredictableDie, PredictableShuffler};
    use crate::game::ScoringRule;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    fn predictable_board() -> Board {
        let mut board = Board::new();
        board.shake(&mut PredictableShuffler, &mut PredictableDie::default());
        board
    }

    fn lexicon() -> Lexicon {
        Lexicon::from_words(["GET", "PUT", "APT", "PIT", "TIP", "SPIT", "ARM", "RAM", "IT"])
    }

    #[test]
    fn cube_ids_walk_through_a_word() {
        let lexicon = lexicon();
        let mut session = Session::new(predictable_board(), &lexicon, GameConfig::default());

        session.select_cube(13).unwrap();
        session.select_cube(12).unwrap();
        session.select_cube(9).unwrap();
        assert_eq!(session.word_so_far(), "PUT");

        let outcome = session.select_cube(9).unwrap();
        assert!(matches!(outcome, SelectionOutcome::Accepted { .. }));
        assert_eq!(session.completed_words().len(), 1);
        assert_eq!(session.completed_words()[0].word, "PUT");
        assert_eq!(session.word_so_far(), "");

        session.select_cube(13).unwrap();
        session.select_cube(12).unwrap();
        assert_eq!(
            session.select_cube(11).unwrap(),
            SelectionOutcome::NotAdjacent
        );
        assert_eq!(session.word_so_far(), "PU");

        let outcome = session.select_cube(12).unwrap();
        assert!(matches!(outcome, SelectionOutcome::Rejected { .. }));
        assert_eq!(session.completed_words().len(), 1);
        assert_eq!(session.word_so_far(), "");
    }

    #[test]
    fn unknown_cube_id_is_an_error() {
        let lexicon = lexicon();
        let mut session = Session::new(predictable_board(), &lexicon, GameConfig::default());
        assert_eq!(
            session.select_cube(16),
            Err(BoggleError::UnknownCube(16))
        );
    }

    #[test]
    fn statuses_track_the_selection() {
        let lexicon = lexicon();
        let mut session = Session::new(predictable_board(), &lexicon, GameConfig::default());

        assert_eq!(session.status_at(pos(1, 1)), CubeStatus::Unselected);
        session.select(pos(1, 1));
        assert_eq!(session.status_at(pos(1, 1)), CubeStatus::MostRecentlySelected);
        session.select(pos(1, 2));
        assert_eq!(session.status_at(pos(1, 1)), CubeStatus::Selected);
        assert_eq!(session.status_at(pos(1, 2)), CubeStatus::MostRecentlySelected);
        assert_eq!(session.status_at(pos(0, 0)), CubeStatus::Unselected);
    }

    #[test]
    fn reselecting_an_earlier_cube_is_ignored() {
        let lexicon = lexicon();
        let mut session = Session::new(predictable_board(), &lexicon, GameConfig::default());

        session.select(pos(1, 1));
        session.select(pos(1, 2));
        assert_eq!(session.select(pos(1, 1)), SelectionOutcome::AlreadyUsed);
        assert_eq!(session.word_so_far(), "IT");
    }

    #[test]
    fn outcomes_report_the_growing_word() {
        let lexicon = lexicon();
        let mut session = Session::new(predictable_board(), &lexicon, GameConfig::default());

        assert_eq!(
            session.select(pos(0, 1)),
            SelectionOutcome::Started { word: "T".into() }
        );
        assert_eq!(
            session.select(pos(1, 1)),
            SelectionOutcome::Extended { word: "TI".into() }
        );
        assert!(!session.select(pos(0, 2)).is_submission());
        assert!(session.select(pos(0, 2)).is_submission());
        assert_eq!(session.completed_words()[0].word, "TIP");
    }

    #[test]
    fn rejection_reasons() {
        let lexicon = lexicon();
        let mut session = Session::new(predictable_board(), &lexicon, GameConfig::default());

        assert_eq!(
            session.play_word("TUT"),
            SelectionOutcome::Rejected {
                word: "TUT".into(),
                reason: BoggleError::NotInLexicon("TUT".into()),
            }
        );
        assert!(matches!(
            session.play_word("ZEBRA"),
            SelectionOutcome::Rejected {
                reason: BoggleError::NotOnBoard(_),
                ..
            }
        ));
        assert!(matches!(
            session.play_word("pit"),
            SelectionOutcome::Accepted { .. }
        ));
        assert_eq!(
            session.play_word("PIT"),
            SelectionOutcome::Rejected {
                word: "PIT".into(),
                reason: BoggleError::AlreadyFound("PIT".into()),
            }
        );
        assert_eq!(session.completed_words().len(), 1);
    }

    #[test]
    fn short_words_are_rejected_even_if_listed() {
        let lexicon = lexicon();
        let mut session = Session::new(predictable_board(), &lexicon, GameConfig::default());
        assert!(matches!(
            session.play_word("IT"),
            SelectionOutcome::Rejected {
                reason: BoggleError::TooShort { min: 3, .. },
                ..
            }
        ));

        let relaxed = GameConfig::new(2, ScoringRule::Classic);
        let mut session = Session::new(predictable_board(), &lexicon, relaxed);
        assert_eq!(
            session.play_word("IT"),
            SelectionOutcome::Accepted {
                word: "IT".into(),
                points: 0,
            }
        );
    }

    #[test]
    fn submitting_nothing_is_rejected() {
        let lexicon = lexicon();
        let mut session = Session::new(predictable_board(), &lexicon, GameConfig::default());
        assert_eq!(
            session.submit(),
            SelectionOutcome::Rejected {
                word: String::new(),
                reason: BoggleError::EmptyPath,
            }
        );
    }

    #[test]
    fn score_accumulates_with_rule() {
        let lexicon = lexicon();
        let config = GameConfig::new(3, ScoringRule::WordHunt);
        let mut session = Session::new(predictable_board(), &lexicon, config);

        session.play_word("PUT");
        session.play_word("SPIT");
        assert_eq!(session.score(), 100 + 400);
    }

    #[test]
    fn undo_and_reset() {
        let lexicon = lexicon();
        let mut session = Session::new(predictable_board(), &lexicon, GameConfig::default());

        session.select(pos(0, 2));
        session.select(pos(0, 3));
        assert_eq!(session.undo(), Some(pos(0, 3)));
        assert_eq!(session.word_so_far(), "P");
        assert_eq!(session.status_at(pos(0, 2)), CubeStatus::MostRecentlySelected);

        session.select(pos(1, 1));
        session.reset_word();
        assert_eq!(session.word_so_far(), "");
        assert!(session.selected_path().is_empty());
        assert_eq!(session.undo(), None);
    }

    #[test]
    fn new_board_clears_progress() {
        let lexicon = lexicon();
        let mut session = Session::new(predictable_board(), &lexicon, GameConfig::default());
        session.play_word("PUT");
        session.select(pos(1, 1));

        let mut fresh = Board::new();
        fresh.shake(&mut NonShuffler, &mut PredictableDie::new(0));
        session.new_board(fresh);

        assert_eq!(session.score(), 0);
        assert!(session.completed_words().is_empty());
        assert_eq!(session.word_so_far(), "");
        assert_eq!(session.board().letter_at(pos(0, 0)), "A");
    }

    #[test]
    fn missed_words_shrink_as_words_are_found() {
        let lexicon = lexicon();
        let mut session = Session::new(predictable_board(), &lexicon, GameConfig::default());

        let before = session.missed_words().len();
        assert!(before > 0);
        let hint = session.hint().unwrap();
        assert!(matches!(
            session.play_word(&hint.word),
            SelectionOutcome::Accepted { .. }
        ));
        assert_eq!(session.missed_words().len(), before - 1);
    }
}
