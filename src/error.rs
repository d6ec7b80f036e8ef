//! Error type for board, path and submission failures

use thiserror::Error;

/// Everything that can go wrong while building paths or submitting words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoggleError {
    #[error("position ({row}, {col}) is outside the 4x4 grid")]
    InvalidPosition { row: usize, col: usize },

    #[error("cell index {0} is outside the 4x4 grid")]
    InvalidIndex(usize),

    #[error("'{0}' is not a cell like a1..d4")]
    InvalidCell(String),

    #[error("cube id {0} does not exist")]
    UnknownCube(usize),

    #[error("no letters selected")]
    EmptyPath,

    #[error("{word} is too short (minimum {min} letters)")]
    TooShort { word: String, min: usize },

    #[error("cells {from} and {to} are not adjacent")]
    NotAdjacent { from: String, to: String },

    #[error("cell {0} is used twice")]
    CellReused(String),

    #[error("{0} is not in the word list")]
    NotInLexicon(String),

    #[error("{0} has already been found")]
    AlreadyFound(String),

    #[error("{0} cannot be traced on the board")]
    NotOnBoard(String),

    #[error("invalid board layout: {0}")]
    InvalidLayout(String),
}
