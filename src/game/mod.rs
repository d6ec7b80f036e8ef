//! Game rules: selection, submission and scoring

mod config;
mod scoring;
mod session;

pub use config::{DEFAULT_MIN_WORD_LEN, GameConfig};
pub use scoring::ScoringRule;
pub use session::{CompletedWord, CubeStatus, SelectionOutcome, Session};
