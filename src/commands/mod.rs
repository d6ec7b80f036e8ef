//! Command implementations

pub mod solve;
pub mod survey;
pub mod text;

pub use solve::{SolveResult, solve_board};
pub use survey::{SurveyResult, run_survey};
pub use text::{TextCommand, run_text};
