//! Terminal output formatting
//!
//! Display utilities for the text client and command results.

pub mod display;
pub mod formatters;

pub use display::{print_solve_result, print_survey_result};
