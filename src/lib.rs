//! Boggle
//!
//! The word-finding game on a 4x4 grid of letter cubes, with a terminal UI
//! client and a text client.
//!
//! # Quick Start
//!
//! ```rust
//! use boggle::core::{Board, NonShuffler, PredictableDie};
//! use boggle::game::{GameConfig, Session};
//! use boggle::lexicon::Lexicon;
//!
//! let lexicon = Lexicon::from_words(["PUT", "PIT"]);
//! let mut board = Board::new();
//! board.shake(&mut NonShuffler, &mut PredictableDie::default());
//!
//! let session = Session::new(board, &lexicon, GameConfig::default());
//! println!("{}", session.board());
//! assert!(session.word_so_far().is_empty());
//! ```

// Error type shared by the library
pub mod error;

// Board, cubes, dice and path rules
pub mod core;

// Word list
pub mod lexicon;

// Selection state machine and scoring
pub mod game;

// Exhaustive word search
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub use error::BoggleError;
