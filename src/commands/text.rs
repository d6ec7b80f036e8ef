//! Text client
//!
//! Line-based play without the TUI. Each line is one of:
//! - a word, which is traced on the board and submitted
//! - one or more cells such as `c1 d1 c2`, selected one after another exactly
//!   as clicks would be (selecting the last cell again submits)
//! - a command (`:submit`, `:undo`, `:clear`, `:hint`, `:words`, `:end`,
//!   `:new`, `:quit`)
//!
//! The leading `:` may be dropped when the rest of the line cannot be traced on
//! the board, so `quit` still quits unless QUIT is sitting there to be played.

use crate::core::{Board, Dealer, Position, find_path};
use crate::game::Session;
use crate::output::display::{
    print_completed_words, print_hint, print_outcome, print_text_board,
};
use crate::output::formatters::format_path;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Marks a line as a command rather than a word
pub const COMMAND_PREFIX: char = ':';

/// One parsed line of text-client input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextCommand {
    Quit,
    NewBoard,
    ClearWord,
    Undo,
    Submit,
    Hint,
    ShowWords,
    EndRound,
    Help,
    Unknown(String),
    Cells(Vec<Position>),
    Word(String),
    Empty,
}

impl TextCommand {
    /// Interpret a line of input against the board being played
    #[must_use]
    pub fn parse(line: &str, board: &Board) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }
        if let Some(name) = trimmed.strip_prefix(COMMAND_PREFIX) {
            return Self::named(name.trim()).unwrap_or_else(|| Self::Unknown(trimmed.to_string()));
        }

        let cells: Option<Vec<Position>> = trimmed
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(|token| token.parse().ok())
            .collect();
        if let Some(cells) = cells
            && !cells.is_empty()
        {
            return Self::Cells(cells);
        }

        // A traceable word wins over a command of the same name
        if trimmed.chars().count() > 1 && find_path(board, trimmed).is_some() {
            return Self::Word(trimmed.to_string());
        }
        Self::named(trimmed).unwrap_or_else(|| Self::Word(trimmed.to_string()))
    }

    fn named(name: &str) -> Option<Self> {
        let command = match name.to_ascii_lowercase().as_str() {
            "quit" | "q" | "exit" => Self::Quit,
            "new" | "reset" | "n" => Self::NewBoard,
            "clear" | "esc" => Self::ClearWord,
            "undo" | "u" => Self::Undo,
            "submit" | "." => Self::Submit,
            "hint" | "h" => Self::Hint,
            "words" | "w" => Self::ShowWords,
            "end" | "give up" => Self::EndRound,
            "help" | "?" => Self::Help,
            _ => return None,
        };
        Some(command)
    }
}

/// Run the text client on stdin
///
/// # Errors
///
/// Returns an error if reading input or flushing output fails.
pub fn run_text(session: &mut Session, dealer: &mut Dealer) -> Result<()> {
    let stdin = io::stdin();
    run_text_with(session, dealer, stdin.lock())
}

/// Run the text client on any line source
///
/// # Errors
///
/// Returns an error if reading input or flushing output fails.
pub fn run_text_with<R: BufRead>(
    session: &mut Session,
    dealer: &mut Dealer,
    mut input: R,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Boggle - Text Mode                       ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    loop {
        println!();
        print_text_board(session);

        print!("\n{} ", ">".bright_cyan().bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            println!();
            return Ok(());
        }

        match TextCommand::parse(&line, session.board()) {
            TextCommand::Empty => {}
            TextCommand::Quit => {
                println!("\n👋 Thanks for playing! Final score: {}\n", session.score());
                return Ok(());
            }
            TextCommand::Help => print_help(),
            TextCommand::Unknown(name) => {
                println!("{}", format!("Unknown command '{name}'. Try ':help'.").yellow());
            }
            TextCommand::NewBoard => {
                session.new_board(dealer.deal());
                println!("🔄 New board!");
            }
            TextCommand::ClearWord => {
                session.reset_word();
                println!("Selection cleared");
            }
            TextCommand::Undo => match session.undo() {
                Some(pos) => println!("✓ Removed {pos}"),
                None => println!("Nothing to undo!"),
            },
            TextCommand::Submit => print_outcome(&session.submit()),
            TextCommand::Hint => match session.hint() {
                Some(found) if !found.path.is_empty() => {
                    print_hint(found.word.len(), found.path[0]);
                }
                _ => println!("No words left to find on this board."),
            },
            TextCommand::ShowWords => print_completed_words(session),
            TextCommand::EndRound => {
                let missed = session.missed_words();
                print_completed_words(session);
                println!("\nMissed {} words:", missed.len());
                for found in missed.iter().take(30) {
                    println!("  {:<12} {}", found.word, format_path(&found.path).bright_black());
                }
                session.new_board(dealer.deal());
                println!("\n🔄 New board!");
            }
            TextCommand::Cells(cells) => {
                for pos in cells {
                    let outcome = session.select(pos);
                    print_outcome(&outcome);
                    if outcome.is_submission() {
                        break;
                    }
                }
            }
            TextCommand::Word(word) => print_outcome(&session.play_word(&word)),
        }
    }
}

fn print_help() {
    println!("Type a word to play it, or pick cells like 'c1 d1 c2' (repeat the last cell to submit).");
    println!("Commands: :submit :undo :clear :hint :words :end :new :help :quit");
    println!("The ':' can be left off unless the command is also a word on the board.");
}
