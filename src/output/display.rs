//! Display functions for game state and command results

use super::formatters::{board_grid, create_progress_bar, format_path};
use crate::commands::survey::BUCKET_SIZE;
use crate::commands::{SolveResult, SurveyResult};
use crate::core::Position;
use crate::game::{SelectionOutcome, Session};
use colored::Colorize;

/// Print the coloured board with the word so far and the score
pub fn print_text_board(session: &Session) {
    println!("{}", board_grid(session));

    let word = session.word_so_far();
    println!(
        "\nWord so far: {}   Score: {}   Words: {}",
        if word.is_empty() {
            "-".bright_black().to_string()
        } else {
            word.bright_yellow().bold().to_string()
        },
        session.score().to_string().bright_cyan().bold(),
        session.completed_words().len()
    );
}

/// Print what a selection or submission did
pub fn print_outcome(outcome: &SelectionOutcome) {
    match outcome {
        SelectionOutcome::Started { word } | SelectionOutcome::Extended { word } => {
            println!("  {}", word.bright_yellow());
        }
        SelectionOutcome::NotAdjacent => {
            println!("{}", "  That cube doesn't touch the last one.".yellow());
        }
        SelectionOutcome::AlreadyUsed => {
            println!("{}", "  That cube is already in the word.".yellow());
        }
        SelectionOutcome::Accepted { word, points } => {
            println!(
                "{}",
                format!("✅ {word} (+{points} {})", if *points == 1 { "point" } else { "points" })
                    .green()
                    .bold()
            );
        }
        SelectionOutcome::Rejected { reason, .. } => {
            println!("{}", format!("❌ {reason}").red());
        }
    }
}

/// Print the words found so far
pub fn print_completed_words(session: &Session) {
    let completed = session.completed_words();
    if completed.is_empty() {
        println!("No words found yet.");
        return;
    }
    println!("Found {} words:", completed.len());
    for entry in completed {
        println!("  {:<12} {:>5}", entry.word, entry.points);
    }
    println!("  {:<12} {:>5}", "total".bright_black(), session.score());
}

/// Print the result of solving a board
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Board: {}   Rules: {} scoring, {}+ letters",
        result.board.layout().bright_yellow().bold(),
        result.config.scoring,
        result.config.min_word_len
    );
    println!("{}", "─".repeat(60).cyan());
    println!("\n{}\n", result.board);

    for found in &result.words {
        let points = result.config.scoring.score(&found.word);
        if verbose {
            println!(
                "  {:<12} {:>5}   {}",
                found.word,
                points,
                format_path(&found.path).bright_black()
            );
        } else {
            println!("  {:<12} {:>5}", found.word, points);
        }
    }

    println!();
    println!(
        "{}",
        format!(
            "📊 {} words, {} points available",
            result.words.len(),
            result.max_score
        )
        .green()
        .bold()
    );
}

/// Print the result of a survey
pub fn print_survey_result(result: &SurveyResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SURVEY RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Boards:".bright_cyan().bold());
    println!("   Boards dealt:     {}", result.boards);
    println!(
        "   Average words:    {}",
        format!("{:.1}", result.average_words).bright_yellow().bold()
    );
    println!("   Fewest words:     {}", result.min_words.to_string().yellow());
    println!("   Most words:       {}", result.max_words.to_string().green());
    println!("   Empty boards:     {}", result.empty_boards);
    println!("   Average score:    {:.1}", result.average_score);
    if let Some(layout) = &result.best_layout {
        println!(
            "   Best board:       {} ({} points)",
            layout.bright_white().bold(),
            result.best_score
        );
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Boards/second:    {:.1}", result.boards_per_second);

    if result.boards == 0 {
        return;
    }

    println!("\n📈 {}", "Words per board:".bright_cyan().bold());
    for (&bucket, &count) in &result.distribution {
        let pct = (count as f64 / result.boards as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!(
            "   {:>3}-{:<3} {} {count:4} ({pct:5.1}%)",
            bucket,
            bucket + BUCKET_SIZE - 1,
            bar.green()
        );
    }
}

/// Print a hint: the first cell of a word still to be found
pub fn print_hint(length: usize, start: Position) {
    println!("💡 Try a {length}-letter word starting at {start}");
}
