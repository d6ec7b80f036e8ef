//! Word list loading utilities
//!
//! Provides functions to load a lexicon from a file or use the embedded list.

use super::Lexicon;
use std::fs;
use std::io;
use std::path::Path;

/// Load a lexicon from a file with one word per line
///
/// Blank lines and entries with non-letters are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use boggle::lexicon::loader::load_from_file;
///
/// let lexicon = load_from_file("data/bogwords.txt").unwrap();
/// println!("Loaded {} words", lexicon.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Lexicon> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let lexicon = Lexicon::from_words(content.lines());
    tracing::info!(path = %path.display(), words = lexicon.len(), "lexicon loaded");
    Ok(lexicon)
}

/// Resolve the `--lexicon` option: `embedded` or a file path
///
/// # Errors
///
/// Returns an I/O error if a file path was given and cannot be read.
pub fn load(source: &str) -> io::Result<Lexicon> {
    if source.eq_ignore_ascii_case("embedded") {
        let lexicon = Lexicon::embedded();
        tracing::info!(words = lexicon.len(), "embedded lexicon loaded");
        Ok(lexicon)
    } else {
        load_from_file(source)
    }
}
