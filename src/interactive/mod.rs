//! Interactive terminal client
//!
//! Cubes are picked with the arrow keys or the mouse; picking the last cube
//! again submits the word.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, Statistics, run_tui};
pub use rendering::{cell_at, cell_rects, ui};
