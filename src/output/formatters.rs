//! Formatting utilities for terminal output

use crate::core::{GRID_SIZE, Position};
use crate::game::{CubeStatus, Session};
use colored::{ColoredString, Colorize};

/// Style one cube face according to its selection state
///
/// Most recently selected is green, other selected cubes blue, the rest white.
#[must_use]
pub fn styled_face(face: &str, status: CubeStatus) -> ColoredString {
    let cell = format!("{face:<2}");
    match status {
        CubeStatus::MostRecentlySelected => cell.bright_green().bold(),
        CubeStatus::Selected => cell.bright_blue().bold(),
        CubeStatus::Unselected => cell.white(),
    }
}

/// The board with column letters and row numbers, coloured by selection
#[must_use]
pub fn board_grid(session: &Session) -> String {
    let mut lines = Vec::with_capacity(GRID_SIZE + 1);
    let header: String = (0..GRID_SIZE)
        .map(|col| format!("{:<3}", char::from(b'a' + col as u8)))
        .collect();
    lines.push(format!("    {}", header.trim_end().bright_black()));

    for row in 0..GRID_SIZE {
        let cells: Vec<String> = (0..GRID_SIZE)
            .filter_map(|col| Position::new(row, col).ok())
            .map(|pos| {
                let face = session.board().cube_at(pos).to_string();
                styled_face(&face, session.status_at(pos)).to_string()
            })
            .collect();
        lines.push(format!(
            "{}   {}",
            (row + 1).to_string().bright_black(),
            cells.join(" ")
        ));
    }

    lines.join("\n")
}

/// A path as cell names, e.g. `c1 → d1 → c2`
#[must_use]
pub fn format_path(path: &[Position]) -> String {
    path.iter()
        .map(Position::to_string)
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
