//! TUI rendering with ratatui
//!
//! The board sits on the left; found words, messages and the running score sit
//! on the right.

use super::app::{App, MessageStyle};
use crate::core::{GRID_SIZE, Position};
use crate::game::CubeStatus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = screen_chunks(f.area());

    render_header(f, chunks[0]);

    let main_chunks = main_columns(chunks[1]);
    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_word_so_far(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn screen_chunks(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(14),    // Board and side panels
            Constraint::Length(3),  // Word so far
            Constraint::Length(3),  // Status bar
        ])
        .split(area)
        .to_vec()
}

fn main_columns(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Words and messages
        ])
        .split(area)
        .to_vec()
}

fn board_block() -> Block<'static> {
    Block::default()
        .title(" Board ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

/// Screen rectangle of every cube for a terminal of the given size
#[must_use]
pub fn cell_rects(frame: Rect) -> Vec<(Position, Rect)> {
    let board_area = main_columns(screen_chunks(frame)[1])[0];
    let inner = board_block().inner(board_area);

    let quarters = [Constraint::Ratio(1, GRID_SIZE as u32); GRID_SIZE];
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(quarters)
        .split(inner);

    let mut cells = Vec::with_capacity(GRID_SIZE * GRID_SIZE);
    for (row, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(quarters)
            .split(*row_area);
        for (col, cell_area) in cols.iter().enumerate() {
            if let Ok(pos) = Position::new(row, col) {
                cells.push((pos, *cell_area));
            }
        }
    }
    cells
}

/// The cube under a terminal coordinate, if any
#[must_use]
pub fn cell_at(frame: Rect, column: u16, row: u16) -> Option<Position> {
    cell_rects(frame).into_iter().find_map(|(pos, rect)| {
        let inside = column >= rect.x
            && column < rect.x + rect.width
            && row >= rect.y
            && row < rect.y + rect.height;
        inside.then_some(pos)
    })
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎲 BOGGLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn status_colors(status: CubeStatus) -> (Color, Color) {
    match status {
        CubeStatus::MostRecentlySelected => (Color::LightGreen, Color::Green),
        CubeStatus::Selected => (Color::LightBlue, Color::Blue),
        CubeStatus::Unselected => (Color::White, Color::DarkGray),
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    f.render_widget(board_block(), area);

    for (pos, rect) in cell_rects(f.area()) {
        let status = app.session.status_at(pos);
        let (fg, border) = status_colors(status);
        let is_cursor = pos == app.cursor && app.missed.is_none();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if is_cursor {
                BorderType::Double
            } else {
                BorderType::Plain
            })
            .border_style(Style::default().fg(if is_cursor { Color::Yellow } else { border }));

        // Centre the letter vertically inside the cell
        let inner_height = rect.height.saturating_sub(2);
        let mut lines = vec![Line::from(""); usize::from(inner_height / 2)];
        lines.push(Line::from(Span::styled(
            app.session.board().cube_at(pos).to_string(),
            Style::default().fg(fg).add_modifier(Modifier::BOLD),
        )));

        let cell = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(cell, rect);
    }
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(60), // Found or missed words
            Constraint::Percentage(40), // Messages
        ])
        .split(area);

    render_words(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_words(f: &mut Frame, app: &App, area: Rect) {
    let completed = app.session.completed_words();
    let mut items: Vec<ListItem> = completed
        .iter()
        .rev()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<12}", entry.word),
                    Style::default().fg(Color::Green),
                ),
                Span::styled(
                    format!("+{}", entry.points),
                    Style::default().fg(Color::Cyan),
                ),
            ]))
        })
        .collect();

    let title = if let Some(missed) = &app.missed {
        items.push(ListItem::new(""));
        items.push(ListItem::new(format!("Missed ({})", missed.len())).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        items.extend(missed.iter().map(|found| {
            ListItem::new(found.word.clone()).style(Style::default().fg(Color::DarkGray))
        }));
        " Round Over "
    } else {
        " Completed Words "
    };

    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(list, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_word_so_far(f: &mut Frame, app: &App, area: Rect) {
    let word = app.session.word_so_far();
    let input = Paragraph::new(word)
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Word So Far | select the last cube again to submit ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(30),
            Constraint::Percentage(50),
        ])
        .split(area);

    let score_text = format!(
        "Score: {} | Words: {}",
        app.session.score(),
        app.session.completed_words().len()
    );
    f.render_widget(
        Paragraph::new(score_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats_text = format!(
        "Boards: {} | Best: {} | Total: {}",
        app.stats.boards_played, app.stats.best_score, app.stats.total_score
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = if app.missed.is_some() {
        "q: Quit | n: New Board"
    } else {
        "←↑↓→ Move | Space: Select | Click | Esc: Clear | ⌫: Undo | h: Hint | e: End | n: New | q: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_rects_cover_sixteen_disjoint_cells() {
        let frame = Rect::new(0, 0, 100, 30);
        let cells = cell_rects(frame);
        assert_eq!(cells.len(), 16);
        for (pos, rect) in &cells {
            assert!(rect.width > 0 && rect.height > 0, "{pos} is empty");
        }
        for (i, (_, a)) in cells.iter().enumerate() {
            for (_, b) in &cells[i + 1..] {
                assert!(!a.intersects(*b));
            }
        }
    }

    #[test]
    fn cell_at_maps_clicks_to_positions() {
        let frame = Rect::new(0, 0, 100, 30);
        for (pos, rect) in cell_rects(frame) {
            assert_eq!(cell_at(frame, rect.x, rect.y), Some(pos));
        }
        assert_eq!(cell_at(frame, 0, 0), None);
        assert_eq!(cell_at(frame, 99, 29), None);
    }
}
