//! TUI application state and logic

use crate::core::{Dealer, Position};
use crate::game::{SelectionOutcome, Session};
use crate::solver::FoundWord;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;

/// Application state
pub struct App<'a> {
    pub session: Session<'a>,
    pub dealer: Dealer,
    pub cursor: Position,
    pub messages: Vec<Message>,
    pub missed: Option<Vec<FoundWord>>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub boards_played: usize,
    pub total_score: u32,
    pub best_score: u32,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(session: Session<'a>, dealer: Dealer) -> Self {
        Self {
            session,
            dealer,
            cursor: Position::default(),
            messages: vec![
                Message {
                    text: "Welcome! Trace words through touching cubes.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Select the last cube again to submit the word.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            missed: None,
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Select a cell and report the outcome
    pub fn select(&mut self, pos: Position) {
        if self.missed.is_some() {
            self.add_message("Round over. Press 'n' for a new board.", MessageStyle::Info);
            return;
        }
        self.cursor = pos;
        match self.session.select(pos) {
            SelectionOutcome::Started { .. } | SelectionOutcome::Extended { .. } => {}
            SelectionOutcome::NotAdjacent => {
                self.add_message("That cube doesn't touch the last one", MessageStyle::Error);
            }
            SelectionOutcome::AlreadyUsed => {
                self.add_message("That cube is already in the word", MessageStyle::Error);
            }
            SelectionOutcome::Accepted { word, points } => {
                self.add_message(&format!("{word} +{points}"), MessageStyle::Success);
            }
            SelectionOutcome::Rejected { reason, .. } => {
                self.add_message(&reason.to_string(), MessageStyle::Error);
            }
        }
    }

    pub fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        if let Some(next) = self.cursor.offset(d_row, d_col) {
            self.cursor = next;
        }
    }

    pub fn reset_word(&mut self) {
        self.session.reset_word();
    }

    pub fn undo(&mut self) {
        if self.session.undo().is_none() {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
    }

    /// Finish the round and reveal the words that were missed
    pub fn end_round(&mut self) {
        if self.missed.is_some() {
            return;
        }
        self.session.reset_word();
        let missed = self.session.missed_words();
        self.record_round();
        self.add_message(
            &format!(
                "Round over: {} points, {} words missed",
                self.session.score(),
                missed.len()
            ),
            MessageStyle::Info,
        );
        self.missed = Some(missed);
    }

    pub fn new_board(&mut self) {
        if self.missed.is_none() {
            self.record_round();
        }
        let board = self.dealer.deal();
        self.session.new_board(board);
        self.missed = None;
        self.messages.clear();
        self.add_message("New board! Good luck.", MessageStyle::Info);
    }

    fn record_round(&mut self) {
        let score = self.session.score();
        if score == 0 && self.session.completed_words().is_empty() {
            return;
        }
        self.stats.boards_played += 1;
        self.stats.total_score += score;
        self.stats.best_score = self.stats.best_score.max(score);
    }

    pub fn hint(&mut self) {
        match self.session.hint() {
            Some(found) if !found.path.is_empty() => {
                let start = found.path[0];
                self.cursor = start;
                self.add_message(
                    &format!(
                        "Try a {}-letter word starting at {start}",
                        found.word.len()
                    ),
                    MessageStyle::Info,
                );
            }
            _ => self.add_message("No words left to find!", MessageStyle::Info),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('n') => self.new_board(),
            KeyCode::Char('e') => self.end_round(),
            KeyCode::Char('h') => self.hint(),
            KeyCode::Up => self.move_cursor(-1, 0),
            KeyCode::Down => self.move_cursor(1, 0),
            KeyCode::Left => self.move_cursor(0, -1),
            KeyCode::Right => self.move_cursor(0, 1),
            KeyCode::Char(' ') | KeyCode::Enter => self.select(self.cursor),
            KeyCode::Esc => self.reset_word(),
            KeyCode::Backspace => self.undo(),
            _ => {}
        }
    }

    /// Apply a mouse event; `frame` is the full terminal area
    pub fn handle_mouse(&mut self, mouse: MouseEvent, frame: Rect) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind
            && let Some(pos) = super::rendering::cell_at(frame, mouse.column, mouse.row)
        {
            self.select(pos);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, &mut app, event::read);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

/// Draw and dispatch events until the player quits or `next_event` fails
fn run_app<B, E>(terminal: &mut Terminal<B>, app: &mut App, mut next_event: E) -> Result<()>
where
    B: ratatui::backend::Backend,
    E: FnMut() -> io::Result<Event>,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, app))?;

        match next_event()? {
            // Only process key press events (fixes Windows double-input bug)
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                app.handle_mouse(mouse, Rect::new(0, 0, size.width, size.height));
            }
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;
    use crate::lexicon::Lexicon;
    use ratatui::backend::TestBackend;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn new_app(lexicon: &Lexicon) -> App<'_> {
        let mut dealer = Dealer::predictable();
        let session = Session::new(dealer.deal(), lexicon, GameConfig::default());
        App::new(session, dealer)
    }

    #[test]
    fn keyboard_traces_and_submits_a_word() {
        let lexicon = Lexicon::from_words(["PUT"]);
        let mut app = new_app(&lexicon);

        // cursor starts at a1; P is at c1, U at d1, T at c2
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Char(' ')));
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Left));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.session.word_so_far(), "PUT");

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.session.score(), 1);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Success);
    }

    #[test]
    fn cursor_stays_on_grid() {
        let lexicon = Lexicon::default();
        let mut app = new_app(&lexicon);
        app.handle_key(key(KeyCode::Up));
        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.cursor, pos(0, 0));
        for _ in 0..10 {
            app.handle_key(key(KeyCode::Down));
        }
        assert_eq!(app.cursor, pos(3, 0));
    }

    #[test]
    fn escape_and_backspace_edit_the_selection() {
        let lexicon = Lexicon::default();
        let mut app = new_app(&lexicon);
        app.select(pos(1, 1));
        app.select(pos(1, 2));
        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.session.word_so_far(), "I");
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.session.word_so_far(), "");
        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn end_round_reveals_missed_words_and_blocks_play() {
        let lexicon = Lexicon::from_words(["PUT", "SPIT"]);
        let mut app = new_app(&lexicon);
        app.session.play_word("PUT");

        app.handle_key(key(KeyCode::Char('e')));
        let missed: Vec<&str> = app
            .missed
            .as_ref()
            .unwrap()
            .iter()
            .map(|f| f.word.as_str())
            .collect();
        assert_eq!(missed, ["SPIT"]);
        assert_eq!(app.stats.boards_played, 1);

        app.select(pos(0, 0));
        assert!(app.session.selected_path().is_empty());

        app.handle_key(key(KeyCode::Char('n')));
        assert!(app.missed.is_none());
        assert_eq!(app.stats.boards_played, 1);
        assert_eq!(app.session.score(), 0);
    }

    #[test]
    fn quit_keys() {
        let lexicon = Lexicon::default();
        let mut app = new_app(&lexicon);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);

        let mut app = new_app(&lexicon);
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn event_loop_plays_until_quit() {
        let lexicon = Lexicon::from_words(["PUT"]);
        let mut app = new_app(&lexicon);
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let mut events = [
            KeyCode::Right,
            KeyCode::Right,
            KeyCode::Enter,
            KeyCode::Right,
            KeyCode::Enter,
            KeyCode::Down,
            KeyCode::Left,
            KeyCode::Enter,
            KeyCode::Enter,
            KeyCode::Char('q'),
        ]
        .into_iter()
        .map(|code| Event::Key(key(code)));

        run_app(&mut terminal, &mut app, || {
            events
                .next()
                .ok_or_else(|| io::Error::other("out of events"))
        })
        .unwrap();
        assert!(app.should_quit);
        assert_eq!(app.session.score(), 1);
    }

    #[test]
    fn event_loop_returns_read_errors() {
        let lexicon = Lexicon::default();
        let mut app = new_app(&lexicon);
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        let err = run_app(&mut terminal, &mut app, || {
            Err(io::Error::other("terminal went away"))
        })
        .unwrap_err();
        assert!(err.to_string().contains("terminal went away"));
        assert!(!app.should_quit);
    }

    #[test]
    fn mouse_click_selects_cell() {
        let lexicon = Lexicon::default();
        let mut app = new_app(&lexicon);
        let frame = Rect::new(0, 0, 100, 30);
        let target = pos(2, 1);
        let cell = super::super::rendering::cell_rects(frame)
            .into_iter()
            .find(|(p, _)| *p == target)
            .map(|(_, rect)| rect)
            .unwrap();

        app.handle_mouse(
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: cell.x + cell.width / 2,
                row: cell.y + cell.height / 2,
                modifiers: KeyModifiers::NONE,
            },
            frame,
        );
        assert_eq!(app.session.selected_path(), &[target]);
    }
}
