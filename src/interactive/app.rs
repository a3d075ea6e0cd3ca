//! TUI application state and logic

use crate::commands::{SolveConfig, lookup_word, solve_rack};
use crate::core::Match;
use crate::solver::Solver;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// Application state
pub struct App<'a> {
    pub solver: Solver<'a>,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub results: Vec<Match>,
    pub last_search: Option<SearchInfo>,
    pub last_lookup: Option<LookupInfo>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub scroll: usize,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Rack,
    Lookup,
}

#[derive(Debug, Clone)]
pub struct SearchInfo {
    pub rack: String,
    pub total_matches: usize,
    pub nodes: usize,
    pub duration: Duration,
}

#[derive(Debug, Clone)]
pub struct LookupInfo {
    pub word: String,
    pub found: Option<Match>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub racks_solved: usize,
    pub lookups: usize,
    pub valid_lookups: usize,
    pub best: Option<Match>,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(solver: Solver<'a>) -> Self {
        Self {
            solver,
            input_mode: InputMode::Rack,
            input_buffer: String::new(),
            results: Vec::new(),
            last_search: None,
            last_lookup: None,
            messages: vec![
                Message {
                    text: format!(
                        "Loaded {} words. Type up to {} letters and press Enter.",
                        solver.lexicon().len(),
                        solver.config().max_rack_length
                    ),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "TAB switches between rack solving and word lookup".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            scroll: 0,
            should_quit: false,
        }
    }

    /// Longest input accepted in the current mode
    #[must_use]
    pub const fn input_limit(&self) -> usize {
        match self.input_mode {
            InputMode::Rack => self.solver.config().max_rack_length,
            InputMode::Lookup => self.solver.config().max_word_length,
        }
    }

    pub fn push_char(&mut self, c: char) {
        if c.is_ascii_alphabetic() && self.input_buffer.len() < self.input_limit() {
            self.input_buffer.push(c.to_ascii_uppercase());
        }
    }

    pub fn toggle_mode(&mut self) {
        self.input_mode = match self.input_mode {
            InputMode::Rack => InputMode::Lookup,
            InputMode::Lookup => InputMode::Rack,
        };
        self.input_buffer.clear();
    }

    /// Run the query in the input buffer for the current mode
    pub fn submit(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        match self.input_mode {
            InputMode::Rack => self.solve(&input),
            InputMode::Lookup => self.lookup(&input),
        }
    }

    fn solve(&mut self, rack: &str) {
        if rack.is_empty() {
            self.add_message("Enter some letters first", MessageStyle::Error);
            return;
        }

        match solve_rack(SolveConfig::new(rack.to_string()), &self.solver) {
            Ok(result) => {
                self.stats.racks_solved += 1;
                if let Some(top) = result.matches.first()
                    && self
                        .stats
                        .best
                        .as_ref()
                        .is_none_or(|best| top.score() > best.score())
                {
                    self.stats.best = Some(top.clone());
                }

                if result.matches.is_empty() {
                    self.add_message(
                        &format!("No words can be made from {}", result.rack),
                        MessageStyle::Error,
                    );
                } else {
                    self.add_message(
                        &format!("{} words from {}", result.total_matches, result.rack),
                        MessageStyle::Success,
                    );
                }

                self.last_search = Some(SearchInfo {
                    rack: result.rack,
                    total_matches: result.total_matches,
                    nodes: result.nodes,
                    duration: result.duration,
                });
                self.results = result.matches;
                self.scroll = 0;
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn lookup(&mut self, word: &str) {
        match lookup_word(word, &self.solver) {
            Ok(result) => {
                self.stats.lookups += 1;
                if let Some(m) = &result.found {
                    self.stats.valid_lookups += 1;
                    self.add_message(
                        &format!("{} is a valid word worth {}", m.word(), m.score()),
                        MessageStyle::Success,
                    );
                } else {
                    self.add_message(
                        &format!("{} is not a valid word", result.word),
                        MessageStyle::Error,
                    );
                }
                self.last_lookup = Some(LookupInfo {
                    word: result.word,
                    found: result.found,
                });
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn scroll_down(&mut self, lines: usize) {
        let max = self.results.len().saturating_sub(1);
        self.scroll = (self.scroll + lines).min(max);
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
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
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

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

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => app.should_quit = true,
                KeyCode::Tab => app.toggle_mode(),
                KeyCode::Enter => app.submit(),
                KeyCode::Backspace => {
                    app.input_buffer.pop();
                }
                KeyCode::Down => app.scroll_down(1),
                KeyCode::Up => app.scroll_up(1),
                KeyCode::PageDown => app.scroll_down(10),
                KeyCode::PageUp => app.scroll_up(10),
                KeyCode::Char(c) => app.push_char(c),
                _ => {}
            }
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
    use crate::core::Lexicon;
    use crate::solver::SolverConfig;

    fn lexicon() -> Lexicon {
        Lexicon::from_entries([("CAT", 5), ("AT", 2), ("ZEBRA", 16)], 15)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.push_char(c);
        }
    }

    #[test]
    fn submit_rack_fills_results() {
        let lexicon = lexicon();
        let mut app = App::new(Solver::new(&lexicon, SolverConfig::default()));

        type_text(&mut app, "cat");
        app.submit();

        assert!(app.input_buffer.is_empty());
        assert_eq!(app.results, vec![Match::new("CAT", 5), Match::new("AT", 2)]);
        assert_eq!(app.stats.racks_solved, 1);
        assert_eq!(app.stats.best, Some(Match::new("CAT", 5)));
        assert_eq!(app.last_search.as_ref().unwrap().rack, "CAT");
    }

    #[test]
    fn input_ignores_non_letters_and_respects_limit() {
        let lexicon = lexicon();
        let mut app = App::new(Solver::new(&lexicon, SolverConfig::new(3, 15)));

        type_text(&mut app, "c4a t!xyz");
        assert_eq!(app.input_buffer, "CAT");
    }

    #[test]
    fn lookup_mode_records_result() {
        let lexicon = lexicon();
        let mut app = App::new(Solver::new(&lexicon, SolverConfig::default()));

        app.toggle_mode();
        assert_eq!(app.input_mode, InputMode::Lookup);

        type_text(&mut app, "zebra");
        app.submit();
        let info = app.last_lookup.clone().unwrap();
        assert_eq!(info.found, Some(Match::new("ZEBRA", 16)));

        type_text(&mut app, "zzz");
        app.submit();
        assert!(app.last_lookup.as_ref().unwrap().found.is_none());
        assert_eq!(app.stats.lookups, 2);
        assert_eq!(app.stats.valid_lookups, 1);
    }

    #[test]
    fn empty_submit_reports_error() {
        let lexicon = lexicon();
        let mut app = App::new(Solver::new(&lexicon, SolverConfig::default()));

        app.submit();
        assert!(matches!(
            app.messages.last().unwrap().style,
            MessageStyle::Error
        ));
        assert_eq!(app.stats.racks_solved, 0);
    }

    #[test]
    fn scroll_stays_in_bounds() {
        let lexicon = lexicon();
        let mut app = App::new(Solver::new(&lexicon, SolverConfig::default()));

        type_text(&mut app, "cat");
        app.submit();
        app.scroll_down(10);
        assert_eq!(app.scroll, 1);
        app.scroll_up(10);
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn messages_are_capped() {
        let lexicon = lexicon();
        let mut app = App::new(Solver::new(&lexicon, SolverConfig::default()));

        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages.last().unwrap().text, "message 9");
    }
}
