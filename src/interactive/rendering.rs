//! TUI rendering with ratatui
//!
//! Layout: header, ranked results beside session info, input box, status bar.

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::score_bar;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_results(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 RACK SOLVER - Interactive Mode")
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

fn render_results(f: &mut Frame, app: &App, area: Rect) {
    let title = app.last_search.as_ref().map_or_else(
        || " Words ".to_string(),
        |info| format!(" Words from {} ({}) ", info.rack, info.total_matches),
    );
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    if app.results.is_empty() {
        let hint = if app.last_search.is_some() {
            "No words found"
        } else {
            "Type a rack and press Enter"
        };
        let paragraph = Paragraph::new(hint)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let best = app.results.first().map_or(0, |m| m.score());
    let word_width = app.results.iter().map(|m| m.word().len()).max().unwrap_or(0);

    let items: Vec<ListItem> = app
        .results
        .iter()
        .enumerate()
        .skip(app.scroll)
        .map(|(i, m)| {
            let style = if m.score() == best {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>3}. ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(format!("{:<word_width$}", m.word()), style),
                Span::styled(format!(" {:>3} ", m.score()), Style::default().fg(Color::Cyan)),
                Span::styled(score_bar(m.score(), best, 15), Style::default().fg(Color::Green)),
            ]))
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30), // Last search
            Constraint::Percentage(30), // Last lookup
            Constraint::Percentage(40), // Messages
        ])
        .split(area);

    render_search_info(f, app, chunks[0]);
    render_lookup_info(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_search_info(f: &mut Frame, app: &App, area: Rect) {
    let content = match &app.last_search {
        Some(info) => vec![
            Line::from(vec![
                Span::raw("Rack:  "),
                Span::styled(
                    info.rack.clone(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(format!("Words: {}", info.total_matches)),
            Line::from(format!("Nodes: {}", info.nodes)),
            Line::from(format!(
                "Time:  {:.2}ms",
                info.duration.as_secs_f64() * 1000.0
            )),
        ],
        None => vec![Line::from("No rack solved yet")],
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Last Search ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_lookup_info(f: &mut Frame, app: &App, area: Rect) {
    let content = match &app.last_lookup {
        Some(info) => match &info.found {
            Some(m) => vec![
                Line::from(Span::styled(
                    format!("✔ {}", m.word()),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(format!("Score: {}", m.score())),
            ],
            None => vec![Line::from(Span::styled(
                format!("✘ {} not in dictionary", info.word),
                Style::default().fg(Color::Red),
            ))],
        },
        None => vec![Line::from("TAB to look up a word")],
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Lookup ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::Rack => (
            format!(" Rack (up to {} letters) | TAB for lookup ", app.input_limit()),
            Color::Yellow,
        ),
        InputMode::Lookup => (
            format!(" Word to look up (up to {} letters) | TAB for rack ", app.input_limit()),
            Color::Cyan,
        ),
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode_text = match app.input_mode {
        InputMode::Rack => "Mode: Solve",
        InputMode::Lookup => "Mode: Lookup",
    };
    f.render_widget(
        Paragraph::new(mode_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats_text = format!(
        "Racks: {} | Lookups: {}/{}",
        app.stats.racks_solved, app.stats.valid_lookups, app.stats.lookups
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let best_text = app.stats.best.as_ref().map_or_else(
        || "Best: -".to_string(),
        |m| format!("Best: {} ({})", m.word(), m.score()),
    );
    f.render_widget(
        Paragraph::new(best_text).alignment(Alignment::Center),
        chunks[2],
    );

    let help = Paragraph::new("Esc: Quit | Enter: Submit | ↑↓: Scroll")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Lexicon;
    use crate::solver::{Solver, SolverConfig};
    use ratatui::{Terminal, backend::TestBackend};

    fn render_to_string(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_ranked_results() {
        let lexicon = Lexicon::from_entries([("CAT", 5), ("AT", 2)], 15);
        let mut app = App::new(Solver::new(&lexicon, SolverConfig::default()));
        for c in "cat".chars() {
            app.push_char(c);
        }
        app.submit();

        let screen = render_to_string(&app);
        assert!(screen.contains("RACK SOLVER"));
        assert!(screen.contains("Words from CAT"));
        assert!(screen.contains("Best: CAT (5)"));
    }

    #[test]
    fn renders_empty_state() {
        let lexicon = Lexicon::default();
        let app = App::new(Solver::new(&lexicon, SolverConfig::default()));

        let screen = render_to_string(&app);
        assert!(screen.contains("Type a rack and press Enter"));
        assert!(screen.contains("Mode: Solve"));
    }
}
