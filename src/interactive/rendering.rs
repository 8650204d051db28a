//! TUI rendering with ratatui
//!
//! Guess table, autocomplete and round status for the game interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Outcome, SetOutcome};
use crate::game::AnswerMode;
use crate::output::formatters::{cell_text, share_text};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, List, ListItem, Paragraph, Row, Table, Wrap},
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

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(72), Constraint::Percentage(28)])
        .split(chunks[1]);

    render_guesses(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = match app.mode {
        AnswerMode::Daily(date) => format!("📖 INNDLE - Daily {}", date.format("%Y-%m-%d")),
        AnswerMode::FreePlay => "📖 INNDLE - Free Play".to_string(),
    };

    let header = Paragraph::new(title)
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

fn outcome_style(outcome: &Outcome) -> Style {
    match outcome {
        Outcome::Portrait(_) => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        Outcome::Set(SetOutcome::PartialMatch) => Style::default().fg(Color::Black).bg(Color::Yellow),
        _ if outcome.is_correct() => Style::default().fg(Color::Black).bg(Color::Green),
        _ => Style::default().fg(Color::White).bg(Color::Red),
    }
}

/// One row per guess, newest on top
fn render_guesses(f: &mut Frame, app: &App, area: Rect) {
    let attributes: Vec<_> = app
        .config
        .visible_attributes(app.roster.schema())
        .collect();

    let header = Row::new(attributes.iter().map(|attribute| {
        Cell::from(attribute.name()).style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    }))
    .height(1)
    .bottom_margin(1);

    let rows: Vec<Row> = app
        .session
        .history()
        .iter()
        .rev()
        .filter_map(|entry| {
            let guess = app.roster.get(entry.name())?;
            let cells = attributes.iter().filter_map(|attribute| {
                let outcome = entry.verdict().get(attribute.name())?;
                Some(Cell::from(cell_text(guess, attribute, outcome)).style(outcome_style(outcome)))
            });
            Some(Row::new(cells.collect::<Vec<_>>()))
        })
        .collect();

    let widths = vec![Constraint::Min(8); attributes.len()];
    let title = format!(" Guesses ({}) ", app.session.guess_count());

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

    f.render_widget(table, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    match app.input_mode {
        InputMode::Guessing => render_suggestions(f, app, chunks[0]),
        InputMode::RoundOver => render_share(f, app, chunks[0]),
    }
    render_messages(f, app, chunks[1]);
}

fn render_suggestions(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .suggestions()
        .into_iter()
        .enumerate()
        .map(|(i, name)| {
            if app.selected == Some(i) {
                ListItem::new(format!("▶ {name}")).style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ListItem::new(format!("  {name}"))
            }
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Suggestions ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(list, area);
}

fn render_share(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![Line::from(vec![
        Span::raw("Answer: "),
        Span::styled(
            app.session.answer().name().to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ])];
    lines.push(Line::from(""));
    lines.extend(
        share_text(&app.session, &app.config)
            .lines()
            .map(|line| Line::from(line.to_string())),
    );

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Result ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

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
    let (title, content, color) = match app.input_mode {
        InputMode::RoundOver => (
            " Round over | Press 'n' for a new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Guess a character | Up/Down to pick a suggestion ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
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
            Constraint::Percentage(20),
            Constraint::Percentage(30),
        ])
        .split(area);

    let mode_text = match app.mode {
        AnswerMode::Daily(_) => "Mode: Daily",
        AnswerMode::FreePlay => "Mode: Free Play",
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let roster_text = format!("Characters: {}", app.roster.len());
    let roster = Paragraph::new(roster_text).alignment(Alignment::Center);
    f.render_widget(roster, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::RoundOver => "q: Quit | n: New Game",
        InputMode::Guessing => "Esc: Quit | Enter: Guess | Ctrl+G: Give Up",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;
    use crate::roster::Roster;
    use chrono::NaiveDate;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(160, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn renders_guess_table() {
        let roster = Roster::embedded().unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 8, 10).unwrap();
        let mut app = App::new(&roster, GameConfig::default(), AnswerMode::Daily(date)).unwrap();
        let guess = if app.session.answer().name() == "Garry" {
            "Pawn"
        } else {
            "Garry"
        };
        app.session.guess(guess).unwrap();

        let screen = draw(&app);
        assert!(screen.contains("INNDLE - Daily 2025-08-10"));
        assert!(screen.contains("Guesses (1)"));
        assert!(screen.contains("Mentions"));
        assert!(screen.contains(guess));
    }

    #[test]
    fn renders_result_after_give_up() {
        let roster = Roster::embedded().unwrap();
        let mut app = App::new(&roster, GameConfig::default(), AnswerMode::FreePlay).unwrap();
        app.give_up();

        let screen = draw(&app);
        assert!(screen.contains("Result"));
        assert!(screen.contains("Inndle: gave up after 0"));
    }

    #[test]
    fn outcome_colours() {
        use crate::core::{BinaryOutcome, ScalarOutcome};

        assert_eq!(
            outcome_style(&Outcome::Binary(BinaryOutcome::Correct)).bg,
            Some(Color::Green)
        );
        assert_eq!(
            outcome_style(&Outcome::Set(SetOutcome::PartialMatch)).bg,
            Some(Color::Yellow)
        );
        assert_eq!(
            outcome_style(&Outcome::Scalar(ScalarOutcome::Higher)).bg,
            Some(Color::Red)
        );
    }
}
