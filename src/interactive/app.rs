//! TUI application state and logic

use crate::game::{AnswerMode, GameConfig, GameError, GameSession, pick_answer};
use crate::roster::Roster;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::collections::BTreeMap;
use std::io;

/// Suggestions shown under the input box
pub const SUGGESTION_LIMIT: usize = 8;

const MESSAGE_LIMIT: usize = 5;

/// Application state
pub struct App<'r> {
    pub roster: &'r Roster,
    pub config: GameConfig,
    pub mode: AnswerMode,
    pub session: GameSession<'r>,
    pub input_buffer: String,
    /// Highlighted entry in the suggestion list
    pub selected: Option<usize>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    RoundOver,
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

/// Results across the rounds of one run
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Guess count of each won round
    pub guess_distribution: BTreeMap<usize, usize>,
}

impl Statistics {
    pub fn record(&mut self, session: &GameSession) {
        self.total_games += 1;
        if session.is_won() {
            self.games_won += 1;
            *self
                .guess_distribution
                .entry(session.guess_count())
                .or_insert(0) += 1;
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<'r> App<'r> {
    /// Start the first round
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoEligibleAnswers`] if `config` filters out every
    /// character.
    pub fn new(roster: &'r Roster, config: GameConfig, mode: AnswerMode) -> Result<Self, GameError> {
        let session = start_session(roster, &config, mode)?;

        let intro = match mode {
            AnswerMode::Daily(date) => format!("Daily character for {}", date.format("%Y-%m-%d")),
            AnswerMode::FreePlay => "Free play: a random character has been chosen".to_string(),
        };

        Ok(Self {
            roster,
            config,
            mode,
            session,
            input_buffer: String::new(),
            selected: None,
            messages: vec![
                Message {
                    text: intro,
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type a name; Up/Down picks a suggestion, Enter guesses".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        })
    }

    /// Autocomplete for the current input
    #[must_use]
    pub fn suggestions(&self) -> Vec<&'r str> {
        self.session.suggestions(&self.input_buffer, SUGGESTION_LIMIT)
    }

    /// Name that Enter would submit
    ///
    /// A highlighted suggestion wins; otherwise the typed text, falling back to
    /// the first suggestion when the text is not itself a character name.
    #[must_use]
    pub fn pending_guess(&self) -> Option<String> {
        let suggestions = self.suggestions();

        if let Some(index) = self.selected
            && let Some(name) = suggestions.get(index)
        {
            return Some((*name).to_string());
        }

        let typed = self.input_buffer.trim();
        if typed.is_empty() {
            return None;
        }
        if self.roster.resolve(typed).is_some() {
            return Some(typed.to_string());
        }
        Some(suggestions.first().copied().unwrap_or(typed).to_string())
    }

    pub fn submit_guess(&mut self) {
        let Some(guess) = self.pending_guess() else {
            self.add_message(&GameError::EmptyGuess.to_string(), MessageStyle::Error);
            return;
        };

        match self.session.guess(&guess) {
            Ok(entry) => {
                let name = entry.name().to_string();
                self.input_buffer.clear();
                self.selected = None;

                if self.session.is_finished() {
                    self.finish_round();
                } else {
                    self.add_message(&format!("{name} is not the answer"), MessageStyle::Info);
                }
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn give_up(&mut self) {
        if self.session.give_up() {
            self.finish_round();
        }
    }

    fn finish_round(&mut self) {
        self.stats.record(&self.session);
        self.input_mode = InputMode::RoundOver;
        self.input_buffer.clear();
        self.selected = None;

        let answer = self.session.answer().name().to_string();
        if self.session.is_won() {
            let count = self.session.guess_count();
            let celebration = match count {
                1 => "🎯 First try! Extraordinary! 🌟".to_string(),
                2..=3 => format!("🔥 {answer} in {count} guesses! 🔥"),
                _ => format!("🎉 Found {answer} in {count} guesses! 🎉"),
            };
            self.add_message(&celebration, MessageStyle::Success);
        } else {
            self.add_message(&format!("The answer was {answer}"), MessageStyle::Error);
        }
        self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
    }

    /// Start a free-play round
    pub fn new_game(&mut self) {
        match start_session(self.roster, &self.config, AnswerMode::FreePlay) {
            Ok(session) => {
                self.session = session;
                self.mode = AnswerMode::FreePlay;
                self.input_mode = InputMode::Guessing;
                self.input_buffer.clear();
                self.selected = None;
                self.messages.clear();
                self.add_message(
                    "New game started! A random character has been chosen.",
                    MessageStyle::Info,
                );
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn select_next(&mut self) {
        let count = self.suggestions().len();
        if count == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(index) => (index + 1) % count,
            None => 0,
        });
    }

    pub fn select_previous(&mut self) {
        let count = self.suggestions().len();
        if count == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(0) | None => count - 1,
            Some(index) => index - 1,
        });
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MESSAGE_LIMIT {
            self.messages.remove(0);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::RoundOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Char('g') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.give_up();
                }
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => {
                    self.input_buffer.push(c);
                    self.selected = None;
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                    self.selected = None;
                }
                KeyCode::Down | KeyCode::Tab => self.select_next(),
                KeyCode::Up | KeyCode::BackTab => self.select_previous(),
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
        }
    }
}

fn start_session<'r>(
    roster: &'r Roster,
    config: &GameConfig,
    mode: AnswerMode,
) -> Result<GameSession<'r>, GameError> {
    let answer = pick_answer(roster, config, mode, &mut rand::rng())?;
    GameSession::new(roster, answer)
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

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
