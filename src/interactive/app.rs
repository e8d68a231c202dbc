//! TUI application state and logic

use crate::commands::analyze_root;
use crate::dictionary::WordListDictionary;
use crate::session::{GameSession, Outcome};
use crate::validation::Validator;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Application state
pub struct App<'a> {
    pub validator: Validator<'a, WordListDictionary>,
    pub word_list: &'a [String],
    pub rng: StdRng,
    pub session: GameSession,
    /// Score for every distinct dictionary word once; case-variant resubmissions
    /// of raw text can exceed it
    pub max_score: Option<usize>,
    pub input_buffer: String,
    pub notice: Option<Notice>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    Notice,
}

/// A dismissable notice explaining a rejection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
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
    pub sessions_played: usize,
    pub best_score: usize,
    pub words_accepted: usize,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(
        validator: Validator<'a, WordListDictionary>,
        word_list: &'a [String],
        mut rng: StdRng,
    ) -> Self {
        let session = GameSession::start(word_list, &mut rng);

        let mut app = Self {
            validator,
            word_list,
            rng,
            session,
            max_score: None,
            input_buffer: String::new(),
            notice: None,
            messages: vec![Message {
                text: "Make words from the letters of the root word.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics {
                sessions_played: 1,
                ..Statistics::default()
            },
            should_quit: false,
        };
        app.max_score = app.compute_max_score();
        app
    }

    #[must_use]
    pub const fn input_mode(&self) -> InputMode {
        if self.notice.is_some() {
            InputMode::Notice
        } else {
            InputMode::Typing
        }
    }

    fn compute_max_score(&self) -> Option<usize> {
        analyze_root(
            self.session.root_word().text(),
            self.validator.dictionary(),
            self.validator.language(),
        )
        .ok()
        .map(|analysis| analysis.max_score)
    }

    /// Submit whatever is in the input field
    pub fn submit(&mut self) {
        let input = self.input_buffer.clone();

        match self.session.submit_word(&input, &self.validator) {
            Outcome::Ignored => {}
            Outcome::Accepted { word, points } => {
                self.stats.words_accepted += 1;
                self.stats.best_score = self.stats.best_score.max(self.session.score());
                self.input_buffer.clear();
                self.add_message(
                    &format!("+{points} {}", word.trim()),
                    MessageStyle::Success,
                );
            }
            Outcome::Rejected(reason) => {
                debug!(?reason, "Showing rejection notice");
                self.add_message(
                    &format!("{}: {}", reason.title(), input.trim()),
                    MessageStyle::Error,
                );
                self.notice = Some(Notice {
                    title: reason.title().to_string(),
                    message: reason.message().to_string(),
                });
            }
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn new_game(&mut self) {
        let finished = self.session.score();
        self.session.restart(self.word_list, &mut self.rng);
        self.max_score = self.compute_max_score();
        self.stats.sessions_played += 1;
        self.input_buffer.clear();
        self.notice = None;
        self.messages.clear();
        self.add_message(
            &format!("New game started! Last score: {finished}"),
            MessageStyle::Info,
        );
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

    // Run app
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

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

            match app.input_mode() {
                InputMode::Notice => match key.code {
                    KeyCode::Char('c') if ctrl => app.should_quit = true,
                    KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => app.dismiss_notice(),
                    _ => {}
                },
                InputMode::Typing => match key.code {
                    KeyCode::Char('c') if ctrl => app.should_quit = true,
                    KeyCode::Char('n') if ctrl => app.new_game(),
                    KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char(c) => app.input_buffer.push(c),
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => app.submit(),
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
