//! # learn-dash
//!
//! A terminal learning-platform dashboard backed entirely by in-memory
//! mock data: summary stat tiles, course cards, a multi-question quiz
//! flow, and a video-lesson player shell.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use learn_dash::{AppError, Dashboard};
//!
//! fn main() -> Result<(), AppError> {
//!     // Built-in mock content; optionally swap the quiz in from a file.
//!     let dashboard = Dashboard::new();
//!
//!     // Run the dashboard in the terminal.
//!     dashboard.run()
//! }
//! ```

mod app;
mod data;
mod models;
mod player;
mod session;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

pub use app::{App, AttemptRecord, Screen};
pub use data::{LoadError, load_quiz_from_json, sample_dashboard};
pub use models::{
    ActivityItem, Course, DashboardData, Deadline, Lesson, Level, Question, Quiz, StatTile,
    Urgency,
};
pub use player::PlayerState;
pub use session::{
    PASSING_PERCENT, QuizSession, Score, SessionError, SessionState, format_clock,
};

/// Error type for dashboard operations.
#[derive(Debug)]
pub enum AppError {
    /// Error loading a quiz file.
    Load(LoadError),
    /// IO error while driving the terminal.
    Io(io::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Load(e) => write!(f, "Failed to load quiz: {}", e),
            AppError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Load(e) => Some(e),
            AppError::Io(e) => Some(e),
        }
    }
}

impl From<LoadError> for AppError {
    fn from(err: LoadError) -> Self {
        AppError::Load(err)
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Io(err)
    }
}

/// A dashboard instance that can be run in the terminal.
pub struct Dashboard {
    app: App,
}

impl Dashboard {
    /// Create a dashboard over the built-in mock content.
    pub fn new() -> Self {
        Self {
            app: App::new(data::sample_dashboard()),
        }
    }

    /// Create a dashboard whose quiz is loaded from a JSON file; the rest
    /// of the content stays the built-in mock data.
    pub fn with_quiz_file<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let mut content = data::sample_dashboard();
        content.quiz = data::load_quiz_from_json(path)?;
        Ok(Self {
            app: App::new(content),
        })
    }

    /// Run the dashboard in the terminal.
    ///
    /// This takes over the terminal, displays the UI, and returns when the
    /// user quits.
    pub fn run(mut self) -> Result<(), AppError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), AppError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        KeyCode::Char('1') => {
            app.switch_to(Screen::Dashboard);
            return false;
        }
        KeyCode::Char('2') => {
            app.switch_to(Screen::Quiz);
            return false;
        }
        KeyCode::Char('3') => {
            app.switch_to(Screen::Lesson);
            return false;
        }
        KeyCode::Tab => {
            app.next_screen();
            return false;
        }
        _ => {}
    }

    match app.screen {
        Screen::Dashboard => handle_dashboard_input(app, key),
        Screen::Quiz => handle_quiz_input(app, key),
        Screen::Lesson => handle_lesson_input(app, key),
    }

    false
}

fn handle_dashboard_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_dashboard_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_dashboard_up(),
        _ => {}
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) {
    match app.session().state() {
        SessionState::NotStarted => {
            if matches!(key, KeyCode::Enter | KeyCode::Char('s')) {
                app.start_quiz();
            }
        }
        SessionState::InProgress => match key {
            KeyCode::Up | KeyCode::Char('k') => app.cursor_up(),
            KeyCode::Down | KeyCode::Char('j') => app.cursor_down(),
            KeyCode::Enter | KeyCode::Char(' ') => app.confirm_answer(),
            KeyCode::Right | KeyCode::Char('n') => app.next_question(),
            KeyCode::Left | KeyCode::Char('p') => app.previous_question(),
            _ => {}
        },
        SessionState::Completed => match key {
            KeyCode::Down | KeyCode::Char('j') => app.scroll_results_down(),
            KeyCode::Up | KeyCode::Char('k') => app.scroll_results_up(),
            KeyCode::Char('r') | KeyCode::Char('R') => app.restart_quiz(),
            _ => {}
        },
    }
}

fn handle_lesson_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char(' ') => app.player_mut().toggle_play(),
        KeyCode::Char('m') => app.player_mut().toggle_mute(),
        KeyCode::Left | KeyCode::Char('h') => app.player_mut().skip_backward(),
        KeyCode::Right | KeyCode::Char('l') => app.player_mut().skip_forward(),
        KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('=') => app.player_mut().volume_up(),
        KeyCode::Down | KeyCode::Char('-') => app.player_mut().volume_down(),
        _ => {}
    }
}
