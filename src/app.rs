//! Application state.
//!
//! `App` routes between the three screens and layers UI concerns (option
//! cursor, scroll offsets) on top of the session and player state
//! machines. Rejected session operations are deliberately discarded here:
//! the machines leave themselves unchanged and the next frame simply
//! re-renders the current state.

use uuid::Uuid;

use crate::models::{ActivityItem, DashboardData};
use crate::player::PlayerState;
use crate::session::{QuizSession, Score};

/// The active tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Quiz,
    Lesson,
}

impl Screen {
    pub fn next(self) -> Self {
        match self {
            Screen::Dashboard => Screen::Quiz,
            Screen::Quiz => Screen::Lesson,
            Screen::Lesson => Screen::Dashboard,
        }
    }
}

/// One finished quiz attempt, kept for the activity feed.
pub struct AttemptRecord {
    pub id: Uuid,
    pub quiz_title: String,
    pub score: Score,
}

pub struct App {
    pub screen: Screen,
    data: DashboardData,
    session: QuizSession,
    player: PlayerState,
    option_cursor: usize,
    dashboard_scroll: usize,
    results_scroll: usize,
    attempts: Vec<AttemptRecord>,
}

impl App {
    pub fn new(data: DashboardData) -> Self {
        let session = QuizSession::new(data.quiz.clone());
        let player = PlayerState::new(data.lesson.clone());
        Self {
            screen: Screen::Dashboard,
            data,
            session,
            player,
            option_cursor: 0,
            dashboard_scroll: 0,
            results_scroll: 0,
            attempts: Vec::new(),
        }
    }

    pub fn data(&self) -> &DashboardData {
        &self.data
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut PlayerState {
        &mut self.player
    }

    pub fn attempts(&self) -> &[AttemptRecord] {
        &self.attempts
    }

    /// Highlighted option on the quiz screen, distinct from the recorded
    /// answer until the user confirms.
    pub fn option_cursor(&self) -> usize {
        self.option_cursor
    }

    pub fn dashboard_scroll(&self) -> usize {
        self.dashboard_scroll
    }

    pub fn results_scroll(&self) -> usize {
        self.results_scroll
    }

    pub fn switch_to(&mut self, screen: Screen) {
        self.screen = screen;
    }

    pub fn next_screen(&mut self) {
        self.screen = self.screen.next();
    }

    pub fn start_quiz(&mut self) {
        if self.session.start().is_ok() {
            self.option_cursor = 0;
        }
    }

    pub fn cursor_down(&mut self) {
        if let Some(question) = self.session.current_question() {
            self.option_cursor = (self.option_cursor + 1) % question.options.len();
        }
    }

    pub fn cursor_up(&mut self) {
        if let Some(question) = self.session.current_question() {
            let count = question.options.len();
            self.option_cursor = (self.option_cursor + count - 1) % count;
        }
    }

    /// Record the highlighted option as the answer for the current
    /// question. Does not advance.
    pub fn confirm_answer(&mut self) {
        let _ = self.session.select_answer(self.option_cursor);
    }

    pub fn next_question(&mut self) {
        if self.session.next().is_err() {
            return;
        }
        if self.session.score().is_ok() {
            self.results_scroll = 0;
            self.record_attempt();
        } else {
            self.sync_cursor();
        }
    }

    pub fn previous_question(&mut self) {
        if self.session.previous().is_ok() {
            self.sync_cursor();
        }
    }

    pub fn restart_quiz(&mut self) {
        self.session.restart();
        self.option_cursor = 0;
        self.results_scroll = 0;
    }

    /// Land the cursor on the answer already recorded for the question the
    /// session moved to, so revisiting shows the earlier choice.
    fn sync_cursor(&mut self) {
        self.option_cursor = self.session.current_answer().unwrap_or(0);
    }

    fn record_attempt(&mut self) {
        let Ok(score) = self.session.score() else {
            return;
        };
        let quiz_title = self.session.quiz().title.clone();
        self.data.activity.insert(
            0,
            ActivityItem {
                text: format!("Scored {}% on {}", score.percentage, quiz_title),
                when: "Just now".to_string(),
            },
        );
        self.attempts.push(AttemptRecord {
            id: Uuid::new_v4(),
            quiz_title,
            score,
        });
    }

    pub fn scroll_dashboard_down(&mut self) {
        self.dashboard_scroll = self.dashboard_scroll.saturating_add(1);
    }

    pub fn scroll_dashboard_up(&mut self) {
        self.dashboard_scroll = self.dashboard_scroll.saturating_sub(1);
    }

    pub fn scroll_results_down(&mut self) {
        self.results_scroll = self.results_scroll.saturating_add(1);
    }

    pub fn scroll_results_up(&mut self) {
        self.results_scroll = self.results_scroll.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_dashboard;
    use crate::session::SessionState;

    fn completed_app() -> App {
        let mut app = App::new(sample_dashboard());
        app.start_quiz();
        while app.session().state() == SessionState::InProgress {
            let correct = app.session().current_question().unwrap().correct_answer;
            for _ in 0..correct {
                app.cursor_down();
            }
            app.confirm_answer();
            app.next_question();
        }
        app
    }

    #[test]
    fn completing_a_quiz_records_an_attempt_and_activity_entry() {
        let app = completed_app();
        assert_eq!(app.attempts().len(), 1);
        let attempt = &app.attempts()[0];
        assert_eq!(attempt.score.percentage, 100);
        assert_eq!(attempt.quiz_title, app.data().quiz.title);
        assert!(app.data().activity[0].text.starts_with("Scored 100%"));
        assert_eq!(app.data().activity[0].when, "Just now");
    }

    #[test]
    fn restart_clears_ui_state_but_keeps_history() {
        let mut app = completed_app();
        app.scroll_results_down();
        app.restart_quiz();
        assert_eq!(app.session().state(), SessionState::NotStarted);
        assert_eq!(app.option_cursor(), 0);
        assert_eq!(app.results_scroll(), 0);
        assert_eq!(app.attempts().len(), 1);
    }

    #[test]
    fn cursor_wraps_within_the_current_question() {
        let mut app = App::new(sample_dashboard());
        app.start_quiz();
        let count = app.session().current_question().unwrap().options.len();
        app.cursor_up();
        assert_eq!(app.option_cursor(), count - 1);
        app.cursor_down();
        assert_eq!(app.option_cursor(), 0);
    }

    #[test]
    fn revisiting_a_question_restores_the_recorded_answer() {
        let mut app = App::new(sample_dashboard());
        app.start_quiz();
        app.cursor_down();
        app.confirm_answer();
        app.next_question();
        assert_eq!(app.option_cursor(), 0);
        app.previous_question();
        assert_eq!(app.option_cursor(), 1);
    }

    #[test]
    fn tab_cycle_visits_every_screen() {
        let mut app = App::new(sample_dashboard());
        app.next_screen();
        assert_eq!(app.screen, Screen::Quiz);
        app.next_screen();
        assert_eq!(app.screen, Screen::Lesson);
        app.next_screen();
        assert_eq!(app.screen, Screen::Dashboard);
    }
}
