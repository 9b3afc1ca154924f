//! Quiz session state machine.
//!
//! A [`QuizSession`] owns one attempt at a [`Quiz`]. The attempt moves
//! `NotStarted` -> `InProgress` -> `Completed`, and back to `NotStarted`
//! only through [`QuizSession::restart`]. Every operation validates its
//! own preconditions and rejects with a [`SessionError`] instead of
//! trusting the caller to disable unavailable actions.

use std::fmt;

use crate::models::{Question, Quiz};

/// Minimum percentage that counts as a pass.
pub const PASSING_PERCENT: u32 = 70;

/// Which stage of the attempt the session is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    InProgress,
    Completed,
}

/// Internal tagged state. Each variant carries only the fields that are
/// meaningful in that stage, so a score cannot exist before completion
/// and a question cursor cannot exist before the attempt starts.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    NotStarted,
    InProgress {
        current: usize,
        answers: Vec<Option<usize>>,
        remaining_secs: u32,
    },
    Completed {
        answers: Vec<Option<usize>>,
    },
}

/// Rejection conditions. All are local and non-fatal: the session is left
/// unchanged and the caller re-presents the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// The selected option index is outside the current question's range.
    InvalidOptionIndex { option: usize, available: usize },
    /// `next` was invoked before the current question had an answer.
    NoAnswerSelected,
    /// The operation is not permitted in the current state.
    InvalidTransition { operation: &'static str },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::InvalidOptionIndex { option, available } => {
                write!(f, "option {option} is out of range (question has {available} options)")
            }
            SessionError::NoAnswerSelected => {
                write!(f, "the current question has no answer selected")
            }
            SessionError::InvalidTransition { operation } => {
                write!(f, "'{operation}' is not valid in the current session state")
            }
        }
    }
}

impl std::error::Error for SessionError {}

/// Derived pass/fail summary, computed once a session completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
    /// `round(correct / total * 100)`.
    pub percentage: u32,
    /// `round(correct / total * total_points)`.
    pub points: u32,
}

impl Score {
    pub fn passed(&self) -> bool {
        self.percentage >= PASSING_PERCENT
    }
}

/// Mutable runtime progress through one [`Quiz`] attempt.
pub struct QuizSession {
    quiz: Quiz,
    phase: Phase,
}

impl QuizSession {
    pub fn new(quiz: Quiz) -> Self {
        Self {
            quiz,
            phase: Phase::NotStarted,
        }
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn state(&self) -> SessionState {
        match self.phase {
            Phase::NotStarted => SessionState::NotStarted,
            Phase::InProgress { .. } => SessionState::InProgress,
            Phase::Completed { .. } => SessionState::Completed,
        }
    }

    /// Begin the attempt: question 0, no answers, full time on the clock.
    pub fn start(&mut self) -> Result<(), SessionError> {
        if !matches!(self.phase, Phase::NotStarted) {
            return Err(SessionError::InvalidTransition { operation: "start" });
        }
        self.phase = Phase::InProgress {
            current: 0,
            answers: vec![None; self.quiz.question_count()],
            remaining_secs: self.quiz.time_limit * 60,
        };
        Ok(())
    }

    /// Record (or overwrite) the answer for the current question. Does not
    /// advance the cursor.
    pub fn select_answer(&mut self, option: usize) -> Result<(), SessionError> {
        let Phase::InProgress { current, answers, .. } = &mut self.phase else {
            return Err(SessionError::InvalidTransition { operation: "select answer" });
        };
        let Some(question) = self.quiz.questions.get(*current) else {
            return Err(SessionError::InvalidTransition { operation: "select answer" });
        };
        let available = question.options.len();
        if option >= available {
            return Err(SessionError::InvalidOptionIndex { option, available });
        }
        answers[*current] = Some(option);
        Ok(())
    }

    /// Advance to the next question, or complete the attempt when the
    /// current question is the last one. Requires a recorded answer.
    pub fn next(&mut self) -> Result<(), SessionError> {
        let last = self.quiz.question_count().saturating_sub(1);
        let Phase::InProgress { current, answers, .. } = &mut self.phase else {
            return Err(SessionError::InvalidTransition { operation: "next" });
        };
        if answers.get(*current).copied().flatten().is_none() {
            return Err(SessionError::NoAnswerSelected);
        }
        if *current < last {
            *current += 1;
        } else {
            let answers = std::mem::take(answers);
            self.phase = Phase::Completed { answers };
        }
        Ok(())
    }

    /// Step back one question. Rejected at question 0.
    pub fn previous(&mut self) -> Result<(), SessionError> {
        let Phase::InProgress { current, .. } = &mut self.phase else {
            return Err(SessionError::InvalidTransition { operation: "previous" });
        };
        if *current == 0 {
            return Err(SessionError::InvalidTransition { operation: "previous" });
        }
        *current -= 1;
        Ok(())
    }

    /// Clear the attempt from any state. The session becomes observably
    /// identical to a freshly constructed one.
    pub fn restart(&mut self) {
        self.phase = Phase::NotStarted;
    }

    /// Unanswered questions count as incorrect.
    pub fn score(&self) -> Result<Score, SessionError> {
        let Phase::Completed { answers } = &self.phase else {
            return Err(SessionError::InvalidTransition { operation: "score" });
        };
        let correct = answers
            .iter()
            .zip(self.quiz.questions.iter())
            .filter(|(answer, question)| **answer == Some(question.correct_answer))
            .count();
        let total = self.quiz.question_count();
        let ratio = if total > 0 {
            correct as f64 / total as f64
        } else {
            0.0
        };
        Ok(Score {
            correct,
            total,
            percentage: (ratio * 100.0).round() as u32,
            points: (ratio * f64::from(self.quiz.total_points)).round() as u32,
        })
    }

    /// 0-based cursor, present only while in progress.
    pub fn current_index(&self) -> Option<usize> {
        match &self.phase {
            Phase::InProgress { current, .. } => Some(*current),
            _ => None,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current_index().and_then(|i| self.quiz.questions.get(i))
    }

    /// Recorded answer for a question, by index.
    pub fn answer(&self, question: usize) -> Option<usize> {
        match &self.phase {
            Phase::InProgress { answers, .. } | Phase::Completed { answers } => {
                answers.get(question).copied().flatten()
            }
            Phase::NotStarted => None,
        }
    }

    /// Recorded answer for the current question.
    pub fn current_answer(&self) -> Option<usize> {
        self.current_index().and_then(|i| self.answer(i))
    }

    /// `round((current + 1) / count * 100)`, for display only.
    pub fn progress_percent(&self) -> Option<u32> {
        let current = self.current_index()?;
        let count = self.quiz.question_count().max(1);
        Some((((current + 1) as f64 / count as f64) * 100.0).round() as u32)
    }

    /// Remaining time in seconds. The countdown is passive display state:
    /// nothing in the session ticks it down or acts on it reaching zero.
    pub fn remaining_secs(&self) -> Option<u32> {
        match &self.phase {
            Phase::InProgress { remaining_secs, .. } => Some(*remaining_secs),
            _ => None,
        }
    }

    /// Remaining time as `M:SS`.
    pub fn remaining_clock(&self) -> Option<String> {
        self.remaining_secs().map(format_clock)
    }
}

/// Format a second count as `M:SS` with zero-padded seconds.
pub fn format_clock(total_secs: u32) -> String {
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_question_quiz() -> Quiz {
        Quiz {
            title: "Sample".to_string(),
            description: "Two questions".to_string(),
            time_limit: 15,
            total_points: 100,
            questions: vec![
                Question {
                    id: "1".to_string(),
                    prompt: "First question".to_string(),
                    options: vec!["right".to_string(), "wrong".to_string()],
                    correct_answer: 0,
                    explanation: "The first option.".to_string(),
                },
                Question {
                    id: "2".to_string(),
                    prompt: "Second question".to_string(),
                    options: vec!["wrong".to_string(), "right".to_string(), "also wrong".to_string()],
                    correct_answer: 1,
                    explanation: "The second option.".to_string(),
                },
            ],
        }
    }

    fn started(quiz: Quiz) -> QuizSession {
        let mut session = QuizSession::new(quiz);
        session.start().unwrap();
        session
    }

    #[test]
    fn starts_at_question_zero_with_full_clock() {
        let session = started(two_question_quiz());
        assert_eq!(session.state(), SessionState::InProgress);
        assert_eq!(session.current_index(), Some(0));
        assert_eq!(session.current_answer(), None);
        assert_eq!(session.remaining_secs(), Some(15 * 60));
    }

    #[test]
    fn start_is_rejected_once_in_progress() {
        let mut session = started(two_question_quiz());
        assert_eq!(
            session.start(),
            Err(SessionError::InvalidTransition { operation: "start" })
        );
    }

    #[test]
    fn operations_are_rejected_before_start() {
        let mut session = QuizSession::new(two_question_quiz());
        assert!(matches!(
            session.select_answer(0),
            Err(SessionError::InvalidTransition { .. })
        ));
        assert!(matches!(session.next(), Err(SessionError::InvalidTransition { .. })));
        assert!(matches!(session.score(), Err(SessionError::InvalidTransition { .. })));
    }

    #[test]
    fn all_correct_scores_full_points() {
        // Scenario A: both answers correct.
        let mut session = started(two_question_quiz());
        session.select_answer(0).unwrap();
        session.next().unwrap();
        session.select_answer(1).unwrap();
        session.next().unwrap();

        assert_eq!(session.state(), SessionState::Completed);
        let score = session.score().unwrap();
        assert_eq!(score.correct, 2);
        assert_eq!(score.percentage, 100);
        assert_eq!(score.points, 100);
        assert!(score.passed());
    }

    #[test]
    fn one_wrong_answer_scores_half() {
        // Scenario B: first answer wrong.
        let mut session = started(two_question_quiz());
        session.select_answer(1).unwrap();
        session.next().unwrap();
        session.select_answer(1).unwrap();
        session.next().unwrap();

        let score = session.score().unwrap();
        assert_eq!(score.correct, 1);
        assert_eq!(score.percentage, 50);
        assert_eq!(score.points, 50);
        assert!(!score.passed());
    }

    #[test]
    fn next_requires_an_answer() {
        // Scenario C.
        let mut session = started(two_question_quiz());
        assert_eq!(session.next(), Err(SessionError::NoAnswerSelected));
        assert_eq!(session.current_index(), Some(0));
    }

    #[test]
    fn previous_is_rejected_at_question_zero() {
        // Scenario D.
        let mut session = started(two_question_quiz());
        session.select_answer(0).unwrap();
        assert!(session.previous().is_err());
        assert_eq!(session.current_index(), Some(0));
        assert_eq!(session.current_answer(), Some(0));
    }

    #[test]
    fn restart_returns_to_a_fresh_state() {
        // Scenario E, plus the round-trip property.
        let mut session = started(two_question_quiz());
        session.select_answer(0).unwrap();
        session.next().unwrap();
        session.select_answer(1).unwrap();
        session.next().unwrap();
        session.restart();

        assert_eq!(session.state(), SessionState::NotStarted);
        assert_eq!(session.current_index(), None);
        assert_eq!(session.answer(0), None);
        assert_eq!(session.answer(1), None);

        let fresh = QuizSession::new(two_question_quiz());
        assert_eq!(session.phase, fresh.phase);
    }

    #[test]
    fn completion_is_terminal_until_restart() {
        let mut session = started(two_question_quiz());
        session.select_answer(0).unwrap();
        session.next().unwrap();
        session.select_answer(1).unwrap();
        session.next().unwrap();

        let before = session.score().unwrap();
        assert!(session.next().is_err());
        assert!(session.select_answer(0).is_err());
        assert_eq!(session.score().unwrap(), before);
    }

    #[test]
    fn cursor_stays_in_bounds_under_any_navigation() {
        let mut session = started(two_question_quiz());
        session.select_answer(0).unwrap();
        session.next().unwrap();
        session.select_answer(1).unwrap();

        // Walk the cursor around; it must never leave [0, count - 1].
        for _ in 0..5 {
            let _ = session.previous();
            let index = session.current_index().unwrap();
            assert!(index < session.quiz().question_count());
        }
        for _ in 0..5 {
            if session.state() != SessionState::InProgress {
                break;
            }
            let _ = session.next();
            if let Some(index) = session.current_index() {
                assert!(index < session.quiz().question_count());
            }
        }
    }

    #[test]
    fn reselecting_overwrites_the_recorded_answer() {
        let mut session = started(two_question_quiz());
        session.select_answer(1).unwrap();
        session.select_answer(0).unwrap();
        assert_eq!(session.current_answer(), Some(0));
    }

    #[test]
    fn out_of_range_option_is_rejected_unchanged() {
        let mut session = started(two_question_quiz());
        assert_eq!(
            session.select_answer(2),
            Err(SessionError::InvalidOptionIndex { option: 2, available: 2 })
        );
        assert_eq!(session.current_answer(), None);
    }

    #[test]
    fn all_wrong_answers_score_zero() {
        let mut session = started(two_question_quiz());
        session.select_answer(1).unwrap(); // wrong
        session.next().unwrap();
        session.select_answer(0).unwrap(); // wrong
        session.next().unwrap();

        let score = session.score().unwrap();
        assert_eq!(score.correct, 0);
        assert_eq!(score.percentage, 0);
        assert_eq!(score.points, 0);
    }

    #[test]
    fn unanswered_questions_count_as_incorrect() {
        // `next` never advances past an unanswered question, so a sparse
        // answer map can only be scored by building the completed phase
        // directly. Scoring must treat the gap as a wrong answer.
        let mut session = QuizSession::new(two_question_quiz());
        session.phase = Phase::Completed {
            answers: vec![Some(0), None],
        };

        let score = session.score().unwrap();
        assert_eq!(score.correct, 1);
        assert_eq!(score.percentage, 50);
        assert_eq!(score.points, 50);
    }

    #[test]
    fn percentage_and_points_round_to_nearest() {
        let mut quiz = two_question_quiz();
        quiz.questions.push(Question {
            id: "3".to_string(),
            prompt: "Third question".to_string(),
            options: vec!["right".to_string(), "wrong".to_string()],
            correct_answer: 0,
            explanation: "The first option.".to_string(),
        });
        let mut session = started(quiz);
        session.select_answer(0).unwrap(); // correct
        session.next().unwrap();
        session.select_answer(0).unwrap(); // wrong
        session.next().unwrap();
        session.select_answer(0).unwrap(); // correct
        session.next().unwrap();

        // 2/3 -> 66.66..% rounds to 67, and 67 of 100 points.
        let score = session.score().unwrap();
        assert_eq!(score.percentage, 67);
        assert_eq!(score.points, 67);
        assert!(score.percentage <= 100);
        assert!(score.points <= session.quiz().total_points);
    }

    #[test]
    fn progress_percent_tracks_the_cursor() {
        let mut session = started(two_question_quiz());
        assert_eq!(session.progress_percent(), Some(50));
        session.select_answer(0).unwrap();
        session.next().unwrap();
        assert_eq!(session.progress_percent(), Some(100));
    }

    #[test]
    fn clock_formats_with_zero_padded_seconds() {
        assert_eq!(format_clock(15 * 60), "15:00");
        assert_eq!(format_clock(65), "1:05");
        assert_eq!(format_clock(9), "0:09");
        assert_eq!(format_clock(600), "10:00");
    }
}
