//! Data model for the dashboard.
//!
//! Everything here is immutable once constructed; runtime state lives in
//! [`crate::session`] and [`crate::player`].

mod course;
mod dashboard;
mod quiz;

pub use course::{Course, Level};
pub use dashboard::{ActivityItem, DashboardData, Deadline, Lesson, StatTile, Urgency};
pub use quiz::{Question, Quiz};
