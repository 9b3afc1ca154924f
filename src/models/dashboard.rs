use crate::models::{Course, Quiz};

/// One summary tile at the top of the dashboard.
#[derive(Debug, Clone)]
pub struct StatTile {
    pub title: String,
    pub value: String,
    pub change: Option<String>,
}

/// One line in the recent-activity feed.
#[derive(Debug, Clone)]
pub struct ActivityItem {
    pub text: String,
    pub when: String,
}

/// How urgently a deadline is flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    DueSoon,
    ThisWeek,
    Optional,
}

impl Urgency {
    pub fn label(&self) -> &'static str {
        match self {
            Urgency::DueSoon => "Due Soon",
            Urgency::ThisWeek => "This Week",
            Urgency::Optional => "Optional",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Deadline {
    pub title: String,
    pub course: String,
    pub due: String,
    pub urgency: Urgency,
}

/// The video lesson behind the player shell.
#[derive(Debug, Clone)]
pub struct Lesson {
    pub title: String,
    pub description: String,
    pub duration_secs: u32,
    pub number: u32,
    pub total: u32,
}

/// Everything the dashboard page composes, built once at startup.
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub learner: String,
    pub stats: Vec<StatTile>,
    pub enrolled: Vec<Course>,
    pub recommended: Vec<Course>,
    pub activity: Vec<ActivityItem>,
    pub deadlines: Vec<Deadline>,
    pub quiz: Quiz,
    pub lesson: Lesson,
}
