/// Difficulty badge shown on a course card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub fn label(&self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

/// A course as shown on the dashboard.
///
/// `progress` is present only for enrolled courses; recommended courses
/// carry `None` and render an enroll action instead of a progress bar.
#[derive(Debug, Clone)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub instructor: String,
    pub description: String,
    pub duration: String,
    pub students: u32,
    pub rating: f32,
    pub progress: Option<u8>,
    pub level: Level,
    pub category: String,
}
