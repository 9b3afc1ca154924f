use serde::Deserialize;

/// One multiple-choice question. Option order is significant and fixed.
#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    pub explanation: String,
}

/// A timed question set with a scoring scale.
#[derive(Debug, Clone, Deserialize)]
pub struct Quiz {
    pub title: String,
    pub description: String,
    /// Time limit in minutes.
    pub time_limit: u32,
    pub total_points: u32,
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}
