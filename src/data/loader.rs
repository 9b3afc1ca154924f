use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::models::Quiz;

/// Error loading a quiz definition from a JSON file.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read.
    Io { path: String, source: io::Error },
    /// The file is not a valid quiz JSON document.
    Parse {
        path: String,
        source: serde_json::Error,
    },
    /// The document parsed but violates a quiz invariant.
    Invalid(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => write!(f, "failed to read {path}: {source}"),
            LoadError::Parse { path, source } => write!(f, "failed to parse {path}: {source}"),
            LoadError::Invalid(message) => write!(f, "invalid quiz: {message}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::Parse { source, .. } => Some(source),
            LoadError::Invalid(_) => None,
        }
    }
}

/// Load and validate a quiz definition from a JSON file.
pub fn load_quiz_from_json<P: AsRef<Path>>(path: P) -> Result<Quiz, LoadError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let quiz: Quiz = serde_json::from_str(&json).map_err(|source| LoadError::Parse {
        path: path.display().to_string(),
        source,
    })?;
    validate(&quiz)?;
    Ok(quiz)
}

fn validate(quiz: &Quiz) -> Result<(), LoadError> {
    if quiz.questions.is_empty() {
        return Err(LoadError::Invalid(
            "a quiz must contain at least one question".to_string(),
        ));
    }
    if quiz.time_limit == 0 {
        return Err(LoadError::Invalid("time limit must be nonzero".to_string()));
    }
    if quiz.total_points == 0 {
        return Err(LoadError::Invalid("total points must be nonzero".to_string()));
    }
    for question in &quiz.questions {
        if question.options.len() < 2 {
            return Err(LoadError::Invalid(format!(
                "question '{}' must offer at least two options",
                question.id
            )));
        }
        if question.correct_answer >= question.options.len() {
            return Err(LoadError::Invalid(format!(
                "question '{}' marks option {} correct but only has {} options",
                question.id,
                question.correct_answer,
                question.options.len()
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUIZ_JSON: &str = r#"{
        "title": "Sample Quiz",
        "description": "A quiz",
        "time_limit": 10,
        "total_points": 50,
        "questions": [
            {
                "id": "1",
                "prompt": "Pick the first option",
                "options": ["first", "second"],
                "correct_answer": 0,
                "explanation": "It is the first."
            }
        ]
    }"#;

    #[test]
    fn parses_and_validates_a_quiz_document() {
        let quiz: Quiz = serde_json::from_str(QUIZ_JSON).unwrap();
        assert!(validate(&quiz).is_ok());
        assert_eq!(quiz.title, "Sample Quiz");
        assert_eq!(quiz.question_count(), 1);
        assert_eq!(quiz.questions[0].options.len(), 2);
    }

    #[test]
    fn rejects_an_out_of_range_correct_answer() {
        let mut quiz: Quiz = serde_json::from_str(QUIZ_JSON).unwrap();
        quiz.questions[0].correct_answer = 2;
        assert!(matches!(validate(&quiz), Err(LoadError::Invalid(_))));
    }

    #[test]
    fn rejects_an_empty_question_list() {
        let mut quiz: Quiz = serde_json::from_str(QUIZ_JSON).unwrap();
        quiz.questions.clear();
        assert!(matches!(validate(&quiz), Err(LoadError::Invalid(_))));
    }

    #[test]
    fn rejects_a_question_with_a_single_option() {
        let mut quiz: Quiz = serde_json::from_str(QUIZ_JSON).unwrap();
        quiz.questions[0].options.truncate(1);
        quiz.questions[0].correct_answer = 0;
        assert!(matches!(validate(&quiz), Err(LoadError::Invalid(_))));
    }
}
