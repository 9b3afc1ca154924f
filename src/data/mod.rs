//! Built-in dashboard content and quiz-file loading.

mod loader;
mod sample;

pub use loader::{LoadError, load_quiz_from_json};
pub use sample::sample_dashboard;
