use std::env;
use std::path::PathBuf;

/// Configuration for the question history file.
///
/// Environment variables:
/// - HISTORY_FILE: Path to the CSV log (default: "question_history.csv")
pub struct HistoryConfig {
    pub file_path: PathBuf,
}

impl HistoryConfig {
    pub fn from_env() -> Self {
        let file_path = env::var("HISTORY_FILE")
            .unwrap_or_else(|_| "question_history.csv".to_string())
            .into();
        Self { file_path }
    }
}
