//! Error types for moodiary

use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

/// Reasons a save request is rejected before touching the store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select a mood!")]
    MissingMood,

    #[error("Please write something in your diary!")]
    EmptyContent,

    #[error("Please select a valid date! ({0})")]
    InvalidDate(String),

    #[error("Unknown mood: {0}")]
    UnknownMood(String),
}

/// Main error type for moodiary
#[derive(Debug, Error)]
pub enum DiaryError {
    #[error("Not a moodiary directory: {0}")]
    NotDiaryDirectory(PathBuf),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("No entry found for {0}")]
    NotFound(NaiveDate),

    #[error("No draft saved for {0}")]
    NoDraft(NaiveDate),

    #[error("No data to export!")]
    NothingToExport,

    #[error("Cancelled")]
    Cancelled,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl DiaryError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DiaryError::NotDiaryDirectory(_) => 2,
            DiaryError::Validation(_) => 3,
            DiaryError::NotFound(_) | DiaryError::NoDraft(_) => 4,
            DiaryError::Cancelled => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DiaryError::NotDiaryDirectory(path) => {
                format!(
                    "Not a moodiary directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'moodiary init' in this directory to start a diary\n\
                    • Navigate to an existing diary directory\n\
                    • Set MOODIARY_ROOT environment variable to your diary path",
                    path.display()
                )
            }
            DiaryError::Validation(ValidationError::InvalidDate(input)) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Valid dates:\n\
                    • today, yesterday\n\
                    • monday, tuesday, ..., sunday (most recent)\n\
                    • last monday, last friday, etc.\n\
                    • Specific dates: YYYY-MM-DD (e.g., 2025-01-17)",
                    input
                )
            }
            DiaryError::Validation(ValidationError::UnknownMood(input)) => {
                format!(
                    "Unknown mood: '{}'\n\n\
                    Valid moods: ecstatic, happy, content, anxious, sad, angry",
                    input
                )
            }
            DiaryError::NotFound(date) => {
                format!(
                    "No entry found for {}\n\n\
                    Suggestions:\n\
                    • Use 'moodiary list' to see recorded dates\n\
                    • Use 'moodiary calendar' to browse a month",
                    date.format("%Y-%m-%d")
                )
            }
            DiaryError::Storage(msg) => {
                format!(
                    "Storage error: {}\n\n\
                    Your entry was not saved. Check that the diary directory is writable \
                    and that the disk is not full.",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DiaryError
pub type Result<T> = std::result::Result<T, DiaryError>;
