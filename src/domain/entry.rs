//! Diary entry record

use crate::domain::Mood;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One journal record; `date` is the natural key of the collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryEntry {
    pub id: Uuid,
    pub date: NaiveDate,
    pub mood: Mood,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub word_count: usize,
}

impl DiaryEntry {
    /// Create a fresh entry with a new id; `content` is stored trimmed
    pub fn new(date: NaiveDate, mood: Mood, content: &str, timestamp: DateTime<Utc>) -> Self {
        let content = content.trim();
        DiaryEntry {
            id: Uuid::new_v4(),
            date,
            mood,
            content: content.to_string(),
            timestamp,
            word_count: word_count(content),
        }
    }

    /// Full replace of the mutable fields, keeping `id` and `date`
    pub fn rewrite(&mut self, mood: Mood, content: &str, timestamp: DateTime<Utc>) {
        let content = content.trim();
        self.mood = mood;
        self.content = content.to_string();
        self.timestamp = timestamp;
        self.word_count = word_count(content);
    }
}

/// Number of whitespace-separated tokens in `text`
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
