//! Mood tags attached to diary entries

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Color used when there is no mood to show (empty chart, unknown value)
pub const PLACEHOLDER_COLOR: &str = "#ddd";

/// The fixed set of moods an entry can be tagged with
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Mood {
    Ecstatic,
    Happy,
    Content,
    Anxious,
    Sad,
    Angry,
}

impl Mood {
    /// All moods in display order
    pub const ALL: [Mood; 6] = [
        Mood::Ecstatic,
        Mood::Happy,
        Mood::Content,
        Mood::Anxious,
        Mood::Sad,
        Mood::Angry,
    ];

    /// Moods counted as a "happy day"
    pub fn is_happy(&self) -> bool {
        matches!(self, Mood::Ecstatic | Mood::Happy | Mood::Content)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mood::Ecstatic => "Ecstatic",
            Mood::Happy => "Happy",
            Mood::Content => "Content",
            Mood::Anxious => "Anxious",
            Mood::Sad => "Sad",
            Mood::Angry => "Angry",
        }
    }

    /// Hex color used by the calendar and chart
    pub fn color(&self) -> &'static str {
        match self {
            Mood::Ecstatic => "#ff6b6b",
            Mood::Happy => "#4ecdc4",
            Mood::Content => "#45b7d1",
            Mood::Anxious => "#f9ca24",
            Mood::Sad => "#6c5ce7",
            Mood::Angry => "#fd79a8",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Mood::Ecstatic => "😍",
            Mood::Happy => "😊",
            Mood::Content => "😌",
            Mood::Anxious => "😰",
            Mood::Sad => "😢",
            Mood::Angry => "😠",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mood {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Mood::ALL
            .into_iter()
            .find(|mood| mood.name().to_lowercase() == normalized)
            .ok_or_else(|| ValidationError::UnknownMood(s.to_string()))
    }
}
