//! User-facing notices and confirmation prompts

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
    Warning,
}

/// A short message for the user, the outcome of one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub level: NoticeLevel,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Notice {
            message: message.into(),
            level: NoticeLevel::Success,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Notice {
            message: message.into(),
            level: NoticeLevel::Warning,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notice {
            message: message.into(),
            level: NoticeLevel::Error,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Asks the user to approve a destructive action
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Approves everything (`--yes`)
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}
