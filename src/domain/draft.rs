//! Unsaved draft and the debounce timer that coalesces draft writes

use crate::domain::Mood;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// In-progress entry kept for recovery until a real save for `date`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub mood: Mood,
    pub content: String,
    pub date: NaiveDate,
}

/// Holds the latest value until no new input has arrived for `quiet_period`.
///
/// Single-threaded: the caller passes the current instant to `push` and
/// `poll` from its own event loop.
#[derive(Debug)]
pub struct Debouncer<T> {
    quiet_period: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Debouncer<T> {
    pub fn new(quiet_period: Duration) -> Self {
        Debouncer {
            quiet_period,
            pending: None,
        }
    }

    /// Replace any pending value and restart the quiet period
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((now + self.quiet_period, value));
    }

    /// Take the pending value if its quiet period has elapsed
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((deadline, _)) if now >= *deadline => self.pending.take().map(|(_, v)| v),
            _ => None,
        }
    }

    /// Take the pending value regardless of the deadline
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|(_, v)| v)
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(deadline, _)| *deadline)
    }
}
