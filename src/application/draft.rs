//! Draft auto-save and recovery use case

use crate::domain::{Debouncer, Draft, Mood};
use crate::error::Result;
use crate::infrastructure::storage::DRAFT_KEY;
use crate::infrastructure::Storage;
use chrono::NaiveDate;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Coalesces draft input and writes the latest draft after a quiet period
pub struct DraftService<S: Storage> {
    storage: S,
    debouncer: Debouncer<Draft>,
}

impl<S: Storage> DraftService<S> {
    pub fn new(storage: S, quiet_period: Duration) -> Self {
        DraftService {
            storage,
            debouncer: Debouncer::new(quiet_period),
        }
    }

    /// Register an input event. Only input with a chosen mood and non-blank
    /// content becomes a draft; anything else leaves the pending draft alone.
    pub fn record_input(
        &mut self,
        mood: Option<Mood>,
        content: &str,
        date: NaiveDate,
        now: Instant,
    ) -> bool {
        let content = content.trim();
        let Some(mood) = mood else {
            return false;
        };
        if content.is_empty() {
            return false;
        }

        self.debouncer.push(
            Draft {
                mood,
                content: content.to_string(),
                date,
            },
            now,
        );
        true
    }

    /// Write the pending draft if its quiet period has elapsed
    pub fn tick(&mut self, now: Instant) -> Result<bool> {
        match self.debouncer.poll(now) {
            Some(draft) => self.write(&draft).map(|_| true),
            None => Ok(false),
        }
    }

    /// Write the pending draft immediately
    pub fn flush(&mut self) -> Result<bool> {
        match self.debouncer.flush() {
            Some(draft) => self.write(&draft).map(|_| true),
            None => Ok(false),
        }
    }

    pub fn has_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// When the pending draft is due to be written
    pub fn pending_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    pub fn stored(&self) -> Result<Option<Draft>> {
        let Some(blob) = self.storage.get(DRAFT_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_str(&blob) {
            Ok(draft) => Ok(Some(draft)),
            Err(e) => {
                warn!(error = %e, "ignoring unreadable draft");
                Ok(None)
            }
        }
    }

    /// The stored draft, but only when it was started for `today`
    pub fn recover(&self, today: NaiveDate) -> Result<Option<Draft>> {
        Ok(self.stored()?.filter(|draft| draft.date == today))
    }

    /// Drop the pending draft and remove the stored one
    pub fn clear(&mut self) -> Result<()> {
        self.debouncer.cancel();
        self.storage.remove(DRAFT_KEY)
    }

    /// Called after a successful save for `date`: the pending draft is
    /// always dropped, the stored one only when it belongs to `date`.
    pub fn clear_for(&mut self, date: NaiveDate) -> Result<()> {
        self.debouncer.cancel();
        match self.stored()? {
            Some(draft) if draft.date != date => Ok(()),
            _ => self.storage.remove(DRAFT_KEY),
        }
    }

    fn write(&self, draft: &Draft) -> Result<()> {
        let blob = serde_json::to_string(draft)?;
        self.storage.set(DRAFT_KEY, &blob)?;
        debug!(date = %draft.date, "draft saved");
        Ok(())
    }
}
