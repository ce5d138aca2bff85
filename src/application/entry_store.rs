//! Entry store - owner of the diary entry collection
//!
//! Every mutation builds the next collection, writes it to storage as one
//! blob, and only then replaces the in-memory copy. A failed write leaves
//! the store exactly as it was.

use crate::domain::{word_count, DiaryEntry, Mood};
use crate::error::{Result, ValidationError};
use crate::infrastructure::storage::ENTRIES_KEY;
use crate::infrastructure::Storage;
use chrono::{NaiveDate, Utc};
use tracing::{debug, info, warn};

pub struct EntryStore<S: Storage> {
    storage: S,
    entries: Vec<DiaryEntry>,
}

impl<S: Storage> EntryStore<S> {
    /// Rehydrate the collection from storage (empty when nothing was saved)
    pub fn load(storage: S) -> Result<Self> {
        let entries = match storage.get(ENTRIES_KEY)? {
            Some(blob) if !blob.trim().is_empty() => dedupe_by_date(parse_entries(&blob)?),
            _ => Vec::new(),
        };
        debug!(count = entries.len(), "loaded diary entries");
        Ok(EntryStore { storage, entries })
    }

    /// All entries in insertion order
    pub fn list(&self) -> &[DiaryEntry] {
        &self.entries
    }

    pub fn find_by_date(&self, date: NaiveDate) -> Option<&DiaryEntry> {
        self.entries.iter().find(|e| e.date == date)
    }

    /// Create or fully replace the entry for `date`.
    ///
    /// An existing entry keeps its id; its mood, content, timestamp and word
    /// count are replaced.
    pub fn upsert(
        &mut self,
        date: NaiveDate,
        mood: Option<Mood>,
        content: &str,
    ) -> Result<DiaryEntry> {
        let mood = mood.ok_or(ValidationError::MissingMood)?;
        if content.trim().is_empty() {
            return Err(ValidationError::EmptyContent.into());
        }

        let now = Utc::now();
        let mut next = self.entries.clone();
        let entry = match next.iter_mut().find(|e| e.date == date) {
            Some(existing) => {
                existing.rewrite(mood, content, now);
                existing.clone()
            }
            None => {
                let entry = DiaryEntry::new(date, mood, content, now);
                next.push(entry.clone());
                entry
            }
        };

        self.commit(next)?;
        info!(%date, mood = %entry.mood, words = entry.word_count, "saved entry");
        Ok(entry)
    }

    /// Remove the entry for `date`; `false` when there was none
    pub fn delete_by_date(&mut self, date: NaiveDate) -> Result<bool> {
        if self.find_by_date(date).is_none() {
            debug!(%date, "no entry to delete");
            return Ok(false);
        }

        let next: Vec<DiaryEntry> = self
            .entries
            .iter()
            .filter(|e| e.date != date)
            .cloned()
            .collect();
        self.commit(next)?;
        info!(%date, "deleted entry");
        Ok(true)
    }

    pub fn clear_all(&mut self) -> Result<()> {
        self.commit(Vec::new())?;
        info!("cleared all entries");
        Ok(())
    }

    /// Merge previously exported entries; an imported record replaces any
    /// entry with the same date. Returns the number of records applied.
    ///
    /// A record with blank content rejects the whole import. Content is
    /// trimmed and the word count recomputed from it.
    pub fn import(&mut self, imported: Vec<DiaryEntry>) -> Result<usize> {
        let mut imported = dedupe_by_date(imported);
        for entry in &mut imported {
            let content = entry.content.trim();
            if content.is_empty() {
                warn!(date = %entry.date, "rejecting import with blank entry");
                return Err(ValidationError::EmptyContent.into());
            }
            entry.content = content.to_string();
            entry.word_count = word_count(&entry.content);
        }
        let applied = imported.len();

        let mut next = self.entries.clone();
        for entry in imported {
            match next.iter_mut().find(|e| e.date == entry.date) {
                Some(existing) => *existing = entry,
                None => next.push(entry),
            }
        }

        self.commit(next)?;
        info!(applied, "imported entries");
        Ok(applied)
    }

    /// Indented JSON of the whole collection
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }

    fn commit(&mut self, next: Vec<DiaryEntry>) -> Result<()> {
        let blob = serde_json::to_string(&next)?;
        self.storage.set(ENTRIES_KEY, &blob)?;
        self.entries = next;
        Ok(())
    }
}

/// Parse a serialized entry collection (stored blob or export file)
pub fn parse_entries(json: &str) -> Result<Vec<DiaryEntry>> {
    Ok(serde_json::from_str(json)?)
}

/// Keep one entry per date; a later record wins over an earlier one
fn dedupe_by_date(entries: Vec<DiaryEntry>) -> Vec<DiaryEntry> {
    let mut result: Vec<DiaryEntry> = Vec::with_capacity(entries.len());
    for entry in entries {
        match result.iter_mut().find(|e| e.date == entry.date) {
            Some(existing) => {
                warn!(date = %entry.date, "duplicate date in entry data, keeping the later record");
                *existing = entry;
            }
            None => result.push(entry),
        }
    }
    result
}
