//! Save entry use case

use crate::application::{DraftService, EntryStore, Notice};
use crate::domain::{DiaryEntry, Mood};
use crate::error::Result;
use crate::infrastructure::Storage;
use chrono::NaiveDate;
use tracing::warn;

/// Validate and store the entry for `date`, then drop the draft it replaces.
///
/// Nothing is written and the draft is kept when validation or the store
/// write fails. Once the entry is stored, failing to drop the draft only
/// downgrades the notice to a warning.
pub fn save_entry<S: Storage, D: Storage>(
    store: &mut EntryStore<S>,
    drafts: &mut DraftService<D>,
    date: NaiveDate,
    mood: Option<Mood>,
    content: &str,
) -> Result<(DiaryEntry, Notice)> {
    let action = if store.find_by_date(date).is_some() {
        "updated"
    } else {
        "saved"
    };
    let entry = store.upsert(date, mood, content)?;

    let notice = match drafts.clear_for(date) {
        Ok(()) => Notice::success(format!("Entry {} successfully!", action)),
        Err(e) => {
            warn!(%date, error = %e, "entry stored but draft was not cleared");
            Notice::warning(format!(
                "Entry {}, but the draft could not be cleared",
                action
            ))
        }
    };
    Ok((entry, notice))
}
