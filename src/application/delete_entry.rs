//! Delete and reset use cases

use crate::application::{Confirm, EntryStore, Notice};
use crate::error::{DiaryError, Result};
use crate::infrastructure::Storage;
use chrono::NaiveDate;

pub const DELETE_PROMPT: &str =
    "Are you sure you want to delete this entry? This action cannot be undone.";
pub const RESET_PROMPT: &str =
    "Are you sure you want to delete all diary entries? This action cannot be undone.";
pub const RESET_FINAL_PROMPT: &str =
    "This will permanently delete all your diary entries. Are you absolutely sure?";

/// Delete the entry for `date` after the user confirms
pub fn delete_entry<S: Storage>(
    store: &mut EntryStore<S>,
    date: NaiveDate,
    confirm: &mut dyn Confirm,
) -> Result<Notice> {
    if store.find_by_date(date).is_none() {
        return Err(DiaryError::NotFound(date));
    }

    if !confirm.confirm(DELETE_PROMPT) {
        return Err(DiaryError::Cancelled);
    }

    if !store.delete_by_date(date)? {
        return Err(DiaryError::NotFound(date));
    }
    Ok(Notice::success("Entry deleted successfully!"))
}

/// Remove every entry; asks twice
pub fn reset_all<S: Storage>(store: &mut EntryStore<S>, confirm: &mut dyn Confirm) -> Result<Notice> {
    if !confirm.confirm(RESET_PROMPT) || !confirm.confirm(RESET_FINAL_PROMPT) {
        return Err(DiaryError::Cancelled);
    }

    store.clear_all()?;
    Ok(Notice::success("All data has been reset!"))
}
