//! Export and import use cases

use crate::application::entry_store::parse_entries;
use crate::application::EntryStore;
use crate::error::{DiaryError, Result};
use crate::infrastructure::Storage;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// `diary-entries-YYYY-MM-DD.json`
pub fn export_filename(today: NaiveDate) -> String {
    format!("diary-entries-{}.json", today.format("%Y-%m-%d"))
}

/// Write all entries as indented JSON into `dir`; returns the file path
pub fn export_entries<S: Storage>(
    store: &EntryStore<S>,
    dir: &Path,
    today: NaiveDate,
) -> Result<PathBuf> {
    if store.list().is_empty() {
        return Err(DiaryError::NothingToExport);
    }

    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }

    let path = dir.join(export_filename(today));
    fs::write(&path, store.to_json()?)?;
    info!(path = %path.display(), count = store.list().len(), "exported entries");
    Ok(path)
}

/// Merge an export file back into the store; returns the number of records applied
pub fn import_entries<S: Storage>(store: &mut EntryStore<S>, file: &Path) -> Result<usize> {
    let contents = fs::read_to_string(file)?;
    let entries = parse_entries(&contents)?;
    store.import(entries)
}
