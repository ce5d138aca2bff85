//! Initialize diary use case

use crate::error::Result;
use crate::infrastructure::{Config, FileStorage};
use std::fs;
use std::path::Path;
use tracing::info;

/// Initialize a new diary at the specified path.
pub fn init(path: &Path) -> Result<FileStorage> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let storage = FileStorage::new(path.to_path_buf());
    storage.initialize()?;
    storage.save_config(&Config::new())?;

    info!(root = %path.display(), "initialized diary");
    Ok(storage)
}
