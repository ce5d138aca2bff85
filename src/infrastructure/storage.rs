//! Durable key-value storage for diary blobs

use crate::error::{DiaryError, Result};
use crate::infrastructure::Config;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the per-diary data directory
pub const DATA_DIR: &str = ".moodiary";

/// Blob holding the serialized entry collection
pub const ENTRIES_KEY: &str = "diaryEntries";
/// Blob holding the unsaved draft
pub const DRAFT_KEY: &str = "currentDraft";
/// Blob holding the theme name
pub const THEME_KEY: &str = "theme";

/// Whole-blob storage addressed by fixed keys
pub trait Storage {
    /// Read a blob, `None` when the key was never written or was removed
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace a blob
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a blob; removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<()>;
}

/// One file per key inside `<root>/.moodiary/`
#[derive(Debug, Clone)]
pub struct FileStorage {
    pub root: PathBuf,
}

impl FileStorage {
    /// Create a storage with the given diary root directory
    pub fn new(root: PathBuf) -> Self {
        FileStorage { root }
    }

    /// Find the diary root.
    /// MOODIARY_ROOT wins when set; otherwise walk up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("MOODIARY_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_data_dir(&path) {
                return Ok(FileStorage::new(path));
            } else {
                return Err(DiaryError::Config(format!(
                    "MOODIARY_ROOT is set to '{}' but no {} directory found. \
                    Run 'moodiary init' in that directory or unset MOODIARY_ROOT.",
                    path.display(),
                    DATA_DIR
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Find the diary root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_data_dir(&current) {
                return Ok(FileStorage::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(DiaryError::NotDiaryDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_data_dir(path: &Path) -> bool {
        path.join(DATA_DIR).is_dir()
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.join(DATA_DIR)
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_data_dir(&self.root)
    }

    /// Create the data directory; fails if it already exists
    pub fn initialize(&self) -> Result<()> {
        let data_dir = self.data_dir();

        if data_dir.exists() {
            return Err(DiaryError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(&data_dir)?;
        Ok(())
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.data_dir().join(key)
    }

    /// Write to a temp file next to the target, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so the destination is removed first.
    fn write_atomic(path: &Path, contents: &str) -> std::io::Result<()> {
        let tmp_name = format!(
            "{}.tmp-{}",
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("blob"),
            std::process::id()
        );
        let tmp_path = path.with_file_name(tmp_name);

        fs::write(&tmp_path, contents)?;

        if cfg!(windows) && path.exists() {
            fs::remove_file(path)?;
        }

        fs::rename(&tmp_path, path)
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.blob_path(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DiaryError::Io(e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.blob_path(key);
        debug!(key, bytes = value.len(), "writing blob");

        if !self.is_initialized() {
            return Err(DiaryError::NotDiaryDirectory(self.root.clone()));
        }

        Self::write_atomic(&path, value)
            .map_err(|e| DiaryError::Storage(format!("failed to write '{}': {}", key, e)))
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.blob_path(key);
        debug!(key, "removing blob");

        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DiaryError::Storage(format!(
                "failed to remove '{}': {}",
                key, e
            ))),
        }
    }
}

/// In-memory storage for tests and throwaway sessions
#[derive(Debug, Default)]
pub struct MemoryStorage {
    blobs: RefCell<HashMap<String, String>>,
    read_only: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A storage whose writes always fail, like a full or disabled disk
    pub fn read_only() -> Self {
        MemoryStorage {
            blobs: RefCell::default(),
            read_only: true,
        }
    }

    fn check_writable(&self, key: &str) -> Result<()> {
        if self.read_only {
            return Err(DiaryError::Storage(format!(
                "failed to write '{}': storage is read-only",
                key
            )));
        }
        Ok(())
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.blobs.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.check_writable(key)?;
        self.blobs
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.check_writable(key)?;
        self.blobs.borrow_mut().remove(key);
        Ok(())
    }
}

impl<S: Storage + ?Sized> Storage for &S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
