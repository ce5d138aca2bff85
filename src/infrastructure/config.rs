//! Configuration management

use crate::error::{DiaryError, Result};
use crate::infrastructure::storage::DATA_DIR;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Quiet period before an unsaved draft is written
pub const DEFAULT_AUTOSAVE_DELAY_MS: u64 = 2000;

fn default_autosave_delay_ms() -> u64 {
    DEFAULT_AUTOSAVE_DELAY_MS
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub created: DateTime<Utc>,
    #[serde(default = "default_autosave_delay_ms")]
    pub autosave_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            created: Utc::now(),
            autosave_delay_ms: DEFAULT_AUTOSAVE_DELAY_MS,
        }
    }

    pub fn autosave_delay(&self) -> Duration {
        Duration::from_millis(self.autosave_delay_ms)
    }

    /// Load config from .moodiary/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(DATA_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DiaryError::NotDiaryDirectory(path.to_path_buf())
            } else {
                DiaryError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| DiaryError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .moodiary/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let data_dir = path.join(DATA_DIR);
        let config_path = data_dir.join("config.toml");

        if !data_dir.exists() {
            fs::create_dir(&data_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }
}
