//! Config management use case

use crate::error::{DiaryError, Result};
use crate::infrastructure::{Config, FileStorage};

/// Service for managing diary configuration
pub struct ConfigService {
    storage: FileStorage,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(storage: FileStorage) -> Self {
        ConfigService { storage }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.storage.load_config()?;

        match key {
            "autosave_delay_ms" => Ok(config.autosave_delay_ms.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(DiaryError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: autosave_delay_ms, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.storage.load_config()?;

        match key {
            "autosave_delay_ms" => {
                config.autosave_delay_ms = value.trim().parse().map_err(|_| {
                    DiaryError::Config(format!(
                        "Invalid autosave_delay_ms: '{}'. Expected milliseconds, e.g. 2000",
                        value
                    ))
                })?;
            }
            "created" => {
                return Err(DiaryError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(DiaryError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: autosave_delay_ms",
                    key
                )));
            }
        }

        self.storage.save_config(&config)
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.storage.load_config()
    }
}
