//! Theme preference use case

use crate::domain::Theme;
use crate::error::Result;
use crate::infrastructure::storage::THEME_KEY;
use crate::infrastructure::Storage;
use std::str::FromStr;
use tracing::warn;

/// Environment variable consulted when no theme has been saved
pub const THEME_ENV: &str = "MOODIARY_THEME";

pub struct ThemeService<S: Storage> {
    storage: S,
}

impl<S: Storage> ThemeService<S> {
    pub fn new(storage: S) -> Self {
        ThemeService { storage }
    }

    /// Saved theme, else the environment preference, else light
    pub fn current(&self) -> Result<Theme> {
        if let Some(saved) = self.storage.get(THEME_KEY)? {
            match Theme::from_str(&saved) {
                Ok(theme) => return Ok(theme),
                Err(e) => warn!(error = %e, "ignoring saved theme"),
            }
        }

        Ok(std::env::var(THEME_ENV)
            .ok()
            .and_then(|value| Theme::from_str(&value).ok())
            .unwrap_or_default())
    }

    pub fn set(&self, theme: Theme) -> Result<()> {
        self.storage.set(THEME_KEY, theme.as_str())
    }

    pub fn toggle(&self) -> Result<Theme> {
        let next = self.current()?.toggle();
        self.set(next)?;
        Ok(next)
    }
}
