use crate::config::types::{Config, Settings};
use anyhow::{Context, Result};
use log::warn;
use std::fs;
use std::path::Path;

const DEFAULT_SETTINGS_FILE: &str = "settings.json";

impl Config {
    /// Loads `settings.json` from the working directory, falling back to defaults.
    #[must_use]
    pub fn new() -> Self {
        let path = Path::new(DEFAULT_SETTINGS_FILE);
        if !path.exists() {
            return Self::default();
        }

        match Self::load_settings(path) {
            Ok(settings) => Self { settings },
            Err(e) => {
                warn!("Ignoring settings file: {e:#}");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        Ok(Self {
            settings: Self::load_settings(path)?,
        })
    }

    fn load_settings(path: &Path) -> Result<Settings> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings from {}", path.display()))
    }
}
