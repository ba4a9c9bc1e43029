use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// JPEG quality accepted by the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Quality(u8);

#[derive(Debug, Error, PartialEq, Eq)]
#[error(
    "quality must be between {min} and {max}, got {value}",
    min = Quality::MIN,
    max = Quality::MAX
)]
pub struct QualityOutOfRange {
    pub value: u8,
}

impl Quality {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 95;
    pub const DEFAULT: Self = Self(80);

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for Quality {
    type Error = QualityOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(QualityOutOfRange { value })
        }
    }
}

impl From<Quality> for u8 {
    fn from(quality: Quality) -> Self {
        quality.0
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Settings read from `settings.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub quality: Quality,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub settings: Settings,
}

impl Config {
    /// Command-line quality takes precedence over the settings file.
    #[must_use]
    pub fn resolve_quality(&self, cli_quality: Option<Quality>) -> Quality {
        cli_quality.unwrap_or(self.settings.quality)
    }
}
