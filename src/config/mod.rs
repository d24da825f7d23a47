use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

use crate::listing::DurationDays;
use crate::utils::app_data_dir;

const SETTINGS_FILE: &str = "settings.json";

/// Seller-side preferences applied when a new wizard session starts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    pub seller: String,
    pub currency: String,
    pub default_duration: DurationDays,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seller: "anonymous".into(),
            currency: "USD".into(),
            default_duration: DurationDays::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Loads and stores [`Settings`] under the application data directory.
pub struct SettingsManager {
    path: PathBuf,
}

impl SettingsManager {
    pub fn new() -> Self {
        Self::from_base(app_data_dir())
    }

    pub fn from_base(base: PathBuf) -> Self {
        Self {
            path: base.join(SETTINGS_FILE),
        }
    }

    /// A missing file falls back to defaults; a malformed one is an error.
    pub fn load(&self) -> Result<Settings, ConfigError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Settings::default())
        }
    }

    /// Writes atomically by staging to a temporary file.
    pub fn save(&self, settings: &Settings) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(settings)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for SettingsManager {
    fn default() -> Self {
        Self::new()
    }
}
