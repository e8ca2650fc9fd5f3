//! Runtime settings
//!
//! Read from the JSON file named by `TILE_ARCADE_SETTINGS`; defaults otherwise.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Request a vsync-paced present mode
    pub vsync: bool,
    /// Prefer an sRGB surface format
    pub srgb: bool,
    /// Seed for the snake target RNG (clock-derived when absent)
    pub seed: Option<u64>,
    /// Dump the snake body at debug level after every move
    pub log_snake_body: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            vsync: true,
            srgb: true,
            seed: None,
            log_snake_body: false,
        }
    }
}

impl Settings {
    /// Environment variable naming the settings file
    pub const ENV_VAR: &'static str = "TILE_ARCADE_SETTINGS";

    /// Load settings from `$TILE_ARCADE_SETTINGS`, or defaults when unset
    pub fn load() -> Result<Self> {
        match std::env::var_os(Self::ENV_VAR) {
            Some(path) => Self::from_path(PathBuf::from(path)),
            None => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| Error::SettingsIo {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json).map_err(|source| Error::SettingsParse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Seed to use for this run
    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 42 }"#).unwrap();
        assert_eq!(settings.seed, Some(42));
        assert!(settings.vsync);
        assert!(settings.srgb);
        assert!(!settings.log_snake_body);
        assert_eq!(settings.effective_seed(), 42);
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(Settings::from_json("{ vsync: yes").is_err());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = Settings::from_path("/nonexistent/tile-arcade.json").unwrap_err();
        assert!(matches!(err, Error::SettingsIo { .. }));
        assert!(err.to_string().contains("/nonexistent/tile-arcade.json"));
    }
}
