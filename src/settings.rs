//! Runtime settings for the headless driver
//!
//! Read from a JSON file; anything missing falls back to its default.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sim::Viewport;

/// Why a settings file could not be used
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("viewport must be positive, got {width}x{height}")]
    Viewport { width: f32, height: f32 },
}

/// Driver settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Surface size reported to the game (laid out landscape)
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Run seed; `None` derives one from the clock
    pub seed: Option<u64>,
    /// Total ticks to simulate across all runs
    pub max_ticks: u64,
    /// Restarts allowed after a game over before the driver stops
    pub restarts: u32,
    /// Let the autopilot play
    pub autopilot: bool,
    /// Print a JSON snapshot every N ticks (0 = only at the end)
    pub snapshot_every: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            viewport_width: 800.0,
            viewport_height: 450.0,
            seed: None,
            max_ticks: 60 * 60,
            restarts: 0,
            autopilot: true,
            snapshot_every: 0,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings from `path`, falling back to defaults on any problem
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::from_file(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.viewport_width > 0.0 && self.viewport_height > 0.0 {
            Ok(())
        } else {
            Err(SettingsError::Viewport {
                width: self.viewport_width,
                height: self.viewport_height,
            })
        }
    }

    /// The viewport the game should be built with
    pub fn viewport(&self) -> Viewport {
        Viewport::landscape(self.viewport_width, self.viewport_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 9, "max_ticks": 500 }"#).unwrap();
        assert_eq!(settings.seed, Some(9));
        assert_eq!(settings.max_ticks, 500);
        assert_eq!(settings.viewport_width, 800.0);
        assert!(settings.autopilot);
    }

    #[test]
    fn test_portrait_viewport_is_laid_out_landscape() {
        let settings =
            Settings::from_json(r#"{ "viewport_width": 390, "viewport_height": 844 }"#).unwrap();
        assert_eq!(settings.viewport(), Viewport::new(844.0, 390.0));
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(SettingsError::Json(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "viewport_width": 0 }"#),
            Err(SettingsError::Viewport { .. })
        ));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = Path::new("/nonexistent/roll-runner/settings.json");
        assert!(matches!(
            Settings::from_file(path),
            Err(SettingsError::Io(_))
        ));
        assert_eq!(Settings::load(Some(path)), Settings::default());
    }
}
