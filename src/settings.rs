//! Player settings and preferences
//!
//! Persisted separately from the session as a small JSON file. Settings are
//! passed explicitly to whoever needs them; nothing here is global.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lowest volume the options menu cycles back to
pub const MIN_CYCLED_VOLUME: f32 = 0.1;
/// Volume added per options menu press
pub const VOLUME_STEP: f32 = 0.1;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to access settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed settings file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Silence everything without losing the volume levels
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    /// Options menu behavior: step the SFX volume up, wrapping past full volume
    pub fn cycle_sfx_volume(&mut self) -> f32 {
        self.sfx_volume += VOLUME_STEP;
        // Tolerance for accumulated float error on the 1.0 step
        if self.sfx_volume > 1.01 {
            self.sfx_volume = MIN_CYCLED_VOLUME;
        }
        self.sfx_volume
    }

    /// Options menu label, e.g. "SFX Volume: 70%"
    pub fn sfx_label(&self) -> String {
        format!("SFX Volume: {:.0}%", self.sfx_volume * 100.0)
    }

    /// Volume actually applied to sound effects
    pub fn effective_sfx_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.sfx_volume.clamp(0.0, 1.0)
        }
    }

    /// Load settings, falling back to defaults when the file does not exist yet
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let json = std::fs::read_to_string(path)?;
        let settings = serde_json::from_str(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_wraps_after_full_volume() {
        let mut settings = Settings {
            sfx_volume: 0.8,
            ..Default::default()
        };

        assert!((settings.cycle_sfx_volume() - 0.9).abs() < 1e-4);
        assert!((settings.cycle_sfx_volume() - 1.0).abs() < 1e-4);
        assert!((settings.cycle_sfx_volume() - MIN_CYCLED_VOLUME).abs() < 1e-6);
    }

    #[test]
    fn test_cycle_from_default() {
        let mut settings = Settings::default();
        assert_eq!(settings.cycle_sfx_volume(), MIN_CYCLED_VOLUME);
        assert_eq!(settings.sfx_label(), "SFX Volume: 10%");
    }

    #[test]
    fn test_muted_volume() {
        let settings = Settings {
            muted: true,
            ..Default::default()
        };
        assert_eq!(settings.effective_sfx_volume(), 0.0);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let settings = Settings {
            sfx_volume: 0.4,
            muted: true,
        };
        settings.save(&path).unwrap();

        assert_eq!(Settings::load(&path).unwrap(), settings);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "sfx_volume": 0.3, "music_volume": 0.7 }"#).unwrap();

        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded.sfx_volume, 0.3);
        assert!(!loaded.muted);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Settings::load(dir.path().join("nope.json")).unwrap();
        assert_eq!(loaded, Settings::default());
    }
}
