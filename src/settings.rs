//! Game settings and preferences
//!
//! Persisted as JSON next to the high score file. A missing or malformed
//! file silently falls back to defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Player-facing preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Show the FPS counter on the HUD
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            show_fps: false,
        }
    }
}

impl Settings {
    /// Load settings, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("Settings file malformed, using defaults: {}", e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Persist settings; failures are logged and ignored
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = fs::write(path, json) {
                    log::warn!("Settings save failed: {}", e);
                }
            }
            Err(e) => log::warn!("Settings serialize failed: {}", e),
        }
    }

    /// Effective volume for one-shot effects
    pub fn effective_sfx_volume(&self) -> f32 {
        (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
    }

    /// Effective volume for background music
    pub fn effective_music_volume(&self) -> f32 {
        (self.master_volume * self.music_volume).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("settings.json"));
        assert_eq!(settings.master_volume, 0.8);
        assert!(!settings.show_fps);
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut settings = Settings::default();
        settings.show_fps = true;
        settings.music_volume = 0.25;
        settings.save(&path);

        let loaded = Settings::load(&path);
        assert!(loaded.show_fps);
        assert_eq!(loaded.music_volume, 0.25);
    }

    #[test]
    fn test_effective_volumes_clamped() {
        let settings = Settings {
            master_volume: 0.5,
            sfx_volume: 1.0,
            music_volume: 0.5,
            show_fps: false,
        };
        assert_eq!(settings.effective_sfx_volume(), 0.5);
        assert_eq!(settings.effective_music_volume(), 0.25);
    }
}
