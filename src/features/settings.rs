//! Application settings persistence
//!
//! Handles loading and saving user preferences as pretty-printed JSON in the
//! platform config directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Carousel behavior tuning
    #[serde(default)]
    pub carousel: CarouselSettings,
    /// Display and interface settings
    #[serde(default)]
    pub display: DisplaySettings,
}

/// Carousel behavior tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselSettings {
    /// Boundary slides duplicated at each end of the track
    pub clone_count: usize,
    /// Auto-advance interval in milliseconds
    pub interval_ms: u64,
    /// Minimum drag distance (px) that commits a one-slide move
    pub commit_threshold: f32,
    /// Drag distance (px) beyond which a release is no longer a click
    pub click_threshold: f32,
    /// Slide width (px) used when no live measurement is available
    pub fallback_slide_width: f32,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            clone_count: 3,
            interval_ms: 3500,
            commit_threshold: 40.0,
            click_threshold: 5.0,
            fallback_slide_width: 300.0,
        }
    }
}

/// Display and interface settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Dark mode theme
    pub dark_mode: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self { dark_mode: true }
    }
}

impl From<&CarouselSettings> for crate::carousel::Tuning {
    fn from(settings: &CarouselSettings) -> Self {
        Self {
            clone_count: settings.clone_count,
            commit_threshold: settings.commit_threshold,
            click_threshold: settings.click_threshold,
            fallback_slide_width: settings.fallback_slide_width,
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "loopreel", "Loopreel")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        Self::file_path()
            .and_then(|path| Self::load_from_file(&path).ok())
            .unwrap_or_default()
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_thresholds() {
        let settings = Settings::default();
        assert_eq!(settings.carousel.clone_count, 3);
        assert_eq!(settings.carousel.interval_ms, 3500);
        assert_eq!(settings.carousel.commit_threshold, 40.0);
        assert_eq!(settings.carousel.click_threshold, 5.0);
        assert_eq!(settings.carousel.fallback_slide_width, 300.0);
    }

    #[test]
    fn partial_files_fall_back_per_section() {
        let settings: Settings = serde_json::from_str(r#"{"display":{"dark_mode":false}}"#)
            .expect("partial settings must parse");
        assert!(!settings.display.dark_mode);
        assert_eq!(settings.carousel.interval_ms, 3500);
    }

    #[test]
    fn round_trips_through_json() {
        let mut settings = Settings::default();
        settings.carousel.interval_ms = 5000;

        let json = serde_json::to_string(&settings).expect("serialize");
        let back: Settings = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.carousel.interval_ms, 5000);
    }
}
