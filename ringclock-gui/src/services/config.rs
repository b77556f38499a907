//! GUI configuration service
//!
//! Loads window and display preferences. The file is only ever read.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Smallest frame interval accepted from the preferences file
pub const MIN_FRAME_INTERVAL_MS: u64 = 8;

/// Preference loading errors
#[derive(Error, Debug)]
pub enum PrefsError {
    #[error("Preferences file not found: {0}")]
    NotFound(String),

    #[error("Failed to read preferences: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse preferences: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// GUI configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GuiConfig {
    /// Initial window size
    pub window: WindowPrefs,

    /// Display preferences
    pub display: DisplayPrefs,
}

/// Initial window geometry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowPrefs {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowPrefs {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 720.0,
        }
    }
}

/// Display preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayPrefs {
    /// Redraw interval while the clocks run, in milliseconds
    pub frame_interval_ms: u64,

    /// Show the digital wall clock above the face
    pub show_digital_clock: bool,

    /// Draw a faint full-circle track behind each ring
    pub show_tracks: bool,
}

impl Default for DisplayPrefs {
    fn default() -> Self {
        Self {
            frame_interval_ms: 16,
            show_digital_clock: true,
            show_tracks: true,
        }
    }
}

impl DisplayPrefs {
    /// Frame interval with the lower bound applied
    pub fn frame_interval_ms(&self) -> u64 {
        self.frame_interval_ms.max(MIN_FRAME_INTERVAL_MS)
    }
}

impl GuiConfig {
    /// Get the config file path
    pub fn config_path() -> PathBuf {
        let config_dir = directories::ProjectDirs::from("", "", "ringclock")
            .map(|d| d.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".config/ringclock"));

        config_dir.join("gui.yaml")
    }

    /// Load config from the default location, falling back to defaults
    pub fn load() -> Self {
        Self::load_or_default(&Self::config_path())
    }

    /// Load config from a specific path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, PrefsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PrefsError::NotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::info!("No preferences at {:?}, using defaults", path);
            return Self::default();
        }

        match Self::load_from(path) {
            Ok(config) => {
                log::info!("Loaded preferences from {:?}", path);
                config
            }
            Err(e) => {
                log::warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = GuiConfig::default();
        assert_eq!(config.display.frame_interval_ms, 16);
        assert!(config.display.show_digital_clock);
        assert!(config.window.width > config.window.height);
    }

    #[test]
    fn test_frame_interval_floor() {
        let prefs = DisplayPrefs {
            frame_interval_ms: 1,
            ..Default::default()
        };
        assert_eq!(prefs.frame_interval_ms(), MIN_FRAME_INTERVAL_MS);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "display:\n  show_digital_clock: false").unwrap();

        let config = GuiConfig::load_from(file.path()).unwrap();
        assert!(!config.display.show_digital_clock);
        assert!(config.display.show_tracks);
        assert_eq!(config.window.height, 720.0);
    }

    #[test]
    fn test_missing_file() {
        let result = GuiConfig::load_from("/nonexistent/gui.yaml");
        assert!(matches!(result, Err(PrefsError::NotFound(_))));

        let config = GuiConfig::load_or_default(Path::new("/nonexistent/gui.yaml"));
        assert_eq!(config.display.frame_interval_ms, 16);
    }

    #[test]
    fn test_bad_yaml_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "display: [unclosed").unwrap();

        assert!(matches!(
            GuiConfig::load_from(file.path()),
            Err(PrefsError::Parse(_))
        ));
        let config = GuiConfig::load_or_default(file.path());
        assert!(config.display.show_tracks);
    }
}
