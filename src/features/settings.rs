//! Application settings persistence
//!
//! Handles saving and loading user preferences.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default player volume (0 to 100)
pub const DEFAULT_VOLUME: u8 = 70;

/// Default progress polling interval
pub const DEFAULT_PROGRESS_INTERVAL_MS: u64 = 1000;

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Playback settings
    #[serde(default)]
    pub playback: PlaybackSettings,
    /// Storage settings
    #[serde(default)]
    pub storage: StorageSettings,
}

/// Playback-related settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackSettings {
    /// Volume level (0 to 100)
    pub volume: u8,
    /// Pick a random queue entry when a song ends
    #[serde(default)]
    pub shuffle: bool,
    /// Replay the same entry when a song ends
    #[serde(default)]
    pub repeat: bool,
    /// How often the progress bar polls the player
    #[serde(default = "default_progress_interval")]
    pub progress_interval_ms: u64,
}

fn default_progress_interval() -> u64 {
    DEFAULT_PROGRESS_INTERVAL_MS
}

/// Storage settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StorageSettings {
    /// Database file override (None = `<data dir>/musicae.db`)
    pub database_path: Option<PathBuf>,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            volume: DEFAULT_VOLUME,
            shuffle: false,
            repeat: false,
            progress_interval_ms: DEFAULT_PROGRESS_INTERVAL_MS,
        }
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "musicae", "MusicAE")
}

/// Per-user data directory (database, session snapshots)
pub fn default_data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        let mut settings: Settings =
            serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))?;
        settings.playback.volume = settings.playback.volume.min(100);
        Ok(settings)
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

    /// Database file to open: the override when set, else inside `data_dir`
    pub fn database_path(&self, data_dir: &Path) -> PathBuf {
        self.storage
            .database_path
            .clone()
            .unwrap_or_else(|| data_dir.join("musicae.db"))
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone, Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}
