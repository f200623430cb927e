//! Host settings
//!
//! Loaded from an optional JSON file named by `RETRO_TYPER_SETTINGS`, then
//! overridden by `RETRO_TYPER_SEED` and `RETRO_TYPER_DIFFICULTY`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sim::{Difficulty, DifficultySelector};

pub const SETTINGS_PATH_ENV: &str = "RETRO_TYPER_SETTINGS";
pub const SEED_ENV: &str = "RETRO_TYPER_SEED";
pub const DIFFICULTY_ENV: &str = "RETRO_TYPER_DIFFICULTY";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Host/loop settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed; random per run when absent
    pub seed: Option<u64>,
    /// Difficulty name picked by the autoplayer (easy/medium/hard)
    pub difficulty: Option<String>,
    /// Show the "press any key" screen after picking a difficulty
    pub press_to_start: bool,
    /// Let the built-in typist play
    pub autoplay: bool,
    /// Ticks between autoplayer keystrokes
    pub autoplay_interval_ticks: u32,
    /// Autoplayer dismisses the game-over screen and plays again
    pub autoplay_loop: bool,
    /// Stop after this many ticks
    pub max_ticks: Option<u64>,
    /// Pace ticks to wall-clock time; otherwise run as fast as possible
    pub realtime: bool,
    /// Log a JSON snapshot every N ticks at trace level (0 = never)
    pub snapshot_log_interval: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            difficulty: None,
            press_to_start: false,
            autoplay: true,
            autoplay_interval_ticks: 8,
            autoplay_loop: false,
            max_ticks: Some(60 * 60 * 5),
            realtime: false,
            snapshot_log_interval: 60,
        }
    }
}

impl Settings {
    /// Settings file + environment overrides
    pub fn load() -> Result<Self, SettingsError> {
        let mut settings = match std::env::var_os(SETTINGS_PATH_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };
        settings.apply_env(|key| std::env::var(key).ok());
        Ok(settings)
    }

    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Apply overrides read through `get` (the process environment in [`Settings::load`])
    pub fn apply_env(&mut self, get: impl Fn(&str) -> Option<String>) {
        if let Some(seed) = get(SEED_ENV) {
            match seed.parse() {
                Ok(seed) => self.seed = Some(seed),
                Err(_) => log::warn!("Ignoring {}={:?}: not a number", SEED_ENV, seed),
            }
        }
        if let Some(difficulty) = get(DIFFICULTY_ENV) {
            self.difficulty = Some(difficulty);
        }
    }

    /// Preset for the autoplayer; unknown names fall back to the default
    pub fn difficulty(&self) -> Difficulty {
        let mut selector = DifficultySelector::default();
        if let Some(name) = self.difficulty.as_deref() {
            selector.select(name);
        }
        selector.difficulty()
    }
}
