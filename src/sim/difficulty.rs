//! Difficulty presets
//!
//! Each preset bundles the tuning constants for one run: fall speed,
//! starting lives, spawn cadence and the longest word allowed on screen.

use serde::{Deserialize, Serialize};

/// Named difficulty presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Menu shortcut: 1 = easy, 2 = medium, 3 = hard
    pub fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            1 => Some(Difficulty::Easy),
            2 => Some(Difficulty::Medium),
            3 => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn digit(&self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    /// Tuning constants for this preset
    pub fn profile(&self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile {
                word_speed: 0.6,
                lives: 5,
                spawn_delay_ms: 4000,
                max_word_length: 5,
            },
            Difficulty::Medium => DifficultyProfile {
                word_speed: 1.0,
                lives: 3,
                spawn_delay_ms: 3000,
                max_word_length: 8,
            },
            Difficulty::Hard => DifficultyProfile {
                word_speed: 1.5,
                lives: 2,
                spawn_delay_ms: 2200,
                max_word_length: 12,
            },
        }
    }
}

/// Immutable tuning snapshot for one difficulty
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    /// Word fall speed multiplier (pixels per tick)
    pub word_speed: f32,
    /// Starting lives
    pub lives: u32,
    /// Minimum time between word spawns
    pub spawn_delay_ms: u64,
    /// Longest word (in characters) that may spawn
    pub max_word_length: usize,
}

/// Holds the active preset for the session
#[derive(Debug, Clone, Default)]
pub struct DifficultySelector {
    current: Difficulty,
}

impl DifficultySelector {
    pub fn new(initial: Difficulty) -> Self {
        Self { current: initial }
    }

    /// Select a preset by name. Unknown names leave the selection unchanged.
    pub fn select(&mut self, name: &str) -> bool {
        match Difficulty::from_str(name) {
            Some(difficulty) => {
                self.set(difficulty);
                true
            }
            None => {
                log::warn!("Unknown difficulty '{}', keeping {}", name, self.current.as_str());
                false
            }
        }
    }

    pub fn set(&mut self, difficulty: Difficulty) {
        self.current = difficulty;
    }

    pub fn difficulty(&self) -> Difficulty {
        self.current
    }

    pub fn current(&self) -> DifficultyProfile {
        self.current.profile()
    }
}
