//! Retro Typer - a falling-word typing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, matching, effects, progression)
//! - `settings`: Host configuration (JSON file + environment overrides)
//!
//! Rendering and audio live outside this crate; they consume
//! [`sim::FrameSnapshot`] and [`sim::GameEvent`] values and feed back
//! [`sim::InputEvent`]s.

pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;

    /// Playfield dimensions
    pub const FIELD_WIDTH: f32 = 640.0;
    pub const FIELD_HEIGHT: f32 = 480.0;

    /// Word spawn area
    pub const WORD_SPAWN_MIN_X: f32 = 30.0;
    pub const WORD_SPAWN_MAX_X: f32 = FIELD_WIDTH - 70.0;
    pub const WORD_SPAWN_Y: f32 = -20.0;
    /// Active words at or below this line count as missed
    pub const WORD_MISS_Y: f32 = FIELD_HEIGHT - 30.0;
    /// New words keep this much horizontal distance from words near the top
    pub const WORD_MIN_SPACING: f32 = 80.0;
    /// Only words above this line take part in the spacing check
    pub const WORD_SPACING_ZONE_Y: f32 = 60.0;
    pub const WORD_PLACEMENT_ATTEMPTS: u32 = 8;
    /// Approximate glyph width, used to aim the reward point at the word center
    pub const GLYPH_ADVANCE: f32 = 6.0;

    /// Word speed (pixels per tick)
    pub const BASE_WORD_SPEED: f32 = 1.0;
    pub const MIN_WORD_SPEED: f32 = 0.1;
    pub const MAX_WORD_SPEED: f32 = BASE_WORD_SPEED * 3.0;

    /// Power-up spawn area and motion
    pub const POWER_UP_SPAWN_MIN_X: f32 = 50.0;
    pub const POWER_UP_SPAWN_MAX_X: f32 = FIELD_WIDTH - 50.0;
    pub const POWER_UP_SPAWN_Y: f32 = -30.0;
    pub const POWER_UP_SPEED: f32 = 0.8;
    pub const POWER_UP_SIZE: f32 = 16.0;
    pub const POWER_UP_COLLECT_RADIUS: f32 = POWER_UP_SIZE * 2.0;
    /// Power-ups at or below this line leave the field
    pub const POWER_UP_EXIT_Y: f32 = FIELD_HEIGHT + 30.0;
    /// Chance per tick of spawning a power-up
    pub const POWER_UP_SPAWN_CHANCE: f64 = 0.01;
    pub const MAX_LIVE_POWER_UPS: usize = 2;

    /// Progression
    pub const WORDS_FOR_LEVEL_UP: u32 = 5;
    pub const SPEED_INCREASE_FACTOR: f32 = 1.1;

    /// Effect durations (ticks)
    pub const FREEZE_DURATION_TICKS: u32 = 5 * TICK_RATE;
    pub const SHIELD_DURATION_TICKS: u32 = 10 * TICK_RATE;

    /// Input buffer capacity (characters)
    pub const MAX_INPUT_LEN: usize = 15;

    /// Corpus fallback
    pub const MIN_FILTERED_WORDS: usize = 10;
    pub const FALLBACK_WORD_COUNT: usize = 20;
}

/// Convert a tick count to elapsed milliseconds
#[inline]
pub fn ticks_to_ms(ticks: u64) -> u64 {
    ticks * 1000 / consts::TICK_RATE as u64
}

/// Convert a tick count to elapsed seconds
#[inline]
pub fn ticks_to_secs(ticks: u64) -> f64 {
    ticks as f64 / consts::TICK_RATE as f64
}
