//! Falling entities: words and power-ups

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Length-based tier, used by the presentation layer for coloring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WordTier {
    Short,
    Medium,
    Long,
}

impl WordTier {
    pub fn for_text(text: &str) -> Self {
        match text.chars().count() {
            0..=4 => WordTier::Short,
            5..=7 => WordTier::Medium,
            _ => WordTier::Long,
        }
    }
}

/// A falling word.
///
/// Words have no speed of their own; the field moves every word by the
/// shared word speed.
#[derive(Debug, Clone)]
pub struct Word {
    pub id: u32,
    text: String,
    pub pos: Vec2,
    active: bool,
}

impl Word {
    pub fn new(id: u32, text: impl Into<String>, pos: Vec2) -> Self {
        Self {
            id,
            text: text.into(),
            pos,
            active: true,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tier(&self) -> WordTier {
        WordTier::for_text(&self.text)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Mark the word dead. Returns false if it already was.
    pub fn deactivate(&mut self) -> bool {
        std::mem::replace(&mut self.active, false)
    }

    /// Point used for power-up proximity checks after the word is typed
    pub fn reward_point(&self) -> Vec2 {
        Vec2::new(
            self.pos.x + self.text.chars().count() as f32 * GLYPH_ADVANCE,
            self.pos.y,
        )
    }

    pub fn is_past_miss_line(&self) -> bool {
        self.pos.y >= WORD_MISS_Y
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerUpKind {
    /// Stops word spawning and word movement for a while
    Freeze,
    /// Removes every word and power-up on screen
    Clear,
    /// One extra life
    Life,
    /// Missed words cost no lives for a while
    Shield,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 4] = [
        PowerUpKind::Freeze,
        PowerUpKind::Clear,
        PowerUpKind::Life,
        PowerUpKind::Shield,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PowerUpKind::Freeze => "freeze",
            PowerUpKind::Clear => "clear",
            PowerUpKind::Life => "life",
            PowerUpKind::Shield => "shield",
        }
    }
}

/// A falling power-up
#[derive(Debug, Clone)]
pub struct PowerUp {
    pub id: u32,
    pub kind: PowerUpKind,
    pub pos: Vec2,
    /// Constant fall speed, independent of the word speed
    pub speed: f32,
    pub radius: f32,
    active: bool,
}

impl PowerUp {
    pub fn new(id: u32, kind: PowerUpKind, pos: Vec2) -> Self {
        Self {
            id,
            kind,
            pos,
            speed: POWER_UP_SPEED,
            radius: POWER_UP_COLLECT_RADIUS,
            active: true,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Mark the power-up dead. Returns false if it already was.
    pub fn deactivate(&mut self) -> bool {
        std::mem::replace(&mut self.active, false)
    }

    /// Whether `point` lies strictly inside the collection radius
    pub fn in_reach(&self, point: Vec2) -> bool {
        self.pos.distance(point) < self.radius
    }

    pub fn has_left_field(&self) -> bool {
        self.pos.y >= POWER_UP_EXIT_Y
    }
}
