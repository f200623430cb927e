//! Live entity collections
//!
//! Owns every falling word and power-up. Entities are deactivated by
//! matching, collection or falling off the field, and purged on the next
//! [`EntityField::purge`] pass. Iteration is always in spawn order.

use glam::Vec2;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::entities::{PowerUp, PowerUpKind, Word};
use crate::consts::*;

#[derive(Debug, Clone)]
pub struct EntityField {
    /// Words in spawn order
    pub words: Vec<Word>,
    /// Power-ups in spawn order
    pub power_ups: Vec<PowerUp>,
    /// Shared fall speed of every word (pixels per tick)
    word_speed: f32,
    rng: Pcg32,
    next_id: u32,
}

impl EntityField {
    pub fn new(seed: u64, word_speed: f32) -> Self {
        Self {
            words: Vec::new(),
            power_ups: Vec::new(),
            word_speed: clamp_speed(word_speed),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn word_speed(&self) -> f32 {
        self.word_speed
    }

    /// Set the shared word speed, clamped to the allowed range
    pub fn set_word_speed(&mut self, value: f32) {
        if !value.is_finite() {
            log::warn!("Ignoring non-finite word speed {}", value);
            return;
        }
        self.word_speed = clamp_speed(value);
    }

    /// Multiply the shared word speed (level-up scaling)
    pub fn scale_word_speed(&mut self, factor: f32) {
        self.set_word_speed(self.word_speed * factor);
    }

    pub fn reset_word_speed(&mut self, baseline: f32) {
        self.set_word_speed(baseline);
    }

    /// Spawn a random word from `pool` near the top of the field.
    ///
    /// The horizontal position is re-rolled while it lands too close to
    /// another active word that is still near the top; after
    /// [`WORD_PLACEMENT_ATTEMPTS`] re-rolls the last candidate is kept.
    pub fn spawn_word(&mut self, pool: &[&str]) -> Option<u32> {
        let text = (*pool.choose(&mut self.rng)?).to_string();

        let mut x = self.random_word_x();
        for _ in 0..WORD_PLACEMENT_ATTEMPTS {
            if !self.crowds_top(x) {
                break;
            }
            x = self.random_word_x();
        }

        let id = self.push_word(text, Vec2::new(x, WORD_SPAWN_Y));
        if let Some(word) = self.words.last() {
            log::debug!("Spawned word '{}' at x={:.0}", word.text(), x);
        }
        Some(id)
    }

    /// Insert a word at an exact position
    pub fn push_word(&mut self, text: impl Into<String>, pos: Vec2) -> u32 {
        let id = self.next_entity_id();
        self.words.push(Word::new(id, text, pos));
        id
    }

    /// Roll for a power-up spawn. At most [`MAX_LIVE_POWER_UPS`] may be live.
    pub fn try_spawn_power_up(&mut self) -> Option<PowerUpKind> {
        if !self.rng.random_bool(POWER_UP_SPAWN_CHANCE) {
            return None;
        }
        if self.active_power_ups().count() >= MAX_LIVE_POWER_UPS {
            return None;
        }

        let kind = *PowerUpKind::ALL.choose(&mut self.rng)?;
        let x = self
            .rng
            .random_range(POWER_UP_SPAWN_MIN_X..POWER_UP_SPAWN_MAX_X);
        self.push_power_up(kind, Vec2::new(x, POWER_UP_SPAWN_Y));
        log::debug!("Spawned {} power-up at x={:.0}", kind.as_str(), x);
        Some(kind)
    }

    /// Insert a power-up at an exact position
    pub fn push_power_up(&mut self, kind: PowerUpKind, pos: Vec2) -> u32 {
        let id = self.next_entity_id();
        self.power_ups.push(PowerUp::new(id, kind, pos));
        id
    }

    /// Move every active word down by the shared speed, then sweep the
    /// miss line. Returns the number of words missed.
    pub fn advance_words(&mut self) -> u32 {
        let speed = self.word_speed;
        for word in self.words.iter_mut().filter(|w| w.is_active()) {
            word.pos.y += speed;
        }
        self.sweep_missed()
    }

    /// Move every active power-up by its own speed; those leaving the
    /// field are deactivated.
    pub fn advance_power_ups(&mut self) {
        for power_up in self.power_ups.iter_mut().filter(|p| p.is_active()) {
            power_up.pos.y += power_up.speed;
            if power_up.has_left_field() {
                power_up.deactivate();
            }
        }
    }

    /// Advance words and power-ups. Returns the number of words missed.
    pub fn advance(&mut self) -> u32 {
        self.advance_power_ups();
        self.advance_words()
    }

    /// Deactivate active words at or past the miss line. Returns how many.
    pub fn sweep_missed(&mut self) -> u32 {
        let mut missed = 0;
        for word in self.words.iter_mut() {
            if word.is_active() && word.is_past_miss_line() && word.deactivate() {
                log::debug!("Missed word '{}'", word.text());
                missed += 1;
            }
        }
        missed
    }

    /// Drop inactive entities
    pub fn purge(&mut self) {
        self.words.retain(|w| w.is_active());
        self.power_ups.retain(|p| p.is_active());
    }

    /// Deactivate and purge everything
    pub fn clear(&mut self) {
        for word in &mut self.words {
            word.deactivate();
        }
        for power_up in &mut self.power_ups {
            power_up.deactivate();
        }
        self.purge();
    }

    pub fn active_words(&self) -> impl Iterator<Item = &Word> {
        self.words.iter().filter(|w| w.is_active())
    }

    pub fn active_power_ups(&self) -> impl Iterator<Item = &PowerUp> {
        self.power_ups.iter().filter(|p| p.is_active())
    }

    fn random_word_x(&mut self) -> f32 {
        self.rng.random_range(WORD_SPAWN_MIN_X..WORD_SPAWN_MAX_X)
    }

    /// True if `x` is too close to an active word still near the top
    fn crowds_top(&self, x: f32) -> bool {
        self.active_words()
            .filter(|w| w.pos.y < WORD_SPACING_ZONE_Y)
            .any(|w| (w.pos.x - x).abs() < WORD_MIN_SPACING)
    }
}

fn clamp_speed(value: f32) -> f32 {
    value.clamp(MIN_WORD_SPEED, MAX_WORD_SPEED)
}
