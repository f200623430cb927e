//! Fixed timestep simulation tick
//!
//! Input events for the tick are applied first, in order, then the
//! simulation advances one step. Nothing here reads a wall clock.

use serde::{Deserialize, Serialize};

use super::collect::check_collection;
use super::difficulty::Difficulty;
use super::effects::EffectKind;
use super::entities::PowerUpKind;
use super::matching::{MatchResult, submit};
use super::progress::NEUTRAL_SPEED_FACTOR;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;
use crate::ticks_to_ms;

/// A key press as seen by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    /// Number-row digit 0-9; selects the difficulty on the menu
    Digit(u8),
    /// Any other printable character
    Char(char),
    Backspace,
    Enter,
    /// Any other key; only useful for dismissing screens
    Other,
}

impl Key {
    /// Key for a typed character. ASCII digits become [`Key::Digit`].
    pub fn from_char(c: char) -> Self {
        match c.to_digit(10) {
            Some(d) => Key::Digit(d as u8),
            None => Key::Char(c),
        }
    }

    /// Character this key adds to the input buffer, if any
    pub fn as_char(&self) -> Option<char> {
        match *self {
            Key::Digit(d) => char::from_digit(u32::from(d), 10),
            Key::Char(c) => Some(c),
            Key::Backspace | Key::Enter | Key::Other => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
}

/// Input events drained for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub events: Vec<InputEvent>,
}

impl TickInput {
    pub fn key(key: Key) -> Self {
        Self {
            events: vec![InputEvent::KeyDown(key)],
        }
    }

    /// One key event per character of `text`
    pub fn typed(text: &str) -> Self {
        Self {
            events: text
                .chars()
                .map(|c| InputEvent::KeyDown(Key::from_char(c)))
                .collect(),
        }
    }

    /// Type `text` and press Enter
    pub fn submit(text: &str) -> Self {
        let mut input = Self::typed(text);
        input.events.push(InputEvent::KeyDown(Key::Enter));
        input
    }

    pub fn quit() -> Self {
        Self {
            events: vec![InputEvent::Quit],
        }
    }
}

/// What happened during one tick, for the host loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Host should stop after this tick
    pub quit: bool,
    /// Words that crossed the miss line this tick
    pub missed_words: u32,
    /// Lives actually lost this tick (0 while shielded)
    pub lives_lost: u32,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) -> TickOutcome {
    let mut outcome = TickOutcome::default();
    state.time_ticks += 1;

    for event in &input.events {
        match *event {
            InputEvent::Quit => {
                log::info!("Quit requested at tick {}", state.time_ticks);
                outcome.quit = true;
            }
            InputEvent::KeyDown(key) => handle_key(state, key),
        }
    }

    state.effects.decay();

    if outcome.quit {
        return outcome;
    }

    if state.phase == GamePhase::Playing {
        step(state, &mut outcome);
    }

    outcome
}

fn handle_key(state: &mut GameState, key: Key) {
    match state.phase {
        GamePhase::SelectingDifficulty => {
            let Key::Digit(digit) = key else { return };
            let Some(difficulty) = Difficulty::from_digit(digit) else {
                return;
            };
            state.select_difficulty(difficulty);
            if state.press_to_start {
                state.phase = GamePhase::NotStarted;
            } else {
                state.start_playing();
            }
        }
        GamePhase::NotStarted => state.start_playing(),
        GamePhase::GameOver => state.reset_to_menu(),
        GamePhase::Playing => handle_typing(state, key),
    }
}

fn handle_typing(state: &mut GameState, key: Key) {
    match key {
        Key::Digit(_) | Key::Char(_) => {
            let Some(c) = key.as_char() else { return };
            if c.is_control() || state.input.chars().count() >= MAX_INPUT_LEN {
                return;
            }
            state.input.push(c);
            state.progress.record_keystroke();
            state.push_event(GameEvent::KeyTyped);
        }
        Key::Backspace => {
            state.input.pop();
        }
        Key::Enter => submit_input(state),
        Key::Other => {}
    }
}

fn submit_input(state: &mut GameState) {
    let typed = state.input.trim().to_string();
    if typed.is_empty() {
        return;
    }

    match submit(&mut state.field, &typed) {
        MatchResult::Matched {
            text, reward_point, ..
        } => {
            state.push_event(GameEvent::WordMatched {
                text,
                position: reward_point,
            });

            let factor = state.progress.record_match();
            if factor > NEUTRAL_SPEED_FACTOR {
                state.push_event(GameEvent::LevelUp {
                    level: state.progress.level,
                });
            }
            state.field.scale_word_speed(factor);

            if let Some(kind) = check_collection(&mut state.field, reward_point) {
                state.push_event(GameEvent::PowerUpCollected {
                    kind,
                    position: reward_point,
                });
                apply_power_up(state, kind);
            }
        }
        MatchResult::Miss => {
            state.progress.record_miss();
            state.push_event(GameEvent::Miss);
        }
    }

    state.input.clear();
}

fn apply_power_up(state: &mut GameState, kind: PowerUpKind) {
    match kind {
        PowerUpKind::Freeze => state
            .effects
            .activate(EffectKind::Freeze, FREEZE_DURATION_TICKS),
        PowerUpKind::Clear => state.field.clear(),
        PowerUpKind::Life => {
            state.progress.gain_life();
            state.push_event(GameEvent::LifeGained);
        }
        PowerUpKind::Shield => state
            .effects
            .activate(EffectKind::Shield, SHIELD_DURATION_TICKS),
    }
}

/// One simulation step while playing
fn step(state: &mut GameState, outcome: &mut TickOutcome) {
    state.field.purge();

    // Power-ups keep moving during a freeze
    state.field.advance_power_ups();
    state.field.try_spawn_power_up();

    let missed = if state.effects.is_active(EffectKind::Freeze) {
        state.field.sweep_missed()
    } else {
        spawn_word_if_due(state);
        state.field.advance_words()
    };
    outcome.missed_words = missed;

    if missed > 0 {
        if state.effects.is_active(EffectKind::Shield) {
            log::debug!("Shield absorbed {} missed word(s)", missed);
        } else {
            for _ in 0..missed {
                if state.progress.is_game_over() {
                    break;
                }
                state.progress.lose_life();
                outcome.lives_lost += 1;
                state.push_event(GameEvent::LifeLost);
            }
        }
    }

    if state.progress.is_game_over() {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Game over at tick {}: score {}, level {}, {} wpm, {}% accuracy",
            state.time_ticks,
            state.progress.score,
            state.progress.level,
            state.progress.typing_rate(state.time_ticks),
            state.progress.accuracy()
        );
        state.push_event(GameEvent::GameOver {
            score: state.progress.score,
            level: state.progress.level,
        });
    }
}

fn spawn_word_if_due(state: &mut GameState) {
    let now = state.time_ticks;
    let due = match state.last_spawn_tick {
        None => true,
        Some(last) => ticks_to_ms(now.saturating_sub(last)) >= state.profile().spawn_delay_ms,
    };
    if due && state.field.spawn_word(&state.word_pool).is_some() {
        state.last_spawn_tick = Some(now);
    }
}
