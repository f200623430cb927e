//! Attract mode: a scripted typist that plays the game
//!
//! Reads the state and produces ordinary input events, so the simulation
//! cannot tell it apart from a player.

use std::collections::VecDeque;

use super::difficulty::Difficulty;
use super::state::{GamePhase, GameState};
use super::tick::{InputEvent, Key, TickInput};

#[derive(Debug, Clone)]
pub struct Autoplayer {
    /// Preset picked on the difficulty menu
    pub difficulty: Difficulty,
    /// Ticks between keystrokes
    pub keystroke_interval: u32,
    /// Dismiss the game-over screen and play again
    pub restart_after_game_over: bool,
    pending: VecDeque<Key>,
    target: Option<u32>,
    cooldown: u32,
}

impl Autoplayer {
    pub fn new(difficulty: Difficulty, keystroke_interval: u32) -> Self {
        Self {
            difficulty,
            keystroke_interval,
            restart_after_game_over: false,
            pending: VecDeque::new(),
            target: None,
            cooldown: 0,
        }
    }

    /// Input for the next tick
    pub fn next_input(&mut self, state: &GameState) -> TickInput {
        match state.phase {
            GamePhase::SelectingDifficulty => {
                self.forget();
                TickInput::key(Key::Digit(self.difficulty.digit()))
            }
            GamePhase::NotStarted => TickInput::key(Key::Other),
            GamePhase::GameOver => {
                self.forget();
                if self.restart_after_game_over {
                    TickInput::key(Key::Other)
                } else {
                    TickInput::default()
                }
            }
            GamePhase::Playing => self.type_next(state),
        }
    }

    fn type_next(&mut self, state: &GameState) -> TickInput {
        if self.cooldown > 0 {
            self.cooldown -= 1;
            return TickInput::default();
        }

        // Target vanished (missed or cleared): erase what was typed so far
        let target_alive = self
            .target
            .is_some_and(|id| state.field.active_words().any(|w| w.id == id));
        if self.target.is_some() && !target_alive {
            self.forget();
            self.pending
                .extend(std::iter::repeat_n(Key::Backspace, state.input.chars().count()));
        }

        if self.pending.is_empty() && state.input.is_empty() {
            // Most dangerous word first: the one closest to the miss line
            if let Some(word) = state
                .field
                .active_words()
                .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
            {
                self.target = Some(word.id);
                self.pending.extend(word.text().chars().map(Key::from_char));
                self.pending.push_back(Key::Enter);
            }
        }

        match self.pending.pop_front() {
            Some(key) => {
                if key == Key::Enter {
                    self.target = None;
                }
                self.cooldown = self.keystroke_interval;
                TickInput {
                    events: vec![InputEvent::KeyDown(key)],
                }
            }
            None => TickInput::default(),
        }
    }

    fn forget(&mut self) {
        self.pending.clear();
        self.target = None;
        self.cooldown = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::tick::tick;
    use glam::Vec2;

    #[test]
    fn test_selects_configured_difficulty() {
        let mut state = GameState::new(5);
        let mut bot = Autoplayer::new(Difficulty::Easy, 0);
        let input = bot.next_input(&state);
        tick(&mut state, &input);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.difficulty.difficulty(), Difficulty::Easy);
    }

    #[test]
    fn test_types_lowest_word() {
        let mut state = GameState::new(5);
        let mut bot = Autoplayer::new(Difficulty::Medium, 0);
        let input = bot.next_input(&state);
        tick(&mut state, &input);

        state.field.clear();
        state.field.push_word("high", Vec2::new(100.0, 10.0));
        state.field.push_word("low", Vec2::new(300.0, 200.0));
        state.last_spawn_tick = Some(state.time_ticks);

        for _ in 0..4 {
            let input = bot.next_input(&state);
            tick(&mut state, &input);
        }
        assert_eq!(state.progress.score, 1);
        let remaining: Vec<_> = state.field.active_words().map(|w| w.text().to_string()).collect();
        assert_eq!(remaining, vec!["high".to_string()]);
    }

    #[test]
    fn test_erases_when_target_disappears() {
        let mut state = GameState::new(5);
        let mut bot = Autoplayer::new(Difficulty::Medium, 0);
        let input = bot.next_input(&state);
        tick(&mut state, &input);

        state.field.clear();
        state.field.push_word("shield", Vec2::new(100.0, 100.0));
        state.last_spawn_tick = Some(state.time_ticks);

        for _ in 0..2 {
            let input = bot.next_input(&state);
            tick(&mut state, &input);
        }
        assert_eq!(state.input, "sh");

        state.field.clear();
        for _ in 0..2 {
            let input = bot.next_input(&state);
            tick(&mut state, &input);
        }
        assert!(state.input.is_empty());
    }

    #[test]
    fn test_keystroke_interval() {
        let mut state = GameState::new(5);
        let mut bot = Autoplayer::new(Difficulty::Medium, 2);
        let input = bot.next_input(&state);
        tick(&mut state, &input);

        state.field.clear();
        state.field.push_word("go", Vec2::new(100.0, 100.0));
        state.last_spawn_tick = Some(state.time_ticks);

        let typed: Vec<usize> = (0..6)
            .map(|_| {
                let input = bot.next_input(&state);
                tick(&mut state, &input);
                state.input.len()
            })
            .collect();
        assert_eq!(typed, vec![1, 1, 1, 2, 2, 2]);
    }

    #[test]
    fn test_game_over_restart_when_looping() {
        for looping in [false, true] {
            let mut state = GameState::new(5);
            let mut bot = Autoplayer::new(Difficulty::Hard, 0);
            bot.restart_after_game_over = looping;
            let input = bot.next_input(&state);
            tick(&mut state, &input);

            state.field.clear();
            for x in [100.0, 300.0] {
                state.field.push_word("late", Vec2::new(x, crate::consts::WORD_MISS_Y));
            }
            tick(&mut state, &TickInput::default());
            assert_eq!(state.phase, GamePhase::GameOver);

            let input = bot.next_input(&state);
            tick(&mut state, &input);
            let expected = if looping {
                GamePhase::SelectingDifficulty
            } else {
                GamePhase::GameOver
            };
            assert_eq!(state.phase, expected);
        }
    }
}
