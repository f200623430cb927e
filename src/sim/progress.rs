//! Score, lives, level and typing metrics

use serde::Serialize;

use super::difficulty::DifficultyProfile;
use crate::consts::{SPEED_INCREASE_FACTOR, WORDS_FOR_LEVEL_UP};
use crate::ticks_to_secs;

/// Speed multiplier returned when no level-up happened
pub const NEUTRAL_SPEED_FACTOR: f32 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Progression {
    pub score: u64,
    pub lives: u32,
    pub level: u32,
    pub words_until_level_up: u32,
    pub total_chars_typed: u64,
    pub correct_words: u64,
    /// Tick at which the session started (for rate metrics)
    pub start_tick: u64,
    game_over: bool,
}

impl Progression {
    pub fn new(profile: &DifficultyProfile, now_tick: u64) -> Self {
        Self {
            score: 0,
            lives: profile.lives,
            level: 1,
            words_until_level_up: WORDS_FOR_LEVEL_UP,
            total_chars_typed: 0,
            correct_words: 0,
            start_tick: now_tick,
            game_over: profile.lives == 0,
        }
    }

    /// Reinitialize every counter from the profile
    pub fn reset(&mut self, profile: &DifficultyProfile, now_tick: u64) {
        *self = Self::new(profile, now_tick);
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Count a destroyed word. Returns the speed factor to apply to the
    /// word field: [`SPEED_INCREASE_FACTOR`] on level-up, otherwise neutral.
    pub fn record_match(&mut self) -> f32 {
        self.score += 1;
        self.correct_words += 1;
        self.words_until_level_up = self.words_until_level_up.saturating_sub(1);

        if self.words_until_level_up == 0 {
            self.level += 1;
            self.words_until_level_up = WORDS_FOR_LEVEL_UP;
            log::info!("Level up! Now level {}", self.level);
            SPEED_INCREASE_FACTOR
        } else {
            NEUTRAL_SPEED_FACTOR
        }
    }

    /// A submission that matched nothing. Scoring is unaffected.
    pub fn record_miss(&mut self) {}

    /// One printable character accepted into the input buffer
    pub fn record_keystroke(&mut self) {
        self.total_chars_typed += 1;
    }

    pub fn lose_life(&mut self) {
        if self.game_over {
            return;
        }
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.game_over = true;
            log::info!("Out of lives (score {}, level {})", self.score, self.level);
        }
    }

    pub fn gain_life(&mut self) {
        self.lives += 1;
    }

    /// Words per minute, counting five characters as one word.
    /// Elapsed time is floored at one second.
    pub fn typing_rate(&self, now_tick: u64) -> u32 {
        let elapsed_secs = ticks_to_secs(now_tick.saturating_sub(self.start_tick)).max(1.0);
        let words = self.total_chars_typed as f64 / 5.0;
        (words / (elapsed_secs / 60.0)).floor() as u32
    }

    /// Percentage in [0, 100].
    ///
    /// Counts every correct word as five characters regardless of its real
    /// length, so long words push the figure down and short ones up.
    pub fn accuracy(&self) -> u32 {
        if self.total_chars_typed == 0 {
            return 0;
        }
        let ratio = self.correct_words as f64 * 5.0 / self.total_chars_typed as f64;
        (ratio * 100.0).floor().min(100.0) as u32
    }

    /// Matches completed towards the next level
    pub fn level_progress(&self) -> u32 {
        WORDS_FOR_LEVEL_UP - self.words_until_level_up
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TICK_RATE;
    use crate::sim::difficulty::Difficulty;

    fn medium() -> Progression {
        Progression::new(&Difficulty::Medium.profile(), 0)
    }

    #[test]
    fn test_level_up_every_quota() {
        let mut progress = medium();
        for i in 1..=WORDS_FOR_LEVEL_UP * 3 {
            let factor = progress.record_match();
            if i % WORDS_FOR_LEVEL_UP == 0 {
                assert_eq!(factor, SPEED_INCREASE_FACTOR);
                assert_eq!(progress.words_until_level_up, WORDS_FOR_LEVEL_UP);
            } else {
                assert_eq!(factor, NEUTRAL_SPEED_FACTOR);
            }
        }
        assert_eq!(progress.level, 4);
        assert_eq!(progress.score, 15);
        assert_eq!(progress.correct_words, 15);
    }

    #[test]
    fn test_lose_life_clamps_and_latches() {
        let mut progress = medium();
        progress.lose_life();
        progress.lose_life();
        assert!(!progress.is_game_over());
        progress.lose_life();
        assert_eq!(progress.lives, 0);
        assert!(progress.is_game_over());
        progress.lose_life();
        assert_eq!(progress.lives, 0);
        assert!(progress.is_game_over());
    }

    #[test]
    fn test_typing_rate_floors_elapsed_at_one_second() {
        let mut progress = medium();
        for _ in 0..10 {
            progress.record_keystroke();
        }
        // 10 chars = 2 words in (floored) 1 second = 120 wpm
        assert_eq!(progress.typing_rate(0), 120);
        assert_eq!(progress.typing_rate(10), 120);
        // Same 2 words over one minute
        assert_eq!(progress.typing_rate(60 * TICK_RATE as u64), 2);
    }

    #[test]
    fn test_accuracy_approximation() {
        let mut progress = medium();
        assert_eq!(progress.accuracy(), 0);

        // "loop" typed correctly: 4 chars, but counted as 5
        for _ in 0..4 {
            progress.record_keystroke();
        }
        progress.record_match();
        assert_eq!(progress.accuracy(), 100);

        // "function" typed correctly: 12 chars total, 2 words -> 10/12
        for _ in 0..8 {
            progress.record_keystroke();
        }
        progress.record_match();
        assert_eq!(progress.accuracy(), 83);
    }

    #[test]
    fn test_reset_round_trip() {
        let mut progress = medium();
        progress.record_keystroke();
        progress.record_match();
        progress.lose_life();

        let hard = Difficulty::Hard.profile();
        progress.reset(&hard, 500);
        assert_eq!(progress.score, 0);
        assert_eq!(progress.lives, hard.lives);
        assert_eq!(progress.level, 1);
        assert_eq!(progress.accuracy(), 0);
        assert_eq!(progress.typing_rate(500), 0);
        assert!(!progress.is_game_over());
    }
}
