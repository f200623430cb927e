//! Game state and read-only views for the presentation layer

use glam::Vec2;
use serde::Serialize;

use super::corpus::WordCorpus;
use super::difficulty::{Difficulty, DifficultyProfile, DifficultySelector};
use super::effects::ActiveEffects;
use super::entities::{PowerUpKind, WordTier};
use super::field::EntityField;
use super::progress::Progression;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// Difficulty menu, waiting for 1/2/3
    SelectingDifficulty,
    /// Difficulty chosen, waiting for any key
    NotStarted,
    /// Active gameplay
    Playing,
    /// Run ended, any key returns to the menu
    GameOver,
}

/// Feedback for audio/effects. Drained once per frame by the host.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GameEvent {
    DifficultySelected(Difficulty),
    GameStarted,
    KeyTyped,
    WordMatched { text: String, position: Vec2 },
    Miss,
    LevelUp { level: u32 },
    PowerUpCollected { kind: PowerUpKind, position: Vec2 },
    LifeGained,
    LifeLost,
    GameOver { score: u64, level: u32 },
    Reset,
}

/// Complete simulation state. Owns every component; nothing is global.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation tick counter (the only clock the simulation reads)
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub difficulty: DifficultySelector,
    pub corpus: WordCorpus,
    /// Corpus filtered for the active difficulty
    pub word_pool: Vec<&'static str>,
    pub field: EntityField,
    pub effects: ActiveEffects,
    pub progress: Progression,
    /// Text typed since the last submission
    pub input: String,
    /// Tick of the most recent word spawn
    pub last_spawn_tick: Option<u64>,
    /// Route difficulty selection through [`GamePhase::NotStarted`]
    pub press_to_start: bool,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with the given seed, showing the menu
    pub fn new(seed: u64) -> Self {
        Self::with_corpus(seed, WordCorpus::default())
    }

    pub fn with_corpus(seed: u64, corpus: WordCorpus) -> Self {
        let difficulty = DifficultySelector::default();
        let profile = difficulty.current();
        Self {
            seed,
            time_ticks: 0,
            phase: GamePhase::SelectingDifficulty,
            word_pool: corpus.filtered(&profile),
            corpus,
            field: EntityField::new(seed, profile.word_speed),
            effects: ActiveEffects::default(),
            progress: Progression::new(&profile, 0),
            difficulty,
            input: String::new(),
            last_spawn_tick: None,
            press_to_start: false,
            events: Vec::new(),
        }
    }

    pub fn profile(&self) -> DifficultyProfile {
        self.difficulty.current()
    }

    /// Apply a difficulty and prepare a fresh run with it
    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty.set(difficulty);
        let profile = self.profile();
        self.word_pool = self.corpus.filtered(&profile);
        self.field.clear();
        self.field.reset_word_speed(profile.word_speed);
        self.effects.clear();
        self.progress.reset(&profile, self.time_ticks);
        self.input.clear();
        self.last_spawn_tick = None;
        log::info!(
            "Difficulty {}: speed {}, lives {}, spawn every {} ms, {} words",
            difficulty.as_str(),
            profile.word_speed,
            profile.lives,
            profile.spawn_delay_ms,
            self.word_pool.len()
        );
        self.push_event(GameEvent::DifficultySelected(difficulty));
    }

    /// Enter [`GamePhase::Playing`] and start the rate clock
    pub fn start_playing(&mut self) {
        self.progress.start_tick = self.time_ticks;
        self.phase = GamePhase::Playing;
        log::info!("Game started at tick {}", self.time_ticks);
        self.push_event(GameEvent::GameStarted);
    }

    /// Wipe the run and return to the difficulty menu
    pub fn reset_to_menu(&mut self) {
        let profile = self.profile();
        self.progress.reset(&profile, self.time_ticks);
        self.field.clear();
        self.field.reset_word_speed(profile.word_speed);
        self.effects.clear();
        self.input.clear();
        self.last_spawn_tick = None;
        self.phase = GamePhase::SelectingDifficulty;
        log::info!("Reset to difficulty menu");
        self.push_event(GameEvent::Reset);
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take the feedback events accumulated since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Read-only view for rendering. Inactive entities are left out.
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            tick: self.time_ticks,
            phase: self.phase,
            difficulty: self.difficulty.difficulty(),
            input: self.input.clone(),
            word_speed: self.field.word_speed(),
            words: self
                .field
                .active_words()
                .map(|w| WordView {
                    id: w.id,
                    text: w.text().to_string(),
                    pos: w.pos,
                    tier: w.tier(),
                })
                .collect(),
            power_ups: self
                .field
                .active_power_ups()
                .map(|p| PowerUpView {
                    id: p.id,
                    kind: p.kind,
                    pos: p.pos,
                })
                .collect(),
            effects: self.effects,
            progress: ProgressView {
                score: self.progress.score,
                lives: self.progress.lives,
                level: self.progress.level,
                words_until_level_up: self.progress.words_until_level_up,
                level_progress: self.progress.level_progress(),
                wpm: self.progress.typing_rate(self.time_ticks),
                accuracy: self.progress.accuracy(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WordView {
    pub id: u32,
    pub text: String,
    pub pos: Vec2,
    pub tier: WordTier,
}

#[derive(Debug, Clone, Serialize)]
pub struct PowerUpView {
    pub id: u32,
    pub kind: PowerUpKind,
    pub pos: Vec2,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgressView {
    pub score: u64,
    pub lives: u32,
    pub level: u32,
    pub words_until_level_up: u32,
    /// Matches completed towards the next level
    pub level_progress: u32,
    pub wpm: u32,
    pub accuracy: u32,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshot {
    pub tick: u64,
    pub phase: GamePhase,
    pub difficulty: Difficulty,
    pub input: String,
    pub word_speed: f32,
    pub words: Vec<WordView>,
    pub power_ups: Vec<PowerUpView>,
    pub effects: ActiveEffects,
    pub progress: ProgressView,
}
