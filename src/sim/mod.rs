//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only, time is the tick counter
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering, audio or platform dependencies

pub mod autoplay;
pub mod collect;
pub mod corpus;
pub mod difficulty;
pub mod effects;
pub mod entities;
pub mod field;
pub mod matching;
pub mod progress;
pub mod state;
pub mod tick;

pub use autoplay::Autoplayer;
pub use collect::check_collection;
pub use corpus::{WORD_LIST, WordCorpus};
pub use difficulty::{Difficulty, DifficultyProfile, DifficultySelector};
pub use effects::{ActiveEffects, EffectKind};
pub use entities::{PowerUp, PowerUpKind, Word, WordTier};
pub use field::EntityField;
pub use matching::{MatchResult, submit};
pub use progress::{NEUTRAL_SPEED_FACTOR, Progression};
pub use state::{
    FrameSnapshot, GameEvent, GamePhase, GameState, PowerUpView, ProgressView, WordView,
};
pub use tick::{InputEvent, Key, TickInput, TickOutcome, tick};
