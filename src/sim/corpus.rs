//! Static word pool and difficulty filtering

use super::difficulty::DifficultyProfile;
use crate::consts::{FALLBACK_WORD_COUNT, MIN_FILTERED_WORDS};

/// Curated word list, short words first
pub const WORD_LIST: &[&str] = &[
    // Short easy words (2-5 letters)
    "cat", "dog", "run", "jump", "code", "game", "play", "win", "fun", "cool", "fast", "slow",
    "big", "small", "red", "blue", "green", "black", "white", "good", "bad", "new", "old", "hot",
    "cold", "yes", "no", "go", "stop",
    // Medium words
    "python", "coding", "gaming", "retro", "pixel", "arcade", "classic", "typing", "speed",
    "score", "level", "power", "shield", "freeze", "clear", "bonus", "combo", "chain", "blast",
    "burst", "flash", "quick", "rapid", "turbo", "boost", "super", "mega", "ultra",
    // Programming terms
    "function", "variable", "loop", "array", "string", "integer", "boolean", "object", "class",
    "method", "debug", "compile", "execute", "syntax", "algorithm", "database", "network",
    "server", "client", "browser",
    // Longer challenging words
    "programming", "computer", "keyboard", "monitor", "processor", "memory", "graphics",
    "software", "hardware", "internet", "developer", "framework", "interface", "structure",
    "directory", "exception", "condition",
];

/// Read-only view over a word pool
#[derive(Debug, Clone, Copy)]
pub struct WordCorpus {
    words: &'static [&'static str],
}

impl Default for WordCorpus {
    fn default() -> Self {
        Self { words: WORD_LIST }
    }
}

impl WordCorpus {
    pub fn new(words: &'static [&'static str]) -> Self {
        Self { words }
    }

    pub fn words(&self) -> &'static [&'static str] {
        self.words
    }

    /// Words no longer than the profile allows.
    ///
    /// If fewer than [`MIN_FILTERED_WORDS`] survive, the first
    /// [`FALLBACK_WORD_COUNT`] words of the full pool are returned instead.
    pub fn filtered(&self, profile: &DifficultyProfile) -> Vec<&'static str> {
        let filtered: Vec<&'static str> = self
            .words
            .iter()
            .copied()
            .filter(|w| w.chars().count() <= profile.max_word_length)
            .collect();

        if filtered.len() >= MIN_FILTERED_WORDS {
            filtered
        } else {
            log::debug!(
                "Only {} words fit max length {}, falling back to first {}",
                filtered.len(),
                profile.max_word_length,
                FALLBACK_WORD_COUNT
            );
            self.words.iter().copied().take(FALLBACK_WORD_COUNT).collect()
        }
    }
}
