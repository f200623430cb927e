//! Typed-input resolution against falling words

use glam::Vec2;

use super::field::EntityField;

/// Outcome of submitting a typed string
#[derive(Debug, Clone, PartialEq)]
pub enum MatchResult {
    /// A word was destroyed; `reward_point` is where power-ups are collected
    Matched {
        word_id: u32,
        text: String,
        reward_point: Vec2,
    },
    Miss,
}

impl MatchResult {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchResult::Matched { .. })
    }

    pub fn reward_point(&self) -> Option<Vec2> {
        match self {
            MatchResult::Matched { reward_point, .. } => Some(*reward_point),
            MatchResult::Miss => None,
        }
    }
}

/// Match `typed` case-insensitively against the active words.
///
/// The first active word in spawn order with the same text is deactivated.
/// Nothing else in the field changes.
pub fn submit(field: &mut EntityField, typed: &str) -> MatchResult {
    let typed = typed.to_lowercase();

    let Some(word) = field
        .words
        .iter_mut()
        .find(|w| w.is_active() && w.text().to_lowercase() == typed)
    else {
        return MatchResult::Miss;
    };

    word.deactivate();
    log::debug!("Matched '{}' (id {})", word.text(), word.id);
    MatchResult::Matched {
        word_id: word.id,
        text: word.text().to_string(),
        reward_point: word.reward_point(),
    }
}
