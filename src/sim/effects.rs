//! Timed gameplay effects
//!
//! One countdown per effect. Activating an effect overwrites its remaining
//! time instead of extending it.

use serde::{Deserialize, Serialize};

/// Effects that change the gameplay rules while their timer runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectKind {
    /// Word spawning and word movement stop
    Freeze,
    /// Missed words cost no lives
    Shield,
}

impl EffectKind {
    pub const ALL: [EffectKind; 2] = [EffectKind::Freeze, EffectKind::Shield];

    pub fn as_str(&self) -> &'static str {
        match self {
            EffectKind::Freeze => "freeze",
            EffectKind::Shield => "shield",
        }
    }
}

/// Remaining ticks per effect (0 = inactive)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveEffects {
    pub freeze_ticks: u32,
    pub shield_ticks: u32,
}

impl ActiveEffects {
    /// Start (or restart) an effect for `duration_ticks`
    pub fn activate(&mut self, kind: EffectKind, duration_ticks: u32) {
        *self.slot_mut(kind) = duration_ticks;
        log::debug!("{} active for {} ticks", kind.as_str(), duration_ticks);
    }

    pub fn is_active(&self, kind: EffectKind) -> bool {
        self.remaining(kind) > 0
    }

    pub fn remaining(&self, kind: EffectKind) -> u32 {
        match kind {
            EffectKind::Freeze => self.freeze_ticks,
            EffectKind::Shield => self.shield_ticks,
        }
    }

    /// Count every running timer down by one tick
    pub fn decay(&mut self) {
        for kind in EffectKind::ALL {
            let slot = self.slot_mut(kind);
            if *slot > 0 {
                *slot -= 1;
                if *slot == 0 {
                    log::debug!("{} expired", kind.as_str());
                }
            }
        }
    }

    /// Stop every effect
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn slot_mut(&mut self, kind: EffectKind) -> &mut u32 {
        match kind {
            EffectKind::Freeze => &mut self.freeze_ticks,
            EffectKind::Shield => &mut self.shield_ticks,
        }
    }
}
