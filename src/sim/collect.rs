//! Power-up collection by typed words

use glam::Vec2;

use super::entities::PowerUpKind;
use super::field::EntityField;

/// Collect the first active power-up whose radius contains `point`.
///
/// Overlapping power-ups are resolved in spawn order; only one is
/// collected per call.
pub fn check_collection(field: &mut EntityField, point: Vec2) -> Option<PowerUpKind> {
    let power_up = field
        .power_ups
        .iter_mut()
        .find(|p| p.is_active() && p.in_reach(point))?;

    power_up.deactivate();
    log::debug!(
        "Collected {} power-up (id {}) at distance {:.1}",
        power_up.kind.as_str(),
        power_up.id,
        power_up.pos.distance(point)
    );
    Some(power_up.kind)
}
