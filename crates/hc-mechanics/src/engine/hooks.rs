//! Combat-tracker hooks that advance exhaustion cooldowns.
//!
//! The combat tracker itself lives outside the engine; it fires these as
//! notifications. Round advance winds the exhaust clocks down across every
//! character in the fight; turn advance frees the acting character's
//! attributes whose clocks have run out.

use hc_core::{AttributeStatus, Character, CooldownType};

/// A combat round ended: decrement every exhaust cooldown across the given
/// characters. Statuses are not touched here.
pub fn on_combat_round_advance<'a>(characters: impl IntoIterator<Item = &'a mut Character>) {
    for character in characters {
        for attribute in &mut character.attributes {
            if attribute.cooldown_type == CooldownType::Exhaust {
                attribute.cooldown = attribute.cooldown.saturating_sub(1);
            }
        }
    }
}

/// The acting character's turn came up: restore their exhausted attributes
/// whose cooldown has run out.
pub fn on_combat_turn_advance(character: &mut Character) {
    for attribute in &mut character.attributes {
        if attribute.cooldown_type == CooldownType::Exhaust && attribute.cooldown == 0 {
            attribute.set_status(AttributeStatus::Normal);
        }
    }
}
