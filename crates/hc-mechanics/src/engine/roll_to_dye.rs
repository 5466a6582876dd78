//! Roll to Dye and its Recovery Roll specialization.
//!
//! Both share one procedure: roll a d6 per usable attribute (the existing
//! swing is carried over at its locked-in value), show the table, tick
//! ignition cooldowns, let the player lock a new swing, then total. They
//! differ only in how the total is computed and in what happens to it.

use hc_core::{Character, CharacterPatch};

use super::Engine;
use crate::dice::{DiceRoller, ExtraDice};
use crate::error::MechResult;
use crate::message::{
    AttributeDieReport, AttributeSnapshot, DyeDiceReport, DyeReport, Message, SwingReport,
};
use crate::ports::{Choice, ChoiceOption, ChoicePrompt, ResultPublisher};

/// One attribute's die during a Roll to Dye. Lives only for the duration of
/// the procedure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeDie {
    /// The attribute the die belongs to.
    pub attribute_id: hc_core::AttributeId,
    /// The attribute's name at roll time.
    pub name: String,
    /// The attribute's modifier at roll time.
    pub modifier: u32,
    /// The die value (0 when the attribute could not roll).
    pub roll: u32,
    /// Carried over from the existing swing rather than freshly rolled.
    pub from_swing: bool,
    /// The attribute was usable when the die was rolled.
    pub available: bool,
}

impl AttributeDie {
    /// The swing value this die would lock in.
    pub fn swing_value(&self) -> u32 {
        self.roll + self.modifier
    }

    fn report(&self) -> AttributeDieReport {
        AttributeDieReport {
            attribute: AttributeSnapshot {
                id: self.attribute_id,
                name: self.name.clone(),
                modifier: self.modifier,
            },
            roll: self.roll,
            from_swing: self.from_swing,
        }
    }
}

/// How a Roll to Dye totals its available dice.
#[derive(Debug, Clone, Copy)]
enum DyeTotal {
    /// Sum raw rolls, then add only the swing die's modifier.
    OnlySwingModifier,
    /// Sum each die's roll plus its own attribute's modifier.
    EachDieModifier,
}

impl DyeTotal {
    fn total(self, available: &[AttributeDie], swing_die: Option<&AttributeDie>) -> i32 {
        match self {
            Self::OnlySwingModifier => {
                let rolls: i32 = available.iter().map(|die| die.roll as i32).sum();
                rolls + swing_die.map(|die| die.modifier as i32).unwrap_or(0)
            }
            Self::EachDieModifier => available
                .iter()
                .map(|die| (die.roll + die.modifier) as i32)
                .sum(),
        }
    }
}

impl<R, C, P> Engine<R, C, P>
where
    R: DiceRoller,
    C: ChoicePrompt,
    P: ResultPublisher,
{
    /// Perform a Roll to Dye and publish the outcome. Returns the total.
    pub fn roll_to_dye(
        &mut self,
        character: &mut Character,
        extra: Option<&ExtraDice>,
    ) -> MechResult<i32> {
        self.roll_to_dye_impl(character, "Roll to Dye", DyeTotal::OnlySwingModifier, extra)
    }

    /// Perform a Recovery Roll: a Roll to Dye that counts every die's
    /// modifier and heals the character by the total, up to full health.
    pub fn recovery_roll(
        &mut self,
        character: &mut Character,
        extra: Option<&ExtraDice>,
    ) -> MechResult<i32> {
        let total =
            self.roll_to_dye_impl(character, "Recovery Roll", DyeTotal::EachDieModifier, extra)?;
        *character =
            character.apply(&CharacterPatch::health_value(character.health.value + total))?;
        Ok(total)
    }

    fn roll_to_dye_impl(
        &mut self,
        character: &mut Character,
        title: &str,
        strategy: DyeTotal,
        extra: Option<&ExtraDice>,
    ) -> MechResult<i32> {
        let existing = character.swing_attribute().map(|attribute| AttributeDie {
            attribute_id: attribute.id,
            name: attribute.name.clone(),
            modifier: attribute.modifier,
            roll: character
                .swing
                .map(|swing| swing.value)
                .unwrap_or(0)
                .saturating_sub(attribute.modifier),
            from_swing: true,
            available: attribute.is_normal(),
        });

        let mut dice = Vec::with_capacity(character.attributes.len());
        for attribute in &character.attributes {
            match &existing {
                Some(die) if die.attribute_id == attribute.id => dice.push(die.clone()),
                _ => {
                    let (roll, available) = if attribute.is_normal() {
                        (self.roller.roll_die(6), true)
                    } else {
                        (0, false)
                    };
                    dice.push(AttributeDie {
                        attribute_id: attribute.id,
                        name: attribute.name.clone(),
                        modifier: attribute.modifier,
                        roll,
                        from_swing: false,
                        available,
                    });
                }
            }
        }

        let extra_roll = extra
            .and_then(|extra| extra.to_effect.as_ref())
            .map(|formula| formula.roll(&mut self.roller));

        self.publisher.publish(&Message::DyeDice(DyeDiceReport {
            title: title.to_string(),
            dice: dice.iter().map(AttributeDie::report).collect(),
            extra: extra_roll.clone(),
        }));

        // Availability was fixed when the dice were rolled; an attribute
        // freed by this tick sits the rest of the roll out.
        let available: Vec<AttributeDie> = dice.iter().filter(|die| die.available).cloned().collect();
        for attribute in &mut character.attributes {
            attribute.tick_ignition_cooldown();
        }

        let chosen = if available.is_empty() {
            None
        } else {
            let options: Vec<ChoiceOption> = available
                .iter()
                .map(|die| {
                    ChoiceOption::new(
                        die.attribute_id.0.to_string(),
                        format!("{}: {}", die.name, die.swing_value()),
                    )
                })
                .collect();
            match self.prompt.choose(title, &options) {
                Choice::Dismissed => None,
                Choice::Selected(key) => Some(
                    available
                        .iter()
                        .find(|die| die.attribute_id.0.to_string() == key)
                        .cloned()
                        .ok_or_else(|| super::unknown_key_error(&key))?,
                ),
            }
        };

        if let Some(die) = &chosen {
            self.set_swing(character, die.attribute_id, die.swing_value())?;
        }

        let swing_die = chosen.as_ref().or(existing.as_ref());
        let total = strategy.total(&available, swing_die)
            + extra_roll.as_ref().map(|roll| roll.total).unwrap_or(0);

        self.publisher.publish(&Message::DyeResult(DyeReport {
            title: title.to_string(),
            total,
            swing: swing_die.map(|die| SwingReport {
                attribute: AttributeSnapshot {
                    id: die.attribute_id,
                    name: die.name.clone(),
                    modifier: die.modifier,
                },
                value: die.swing_value(),
            }),
        }));

        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use hc_core::{Attribute, AttributeStatus, Character, CooldownType, Track};

    use super::super::testing::{RecordingPublisher, Scripted, ScriptedPrompt};
    use super::*;
    use crate::dice::ScriptedRoller;

    fn engine_with(
        rolls: impl IntoIterator<Item = u32>,
        responses: impl IntoIterator<Item = Scripted>,
    ) -> Engine<ScriptedRoller, ScriptedPrompt, RecordingPublisher> {
        Engine::new(
            ScriptedRoller::new(rolls),
            ScriptedPrompt::new(responses),
            RecordingPublisher::default(),
        )
    }

    fn dye_dice(messages: &[Message]) -> &DyeDiceReport {
        match &messages[0] {
            Message::DyeDice(report) => report,
            other => panic!("expected dice report, got {other:?}"),
        }
    }

    fn dye_result(messages: &[Message]) -> &DyeReport {
        match messages
            .iter()
            .find(|message| matches!(message, Message::DyeResult(_)))
        {
            Some(Message::DyeResult(report)) => report,
            _ => panic!("expected a final report"),
        }
    }

    #[test]
    fn recovery_heals_by_roll_plus_modifier_capped_at_max() {
        let mut character = Character::new("Kiva");
        character.health = Track::new(3, 0, 10);
        character.add_attribute(Attribute::new("Red", 2));

        let mut eng = engine_with([4], [Scripted::Dismiss]);
        let total = eng.recovery_roll(&mut character, None).unwrap();

        assert_eq!(total, 6);
        assert_eq!(character.health.value, 9);
        let dice = dye_dice(&eng.publisher().messages);
        assert_eq!(dice.dice.len(), 1);
        assert_eq!(dice.dice[0].roll, 4);
        // No selection was made, so the character stays colorless.
        assert!(character.is_colorless());

        // A second recovery caps at max health.
        let mut eng = engine_with([4], [Scripted::Dismiss]);
        eng.recovery_roll(&mut character, None).unwrap();
        assert_eq!(character.health.value, 10);
    }

    #[test]
    fn dye_total_counts_only_the_swing_modifier() {
        let mut character = Character::new("Kiva");
        character.add_attribute(Attribute::new("Red", 2));
        character.add_attribute(Attribute::new("Blue", 1));

        let mut eng = engine_with([4, 5], [Scripted::Pick(0)]);
        let total = eng.roll_to_dye(&mut character, None).unwrap();

        // Rolls 4 + 5, plus only Red's modifier.
        assert_eq!(total, 11);
        let swing = character.swing.unwrap();
        assert_eq!(swing.value, 6);
        assert_eq!(character.swing_attribute().unwrap().name, "Red");

        let result = dye_result(&eng.publisher().messages);
        assert_eq!(result.total, 11);
        assert_eq!(result.swing.as_ref().unwrap().value, 6);
    }

    #[test]
    fn recovery_total_counts_every_modifier() {
        let mut character = Character::new("Kiva");
        character.health = Track::new(0, 0, 30);
        character.add_attribute(Attribute::new("Red", 2));
        character.add_attribute(Attribute::new("Blue", 1));

        let mut eng = engine_with([4, 5], [Scripted::Dismiss]);
        let total = eng.recovery_roll(&mut character, None).unwrap();
        assert_eq!(total, 12);
        assert_eq!(character.health.value, 12);
    }

    #[test]
    fn existing_swing_die_is_reused_not_rerolled() {
        let mut character = Character::new("Kiva");
        character.add_attribute(Attribute::new("Red", 2));
        character.add_attribute(Attribute::new("Blue", 1));
        let red = character.attributes[0].id;

        let mut eng = engine_with([5], [Scripted::Dismiss]);
        eng.set_swing(&mut character, red, 6).unwrap();
        let total = eng.roll_to_dye(&mut character, None).unwrap();

        let dice = dye_dice(&eng.publisher().messages);
        assert!(dice.dice[0].from_swing);
        // Swing value 6 minus modifier 2: the carried-over roll is 4.
        assert_eq!(dice.dice[0].roll, 4);
        assert_eq!(dice.dice[1].roll, 5);

        // 4 + 5 rolls, plus the retained swing's modifier.
        assert_eq!(total, 11);
        // Swing is retained and reported.
        assert_eq!(character.swing.unwrap().value, 6);
        let result = dye_result(&eng.publisher().messages);
        assert_eq!(result.swing.as_ref().unwrap().attribute.name, "Red");
        assert_eq!(result.swing.as_ref().unwrap().value, 6);
    }

    #[test]
    fn locked_out_attribute_rolls_zero_and_is_not_offered() {
        let mut character = Character::new("Kiva");
        let mut red = Attribute::new("Red", 2);
        red.set_status(AttributeStatus::LockedOut);
        character.add_attribute(red);
        character.add_attribute(Attribute::new("Blue", 1));

        let mut eng = engine_with([5], [Scripted::Pick(0)]);
        let total = eng.roll_to_dye(&mut character, None).unwrap();

        let messages = eng.publisher().messages.clone();
        let dice = dye_dice(&messages);
        assert_eq!(dice.dice[0].roll, 0);
        let (_, options) = &eng.prompt.seen[0];
        assert_eq!(options.len(), 1);
        assert!(options[0].label.starts_with("Blue"));

        // Only Blue's roll counts, and Blue became the swing.
        assert_eq!(total, 5 + 1);
        assert_eq!(character.swing_attribute().unwrap().name, "Blue");
    }

    #[test]
    fn attribute_freed_by_the_tick_sits_this_roll_out() {
        let mut character = Character::new("Kiva");
        let mut red = Attribute::new("Red", 0);
        red.ignite();
        let red_id = red.id;
        character.add_attribute(red);
        character.add_attribute(Attribute::new("Blue", 0));

        let mut eng = engine_with([3], [Scripted::Pick(0)]);
        eng.roll_to_dye(&mut character, None).unwrap();

        // The tick freed Red for future rolls...
        assert!(character.attribute(red_id).unwrap().is_normal());
        // ...but it was not offered as a swing this time.
        let (_, options) = &eng.prompt.seen[0];
        assert_eq!(options.len(), 1);
        assert!(options[0].label.starts_with("Blue"));
    }

    #[test]
    fn tick_counts_down_multi_round_ignitions() {
        let mut character = Character::new("Kiva");
        let mut red = Attribute::new("Red", 0);
        red.ignite();
        red.cooldown = 2;
        let red_id = red.id;
        character.add_attribute(red);
        character.add_attribute(Attribute::new("Blue", 0));

        let mut eng = engine_with([3], [Scripted::Dismiss]);
        eng.roll_to_dye(&mut character, None).unwrap();

        let red = character.attribute(red_id).unwrap();
        assert_eq!(red.status, AttributeStatus::LockedOut);
        assert_eq!(red.cooldown_type, CooldownType::Ignite);
        assert_eq!(red.cooldown, 1);
    }

    #[test]
    fn extra_effect_dice_are_rolled_once_and_added() {
        let mut character = Character::new("Kiva");
        character.add_attribute(Attribute::new("Red", 0));
        character.add_attribute(Attribute::new("Blue", 0));

        // Two attribute d6s, then the 1d4 extra.
        let mut eng = engine_with([2, 3, 4], [Scripted::Dismiss]);
        let extra = ExtraDice::parse(None, Some("1d4")).unwrap();
        let total = eng.roll_to_dye(&mut character, Some(&extra)).unwrap();

        assert_eq!(total, 2 + 3 + 4);
        let dice = dye_dice(&eng.publisher().messages);
        assert_eq!(dice.extra.as_ref().unwrap().total, 4);
    }

    #[test]
    fn no_usable_dice_means_no_prompt_and_zero_total() {
        let mut character = Character::new("Kiva");
        let mut red = Attribute::new("Red", 2);
        red.set_status(AttributeStatus::Wounded);
        character.add_attribute(red);

        let mut eng = engine_with([], []);
        let total = eng.roll_to_dye(&mut character, None).unwrap();
        assert_eq!(total, 0);
        assert!(eng.prompt.seen.is_empty());
        assert!(character.is_colorless());
    }

    #[test]
    fn publishes_dice_before_the_result() {
        let mut character = Character::new("Kiva");
        character.add_attribute(Attribute::new("Red", 1));

        let mut eng = engine_with([3], [Scripted::Pick(0)]);
        eng.roll_to_dye(&mut character, None).unwrap();

        let messages = &eng.publisher().messages;
        assert_eq!(messages.len(), 2);
        assert!(matches!(messages[0], Message::DyeDice(_)));
        assert!(matches!(messages[1], Message::DyeResult(_)));
    }

    #[test]
    fn chosen_swing_is_clamped_through_the_patch() {
        let mut character = Character::new("Kiva");
        character.add_attribute(Attribute::new("Red", 2));

        let mut eng = engine_with([6], [Scripted::Pick(0)]);
        eng.roll_to_dye(&mut character, None).unwrap();

        // Roll 6 + modifier 2 is already in range; stored as-is.
        let swing = character.swing.unwrap();
        assert!((3..=8).contains(&swing.value));
        assert_eq!(swing.value, 8);
    }
}
