//! Roll to Do: a to-hit/effect roll with the swing or a chosen attribute.

use hc_core::Character;

use super::{Engine, attribute_by_key, snapshot};
use crate::dice::{DiceRoller, ExtraDice};
use crate::error::MechResult;
use crate::message::{Message, RollToDoReport};
use crate::ports::{Choice, ChoiceOption, ChoicePrompt, ResultPublisher};
use crate::rating::Rating;

const TITLE: &str = "Roll To Do";
const WILD_KEY: &str = "wild";

impl<R, C, P> Engine<R, C, P>
where
    R: DiceRoller,
    C: ChoicePrompt,
    P: ResultPublisher,
{
    /// Perform a Roll to Do and publish the outcome.
    ///
    /// With a swing in place the roll uses it directly. Without one, a wild
    /// d6 joins the d20 and the player picks which usable attribute to act
    /// with (or "Wild" for none); dismissing that prompt aborts the whole
    /// roll — nothing is published and nothing changes. Returns the report,
    /// or `None` on a dismissed prompt.
    pub fn roll_to_do(
        &mut self,
        character: &Character,
        extra: Option<&ExtraDice>,
    ) -> MechResult<Option<RollToDoReport>> {
        let d20 = self.roller.roll_die(20);
        let mut base = d20 as i32;
        let mut d6 = None;
        let mut attribute = None;
        let mut swing_value = None;

        if let Some(swing_attribute) = character.swing_attribute() {
            let value = character.swing.map(|swing| swing.value).unwrap_or(0);
            base += value as i32;
            attribute = Some(snapshot(swing_attribute));
            swing_value = Some(value);
        } else {
            let wild = self.roller.roll_die(6);
            d6 = Some(wild);
            base += wild as i32;

            let mut options: Vec<ChoiceOption> = character
                .attributes
                .iter()
                .filter(|candidate| candidate.is_normal())
                .map(|candidate| {
                    ChoiceOption::new(
                        candidate.id.0.to_string(),
                        format!("{} (+{})", candidate.name, candidate.modifier),
                    )
                })
                .collect();
            options.push(ChoiceOption::new(WILD_KEY, "Wild"));

            match self.prompt.choose(TITLE, &options) {
                Choice::Dismissed => return Ok(None),
                Choice::Selected(key) if key == WILD_KEY => {}
                Choice::Selected(key) => {
                    let chosen = attribute_by_key(character, &key)?;
                    base += chosen.modifier as i32;
                    attribute = Some(snapshot(chosen));
                }
            }
        }

        let mut to_hit = base;
        let mut effect = base;

        let extra_to_hit = match extra.and_then(|extra| extra.to_hit.as_ref()) {
            Some(formula) => {
                let roll = formula.roll(&mut self.roller);
                to_hit += roll.total;
                Some(roll)
            }
            None => None,
        };
        let extra_to_effect = match extra.and_then(|extra| extra.to_effect.as_ref()) {
            Some(formula) => {
                let roll = formula.roll(&mut self.roller);
                effect += roll.total;
                Some(roll)
            }
            None => None,
        };

        let report = RollToDoReport {
            d20,
            d6,
            attribute,
            swing_value,
            to_hit,
            effect,
            crit_success: d20 == 20,
            crit_fail: d20 == 1,
            rating: Rating::for_to_hit(to_hit),
            extra_to_hit,
            extra_to_effect,
        };
        self.publisher.publish(&Message::RollToDo(report.clone()));
        Ok(Some(report))
    }
}

#[cfg(test)]
mod tests {
    use hc_core::{Attribute, AttributeStatus, Character};

    use super::super::testing::{RecordingPublisher, Scripted, ScriptedPrompt};
    use super::*;
    use crate::dice::ScriptedRoller;
    use crate::engine::Engine;

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

    fn character_with_attributes() -> Character {
        let mut character = Character::new("Kiva");
        character.add_attribute(Attribute::new("Red", 2));
        character.add_attribute(Attribute::new("Blue", 0));
        character
    }

    #[test]
    fn swing_roll_skips_the_prompt() {
        let mut character = character_with_attributes();
        let red = character.attributes[0].id;
        let mut eng = engine_with([14], []);
        eng.set_swing(&mut character, red, 7).unwrap();

        let report = eng.roll_to_do(&character, None).unwrap().unwrap();
        assert_eq!(report.d20, 14);
        assert_eq!(report.d6, None);
        assert_eq!(report.to_hit, 21);
        assert_eq!(report.effect, 21);
        assert_eq!(report.swing_value, Some(7));
        assert_eq!(report.rating, Rating::VeryHard);
        assert_eq!(report.attribute.unwrap().name, "Red");
        assert_eq!(eng.publisher().messages.len(), 1);
    }

    #[test]
    fn wild_roll_prompts_and_adds_chosen_modifier() {
        let character = character_with_attributes();
        let mut eng = engine_with([14, 3], [Scripted::Pick(0)]);

        let report = eng.roll_to_do(&character, None).unwrap().unwrap();
        assert_eq!(report.d6, Some(3));
        // d20 14 + d6 3 + Red modifier 2
        assert_eq!(report.to_hit, 19);
        assert_eq!(report.effect, 19);
        assert_eq!(report.attribute.unwrap().name, "Red");
        assert_eq!(report.swing_value, None);
    }

    #[test]
    fn wild_option_selects_no_attribute() {
        let character = character_with_attributes();
        // Last option is always "Wild".
        let mut eng = engine_with([14, 3], [Scripted::Pick(2)]);

        let report = eng.roll_to_do(&character, None).unwrap().unwrap();
        assert_eq!(report.to_hit, 17);
        assert!(report.attribute.is_none());
    }

    #[test]
    fn prompt_lists_only_usable_attributes_plus_wild() {
        let mut character = character_with_attributes();
        let blue = character.attributes[1].id;
        character
            .attribute_mut(blue)
            .unwrap()
            .set_status(AttributeStatus::LockedOut);
        let mut eng = engine_with([14, 3], [Scripted::Pick(1)]);

        eng.roll_to_do(&character, None).unwrap().unwrap();
        let (title, options) = &eng.prompt.seen[0];
        assert_eq!(title, "Roll To Do");
        let labels: Vec<&str> = options.iter().map(|option| option.label.as_str()).collect();
        assert_eq!(labels, vec!["Red (+2)", "Wild"]);
    }

    #[test]
    fn dismissed_prompt_aborts_without_publishing() {
        let character = character_with_attributes();
        let before = character.clone();
        let mut eng = engine_with([14, 3], [Scripted::Dismiss]);

        let report = eng.roll_to_do(&character, None).unwrap();
        assert!(report.is_none());
        assert!(eng.publisher().messages.is_empty());
        assert_eq!(character, before);
    }

    #[test]
    fn crit_flags_follow_the_d20() {
        let mut character = character_with_attributes();
        let red = character.attributes[0].id;
        let mut eng = engine_with([20], []);
        eng.set_swing(&mut character, red, 4).unwrap();
        let report = eng.roll_to_do(&character, None).unwrap().unwrap();
        assert!(report.crit_success);
        assert!(!report.crit_fail);

        let mut eng = engine_with([1], []);
        let report = eng.roll_to_do(&character, None).unwrap().unwrap();
        assert!(report.crit_fail);
    }

    #[test]
    fn extra_dice_split_to_hit_and_effect() {
        let mut character = character_with_attributes();
        let red = character.attributes[0].id;
        // d20, then 1d4 to-hit, then 1d8 to-effect.
        let mut eng = engine_with([10, 2, 5], []);
        eng.set_swing(&mut character, red, 5).unwrap();

        let extra = ExtraDice::parse(Some("1d4"), Some("1d8")).unwrap();
        let report = eng.roll_to_do(&character, Some(&extra)).unwrap().unwrap();
        assert_eq!(report.to_hit, 17);
        assert_eq!(report.effect, 20);
        assert_eq!(report.extra_to_hit.unwrap().total, 2);
        assert_eq!(report.extra_to_effect.unwrap().total, 5);
    }

    #[test]
    fn dangling_swing_falls_back_to_wild_roll() {
        let mut character = character_with_attributes();
        let red = character.attributes[0].id;
        let mut eng = engine_with([9], []);
        eng.set_swing(&mut character, red, 5).unwrap();
        character.remove_attribute(red).unwrap();

        let mut eng = engine_with([9, 4], [Scripted::Pick(0)]);
        let report = eng.roll_to_do(&character, None).unwrap().unwrap();
        // Wild d6 path: d20 9 + d6 4 + Blue modifier 0.
        assert_eq!(report.to_hit, 13);
        assert_eq!(report.d6, Some(4));
        assert_eq!(report.attribute.unwrap().name, "Blue");
    }
}
