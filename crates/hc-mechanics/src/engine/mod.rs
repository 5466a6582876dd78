//! The rules engine: swing management and the roll procedures.
//!
//! An [`Engine`] owns the three collaborator seams (dice, choice prompt,
//! result publisher) and mutates characters through patch applications, so
//! the swing clamp holds after every operation.

mod custom;
mod hooks;
mod roll_to_do;
mod roll_to_dye;

pub use custom::RollOutcome;
pub use hooks::{on_combat_round_advance, on_combat_turn_advance};
pub use roll_to_dye::AttributeDie;

use uuid::Uuid;

use hc_core::{
    Attribute, AttributeId, AttributeStatus, Character, CharacterPatch, CoreError,
};

use crate::dice::DiceRoller;
use crate::error::{MechError, MechResult};
use crate::message::{AttributeSnapshot, Message};
use crate::ports::{ChoicePrompt, MessageHandle, ResultPublisher};

/// The rules engine, generic over its collaborator seams.
#[derive(Debug)]
pub struct Engine<R, C, P> {
    roller: R,
    prompt: C,
    publisher: P,
}

impl<R, C, P> Engine<R, C, P>
where
    R: DiceRoller,
    C: ChoicePrompt,
    P: ResultPublisher,
{
    /// Create an engine from its collaborators.
    pub fn new(roller: R, prompt: C, publisher: P) -> Self {
        Self {
            roller,
            prompt,
            publisher,
        }
    }

    /// The publisher, for inspecting what has been published.
    pub fn publisher(&self) -> &P {
        &self.publisher
    }

    /// Lock the character's swing into an attribute at a value. The stored
    /// value is clamped into the attribute's swing range.
    pub fn set_swing(
        &mut self,
        character: &mut Character,
        attribute_id: AttributeId,
        value: u32,
    ) -> MechResult<()> {
        *character = character.apply(&CharacterPatch::set_swing(attribute_id, value))?;
        Ok(())
    }

    /// Clear the swing without any announcement. Idempotent.
    pub fn remove_swing(&mut self, character: &mut Character) -> MechResult<()> {
        if character.is_colorless() {
            return Ok(());
        }
        *character = character.apply(&CharacterPatch::clear_swing())?;
        Ok(())
    }

    /// Clear the swing and announce it. No-op when colorless.
    pub fn drop_swing(&mut self, character: &mut Character) -> MechResult<Option<MessageHandle>> {
        if character.is_colorless() {
            return Ok(None);
        }
        self.remove_swing(character)?;
        let handle = self.publisher.publish(&Message::SwingDropped {
            character: character.name.clone(),
        });
        Ok(Some(handle))
    }

    /// Ignite the swing attribute: lock it out on the ignition cooldown,
    /// clear the swing, and announce. No-op when colorless.
    pub fn ignite(&mut self, character: &mut Character) -> MechResult<Option<MessageHandle>> {
        let Some(swing) = character.swing else {
            return Ok(None);
        };
        let attribute = character.attribute_mut(swing.attribute_id)?;
        attribute.ignite();
        let name = attribute.name.clone();
        self.remove_swing(character)?;

        let handle = self.publisher.publish(&Message::SwingIgnited {
            character: character.name.clone(),
            attribute: name,
        });
        Ok(Some(handle))
    }

    /// Exhaust the swing attribute: lock it out on the exhaustion cooldown,
    /// clear the swing, and announce. No-op when colorless.
    pub fn exhaust(&mut self, character: &mut Character) -> MechResult<Option<MessageHandle>> {
        let Some(swing) = character.swing else {
            return Ok(None);
        };
        let attribute = character.attribute_mut(swing.attribute_id)?;
        attribute.exhaust();
        let name = attribute.name.clone();
        self.remove_swing(character)?;

        let handle = self.publisher.publish(&Message::SwingExhausted {
            character: character.name.clone(),
            attribute: name,
        });
        Ok(Some(handle))
    }

    /// Set an attribute's status directly. Taking the current swing
    /// attribute out of `Normal` drops the swing as a side effect.
    pub fn set_attribute_status(
        &mut self,
        character: &mut Character,
        attribute_id: AttributeId,
        status: AttributeStatus,
    ) -> MechResult<()> {
        character.attribute_mut(attribute_id)?.set_status(status);

        let is_swing = character.swing.map(|swing| swing.attribute_id) == Some(attribute_id);
        if is_swing && status != AttributeStatus::Normal {
            self.drop_swing(character)?;
        }
        Ok(())
    }

    /// Restore every locked-out attribute to `Normal`.
    pub fn release_lockouts(&mut self, character: &mut Character) {
        for attribute in &mut character.attributes {
            attribute.release();
        }
    }
}

/// Capture an attribute's identifying fields for a report.
fn snapshot(attribute: &Attribute) -> AttributeSnapshot {
    AttributeSnapshot {
        id: attribute.id,
        name: attribute.name.clone(),
        modifier: attribute.modifier,
    }
}

/// Resolve a prompt key back to an owned attribute.
fn attribute_by_key<'a>(character: &'a Character, key: &str) -> MechResult<&'a Attribute> {
    character
        .attributes
        .iter()
        .find(|attribute| attribute.id.0.to_string() == key)
        .ok_or_else(|| unknown_key_error(key))
}

/// Error for a prompt adapter answering with a key it was never offered.
fn unknown_key_error(key: &str) -> MechError {
    let id = Uuid::parse_str(key)
        .map(AttributeId)
        .unwrap_or(AttributeId(Uuid::nil()));
    MechError::Core(CoreError::AttributeNotFound(id))
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted collaborators for exercising the engine.

    use std::collections::VecDeque;

    use crate::message::Message;
    use crate::ports::{Choice, ChoiceOption, ChoicePrompt, MessageHandle, ResultPublisher};

    /// A scripted response: pick the nth offered option, or dismiss.
    #[derive(Debug, Clone, Copy)]
    pub(crate) enum Scripted {
        Pick(usize),
        Dismiss,
    }

    /// A prompt that answers from a script and records what it was shown.
    #[derive(Debug, Default)]
    pub(crate) struct ScriptedPrompt {
        responses: VecDeque<Scripted>,
        pub seen: Vec<(String, Vec<ChoiceOption>)>,
    }

    impl ScriptedPrompt {
        pub fn new(responses: impl IntoIterator<Item = Scripted>) -> Self {
            Self {
                responses: responses.into_iter().collect(),
                seen: Vec::new(),
            }
        }
    }

    impl ChoicePrompt for ScriptedPrompt {
        fn choose(&mut self, title: &str, options: &[ChoiceOption]) -> Choice {
            self.seen.push((title.to_string(), options.to_vec()));
            match self.responses.pop_front() {
                Some(Scripted::Pick(index)) => Choice::Selected(options[index].key.clone()),
                Some(Scripted::Dismiss) | None => Choice::Dismissed,
            }
        }
    }

    /// A publisher that records every message.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingPublisher {
        pub messages: Vec<Message>,
        next: u64,
    }

    impl ResultPublisher for RecordingPublisher {
        fn publish(&mut self, message: &Message) -> MessageHandle {
            self.messages.push(message.clone());
            self.next += 1;
            MessageHandle(self.next)
        }
    }
}
