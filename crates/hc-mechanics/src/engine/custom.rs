//! Executing saved custom rolls.

use hc_core::{Character, CustomRollId, RollType};

use super::Engine;
use crate::dice::{DiceRoller, ExtraDice};
use crate::error::MechResult;
use crate::message::RollToDoReport;
use crate::ports::{ChoicePrompt, ResultPublisher};

/// What a custom roll produced, by procedure.
#[derive(Debug, Clone, PartialEq)]
pub enum RollOutcome {
    /// A Roll to Do report, or `None` when the player dismissed the
    /// attribute choice.
    ToDo(Option<RollToDoReport>),
    /// A Roll to Dye total.
    Dye(i32),
    /// A Recovery Roll total.
    Recovery(i32),
}

impl<R, C, P> Engine<R, C, P>
where
    R: DiceRoller,
    C: ChoicePrompt,
    P: ResultPublisher,
{
    /// Execute a saved custom roll by ID.
    ///
    /// The stored formulas are parsed up front, so a malformed formula
    /// aborts before anything is rolled or changed.
    pub fn execute_custom_roll(
        &mut self,
        character: &mut Character,
        id: CustomRollId,
    ) -> MechResult<RollOutcome> {
        let custom = character.custom_roll(id)?.clone();
        let extra = ExtraDice::parse(
            custom.formula_added_to_hit.as_deref(),
            custom.formula_added_to_effect.as_deref(),
        )?;

        match custom.roll_type {
            RollType::RollToDo => Ok(RollOutcome::ToDo(
                self.roll_to_do(character, Some(&extra))?,
            )),
            RollType::RollToDye => Ok(RollOutcome::Dye(
                self.roll_to_dye(character, Some(&extra))?,
            )),
            RollType::RecoveryRoll => Ok(RollOutcome::Recovery(
                self.recovery_roll(character, Some(&extra))?,
            )),
        }
    }
}
