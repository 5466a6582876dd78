//! Swing and roll mechanics for the Heartcore rules engine.
//!
//! The [`Engine`] orchestrates the roll procedures — Roll to Do, Roll to
//! Dye, Recovery Roll, and saved custom rolls — against a character from
//! `hc-core`. Randomness, player choices, and result publication are
//! injected through the [`dice::DiceRoller`], [`ports::ChoicePrompt`], and
//! [`ports::ResultPublisher`] seams, so the same procedures run under a
//! terminal, a test script, or any other host surface.

pub mod dice;
pub mod engine;
pub mod error;
pub mod message;
pub mod ports;
pub mod rating;

pub use dice::{DiceFormula, DiceRoller, ExtraDice, FormulaRoll, ScriptedRoller, StdRoller};
pub use engine::{AttributeDie, Engine, RollOutcome, on_combat_round_advance, on_combat_turn_advance};
pub use error::{MechError, MechResult};
pub use message::{
    AttributeDieReport, AttributeSnapshot, DyeDiceReport, DyeReport, Message, RollToDoReport,
    SwingReport,
};
pub use ports::{Choice, ChoiceOption, ChoicePrompt, MessageHandle, ResultPublisher};
pub use rating::Rating;
