//! Structured result payloads published at the end of engine operations.
//!
//! The engine never renders text itself: every user-visible outcome is a
//! [`Message`] handed to the [`ResultPublisher`](crate::ports::ResultPublisher)
//! port, which turns it into chat output, console output, or whatever the
//! host surface is.

use serde::{Deserialize, Serialize};

use hc_core::AttributeId;

use crate::dice::FormulaRoll;
use crate::rating::Rating;

/// The identifying fields of an attribute, captured at roll time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSnapshot {
    /// The attribute's ID.
    pub id: AttributeId,
    /// Display name.
    pub name: String,
    /// Flat roll bonus.
    pub modifier: u32,
}

/// The published outcome of a Roll to Do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollToDoReport {
    /// The d20 result.
    pub d20: u32,
    /// The wild d6, rolled only when no swing was in place.
    pub d6: Option<u32>,
    /// The attribute the roll acted with, if any.
    pub attribute: Option<AttributeSnapshot>,
    /// The swing value applied, when the swing powered the roll.
    pub swing_value: Option<u32>,
    /// Final to-hit total.
    pub to_hit: i32,
    /// Final effect total.
    pub effect: i32,
    /// The d20 came up 20.
    pub crit_success: bool,
    /// The d20 came up 1.
    pub crit_fail: bool,
    /// Difficulty rating of the to-hit total.
    pub rating: Rating,
    /// Extra dice added to the to-hit total.
    pub extra_to_hit: Option<FormulaRoll>,
    /// Extra dice added to the effect total.
    pub extra_to_effect: Option<FormulaRoll>,
}

/// One attribute's die in a Roll to Dye.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeDieReport {
    /// The attribute the die belongs to.
    pub attribute: AttributeSnapshot,
    /// The die value (0 for attributes that could not roll).
    pub roll: u32,
    /// The die was carried over from the existing swing.
    pub from_swing: bool,
}

/// The interim "dice on the table" publication of a Roll to Dye.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DyeDiceReport {
    /// Procedure title ("Roll to Dye" or "Recovery Roll").
    pub title: String,
    /// One die per owned attribute, in sheet order.
    pub dice: Vec<AttributeDieReport>,
    /// Extra dice rolled alongside, if any.
    pub extra: Option<FormulaRoll>,
}

/// The swing a Roll to Dye ended on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwingReport {
    /// The swing attribute.
    pub attribute: AttributeSnapshot,
    /// The locked-in swing value.
    pub value: u32,
}

/// The final publication of a Roll to Dye.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DyeReport {
    /// Procedure title.
    pub title: String,
    /// The procedure's total.
    pub total: i32,
    /// The chosen or retained swing, if any.
    pub swing: Option<SwingReport>,
}

/// A published, user-visible result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// A Roll to Do resolved.
    RollToDo(RollToDoReport),
    /// A Roll to Dye put its dice on the table.
    DyeDice(DyeDiceReport),
    /// A Roll to Dye resolved.
    DyeResult(DyeReport),
    /// A character's swing was dropped.
    SwingDropped {
        /// The character's name.
        character: String,
    },
    /// A character ignited their swing attribute.
    SwingIgnited {
        /// The character's name.
        character: String,
        /// The ignited attribute's name.
        attribute: String,
    },
    /// A character exhausted their swing attribute.
    SwingExhausted {
        /// The character's name.
        character: String,
        /// The exhausted attribute's name.
        attribute: String,
    },
}
