//! Custom rolls: saved roll shortcuts with extra dice attached.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a custom roll owned by a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomRollId(pub Uuid);

impl CustomRollId {
    /// Generate a new random custom roll ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CustomRollId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CustomRollId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// Which roll procedure a custom roll executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RollType {
    /// A to-hit/effect roll with the swing or a chosen attribute.
    RollToDo,
    /// A roll across all attributes that may set a new swing.
    RollToDye,
    /// A Roll to Dye variant that heals the character by its total.
    RecoveryRoll,
}

impl fmt::Display for RollType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RollToDo => write!(f, "Roll To Do"),
            Self::RollToDye => write!(f, "Roll To Dye"),
            Self::RecoveryRoll => write!(f, "Recovery Roll"),
        }
    }
}

/// A saved roll: a roll type plus optional extra dice formulas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomRoll {
    /// Unique ID within the owning character.
    pub id: CustomRollId,
    /// Display name.
    pub name: String,
    /// The procedure this roll executes.
    pub roll_type: RollType,
    /// Extra dice added to the to-hit total, as a dice formula.
    pub formula_added_to_hit: Option<String>,
    /// Extra dice added to the effect total, as a dice formula.
    pub formula_added_to_effect: Option<String>,
}

impl CustomRoll {
    /// Create a custom roll with no extra dice.
    pub fn new(name: impl Into<String>, roll_type: RollType) -> Self {
        Self {
            id: CustomRollId::new(),
            name: name.into(),
            roll_type,
            formula_added_to_hit: None,
            formula_added_to_effect: None,
        }
    }
}
