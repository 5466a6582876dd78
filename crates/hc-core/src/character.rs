//! Characters: the owner of attributes, tracks, and the current swing.
//!
//! All persisted swing and track mutations go through [`CharacterPatch`] and
//! [`Character::apply`], which enforce the swing clamp as a post-condition:
//! a stored swing value always lies in the swing range of its attribute.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::attribute::{Attribute, AttributeId};
use crate::custom_roll::{CustomRoll, CustomRollId};
use crate::error::{CoreError, CoreResult};
use crate::token::{SwingTokenImages, TokenSet};
use crate::track::Track;

/// Unique identifier for a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterId(pub Uuid);

impl CharacterId {
    /// Generate a new random character ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CharacterId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// The locked-in die result a character carries between rolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swing {
    /// The attribute the swing is locked into.
    pub attribute_id: AttributeId,
    /// The locked-in value (attribute die roll plus modifier).
    pub value: u32,
}

/// A change to the character's swing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwingPatch {
    /// Lock the swing into an attribute at a value.
    Set {
        /// The attribute to lock into.
        attribute_id: AttributeId,
        /// The new swing value, clamped on apply.
        value: u32,
    },
    /// Clear the swing, leaving the character colorless.
    Clear,
}

/// A typed partial update to a character's persisted state.
///
/// Patches are applied with [`Character::apply`], which runs the clamp and
/// token-image post-conditions in a single pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CharacterPatch {
    /// Change to the swing, if any.
    pub swing: Option<SwingPatch>,
    /// New health value, clamped into the health track's bounds.
    pub health_value: Option<i32>,
}

impl CharacterPatch {
    /// Patch that locks the swing into an attribute at a value.
    pub fn set_swing(attribute_id: AttributeId, value: u32) -> Self {
        Self {
            swing: Some(SwingPatch::Set {
                attribute_id,
                value,
            }),
            ..Self::default()
        }
    }

    /// Patch that clears the swing.
    pub fn clear_swing() -> Self {
        Self {
            swing: Some(SwingPatch::Clear),
            ..Self::default()
        }
    }

    /// Patch that sets the health track's value.
    pub fn health_value(value: i32) -> Self {
        Self {
            health_value: Some(value),
            ..Self::default()
        }
    }
}

/// A player character: tracks, attributes, custom rolls, and the swing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// Unique ID.
    pub id: CharacterId,
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Health track.
    pub health: Track,
    /// Spirit track.
    pub spirit: Track,
    /// Movement speed.
    pub speed: u32,
    /// Earned experience.
    pub experience: u32,
    /// The current swing, or `None` when colorless.
    pub swing: Option<Swing>,
    /// Per-swing token image settings.
    pub swing_token_images: SwingTokenImages,
    /// The tokens a swing change may restyle.
    pub tokens: TokenSet,
    /// Owned attributes, in sheet order.
    pub attributes: Vec<Attribute>,
    /// Owned custom rolls, in sheet order.
    pub custom_rolls: Vec<CustomRoll>,
}

impl Character {
    /// Create a character with default tracks and no attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CharacterId::new(),
            name: name.into(),
            description: String::new(),
            health: Track::new(10, 0, 10),
            spirit: Track::new(0, 0, 3),
            speed: 30,
            experience: 0,
            swing: None,
            swing_token_images: SwingTokenImages::default(),
            tokens: TokenSet::default(),
            attributes: Vec::new(),
            custom_rolls: Vec::new(),
        }
    }

    /// Look up an owned attribute by ID.
    pub fn attribute(&self, id: AttributeId) -> CoreResult<&Attribute> {
        self.attributes
            .iter()
            .find(|attribute| attribute.id == id)
            .ok_or(CoreError::AttributeNotFound(id))
    }

    /// Look up an owned attribute by ID, mutably.
    pub fn attribute_mut(&mut self, id: AttributeId) -> CoreResult<&mut Attribute> {
        self.attributes
            .iter_mut()
            .find(|attribute| attribute.id == id)
            .ok_or(CoreError::AttributeNotFound(id))
    }

    /// Add an attribute to the end of the sheet order.
    pub fn add_attribute(&mut self, attribute: Attribute) {
        self.attributes.push(attribute);
    }

    /// Remove an attribute, returning it. A swing locked into the removed
    /// attribute is left in place; it resolves to no swing from then on.
    pub fn remove_attribute(&mut self, id: AttributeId) -> CoreResult<Attribute> {
        let index = self
            .attributes
            .iter()
            .position(|attribute| attribute.id == id)
            .ok_or(CoreError::AttributeNotFound(id))?;
        Ok(self.attributes.remove(index))
    }

    /// Look up an owned custom roll by ID.
    pub fn custom_roll(&self, id: CustomRollId) -> CoreResult<&CustomRoll> {
        self.custom_rolls
            .iter()
            .find(|roll| roll.id == id)
            .ok_or(CoreError::CustomRollNotFound(id))
    }

    /// Add a custom roll to the end of the sheet order.
    pub fn add_custom_roll(&mut self, roll: CustomRoll) {
        self.custom_rolls.push(roll);
    }

    /// The attribute the swing is locked into, if the swing is set and its
    /// attribute still exists.
    pub fn swing_attribute(&self) -> Option<&Attribute> {
        let swing = self.swing.as_ref()?;
        self.attributes
            .iter()
            .find(|attribute| attribute.id == swing.attribute_id)
    }

    /// Returns true if the character has no swing.
    pub fn is_colorless(&self) -> bool {
        self.swing.is_none()
    }

    /// Apply a patch, producing the updated character.
    ///
    /// After the fields are applied, a swing change gets exactly one
    /// corrective clamp into the attribute's swing range, and a swing
    /// attribute change restyles tokens when per-swing token images are
    /// enabled. Fails with [`CoreError::AttributeNotFound`] if the patch
    /// locks the swing into an attribute the character does not own.
    pub fn apply(&self, patch: &CharacterPatch) -> CoreResult<Self> {
        let mut next = self.clone();

        if let Some(value) = patch.health_value {
            next.health.set(value);
        }

        if let Some(change) = patch.swing {
            next.swing = match change {
                SwingPatch::Set {
                    attribute_id,
                    value,
                } => Some(Swing {
                    attribute_id,
                    value,
                }),
                SwingPatch::Clear => None,
            };

            if let Some(swing) = next.swing {
                let (min, max) = next.attribute(swing.attribute_id)?.swing_range();
                next.swing = Some(Swing {
                    attribute_id: swing.attribute_id,
                    value: swing.value.clamp(min, max),
                });
            }

            let attribute_changed = self.swing.map(|swing| swing.attribute_id)
                != next.swing.map(|swing| swing.attribute_id);
            if attribute_changed && next.swing_token_images.enabled {
                let image_path = match next.swing {
                    Some(swing) => next
                        .attribute(swing.attribute_id)?
                        .custom_token_image_path
                        .clone(),
                    None => next.swing_token_images.default_token_image_path.clone(),
                };
                next.tokens.retarget(&image_path);
            }
        }

        Ok(next)
    }
}
