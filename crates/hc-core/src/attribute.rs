//! Attributes ("colors") and their status/cooldown state machine.
//!
//! An attribute is either usable (`Normal`) or locked out of play, and a
//! locked-out attribute carries the cooldown that will eventually free it.
//! Igniting locks an attribute behind a cooldown that ticks down at the
//! start of each Roll to Dye; exhausting locks it behind a cooldown that
//! ticks down as combat rounds pass.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::token::DEFAULT_TOKEN_IMAGE;

/// Unique identifier for an attribute owned by a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeId(pub Uuid);

impl AttributeId {
    /// Generate a new random attribute ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AttributeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AttributeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// An RGB color with each channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color(pub [f32; 3]);

impl Color {
    /// Create a color, clamping each channel into `[0, 1]`.
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self([r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0)])
    }
}

impl Default for Color {
    fn default() -> Self {
        Self([1.0, 1.0, 1.0])
    }
}

/// Whether an attribute can currently be used in rolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeStatus {
    /// Usable in rolls.
    #[default]
    Normal,
    /// Temporarily unusable, waiting out a cooldown.
    LockedOut,
    /// Unusable due to injury; cleared only by direct edits.
    Wounded,
}

impl fmt::Display for AttributeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "Normal"),
            Self::LockedOut => write!(f, "Locked Out"),
            Self::Wounded => write!(f, "Wounded"),
        }
    }
}

/// Which cooldown clock, if any, an attribute is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CooldownType {
    /// Not cooling down.
    #[default]
    None,
    /// Ignited: ticks down at the start of each Roll to Dye.
    Ignite,
    /// Exhausted: ticks down as combat rounds advance.
    Exhaust,
}

impl CooldownType {
    /// Sheet label for this cooldown, empty when not cooling down.
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Ignite => "Ignited",
            Self::Exhaust => "Exhausted",
        }
    }
}

/// A character attribute ("color"): a named stat a swing can lock into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    /// Unique ID within the owning character.
    pub id: AttributeId,
    /// Display name.
    pub name: String,
    /// Sheet color for this attribute.
    pub color: Color,
    /// Flat bonus added to rolls made with this attribute.
    pub modifier: u32,
    /// Current usability status.
    pub status: AttributeStatus,
    /// Which cooldown clock the attribute is on.
    pub cooldown_type: CooldownType,
    /// Remaining cooldown ticks.
    pub cooldown: u32,
    /// Token image applied while this attribute is the active swing.
    pub custom_token_image_path: String,
}

impl Attribute {
    /// Create a usable attribute with the given name and modifier.
    pub fn new(name: impl Into<String>, modifier: u32) -> Self {
        Self {
            id: AttributeId::new(),
            name: name.into(),
            color: Color::default(),
            modifier,
            status: AttributeStatus::Normal,
            cooldown_type: CooldownType::None,
            cooldown: 0,
            custom_token_image_path: DEFAULT_TOKEN_IMAGE.to_string(),
        }
    }

    /// Returns true if the attribute can be used in rolls.
    pub fn is_normal(&self) -> bool {
        self.status == AttributeStatus::Normal
    }

    /// The inclusive range a swing value on this attribute is clamped to.
    pub fn swing_range(&self) -> (u32, u32) {
        (self.modifier + 1, self.modifier + 6)
    }

    /// Set the status directly. Returning to `Normal` takes the attribute
    /// off its cooldown clock; the counter itself is left untouched.
    pub fn set_status(&mut self, status: AttributeStatus) {
        self.status = status;
        if status == AttributeStatus::Normal {
            self.cooldown_type = CooldownType::None;
        }
    }

    /// Lock the attribute out behind a one-tick ignition cooldown.
    pub fn ignite(&mut self) {
        self.status = AttributeStatus::LockedOut;
        self.cooldown_type = CooldownType::Ignite;
        self.cooldown = 1;
    }

    /// Lock the attribute out behind a one-tick exhaustion cooldown.
    pub fn exhaust(&mut self) {
        self.status = AttributeStatus::LockedOut;
        self.cooldown_type = CooldownType::Exhaust;
        self.cooldown = 1;
    }

    /// Advance the ignition clock by one tick. A no-op unless the attribute
    /// is on the ignition cooldown; when the counter reaches zero the
    /// attribute returns to `Normal`.
    pub fn tick_ignition_cooldown(&mut self) {
        if self.cooldown_type != CooldownType::Ignite {
            return;
        }
        self.cooldown = self.cooldown.saturating_sub(1);
        if self.cooldown == 0 {
            self.status = AttributeStatus::Normal;
            self.cooldown_type = CooldownType::None;
        } else {
            self.status = AttributeStatus::LockedOut;
            self.cooldown_type = CooldownType::Ignite;
        }
    }

    /// Restore a locked-out attribute to `Normal`, clearing its cooldown
    /// clock. Wounded attributes are not touched.
    pub fn release(&mut self) {
        if self.status == AttributeStatus::LockedOut {
            self.status = AttributeStatus::Normal;
            self.cooldown_type = CooldownType::None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_attribute_is_usable() {
        let attr = Attribute::new("Red", 2);
        assert!(attr.is_normal());
        assert_eq!(attr.cooldown_type, CooldownType::None);
        assert_eq!(attr.cooldown, 0);
        assert_eq!(attr.swing_range(), (3, 8));
    }

    #[test]
    fn ignite_locks_out_with_cooldown() {
        let mut attr = Attribute::new("Red", 0);
        attr.ignite();
        assert_eq!(attr.status, AttributeStatus::LockedOut);
        assert_eq!(attr.cooldown_type, CooldownType::Ignite);
        assert_eq!(attr.cooldown, 1);
    }

    #[test]
    fn exhaust_locks_out_with_cooldown() {
        let mut attr = Attribute::new("Red", 0);
        attr.exhaust();
        assert_eq!(attr.status, AttributeStatus::LockedOut);
        assert_eq!(attr.cooldown_type, CooldownType::Exhaust);
        assert_eq!(attr.cooldown, 1);
    }

    #[test]
    fn tick_counts_down_and_frees_at_zero() {
        let mut attr = Attribute::new("Red", 0);
        attr.ignite();
        attr.cooldown = 2;

        attr.tick_ignition_cooldown();
        assert_eq!(attr.status, AttributeStatus::LockedOut);
        assert_eq!(attr.cooldown_type, CooldownType::Ignite);
        assert_eq!(attr.cooldown, 1);

        attr.tick_ignition_cooldown();
        assert_eq!(attr.status, AttributeStatus::Normal);
        assert_eq!(attr.cooldown_type, CooldownType::None);
        assert_eq!(attr.cooldown, 0);
    }

    #[test]
    fn tick_ignores_exhaust_cooldown() {
        let mut attr = Attribute::new("Red", 0);
        attr.exhaust();
        attr.tick_ignition_cooldown();
        assert_eq!(attr.status, AttributeStatus::LockedOut);
        assert_eq!(attr.cooldown_type, CooldownType::Exhaust);
        assert_eq!(attr.cooldown, 1);
    }

    #[test]
    fn set_status_normal_clears_cooldown_type() {
        let mut attr = Attribute::new("Red", 0);
        attr.exhaust();
        attr.set_status(AttributeStatus::Normal);
        assert_eq!(attr.cooldown_type, CooldownType::None);
        // The counter is intentionally untouched.
        assert_eq!(attr.cooldown, 1);
    }

    #[test]
    fn set_status_locked_out_keeps_cooldown_type() {
        let mut attr = Attribute::new("Red", 0);
        attr.ignite();
        attr.set_status(AttributeStatus::LockedOut);
        assert_eq!(attr.cooldown_type, CooldownType::Ignite);
    }

    #[test]
    fn release_frees_locked_out_only() {
        let mut attr = Attribute::new("Red", 0);
        attr.ignite();
        attr.release();
        assert!(attr.is_normal());
        assert_eq!(attr.cooldown_type, CooldownType::None);

        attr.set_status(AttributeStatus::Wounded);
        attr.release();
        assert_eq!(attr.status, AttributeStatus::Wounded);
    }

    #[test]
    fn color_channels_clamp() {
        let c = Color::new(1.5, -0.2, 0.5);
        assert_eq!(c.0, [1.0, 0.0, 0.5]);
    }

    #[test]
    fn status_display() {
        assert_eq!(AttributeStatus::Normal.to_string(), "Normal");
        assert_eq!(AttributeStatus::LockedOut.to_string(), "Locked Out");
        assert_eq!(AttributeStatus::Wounded.to_string(), "Wounded");
    }

    #[test]
    fn cooldown_labels() {
        assert_eq!(CooldownType::None.label(), "");
        assert_eq!(CooldownType::Ignite.label(), "Ignited");
        assert_eq!(CooldownType::Exhaust.label(), "Exhausted");
    }
}
