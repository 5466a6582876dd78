//! Core types for the Heartcore rules engine: characters, attributes, and
//! the swing they lock dice into.
//!
//! This crate defines the persisted data model and its invariants. It knows
//! nothing about dice or prompts — the roll procedures live in
//! `hc-mechanics` and mutate characters exclusively through
//! [`CharacterPatch`] applications.

/// Attribute entities and their status/cooldown transitions.
pub mod attribute;
/// The character aggregate and typed partial updates.
pub mod character;
/// Saved custom rolls.
pub mod custom_roll;
/// Error types used throughout the crate.
pub mod error;
/// Token images tied to the active swing.
pub mod token;
/// Clamped numeric resources.
pub mod track;

/// Re-export attribute types.
pub use attribute::{Attribute, AttributeId, AttributeStatus, Color, CooldownType};
/// Re-export character types.
pub use character::{Character, CharacterId, CharacterPatch, Swing, SwingPatch};
/// Re-export custom roll types.
pub use custom_roll::{CustomRoll, CustomRollId, RollType};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export token types.
pub use token::{DEFAULT_TOKEN_IMAGE, SwingTokenImages, Token, TokenSet};
/// Re-export the track type.
pub use track::Track;
