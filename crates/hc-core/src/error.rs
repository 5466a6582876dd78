use crate::attribute::AttributeId;
use crate::custom_roll::CustomRollId;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when manipulating a character.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The referenced attribute is not owned by the character.
    #[error("attribute not found: {0}")]
    AttributeNotFound(AttributeId),

    /// The referenced custom roll is not owned by the character.
    #[error("custom roll not found: {0}")]
    CustomRollNotFound(CustomRollId),
}
