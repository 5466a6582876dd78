//! Error types for the mechanics engine.

use hc_core::CoreError;

/// Alias for `Result<T, MechError>`.
pub type MechResult<T> = Result<T, MechError>;

/// Errors that can occur during roll procedures and swing operations.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// A referenced attribute or custom roll does not exist.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A dice formula could not be parsed.
    #[error("invalid dice formula \"{formula}\": {reason}")]
    InvalidFormula {
        /// The offending formula text.
        formula: String,
        /// What was wrong with it.
        reason: String,
    },
}
