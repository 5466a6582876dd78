//! The player-facing seams the engine calls out through.

use crate::message::Message;

/// An option offered to the player at a decision point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOption {
    /// Opaque key identifying the option.
    pub key: String,
    /// Text shown to the player.
    pub label: String,
}

impl ChoiceOption {
    /// Create an option.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// What came back from a choice prompt.
///
/// Dismissal is a normal outcome, not an error; each call site decides
/// whether it aborts the procedure or means "no selection".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    /// The player picked the option with this key.
    Selected(String),
    /// The player dismissed the prompt.
    Dismissed,
}

/// Presents options to the player and returns their pick.
///
/// One call per decision point. Adapters may block (a terminal prompt) or
/// bridge to an asynchronous dialog; the engine only sees the result.
pub trait ChoicePrompt {
    /// Present the options under a title and wait for the outcome.
    fn choose(&mut self, title: &str, options: &[ChoiceOption]) -> Choice;
}

/// Opaque handle to a published result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageHandle(pub u64);

/// Renders structured results to the player.
pub trait ResultPublisher {
    /// Publish a message, returning a handle to it.
    fn publish(&mut self, message: &Message) -> MessageHandle;
}
