//! Token images tied to the active swing.
//!
//! When enabled, changing the swing restyles the character's tokens: a
//! token-specific character restyles its own token, a world character
//! restyles its prototype token and every linked dependent token.

use serde::{Deserialize, Serialize};

/// Image used when no attribute-specific token image applies.
pub const DEFAULT_TOKEN_IMAGE: &str = "icons/svg/mystery-man.svg";

/// Per-swing token image settings on a character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwingTokenImages {
    /// Whether swing changes restyle tokens at all.
    pub enabled: bool,
    /// Image applied when the character has no swing.
    pub default_token_image_path: String,
}

impl Default for SwingTokenImages {
    fn default() -> Self {
        Self {
            enabled: false,
            default_token_image_path: DEFAULT_TOKEN_IMAGE.to_string(),
        }
    }
}

/// A placed or prototype token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Path of the image the token currently shows.
    pub image_path: String,
}

impl Default for Token {
    fn default() -> Self {
        Self {
            image_path: DEFAULT_TOKEN_IMAGE.to_string(),
        }
    }
}

/// A token placed in a scene that refers back to this character.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DependentToken {
    /// Whether the token stays linked to the character document.
    pub actor_link: bool,
    /// The token itself.
    pub token: Token,
}

/// The tokens a swing change may restyle.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TokenSet {
    /// Present when the character is itself a single placed token.
    pub specific: Option<Token>,
    /// The prototype used when placing new tokens.
    pub prototype: Token,
    /// Tokens already placed in scenes.
    pub dependents: Vec<DependentToken>,
}

impl TokenSet {
    /// Apply an image path to the tokens a swing change affects.
    pub fn retarget(&mut self, image_path: &str) {
        if let Some(token) = &mut self.specific {
            token.image_path = image_path.to_string();
            return;
        }
        self.prototype.image_path = image_path.to_string();
        for dependent in &mut self.dependents {
            if dependent.actor_link {
                dependent.token.image_path = image_path.to_string();
            }
        }
    }
}
