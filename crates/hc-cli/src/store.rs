//! Character files: the JSON documents the CLI reads and rewrites.

use std::fs;
use std::path::Path;

use hc_core::Character;

/// Load a character from a JSON file.
pub fn load(path: &Path) -> Result<Character, String> {
    let text =
        fs::read_to_string(path).map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    serde_json::from_str(&text)
        .map_err(|e| format!("invalid character file {}: {e}", path.display()))
}

/// Write a character back to its JSON file.
pub fn save(path: &Path, character: &Character) -> Result<(), String> {
    let json = serde_json::to_string_pretty(character)
        .map_err(|e| format!("cannot serialize character: {e}"))?;
    fs::write(path, json).map_err(|e| format!("cannot write {}: {e}", path.display()))
}
