pub mod attribute;
pub mod custom;
pub mod new;
pub mod rest;
pub mod roll;
pub mod show;
pub mod swing;
pub mod tick;

use hc_core::{AttributeId, AttributeStatus, Character, Color, CustomRollId, RollType};
use hc_mechanics::{Engine, StdRoller};

use crate::prompt::TerminalPrompt;
use crate::publisher::ConsolePublisher;

/// The engine as the CLI wires it: real dice, terminal prompt, console output.
pub type CliEngine = Engine<StdRoller, TerminalPrompt, ConsolePublisher>;

/// Build an engine, seeding the dice when a seed was given.
pub fn engine(seed: Option<u64>) -> CliEngine {
    let roller = match seed {
        Some(seed) => StdRoller::from_seed(seed),
        None => StdRoller::new(),
    };
    Engine::new(roller, TerminalPrompt, ConsolePublisher::default())
}

/// Resolve an attribute by case-insensitive name, then by ID prefix.
pub fn resolve_attribute(character: &Character, target: &str) -> Result<AttributeId, String> {
    let lower = target.to_lowercase();
    if let Some(attribute) = character
        .attributes
        .iter()
        .find(|attribute| attribute.name.to_lowercase() == lower)
    {
        return Ok(attribute.id);
    }

    let matches: Vec<AttributeId> = character
        .attributes
        .iter()
        .filter(|attribute| attribute.id.0.to_string().starts_with(&lower))
        .map(|attribute| attribute.id)
        .collect();
    match matches.as_slice() {
        [id] => Ok(*id),
        [] => Err(format!("no attribute matches \"{target}\"")),
        _ => Err(format!("attribute \"{target}\" is ambiguous")),
    }
}

/// Resolve a custom roll by case-insensitive name, then by ID prefix.
pub fn resolve_custom_roll(character: &Character, target: &str) -> Result<CustomRollId, String> {
    let lower = target.to_lowercase();
    if let Some(roll) = character
        .custom_rolls
        .iter()
        .find(|roll| roll.name.to_lowercase() == lower)
    {
        return Ok(roll.id);
    }

    let matches: Vec<CustomRollId> = character
        .custom_rolls
        .iter()
        .filter(|roll| roll.id.0.to_string().starts_with(&lower))
        .map(|roll| roll.id)
        .collect();
    match matches.as_slice() {
        [id] => Ok(*id),
        [] => Err(format!("no custom roll matches \"{target}\"")),
        _ => Err(format!("custom roll \"{target}\" is ambiguous")),
    }
}

/// Parse a status argument.
pub fn parse_status(text: &str) -> Result<AttributeStatus, String> {
    match text.to_lowercase().as_str() {
        "normal" => Ok(AttributeStatus::Normal),
        "locked-out" | "locked_out" | "lockedout" => Ok(AttributeStatus::LockedOut),
        "wounded" => Ok(AttributeStatus::Wounded),
        other => Err(format!(
            "unknown status \"{other}\" (expected normal, locked-out, or wounded)"
        )),
    }
}

/// Parse a roll type argument.
pub fn parse_roll_type(text: &str) -> Result<RollType, String> {
    match text.to_lowercase().as_str() {
        "to-do" | "roll-to-do" => Ok(RollType::RollToDo),
        "to-dye" | "roll-to-dye" => Ok(RollType::RollToDye),
        "recovery" | "recovery-roll" => Ok(RollType::RecoveryRoll),
        other => Err(format!(
            "unknown roll type \"{other}\" (expected to-do, to-dye, or recovery)"
        )),
    }
}

/// Parse a "r,g,b" color argument with channels in [0,1].
pub fn parse_color(text: &str) -> Result<Color, String> {
    let channels: Vec<f32> = text
        .split(',')
        .map(|part| part.trim().parse::<f32>())
        .collect::<Result<_, _>>()
        .map_err(|_| format!("invalid color \"{text}\" (expected \"r,g,b\")"))?;
    match channels.as_slice() {
        [r, g, b] => Ok(Color::new(*r, *g, *b)),
        _ => Err(format!("invalid color \"{text}\" (expected three channels)")),
    }
}
