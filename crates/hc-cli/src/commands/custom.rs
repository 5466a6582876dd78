use std::path::Path;

use colored::Colorize;

use hc_core::CustomRoll;
use hc_mechanics::{ExtraDice, RollOutcome};

use super::{engine, parse_roll_type, resolve_custom_roll};
use crate::store;

pub fn add(
    file: &Path,
    name: &str,
    roll_type: &str,
    to_hit: Option<&str>,
    to_effect: Option<&str>,
) -> Result<(), String> {
    let mut character = store::load(file)?;
    let roll_type = parse_roll_type(roll_type)?;

    // Catch formula typos now rather than at the table.
    ExtraDice::parse(to_hit, to_effect).map_err(|e| e.to_string())?;

    let mut roll = CustomRoll::new(name, roll_type);
    roll.formula_added_to_hit = to_hit.map(str::to_string);
    roll.formula_added_to_effect = to_effect.map(str::to_string);
    character.add_custom_roll(roll);

    store::save(file, &character)?;
    println!("Saved custom roll {name} ({roll_type})");
    Ok(())
}

pub fn run(file: &Path, target: &str, seed: Option<u64>) -> Result<(), String> {
    let mut character = store::load(file)?;
    let id = resolve_custom_roll(&character, target)?;

    let mut engine = engine(seed);
    let outcome = engine
        .execute_custom_roll(&mut character, id)
        .map_err(|e| e.to_string())?;
    if matches!(outcome, RollOutcome::ToDo(None)) {
        println!("  {}", "(roll cancelled)".dimmed());
    }

    store::save(file, &character)
}
