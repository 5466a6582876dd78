use std::path::Path;

use colored::Colorize;

use hc_mechanics::ExtraDice;

use super::engine;
use crate::store;

pub fn to_do(
    file: &Path,
    to_hit: Option<&str>,
    to_effect: Option<&str>,
    seed: Option<u64>,
) -> Result<(), String> {
    let character = store::load(file)?;
    let extra = ExtraDice::parse(to_hit, to_effect).map_err(|e| e.to_string())?;

    let mut engine = engine(seed);
    let report = engine
        .roll_to_do(&character, Some(&extra))
        .map_err(|e| e.to_string())?;
    if report.is_none() {
        println!("  {}", "(roll cancelled)".dimmed());
    }
    Ok(())
}

pub fn to_dye(file: &Path, to_effect: Option<&str>, seed: Option<u64>) -> Result<(), String> {
    let mut character = store::load(file)?;
    let extra = ExtraDice::parse(None, to_effect).map_err(|e| e.to_string())?;

    let mut engine = engine(seed);
    engine
        .roll_to_dye(&mut character, Some(&extra))
        .map_err(|e| e.to_string())?;

    store::save(file, &character)
}

pub fn recovery(file: &Path, to_effect: Option<&str>, seed: Option<u64>) -> Result<(), String> {
    let mut character = store::load(file)?;
    let extra = ExtraDice::parse(None, to_effect).map_err(|e| e.to_string())?;

    let mut engine = engine(seed);
    engine
        .recovery_roll(&mut character, Some(&extra))
        .map_err(|e| e.to_string())?;

    store::save(file, &character)?;
    println!("  Health is now {}", character.health);
    Ok(())
}
