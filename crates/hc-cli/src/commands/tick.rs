use std::path::{Path, PathBuf};

use hc_mechanics::{on_combat_round_advance, on_combat_turn_advance};

use crate::store;

pub fn round(files: &[PathBuf]) -> Result<(), String> {
    if files.is_empty() {
        return Err("no character files given".to_string());
    }

    let mut characters = Vec::with_capacity(files.len());
    for file in files {
        characters.push(store::load(file)?);
    }

    on_combat_round_advance(characters.iter_mut());

    for (file, character) in files.iter().zip(&characters) {
        store::save(file, character)?;
    }
    println!("Round advanced for {} character(s)", characters.len());
    Ok(())
}

pub fn turn(file: &Path) -> Result<(), String> {
    let mut character = store::load(file)?;
    on_combat_turn_advance(&mut character);
    store::save(file, &character)?;
    println!("Turn advanced for {}", character.name);
    Ok(())
}
