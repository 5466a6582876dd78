use std::path::Path;

use super::{engine, resolve_attribute};
use crate::store;

pub fn set(file: &Path, target: &str, value: u32) -> Result<(), String> {
    let mut character = store::load(file)?;
    let id = resolve_attribute(&character, target)?;

    let mut engine = engine(None);
    engine
        .set_swing(&mut character, id, value)
        .map_err(|e| e.to_string())?;

    store::save(file, &character)?;
    let attribute = character.attribute(id).map_err(|e| e.to_string())?;
    let stored = character.swing.map(|swing| swing.value).unwrap_or(0);
    println!("Swing set to {} {stored}", attribute.name);
    Ok(())
}

pub fn remove(file: &Path) -> Result<(), String> {
    let mut character = store::load(file)?;
    let mut engine = engine(None);
    engine
        .remove_swing(&mut character)
        .map_err(|e| e.to_string())?;

    store::save(file, &character)?;
    println!("{} is colorless", character.name);
    Ok(())
}

pub fn drop(file: &Path) -> Result<(), String> {
    let mut character = store::load(file)?;
    let mut engine = engine(None);
    engine
        .drop_swing(&mut character)
        .map_err(|e| e.to_string())?;

    store::save(file, &character)
}

pub fn ignite(file: &Path) -> Result<(), String> {
    let mut character = store::load(file)?;
    let mut engine = engine(None);
    let handle = engine.ignite(&mut character).map_err(|e| e.to_string())?;
    if handle.is_none() {
        println!("{} has no swing to ignite", character.name);
    }

    store::save(file, &character)
}

pub fn exhaust(file: &Path) -> Result<(), String> {
    let mut character = store::load(file)?;
    let mut engine = engine(None);
    let handle = engine.exhaust(&mut character).map_err(|e| e.to_string())?;
    if handle.is_none() {
        println!("{} has no swing to exhaust", character.name);
    }

    store::save(file, &character)
}
