use std::path::Path;

use hc_core::AttributeStatus;

use super::engine;
use crate::store;

pub fn run(file: &Path) -> Result<(), String> {
    let mut character = store::load(file)?;
    let locked = character
        .attributes
        .iter()
        .filter(|attribute| attribute.status == AttributeStatus::LockedOut)
        .count();

    let mut engine = engine(None);
    engine.release_lockouts(&mut character);

    store::save(file, &character)?;
    println!("Released {locked} attribute(s) for {}", character.name);
    Ok(())
}
