use std::path::Path;

use hc_core::Attribute;

use super::{engine, parse_color, parse_status, resolve_attribute};
use crate::store;

pub fn add(
    file: &Path,
    name: &str,
    modifier: u32,
    color: Option<&str>,
    token_image: Option<&str>,
) -> Result<(), String> {
    let mut character = store::load(file)?;
    if character
        .attributes
        .iter()
        .any(|attribute| attribute.name.eq_ignore_ascii_case(name))
    {
        return Err(format!("attribute \"{name}\" already exists"));
    }

    let mut attribute = Attribute::new(name, modifier);
    if let Some(color) = color {
        attribute.color = parse_color(color)?;
    }
    if let Some(path) = token_image {
        attribute.custom_token_image_path = path.to_string();
    }
    character.add_attribute(attribute);

    store::save(file, &character)?;
    println!("Added attribute {name} (+{modifier}) to {}", character.name);
    Ok(())
}

pub fn remove(file: &Path, target: &str) -> Result<(), String> {
    let mut character = store::load(file)?;
    let id = resolve_attribute(&character, target)?;
    let removed = character.remove_attribute(id).map_err(|e| e.to_string())?;

    store::save(file, &character)?;
    println!("Removed attribute {}", removed.name);
    Ok(())
}

pub fn status(file: &Path, target: &str, status: &str) -> Result<(), String> {
    let mut character = store::load(file)?;
    let id = resolve_attribute(&character, target)?;
    let status = parse_status(status)?;

    let mut engine = engine(None);
    engine
        .set_attribute_status(&mut character, id, status)
        .map_err(|e| e.to_string())?;

    store::save(file, &character)?;
    let attribute = character.attribute(id).map_err(|e| e.to_string())?;
    println!("{} is now {}", attribute.name, attribute.status);
    Ok(())
}
