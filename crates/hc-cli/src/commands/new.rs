use std::path::{Path, PathBuf};

use hc_core::Character;

use crate::store;

pub fn run(name: &str, file: Option<&Path>) -> Result<(), String> {
    let path = match file {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(format!("{}.json", slug(name))),
    };
    if path.exists() {
        return Err(format!("{} already exists", path.display()));
    }

    let character = Character::new(name);
    store::save(&path, &character)?;
    println!("Created character '{name}' at {}", path.display());
    Ok(())
}

/// Turn a character name into a file-friendly stem.
fn slug(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect()
}
