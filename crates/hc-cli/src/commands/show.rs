use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use crate::store;

pub fn run(file: &Path) -> Result<(), String> {
    let character = store::load(file)?;

    println!();
    println!("  {}", character.name.bold());
    if !character.description.is_empty() {
        println!("  {}", character.description.dimmed());
    }
    println!(
        "  Health {}   Spirit {}   Speed {}   XP {}",
        character.health, character.spirit, character.speed, character.experience
    );

    match character.swing_attribute() {
        Some(attribute) => {
            let value = character.swing.map(|swing| swing.value).unwrap_or(0);
            println!("  Swing: {} {}", attribute.name.bold(), value);
        }
        None => println!("  Swing: {}", "Colorless".dimmed()),
    }
    println!();

    if character.attributes.is_empty() {
        println!("  No attributes.");
    } else {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Attribute", "Modifier", "Status", "Cooldown", "ID"]);
        for attribute in &character.attributes {
            let cooldown = if attribute.cooldown_type.label().is_empty() {
                String::new()
            } else {
                format!("{} ({})", attribute.cooldown_type.label(), attribute.cooldown)
            };
            table.add_row(vec![
                attribute.name.clone(),
                format!("+{}", attribute.modifier),
                attribute.status.to_string(),
                cooldown,
                attribute.id.to_string(),
            ]);
        }
        println!("{table}");
    }

    if !character.custom_rolls.is_empty() {
        println!();
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Custom Roll", "Type", "To Hit", "To Effect", "ID"]);
        for roll in &character.custom_rolls {
            table.add_row(vec![
                roll.name.clone(),
                roll.roll_type.to_string(),
                roll.formula_added_to_hit.clone().unwrap_or_default(),
                roll.formula_added_to_effect.clone().unwrap_or_default(),
                roll.id.to_string(),
            ]);
        }
        println!("{table}");
    }

    Ok(())
}
