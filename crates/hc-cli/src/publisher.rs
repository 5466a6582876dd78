//! Console renderer for published roll results.

use colored::Colorize;

use hc_mechanics::{
    DyeDiceReport, DyeReport, FormulaRoll, Message, MessageHandle, ResultPublisher,
    RollToDoReport,
};

/// A publisher that renders every message to stdout.
#[derive(Debug, Default)]
pub struct ConsolePublisher {
    published: u64,
}

impl ResultPublisher for ConsolePublisher {
    fn publish(&mut self, message: &Message) -> MessageHandle {
        match message {
            Message::RollToDo(report) => render_roll_to_do(report),
            Message::DyeDice(report) => render_dye_dice(report),
            Message::DyeResult(report) => render_dye_result(report),
            Message::SwingDropped { character } => {
                println!("  {character} drops their swing.");
            }
            Message::SwingIgnited {
                character,
                attribute,
            } => {
                println!("  {character} ignites {}!", attribute.red().bold());
            }
            Message::SwingExhausted {
                character,
                attribute,
            } => {
                println!("  {character} exhausts {}.", attribute.yellow());
            }
        }
        self.published += 1;
        MessageHandle(self.published)
    }
}

fn render_roll_to_do(report: &RollToDoReport) {
    println!();
    println!("  {}", "Roll To Do".bold().underline());
    let mut dice_line = format!("d20: {}", report.d20);
    if let Some(d6) = report.d6 {
        dice_line.push_str(&format!("  wild d6: {d6}"));
    }
    println!("  {dice_line}");

    if let Some(attribute) = &report.attribute {
        match report.swing_value {
            Some(value) => println!("  Swing: {} {value}", attribute.name),
            None => println!("  Attribute: {} (+{})", attribute.name, attribute.modifier),
        }
    } else if report.d6.is_some() {
        println!("  Attribute: Wild");
    }

    if let Some(extra) = &report.extra_to_hit {
        render_extra("to hit", extra);
    }
    if let Some(extra) = &report.extra_to_effect {
        render_extra("to effect", extra);
    }

    if report.crit_success {
        println!("  {}", "Critical success!".green().bold());
    }
    if report.crit_fail {
        println!("  {}", "Critical failure!".red().bold());
    }

    println!(
        "  To hit: {}  ({})   Effect: {}",
        report.to_hit.to_string().bold(),
        report.rating,
        report.effect.to_string().bold()
    );
}

fn render_dye_dice(report: &DyeDiceReport) {
    println!();
    println!("  {}", report.title.bold().underline());
    for die in &report.dice {
        let mut line = format!("{}: {}", die.attribute.name, die.roll);
        if die.from_swing {
            line.push_str(" (swing)");
        }
        if die.roll == 0 {
            println!("  {}", line.dimmed());
        } else {
            println!("  {line}");
        }
    }
    if let Some(extra) = &report.extra {
        render_extra("extra", extra);
    }
}

fn render_dye_result(report: &DyeReport) {
    match &report.swing {
        Some(swing) => println!(
            "  New swing: {} {}",
            swing.attribute.name.bold(),
            swing.value
        ),
        None => println!("  {}", "Colorless".dimmed()),
    }
    println!(
        "  {} total: {}",
        report.title,
        report.total.to_string().bold()
    );
}

fn render_extra(label: &str, roll: &FormulaRoll) {
    let terms: Vec<String> = roll.dice.iter().map(|term| term.to_string()).collect();
    let detail = if terms.is_empty() {
        String::new()
    } else {
        format!("  {}", terms.join("  "))
    };
    println!("  {}", format!("Extra {label}: {roll}{detail}").dimmed());
}
