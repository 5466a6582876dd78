//! Interactive terminal choice prompt.

use std::io::{self, BufRead, Write};

use colored::Colorize;

use hc_mechanics::{Choice, ChoiceOption, ChoicePrompt};

/// A choice prompt that lists numbered options on stdout and reads the
/// pick from stdin. An empty or unrecognized answer dismisses the prompt.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl ChoicePrompt for TerminalPrompt {
    fn choose(&mut self, title: &str, options: &[ChoiceOption]) -> Choice {
        println!();
        println!("  {}", title.bold());
        for (index, option) in options.iter().enumerate() {
            println!("  {} {}", format!("[{}]", index + 1).dimmed(), option.label);
        }
        print!("  Choose (enter to pass): ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return Choice::Dismissed;
        }

        match line.trim().parse::<usize>() {
            Ok(number) if (1..=options.len()).contains(&number) => {
                Choice::Selected(options[number - 1].key.clone())
            }
            _ => {
                println!("  {}", "(no selection)".dimmed());
                Choice::Dismissed
            }
        }
    }
}
