//! Terminal frontend for the Heartcore rules engine.

mod commands;
mod prompt;
mod publisher;
mod store;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "hc",
    about = "Heartcore — swing and attribute rolls at the table",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new character file
    New {
        /// Character name
        name: String,

        /// Where to write the character file (default: `<name>.json`)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Show a character sheet
    Show {
        /// Character file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Manage a character's attributes
    Attribute {
        #[command(subcommand)]
        command: AttributeCommands,
    },

    /// Manage a character's swing
    Swing {
        #[command(subcommand)]
        command: SwingCommands,
    },

    /// Perform a roll
    Roll {
        #[command(subcommand)]
        command: RollCommands,
    },

    /// Manage and execute saved custom rolls
    Custom {
        #[command(subcommand)]
        command: CustomCommands,
    },

    /// Fire combat-tracker cooldown ticks
    Tick {
        #[command(subcommand)]
        command: TickCommands,
    },

    /// Release every locked-out attribute
    Rest {
        /// Character file
        #[arg(short, long)]
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum AttributeCommands {
    /// Add an attribute
    Add {
        /// Attribute name
        name: String,

        /// Flat roll bonus
        #[arg(short, long, default_value = "0")]
        modifier: u32,

        /// Sheet color as "r,g,b" with channels in [0,1]
        #[arg(long)]
        color: Option<String>,

        /// Token image shown while this attribute is the swing
        #[arg(long)]
        token_image: Option<String>,

        /// Character file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Remove an attribute
    Remove {
        /// Attribute name or ID prefix
        target: String,

        /// Character file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Set an attribute's status: normal, locked-out, or wounded
    Status {
        /// Attribute name or ID prefix
        target: String,

        /// The new status
        status: String,

        /// Character file
        #[arg(short, long)]
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum SwingCommands {
    /// Lock the swing into an attribute at a value
    Set {
        /// Attribute name or ID prefix
        target: String,

        /// The swing value (clamped to the attribute's range)
        value: u32,

        /// Character file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Clear the swing silently
    Remove {
        /// Character file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Drop the swing with an announcement
    Drop {
        /// Character file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Ignite the swing attribute
    Ignite {
        /// Character file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Exhaust the swing attribute
    Exhaust {
        /// Character file
        #[arg(short, long)]
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum RollCommands {
    /// Roll to Do: a to-hit/effect roll
    ToDo {
        /// Extra dice added to the to-hit total (e.g. "1d4")
        #[arg(long)]
        to_hit: Option<String>,

        /// Extra dice added to the effect total
        #[arg(long)]
        to_effect: Option<String>,

        /// RNG seed for a repeatable roll
        #[arg(short, long)]
        seed: Option<u64>,

        /// Character file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Roll to Dye: roll every attribute and maybe lock a new swing
    ToDye {
        /// Extra dice added to the total
        #[arg(long)]
        to_effect: Option<String>,

        /// RNG seed for a repeatable roll
        #[arg(short, long)]
        seed: Option<u64>,

        /// Character file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Recovery Roll: Roll to Dye that heals by its total
    Recovery {
        /// Extra dice added to the total
        #[arg(long)]
        to_effect: Option<String>,

        /// RNG seed for a repeatable roll
        #[arg(short, long)]
        seed: Option<u64>,

        /// Character file
        #[arg(short, long)]
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum CustomCommands {
    /// Save a custom roll
    Add {
        /// Custom roll name
        name: String,

        /// Procedure to run: to-do, to-dye, or recovery
        #[arg(long = "type")]
        roll_type: String,

        /// Extra dice added to the to-hit total
        #[arg(long)]
        to_hit: Option<String>,

        /// Extra dice added to the effect total
        #[arg(long)]
        to_effect: Option<String>,

        /// Character file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Execute a saved custom roll
    Run {
        /// Custom roll name or ID prefix
        target: String,

        /// RNG seed for a repeatable roll
        #[arg(short, long)]
        seed: Option<u64>,

        /// Character file
        #[arg(short, long)]
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum TickCommands {
    /// A combat round ended: wind down exhaust cooldowns everywhere
    Round {
        /// Character files for everyone in the fight
        files: Vec<PathBuf>,
    },

    /// A character's turn came up: free their expired exhaustions
    Turn {
        /// The acting character's file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::New { name, file } => commands::new::run(&name, file.as_deref()),
        Commands::Show { file } => commands::show::run(&file),
        Commands::Attribute { command } => match command {
            AttributeCommands::Add {
                name,
                modifier,
                color,
                token_image,
                file,
            } => commands::attribute::add(
                &file,
                &name,
                modifier,
                color.as_deref(),
                token_image.as_deref(),
            ),
            AttributeCommands::Remove { target, file } => {
                commands::attribute::remove(&file, &target)
            }
            AttributeCommands::Status {
                target,
                status,
                file,
            } => commands::attribute::status(&file, &target, &status),
        },
        Commands::Swing { command } => match command {
            SwingCommands::Set {
                target,
                value,
                file,
            } => commands::swing::set(&file, &target, value),
            SwingCommands::Remove { file } => commands::swing::remove(&file),
            SwingCommands::Drop { file } => commands::swing::drop(&file),
            SwingCommands::Ignite { file } => commands::swing::ignite(&file),
            SwingCommands::Exhaust { file } => commands::swing::exhaust(&file),
        },
        Commands::Roll { command } => match command {
            RollCommands::ToDo {
                to_hit,
                to_effect,
                seed,
                file,
            } => commands::roll::to_do(&file, to_hit.as_deref(), to_effect.as_deref(), seed),
            RollCommands::ToDye {
                to_effect,
                seed,
                file,
            } => commands::roll::to_dye(&file, to_effect.as_deref(), seed),
            RollCommands::Recovery {
                to_effect,
                seed,
                file,
            } => commands::roll::recovery(&file, to_effect.as_deref(), seed),
        },
        Commands::Custom { command } => match command {
            CustomCommands::Add {
                name,
                roll_type,
                to_hit,
                to_effect,
                file,
            } => commands::custom::add(
                &file,
                &name,
                &roll_type,
                to_hit.as_deref(),
                to_effect.as_deref(),
            ),
            CustomCommands::Run { target, seed, file } => {
                commands::custom::run(&file, &target, seed)
            }
        },
        Commands::Tick { command } => match command {
            TickCommands::Round { files } => commands::tick::round(&files),
            TickCommands::Turn { file } => commands::tick::turn(&file),
        },
        Commands::Rest { file } => commands::rest::run(&file),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
