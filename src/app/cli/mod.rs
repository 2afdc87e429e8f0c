//! CLI Adapter.

mod catalog;
mod prompt;
mod session;

use std::io::ErrorKind;
use std::str::FromStr;

use clap::{Parser, Subcommand, ValueEnum};
use dialoguer::{Confirm, Error as DialoguerError};

use crate::app::api::{self, PromptFormat, StatusReport};
use crate::domain::{AppError, CatalogName, Preferences, Theme};

#[derive(Parser)]
#[command(name = "artprompt")]
#[command(version)]
#[command(
    about = "Assemble AI art prompts from Character, Scene and Camera catalogs",
    long_about = None
)]
struct Cli {
    /// Use the built-in catalog instead of fetching the spreadsheet
    #[arg(long, global = true)]
    offline: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog categories and values
    #[clap(visible_alias = "ls")]
    Catalog {
        /// character, scene or camera (all when omitted)
        #[arg(value_parser = CatalogName::from_str)]
        section: Option<CatalogName>,
    },
    /// Select a value for a category; omit VALUE to clear it
    #[clap(visible_alias = "s")]
    Select {
        /// character, scene or camera
        #[arg(value_parser = CatalogName::from_str)]
        section: CatalogName,
        /// Category name, e.g. "Art Style"
        category: String,
        /// Value to select
        value: Option<String>,
    },
    /// Show current selections, preferences and last prompt
    Status,
    /// Generate the single-line prompt
    #[clap(visible_alias = "g")]
    Generate,
    /// Show the prompt in alternate formats
    #[clap(visible_alias = "f")]
    Formats {
        /// Show only one format
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,
    },
    /// Ask the suggestion generator for new values
    Import {
        /// character, scene or camera
        #[arg(value_parser = CatalogName::from_str)]
        section: CatalogName,
    },
    /// Clear all selections and the last prompt
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show or change the color theme
    Theme {
        /// Neon, Dark, Pastel, Ocean, Sunset, Forest or Candy
        #[arg(value_parser = Theme::from_str)]
        name: Option<Theme>,
    },
    /// Turn sound feedback on or off
    Sound {
        #[arg(value_enum)]
        state: SoundArg,
    },
    /// Interactive session: import, select and compose with one catalog
    Session,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Narrative,
    Technical,
    Poetic,
    Bullet,
}

impl From<FormatArg> for PromptFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Narrative => PromptFormat::Narrative,
            FormatArg::Technical => PromptFormat::Technical,
            FormatArg::Poetic => PromptFormat::Poetic,
            FormatArg::Bullet => PromptFormat::BulletPoint,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum SoundArg {
    On,
    Off,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    let offline = cli.offline;

    let result: Result<(), AppError> = match cli.command {
        Commands::Catalog { section } => catalog::run_catalog(offline, section),
        Commands::Select { section, category, value } => {
            catalog::run_select(offline, section, &category, value.as_deref())
        }
        Commands::Status => run_status(),
        Commands::Generate => prompt::run_generate(offline),
        Commands::Formats { format } => prompt::run_formats(offline, format.map(Into::into)),
        Commands::Import { section } => catalog::run_import(offline, section),
        Commands::Clear { yes } => run_clear(yes),
        Commands::Theme { name } => run_theme(name),
        Commands::Sound { state } => run_sound(matches!(state, SoundArg::On)),
        Commands::Session => session::run_session(offline),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_status() -> Result<(), AppError> {
    print_status(&api::status()?);
    Ok(())
}

fn print_status(report: &StatusReport) {
    println!("{}", report.status);
    println!("Selections: {}", report.selected_count());
    for (catalog, category, value) in &report.selected {
        println!("  • {} / {}: {}", catalog, category, value);
    }
    print_preferences(&report.preferences);
    match &report.last_prompt {
        Some(prompt) => println!("Last prompt: {}", prompt),
        None => println!("Last prompt: (none)"),
    }
}

fn run_clear(yes: bool) -> Result<(), AppError> {
    if !yes && !confirm_clear()? {
        println!("ℹ️ Nothing cleared");
        return Ok(());
    }

    let status = api::clear()?;
    println!("{}", status);
    Ok(())
}

fn confirm_clear() -> Result<bool, AppError> {
    match Confirm::new().with_prompt("Clear all selections?").default(false).interact() {
        Ok(value) => Ok(value),
        Err(err) if is_interrupted(&err) => Ok(false),
        Err(err) => Err(AppError::Interaction(format!("Failed to read confirmation: {}", err))),
    }
}

fn is_interrupted(err: &DialoguerError) -> bool {
    matches!(err, DialoguerError::IO(io) if io.kind() == ErrorKind::Interrupted)
}

fn run_theme(name: Option<Theme>) -> Result<(), AppError> {
    let changed = name.is_some();
    let prefs = api::theme(name)?;
    if changed {
        println!("✅ Theme set to {}", prefs.theme);
    } else {
        print_preferences(&prefs);
        let names: Vec<&str> = Theme::ALL.iter().map(|t| t.name()).collect();
        println!("Available themes: {}", names.join(", "));
    }
    Ok(())
}

fn run_sound(enabled: bool) -> Result<(), AppError> {
    let prefs = api::sound(enabled)?;
    println!("✅ Sound {}", if prefs.sound_enabled { "on" } else { "off" });
    Ok(())
}

fn print_preferences(prefs: &Preferences) {
    println!("Theme: {} ({})", prefs.theme, prefs.theme.class_name());
    println!("Sound: {}", if prefs.sound_enabled { "on" } else { "off" });
}
