// Event Calendar
// Command-line entry point

mod commands;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use event_calendar::services::database::Database;
use event_calendar::services::settings::SettingsService;
use std::path::{Path, PathBuf};

use commands::edit::EventFields;

#[derive(Parser)]
#[command(name = "calendar", version)]
#[command(about = "Keep track of calendar events from the terminal")]
struct Cli {
    /// SQLite database to use instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    database: Option<PathBuf>,

    /// Configuration file to read instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a month as a calendar grid with its events
    Month {
        /// Month to show as YYYY-MM (defaults to the current month)
        month: Option<String>,
    },
    /// List events grouped into Today, Tomorrow, This Week, Later and Past
    List {
        /// Only show events whose title, description or location match
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Show a single event
    Show {
        /// Event id (a unique prefix is enough)
        id: String,

        /// Print the event as JSON
        #[arg(long)]
        json: bool,
    },
    /// Create a new event
    Add(EventFields),
    /// Change some fields of an existing event
    Edit {
        /// Event id (a unique prefix is enough)
        id: String,

        #[command(flatten)]
        fields: EventFields,

        /// Remove the end date
        #[arg(long, conflicts_with = "end")]
        clear_end: bool,
    },
    /// Delete an event
    Delete {
        /// Event id (a unique prefix is enough)
        id: String,
    },
    /// Show the configuration, or change where events are stored
    Config {
        /// Store events in this SQLite file from now on
        #[arg(long, value_name = "PATH")]
        set_database: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let Cli {
        database,
        config,
        command,
    } = Cli::parse();

    let settings_service = match config {
        Some(path) => SettingsService::new(path),
        None => SettingsService::from_project_dirs()?,
    };
    let open = || open_database(&settings_service, database.as_deref());
    let now = Local::now();

    match command {
        Commands::Month { month } => commands::month::run(&open()?, month.as_deref(), now),
        Commands::List { query } => commands::list::run(&open()?, query.as_deref(), now),
        Commands::Show { id, json } => commands::edit::show(&open()?, &id, json),
        Commands::Add(fields) => commands::edit::add(&open()?, fields),
        Commands::Edit {
            id,
            fields,
            clear_end,
        } => commands::edit::edit(&open()?, &id, fields, clear_end),
        Commands::Delete { id } => commands::edit::delete(&open()?, &id),
        Commands::Config { set_database } => {
            commands::config::run(&settings_service, set_database, database.as_deref())
        }
    }
}

fn open_database(settings_service: &SettingsService, database: Option<&Path>) -> Result<Database> {
    let path = match database {
        Some(path) => path.to_path_buf(),
        None => {
            let settings = settings_service.get()?;
            settings_service.database_path(&settings)?
        }
    };
    let path = path
        .to_str()
        .with_context(|| format!("Database path {} is not valid UTF-8", path.display()))?;

    log::info!("Using database {}", path);
    let db = Database::new(path)?;
    db.initialize_schema()?;
    Ok(db)
}
