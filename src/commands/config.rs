use anyhow::Result;
use event_calendar::services::settings::SettingsService;
use std::path::{Path, PathBuf};

pub fn run(
    settings_service: &SettingsService,
    set_database: Option<PathBuf>,
    database_override: Option<&Path>,
) -> Result<()> {
    let mut settings = settings_service.get()?;

    if let Some(path) = set_database {
        settings.database_path = Some(path);
        settings_service.update(&settings)?;
        println!("Saved {}", settings_service.path().display());
    }

    let database = match database_override {
        Some(path) => path.to_path_buf(),
        None => settings_service.database_path(&settings)?,
    };

    println!("Config file: {}", settings_service.path().display());
    println!("Database:    {}", database.display());
    Ok(())
}
