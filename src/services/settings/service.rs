use crate::models::settings::Settings;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const DATABASE_FILE_NAME: &str = "events.db";

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "EventCalendar", "EventCalendar")
        .context("Could not determine the user's home directory")
}

/// Loads and saves [`Settings`] as a TOML file.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service for `config.toml` in the platform configuration directory.
    pub fn from_project_dirs() -> Result<Self> {
        let dirs = project_dirs()?;
        Ok(Self::new(dirs.config_dir().join(CONFIG_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the current settings; a missing file means defaults.
    pub fn get(&self) -> Result<Settings> {
        if !self.path.exists() {
            log::warn!(
                "No configuration at {}, using defaults",
                self.path.display()
            );
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;

        log::debug!("Loaded settings from {}", self.path.display());
        Ok(settings)
    }

    /// Write settings, creating the configuration directory if needed.
    pub fn update(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;

        log::info!("Saved settings to {}", self.path.display());
        Ok(())
    }

    /// Where the event database lives for these settings.
    ///
    /// Creates the parent directory so the database can be opened directly.
    pub fn database_path(&self, settings: &Settings) -> Result<PathBuf> {
        let path = match &settings.database_path {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => self
                .path
                .parent()
                .map(|dir| dir.join(path))
                .unwrap_or_else(|| path.clone()),
            None => project_dirs()?.data_dir().join(DATABASE_FILE_NAME),
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        Ok(path)
    }
}
