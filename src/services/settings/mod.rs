mod service;

pub use service::{SettingsService, CONFIG_FILE_NAME, DATABASE_FILE_NAME};
