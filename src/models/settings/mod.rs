// Settings module
// User configuration read from config.toml

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Contents of the configuration file. Every key is optional.
///
/// ```toml
/// database_path = "/home/me/calendar/events.db"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// SQLite file holding events. Relative paths are resolved against the
    /// directory of the configuration file; unset means the platform data
    /// directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_database_path() {
        assert_eq!(Settings::default().database_path, None);
    }

    #[test]
    fn test_parse_toml() {
        let settings: Settings = toml::from_str("database_path = \"events.db\"").unwrap();
        assert_eq!(settings.database_path, Some(PathBuf::from("events.db")));

        let empty: Settings = toml::from_str("").unwrap();
        assert_eq!(empty, Settings::default());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let settings: Settings = toml::from_str("theme = \"dark\"").unwrap();
        assert_eq!(settings, Settings::default());
    }
}
