//! Configuration loading and management.

use std::fmt;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use wl_core::{DEFAULT_MIN_DURATION, LunchBreak};

/// Application configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the session log file.
    pub store_path: PathBuf,

    /// The fixed daily lunch break excluded from net totals.
    pub lunch: LunchBreak,

    /// Shortest loggable session, in minutes.
    pub min_session_minutes: u16,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("store_path", &self.store_path)
            .field("lunch", &self.lunch)
            .field("min_session_minutes", &self.min_session_minutes)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs_data_path().unwrap_or_else(|| PathBuf::from("."));
        Self {
            store_path: data_dir.join("sessions.jsonl"),
            lunch: LunchBreak::default(),
            min_session_minutes: DEFAULT_MIN_DURATION,
        }
    }
}

impl Config {
    /// Loads configuration from default locations.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load() -> Result<Self, figment::Error> {
        Self::load_from(None)
    }

    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (WL_*)
        figment = figment.merge(Env::prefixed("WL_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for worklog.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("worklog"))
}

/// Returns the platform-specific data directory for worklog.
///
/// On Linux: `~/.local/share/worklog`
pub fn dirs_data_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("worklog"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dirs_data_path_returns_some() {
        assert!(dirs_data_path().is_some());
    }

    #[test]
    fn test_dirs_data_path_ends_with_worklog() {
        let path = dirs_data_path().unwrap();
        assert_eq!(path.file_name().unwrap(), "worklog");
    }

    #[test]
    fn test_default_config_uses_data_dir_for_store() {
        let config = Config::default();
        let data_dir = dirs_data_path().unwrap();
        assert_eq!(config.store_path, data_dir.join("sessions.jsonl"));
    }

    #[test]
    fn test_default_lunch_is_noon_hour() {
        let config = Config::default();
        assert_eq!(config.lunch, LunchBreak::default());
        assert_eq!(config.min_session_minutes, DEFAULT_MIN_DURATION);
    }
}
