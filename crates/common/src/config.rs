//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::clock::ZoneSetting;
use crate::error::GpxportResult;

/// Creator string written to the root of every track document.
pub const DEFAULT_CREATOR: &str = "https://www.mapstogpx.com/strava";

/// Environment variables consulted for the activity reference, in priority order.
pub const ACTIVITY_ENV_VARS: [&str; 2] = ["GPXPORT_ACTIVITY", "STRAVA_ACTIVITY"];

/// Environment variable overriding the configured time zone.
pub const TIMEZONE_ENV_VAR: &str = "GPXPORT_TIMEZONE";

/// Global application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Reference handed to the activity source (a dump file path, or `-`).
    pub activity: Option<String>,

    /// Where the converted document is written (`-` for stdout).
    pub output: PathBuf,

    /// Zone used to anchor the activity start time (`local`, `utc`, `+02:00`).
    pub timezone: String,

    /// Value of the document's `creator` attribute.
    pub creator: String,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "gpxport=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path. Logs go to stderr when unset.
    pub file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            activity: None,
            output: PathBuf::from("export.gpx"),
            timezone: "local".to_string(),
            creator: DEFAULT_CREATOR.to_string(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults,
    /// then apply environment overrides.
    pub fn load() -> Self {
        let mut config = Self::load_file();
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    fn load_file() -> Self {
        let config_path = config_file_path();
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {:?}: {}", config_path, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Apply environment overrides using the given lookup.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(activity) = ACTIVITY_ENV_VARS
            .iter()
            .filter_map(|key| lookup(key))
            .find(|value| !value.trim().is_empty())
        {
            self.activity = Some(activity);
        }
        if let Some(tz) = lookup(TIMEZONE_ENV_VAR).filter(|v| !v.trim().is_empty()) {
            self.timezone = tz;
        }
    }

    /// Parsed form of the `timezone` setting.
    pub fn zone(&self) -> GpxportResult<ZoneSetting> {
        self.timezone.parse()
    }

    /// Save config to the standard location.
    pub fn save(&self) -> Result<PathBuf, std::io::Error> {
        let config_path = config_file_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(&config_path, json)?;
        Ok(config_path)
    }
}

/// Load `KEY=value` lines from a `.env` file into the process environment.
///
/// With no path, searches the working directory and its parents. Variables
/// already set in the process win. Returns the file that was loaded.
pub fn load_dotenv(path: Option<&Path>) -> Option<PathBuf> {
    match path {
        Some(path) => dotenv::from_path(path).ok().map(|()| path.to_path_buf()),
        None => dotenv::dotenv().ok(),
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("gpxport").join("config.json")
}
