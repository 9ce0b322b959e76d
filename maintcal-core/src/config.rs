//! Global maintcal configuration.

use std::path::{Path, PathBuf};

use ::config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GridError, GridResult};
use crate::slots::{DEFAULT_FIRST_HOUR, DEFAULT_LAST_HOUR, TimeSlots};

pub const DEFAULT_UPCOMING_LIMIT: usize = 3;

fn default_first_hour() -> u32 {
    DEFAULT_FIRST_HOUR
}

fn default_last_hour() -> u32 {
    DEFAULT_LAST_HOUR
}

fn default_upcoming_limit() -> usize {
    DEFAULT_UPCOMING_LIMIT
}

/// Configuration at ~/.config/maintcal/config.toml
///
/// Every key can be overridden with a `MAINTCAL_` environment variable,
/// e.g. `MAINTCAL_STRICT_SLOTS=true`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MaintcalConfig {
    /// Explicit slot marks ("HH:MM"). Takes precedence over the hour range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_slots: Option<Vec<String>>,

    #[serde(default = "default_first_hour")]
    pub first_hour: u32,

    #[serde(default = "default_last_hour")]
    pub last_hour: u32,

    /// Events file (.toml or .json). Sample data is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events_file: Option<PathBuf>,

    /// Fail instead of warning when an event sits off the slot grid.
    #[serde(default)]
    pub strict_slots: bool,

    #[serde(default = "default_upcoming_limit")]
    pub upcoming_limit: usize,
}

impl Default for MaintcalConfig {
    fn default() -> Self {
        MaintcalConfig {
            time_slots: None,
            first_hour: DEFAULT_FIRST_HOUR,
            last_hour: DEFAULT_LAST_HOUR,
            events_file: None,
            strict_slots: false,
            upcoming_limit: DEFAULT_UPCOMING_LIMIT,
        }
    }
}

impl MaintcalConfig {
    pub fn config_path() -> GridResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| GridError::Config("Could not determine config directory".into()))?
            .join("maintcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, creating a commented default file on
    /// first run.
    pub fn load() -> GridResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from `path` (may be missing) layered under `MAINTCAL_*` env vars.
    pub fn load_from(path: &Path) -> GridResult<Self> {
        let config: MaintcalConfig = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("MAINTCAL"))
            .build()
            .map_err(|e| GridError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| GridError::Config(e.to_string()))?;

        debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    pub fn time_slots(&self) -> GridResult<TimeSlots> {
        match &self.time_slots {
            Some(marks) => TimeSlots::new(marks.as_slice()),
            None => TimeSlots::hourly(self.first_hour, self.last_hour),
        }
    }

    /// Events file path with `~` expanded.
    pub fn events_path(&self) -> Option<PathBuf> {
        self.events_file.as_ref().map(|p| {
            PathBuf::from(shellexpand::tilde(&p.to_string_lossy()).into_owned())
        })
    }

    /// Write the current config as TOML.
    pub fn save(&self, path: &Path) -> GridResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| GridError::Serialization(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)
            .map_err(|e| GridError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> GridResult<()> {
        let contents = format!(
            "\
# maintcal configuration

# Hour range of the day grid (inclusive, one slot per hour):
# first_hour = {DEFAULT_FIRST_HOUR}
# last_hour = {DEFAULT_LAST_HOUR}

# Or list the slots explicitly:
# time_slots = [\"08:00\", \"10:00\", \"13:30\"]

# Events to show (.toml or .json). Built-in sample data when unset:
# events_file = \"~/maintenance/events.toml\"

# Refuse to render a week holding events off the slot grid:
# strict_slots = false

# How many tasks the upcoming list shows:
# upcoming_limit = {DEFAULT_UPCOMING_LIMIT}
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                GridError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| GridError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
