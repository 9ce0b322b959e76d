pub mod cell;
pub mod config;
pub mod day;
pub mod legend;
pub mod month;
pub mod upcoming;
pub mod week;

use std::path::PathBuf;

use anyhow::{Context, Result};
use maintcal_core::config::MaintcalConfig;
use maintcal_core::source::{EventFile, EventSource, SampleEvents};
use maintcal_core::{MaintenanceEvent, TimeSlots, WeekGrid};
use tracing::info;

/// Everything a view needs: configuration, slots and the loaded events.
pub struct Session {
    pub config: MaintcalConfig,
    pub slots: TimeSlots,
    pub events: Vec<MaintenanceEvent>,
    pub strict: bool,
    pub json: bool,
}

impl Session {
    /// Load config and events. `--events` wins over the config's `events_file`;
    /// with neither, the built-in sample data is used.
    pub fn load(events_override: Option<PathBuf>, strict: bool, json: bool) -> Result<Self> {
        let config = MaintcalConfig::load().context("Failed to load configuration")?;
        let slots = config.time_slots().context("Invalid time slot configuration")?;

        let source: Box<dyn EventSource> = match events_override.or_else(|| config.events_path()) {
            Some(path) => Box::new(EventFile::new(path)),
            None => Box::new(SampleEvents),
        };

        let events = source
            .load()
            .with_context(|| format!("Failed to load events from {}", source.describe()))?;

        info!(source = %source.describe(), count = events.len(), "events loaded");

        Ok(Session {
            strict: strict || config.strict_slots,
            config,
            slots,
            events,
            json,
        })
    }

    pub fn week_grid(&self, anchor: chrono::NaiveDate) -> Result<WeekGrid<'_>> {
        if self.strict {
            Ok(WeekGrid::build_strict(anchor, &self.slots, &self.events)?)
        } else {
            Ok(WeekGrid::build(anchor, &self.slots, &self.events)?)
        }
    }

    /// Grid for the day view. Strict mode only looks at events on `date`.
    pub fn day_grid(&self, date: chrono::NaiveDate) -> Result<WeekGrid<'_>> {
        if self.strict {
            Ok(WeekGrid::build_strict_day(date, &self.slots, &self.events)?)
        } else {
            Ok(WeekGrid::build(date, &self.slots, &self.events)?)
        }
    }
}

/// Print `value` as pretty JSON.
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
