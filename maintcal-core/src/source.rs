//! Where maintenance events come from.
//!
//! The engine doesn't care whether events are built in, read from a file, or
//! fetched from a store; it only needs a finite, ordered list.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use tracing::debug;

use crate::error::{GridError, GridResult};
use crate::event::{EventRecord, EventStatus, MaintenanceEvent, MaintenanceType, Priority};

pub trait EventSource {
    fn load(&self) -> GridResult<Vec<MaintenanceEvent>>;

    /// Short human-readable description (shown in logs and headers).
    fn describe(&self) -> String;
}

/// The built-in December 2025 sample schedule.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleEvents;

impl EventSource for SampleEvents {
    fn load(&self) -> GridResult<Vec<MaintenanceEvent>> {
        Ok(sample_events())
    }

    fn describe(&self) -> String {
        "sample data".to_string()
    }
}

// Only called inside `const` blocks, so a bad literal fails the build.
const fn sample_date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 12, day).expect("sample dates are real December 2025 days")
}

const fn on_the_hour(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 0, 0).expect("sample hours are within 0..24")
}

pub fn sample_events() -> Vec<MaintenanceEvent> {
    vec![
        MaintenanceEvent {
            id: 1,
            title: "Server Maintenance".to_string(),
            date: const { sample_date(17) },
            time: const { on_the_hour(9) },
            duration_hours: 2.0,
            kind: MaintenanceType::Preventive,
            priority: Priority::High,
            team: "Network Team".to_string(),
            status: EventStatus::Scheduled,
        },
        MaintenanceEvent {
            id: 2,
            title: "HVAC System Check".to_string(),
            date: const { sample_date(18) },
            time: const { on_the_hour(10) },
            duration_hours: 1.5,
            kind: MaintenanceType::Preventive,
            priority: Priority::Medium,
            team: "Facilities".to_string(),
            status: EventStatus::Scheduled,
        },
        MaintenanceEvent {
            id: 3,
            title: "Generator Inspection".to_string(),
            date: const { sample_date(19) },
            time: const { on_the_hour(8) },
            duration_hours: 3.0,
            kind: MaintenanceType::Corrective,
            priority: Priority::High,
            team: "Electrical".to_string(),
            status: EventStatus::InProgress,
        },
        MaintenanceEvent {
            id: 4,
            title: "Fire Safety Test".to_string(),
            date: const { sample_date(19) },
            time: const { on_the_hour(14) },
            duration_hours: 2.0,
            kind: MaintenanceType::Preventive,
            priority: Priority::Medium,
            team: "Safety".to_string(),
            status: EventStatus::Pending,
        },
        MaintenanceEvent {
            id: 5,
            title: "Elevator Maintenance".to_string(),
            date: const { sample_date(20) },
            time: const { on_the_hour(11) },
            duration_hours: 4.0,
            kind: MaintenanceType::Scheduled,
            priority: Priority::Low,
            team: "Facilities".to_string(),
            status: EventStatus::Planned,
        },
    ]
}

/// Events stored in a `.toml` or `.json` file.
///
/// TOML files hold an `[[events]]` array. JSON files hold either a bare
/// array or an object with an `events` array.
#[derive(Debug, Clone)]
pub struct EventFile {
    path: PathBuf,
}

#[derive(Deserialize)]
struct EventList {
    #[serde(default)]
    events: Vec<EventRecord>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonEvents {
    Bare(Vec<EventRecord>),
    Wrapped(EventList),
}

impl EventFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        EventFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_records(&self) -> GridResult<Vec<EventRecord>> {
        let content = std::fs::read_to_string(&self.path)?;

        let extension = self
            .path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("toml") => {
                let list: EventList = toml::from_str(&content)
                    .map_err(|e| GridError::Serialization(e.to_string()))?;
                Ok(list.events)
            }
            Some("json") => {
                let parsed: JsonEvents = serde_json::from_str(&content)
                    .map_err(|e| GridError::Serialization(e.to_string()))?;
                Ok(match parsed {
                    JsonEvents::Bare(records) => records,
                    JsonEvents::Wrapped(list) => list.events,
                })
            }
            _ => Err(GridError::Config(format!(
                "Unsupported events file '{}'. Expected a .toml or .json file",
                self.path.display()
            ))),
        }
    }
}

impl EventSource for EventFile {
    fn load(&self) -> GridResult<Vec<MaintenanceEvent>> {
        let records = self.read_records()?;
        let events = validate(records)?;

        debug!(path = %self.path.display(), count = events.len(), "loaded events file");
        Ok(events)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Convert wire records, rejecting duplicate ids.
pub fn validate(records: Vec<EventRecord>) -> GridResult<Vec<MaintenanceEvent>> {
    let mut seen = HashSet::new();

    records
        .into_iter()
        .map(|record| {
            if !seen.insert(record.id) {
                return Err(GridError::InvalidEvent(format!("duplicate event id {}", record.id)));
            }
            MaintenanceEvent::try_from(record)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_sample_events_are_valid_and_unique() {
        let events = SampleEvents.load().unwrap();
        let records: Vec<EventRecord> = events.iter().map(EventRecord::from).collect();

        assert_eq!(events.len(), 5);
        assert_eq!(validate(records).unwrap(), events);
    }

    #[test]
    fn test_load_toml_file() {
        let file = write_file(
            ".toml",
            r#"
[[events]]
id = 1
title = "Chiller Service"
date = "2026-03-02"
time = "07:00"
duration_hours = 2.5
type = "preventive"
priority = "high"
team = "Facilities"
status = "scheduled"
"#,
        );

        let events = EventFile::new(file.path()).load().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Chiller Service");
        assert_eq!(events[0].duration_hours, 2.5);
    }

    #[test]
    fn test_load_json_bare_array_with_duration_alias() {
        let file = write_file(
            ".json",
            r#"[{"id": 3, "title": "Generator Inspection", "date": "2025-12-19",
                "time": "08:00", "duration": 3, "type": "corrective",
                "priority": "high", "team": "Electrical", "status": "in-progress"}]"#,
        );

        let events = EventFile::new(file.path()).load().unwrap();
        assert_eq!(events[0].status, EventStatus::InProgress);
        assert_eq!(events[0].duration_hours, 3.0);
    }

    #[test]
    fn test_load_json_wrapped_object() {
        let file = write_file(".json", r#"{"events": []}"#);
        assert!(EventFile::new(file.path()).load().unwrap().is_empty());
    }

    #[test]
    fn test_bad_date_in_file_is_invalid_date_format() {
        let file = write_file(
            ".json",
            r#"[{"id": 1, "title": "x", "date": "12/19/2025", "time": "08:00",
                "duration_hours": 1, "type": "scheduled", "priority": "low",
                "team": "t", "status": "planned"}]"#,
        );

        assert!(matches!(
            EventFile::new(file.path()).load(),
            Err(GridError::InvalidDateFormat(_))
        ));
    }

    #[test]
    fn test_sample_events_keep_their_schedule() {
        let events = sample_events();
        let slots: Vec<String> = events
            .iter()
            .map(|e| format!("{} {}", e.date, e.time.format("%H:%M")))
            .collect();

        assert_eq!(
            slots,
            vec![
                "2025-12-17 09:00",
                "2025-12-18 10:00",
                "2025-12-19 08:00",
                "2025-12-19 14:00",
                "2025-12-20 11:00",
            ]
        );
    }

    #[test]
    fn test_bad_time_in_file_is_invalid_time_slot() {
        let file = write_file(
            ".json",
            r#"[{"id": 1, "title": "x", "date": "2025-12-19", "time": "9am",
                "duration_hours": 1, "type": "scheduled", "priority": "low",
                "team": "t", "status": "planned"}]"#,
        );

        match EventFile::new(file.path()).load() {
            Err(GridError::InvalidTimeSlot(msg)) => assert!(msg.contains("9am")),
            other => panic!("expected InvalidTimeSlot, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let mut records: Vec<EventRecord> = sample_events().iter().map(EventRecord::from).collect();
        records[1].id = records[0].id;

        match validate(records) {
            Err(GridError::InvalidEvent(msg)) => assert!(msg.contains("duplicate")),
            other => panic!("expected InvalidEvent, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_extension_is_config_error() {
        let file = write_file(".csv", "id,title");
        assert!(matches!(EventFile::new(file.path()).load(), Err(GridError::Config(_))));
    }
}
