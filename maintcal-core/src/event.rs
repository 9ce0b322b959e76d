//! Maintenance event types.
//!
//! Events are created outside the engine (sample data, an events file, or a
//! backing store) and are only ever read by it.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::date::{format_date, format_time, parse_date, parse_time};
use crate::error::{GridError, GridResult};

/// A scheduled maintenance activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceEvent {
    pub id: u64,
    pub title: String,
    pub date: NaiveDate,
    #[serde(with = "crate::date::hhmm")]
    pub time: NaiveTime,
    /// Length of the job in hours (e.g. 1.5)
    pub duration_hours: f64,
    #[serde(rename = "type")]
    pub kind: MaintenanceType,
    pub priority: Priority,
    pub team: String,
    pub status: EventStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaintenanceType {
    Preventive,
    Corrective,
    Scheduled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventStatus {
    Scheduled,
    InProgress,
    Pending,
    Planned,
}

impl MaintenanceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaintenanceType::Preventive => "preventive",
            MaintenanceType::Corrective => "corrective",
            MaintenanceType::Scheduled => "scheduled",
        }
    }
}

impl Priority {
    /// All priorities, highest first (legend order).
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Scheduled => "scheduled",
            EventStatus::InProgress => "in-progress",
            EventStatus::Pending => "pending",
            EventStatus::Planned => "planned",
        }
    }
}

impl fmt::Display for MaintenanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaintenanceType {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "preventive" => Ok(MaintenanceType::Preventive),
            "corrective" => Ok(MaintenanceType::Corrective),
            "scheduled" => Ok(MaintenanceType::Scheduled),
            other => Err(GridError::InvalidEvent(format!(
                "unknown maintenance type '{other}'"
            ))),
        }
    }
}

impl FromStr for Priority {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(GridError::InvalidEvent(format!("unknown priority '{other}'"))),
        }
    }
}

impl FromStr for EventStatus {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(EventStatus::Scheduled),
            "in-progress" => Ok(EventStatus::InProgress),
            "pending" => Ok(EventStatus::Pending),
            "planned" => Ok(EventStatus::Planned),
            other => Err(GridError::InvalidEvent(format!("unknown status '{other}'"))),
        }
    }
}

impl fmt::Display for MaintenanceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Wire form of an event as it appears in events files.
///
/// Every field is kept as a plain string so that a malformed date or time
/// surfaces as `InvalidDateFormat` / `InvalidTimeSlot` instead of an opaque
/// deserialization error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: u64,
    pub title: String,
    pub date: String,
    pub time: String,
    #[serde(alias = "duration")]
    pub duration_hours: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub priority: String,
    pub team: String,
    pub status: String,
}

impl TryFrom<EventRecord> for MaintenanceEvent {
    type Error = GridError;

    fn try_from(record: EventRecord) -> GridResult<Self> {
        if !(record.duration_hours.is_finite() && record.duration_hours > 0.0) {
            return Err(GridError::InvalidEvent(format!(
                "event {} has non-positive duration {}",
                record.id, record.duration_hours
            )));
        }

        Ok(MaintenanceEvent {
            id: record.id,
            date: parse_date(&record.date)?,
            time: parse_time(&record.time)?,
            duration_hours: record.duration_hours,
            kind: record.kind.parse()?,
            priority: record.priority.parse()?,
            status: record.status.parse()?,
            title: record.title,
            team: record.team,
        })
    }
}

impl From<&MaintenanceEvent> for EventRecord {
    fn from(event: &MaintenanceEvent) -> Self {
        EventRecord {
            id: event.id,
            title: event.title.clone(),
            date: format_date(event.date),
            time: format_time(event.time),
            duration_hours: event.duration_hours,
            kind: event.kind.to_string(),
            priority: event.priority.to_string(),
            team: event.team.clone(),
            status: event.status.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> EventRecord {
        EventRecord {
            id: 7,
            title: "Boiler Flush".to_string(),
            date: "2025-12-18".to_string(),
            time: "10:00".to_string(),
            duration_hours: 1.5,
            kind: "corrective".to_string(),
            priority: "medium".to_string(),
            team: "Facilities".to_string(),
            status: "in-progress".to_string(),
        }
    }

    #[test]
    fn test_record_converts_to_event() {
        let event = MaintenanceEvent::try_from(record()).unwrap();
        assert_eq!(event.date, NaiveDate::from_ymd_opt(2025, 12, 18).unwrap());
        assert_eq!(event.time, NaiveTime::from_hms_opt(10, 0, 0).unwrap());
        assert_eq!(event.kind, MaintenanceType::Corrective);
        assert_eq!(event.status, EventStatus::InProgress);
        assert_eq!(EventRecord::from(&event).status, "in-progress");
    }

    #[test]
    fn test_record_with_bad_date_is_invalid_date_format() {
        let mut bad = record();
        bad.date = "18.12.2025".to_string();
        assert!(matches!(
            MaintenanceEvent::try_from(bad),
            Err(GridError::InvalidDateFormat(_))
        ));
    }

    #[test]
    fn test_record_with_zero_duration_is_rejected() {
        let mut bad = record();
        bad.duration_hours = 0.0;
        assert!(matches!(
            MaintenanceEvent::try_from(bad),
            Err(GridError::InvalidEvent(_))
        ));
    }

    #[test]
    fn test_unknown_priority_is_rejected() {
        assert!("urgent".parse::<Priority>().is_err());
        assert_eq!("high".parse::<Priority>().unwrap(), Priority::High);
    }

    #[test]
    fn test_event_serializes_type_and_time_like_the_wire_form() {
        let event = MaintenanceEvent::try_from(record()).unwrap();
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "corrective");
        assert_eq!(json["time"], "10:00");
        assert_eq!(json["status"], "in-progress");
    }
}
