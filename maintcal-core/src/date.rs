//! Parsing and formatting of calendar dates and slot times.

use chrono::{NaiveDate, NaiveTime};

use crate::error::{GridError, GridResult};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// Parse YYYY-MM-DD as a calendar date (no time zone).
pub fn parse_date(s: &str) -> GridResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| GridError::InvalidDateFormat(s.to_string()))
}

/// Parse HH:MM as a time of day.
///
/// Anything that is not an hour:minute mark can never line up with a slot,
/// so it is reported as an invalid slot rather than a separate error.
pub fn parse_time(s: &str) -> GridResult<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), TIME_FORMAT)
        .map_err(|_| GridError::InvalidTimeSlot(s.to_string()))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Serde adapter storing a `NaiveTime` as "HH:MM".
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_time(*time))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_time(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_accepts_iso_calendar_date() {
        let date = parse_date("2025-12-19").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 12, 19).unwrap());
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        for input in ["", "19/12/2025", "2025-13-01", "2025-02-30", "tomorrow"] {
            match parse_date(input) {
                Err(GridError::InvalidDateFormat(s)) => assert_eq!(s, input),
                other => panic!("expected InvalidDateFormat for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_parse_time_rejects_non_hour_minute() {
        assert!(matches!(parse_time("noon"), Err(GridError::InvalidTimeSlot(_))));
        assert!(matches!(parse_time("25:00"), Err(GridError::InvalidTimeSlot(_))));
        assert_eq!(format_time(parse_time("14:00").unwrap()), "14:00");
    }
}
