//! The fixed set of hour marks that lay out a day vertically.

use chrono::NaiveTime;
use serde::Serialize;

use crate::date::{format_time, parse_time};
use crate::error::{GridError, GridResult};

pub const DEFAULT_FIRST_HOUR: u32 = 6;
pub const DEFAULT_LAST_HOUR: u32 = 18;

/// Ordered, duplicate-free set of slot times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSlots {
    #[serde(serialize_with = "serialize_slots")]
    slots: Vec<NaiveTime>,
}

impl Default for TimeSlots {
    /// 06:00 through 18:00, one slot per hour.
    fn default() -> Self {
        TimeSlots {
            slots: hourly_marks(DEFAULT_FIRST_HOUR, DEFAULT_LAST_HOUR),
        }
    }
}

impl TimeSlots {
    /// Build from explicit "HH:MM" marks. Input order doesn't matter.
    pub fn new<S: AsRef<str>>(marks: &[S]) -> GridResult<Self> {
        let mut slots = marks
            .iter()
            .map(|m| parse_time(m.as_ref()))
            .collect::<GridResult<Vec<_>>>()?;

        slots.sort();
        slots.dedup();

        if slots.is_empty() {
            return Err(GridError::Config("At least one time slot is required".into()));
        }

        Ok(TimeSlots { slots })
    }

    /// One slot per hour from `first` to `last`, inclusive.
    pub fn hourly(first: u32, last: u32) -> GridResult<Self> {
        if first > last || last > 23 {
            return Err(GridError::Config(format!(
                "Invalid slot hours {first:02}:00-{last:02}:00"
            )));
        }

        Ok(TimeSlots {
            slots: hourly_marks(first, last),
        })
    }

    pub fn contains(&self, time: NaiveTime) -> bool {
        self.slots.binary_search(&time).is_ok()
    }

    /// Check that `time` is a configured slot.
    pub fn validate(&self, time: NaiveTime) -> GridResult<NaiveTime> {
        if self.contains(time) {
            Ok(time)
        } else {
            Err(GridError::InvalidTimeSlot(format_time(time)))
        }
    }

    /// Parse "HH:MM" and check it against the slot set.
    pub fn parse(&self, s: &str) -> GridResult<NaiveTime> {
        self.validate(parse_time(s)?)
    }

    pub fn iter(&self) -> impl Iterator<Item = NaiveTime> + '_ {
        self.slots.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

fn hourly_marks(first: u32, last: u32) -> Vec<NaiveTime> {
    (first..=last)
        .filter_map(|h| NaiveTime::from_hms_opt(h, 0, 0))
        .collect()
}

fn serialize_slots<S: serde::Serializer>(slots: &[NaiveTime], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(slots.iter().map(|t| format_time(*t)))
}
