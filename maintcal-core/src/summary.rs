//! Priority legend counts and the upcoming-task list.

use chrono::NaiveDate;
use serde::Serialize;

use crate::event::{MaintenanceEvent, Priority};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PriorityCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl PriorityCounts {
    pub fn tally<'a, I>(events: I) -> Self
    where
        I: IntoIterator<Item = &'a MaintenanceEvent>,
    {
        let mut counts = PriorityCounts::default();
        for event in events {
            match event.priority {
                Priority::High => counts.high += 1,
                Priority::Medium => counts.medium += 1,
                Priority::Low => counts.low += 1,
            }
        }
        counts
    }

    pub fn get(&self, priority: Priority) -> usize {
        match priority {
            Priority::High => self.high,
            Priority::Medium => self.medium,
            Priority::Low => self.low,
        }
    }

    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }
}

/// Events on or after `from`, soonest first, at most `limit` of them.
/// Events sharing a date and time keep their input order.
pub fn upcoming(events: &[MaintenanceEvent], from: NaiveDate, limit: usize) -> Vec<&MaintenanceEvent> {
    let mut found: Vec<&MaintenanceEvent> = events.iter().filter(|e| e.date >= from).collect();
    found.sort_by_key(|e| (e.date, e.time));
    found.truncate(limit);
    found
}
