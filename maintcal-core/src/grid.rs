//! Placement of maintenance events into (date, slot) cells.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use tracing::{debug, warn};

use crate::date::format_time;
use crate::error::{GridError, GridResult};
use crate::event::MaintenanceEvent;
use crate::slots::TimeSlots;
use crate::week::{WeekWindow, week_number, week_window};

/// Events scheduled at exactly `date` and `time`, in input order.
///
/// There is no merging, sorting or deduplication: two jobs booked into the
/// same cell are both returned and the caller decides how to draw them.
pub fn events_for_cell<'a>(
    date: NaiveDate,
    time: NaiveTime,
    events: &'a [MaintenanceEvent],
) -> Vec<&'a MaintenanceEvent> {
    events
        .iter()
        .filter(|e| e.date == date && e.time == time)
        .collect()
}

/// One date column within one slot row.
#[derive(Debug, Clone, Serialize)]
pub struct GridCell<'a> {
    pub date: NaiveDate,
    #[serde(with = "crate::date::hhmm")]
    pub time: NaiveTime,
    pub events: Vec<&'a MaintenanceEvent>,
}

impl GridCell<'_> {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// One slot across the seven days of the window.
#[derive(Debug, Clone, Serialize)]
pub struct SlotRow<'a> {
    #[serde(with = "crate::date::hhmm")]
    pub time: NaiveTime,
    pub cells: Vec<GridCell<'a>>,
}

/// A laid-out week: window, week number, and one row per time slot.
#[derive(Debug, Clone, Serialize)]
pub struct WeekGrid<'a> {
    pub anchor: NaiveDate,
    pub week_number: u32,
    pub window: WeekWindow,
    pub rows: Vec<SlotRow<'a>>,
    /// Events dated inside the window whose time is not a slot.
    /// They appear in no cell; they are never moved to a nearby slot.
    pub unplaced: Vec<&'a MaintenanceEvent>,
}

impl<'a> WeekGrid<'a> {
    pub fn build(
        anchor: NaiveDate,
        slots: &TimeSlots,
        events: &'a [MaintenanceEvent],
    ) -> GridResult<Self> {
        let window = week_window(anchor)?;

        let rows = slots
            .iter()
            .map(|time| SlotRow {
                time,
                cells: window
                    .iter()
                    .map(|date| GridCell {
                        date,
                        time,
                        events: events_for_cell(date, time, events),
                    })
                    .collect(),
            })
            .collect();

        let unplaced: Vec<&MaintenanceEvent> = events
            .iter()
            .filter(|e| window.contains(e.date) && !slots.contains(e.time))
            .collect();

        for event in &unplaced {
            warn!(
                id = event.id,
                title = %event.title,
                time = %format_time(event.time),
                "event time is not a configured slot; leaving it out of the grid"
            );
        }

        let grid = WeekGrid {
            anchor,
            week_number: week_number(anchor),
            window,
            rows,
            unplaced,
        };

        debug!(
            %anchor,
            start = %grid.window.start(),
            placed = grid.placed_count(),
            unplaced = grid.unplaced.len(),
            "built week grid"
        );

        Ok(grid)
    }

    /// Like `build`, but an in-window event off the slot grid is an error.
    pub fn build_strict(
        anchor: NaiveDate,
        slots: &TimeSlots,
        events: &'a [MaintenanceEvent],
    ) -> GridResult<Self> {
        let window = week_window(anchor)?;
        reject_off_slot(slots, events, |date| window.contains(date))?;

        Self::build(anchor, slots, events)
    }

    /// Like `build_strict`, but only events on `anchor` itself are checked.
    /// Off-slot events elsewhere in the week still end up in `unplaced`.
    pub fn build_strict_day(
        anchor: NaiveDate,
        slots: &TimeSlots,
        events: &'a [MaintenanceEvent],
    ) -> GridResult<Self> {
        reject_off_slot(slots, events, |date| date == anchor)?;

        Self::build(anchor, slots, events)
    }

    /// The slot column for a single date, or `None` if it is outside the window.
    pub fn day(&self, date: NaiveDate) -> Option<Vec<&GridCell<'a>>> {
        let index = self.window.iter().position(|d| d == date)?;
        Some(self.rows.iter().map(|row| &row.cells[index]).collect())
    }

    pub fn cell(&self, date: NaiveDate, time: NaiveTime) -> Option<&GridCell<'a>> {
        self.rows
            .iter()
            .find(|row| row.time == time)?
            .cells
            .iter()
            .find(|cell| cell.date == date)
    }

    /// Number of event placements across all cells.
    pub fn placed_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.cells.iter())
            .map(|cell| cell.events.len())
            .sum()
    }
}

fn reject_off_slot(
    slots: &TimeSlots,
    events: &[MaintenanceEvent],
    covers: impl Fn(NaiveDate) -> bool,
) -> GridResult<()> {
    match events.iter().find(|e| covers(e.date) && !slots.contains(e.time)) {
        Some(event) => Err(GridError::InvalidTimeSlot(format!(
            "{} (event {} '{}')",
            format_time(event.time),
            event.id,
            event.title
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventStatus, MaintenanceType, Priority};
    use crate::source::sample_events;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn titles(events: &[&MaintenanceEvent]) -> Vec<String> {
        events.iter().map(|e| e.title.clone()).collect()
    }

    fn event(id: u64, title: &str, date: NaiveDate, time: NaiveTime) -> MaintenanceEvent {
        MaintenanceEvent {
            id,
            title: title.to_string(),
            date,
            time,
            duration_hours: 1.0,
            kind: MaintenanceType::Scheduled,
            priority: Priority::Low,
            team: "Facilities".to_string(),
            status: EventStatus::Planned,
        }
    }

    #[test]
    fn test_events_for_cell_sample_scenario() {
        let events = sample_events();

        assert_eq!(
            titles(&events_for_cell(ymd(2025, 12, 19), hm(8, 0), &events)),
            vec!["Generator Inspection"]
        );
        assert_eq!(
            titles(&events_for_cell(ymd(2025, 12, 19), hm(14, 0), &events)),
            vec!["Fire Safety Test"]
        );
        assert_eq!(
            titles(&events_for_cell(ymd(2025, 12, 17), hm(9, 0), &events)),
            vec!["Server Maintenance"]
        );
        assert!(events_for_cell(ymd(2025, 12, 21), hm(9, 0), &events).is_empty());
    }

    #[test]
    fn test_events_for_cell_keeps_every_match_in_input_order() {
        let day = ymd(2025, 12, 18);
        let events = vec![
            event(1, "Pump A", day, hm(10, 0)),
            event(2, "Other day", ymd(2025, 12, 19), hm(10, 0)),
            event(3, "Pump B", day, hm(10, 0)),
            event(4, "Pump A", day, hm(10, 0)),
        ];

        let found = events_for_cell(day, hm(10, 0), &events);
        let ids: Vec<u64> = found.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn test_week_grid_places_sample_week() {
        let events = sample_events();
        let grid = WeekGrid::build(ymd(2025, 12, 19), &TimeSlots::default(), &events).unwrap();

        assert_eq!(grid.week_number, 51);
        assert_eq!(grid.window.start(), ymd(2025, 12, 14));
        assert_eq!(grid.rows.len(), 13);
        assert!(grid.rows.iter().all(|row| row.cells.len() == 7));
        assert_eq!(grid.placed_count(), 5);
        assert!(grid.unplaced.is_empty());

        let cell = grid.cell(ymd(2025, 12, 20), hm(11, 0)).unwrap();
        assert_eq!(titles(&cell.events), vec!["Elevator Maintenance"]);
    }

    #[test]
    fn test_off_slot_event_is_unplaced_not_moved() {
        let day = ymd(2025, 12, 16);
        let events = vec![event(1, "Half past", day, hm(9, 30))];
        let grid = WeekGrid::build(day, &TimeSlots::default(), &events).unwrap();

        assert_eq!(grid.placed_count(), 0);
        assert_eq!(grid.unplaced.len(), 1);
        assert!(grid.cell(day, hm(9, 0)).unwrap().is_empty());
        assert!(grid.cell(day, hm(10, 0)).unwrap().is_empty());
    }

    #[test]
    fn test_off_slot_event_outside_window_is_ignored() {
        let events = vec![event(1, "Next week", ymd(2025, 12, 23), hm(9, 30))];
        let grid = WeekGrid::build(ymd(2025, 12, 16), &TimeSlots::default(), &events).unwrap();
        assert!(grid.unplaced.is_empty());
    }

    #[test]
    fn test_build_strict_rejects_off_slot_event() {
        let day = ymd(2025, 12, 16);
        let events = vec![event(9, "Early", day, hm(5, 0))];

        match WeekGrid::build_strict(day, &TimeSlots::default(), &events) {
            Err(GridError::InvalidTimeSlot(msg)) => assert!(msg.starts_with("05:00")),
            other => panic!("expected InvalidTimeSlot, got {other:?}"),
        }

        let sample = sample_events();
        assert!(WeekGrid::build_strict(ymd(2025, 12, 19), &TimeSlots::default(), &sample).is_ok());
    }

    #[test]
    fn test_build_strict_day_only_checks_that_day() {
        let slots = TimeSlots::default();
        let events = vec![
            event(1, "Morning check", ymd(2025, 12, 19), hm(8, 0)),
            event(2, "Half past", ymd(2025, 12, 16), hm(9, 30)),
        ];

        let grid = WeekGrid::build_strict_day(ymd(2025, 12, 19), &slots, &events).unwrap();
        assert_eq!(grid.placed_count(), 1);
        assert_eq!(titles(&grid.unplaced), vec!["Half past"]);

        assert!(WeekGrid::build_strict(ymd(2025, 12, 19), &slots, &events).is_err());
        assert!(matches!(
            WeekGrid::build_strict_day(ymd(2025, 12, 16), &slots, &events),
            Err(GridError::InvalidTimeSlot(_))
        ));
    }

    #[test]
    fn test_build_at_calendar_edge_is_out_of_range() {
        let events = sample_events();
        assert!(matches!(
            WeekGrid::build(NaiveDate::MAX, &TimeSlots::default(), &events),
            Err(GridError::DateOutOfRange(_))
        ));
    }

    #[test]
    fn test_day_column() {
        let events = sample_events();
        let grid = WeekGrid::build(ymd(2025, 12, 19), &TimeSlots::default(), &events).unwrap();

        let friday = grid.day(ymd(2025, 12, 19)).unwrap();
        let booked: Vec<String> = friday
            .iter()
            .flat_map(|cell| cell.events.iter().map(|e| e.title.clone()))
            .collect();
        assert_eq!(booked, vec!["Generator Inspection", "Fire Safety Test"]);

        assert!(grid.day(ymd(2025, 12, 21)).is_none());
    }
}
