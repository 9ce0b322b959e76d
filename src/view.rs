//! Explicit view state: which view is shown and around which date.
//!
//! The state is a plain value owned by `main`; rendering functions receive
//! it (or the data derived from it) instead of reading anything ambient.

use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use maintcal_core::date::parse_date;
use maintcal_core::month::shift_months;
use maintcal_core::week::{add_days, shift_weeks};
use maintcal_core::week_window;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Day,
    Week,
    Month,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub mode: ViewMode,
    pub anchor: NaiveDate,
    pub today: NaiveDate,
}

impl ViewState {
    /// Build the state from the `--date` flag, defaulting to `today`.
    pub fn new(mode: ViewMode, date: Option<&str>, today: NaiveDate) -> Result<Self> {
        let anchor = match date {
            Some(s) => parse_date(s)?,
            None => today,
        };

        Ok(ViewState { mode, anchor, today })
    }

    /// Move `steps` units of the current mode; negative goes back.
    pub fn shift(self, steps: i64) -> Result<Self> {
        let anchor = match self.mode {
            ViewMode::Day => add_days(self.anchor, steps)?,
            ViewMode::Week => shift_weeks(self.anchor, steps)?,
            ViewMode::Month => shift_months(self.anchor, steps)?,
        };

        Ok(ViewState { anchor, ..self })
    }

    pub fn shows_today(&self) -> bool {
        match self.mode {
            ViewMode::Day => self.anchor == self.today,
            ViewMode::Week => week_window(self.anchor).is_ok_and(|w| w.contains(self.today)),
            ViewMode::Month => {
                self.anchor.year() == self.today.year() && self.anchor.month() == self.today.month()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_defaults_to_today() {
        let today = ymd(2025, 12, 19);
        let state = ViewState::new(ViewMode::Week, None, today).unwrap();
        assert_eq!(state.anchor, today);
        assert!(state.shows_today());
    }

    #[test]
    fn test_new_rejects_bad_date() {
        assert!(ViewState::new(ViewMode::Week, Some("19.12.2025"), ymd(2025, 12, 19)).is_err());
    }

    #[test]
    fn test_shift_depends_on_mode() {
        let today = ymd(2025, 12, 19);
        let week = ViewState::new(ViewMode::Week, None, today).unwrap();
        let day = ViewState { mode: ViewMode::Day, ..week };
        let month = ViewState { mode: ViewMode::Month, ..week };

        assert_eq!(week.shift(-2).unwrap().anchor, ymd(2025, 12, 5));
        assert_eq!(day.shift(1).unwrap().anchor, ymd(2025, 12, 20));
        assert_eq!(month.shift(1).unwrap().anchor, ymd(2026, 1, 19));
    }

    #[test]
    fn test_shift_beyond_the_calendar_fails_in_every_mode() {
        let today = ymd(2025, 12, 19);
        let week = ViewState::new(ViewMode::Week, None, today).unwrap();
        let day = ViewState { mode: ViewMode::Day, ..week };
        let month = ViewState { mode: ViewMode::Month, ..week };

        let err = day.shift(i64::MAX / 2).unwrap_err();
        assert!(err.to_string().contains("out of range"), "{err}");
        assert!(week.shift(1_000_000_000).is_err());
        assert!(month.shift(i64::MIN).is_err());
    }

    #[test]
    fn test_week_at_calendar_edge_does_not_show_today() {
        let today = ymd(2025, 12, 19);
        let edge = ViewState { mode: ViewMode::Week, anchor: NaiveDate::MAX, today };
        assert!(!edge.shows_today());
    }

    #[test]
    fn test_shows_today_per_mode() {
        let today = ymd(2025, 12, 19);
        let week = ViewState::new(ViewMode::Week, Some("2025-12-14"), today).unwrap();
        let day = ViewState { mode: ViewMode::Day, ..week };
        let month = ViewState { mode: ViewMode::Month, ..week };

        assert!(week.shows_today());
        assert!(!day.shows_today());
        assert!(month.shows_today());
        assert!(!month.shift(1).unwrap().shows_today());
    }
}
