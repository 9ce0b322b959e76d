//! Week windows, week numbers and week navigation.

use std::ops::Index;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};

pub const DAYS_PER_WEEK: usize = 7;

/// Short day names in window order (Sunday first).
pub const WEEKDAY_LABELS: [&str; DAYS_PER_WEEK] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// The seven consecutive dates of a Sunday-first week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekWindow {
    days: [NaiveDate; DAYS_PER_WEEK],
}

impl WeekWindow {
    /// The Sunday that opens the window.
    pub fn start(&self) -> NaiveDate {
        self.days[0]
    }

    /// The Saturday that closes the window.
    pub fn end(&self) -> NaiveDate {
        self.days[DAYS_PER_WEEK - 1]
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start() && date <= self.end()
    }

    pub fn days(&self) -> &[NaiveDate; DAYS_PER_WEEK] {
        &self.days
    }

    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.iter().copied()
    }
}

impl Index<usize> for WeekWindow {
    type Output = NaiveDate;

    fn index(&self, index: usize) -> &NaiveDate {
        &self.days[index]
    }
}

impl<'a> IntoIterator for &'a WeekWindow {
    type Item = &'a NaiveDate;
    type IntoIter = std::slice::Iter<'a, NaiveDate>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}

/// Direction of a single navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    pub fn sign(&self) -> i64 {
        match self {
            Direction::Previous => -1,
            Direction::Next => 1,
        }
    }

    /// Map -1 / +1 to a direction. Any other value has no direction.
    pub fn from_sign(sign: i64) -> Option<Self> {
        match sign {
            -1 => Some(Direction::Previous),
            1 => Some(Direction::Next),
            _ => None,
        }
    }
}

/// The Sunday-first week containing `anchor`.
///
/// The window starts `anchor.weekday()` days (counted from Sunday) before
/// the anchor, so month and year boundaries need no special casing.
/// Fails only for weeks that spill past chrono's representable calendar.
pub fn week_window(anchor: NaiveDate) -> GridResult<WeekWindow> {
    let start = add_days(anchor, -(anchor.weekday().num_days_from_sunday() as i64))?;

    let mut days = [start; DAYS_PER_WEEK];
    for (i, day) in days.iter_mut().enumerate() {
        *day = add_days(start, i as i64)?;
    }

    Ok(WeekWindow { days })
}

/// `date` moved by `days` (negative goes back).
pub fn add_days(date: NaiveDate, days: i64) -> GridResult<NaiveDate> {
    Duration::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .ok_or_else(|| GridError::DateOutOfRange(format!("{date} {days:+} days")))
}

/// Simple 1-based week number: `ceil((day_of_year + weekday_of_jan1) / 7)`.
///
/// `day_of_year` is 1-based and `weekday_of_jan1` counts from Sunday = 0.
/// This is NOT ISO-8601: week 1 is whatever week holds January 1st, weeks
/// start on Sunday, and December 31st may land in week 53 (or 54 in a leap
/// year starting on Saturday). See `iso_week_number` for the standard one.
pub fn week_number(date: NaiveDate) -> u32 {
    let jan1_weekday = NaiveDate::from_yo_opt(date.year(), 1)
        .map(|jan1| jan1.weekday().num_days_from_sunday())
        .unwrap_or(0);

    (date.ordinal() + jan1_weekday).div_ceil(DAYS_PER_WEEK as u32)
}

/// ISO-8601 week number (Monday-first, week 1 holds the first Thursday).
pub fn iso_week_number(date: NaiveDate) -> u32 {
    date.iso_week().week()
}

/// Shift `anchor` by one week in `direction`.
pub fn navigate_week(anchor: NaiveDate, direction: Direction) -> GridResult<NaiveDate> {
    shift_weeks(anchor, direction.sign())
}

/// Shift `anchor` by `weeks` whole weeks (negative goes back).
pub fn shift_weeks(anchor: NaiveDate, weeks: i64) -> GridResult<NaiveDate> {
    let days = weeks
        .checked_mul(DAYS_PER_WEEK as i64)
        .ok_or_else(|| GridError::DateOutOfRange(format!("{anchor} {weeks:+} weeks")))?;

    add_days(anchor, days)
}

/// Header label such as "Week 51".
pub fn week_label(date: NaiveDate) -> String {
    format!("Week {}", week_number(date))
}
