//! Mini month calendar: whole Sunday-first weeks covering a month.

use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

use crate::error::{GridError, GridResult};
use crate::week::{DAYS_PER_WEEK, Direction, shift_weeks, week_window};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthDay {
    pub date: NaiveDate,
    /// False for the leading/trailing days borrowed from adjacent months.
    pub in_month: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<[MonthDay; DAYS_PER_WEEK]>,
}

impl MonthGrid {
    pub fn first_day(&self) -> Option<NaiveDate> {
        self.weeks.first().map(|w| w[0].date)
    }

    pub fn last_day(&self) -> Option<NaiveDate> {
        self.weeks.last().map(|w| w[DAYS_PER_WEEK - 1].date)
    }

    pub fn days(&self) -> impl Iterator<Item = &MonthDay> {
        self.weeks.iter().flat_map(|w| w.iter())
    }
}

/// The month containing `anchor`, padded to whole weeks.
pub fn month_grid(anchor: NaiveDate) -> GridResult<MonthGrid> {
    let first = first_of_month(anchor);
    let last = last_of_month(anchor);

    let mut weeks = Vec::new();
    let mut sunday = week_window(first)?.start();

    while sunday <= last {
        let window = week_window(sunday)?;
        let mut week = [MonthDay {
            date: sunday,
            in_month: false,
        }; DAYS_PER_WEEK];

        for (slot, date) in week.iter_mut().zip(window.iter()) {
            *slot = MonthDay {
                date,
                in_month: date.month() == anchor.month() && date.year() == anchor.year(),
            };
        }

        weeks.push(week);
        if window.end() >= last {
            break;
        }
        sunday = shift_weeks(sunday, 1)?;
    }

    Ok(MonthGrid {
        year: anchor.year(),
        month: anchor.month(),
        weeks,
    })
}

/// Same day of the previous/next month, clamped to that month's last day.
pub fn navigate_month(anchor: NaiveDate, direction: Direction) -> GridResult<NaiveDate> {
    shift_months(anchor, direction.sign())
}

/// Shift by `months` (negative goes back), clamping the day of month.
pub fn shift_months(anchor: NaiveDate, months: i64) -> GridResult<NaiveDate> {
    let shifted = u32::try_from(months.unsigned_abs()).ok().and_then(|n| {
        if months >= 0 {
            anchor.checked_add_months(Months::new(n))
        } else {
            anchor.checked_sub_months(Months::new(n))
        }
    });

    shifted.ok_or_else(|| GridError::DateOutOfRange(format!("{anchor} {months:+} months")))
}

/// Header label such as "December 2025".
pub fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn last_of_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}
