//! TUI rendering for maintcal-core types.
//!
//! Everything here is a pure function from engine output to a `String`;
//! colors come from owo_colors. Priority colors: high = red, medium = yellow,
//! low = blue.

use chrono::{Datelike, NaiveDate};
use maintcal_core::date::format_time;
use maintcal_core::grid::{GridCell, WeekGrid};
use maintcal_core::month::{MonthGrid, month_label};
use maintcal_core::summary::PriorityCounts;
use maintcal_core::week::{WEEKDAY_LABELS, week_label};
use maintcal_core::{EventStatus, MaintenanceEvent, Priority};
use owo_colors::OwoColorize;

use crate::view::ViewState;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Priority {
    fn render(&self) -> String {
        colorize_priority(*self, "●")
    }
}

impl Render for EventStatus {
    fn render(&self) -> String {
        let tag = format!("[{}]", self);
        match self {
            EventStatus::Scheduled => tag.blue().to_string(),
            EventStatus::InProgress => tag.yellow().to_string(),
            EventStatus::Pending | EventStatus::Planned => tag.dimmed().to_string(),
        }
    }
}

impl Render for MaintenanceEvent {
    fn render(&self) -> String {
        let title = colorize_priority(self.priority, &self.title);
        let alert = if self.priority == Priority::High { " !" } else { "" };
        let details = format!(
            "{} • {}h • {}",
            format_time(self.time),
            format_hours(self.duration_hours),
            self.team
        );

        format!(
            "{} {}{} {} {}",
            self.priority.render(),
            title,
            alert.red(),
            details.dimmed(),
            self.status.render()
        )
    }
}

/// Colorize text according to the priority
fn colorize_priority(priority: Priority, text: &str) -> String {
    match priority {
        Priority::High => text.red().to_string(),
        Priority::Medium => text.yellow().to_string(),
        Priority::Low => text.blue().to_string(),
    }
}

/// 1.5 -> "1.5", 2.0 -> "2"
fn format_hours(hours: f64) -> String {
    if hours.fract() == 0.0 {
        format!("{}", hours as i64)
    } else {
        format!("{hours}")
    }
}

/// Width of one day column in the week table
const COLUMN_WIDTH: usize = 14;
const TIME_WIDTH: usize = 6;

/// Cut `text` to `width` characters, marking the cut with '…'
fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return format!("{text:<width$}");
    }
    let cut: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{cut}…")
}

/// "Week 51 • Today   December 2025"
fn render_header(state: &ViewState) -> String {
    let mut badge = week_label(state.anchor);
    if state.shows_today() {
        badge.push_str(" • Today");
    }
    format!("{}   {}", badge.bold(), month_label(state.anchor))
}

/// Single cell content padded to the column width, colored by the first event.
fn render_cell(cell: &GridCell<'_>) -> String {
    match cell.events.as_slice() {
        [] => " ".repeat(COLUMN_WIDTH),
        [only] => colorize_priority(only.priority, &fit(&only.title, COLUMN_WIDTH)),
        [first, rest @ ..] => {
            let more = format!(" +{}", rest.len());
            let width = COLUMN_WIDTH.saturating_sub(more.chars().count());
            format!(
                "{}{}",
                colorize_priority(first.priority, &fit(&first.title, width)),
                more.dimmed()
            )
        }
    }
}

pub fn render_week(grid: &WeekGrid<'_>, state: &ViewState) -> String {
    let mut lines = vec![render_header(state), String::new()];

    let mut header = format!("{:<TIME_WIDTH$}", "Time");
    for (label, date) in WEEKDAY_LABELS.iter().zip(grid.window.iter()) {
        let text = fit(&format!("{} {}", label, date.day()), COLUMN_WIDTH);
        if date == state.today {
            header.push_str(&format!(" {}", text.blue().bold()));
        } else {
            header.push_str(&format!(" {}", text.dimmed()));
        }
    }
    lines.push(header);

    for row in &grid.rows {
        let mut line = format!("{:<TIME_WIDTH$}", format_time(row.time));
        for cell in &row.cells {
            line.push(' ');
            line.push_str(&render_cell(cell));
        }
        lines.push(line);
    }

    let booked: Vec<&MaintenanceEvent> = grid
        .rows
        .iter()
        .flat_map(|row| row.cells.iter())
        .flat_map(|cell| cell.events.iter().copied())
        .collect();

    if !booked.is_empty() {
        lines.push(String::new());
        lines.extend(booked.iter().map(|e| format!("  {} {}", e.date.format("%a").dimmed(), e.render())));
    }

    lines.extend(render_unplaced(&grid.unplaced));
    lines.join("\n")
}

pub fn render_day(grid: &WeekGrid<'_>, state: &ViewState) -> String {
    let mut lines = vec![
        format!(
            "{}   {}",
            state.anchor.format("%A %B %-d, %Y").to_string().bold(),
            week_label(state.anchor).dimmed()
        ),
        String::new(),
    ];

    for cell in grid.day(state.anchor).unwrap_or_default() {
        let time = format_time(cell.time);
        if cell.is_empty() {
            lines.push(time.dimmed().to_string());
        } else {
            for event in &cell.events {
                lines.push(format!("{}  {}", time, event.render()));
            }
        }
    }

    let unplaced: Vec<&MaintenanceEvent> = grid
        .unplaced
        .iter()
        .copied()
        .filter(|e| e.date == state.anchor)
        .collect();
    lines.extend(render_unplaced(&unplaced));

    lines.join("\n")
}

fn render_unplaced(unplaced: &[&MaintenanceEvent]) -> Vec<String> {
    if unplaced.is_empty() {
        return Vec::new();
    }

    let mut lines = vec![String::new(), "Not on the slot grid:".yellow().to_string()];
    lines.extend(unplaced.iter().map(|e| format!("  {} {}", e.date, e.render())));
    lines
}

/// Mini month calendar; days with events are bold, today is highlighted.
pub fn render_month(grid: &MonthGrid, events: &[MaintenanceEvent], state: &ViewState) -> String {
    let mut lines = vec![month_label(state.anchor).bold().to_string(), String::new()];

    lines.push(
        ["S", "M", "T", "W", "T", "F", "S"]
            .iter()
            .map(|d| format!("{d:>3}"))
            .collect::<Vec<_>>()
            .join("")
            .dimmed()
            .to_string(),
    );

    for week in &grid.weeks {
        let mut line = String::new();
        for day in week {
            let text = format!("{:>3}", day.date.day());
            let has_events = events.iter().any(|e| e.date == day.date);

            let styled = if day.date == state.today {
                text.on_blue().bold().to_string()
            } else if !day.in_month {
                text.dimmed().to_string()
            } else if has_events {
                text.bold().to_string()
            } else {
                text
            };
            line.push_str(&styled);
        }
        lines.push(line);
    }

    lines.join("\n")
}

pub fn render_legend(counts: &PriorityCounts) -> String {
    let mut lines = vec!["Priority Legend".bold().to_string()];

    for priority in Priority::ALL {
        let count = counts.get(priority);
        let label = format!("{} Priority", capitalize(priority.as_str()));
        lines.push(format!(
            "  {} {:<16} {}",
            priority.render(),
            label,
            format!("{} {}", count, pluralize("task", count)).dimmed()
        ));
    }

    lines.join("\n")
}

pub fn render_upcoming(events: &[&MaintenanceEvent]) -> String {
    if events.is_empty() {
        return "No upcoming maintenance tasks".dimmed().to_string();
    }

    let mut lines = vec!["Upcoming Maintenance Tasks".bold().to_string()];
    for event in events {
        lines.push(format!("  {} {}", format_upcoming_date(event.date).dimmed(), event.render()));
    }
    lines.join("\n")
}

fn format_upcoming_date(date: NaiveDate) -> String {
    date.format("%a %b %-d").to_string()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Simple pluralization helper
fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
