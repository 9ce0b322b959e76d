//! Week grid engine for the maintenance calendar.
//!
//! Pure functions over calendar dates and a flat list of maintenance events:
//! - `week` computes the Sunday-first week window, week numbers and navigation
//! - `grid` places events into (date, time slot) cells
//! - `month` builds the padded mini month calendar
//! - `source` supplies events (built-in sample data or an events file)

pub mod config;
pub mod date;
pub mod error;
pub mod event;
pub mod grid;
pub mod month;
pub mod slots;
pub mod source;
pub mod summary;
pub mod week;

pub use error::{GridError, GridResult};
pub use event::{EventStatus, MaintenanceEvent, MaintenanceType, Priority};
pub use grid::{WeekGrid, events_for_cell};
pub use slots::TimeSlots;
pub use week::{Direction, WeekWindow, navigate_week, week_number, week_window};
