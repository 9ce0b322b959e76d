//! Error types for the maintenance calendar engine.

use thiserror::Error;

/// Errors that can occur while building calendar grids or loading events.
///
/// None of these are fatal: the engine keeps no state, so a failed call
/// leaves nothing behind. Callers decide whether to skip the offending
/// input or surface a warning.
#[derive(Error, Debug)]
pub enum GridError {
    #[error("Invalid date format '{0}'. Expected YYYY-MM-DD")]
    InvalidDateFormat(String),

    #[error("Time '{0}' is not a configured time slot")]
    InvalidTimeSlot(String),

    #[error("Date out of range: {0}")]
    DateOutOfRange(String),

    #[error("Invalid maintenance event: {0}")]
    InvalidEvent(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for calendar engine operations.
pub type GridResult<T> = Result<T, GridError>;
