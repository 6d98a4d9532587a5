//! Error types for scheduling operations.

use thiserror::Error;

/// Errors surfaced at the scheduling boundary.
///
/// Configuration problems are rejected before the search runs; malformed
/// event data is recovered in place and never reaches this type.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// The requested meeting length is zero or negative.
    #[error("Invalid meeting duration: {0} minutes (must be positive)")]
    InvalidDuration(i64),

    /// A working-hour boundary lies outside the 0-23 clock range.
    #[error("Work hour out of range: {0} (expected 0-23)")]
    WorkHourOutOfRange(u32),

    /// The working-hour band is empty or reversed.
    #[error("Empty working-hour band: start hour {start} is not before end hour {end}")]
    EmptyWorkHours { start: u32, end: u32 },

    /// A roster file was not valid JSON for the expected shape.
    #[error("Invalid roster: {0}")]
    InvalidRoster(#[from] serde_json::Error),
}

/// Convenience alias used throughout slotwise-core.
pub type Result<T> = std::result::Result<T, ScheduleError>;
