//! Search constraints for the common free-time scheduler.

use chrono_tz::Tz;

use crate::error::{Result, ScheduleError};

/// Constraints applied to a free-time search.
///
/// Working hours are a daily half-open band `[work_hour_start:00,
/// work_hour_end:00)` evaluated as wall-clock time in `timezone`. The
/// defaults mirror a typical office setup: 60-minute meetings between 09:00
/// and 18:00, weekends excluded.
#[derive(Debug, Clone, PartialEq)]
pub struct SchedulerOptions {
    /// Minimum meeting length in minutes. Slots shorter than this are
    /// never reported.
    pub duration_minutes: i64,
    /// First hour of the working day (0-23).
    pub work_hour_start: u32,
    /// Hour the working day ends, exclusive (0-23, must be greater than
    /// `work_hour_start`).
    pub work_hour_end: u32,
    /// Skip Saturdays and Sundays entirely.
    pub exclude_weekends: bool,
    /// Treat events of four hours or longer as negotiable soft holds
    /// rather than conflicts.
    pub exclude_long_events: bool,
    /// Wall-clock zone in which day boundaries, weekdays, and working
    /// hours are evaluated.
    pub timezone: Tz,
    /// Upper bound on the number of reported slots. Keeps the search
    /// bounded on pathological multi-year windows.
    pub max_slots: usize,
}

impl Default for SchedulerOptions {
    fn default() -> Self {
        Self {
            duration_minutes: 60,
            work_hour_start: 9,
            work_hour_end: 18,
            exclude_weekends: true,
            exclude_long_events: false,
            timezone: Tz::UTC,
            max_slots: 100,
        }
    }
}

impl SchedulerOptions {
    /// Check the configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::InvalidDuration` when `duration_minutes` is
    /// not positive, `ScheduleError::WorkHourOutOfRange` when either hour
    /// falls outside 0-23, and `ScheduleError::EmptyWorkHours` when the
    /// band is reversed or empty.
    pub fn validate(&self) -> Result<()> {
        if self.duration_minutes <= 0 {
            return Err(ScheduleError::InvalidDuration(self.duration_minutes));
        }
        if self.work_hour_start > 23 {
            return Err(ScheduleError::WorkHourOutOfRange(self.work_hour_start));
        }
        if self.work_hour_end > 23 {
            return Err(ScheduleError::WorkHourOutOfRange(self.work_hour_end));
        }
        if self.work_hour_start >= self.work_hour_end {
            return Err(ScheduleError::EmptyWorkHours {
                start: self.work_hour_start,
                end: self.work_hour_end,
            });
        }
        Ok(())
    }
}
