//! Gap slicing -- turn a free gap into working-hour slots.
//!
//! A gap between two busy intervals may span several days and reach far
//! outside anyone's working hours. This module walks the gap one wall-clock
//! day at a time (in the configured timezone), intersects it with each day's
//! working-hour band, and keeps the pieces long enough for the requested
//! meeting.

use chrono::{
    DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Utc, Weekday,
};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::busy::TimeSlot;
use crate::options::SchedulerOptions;

/// A time range in which every selected participant is free.
///
/// Slots are half-open `[start, end)` and never cross a day's working-hour
/// band. `duration_minutes` is the full length of the block; callers pick a
/// concrete meeting start inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreeSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub duration_minutes: i64,
}

impl FreeSlot {
    /// The interval an event-creation request should use when this slot is
    /// picked: the meeting starts at the top of the slot and runs for
    /// `duration_minutes`.
    pub fn booking(&self, duration_minutes: i64) -> TimeSlot {
        TimeSlot {
            start: self.start,
            end: self.start + Duration::minutes(duration_minutes),
        }
    }
}

/// Slice the gap `[gap_start, gap_end)` into per-day working-hour slots.
///
/// Iterates calendar days in `options.timezone` starting at the day of
/// `gap_start`. Saturdays and Sundays are skipped when `exclude_weekends` is
/// set. For every remaining day the gap is intersected with the day's
/// `[work_hour_start:00, work_hour_end:00)` band, and the intersection is
/// emitted when it is at least `duration_minutes` long. The whole available
/// block is emitted rather than duration-sized increments.
///
/// At most `budget` slots are produced; the walk also ends once the day
/// being considered starts after `gap_end`, so the call is always bounded.
/// Assumes `options` has been validated.
pub fn slice_gap_into_work_hours(
    gap_start: DateTime<Utc>,
    gap_end: DateTime<Utc>,
    options: &SchedulerOptions,
    budget: usize,
) -> Vec<FreeSlot> {
    let tz = options.timezone;
    let mut day = gap_start.with_timezone(&tz).date_naive();
    let last_day = gap_end.with_timezone(&tz).date_naive();

    let mut slots = Vec::new();
    while day <= last_day && slots.len() < budget {
        if !(options.exclude_weekends && is_weekend(day)) {
            if let Some((work_start, work_end)) = working_band(day, options) {
                let effective_start = gap_start.max(work_start);
                let effective_end = gap_end.min(work_end);
                let duration_minutes = (effective_end - effective_start).num_minutes();
                if duration_minutes >= options.duration_minutes {
                    slots.push(FreeSlot {
                        start: effective_start,
                        end: effective_end,
                        duration_minutes,
                    });
                }
            }
        }
        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    slots
}

fn is_weekend(day: NaiveDate) -> bool {
    matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Resolve the day's working-hour band to UTC instants.
///
/// Returns `None` when the band cannot be resolved in the configured zone;
/// such a day simply emits nothing.
fn working_band(day: NaiveDate, options: &SchedulerOptions) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let start = resolve_wall_clock(day, options.work_hour_start, options.timezone)?;
    let end = resolve_wall_clock(day, options.work_hour_end, options.timezone)?;
    Some((start, end))
}

/// Map a wall-clock hour on a given day to a UTC instant.
///
/// DST handling is best effort: an ambiguous local time resolves to the
/// earlier instant, and a time skipped by a spring-forward transition is
/// shifted one hour later.
fn resolve_wall_clock(day: NaiveDate, hour: u32, tz: Tz) -> Option<DateTime<Utc>> {
    let local = day.and_hms_opt(hour, 0, 0)?;
    to_instant(tz, local).or_else(|| to_instant(tz, local + Duration::hours(1)))
}

fn to_instant(tz: Tz, local: NaiveDateTime) -> Option<DateTime<Utc>> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Some(dt.with_timezone(&Utc)),
        LocalResult::None => None,
    }
}
