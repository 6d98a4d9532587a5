//! Busy-interval aggregation -- reduce an event snapshot to a merged timeline.
//!
//! Filters the caller's event list down to the selected participants and the
//! search window, recovers malformed records, and merges what remains into an
//! ordered list of disjoint busy intervals.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::options::SchedulerOptions;

/// Events at least this long are treated as negotiable soft holds when
/// `exclude_long_events` is set.
const LONG_EVENT_MINUTES: i64 = 240;

/// A calendar event as supplied by the caller.
///
/// The search reads only these three fields; any other fields on the wire are
/// ignored during deserialization and no field is ever mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Identity of the calendar owner this event blocks.
    pub owner: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// A half-open time range `[start, end)`.
///
/// Represents a busy period in the merged timeline, or a concrete booking
/// interval produced from a free slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeSlot {
    /// Length of the slot in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// Merge the relevant busy intervals of the selected participants.
///
/// An event is relevant when its owner is in `participants` and it overlaps
/// the window (`end > window_start && start < window_end`, so events that
/// only touch a boundary are excluded). Records with `end < start` are
/// clamped to zero duration at `start` and then dropped, since an empty
/// interval blocks nothing. With `exclude_long_events` set, events of four
/// hours or more are treated as soft holds and dropped as well.
///
/// Overlapping or back-to-back intervals are merged into one -- two meetings
/// ending and starting at the same instant leave no usable gap between them.
/// The returned intervals are sorted, pairwise disjoint, and keep their true
/// extents rather than being clipped to the window.
pub fn merge_busy_intervals(
    events: &[EventRecord],
    participants: &[String],
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
    options: &SchedulerOptions,
) -> Vec<TimeSlot> {
    let selected: HashSet<&str> = participants.iter().map(String::as_str).collect();

    let mut intervals: Vec<TimeSlot> = events
        .iter()
        .filter(|e| selected.contains(e.owner.as_str()))
        .map(|e| TimeSlot {
            start: e.start,
            end: e.end.max(e.start),
        })
        .filter(|s| s.start < s.end)
        .filter(|s| s.end > window_start && s.start < window_end)
        .filter(|s| !options.exclude_long_events || s.duration_minutes() < LONG_EVENT_MINUTES)
        .collect();

    if intervals.is_empty() {
        return Vec::new();
    }

    // Sort by start time (then by end time for stability).
    intervals.sort_by_key(|s| (s.start, s.end));

    let mut merged: Vec<TimeSlot> = Vec::new();
    for slot in intervals {
        if let Some(last) = merged.last_mut() {
            if slot.start <= last.end {
                // Overlapping or adjacent -- extend the current interval.
                last.end = last.end.max(slot.end);
                continue;
            }
        }
        merged.push(slot);
    }

    merged
}
