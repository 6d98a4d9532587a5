//! The combined free-time search.
//!
//! Merges the selected participants' busy intervals, then walks the gaps
//! between them (and between the window boundaries) and slices each gap into
//! working-hour slots. The whole computation is pure: one call, one snapshot,
//! no shared state.

use chrono::{DateTime, Utc};

use crate::busy::{merge_busy_intervals, EventRecord, TimeSlot};
use crate::error::Result;
use crate::options::SchedulerOptions;
use crate::slicer::{slice_gap_into_work_hours, FreeSlot};

/// Find every time range in which all `participants` are simultaneously free.
///
/// Busy intervals are aggregated with [`merge_busy_intervals`] and the gaps
/// between them are sliced with [`slice_gap_into_work_hours`]; see those
/// functions for the filtering and slicing rules. Results are in
/// chronological order and capped at `options.max_slots`.
///
/// An empty participant set and a reversed or empty window both yield an
/// empty result rather than an error: there is nothing to search, and a
/// "fully free" answer for nobody would only mislead callers.
///
/// # Errors
///
/// Returns [`ScheduleError`](crate::ScheduleError) when `options` fails
/// validation. Malformed event data never errors; see
/// [`merge_busy_intervals`].
pub fn find_common_free_time(
    events: &[EventRecord],
    participants: &[String],
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
    options: &SchedulerOptions,
) -> Result<Vec<FreeSlot>> {
    options.validate()?;

    if participants.is_empty() || window_start >= window_end {
        return Ok(Vec::new());
    }

    let busy = merge_busy_intervals(events, participants, window_start, window_end, options);

    // A zero-length sentinel at the window end forces the trailing gap to be
    // processed by the same loop as every other gap.
    let sentinel = TimeSlot {
        start: window_end,
        end: window_end,
    };

    let mut free: Vec<FreeSlot> = Vec::new();
    let mut cursor = window_start;

    for block in busy.iter().chain(std::iter::once(&sentinel)) {
        if cursor < block.start {
            let remaining = options.max_slots.saturating_sub(free.len());
            if remaining == 0 {
                break;
            }
            free.extend(slice_gap_into_work_hours(
                cursor,
                block.start,
                options,
                remaining,
            ));
        }
        cursor = cursor.max(block.end);
    }

    Ok(free)
}
