//! Day-by-day grouping of free slots for display surfaces.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::Serialize;

use crate::slicer::FreeSlot;

/// All free slots falling on one wall-clock date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayGroup {
    pub date: NaiveDate,
    pub slots: Vec<FreeSlot>,
}

/// Bucket slots by the wall-clock date of their start in `tz`.
///
/// Groups come back in date order with each group's slots in input order,
/// which is chronological for scheduler output. A slot near midnight UTC can
/// land on a different date here than its UTC date -- grouping follows the
/// clock the reader lives in.
pub fn group_by_day(slots: &[FreeSlot], tz: Tz) -> Vec<DayGroup> {
    let mut buckets: BTreeMap<NaiveDate, Vec<FreeSlot>> = BTreeMap::new();
    for slot in slots {
        let date = slot.start.with_timezone(&tz).date_naive();
        buckets.entry(date).or_default().push(slot.clone());
    }

    buckets
        .into_iter()
        .map(|(date, slots)| DayGroup { date, slots })
        .collect()
}
