//! Tests for working-hour gap slicing: day iteration, weekend skipping,
//! band intersection, and the emission budget.

use chrono::{TimeZone, Utc};
use slotwise_core::{slice_gap_into_work_hours, SchedulerOptions};

/// Helper for UTC instants in March 2026 (16th = Monday, 21st = Saturday).
fn at(day: u32, hour: u32, min: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, day, hour, min, 0).unwrap()
}

#[test]
fn gap_is_clipped_to_the_working_band() {
    // Gap covers the whole Monday; only the 09:00-18:00 band qualifies.
    let slots =
        slice_gap_into_work_hours(at(16, 7, 0), at(16, 20, 0), &SchedulerOptions::default(), 100);

    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].start, at(16, 9, 0));
    assert_eq!(slots[0].end, at(16, 18, 0));
    assert_eq!(slots[0].duration_minutes, 540);
}

#[test]
fn whole_block_is_emitted_not_duration_chunks() {
    // A four-hour gap with a 60-minute minimum yields one block, not four
    // pre-chopped meetings; callers pick the start time inside it.
    let slots =
        slice_gap_into_work_hours(at(16, 9, 0), at(16, 13, 0), &SchedulerOptions::default(), 100);

    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].duration_minutes, 240);
}

#[test]
fn multi_day_gap_produces_one_slot_per_day() {
    // Monday noon through Wednesday noon: the remainder of Monday, all of
    // Tuesday's band, and Wednesday morning.
    let slots =
        slice_gap_into_work_hours(at(16, 12, 0), at(18, 12, 0), &SchedulerOptions::default(), 100);

    assert_eq!(slots.len(), 3);
    assert_eq!(slots[0].start, at(16, 12, 0));
    assert_eq!(slots[0].end, at(16, 18, 0));
    assert_eq!(slots[1].start, at(17, 9, 0));
    assert_eq!(slots[1].end, at(17, 18, 0));
    assert_eq!(slots[2].start, at(18, 9, 0));
    assert_eq!(slots[2].end, at(18, 12, 0));
}

#[test]
fn weekend_days_are_skipped() {
    // Friday noon through Monday noon with weekends excluded: Saturday the
    // 21st and Sunday the 22nd emit nothing.
    let slots =
        slice_gap_into_work_hours(at(20, 12, 0), at(23, 12, 0), &SchedulerOptions::default(), 100);

    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0].start, at(20, 12, 0));
    assert_eq!(slots[0].end, at(20, 18, 0));
    assert_eq!(slots[1].start, at(23, 9, 0));
    assert_eq!(slots[1].end, at(23, 12, 0));
}

#[test]
fn weekend_days_are_kept_when_not_excluded() {
    let options = SchedulerOptions {
        exclude_weekends: false,
        ..Default::default()
    };
    let slots = slice_gap_into_work_hours(at(20, 12, 0), at(23, 12, 0), &options, 100);

    assert_eq!(slots.len(), 4, "Saturday and Sunday bands count too");
    assert_eq!(slots[1].start, at(21, 9, 0));
    assert_eq!(slots[1].end, at(21, 18, 0));
    assert_eq!(slots[2].start, at(22, 9, 0));
    assert_eq!(slots[2].end, at(22, 18, 0));
}

#[test]
fn intersection_below_minimum_duration_is_dropped() {
    let options = SchedulerOptions {
        duration_minutes: 90,
        ..Default::default()
    };

    // 89 minutes of gap: one short of the minimum.
    let slots = slice_gap_into_work_hours(at(16, 9, 0), at(16, 10, 29), &options, 100);
    assert!(slots.is_empty(), "89 minutes must not satisfy 90");

    // Exactly 90 minutes: emitted, spanning the full gap.
    let slots = slice_gap_into_work_hours(at(16, 9, 0), at(16, 10, 30), &options, 100);
    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].start, at(16, 9, 0));
    assert_eq!(slots[0].end, at(16, 10, 30));
    assert_eq!(slots[0].duration_minutes, 90);
}

#[test]
fn gap_entirely_outside_the_band_emits_nothing() {
    // 05:00-08:00 ends before the working day begins.
    let slots =
        slice_gap_into_work_hours(at(16, 5, 0), at(16, 8, 0), &SchedulerOptions::default(), 100);

    assert!(slots.is_empty());
}

#[test]
fn budget_caps_the_number_of_slots() {
    // Two full weeks would produce ten weekday slots; the budget stops the
    // walk at three.
    let slots =
        slice_gap_into_work_hours(at(16, 0, 0), at(27, 23, 0), &SchedulerOptions::default(), 3);

    assert_eq!(slots.len(), 3);
    assert_eq!(slots[2].start, at(18, 9, 0));
}

#[test]
fn zero_budget_emits_nothing() {
    let slots =
        slice_gap_into_work_hours(at(16, 0, 0), at(16, 23, 0), &SchedulerOptions::default(), 0);

    assert!(slots.is_empty());
}

#[test]
fn band_follows_the_configured_wall_clock() {
    // 09:00-18:00 in Tokyo is 00:00-09:00 UTC.
    let options = SchedulerOptions {
        timezone: "Asia/Tokyo".parse().unwrap(),
        ..Default::default()
    };
    let slots = slice_gap_into_work_hours(at(16, 0, 0), at(16, 12, 0), &options, 100);

    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].start, at(16, 0, 0));
    assert_eq!(slots[0].end, at(16, 9, 0));
    assert_eq!(slots[0].duration_minutes, 540);
}

#[test]
fn spring_forward_shifts_a_skipped_band_start() {
    // New York, 2026-03-08: clocks jump from 02:00 EST to 03:00 EDT, so a
    // band starting at the nonexistent 02:00 begins at 03:00 EDT (07:00 UTC)
    // instead. 02:00-05:00 wall clock is only two real hours that day.
    let options = SchedulerOptions {
        work_hour_start: 2,
        work_hour_end: 5,
        exclude_weekends: false,
        timezone: "America/New_York".parse().unwrap(),
        duration_minutes: 60,
        ..Default::default()
    };
    let gap_start = Utc.with_ymd_and_hms(2026, 3, 8, 5, 0, 0).unwrap(); // local midnight
    let gap_end = Utc.with_ymd_and_hms(2026, 3, 8, 12, 0, 0).unwrap();

    let slots = slice_gap_into_work_hours(gap_start, gap_end, &options, 100);

    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].start, Utc.with_ymd_and_hms(2026, 3, 8, 7, 0, 0).unwrap());
    assert_eq!(slots[0].end, Utc.with_ymd_and_hms(2026, 3, 8, 9, 0, 0).unwrap());
    assert_eq!(slots[0].duration_minutes, 120);
}

#[test]
fn fall_back_ambiguity_resolves_to_the_earlier_instant() {
    // New York, 2026-11-01: 01:00-02:00 happens twice. The band start at
    // 01:00 resolves to the first occurrence (EDT, 05:00 UTC), so the
    // 01:00-06:00 wall-clock band really spans six hours.
    let options = SchedulerOptions {
        work_hour_start: 1,
        work_hour_end: 6,
        exclude_weekends: false,
        timezone: "America/New_York".parse().unwrap(),
        duration_minutes: 60,
        ..Default::default()
    };
    let gap_start = Utc.with_ymd_and_hms(2026, 11, 1, 4, 0, 0).unwrap(); // local midnight
    let gap_end = Utc.with_ymd_and_hms(2026, 11, 1, 15, 0, 0).unwrap();

    let slots = slice_gap_into_work_hours(gap_start, gap_end, &options, 100);

    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].start, Utc.with_ymd_and_hms(2026, 11, 1, 5, 0, 0).unwrap());
    assert_eq!(slots[0].end, Utc.with_ymd_and_hms(2026, 11, 1, 11, 0, 0).unwrap());
    assert_eq!(slots[0].duration_minutes, 360);
}

#[test]
fn booking_uses_the_slot_start_and_requested_duration() {
    let slots =
        slice_gap_into_work_hours(at(16, 11, 0), at(16, 14, 0), &SchedulerOptions::default(), 100);
    assert_eq!(slots.len(), 1);

    // The block is 180 minutes; the booked meeting takes the first 60.
    let booking = slots[0].booking(60);
    assert_eq!(booking.start, at(16, 11, 0));
    assert_eq!(booking.end, at(16, 12, 0));
    assert_eq!(booking.duration_minutes(), 60);
}
