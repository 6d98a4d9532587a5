//! Criterion benchmarks for busy-interval merging and the free-time search.

use std::hint::black_box;

use chrono::{DateTime, Duration, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use slotwise_core::{find_common_free_time, merge_busy_intervals, EventRecord, SchedulerOptions};

/// Monday 2026-03-02 00:00 UTC.
fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, 0, 0, 0).unwrap()
}

/// Deterministic calendars: two one-hour meetings per person per day, with
/// start hours staggered so blocks overlap across people.
fn synthetic_calendars(people: usize, days: i64) -> (Vec<EventRecord>, Vec<String>) {
    let mut events = Vec::with_capacity(people * days as usize * 2);
    let mut names = Vec::with_capacity(people);

    for p in 0..people {
        let owner = format!("person{p}@example.com");
        names.push(owner.clone());
        for day in 0..days {
            let morning = 9 + (p as i64 + day) % 4;
            let afternoon = 13 + (p as i64 * 3 + day) % 4;
            for hour in [morning, afternoon] {
                let start = base() + Duration::days(day) + Duration::hours(hour);
                events.push(EventRecord {
                    owner: owner.clone(),
                    start,
                    end: start + Duration::hours(1),
                });
            }
        }
    }

    (events, names)
}

fn options() -> SchedulerOptions {
    SchedulerOptions {
        max_slots: 1000,
        ..Default::default()
    }
}

fn bench_merge_busy_intervals(c: &mut Criterion) {
    let (events, names) = synthetic_calendars(4, 30);
    let window_start = base();
    let window_end = base() + Duration::days(30);
    let options = options();

    c.bench_function("merge_busy_intervals/4x30", |b| {
        b.iter(|| {
            let merged = merge_busy_intervals(
                black_box(&events),
                black_box(&names),
                window_start,
                window_end,
                &options,
            );
            black_box(merged);
        })
    });
}

fn bench_find_common_free_time(c: &mut Criterion) {
    let (events, names) = synthetic_calendars(4, 30);
    let window_start = base();
    let window_end = base() + Duration::days(30);
    let options = options();

    c.bench_function("find_common_free_time/4x30", |b| {
        b.iter(|| {
            let slots = find_common_free_time(
                black_box(&events),
                black_box(&names),
                window_start,
                window_end,
                &options,
            )
            .unwrap();
            black_box(slots);
        })
    });
}

fn bench_search_scaling(c: &mut Criterion) {
    let window_start = base();
    let window_end = base() + Duration::days(14);
    let options = options();

    let mut group = c.benchmark_group("find_common_free_time/participants");
    for people in [2usize, 4, 8, 16] {
        let (events, names) = synthetic_calendars(people, 14);
        group.bench_with_input(
            BenchmarkId::from_parameter(people),
            &(events, names),
            |b, (events, names)| {
                b.iter(|| {
                    let slots = find_common_free_time(
                        black_box(events),
                        black_box(names),
                        window_start,
                        window_end,
                        &options,
                    )
                    .unwrap();
                    black_box(slots);
                })
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_merge_busy_intervals,
    bench_find_common_free_time,
    bench_search_scaling
);
criterion_main!(benches);
