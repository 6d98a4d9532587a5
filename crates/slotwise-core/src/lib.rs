//! # slotwise-core
//!
//! Common free-time search across team calendars.
//!
//! Given every selected participant's busy events and a search window,
//! slotwise computes the time ranges in which all of them are simultaneously
//! free, constrained by working hours, a weekday filter, and a minimum
//! meeting length. Busy events are merged into a disjoint timeline, then the
//! gaps between them are sliced day by day into working-hour slots. The whole
//! computation is pure and synchronous: no I/O, no caches, no globals.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use slotwise_core::{find_common_free_time, EventRecord, SchedulerOptions};
//!
//! // Monday 2026-03-16: alice is busy 10:00-11:00, bob 14:00-15:00.
//! let events = vec![
//!     EventRecord {
//!         owner: "alice@example.com".into(),
//!         start: Utc.with_ymd_and_hms(2026, 3, 16, 10, 0, 0).unwrap(),
//!         end: Utc.with_ymd_and_hms(2026, 3, 16, 11, 0, 0).unwrap(),
//!     },
//!     EventRecord {
//!         owner: "bob@example.com".into(),
//!         start: Utc.with_ymd_and_hms(2026, 3, 16, 14, 0, 0).unwrap(),
//!         end: Utc.with_ymd_and_hms(2026, 3, 16, 15, 0, 0).unwrap(),
//!     },
//! ];
//! let participants = vec!["alice@example.com".to_string(), "bob@example.com".to_string()];
//!
//! let slots = find_common_free_time(
//!     &events,
//!     &participants,
//!     Utc.with_ymd_and_hms(2026, 3, 16, 9, 0, 0).unwrap(),
//!     Utc.with_ymd_and_hms(2026, 3, 16, 18, 0, 0).unwrap(),
//!     &SchedulerOptions::default(),
//! )
//! .unwrap();
//!
//! // Both are free 09-10, 11-14, and 15-18.
//! assert_eq!(slots.len(), 3);
//! assert_eq!(slots[1].duration_minutes, 180);
//! ```
//!
//! ## Modules
//!
//! - [`busy`] — event filtering and busy-interval merging
//! - [`slicer`] — working-hour slicing of free gaps
//! - [`scheduler`] — the combined free-time search
//! - [`grouping`] — day-by-day result grouping for display
//! - [`roster`] — member directory (groups of users and bookable resources)
//! - [`colors`] — stable per-participant display colors
//! - [`options`] — search constraints
//! - [`error`] — error types

pub mod busy;
pub mod colors;
pub mod error;
pub mod grouping;
pub mod options;
pub mod roster;
pub mod scheduler;
pub mod slicer;

pub use busy::{merge_busy_intervals, EventRecord, TimeSlot};
pub use colors::ColorAssigner;
pub use error::ScheduleError;
pub use grouping::{group_by_day, DayGroup};
pub use options::SchedulerOptions;
pub use roster::{Group, Member, MemberKind, Roster};
pub use scheduler::find_common_free_time;
pub use slicer::{slice_gap_into_work_hours, FreeSlot};
