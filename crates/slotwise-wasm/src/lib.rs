//! WASM bindings for slotwise.
//!
//! Exposes the common free-time search, busy-interval merging, and participant
//! color assignment to JavaScript via `wasm-bindgen`. All complex types are
//! passed as JSON strings, so callers never deal with wasm memory directly.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slotwise-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/slotwise_wasm.wasm
//! ```

use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use slotwise_core::{ColorAssigner, EventRecord, FreeSlot, SchedulerOptions, TimeSlot};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct FreeSlotDto {
    start: String,
    end: String,
    duration_minutes: i64,
}

impl From<&FreeSlot> for FreeSlotDto {
    fn from(slot: &FreeSlot) -> Self {
        Self {
            start: slot.start.to_rfc3339(),
            end: slot.end.to_rfc3339(),
            duration_minutes: slot.duration_minutes,
        }
    }
}

#[derive(Serialize)]
struct TimeSlotDto {
    start: String,
    end: String,
}

impl From<&TimeSlot> for TimeSlotDto {
    fn from(slot: &TimeSlot) -> Self {
        Self {
            start: slot.start.to_rfc3339(),
            end: slot.end.to_rfc3339(),
        }
    }
}

/// Input format for events passed from JavaScript.
#[derive(Deserialize)]
struct EventInput {
    owner: String,
    start: String,
    end: String,
}

/// Input format for search options. Every field is optional on the JS side;
/// missing fields take the scheduler defaults.
#[derive(Deserialize)]
#[serde(default)]
struct OptionsInput {
    duration_minutes: i64,
    work_hour_start: u32,
    work_hour_end: u32,
    exclude_weekends: bool,
    exclude_long_events: bool,
    timezone: String,
    max_slots: usize,
}

impl Default for OptionsInput {
    fn default() -> Self {
        let defaults = SchedulerOptions::default();
        Self {
            duration_minutes: defaults.duration_minutes,
            work_hour_start: defaults.work_hour_start,
            work_hour_end: defaults.work_hour_end,
            exclude_weekends: defaults.exclude_weekends,
            exclude_long_events: defaults.exclude_long_events,
            timezone: "UTC".to_string(),
            max_slots: defaults.max_slots,
        }
    }
}

impl OptionsInput {
    fn into_options(self) -> Result<SchedulerOptions, JsValue> {
        let timezone: Tz = self
            .timezone
            .parse()
            .map_err(|_| JsValue::from_str(&format!("Unknown timezone '{}'", self.timezone)))?;

        Ok(SchedulerOptions {
            duration_minutes: self.duration_minutes,
            work_hour_start: self.work_hour_start,
            work_hour_end: self.work_hour_end,
            exclude_weekends: self.exclude_weekends,
            exclude_long_events: self.exclude_long_events,
            timezone,
            max_slots: self.max_slots,
        })
    }
}

/// Input format for participants passed to `assignColors`.
#[derive(Deserialize)]
struct ParticipantInput {
    email: String,
    #[serde(default)]
    is_current_user: bool,
    #[serde(default)]
    is_resource: bool,
}

#[derive(Serialize)]
struct ColorDto {
    email: String,
    color: String,
}

// ---------------------------------------------------------------------------
// Helpers: parse JSON-string arguments into core types
// ---------------------------------------------------------------------------

/// Parse an ISO 8601 datetime string into `DateTime<Utc>`.
///
/// Accepts both RFC 3339 (with timezone offset, e.g., "2026-03-16T14:00:00+00:00")
/// and naive local time (e.g., "2026-03-16T14:00:00"), which is interpreted as UTC.
fn parse_datetime(s: &str) -> Result<DateTime<Utc>, JsValue> {
    // Try RFC 3339 first (has timezone info).
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    // Fall back to naive datetime interpreted as UTC.
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map(|ndt| ndt.and_utc())
        .map_err(|e| JsValue::from_str(&format!("Invalid datetime '{}': {}", s, e)))
}

/// Convert a JSON array of `{owner, start, end}` objects into `Vec<EventRecord>`.
fn parse_events_json(json: &str) -> Result<Vec<EventRecord>, JsValue> {
    let inputs: Vec<EventInput> = serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid events JSON: {}", e)))?;

    inputs
        .into_iter()
        .map(|input| {
            let start = parse_datetime(&input.start)?;
            let end = parse_datetime(&input.end)?;
            Ok(EventRecord {
                owner: input.owner,
                start,
                end,
            })
        })
        .collect()
}

/// Parse a JSON array of email strings.
fn parse_participants_json(json: &str) -> Result<Vec<String>, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid participants JSON: {}", e)))
}

fn parse_options_json(json: Option<&str>) -> Result<SchedulerOptions, JsValue> {
    match json {
        Some(raw) => {
            let input: OptionsInput = serde_json::from_str(raw)
                .map_err(|e| JsValue::from_str(&format!("Invalid options JSON: {}", e)))?;
            input.into_options()
        }
        None => Ok(SchedulerOptions::default()),
    }
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Find meeting slots where every selected participant is free.
///
/// Returns a JSON string containing an array of `{start, end, duration_minutes}`
/// objects with RFC 3339 datetime strings, in chronological order.
///
/// # Arguments
/// - `events_json` -- JSON array of `{owner, start, end}` event objects
/// - `participants_json` -- JSON array of owner emails to schedule for
/// - `window_start` / `window_end` -- ISO 8601 datetime strings
/// - `options_json` -- optional JSON object; recognized keys are
///   `duration_minutes`, `work_hour_start`, `work_hour_end`,
///   `exclude_weekends`, `exclude_long_events`, `timezone`, and `max_slots`
#[wasm_bindgen(js_name = "findCommonFreeTime")]
pub fn find_common_free_time(
    events_json: &str,
    participants_json: &str,
    window_start: &str,
    window_end: &str,
    options_json: Option<String>,
) -> Result<String, JsValue> {
    let events = parse_events_json(events_json)?;
    let participants = parse_participants_json(participants_json)?;
    let ws = parse_datetime(window_start)?;
    let we = parse_datetime(window_end)?;
    let options = parse_options_json(options_json.as_deref())?;

    let slots = slotwise_core::find_common_free_time(&events, &participants, ws, we, &options)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let dtos: Vec<FreeSlotDto> = slots.iter().map(FreeSlotDto::from).collect();

    serde_json::to_string(&dtos)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Merge the selected participants' events into disjoint busy blocks.
///
/// Same arguments as [`find_common_free_time`]; the options only contribute
/// the long-event filter here. Returns a JSON string containing an array of
/// `{start, end}` objects sorted by start.
#[wasm_bindgen(js_name = "mergeBusyIntervals")]
pub fn merge_busy_intervals(
    events_json: &str,
    participants_json: &str,
    window_start: &str,
    window_end: &str,
    options_json: Option<String>,
) -> Result<String, JsValue> {
    let events = parse_events_json(events_json)?;
    let participants = parse_participants_json(participants_json)?;
    let ws = parse_datetime(window_start)?;
    let we = parse_datetime(window_end)?;
    let options = parse_options_json(options_json.as_deref())?;

    let blocks = slotwise_core::merge_busy_intervals(&events, &participants, ws, we, &options);

    let dtos: Vec<TimeSlotDto> = blocks.iter().map(TimeSlotDto::from).collect();

    serde_json::to_string(&dtos)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Assign a stable display color to each participant.
///
/// `participants_json` must be a JSON array of `{email, is_current_user,
/// is_resource}` objects; the boolean flags default to false. Colors follow
/// input order, so pass the list in the order the UI renders it. Returns a
/// JSON string containing an array of `{email, color}` objects.
#[wasm_bindgen(js_name = "assignColors")]
pub fn assign_colors(participants_json: &str) -> Result<String, JsValue> {
    let participants: Vec<ParticipantInput> = serde_json::from_str(participants_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid participants JSON: {}", e)))?;

    let mut assigner = ColorAssigner::new();
    let dtos: Vec<ColorDto> = participants
        .iter()
        .map(|p| ColorDto {
            email: p.email.clone(),
            color: assigner
                .color_for(&p.email, p.is_current_user, p.is_resource)
                .to_string(),
        })
        .collect();

    serde_json::to_string(&dtos)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}
