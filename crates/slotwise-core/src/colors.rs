//! Stable display colors for participants.
//!
//! Calendar views draw each member's events in a distinct color. Assignment
//! is purely presentational and scoped to one [`ColorAssigner`] instance:
//! callers create one per display, reset it on refresh, and never share it
//! with the scheduling path.

use std::collections::HashMap;

/// Fluent-style palette. Index 0 doubles as the current user's color, so
/// round-robin assignment for other members starts at index 1.
const PALETTE: [&str; 20] = [
    "#0078d4", // blue
    "#d83b01", // orange
    "#8764b8", // purple
    "#00b7c3", // cyan
    "#8cbd18", // lime
    "#e3008c", // magenta
    "#ff8c00", // dark orange
    "#00b294", // teal
    "#c239b3", // pink
    "#ffb900", // yellow
    "#498205", // green
    "#744da9", // dark purple
    "#018574", // dark teal
    "#ca5010", // red orange
    "#4f6bed", // indigo
    "#ea4300", // burnt orange
    "#0099bc", // bright cyan
    "#e81123", // red
    "#b146c2", // orchid
    "#00a300", // bright green
];

const SELF_COLOR: &str = "#0078d4";
const RESOURCE_COLOR: &str = "#107c10";

/// Hands out one stable color per participant.
#[derive(Debug, Default)]
pub struct ColorAssigner {
    assigned: HashMap<String, &'static str>,
}

impl ColorAssigner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Color for the given participant.
    ///
    /// The current user is always blue and meeting-room resources are always
    /// green. Everyone else receives the next palette color on first sight
    /// and keeps it until [`reset`](Self::reset).
    pub fn color_for(&mut self, email: &str, is_current_user: bool, is_resource: bool) -> &'static str {
        if is_current_user {
            return SELF_COLOR;
        }
        if is_resource {
            return RESOURCE_COLOR;
        }
        if let Some(color) = self.assigned.get(email).copied() {
            return color;
        }

        // Skip index 0, which is reserved for the current user's blue.
        let index = (self.assigned.len() + 1) % PALETTE.len();
        let color = PALETTE[index];
        self.assigned.insert(email.to_string(), color);
        color
    }

    /// Forget all assignments. Call when the display is rebuilt from scratch
    /// so colors follow the new member ordering.
    pub fn reset(&mut self) {
        self.assigned.clear();
    }

    /// Current assignments, mainly for debugging.
    pub fn assignments(&self) -> &HashMap<String, &'static str> {
        &self.assigned
    }
}
