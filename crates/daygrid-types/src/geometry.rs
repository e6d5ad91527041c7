//! Container sizes, rectangles and event placements.
//!
//! All lengths are in points (`f64`) relative to the top-left corner of
//! one hour row's event container.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::event::Event;

/// Width and height of an hour row's event container.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent (the pixel height of one hour).
    pub height: f64,
}

impl Size {
    /// Create a size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle inside a container.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rect {
    /// Right edge (`x + width`).
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`).
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// True when the two rectangles share interior area.
    pub fn intersects(&self, other: &Self) -> bool {
        self.x < other.max_x()
            && other.x < self.max_x()
            && self.y < other.max_y()
            && other.y < self.max_y()
    }
}

/// The computed footprint of one event within an hour row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Placement {
    /// The event being placed.
    pub event: Event,
    /// Zero-based column the event was packed into.
    pub column_index: usize,
    /// Number of columns in the row.
    pub column_count: usize,
    /// Clamped minute offset of the event start within the hour (0-60).
    pub start_minutes: u32,
    /// Visible duration in minutes, never less than 1.
    pub duration_minutes: u32,
    /// Rectangle to apply to the event's visual element.
    pub rect: Rect,
}
