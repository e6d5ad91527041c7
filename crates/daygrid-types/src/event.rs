//! The calendar event value and the overlap relation between events.
//!
//! An [`Event`] has no identity: two events with equal fields are
//! interchangeable, and the store keeps duplicates side by side.
//!
//! # Overlap
//!
//! Intervals are half-open, `[start, end)`. Two events overlap when
//! `a.start < b.end && b.start < a.end`. An event ending exactly when
//! another begins does not overlap it. A zero-duration event
//! (`start == end`) is an empty interval and never overlaps anything,
//! itself included.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Opaque display attribute attached to an event.
///
/// Stored as a packed `0xRRGGBB` value. Nothing in the engine interprets
/// it; it is carried through to the renderer untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EventColor(pub u32);

impl EventColor {
    /// Pack three channels into a color.
    pub fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self((u32::from(red) << 16) | (u32::from(green) << 8) | u32::from(blue))
    }

    /// Return the packed `0xRRGGBB` value.
    pub const fn into_inner(self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for EventColor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{:06X}", self.0 & 0x00FF_FFFF)
    }
}

/// A single calendar event.
///
/// `end` may equal `start` (zero duration is legal). `end < start` is
/// representable and is tolerated downstream: the layout engine renders
/// such an event at its minimum visible footprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Event {
    /// Display title.
    pub name: String,
    /// Inclusive start instant.
    pub start: DateTime<Utc>,
    /// Exclusive end instant.
    pub end: DateTime<Utc>,
    /// Opaque display attribute.
    pub color: EventColor,
    /// Whether the event carries a livestream badge.
    pub has_livestream: bool,
}

impl Event {
    /// Create an event without a livestream badge.
    pub fn new(
        name: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        color: EventColor,
    ) -> Self {
        Self {
            name: name.into(),
            start,
            end,
            color,
            has_livestream: false,
        }
    }

    /// Return a copy of this event with the livestream flag set.
    #[must_use]
    pub fn with_livestream(mut self, has_livestream: bool) -> Self {
        self.has_livestream = has_livestream;
        self
    }

    /// Signed length of the interval. Negative for malformed events.
    pub fn duration(&self) -> Duration {
        self.end.signed_duration_since(self.start)
    }

    /// True when `start == end`.
    pub fn is_zero_duration(&self) -> bool {
        self.start == self.end
    }

    /// True when the interval contains at least one instant.
    fn is_nonempty(&self) -> bool {
        self.start < self.end
    }

    /// Half-open overlap test against another event.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.is_nonempty()
            && other.is_nonempty()
            && self.start < other.end
            && other.start < self.end
    }

    /// Half-open overlap test against the window `[window_start, window_end)`.
    ///
    /// Used by the store's hour filter: an event ending exactly at
    /// `window_start` or starting exactly at `window_end` is excluded.
    pub fn overlaps_window(&self, window_start: DateTime<Utc>, window_end: DateTime<Utc>) -> bool {
        self.is_nonempty() && self.start < window_end && window_start < self.end
    }
}
