//! Timeline layout engine for daygrid hour rows.
//!
//! Given the events that intersect one hour window, this crate resolves
//! visual collisions by packing overlapping events into side-by-side
//! columns, then computes a rectangle for every event inside a
//! caller-measured container. Both stages are pure functions with no
//! shared state; they are re-run on every layout request and may be
//! called from any number of threads at once.
//!
//! # Modules
//!
//! - [`columns`] -- Stage A: greedy column partitioning ([`assign_columns`]).
//! - [`geometry`] -- Stage B: minute clamping and rectangle computation
//!   ([`layout`]).
//! - [`metrics`] -- Padding and minimum-height constants ([`LayoutMetrics`]).
//!
//! # Failure semantics
//!
//! Nothing here returns an error. Malformed intervals (`end < start`) and
//! events clipped entirely outside the hour are drawn at the minimum
//! visible footprint instead of breaking the row.

pub mod columns;
pub mod geometry;
pub mod metrics;

use chrono::{DateTime, Utc};
use daygrid_types::{Event, Placement, Size};

pub use columns::{Column, assign_columns, column_count};
pub use geometry::{MINUTES_PER_HOUR, layout};
pub use metrics::LayoutMetrics;

/// Partition `events` into columns and lay them out in one call.
///
/// Equivalent to [`assign_columns`] followed by [`layout`].
pub fn layout_events(
    events: &[Event],
    hour_start: DateTime<Utc>,
    container: Size,
    metrics: &LayoutMetrics,
) -> Vec<Placement> {
    let columns = assign_columns(events);
    layout(&columns, hour_start, container, metrics)
}
