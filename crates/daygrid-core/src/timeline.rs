//! Day timeline assembly.
//!
//! Combines the store's hour filter with the layout engine to produce the
//! 24 rows a renderer paints for one day, and picks the row the view
//! should reveal first.

use chrono::{DateTime, Utc};
use daygrid_layout::{LayoutMetrics, layout_events};
use daygrid_types::{DayKey, Event, Placement, Size};
use serde::Serialize;
use tracing::debug;

use crate::calendar::{HOURS_PER_DAY, TimelineCalendar};
use crate::store::EventStore;

/// One hour row of the day grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourRow {
    /// Local hour (0-23).
    pub hour: u32,
    /// Twelve-hour label, e.g. `"9 AM"`.
    pub label: String,
    /// Instant at the top of the row; `None` when the hour is skipped by DST.
    pub hour_start: Option<DateTime<Utc>>,
    /// Laid-out events intersecting this hour.
    pub placements: Vec<Placement>,
}

/// All 24 rows for one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayTimeline {
    /// The day being shown.
    pub day: DayKey,
    /// Rows ordered by hour.
    pub rows: Vec<HourRow>,
}

impl DayTimeline {
    /// Lay out every hour row of `day`.
    ///
    /// `container` is the measured size of one row's event area. The day's
    /// events are read once, so every row reflects the same store state.
    pub fn build(
        store: &EventStore,
        day: DayKey,
        container: Size,
        metrics: &LayoutMetrics,
    ) -> Self {
        let calendar = store.calendar();
        let day_events = store.events_on(day);
        let rows: Vec<HourRow> = (0..HOURS_PER_DAY)
            .map(|hour| {
                let window = calendar.hour_window(day, hour);
                let placements = window.map_or_else(Vec::new, |(start, end)| {
                    let events: Vec<Event> = day_events
                        .iter()
                        .filter(|e| e.overlaps_window(start, end))
                        .cloned()
                        .collect();
                    layout_events(&events, start, container, metrics)
                });
                HourRow {
                    hour,
                    label: TimelineCalendar::hour_label(hour).unwrap_or_default(),
                    hour_start: window.map(|(start, _)| start),
                    placements,
                }
            })
            .collect();

        let timeline = Self { day, rows };
        debug!(
            day = %day,
            placements = timeline.placement_count(),
            "built day timeline"
        );
        timeline
    }

    /// Row for `hour`, if it is in range.
    pub fn row(&self, hour: u32) -> Option<&HourRow> {
        self.rows.iter().find(|row| row.hour == hour)
    }

    /// Total placements across all rows.
    ///
    /// An event spanning several hours is counted once per row.
    pub fn placement_count(&self) -> usize {
        self.rows.iter().map(|row| row.placements.len()).sum()
    }
}

/// Hour row the view should scroll to first.
///
/// The hour of the earliest event starting at or after `now`. When every
/// event has started, the hour of the latest-ending event, provided it
/// ends no earlier than the start of `now`'s day. Among events sharing the
/// latest end, the first one in `events` wins. Otherwise `None`.
pub fn focus_hour(
    events: &[Event],
    now: DateTime<Utc>,
    calendar: &TimelineCalendar,
) -> Option<u32> {
    let upcoming = events
        .iter()
        .filter(|e| e.start >= now)
        .min_by_key(|e| e.start);

    let target = upcoming.or_else(|| {
        let today_start = calendar.start_of_day(calendar.day_key(now))?;
        events
            .iter()
            .reduce(|latest, e| if e.end > latest.end { e } else { latest })
            .filter(|last| last.end >= today_start)
    })?;

    Some(calendar.hour_of(target.start))
}
