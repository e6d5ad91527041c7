//! Stage B: turning columns into rectangles.
//!
//! For each event the start and end are measured in whole minutes from
//! the hour start, clamped to `0..=60`, and mapped linearly onto the
//! container height. The visible duration is never less than one minute
//! and the rectangle is never shorter than the configured minimum, so
//! zero-duration, clipped, and malformed events all stay visible.
//!
//! A single-column row spans the full container width with no horizontal
//! padding. Multi-column rows split the width evenly and inset each
//! column by the horizontal padding on both sides.

use chrono::{DateTime, Utc};
use daygrid_types::{Placement, Rect, Size};
use tracing::trace;

use crate::columns::Column;
use crate::metrics::LayoutMetrics;

/// Minutes in one hour row.
pub const MINUTES_PER_HOUR: u32 = 60;

/// Whole minutes from `from` to `to`, clamped to `0..=60`.
///
/// Partial minutes truncate toward zero.
fn clamped_minutes(from: DateTime<Utc>, to: DateTime<Utc>) -> u32 {
    let minutes = to
        .signed_duration_since(from)
        .num_minutes()
        .clamp(0, i64::from(MINUTES_PER_HOUR));
    u32::try_from(minutes).unwrap_or(0)
}

/// Converts a column index or count to `f64` without precision loss.
fn as_points(n: usize) -> f64 {
    f64::from(u32::try_from(n).unwrap_or(u32::MAX))
}

/// Compute one rectangle per event in `columns`.
///
/// `hour_start` is the instant at the top of the row; `container` is the
/// measured size of the row's event area. Placements are returned column
/// by column, each column in start order.
pub fn layout(
    columns: &[Column],
    hour_start: DateTime<Utc>,
    container: Size,
    metrics: &LayoutMetrics,
) -> Vec<Placement> {
    let column_count = columns.len();
    let minutes_per_hour = f64::from(MINUTES_PER_HOUR);
    let column_width = container.width / as_points(column_count.max(1));

    let mut placements = Vec::with_capacity(columns.iter().map(Column::len).sum());
    for (column_index, column) in columns.iter().enumerate() {
        let (x, width) = if column_count == 1 {
            (0.0, container.width)
        } else {
            (
                as_points(column_index) * column_width + metrics.horizontal_padding,
                column_width - metrics.horizontal_padding_total(),
            )
        };

        for event in column.events() {
            let start_minutes = clamped_minutes(hour_start, event.start);
            let end_minutes = clamped_minutes(hour_start, event.end);
            let duration_minutes = end_minutes.saturating_sub(start_minutes).max(1);

            let y = f64::from(start_minutes) / minutes_per_hour * container.height
                + metrics.vertical_padding;
            let height = (f64::from(duration_minutes) / minutes_per_hour * container.height
                - metrics.vertical_padding_total())
            .max(metrics.minimum_visible_height);

            trace!(
                event = event.name.as_str(),
                column_index,
                start_minutes,
                duration_minutes,
                "placed event"
            );

            placements.push(Placement {
                event: event.clone(),
                column_index,
                column_count,
                start_minutes,
                duration_minutes,
                rect: Rect {
                    x,
                    y,
                    width,
                    height,
                },
            });
        }
    }
    placements
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use chrono::TimeZone;
    use daygrid_types::{Event, EventColor};

    use super::*;
    use crate::columns::assign_columns;

    const EPSILON: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 11, 6, hour, minute, 0).unwrap()
    }

    fn event(name: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> Event {
        Event::new(name, start, end, EventColor::default())
    }

    fn lay_out(events: &[Event], hour: u32) -> Vec<Placement> {
        let columns = assign_columns(events);
        layout(
            &columns,
            at(hour, 0),
            Size::new(300.0, 60.0),
            &LayoutMetrics::default(),
        )
    }

    #[test]
    fn full_hour_single_column() {
        let placements = lay_out(&[event("a", at(9, 0), at(10, 0))], 9);
        assert_eq!(placements.len(), 1);
        let p = &placements[0];
        assert_eq!(p.start_minutes, 0);
        assert_eq!(p.duration_minutes, 60);
        assert_eq!(p.column_count, 1);
        assert_close(p.rect.x, 0.0);
        assert_close(p.rect.width, 300.0);
        assert_close(p.rect.y, 2.0);
        assert_close(p.rect.height, 56.0);
    }

    #[test]
    fn half_hour_offset() {
        let placements = lay_out(&[event("a", at(9, 30), at(9, 45))], 9);
        let p = &placements[0];
        assert_eq!(p.start_minutes, 30);
        assert_eq!(p.duration_minutes, 15);
        assert_close(p.rect.y, 32.0);
        assert_close(p.rect.height, 11.0);
    }

    #[test]
    fn zero_duration_hits_the_floor() {
        let placements = lay_out(&[event("z", at(9, 20), at(9, 20))], 9);
        let p = &placements[0];
        assert_eq!(p.duration_minutes, 1);
        assert_close(p.rect.height, LayoutMetrics::DEFAULT_MINIMUM_VISIBLE_HEIGHT);
    }

    #[test]
    fn malformed_interval_degrades_to_minimum_footprint() {
        let placements = lay_out(&[event("backwards", at(9, 40), at(9, 10))], 9);
        let p = &placements[0];
        assert_eq!(p.start_minutes, 40);
        assert_eq!(p.duration_minutes, 1);
        assert_close(p.rect.height, LayoutMetrics::DEFAULT_MINIMUM_VISIBLE_HEIGHT);
    }

    #[test]
    fn spanning_event_is_clipped_to_the_hour() {
        let placements = lay_out(&[event("long", at(8, 0), at(12, 0))], 10);
        let p = &placements[0];
        assert_eq!(p.start_minutes, 0);
        assert_eq!(p.duration_minutes, 60);
        assert_close(p.rect.y, 2.0);
        assert_close(p.rect.height, 56.0);
    }

    #[test]
    fn event_entirely_before_the_hour_is_floored() {
        let placements = lay_out(&[event("early", at(7, 0), at(8, 0))], 9);
        let p = &placements[0];
        assert_eq!(p.start_minutes, 0);
        assert_eq!(p.duration_minutes, 1);
    }

    #[test]
    fn partial_minutes_truncate() {
        let start = at(9, 10) + chrono::Duration::seconds(59);
        let placements = lay_out(&[event("a", start, at(9, 20))], 9);
        let p = &placements[0];
        assert_eq!(p.start_minutes, 10);
        assert_eq!(p.duration_minutes, 10);
    }

    #[test]
    fn overlapping_events_split_the_width() {
        let events = vec![
            event("one", at(9, 0), at(11, 0)),
            event("two", at(9, 30), at(10, 30)),
            event("three", at(10, 0), at(12, 0)),
        ];
        let placements = lay_out(&events, 10);
        assert_eq!(placements.len(), 3);
        for (i, p) in placements.iter().enumerate() {
            assert_eq!(p.column_index, i);
            assert_eq!(p.column_count, 3);
            assert_close(p.rect.width, 96.0);
        }
        assert_close(placements[0].rect.x, 2.0);
        assert_close(placements[1].rect.x, 102.0);
        assert_close(placements[2].rect.x, 202.0);

        for (i, a) in placements.iter().enumerate() {
            for b in placements.iter().skip(i + 1) {
                assert!(!a.rect.intersects(&b.rect));
            }
        }
    }

    #[test]
    fn custom_metrics_are_honoured() {
        let metrics = LayoutMetrics {
            vertical_padding: 0.0,
            horizontal_padding: 5.0,
            minimum_visible_height: 10.0,
        };
        let columns = assign_columns(&[
            event("a", at(9, 0), at(9, 30)),
            event("b", at(9, 15), at(9, 16)),
        ]);
        let placements = layout(&columns, at(9, 0), Size::new(200.0, 120.0), &metrics);
        assert_close(placements[0].rect.height, 60.0);
        assert_close(placements[0].rect.x, 5.0);
        assert_close(placements[0].rect.width, 90.0);
        assert_close(placements[1].rect.x, 105.0);
        assert_close(placements[1].rect.y, 30.0);
        assert_close(placements[1].rect.height, 10.0);
    }

    #[test]
    fn no_columns_no_placements() {
        let placements = layout(
            &[],
            at(9, 0),
            Size::new(300.0, 60.0),
            &LayoutMetrics::default(),
        );
        assert!(placements.is_empty());
    }
}
