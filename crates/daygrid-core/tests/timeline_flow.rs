//! Integration tests for the store -> layout flow.
//!
//! Drives the public API the way a renderer would: file events, ask for
//! one hour's events, partition them into columns, and lay them out.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc, Weekday};
use daygrid_core::config::TIME_ZONE_ENV;
use daygrid_core::{DayTimeline, EventStore, TimelineCalendar, TimelineConfig, focus_hour};
use daygrid_layout::{LayoutMetrics, assign_columns, layout};
use daygrid_types::{DayKey, Event, EventColor, Size};

const EPSILON: f64 = 1e-9;

fn at(d: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 11, d, hour, minute, 0).unwrap()
}

fn day(d: u32) -> DayKey {
    DayKey::from_ymd(2024, 11, d).unwrap()
}

fn event(name: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> Event {
    Event::new(name, start, end, EventColor::from_rgb(0x1A, 0xBC, 0x9C))
}

fn names(events: &[Event]) -> Vec<&str> {
    events.iter().map(|e| e.name.as_str()).collect()
}

fn three_overlapping() -> Vec<Event> {
    vec![
        event("Event 1", at(6, 9, 0), at(6, 11, 0)).with_livestream(true),
        event("Event 2", at(6, 9, 30), at(6, 10, 30)),
        event("Event 3", at(6, 10, 0), at(6, 12, 0)),
    ]
}

#[test]
fn end_to_end_three_overlapping_events() {
    let store = EventStore::new(TimelineCalendar::utc());
    store.add_all(three_overlapping());

    let nine = store.events_overlapping_hour(day(6), 9);
    assert_eq!(names(&nine), vec!["Event 1", "Event 2"]);

    let columns = assign_columns(&store.events_on(day(6)));
    assert_eq!(columns.len(), 3);

    let back_to_back = vec![
        event("first", at(6, 9, 0), at(6, 10, 0)),
        event("second", at(6, 10, 0), at(6, 11, 0)),
    ];
    let columns = assign_columns(&back_to_back);
    assert_eq!(columns.len(), 1);
    assert_eq!(names(columns[0].events()), vec!["first", "second"]);
}

#[test]
fn hour_ten_row_is_laid_out_side_by_side() {
    let store = EventStore::new(TimelineCalendar::utc());
    store.add_all(three_overlapping());

    let hour_start = store.calendar().hour_start(day(6), 10).unwrap();
    let events = store.events_overlapping_hour(day(6), 10);
    let columns = assign_columns(&events);
    let placements = layout(
        &columns,
        hour_start,
        Size::new(240.0, 60.0),
        &LayoutMetrics::default(),
    );

    assert_eq!(placements.len(), 3);
    for (i, a) in placements.iter().enumerate() {
        assert!((a.rect.width - 76.0).abs() < EPSILON);
        for b in placements.iter().skip(i + 1) {
            assert!(!a.rect.intersects(&b.rect), "{} collides with {}", a.event.name, b.event.name);
        }
    }
    assert!(placements[0].event.has_livestream);
}

#[test]
fn day_timeline_matches_per_hour_queries() {
    let store = EventStore::new(TimelineCalendar::utc());
    store.add_all(three_overlapping());
    let timeline = DayTimeline::build(
        &store,
        day(6),
        Size::new(240.0, 60.0),
        &LayoutMetrics::default(),
    );

    for row in &timeline.rows {
        let expected = store.events_overlapping_hour(day(6), row.hour).len();
        assert_eq!(row.placements.len(), expected, "hour {}", row.hour);
    }
    assert_eq!(timeline.row(9).unwrap().placements.len(), 2);
    assert_eq!(timeline.row(10).unwrap().placements.len(), 3);
    assert_eq!(timeline.row(11).unwrap().placements.len(), 1);
    assert_eq!(timeline.row(11).unwrap().placements[0].column_count, 1);
}

#[test]
fn midnight_crossing_event_stays_on_start_day() {
    let store = EventStore::new(TimelineCalendar::utc());
    store.add(event("late", at(6, 23, 30), at(7, 0, 15)));

    assert_eq!(store.events_on(day(6)).len(), 1);
    assert!(store.events_on(day(7)).is_empty());
    assert!(!store.has_events(day(7)));
}

#[test]
fn zero_duration_event_gets_minimum_height() {
    let blip = event("blip", at(6, 11, 0), at(6, 11, 0));
    let columns = assign_columns(std::slice::from_ref(&blip));
    let placements = layout(
        &columns,
        at(6, 11, 0),
        Size::new(240.0, 60.0),
        &LayoutMetrics::default(),
    );
    assert_eq!(placements[0].duration_minutes, 1);
    assert!(
        (placements[0].rect.height - LayoutMetrics::DEFAULT_MINIMUM_VISIBLE_HEIGHT).abs()
            < EPSILON
    );
}

#[test]
fn clear_scope_is_one_day() {
    let store = EventStore::new(TimelineCalendar::utc());
    store.add(event("a", at(6, 9, 0), at(6, 10, 0)));
    store.add(event("b", at(7, 9, 0), at(7, 10, 0)));
    store.clear(day(6));
    assert!(store.events_on(day(6)).is_empty());
    assert_eq!(names(&store.events_on(day(7))), vec!["b"]);
}

#[test]
fn shared_store_serves_concurrent_layouts() {
    let store = Arc::new(EventStore::new(TimelineCalendar::utc()));
    store.add_all(three_overlapping());

    let handles: Vec<_> = (9..12)
        .map(|hour| {
            let store = Arc::clone(&store);
            std::thread::spawn(move || {
                DayTimeline::build(
                    &store,
                    day(6),
                    Size::new(240.0, 60.0),
                    &LayoutMetrics::default(),
                )
                .row(hour)
                .map(|row| row.placements.len())
            })
        })
        .collect();

    let counts: Vec<Option<usize>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(counts, vec![Some(2), Some(3), Some(1)]);
}

#[test]
fn configured_zone_drives_filing_and_focus() {
    let yaml = "calendar:\n  time_zone: \"UTC\"\n  first_weekday: \"monday\"\n";
    let mut config = TimelineConfig::parse(yaml).unwrap();
    config
        .calendar
        .apply_overrides(|key| (key == TIME_ZONE_ENV).then(|| "Asia/Tokyo".to_owned()));
    let calendar = config.calendar().unwrap();
    assert_eq!(calendar.time_zone(), chrono_tz::Asia::Tokyo);
    assert_eq!(calendar.first_weekday(), Weekday::Mon);

    let store = EventStore::new(calendar);
    // 00:30Z on the 7th is 09:30 on the 7th in Tokyo.
    store.add(event("standup", at(7, 0, 30), at(7, 0, 45)));
    let tokyo_day = day(7);
    assert_eq!(store.events_overlapping_hour(tokyo_day, 9).len(), 1);

    let events = store.events_on(tokyo_day);
    assert_eq!(focus_hour(&events, at(6, 22, 0), &calendar), Some(9));
}

#[test]
fn configured_row_height_sizes_the_timeline() {
    let config = TimelineConfig::parse("layout:\n  row_height: 120\n").unwrap();
    let store = EventStore::new(TimelineCalendar::utc());
    store.add(event("half", at(6, 9, 30), at(6, 10, 0)));

    let timeline = DayTimeline::build(
        &store,
        day(6),
        config.row_size(240.0).unwrap(),
        &config.metrics().unwrap(),
    );
    let rect = timeline.row(9).unwrap().placements[0].rect;
    // 30 minutes into a 120-point row, plus the 2-point top padding.
    assert!((rect.y - 62.0).abs() < EPSILON);
    assert!((rect.height - 56.0).abs() < EPSILON);
}
