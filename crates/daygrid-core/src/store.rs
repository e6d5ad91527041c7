//! Day-indexed event store.
//!
//! Provides a thread-safe [`EventStore`] that files every event under the
//! local calendar day of its start and answers per-day and per-hour
//! queries for the timeline. Safe to share via `Arc<EventStore>`: reads
//! run concurrently with each other, writes are exclusive.
//!
//! An event is filed under exactly one day. An event crossing midnight is
//! visible when querying its start day only.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use daygrid_types::{DayKey, Event};
use tracing::{debug, warn};

use crate::calendar::{HOURS_PER_DAY, TimelineCalendar};

type DayMap = BTreeMap<DayKey, Vec<Event>>;

/// Thread-safe store of events keyed by calendar day.
#[derive(Debug, Default)]
pub struct EventStore {
    /// Calendar used to derive day keys and hour windows.
    calendar: TimelineCalendar,
    /// Events per day, each day in insertion order.
    days: RwLock<DayMap>,
}

impl EventStore {
    /// Create an empty store bound to `calendar`.
    pub const fn new(calendar: TimelineCalendar) -> Self {
        Self {
            calendar,
            days: RwLock::new(BTreeMap::new()),
        }
    }

    /// Return the calendar this store normalizes days with.
    pub const fn calendar(&self) -> &TimelineCalendar {
        &self.calendar
    }

    /// File `event` under the day of its start.
    pub fn add(&self, event: Event) {
        let key = self.calendar.day_key(event.start);
        debug!(day = %key, event = event.name.as_str(), "filing event");
        self.write().entry(key).or_default().push(event);
    }

    /// File every event in `events`.
    pub fn add_all(&self, events: impl IntoIterator<Item = Event>) {
        let mut days = self.write();
        let mut added: usize = 0;
        for event in events {
            let key = self.calendar.day_key(event.start);
            days.entry(key).or_default().push(event);
            added = added.saturating_add(1);
        }
        debug!(added, "filed events in bulk");
    }

    /// Events filed under `day`, in insertion order.
    ///
    /// Returns an owned copy; an unknown day yields an empty vector.
    pub fn events_on(&self, day: DayKey) -> Vec<Event> {
        self.read().get(&day).cloned().unwrap_or_default()
    }

    /// Events filed under the local day containing `instant`.
    pub fn events_at(&self, instant: DateTime<Utc>) -> Vec<Event> {
        self.events_on(self.calendar.day_key(instant))
    }

    /// Events of `day` that intersect the half-open window of `hour`.
    ///
    /// Hours outside `0..=23`, and hours skipped by a DST transition,
    /// yield an empty result.
    pub fn events_overlapping_hour(&self, day: DayKey, hour: u32) -> Vec<Event> {
        if hour >= HOURS_PER_DAY {
            return Vec::new();
        }
        let Some((hour_start, hour_end)) = self.calendar.hour_window(day, hour) else {
            warn!(day = %day, hour, "hour does not exist in the configured time zone");
            return Vec::new();
        };
        self.read()
            .get(&day)
            .map(|events| {
                events
                    .iter()
                    .filter(|e| e.overlaps_window(hour_start, hour_end))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Remove every event filed under `day`. Other days are untouched.
    pub fn clear(&self, day: DayKey) {
        let removed = self.write().remove(&day).map_or(0, |events| events.len());
        debug!(day = %day, removed, "cleared day");
    }

    /// True when at least one event is filed under `day`.
    pub fn has_events(&self, day: DayKey) -> bool {
        self.read().get(&day).is_some_and(|events| !events.is_empty())
    }

    /// True when at least one event is filed under the day of `instant`.
    pub fn has_events_at(&self, instant: DateTime<Utc>) -> bool {
        self.has_events(self.calendar.day_key(instant))
    }

    /// Days that currently hold at least one event, in chronological order.
    pub fn days(&self) -> Vec<DayKey> {
        self.read()
            .iter()
            .filter(|(_, events)| !events.is_empty())
            .map(|(day, _)| *day)
            .collect()
    }

    /// Total number of events across all days.
    pub fn len(&self) -> usize {
        self.read().values().map(Vec::len).sum()
    }

    /// True when no day holds any event.
    pub fn is_empty(&self) -> bool {
        self.read().values().all(Vec::is_empty)
    }

    fn read(&self) -> RwLockReadGuard<'_, DayMap> {
        self.days.read().unwrap_or_else(|poisoned| {
            warn!("event store lock poisoned; recovering");
            poisoned.into_inner()
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, DayMap> {
        self.days.write().unwrap_or_else(|poisoned| {
            warn!("event store lock poisoned; recovering");
            poisoned.into_inner()
        })
    }
}
