//! Calendar-day index used by the event store.
//!
//! A [`DayKey`] is a year/month/day triple with no time-of-day and no
//! offset attached. The calendar derives it from an instant in its
//! configured time zone; two instants on the same local day always map
//! to the same key regardless of sub-day time or DST transitions.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Canonical identifier for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DayKey(pub NaiveDate);

impl DayKey {
    /// Build a key from year, month (1-12) and day (1-31).
    ///
    /// Returns `None` for dates that do not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Return the underlying calendar date.
    pub const fn date(self) -> NaiveDate {
        self.0
    }

    /// Day of the week.
    pub fn weekday(self) -> Weekday {
        self.0.weekday()
    }
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<DayKey> for NaiveDate {
    fn from(day: DayKey) -> Self {
        day.0
    }
}

impl core::fmt::Display for DayKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
