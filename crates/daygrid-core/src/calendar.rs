//! Calendar capability for the daygrid timeline.
//!
//! The calendar is the single source of truth for every conversion
//! between absolute instants and local wall-clock time. It is injected
//! into the event store and the timeline builder instead of being read
//! from host locale state, so layouts are deterministic under test.
//!
//! # Design Principles
//!
//! - A day is identified by its local date ([`DayKey`]), never by a
//!   midnight instant. Local midnight does not exist in every zone on
//!   every day.
//! - Wall-clock times that fall into a DST gap have no instant and yield
//!   `None`. Times repeated by a DST fold resolve to the earliest instant.
//! - An hour window is always one absolute hour long, `[start, start + 1h)`.

use std::str::FromStr;

use chrono::{DateTime, Days, Months, NaiveTime, TimeDelta, TimeZone, Timelike, Utc, Weekday};
use chrono_tz::Tz;
use daygrid_types::DayKey;

use crate::config::CalendarConfig;

/// Number of hour rows in one day.
pub const HOURS_PER_DAY: u32 = 24;

/// Number of days in one week strip.
const DAYS_PER_WEEK: u32 = 7;

/// Errors that can occur when building a calendar from configuration.
#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    /// The time-zone name is not in the IANA database.
    #[error("unknown time zone: {name}")]
    UnknownTimeZone {
        /// The rejected name.
        name: String,
    },

    /// The weekday name is not recognised.
    #[error("unknown weekday: {name}")]
    UnknownWeekday {
        /// The rejected name.
        name: String,
    },
}

/// Day and hour arithmetic in one configured time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineCalendar {
    /// Zone used for every local/absolute conversion.
    time_zone: Tz,

    /// First day of the week for week strips.
    first_weekday: Weekday,
}

impl TimelineCalendar {
    /// Create a calendar for the given zone and first weekday.
    pub const fn new(time_zone: Tz, first_weekday: Weekday) -> Self {
        Self {
            time_zone,
            first_weekday,
        }
    }

    /// UTC calendar with weeks starting on Sunday.
    pub const fn utc() -> Self {
        Self::new(Tz::UTC, Weekday::Sun)
    }

    /// Build a calendar from its configuration section.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnknownTimeZone`] or
    /// [`CalendarError::UnknownWeekday`] for unrecognised names.
    pub fn from_config(config: &CalendarConfig) -> Result<Self, CalendarError> {
        let time_zone = parse_time_zone(&config.time_zone)?;
        let first_weekday = parse_weekday(&config.first_weekday)?;
        Ok(Self::new(time_zone, first_weekday))
    }

    /// Return the configured time zone.
    pub const fn time_zone(&self) -> Tz {
        self.time_zone
    }

    /// Return the configured first weekday.
    pub const fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    /// Local calendar day containing `instant`.
    ///
    /// This is the only day normalization in the system.
    pub fn day_key(&self, instant: DateTime<Utc>) -> DayKey {
        DayKey(instant.with_timezone(&self.time_zone).date_naive())
    }

    /// Local hour (0-23) of `instant`.
    pub fn hour_of(&self, instant: DateTime<Utc>) -> u32 {
        instant.with_timezone(&self.time_zone).hour()
    }

    /// Resolve a local wall-clock time on `day` to an instant.
    ///
    /// Returns `None` inside a DST gap; folds resolve to the earliest instant.
    pub fn local_instant(&self, day: DayKey, time: NaiveTime) -> Option<DateTime<Utc>> {
        self.time_zone
            .from_local_datetime(&day.date().and_time(time))
            .earliest()
            .map(|local| local.with_timezone(&Utc))
    }

    /// First existing instant of `day`.
    ///
    /// Usually local midnight; on days whose midnight is skipped by a DST
    /// transition, the first whole hour that exists.
    pub fn start_of_day(&self, day: DayKey) -> Option<DateTime<Utc>> {
        (0..HOURS_PER_DAY).find_map(|hour| self.hour_start(day, hour))
    }

    /// Instant at `hour:00:00` local time on `day`.
    ///
    /// Returns `None` for `hour > 23` or when that wall-clock time does
    /// not exist.
    pub fn hour_start(&self, day: DayKey, hour: u32) -> Option<DateTime<Utc>> {
        if hour >= HOURS_PER_DAY {
            return None;
        }
        let time = NaiveTime::from_hms_opt(hour, 0, 0)?;
        self.local_instant(day, time)
    }

    /// The half-open window `[hour_start, hour_start + 1h)`.
    pub fn hour_window(&self, day: DayKey, hour: u32) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let start = self.hour_start(day, hour)?;
        let end = start.checked_add_signed(TimeDelta::hours(1))?;
        Some((start, end))
    }

    /// Move `day` by a signed number of days.
    pub fn add_days(&self, day: DayKey, days: i64) -> Option<DayKey> {
        let delta = TimeDelta::try_days(days)?;
        day.date().checked_add_signed(delta).map(DayKey)
    }

    /// Move `day` by a signed number of months.
    ///
    /// The day of month clamps to the last valid day of the target month.
    pub fn add_months(&self, day: DayKey, months: i32) -> Option<DayKey> {
        let step = Months::new(months.unsigned_abs());
        let date = if months >= 0 {
            day.date().checked_add_months(step)
        } else {
            day.date().checked_sub_months(step)
        };
        date.map(DayKey)
    }

    /// First day of the week containing `day`.
    pub fn start_of_week(&self, day: DayKey) -> Option<DayKey> {
        let weekday_index = day.weekday().num_days_from_monday();
        let first_index = self.first_weekday.num_days_from_monday();
        let offset = weekday_index
            .saturating_add(DAYS_PER_WEEK)
            .saturating_sub(first_index)
            .checked_rem(DAYS_PER_WEEK)
            .unwrap_or(0);
        day.date()
            .checked_sub_days(Days::new(u64::from(offset)))
            .map(DayKey)
    }

    /// The seven days of the week containing `day`, starting on the
    /// configured first weekday.
    pub fn week_of(&self, day: DayKey) -> Option<[DayKey; 7]> {
        let first = self.start_of_week(day)?;
        let mut week = [first; 7];
        let mut date = first.date();
        for slot in week.iter_mut().skip(1) {
            date = date.succ_opt()?;
            *slot = DayKey(date);
        }
        Some(week)
    }

    /// Twelve-hour row label for `hour`, e.g. `"12 AM"`, `"9 AM"`, `"3 PM"`.
    pub fn hour_label(hour: u32) -> Option<String> {
        if hour >= HOURS_PER_DAY {
            return None;
        }
        let time = NaiveTime::from_hms_opt(hour, 0, 0)?;
        Some(time.format("%-I %p").to_string())
    }
}

impl Default for TimelineCalendar {
    fn default() -> Self {
        Self::utc()
    }
}

/// Parse an IANA zone name such as `"Europe/Berlin"`.
fn parse_time_zone(name: &str) -> Result<Tz, CalendarError> {
    Tz::from_str(name.trim()).map_err(|_err| CalendarError::UnknownTimeZone {
        name: name.to_owned(),
    })
}

/// Parse a weekday name (`"sunday"`, `"Mon"`, ...), case-insensitive.
fn parse_weekday(name: &str) -> Result<Weekday, CalendarError> {
    name.trim()
        .parse::<Weekday>()
        .map_err(|_err| CalendarError::UnknownWeekday {
            name: name.to_owned(),
        })
}
