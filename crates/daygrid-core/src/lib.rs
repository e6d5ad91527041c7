//! Calendar, event store, and day-timeline composition for daygrid.
//!
//! This crate owns the stateful half of the day-timeline engine: the
//! injected calendar capability, the day-indexed event store, and the
//! glue that turns a stored day into 24 laid-out hour rows. The pure
//! overlap-resolution and geometry stages live in `daygrid-layout`.
//!
//! # Modules
//!
//! - [`calendar`] -- [`TimelineCalendar`]: time zone, first weekday, day
//!   keys, hour windows, week strips, and row labels.
//! - [`config`] -- Configuration loading from `daygrid-config.yaml` into
//!   strongly-typed structs.
//! - [`store`] -- [`EventStore`]: thread-safe events-by-day store with the
//!   half-open hour filter.
//! - [`timeline`] -- [`DayTimeline`] row assembly and [`focus_hour`].
//!
//! [`TimelineCalendar`]: calendar::TimelineCalendar
//! [`EventStore`]: store::EventStore
//! [`DayTimeline`]: timeline::DayTimeline
//! [`focus_hour`]: timeline::focus_hour

pub mod calendar;
pub mod config;
pub mod store;
pub mod timeline;

pub use calendar::{CalendarError, HOURS_PER_DAY, TimelineCalendar};
pub use config::{ConfigError, TimelineConfig};
pub use store::EventStore;
pub use timeline::{DayTimeline, HourRow, focus_hour};
