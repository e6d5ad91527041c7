//! Shared value types for the daygrid day-timeline engine.
//!
//! This crate is the single source of truth for the values that flow
//! between the event store, the layout engine, and the rendering layer.
//! Types defined here flow downstream to `TypeScript` via `ts-rs` so the
//! renderer can consume placements without re-declaring them.
//!
//! # Modules
//!
//! - [`event`] -- The immutable [`Event`] value, its opaque [`EventColor`],
//!   and the half-open overlap relation.
//! - [`day`] -- [`DayKey`], the canonical calendar-day index of the store.
//! - [`geometry`] -- [`Size`], [`Rect`] and the per-event [`Placement`]
//!   produced by the layout engine.

pub mod day;
pub mod event;
pub mod geometry;

// Re-export all public types at crate root for convenience.
pub use day::DayKey;
pub use event::{Event, EventColor};
pub use geometry::{Placement, Rect, Size};
