//! Stage A: partitioning overlapping events into columns.
//!
//! Events are sorted by start (stable, so equal starts keep their input
//! order) and then placed one at a time into the first column whose last
//! event has already ended. When no column is free a new one is opened to
//! the right.
//!
//! The column count is the greedy packing width. It is the accepted
//! policy for the row layout; callers must not assume it is the minimum
//! colouring of an arbitrary overlap graph.

use chrono::{DateTime, Utc};
use daygrid_types::Event;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A vertical lane of mutually non-overlapping events.
///
/// For consecutive events `a`, `b` in a column, `a.end <= b.start`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Column {
    events: Vec<Event>,
}

impl Column {
    fn starting_with(event: Event) -> Self {
        Self {
            events: vec![event],
        }
    }

    /// Events in this column, in start order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Number of events in this column.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True when the column holds no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// End instant of the last event placed in this column.
    pub fn last_end(&self) -> Option<DateTime<Utc>> {
        self.events.last().map(|e| e.end)
    }

    /// Whether `event` can be appended without overlapping the column tail.
    fn accepts(&self, event: &Event) -> bool {
        self.last_end().is_none_or(|end| end <= event.start)
    }
}

/// Partition `events` into non-overlapping columns.
///
/// Every input event appears in exactly one column. Columns are returned
/// in creation order, which is also their left-to-right display order.
pub fn assign_columns(events: &[Event]) -> Vec<Column> {
    let mut sorted: Vec<&Event> = events.iter().collect();
    sorted.sort_by_key(|e| e.start);

    let mut columns: Vec<Column> = Vec::new();
    for event in sorted {
        match columns.iter_mut().find(|column| column.accepts(event)) {
            Some(column) => column.events.push(event.clone()),
            None => columns.push(Column::starting_with(event.clone())),
        }
    }

    debug!(
        events = events.len(),
        columns = columns.len(),
        "assigned events to columns"
    );
    columns
}

/// Number of columns [`assign_columns`] would produce for `events`.
pub fn column_count(events: &[Event]) -> usize {
    let mut sorted: Vec<&Event> = events.iter().collect();
    sorted.sort_by_key(|e| e.start);

    let mut tails: Vec<DateTime<Utc>> = Vec::new();
    for event in sorted {
        match tails.iter_mut().find(|end| **end <= event.start) {
            Some(end) => *end = event.end,
            None => tails.push(event.end),
        }
    }
    tails.len()
}
