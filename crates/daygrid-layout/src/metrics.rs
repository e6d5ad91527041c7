//! Spacing constants applied when turning minutes into points.

/// Padding and minimum-size rules for event rectangles.
///
/// Paddings are per side; the totals subtracted from a rectangle's
/// extent are twice the per-side value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    /// Gap above each event (and below, via the total).
    pub vertical_padding: f64,
    /// Gap left of each event in multi-column rows (and right, via the total).
    pub horizontal_padding: f64,
    /// Floor for an event's rectangle height.
    pub minimum_visible_height: f64,
}

impl LayoutMetrics {
    /// Default per-side vertical padding in points.
    pub const DEFAULT_VERTICAL_PADDING: f64 = 2.0;
    /// Default per-side horizontal padding in points.
    pub const DEFAULT_HORIZONTAL_PADDING: f64 = 2.0;
    /// Default minimum rectangle height in points.
    pub const DEFAULT_MINIMUM_VISIBLE_HEIGHT: f64 = 5.0;

    /// Top plus bottom padding.
    pub fn vertical_padding_total(&self) -> f64 {
        self.vertical_padding * 2.0
    }

    /// Left plus right padding.
    pub fn horizontal_padding_total(&self) -> f64 {
        self.horizontal_padding * 2.0
    }
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            vertical_padding: Self::DEFAULT_VERTICAL_PADDING,
            horizontal_padding: Self::DEFAULT_HORIZONTAL_PADDING,
            minimum_visible_height: Self::DEFAULT_MINIMUM_VISIBLE_HEIGHT,
        }
    }
}
