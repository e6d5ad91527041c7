//! Configuration loading and typed config structures for the daygrid timeline.
//!
//! The canonical configuration lives in `daygrid-config.yaml` at the
//! workspace root. This module defines strongly-typed structs that mirror
//! the YAML structure, and provides a loader that reads and validates the
//! file. Every field has a default, so an empty document is valid.

use std::path::Path;

use daygrid_layout::LayoutMetrics;
use daygrid_types::Size;
use serde::Deserialize;

use crate::calendar::{CalendarError, TimelineCalendar};

/// Environment variable that overrides `calendar.time_zone`.
pub const TIME_ZONE_ENV: &str = "TIMELINE_TIME_ZONE";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// The calendar section names an unknown zone or weekday.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// A numeric setting is out of range.
    #[error("invalid value for {field}: {reason}")]
    InvalidValue {
        /// Dotted path of the offending field.
        field: &'static str,
        /// Explanation of what is wrong with the value.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level timeline configuration.
///
/// Mirrors the structure of `daygrid-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TimelineConfig {
    /// Time zone and week settings.
    #[serde(default)]
    pub calendar: CalendarConfig,

    /// Row geometry settings.
    #[serde(default)]
    pub layout: LayoutConfig,
}

impl TimelineConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// The `TIMELINE_TIME_ZONE` environment variable overrides
    /// `calendar.time_zone`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not to a mapping.
        if yaml.trim().is_empty() {
            let mut config = Self::default();
            config.calendar.apply_env_overrides();
            return Ok(config);
        }
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.calendar.apply_env_overrides();
        Ok(config)
    }

    /// Build the calendar described by the `calendar` section.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Calendar`] for unknown zone or weekday names.
    pub fn calendar(&self) -> Result<TimelineCalendar, ConfigError> {
        Ok(TimelineCalendar::from_config(&self.calendar)?)
    }

    /// Build the layout metrics described by the `layout` section.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for negative or non-finite values.
    pub fn metrics(&self) -> Result<LayoutMetrics, ConfigError> {
        self.layout.metrics()
    }

    /// Size of one hour row's event area for a container `width` points wide.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `layout.row_height` is not
    /// strictly positive.
    pub fn row_size(&self, width: f64) -> Result<Size, ConfigError> {
        self.layout.row_size(width)
    }

    /// Check every section without keeping the built values.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.calendar()?;
        self.metrics()?;
        Ok(())
    }
}

/// Calendar configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CalendarConfig {
    /// IANA time-zone name.
    #[serde(default = "default_time_zone")]
    pub time_zone: String,

    /// Weekday that starts a week strip.
    #[serde(default = "default_first_weekday")]
    pub first_weekday: String,
}

impl CalendarConfig {
    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides resolved through `lookup`, keyed by variable name.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(zone) = lookup(TIME_ZONE_ENV) {
            self.time_zone = zone;
        }
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            time_zone: default_time_zone(),
            first_weekday: default_first_weekday(),
        }
    }
}

/// Hour-row geometry configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LayoutConfig {
    /// Per-side vertical padding in points.
    #[serde(default = "default_vertical_padding")]
    pub vertical_padding: f64,

    /// Per-side horizontal padding in points (multi-column rows only).
    #[serde(default = "default_horizontal_padding")]
    pub horizontal_padding: f64,

    /// Floor for event rectangle height in points.
    #[serde(default = "default_minimum_visible_height")]
    pub minimum_visible_height: f64,

    /// Height of one hour row in points.
    #[serde(default = "default_row_height")]
    pub row_height: f64,
}

impl LayoutConfig {
    /// Validate and convert into [`LayoutMetrics`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for negative or non-finite
    /// paddings, or a row height that is not strictly positive.
    pub fn metrics(&self) -> Result<LayoutMetrics, ConfigError> {
        non_negative("layout.vertical_padding", self.vertical_padding)?;
        non_negative("layout.horizontal_padding", self.horizontal_padding)?;
        non_negative("layout.minimum_visible_height", self.minimum_visible_height)?;
        self.checked_row_height()?;
        Ok(LayoutMetrics {
            vertical_padding: self.vertical_padding,
            horizontal_padding: self.horizontal_padding,
            minimum_visible_height: self.minimum_visible_height,
        })
    }

    /// Event-area size of one hour row: `width` by `row_height`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a row height that is not
    /// strictly positive, or a negative or non-finite width.
    pub fn row_size(&self, width: f64) -> Result<Size, ConfigError> {
        non_negative("row width", width)?;
        Ok(Size::new(width, self.checked_row_height()?))
    }

    fn checked_row_height(&self) -> Result<f64, ConfigError> {
        if self.row_height.is_finite() && self.row_height > 0.0 {
            Ok(self.row_height)
        } else {
            Err(ConfigError::InvalidValue {
                field: "layout.row_height",
                reason: format!("must be positive, got {}", self.row_height),
            })
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            vertical_padding: default_vertical_padding(),
            horizontal_padding: default_horizontal_padding(),
            minimum_visible_height: default_minimum_visible_height(),
            row_height: default_row_height(),
        }
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field,
            reason: format!("must be a finite non-negative number, got {value}"),
        })
    }
}

// ---------------------------------------------------------------------------
// Default value functions
// ---------------------------------------------------------------------------

fn default_time_zone() -> String {
    "UTC".to_owned()
}

fn default_first_weekday() -> String {
    "sunday".to_owned()
}

const fn default_vertical_padding() -> f64 {
    LayoutMetrics::DEFAULT_VERTICAL_PADDING
}

const fn default_horizontal_padding() -> f64 {
    LayoutMetrics::DEFAULT_HORIZONTAL_PADDING
}

const fn default_minimum_visible_height() -> f64 {
    LayoutMetrics::DEFAULT_MINIMUM_VISIBLE_HEIGHT
}

const fn default_row_height() -> f64 {
    60.0
}
