// ABOUTME: Scheduling constraint model with a validated local time-of-day value type
// ABOUTME: Temperature, humidity, rain, duration, start-time bounds, and timezone offset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fairweather Contributors

use crate::constants::blocks::{SECONDS_PER_DAY, SECONDS_PER_HOUR};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Why a time-of-day string was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeOfDayParseError {
    /// Not of the form `H:MM` or `HH:MM`
    #[error("'{0}' must be in HH:MM format")]
    InvalidFormat(String),
    /// Well-formed but not a real time of day
    #[error("'{0}' must be a valid time of day")]
    OutOfRange(String),
}

/// Local wall-clock time of day, 24-hour
///
/// Ordering is chronological within a day: `(hour, minute)` lexicographic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Build from components, rejecting anything outside 00:00-23:59
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` when `hour > 23` or `minute > 59`
    pub fn new(hour: u8, minute: u8) -> Result<Self, TimeOfDayParseError> {
        if hour > 23 || minute > 59 {
            return Err(TimeOfDayParseError::OutOfRange(format!(
                "{hour:02}:{minute:02}"
            )));
        }
        Ok(Self { hour, minute })
    }

    /// Local time of day of an epoch timestamp shifted by `offset_seconds`
    #[must_use]
    pub fn from_local_timestamp(timestamp: i64, offset_seconds: i64) -> Self {
        let seconds_of_day = (timestamp.rem_euclid(SECONDS_PER_DAY)
            + offset_seconds.rem_euclid(SECONDS_PER_DAY))
        .rem_euclid(SECONDS_PER_DAY);
        // Both components are bounded by the day length, so the narrowing is lossless
        Self {
            hour: (seconds_of_day / SECONDS_PER_HOUR) as u8,
            minute: ((seconds_of_day % SECONDS_PER_HOUR) / 60) as u8,
        }
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeOfDayParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let invalid = || TimeOfDayParseError::InvalidFormat(trimmed.to_owned());

        let (hour_str, minute_str) = trimmed.split_once(':').ok_or_else(invalid)?;
        let well_formed = (1..=2).contains(&hour_str.len())
            && minute_str.len() == 2
            && hour_str.bytes().chain(minute_str.bytes()).all(|b| b.is_ascii_digit());
        if !well_formed {
            return Err(invalid());
        }

        let hour: u8 = hour_str.parse().map_err(|_| invalid())?;
        let minute: u8 = minute_str.parse().map_err(|_| invalid())?;
        Self::new(hour, minute).map_err(|_| TimeOfDayParseError::OutOfRange(trimmed.to_owned()))
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = TimeOfDayParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Constraints a window must satisfy
///
/// Absent bounds are unconstrained. `earliest_start`/`latest_start` only gate
/// the first block of a window and are compared literally: a range whose
/// earliest bound is later than its latest bound admits no start at all.
///
/// # Examples
///
/// ```rust
/// use fairweather_core::models::{Constraints, TimeOfDay};
///
/// let constraints = Constraints::builder(6)
///     .min_temp(55.0)
///     .max_humidity(80)
///     .no_rain(true)
///     .earliest_start("08:00".parse::<TimeOfDay>().unwrap())
///     .timezone_offset(-18_000)
///     .build();
///
/// assert_eq!(constraints.duration_hours, 6);
/// assert!(constraints.has_time_of_day_bounds());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// Lowest acceptable temperature (°F)
    pub min_temp: Option<f64>,
    /// Highest acceptable temperature (°F)
    pub max_temp: Option<f64>,
    /// Lowest acceptable relative humidity (%)
    pub min_humidity: Option<u8>,
    /// Highest acceptable relative humidity (%)
    pub max_humidity: Option<u8>,
    /// Reject blocks with any forecast rain
    pub no_rain: bool,
    /// Required contiguous hours
    pub duration_hours: i64,
    /// Earliest local start time
    pub earliest_start: Option<TimeOfDay>,
    /// Latest local start time
    pub latest_start: Option<TimeOfDay>,
    /// Location offset from UTC in seconds
    #[serde(default)]
    pub timezone_offset: i64,
}

impl Constraints {
    /// Start building constraints for a task of `duration_hours`
    #[must_use]
    pub const fn builder(duration_hours: i64) -> ConstraintsBuilder {
        ConstraintsBuilder::new(duration_hours)
    }

    /// Whether either humidity bound is active
    #[must_use]
    pub const fn has_humidity_bounds(&self) -> bool {
        self.min_humidity.is_some() || self.max_humidity.is_some()
    }

    /// Whether either start-time bound is active
    #[must_use]
    pub const fn has_time_of_day_bounds(&self) -> bool {
        self.earliest_start.is_some() || self.latest_start.is_some()
    }
}

/// Builder for [`Constraints`]
///
/// The duration is required in `new()`; every other field starts unconstrained.
#[derive(Debug, Clone)]
pub struct ConstraintsBuilder {
    constraints: Constraints,
}

impl ConstraintsBuilder {
    /// Creates a new builder with only the duration set
    #[must_use]
    pub const fn new(duration_hours: i64) -> Self {
        Self {
            constraints: Constraints {
                min_temp: None,
                max_temp: None,
                min_humidity: None,
                max_humidity: None,
                no_rain: false,
                duration_hours,
                earliest_start: None,
                latest_start: None,
                timezone_offset: 0,
            },
        }
    }

    /// Sets the minimum temperature
    #[must_use]
    pub const fn min_temp(mut self, value: f64) -> Self {
        self.constraints.min_temp = Some(value);
        self
    }

    /// Sets the minimum temperature (optional)
    #[must_use]
    pub const fn min_temp_opt(mut self, value: Option<f64>) -> Self {
        self.constraints.min_temp = value;
        self
    }

    /// Sets the maximum temperature
    #[must_use]
    pub const fn max_temp(mut self, value: f64) -> Self {
        self.constraints.max_temp = Some(value);
        self
    }

    /// Sets the maximum temperature (optional)
    #[must_use]
    pub const fn max_temp_opt(mut self, value: Option<f64>) -> Self {
        self.constraints.max_temp = value;
        self
    }

    /// Sets the minimum humidity
    #[must_use]
    pub const fn min_humidity(mut self, value: u8) -> Self {
        self.constraints.min_humidity = Some(value);
        self
    }

    /// Sets the minimum humidity (optional)
    #[must_use]
    pub const fn min_humidity_opt(mut self, value: Option<u8>) -> Self {
        self.constraints.min_humidity = value;
        self
    }

    /// Sets the maximum humidity
    #[must_use]
    pub const fn max_humidity(mut self, value: u8) -> Self {
        self.constraints.max_humidity = Some(value);
        self
    }

    /// Sets the maximum humidity (optional)
    #[must_use]
    pub const fn max_humidity_opt(mut self, value: Option<u8>) -> Self {
        self.constraints.max_humidity = value;
        self
    }

    /// Sets whether rain disqualifies a block
    #[must_use]
    pub const fn no_rain(mut self, value: bool) -> Self {
        self.constraints.no_rain = value;
        self
    }

    /// Sets the earliest local start time
    #[must_use]
    pub const fn earliest_start(mut self, value: TimeOfDay) -> Self {
        self.constraints.earliest_start = Some(value);
        self
    }

    /// Sets the earliest local start time (optional)
    #[must_use]
    pub const fn earliest_start_opt(mut self, value: Option<TimeOfDay>) -> Self {
        self.constraints.earliest_start = value;
        self
    }

    /// Sets the latest local start time
    #[must_use]
    pub const fn latest_start(mut self, value: TimeOfDay) -> Self {
        self.constraints.latest_start = Some(value);
        self
    }

    /// Sets the latest local start time (optional)
    #[must_use]
    pub const fn latest_start_opt(mut self, value: Option<TimeOfDay>) -> Self {
        self.constraints.latest_start = value;
        self
    }

    /// Sets the location offset from UTC in seconds
    #[must_use]
    pub const fn timezone_offset(mut self, seconds: i64) -> Self {
        self.constraints.timezone_offset = seconds;
        self
    }

    /// Finish building
    #[must_use]
    pub fn build(self) -> Constraints {
        self.constraints
    }
}
