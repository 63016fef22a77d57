// ABOUTME: Outdoor task request model and its validation into engine-ready constraints
// ABOUTME: Trims inputs, checks name, duration, ZIP digits, humidity range, and HH:MM times
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fairweather Contributors

use crate::errors::{AppError, AppResult, WeatherError};
use crate::weather::normalize_zip;
use fairweather_core::models::{Constraints, TimeOfDay, TimeOfDayParseError};
use serde::{Deserialize, Serialize};

const fn default_no_rain() -> bool {
    true
}

/// A task as submitted by a user, before validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRequest {
    /// Task name
    pub name: String,
    /// Required contiguous hours
    pub duration_hours: i64,
    /// Lowest acceptable temperature (°F)
    #[serde(default)]
    pub min_temp: Option<f64>,
    /// Highest acceptable temperature (°F)
    #[serde(default)]
    pub max_temp: Option<f64>,
    /// Lowest acceptable humidity (%)
    #[serde(default)]
    pub min_humidity: Option<i64>,
    /// Highest acceptable humidity (%)
    #[serde(default)]
    pub max_humidity: Option<i64>,
    /// Reject blocks with forecast rain (default true)
    #[serde(default = "default_no_rain")]
    pub no_rain: bool,
    /// ZIP code, optionally with a `,CC` country suffix
    pub location: String,
    /// Earliest local start, `HH:MM`
    #[serde(default)]
    pub earliest_start: Option<String>,
    /// Latest local start, `HH:MM`
    #[serde(default)]
    pub latest_start: Option<String>,
}

impl TaskRequest {
    /// Request with no weather bounds and rain forbidden
    pub fn new(name: impl Into<String>, location: impl Into<String>, duration_hours: i64) -> Self {
        Self {
            name: name.into(),
            duration_hours,
            min_temp: None,
            max_temp: None,
            min_humidity: None,
            max_humidity: None,
            no_rain: default_no_rain(),
            location: location.into(),
            earliest_start: None,
            latest_start: None,
        }
    }

    /// Check the request and convert it into engine-ready values
    ///
    /// Blank time strings count as absent. A minimum above its maximum is
    /// accepted; such a task simply matches nothing.
    ///
    /// # Errors
    ///
    /// Returns an `AppError` naming the first invalid field
    pub fn validate(&self) -> AppResult<ValidatedTask> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AppError::missing_field("name"));
        }
        if self.duration_hours <= 0 {
            return Err(AppError::out_of_range(
                "duration_hours must be greater than 0",
            ));
        }

        let location = self.location.trim();
        if location.is_empty() {
            return Err(AppError::missing_field("location"));
        }
        normalize_zip(location).map_err(|e| match e {
            WeatherError::InvalidLocation(_) => {
                AppError::invalid_input("location must include 5 or 9 digits for ZIP code")
            }
            other => AppError::from(other),
        })?;

        Ok(ValidatedTask {
            name: name.to_owned(),
            duration_hours: self.duration_hours,
            min_temp: self.min_temp,
            max_temp: self.max_temp,
            min_humidity: humidity_bound("min_humidity", self.min_humidity)?,
            max_humidity: humidity_bound("max_humidity", self.max_humidity)?,
            no_rain: self.no_rain,
            location: location.to_owned(),
            earliest_start: time_bound("earliest_start", self.earliest_start.as_deref())?,
            latest_start: time_bound("latest_start", self.latest_start.as_deref())?,
        })
    }
}

fn humidity_bound(field: &str, value: Option<i64>) -> AppResult<Option<u8>> {
    value
        .map(|raw| {
            u8::try_from(raw)
                .ok()
                .filter(|percent| *percent <= 100)
                .ok_or_else(|| AppError::out_of_range(format!("{field} must be between 0 and 100")))
        })
        .transpose()
}

fn time_bound(field: &str, value: Option<&str>) -> AppResult<Option<TimeOfDay>> {
    let Some(text) = value.map(str::trim).filter(|text| !text.is_empty()) else {
        return Ok(None);
    };
    text.parse::<TimeOfDay>().map(Some).map_err(|e| match e {
        TimeOfDayParseError::InvalidFormat(_) => {
            AppError::invalid_format(format!("{field} must be in HH:MM format"))
        }
        TimeOfDayParseError::OutOfRange(_) => {
            AppError::out_of_range(format!("{field} must be a valid time of day"))
        }
    })
}

/// A request that passed validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatedTask {
    /// Trimmed task name
    pub name: String,
    /// Required contiguous hours, always positive
    pub duration_hours: i64,
    /// Lowest acceptable temperature (°F)
    pub min_temp: Option<f64>,
    /// Highest acceptable temperature (°F)
    pub max_temp: Option<f64>,
    /// Lowest acceptable humidity (%)
    pub min_humidity: Option<u8>,
    /// Highest acceptable humidity (%)
    pub max_humidity: Option<u8>,
    /// Reject blocks with forecast rain
    pub no_rain: bool,
    /// Trimmed location as entered
    pub location: String,
    /// Earliest local start
    pub earliest_start: Option<TimeOfDay>,
    /// Latest local start
    pub latest_start: Option<TimeOfDay>,
}

impl ValidatedTask {
    /// Engine constraints for a forecast whose location sits at `timezone_offset`
    #[must_use]
    pub fn constraints(&self, timezone_offset: i64) -> Constraints {
        Constraints::builder(self.duration_hours)
            .min_temp_opt(self.min_temp)
            .max_temp_opt(self.max_temp)
            .min_humidity_opt(self.min_humidity)
            .max_humidity_opt(self.max_humidity)
            .no_rain(self.no_rain)
            .earliest_start_opt(self.earliest_start)
            .latest_start_opt(self.latest_start)
            .timezone_offset(timezone_offset)
            .build()
    }
}
