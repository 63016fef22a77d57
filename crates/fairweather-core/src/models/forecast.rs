// ABOUTME: Forecast sample model and the supplier's forecast bundle
// ABOUTME: One fixed-length block of temperature, rain, and humidity readings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fairweather Contributors

use serde::{Deserialize, Serialize};

/// One forecast block
///
/// `timestamp` is the block start in epoch seconds. Readings the provider did
/// not report stay `None`; `rain_amount` defaults to zero when absent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastSample {
    /// Block start (epoch seconds, UTC)
    #[serde(rename = "dt")]
    pub timestamp: i64,
    /// Temperature in °F
    #[serde(rename = "temp", default)]
    pub temperature: Option<f64>,
    /// Rain accumulated over the block in mm
    #[serde(rename = "rain", default)]
    pub rain_amount: f64,
    /// Relative humidity (0-100)
    #[serde(rename = "humidity", default)]
    pub humidity_percent: Option<u8>,
}

impl ForecastSample {
    /// Dry sample with the given readings
    #[must_use]
    pub const fn new(timestamp: i64, temperature: Option<f64>, humidity_percent: Option<u8>) -> Self {
        Self {
            timestamp,
            temperature,
            rain_amount: 0.0,
            humidity_percent,
        }
    }

    /// Sets the rain accumulated over the block
    #[must_use]
    pub const fn with_rain(mut self, rain_amount: f64) -> Self {
        self.rain_amount = rain_amount;
        self
    }
}

/// Forecast returned by a supplier for one location
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// Samples in ascending timestamp order
    pub samples: Vec<ForecastSample>,
    /// Location offset from UTC in seconds
    #[serde(default)]
    pub timezone_offset: i64,
}

impl Forecast {
    /// Bundle samples with their location's UTC offset
    #[must_use]
    pub const fn new(samples: Vec<ForecastSample>, timezone_offset: i64) -> Self {
        Self {
            samples,
            timezone_offset,
        }
    }

    /// Whether the supplier returned no samples at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
