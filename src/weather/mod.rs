// ABOUTME: Forecast supplier boundary: async provider trait and an in-memory provider
// ABOUTME: The scanning engine never calls providers; the suggestion layer does
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fairweather Contributors

//! # Forecast Suppliers
//!
//! A [`ForecastProvider`] turns a location string into an ordered sequence of
//! forecast samples plus the location's UTC offset, or fails with a classified
//! [`WeatherError`].

/// `OpenWeather` 5-day / 3-hour forecast client
pub mod openweather;

pub use openweather::{classify_status, normalize_zip, parse_forecast, OpenWeatherClient};

use async_trait::async_trait;
use fairweather_core::errors::WeatherError;
use fairweather_core::models::Forecast;
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Source of forecasts for a location
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so one provider can serve
/// concurrent suggestion requests.
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    /// Provider name for logs (e.g. "openweather", "static")
    fn name(&self) -> &'static str;

    /// Fetch the forecast for `location`
    ///
    /// # Errors
    ///
    /// Returns a [`WeatherError`] describing why no forecast is available
    async fn fetch_forecast(&self, location: &str) -> Result<Forecast, WeatherError>;
}

/// Provider that answers every request with the same canned outcome
///
/// Backs offline CLI runs (`--forecast-file`) and tests.
#[derive(Debug, Clone)]
pub struct StaticForecastProvider {
    outcome: Result<Forecast, WeatherError>,
}

impl StaticForecastProvider {
    /// Always return `forecast`
    #[must_use]
    pub const fn new(forecast: Forecast) -> Self {
        Self {
            outcome: Ok(forecast),
        }
    }

    /// Always fail with `error`
    #[must_use]
    pub const fn failing(error: WeatherError) -> Self {
        Self {
            outcome: Err(error),
        }
    }

    /// Load an `OpenWeather`-shaped forecast response from disk
    ///
    /// # Errors
    ///
    /// Returns `UpstreamFormat` if the file cannot be read or parsed
    pub async fn from_json_file(path: impl AsRef<Path>) -> Result<Self, WeatherError> {
        let path = path.as_ref();
        let body = fs::read_to_string(path).await.map_err(|e| {
            WeatherError::UpstreamFormat(format!(
                "Unable to read forecast file {}: {e}",
                path.display()
            ))
        })?;
        let forecast = parse_forecast(&body)?;
        debug!(
            path = %path.display(),
            samples = forecast.samples.len(),
            "Loaded forecast from file"
        );
        Ok(Self::new(forecast))
    }

    /// Replace the forecast's UTC offset; no effect on a failing provider
    #[must_use]
    pub fn with_timezone_offset(mut self, timezone_offset: i64) -> Self {
        if let Ok(forecast) = &mut self.outcome {
            forecast.timezone_offset = timezone_offset;
        }
        self
    }
}

#[async_trait]
impl ForecastProvider for StaticForecastProvider {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn fetch_forecast(&self, _location: &str) -> Result<Forecast, WeatherError> {
        self.outcome.clone()
    }
}
