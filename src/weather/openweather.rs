// ABOUTME: OpenWeather 5-day / 3-hour forecast client and response parsing
// ABOUTME: ZIP normalization, status classification, and sample extraction from the JSON payload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fairweather Contributors

use super::ForecastProvider;
use crate::config::{ServerConfig, WeatherApiConfig};
use crate::constants::weather_api::{DEFAULT_COUNTRY, MAX_ERROR_DETAIL_CHARS};
use crate::utils::http_client;
use async_trait::async_trait;
use fairweather_core::errors::WeatherError;
use fairweather_core::models::{Forecast, ForecastSample};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error, warn};

const ZIP_REQUIRED: &str = "ZIP code is required.";
const ZIP_DIGITS: &str = "ZIP code must include 5 or 9 digits.";
const UNREACHABLE: &str = "Unable to reach weather service.";
const INVALID_JSON: &str = "Weather service returned invalid JSON.";
const UNKNOWN_API_ERROR: &str = "Unknown error from weather API.";

/// Client for `GET {base_url}/forecast?zip=...&appid=...&units=...`
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    client: Client,
    config: WeatherApiConfig,
}

impl OpenWeatherClient {
    /// Client using the given API settings
    #[must_use]
    pub fn new(config: WeatherApiConfig) -> Self {
        Self {
            client: http_client::weather_client(&config),
            config,
        }
    }

    /// Client using the weather section of a loaded configuration
    #[must_use]
    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(config.weather.clone())
    }

    fn forecast_url(&self) -> String {
        format!("{}/forecast", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ForecastProvider for OpenWeatherClient {
    fn name(&self) -> &'static str {
        "openweather"
    }

    async fn fetch_forecast(&self, location: &str) -> Result<Forecast, WeatherError> {
        let zip = normalize_zip(location)?;
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(WeatherError::MissingApiKey)?;

        debug!(zip = %zip, url = %self.forecast_url(), "Fetching forecast");

        let response = self
            .client
            .get(self.forecast_url())
            .query(&[
                ("zip", zip.as_str()),
                ("appid", api_key),
                ("units", self.config.units.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Weather API request failed");
                WeatherError::Unreachable(UNREACHABLE.to_owned())
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!(error = %e, "Failed to read weather API response body");
            WeatherError::Unreachable(UNREACHABLE.to_owned())
        })?;

        if !status.is_success() {
            let classified = classify_status(status.as_u16(), &body, location);
            warn!(status = status.as_u16(), error = %classified, "Weather API returned an error status");
            return Err(classified);
        }

        let forecast = parse_forecast(&body)?;
        debug!(
            zip = %zip,
            samples = forecast.samples.len(),
            timezone_offset = forecast.timezone_offset,
            "Forecast fetched"
        );
        Ok(forecast)
    }
}

/// Normalize user ZIP input into `OpenWeather`'s `{digits},{COUNTRY}` form
///
/// An optional `,CC` suffix selects the country (default `US`). Non-digit
/// characters in the ZIP part are dropped; 5 or 9 digits must remain.
///
/// # Errors
///
/// Returns `InvalidLocation` for blank input or a wrong digit count
pub fn normalize_zip(input: &str) -> Result<String, WeatherError> {
    let cleaned = input.trim();
    if cleaned.is_empty() {
        return Err(WeatherError::InvalidLocation(ZIP_REQUIRED.to_owned()));
    }

    let (zip_part, country) = match cleaned.split_once(',') {
        Some((base, remainder)) => {
            let remainder = remainder.trim();
            let country = if remainder.is_empty() {
                DEFAULT_COUNTRY.to_owned()
            } else {
                remainder.to_uppercase()
            };
            (base.trim(), country)
        }
        None => (cleaned, DEFAULT_COUNTRY.to_owned()),
    };

    let digits: String = zip_part.chars().filter(char::is_ascii_digit).collect();
    if !matches!(digits.len(), 5 | 9) {
        return Err(WeatherError::InvalidLocation(ZIP_DIGITS.to_owned()));
    }
    Ok(format!("{digits},{country}"))
}

/// Extract samples and the city's UTC offset from a forecast response body
///
/// Entries without `dt` are skipped. Rain is read from `rain.3h` or from a
/// bare number and defaults to zero.
///
/// # Errors
///
/// Returns `UpstreamFormat` for invalid JSON or a payload without a `list` array
pub fn parse_forecast(body: &str) -> Result<Forecast, WeatherError> {
    let payload: Value = serde_json::from_str(body)
        .map_err(|_| WeatherError::UpstreamFormat(INVALID_JSON.to_owned()))?;

    let Some(entries) = payload.get("list").and_then(Value::as_array) else {
        let message = payload
            .get("message")
            .and_then(Value::as_str)
            .filter(|message| !message.is_empty())
            .unwrap_or(UNKNOWN_API_ERROR);
        return Err(WeatherError::UpstreamFormat(format!(
            "Weather API error: {message}"
        )));
    };

    let mut samples = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        match parse_entry(entry) {
            Some(sample) => samples.push(sample),
            None => warn!(index, "Skipping forecast entry without a timestamp"),
        }
    }

    let timezone_offset = payload
        .get("city")
        .and_then(|city| city.get("timezone"))
        .and_then(as_whole_number)
        .unwrap_or(0);

    Ok(Forecast::new(samples, timezone_offset))
}

fn parse_entry(entry: &Value) -> Option<ForecastSample> {
    let timestamp = entry.get("dt").and_then(as_whole_number)?;
    let main = entry.get("main");
    let temperature = main.and_then(|m| m.get("temp")).and_then(Value::as_f64);
    let humidity = main
        .and_then(|m| m.get("humidity"))
        .and_then(Value::as_f64)
        .map(|h| h.round().clamp(0.0, 100.0) as u8);
    let rain = entry.get("rain").map_or(0.0, |rain| {
        rain.get("3h")
            .and_then(Value::as_f64)
            .or_else(|| rain.as_f64())
            .unwrap_or(0.0)
            .max(0.0)
    });

    Some(ForecastSample::new(timestamp, temperature, humidity).with_rain(rain))
}

fn as_whole_number(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| value.as_f64().map(|v| v as i64))
}

/// Map a non-success HTTP status to a user-facing error
///
/// Upstream detail (the JSON `message`, else the raw body) is appended as
/// ` Details: ...` unless the base message already contains it.
#[must_use]
pub fn classify_status(status: u16, body: &str, original_zip: &str) -> WeatherError {
    let base = match status {
        401 => "Authentication with OpenWeather failed. Verify the OPENWEATHER_API_KEY credential."
            .to_owned(),
        404 => format!(
            "No forecast data found for ZIP code '{original_zip}'. Please confirm the location."
        ),
        429 => "OpenWeather request limit exceeded. Please wait before retrying.".to_owned(),
        other => format!("OpenWeather API request failed with status {other}."),
    };

    let message = match upstream_detail(body) {
        Some(detail) if !base.contains(&detail) => format!("{base} Details: {detail}"),
        _ => base,
    };

    match status {
        401 => WeatherError::Authentication(message),
        404 => WeatherError::NotFound(message),
        429 => WeatherError::RateLimited(message),
        _ => WeatherError::UpstreamStatus { status, message },
    }
}

fn upstream_detail(body: &str) -> Option<String> {
    let from_json = serde_json::from_str::<Value>(body).ok().and_then(|payload| {
        payload
            .get("message")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|message| !message.is_empty())
            .map(truncate_detail)
    });
    from_json.or_else(|| {
        let text = body.trim();
        (!text.is_empty()).then(|| truncate_detail(text))
    })
}

/// Trim and cap `detail` at the maximum length, ending in `...` when cut
#[must_use]
pub fn truncate_detail(detail: &str) -> String {
    let detail = detail.trim();
    if detail.chars().count() > MAX_ERROR_DETAIL_CHARS {
        let kept: String = detail.chars().take(MAX_ERROR_DETAIL_CHARS - 3).collect();
        format!("{kept}...")
    } else {
        detail.to_owned()
    }
}
