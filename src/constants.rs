// ABOUTME: Application constants and environment-based defaults for Fairweather
// ABOUTME: OpenWeather endpoint defaults, HTTP timeouts, and environment variable accessors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fairweather Contributors

//! # Constants Module
//!
//! Hardcoded defaults plus environment variable accessors. Engine constants
//! (block geometry, canonical reasons, summaries) live in `fairweather-core`
//! and are re-exported here.

pub use fairweather_core::constants::{blocks, reasons, summaries};

/// Service identity used in structured logs
pub mod service_names {
    /// Service name reported at startup
    pub const FAIRWEATHER: &str = "fairweather";
}

/// `OpenWeather` API defaults
pub mod weather_api {
    /// Base URL of the 5-day / 3-hour forecast API
    pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

    /// Units requested from `OpenWeather`; the engine works in Fahrenheit
    pub const DEFAULT_UNITS: &str = "imperial";

    /// Country appended to ZIP codes without an explicit `,CC` suffix
    pub const DEFAULT_COUNTRY: &str = "US";

    /// Upstream error details longer than this are truncated
    pub const MAX_ERROR_DETAIL_CHARS: usize = 200;
}

/// HTTP client timeouts
pub mod timeouts {
    /// Whole-request timeout in seconds
    pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

    /// Connection establishment timeout in seconds
    pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
}

/// Environment variable names and accessors
pub mod env_config {
    use super::weather_api;
    use std::env;

    /// `OpenWeather` API key variable
    pub const OPENWEATHER_API_KEY: &str = "OPENWEATHER_API_KEY";
    /// `OpenWeather` base URL variable
    pub const OPENWEATHER_BASE_URL: &str = "OPENWEATHER_BASE_URL";
    /// `OpenWeather` units variable
    pub const OPENWEATHER_UNITS: &str = "OPENWEATHER_UNITS";
    /// Request timeout variable
    pub const WEATHER_REQUEST_TIMEOUT_SECS: &str = "WEATHER_REQUEST_TIMEOUT_SECS";
    /// Connect timeout variable
    pub const WEATHER_CONNECT_TIMEOUT_SECS: &str = "WEATHER_CONNECT_TIMEOUT_SECS";
    /// Block spacing variable
    pub const FORECAST_BLOCK_HOURS: &str = "FORECAST_BLOCK_HOURS";
    /// Summary length variable
    pub const MAX_REASONS_IN_SUMMARY: &str = "MAX_REASONS_IN_SUMMARY";

    /// API key, `None` when unset or blank
    #[must_use]
    pub fn openweather_api_key() -> Option<String> {
        env::var(OPENWEATHER_API_KEY)
            .ok()
            .map(|key| key.trim().to_owned())
            .filter(|key| !key.is_empty())
    }

    /// Forecast API base URL from environment or default
    #[must_use]
    pub fn openweather_base_url() -> String {
        env::var(OPENWEATHER_BASE_URL).unwrap_or_else(|_| weather_api::DEFAULT_BASE_URL.into())
    }

    /// Units parameter from environment or default
    #[must_use]
    pub fn openweather_units() -> String {
        env::var(OPENWEATHER_UNITS).unwrap_or_else(|_| weather_api::DEFAULT_UNITS.into())
    }

    /// Log level from environment or default
    #[must_use]
    pub fn log_level() -> String {
        env::var("RUST_LOG").unwrap_or_else(|_| "info".into())
    }

    /// Deployment environment name from environment or default
    #[must_use]
    pub fn environment() -> String {
        env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into())
    }
}
