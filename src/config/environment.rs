// ABOUTME: Environment configuration for the forecast client, scanner, and logging
// ABOUTME: Parses environment variables into typed settings with validation and a redacted summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fairweather Contributors

//! Environment-based configuration management

use crate::constants::{blocks, env_config, summaries, timeouts, weather_api};
use crate::scheduling::TimeWindowScanner;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::time::Duration;
use tracing::{info, warn, Level};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages (default)
    #[default]
    Info,
    /// Debug output, including per-scan engine events
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to a `tracing` level
    #[must_use]
    pub const fn to_tracing_level(self) -> Level {
        match self {
            Self::Error => Level::ERROR,
            Self::Warn => Level::WARN,
            Self::Info => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development (default)
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// `OpenWeather` forecast API settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeatherApiConfig {
    /// API key; fetching fails with a missing-key error when absent
    pub api_key: Option<String>,
    /// Base URL, without a trailing `/forecast`
    pub base_url: String,
    /// `units` query parameter
    pub units: String,
    /// Whole-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
}

impl WeatherApiConfig {
    /// Whole-request timeout
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Connect timeout
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl Default for WeatherApiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: weather_api::DEFAULT_BASE_URL.to_owned(),
            units: weather_api::DEFAULT_UNITS.to_owned(),
            request_timeout_secs: timeouts::DEFAULT_REQUEST_TIMEOUT_SECS,
            connect_timeout_secs: timeouts::DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

/// Window scanner settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Expected spacing between forecast samples, in hours
    pub block_hours: i64,
    /// Blockers listed in a no-window summary
    pub max_reasons: usize,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            block_hours: blocks::DEFAULT_BLOCK_HOURS,
            max_reasons: summaries::DEFAULT_MAX_REASONS,
        }
    }
}

impl ScannerConfig {
    /// Scanner configured with these settings
    #[must_use]
    pub const fn scanner(&self) -> TimeWindowScanner {
        TimeWindowScanner::new()
            .with_block_hours(self.block_hours)
            .with_max_reasons(self.max_reasons)
    }
}

/// Complete runtime configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// Log level
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
    /// Forecast API settings
    pub weather: WeatherApiConfig,
    /// Scanner settings
    pub scanner: ScannerConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable cannot be parsed or the
    /// resulting configuration fails [`Self::validate`]
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            log_level: LogLevel::from_str_or_default(&env_config::log_level()),
            environment: Environment::from_str_or_default(&env_config::environment()),
            weather: WeatherApiConfig {
                api_key: env_config::openweather_api_key(),
                base_url: env_config::openweather_base_url(),
                units: env_config::openweather_units(),
                request_timeout_secs: env_var_or(
                    env_config::WEATHER_REQUEST_TIMEOUT_SECS,
                    &timeouts::DEFAULT_REQUEST_TIMEOUT_SECS.to_string(),
                )
                .parse()
                .context("Invalid WEATHER_REQUEST_TIMEOUT_SECS value")?,
                connect_timeout_secs: env_var_or(
                    env_config::WEATHER_CONNECT_TIMEOUT_SECS,
                    &timeouts::DEFAULT_CONNECT_TIMEOUT_SECS.to_string(),
                )
                .parse()
                .context("Invalid WEATHER_CONNECT_TIMEOUT_SECS value")?,
            },
            scanner: ScannerConfig {
                block_hours: env_var_or(
                    env_config::FORECAST_BLOCK_HOURS,
                    &blocks::DEFAULT_BLOCK_HOURS.to_string(),
                )
                .parse()
                .context("Invalid FORECAST_BLOCK_HOURS value")?,
                max_reasons: env_var_or(
                    env_config::MAX_REASONS_IN_SUMMARY,
                    &summaries::DEFAULT_MAX_REASONS.to_string(),
                )
                .parse()
                .context("Invalid MAX_REASONS_IN_SUMMARY value")?,
            },
        };

        config.validate()?;
        if config.weather.api_key.is_none() {
            warn!("OPENWEATHER_API_KEY is not set; live forecast fetches will fail");
        }

        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if block spacing is outside 1 to 24 hours, or if
    /// timeouts or summary length are not positive
    pub fn validate(&self) -> Result<()> {
        if !(1..=blocks::MAX_BLOCK_HOURS).contains(&self.scanner.block_hours) {
            bail!(
                "FORECAST_BLOCK_HOURS must be between 1 and {}",
                blocks::MAX_BLOCK_HOURS
            );
        }
        if self.scanner.max_reasons == 0 {
            bail!("MAX_REASONS_IN_SUMMARY must be greater than zero");
        }
        if self.weather.request_timeout_secs == 0 || self.weather.connect_timeout_secs == 0 {
            bail!("Weather API timeouts must be greater than zero");
        }
        if self.weather.base_url.trim().is_empty() {
            bail!("OPENWEATHER_BASE_URL cannot be empty");
        }
        Ok(())
    }

    /// Human-readable summary with the API key redacted
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Fairweather Configuration:\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - Weather API: {}\n\
             - API Key: {}\n\
             - Units: {}\n\
             - Timeouts: request {}s, connect {}s\n\
             - Forecast Block: {}h\n\
             - Summary Blockers: {}",
            self.environment,
            self.log_level,
            self.weather.base_url,
            if self.weather.api_key.is_some() {
                "Configured"
            } else {
                "Missing"
            },
            self.weather.units,
            self.weather.request_timeout_secs,
            self.weather.connect_timeout_secs,
            self.scanner.block_hours,
            self.scanner.max_reasons,
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scanner_config_builds_matching_scanner() {
        let config = ScannerConfig {
            block_hours: 1,
            max_reasons: 5,
        };
        assert_eq!(config.scanner().block_hours(), 1);
    }

    #[test]
    fn test_validate_rejects_zero_block_hours() {
        let mut config = ServerConfig::default();
        config.scanner.block_hours = 0;
        assert!(config.validate().is_err());
    }
}
