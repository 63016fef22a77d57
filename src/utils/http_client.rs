// ABOUTME: Shared HTTP client construction with timeout configuration
// ABOUTME: Builds reqwest clients for the forecast API from weather settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fairweather Contributors

use crate::config::WeatherApiConfig;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Create a new HTTP client with custom timeout settings
///
/// Falls back to a default client if the builder fails.
#[must_use]
pub fn create_client_with_timeout(timeout: Duration, connect_timeout: Duration) -> Client {
    ClientBuilder::new()
        .timeout(timeout)
        .connect_timeout(connect_timeout)
        .user_agent(concat!("fairweather/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Client configured for the forecast API settings
#[must_use]
pub fn weather_client(config: &WeatherApiConfig) -> Client {
    create_client_with_timeout(config.request_timeout(), config.connect_timeout())
}
