// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging plus forecast sample and OpenWeather payload builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fairweather Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `fairweather`

use fairweather::models::{ForecastSample, TimeOfDay};
use serde_json::{json, Value};
use std::env;
use std::sync::Once;
use tracing::Level;

/// 2023-09-01 00:00:00 UTC
pub const BASE_TS: i64 = 1_693_526_400;

/// One 3-hour forecast block in seconds
pub const BLOCK_SECONDS: i64 = 10_800;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Pleasant dry block `index` blocks after [`BASE_TS`]
pub fn block(index: i64) -> ForecastSample {
    ForecastSample::new(BASE_TS + index * BLOCK_SECONDS, Some(70.0), Some(50))
}

/// `count` consecutive pleasant blocks
pub fn pleasant_forecast(count: i64) -> Vec<ForecastSample> {
    (0..count).map(block).collect()
}

/// Parse a time of day literal
pub fn tod(text: &str) -> TimeOfDay {
    text.parse().unwrap()
}

/// `OpenWeather` forecast response body for `samples`
pub fn openweather_body(samples: &[ForecastSample], timezone_offset: i64) -> String {
    let list: Vec<Value> = samples
        .iter()
        .map(|sample| {
            json!({
                "dt": sample.timestamp,
                "main": {
                    "temp": sample.temperature,
                    "humidity": sample.humidity_percent,
                },
                "rain": { "3h": sample.rain_amount },
            })
        })
        .collect();

    json!({
        "cod": "200",
        "cnt": list.len(),
        "list": list,
        "city": { "name": "Testville", "timezone": timezone_offset },
    })
    .to_string()
}
