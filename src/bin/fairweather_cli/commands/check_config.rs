// ABOUTME: check-config command for fairweather-cli
// ABOUTME: Loads the environment configuration and prints its redacted summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fairweather Contributors

use anyhow::Result;
use fairweather::config::ServerConfig;

/// Print the effective configuration
pub fn run() -> Result<()> {
    let config = ServerConfig::from_env()?;
    println!("{}", config.summary());
    if config.weather.api_key.is_none() {
        println!("\nSet OPENWEATHER_API_KEY to fetch live forecasts, or use --forecast-file.");
    }
    Ok(())
}
