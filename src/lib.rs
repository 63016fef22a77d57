// ABOUTME: Main library entry point for the Fairweather weather-window scheduler
// ABOUTME: Window-finding engine plus forecast fetching, task validation, and suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fairweather Contributors

#![deny(unsafe_code)]

//! # Fairweather
//!
//! Finds stretches of forecast weather suitable for an outdoor task. Given a
//! 3-hour block forecast and a task's temperature, humidity, rain, duration
//! and start-time constraints, the engine reports every qualifying window and
//! explains with counted reasons why other stretches failed.
//!
//! ## Architecture
//!
//! - **Scheduling**: the pure window-finding engine
//! - **Weather**: forecast providers, including the `OpenWeather` client
//! - **Tasks**: request validation and the suggestion service
//! - **Config**: environment-driven configuration
//! - **Logging**: `tracing` subscriber setup
//!
//! ## Example Usage
//!
//! ```rust
//! use fairweather::scheduling::find_windows;
//! use fairweather_core::models::{Constraints, ForecastSample};
//!
//! let samples: Vec<ForecastSample> = (0..4)
//!     .map(|i| ForecastSample::new(1_693_526_400 + i * 10_800, Some(68.0), Some(40)))
//!     .collect();
//! let constraints = Constraints::builder(6).min_temp(60.0).no_rain(true).build();
//!
//! let result = find_windows(&samples, &constraints);
//! assert_eq!(result.windows.len(), 2);
//! assert!(result.reason_summary.is_none());
//! ```

/// Configuration management
pub mod config;

/// Application constants and configuration values
pub mod constants;

/// Unified error handling re-exported from `fairweather-core`
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Forecast data models re-exported from `fairweather-core`
pub mod models {
    pub use fairweather_core::models::*;
}

/// Weather-window search engine
pub mod scheduling;

/// Task requests and suggestions
pub mod tasks;

/// Shared utilities
pub mod utils;

/// Forecast providers
pub mod weather;
