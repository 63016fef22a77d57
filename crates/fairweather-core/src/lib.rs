// ABOUTME: Core types and constants for the Fairweather scheduling engine
// ABOUTME: Foundation crate with error handling, data models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fairweather Contributors

#![deny(unsafe_code)]

//! # Fairweather Core
//!
//! Foundation crate providing shared types and constants for the Fairweather
//! weather-window scheduler. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `WeatherError`
//! - **constants**: Forecast block geometry and canonical failure reasons
//! - **models**: Forecast samples, scheduling constraints, and search results

/// Unified error handling system with standard error codes and HTTP statuses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`ForecastSample`, `Constraints`, `Window`, ...)
pub mod models;
