// ABOUTME: Error handling re-exports from the fairweather-core crate
// ABOUTME: Keeps crate::errors import paths stable for the engine's outer layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fairweather Contributors

//! # Unified Error Handling
//!
//! [`AppError`] carries an [`ErrorCode`] with its HTTP status; forecast
//! failures are classified by [`WeatherError`] and convert into `AppError`.

pub use fairweather_core::errors::*;
