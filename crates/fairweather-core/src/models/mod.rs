// ABOUTME: Core data models for forecast samples, scheduling constraints, and search results
// ABOUTME: Re-exports ForecastSample, Constraints, TimeOfDay, Window and result types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fairweather Contributors

//! # Data Models
//!
//! ## Design Principles
//!
//! - **Explicit absence**: optional readings and bounds are `Option`, never sentinels
//! - **Validated once**: `TimeOfDay` is parsed at configuration-build time
//! - **Serializable**: all results serialize to the JSON shape the response layer emits

mod constraints;
mod forecast;
mod window;

pub use constraints::{Constraints, ConstraintsBuilder, TimeOfDay, TimeOfDayParseError};
pub use forecast::{Forecast, ForecastSample};
pub use window::{FailureReason, Window, WindowSearchResult};
