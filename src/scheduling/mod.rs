// ABOUTME: Weather-window search engine over already-fetched forecast samples
// ABOUTME: Evaluator, failure aggregation, display formatting, and the window scanner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fairweather Contributors

//! # Scheduling Engine
//!
//! Finds contiguous runs of forecast samples that jointly satisfy a task's
//! temperature, humidity, rain, duration and start-time constraints, and
//! explains with counted reasons why regions failed.
//!
//! The engine is pure and synchronous. It never fetches data and never
//! returns an error: soft failures become recorded reasons in the result.

/// Counted failure reasons and summaries
pub mod aggregator;
/// Per-sample constraint checks
pub mod evaluator;
/// Window display strings and duration labels
pub mod formatter;
/// Run-walking window scanner
pub mod scanner;

pub use aggregator::FailureAggregator;
pub use evaluator::{ConstraintEvaluator, Evaluation};
pub use formatter::WindowFormatter;
pub use scanner::TimeWindowScanner;

use fairweather_core::models::{Constraints, ForecastSample, WindowSearchResult};

/// Scan with the default 3-hour block spacing and summary length
#[must_use]
pub fn find_windows(samples: &[ForecastSample], constraints: &Constraints) -> WindowSearchResult {
    TimeWindowScanner::default().scan(samples, constraints)
}
