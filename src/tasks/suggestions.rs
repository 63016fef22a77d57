// ABOUTME: Suggestion service that fetches a forecast, scans it, and shapes the response
// ABOUTME: Picks the first window's start as the task's scheduled time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fairweather Contributors

use super::request::ValidatedTask;
use crate::errors::{AppError, AppResult};
use crate::scheduling::TimeWindowScanner;
use crate::weather::ForecastProvider;
use chrono::{DateTime, Utc};
use fairweather_core::models::{FailureReason, Window, WindowSearchResult};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Response for one task: candidate windows and why others failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Emitted windows, earliest first
    pub possible_windows: Vec<Window>,
    /// Explanation when no window qualified
    pub reason_summary: Option<String>,
    /// Every counted failure reason
    pub reason_details: Vec<FailureReason>,
    /// Start of the first window, if any
    pub scheduled_time: Option<DateTime<Utc>>,
}

impl From<WindowSearchResult> for Suggestion {
    fn from(result: WindowSearchResult) -> Self {
        let scheduled_time = result
            .first_window()
            .and_then(|window| DateTime::<Utc>::from_timestamp(window.start_ts, 0));
        Self {
            possible_windows: result.windows,
            reason_summary: result.reason_summary,
            reason_details: result.reason_details,
            scheduled_time,
        }
    }
}

/// Fetches forecasts through `P` and scans them for a task's windows
#[derive(Debug, Clone)]
pub struct SuggestionService<P> {
    provider: P,
    scanner: TimeWindowScanner,
}

impl<P: ForecastProvider> SuggestionService<P> {
    /// Service with the default scanner
    #[must_use]
    pub const fn new(provider: P) -> Self {
        Self {
            provider,
            scanner: TimeWindowScanner::new(),
        }
    }

    /// Replace the scanner (block spacing, summary length)
    #[must_use]
    pub const fn with_scanner(mut self, scanner: TimeWindowScanner) -> Self {
        self.scanner = scanner;
        self
    }

    /// Suggest windows for a validated task
    ///
    /// # Errors
    ///
    /// Returns an `AppError` converted from the provider's `WeatherError`
    /// when no forecast can be fetched
    pub async fn suggest(&self, task: &ValidatedTask) -> AppResult<Suggestion> {
        let forecast = self
            .provider
            .fetch_forecast(&task.location)
            .await
            .map_err(|e| {
                warn!(
                    provider = self.provider.name(),
                    location = %task.location,
                    retry = ?e.retry_advice(),
                    error = %e,
                    "Forecast fetch failed"
                );
                AppError::from(e)
            })?;

        let constraints = task.constraints(forecast.timezone_offset);
        let result = self.scanner.scan(&forecast.samples, &constraints);

        info!(
            task = %task.name,
            provider = self.provider.name(),
            samples = forecast.samples.len(),
            windows = result.windows.len(),
            "Window search complete"
        );

        Ok(Suggestion::from(result))
    }
}
