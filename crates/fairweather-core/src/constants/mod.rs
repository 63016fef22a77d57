// ABOUTME: Application constants for forecast geometry and window-search messages
// ABOUTME: Centralizes block duration, canonical failure reasons, and summary texts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fairweather Contributors

//! Constants shared by the engine, the forecast supplier, and the response layer.

/// Forecast block geometry
pub mod blocks {
    /// Nominal length of one forecast block in hours
    pub const DEFAULT_BLOCK_HOURS: i64 = 3;

    /// Largest configurable block length in hours
    pub const MAX_BLOCK_HOURS: i64 = 24;

    /// Seconds in one hour
    pub const SECONDS_PER_HOUR: i64 = 3600;

    /// Seconds in one day
    pub const SECONDS_PER_DAY: i64 = 86_400;
}

/// Canonical failure reasons recorded by the scanner itself
///
/// Constraint-specific reasons carry values and are built by the evaluator.
pub mod reasons {
    /// Consecutive samples are not exactly one block apart
    pub const DATA_GAP: &str = "forecast data gaps prevent continuous window";

    /// The sequence ran out before the requested duration accumulated
    pub const HORIZON_ENDED: &str = "forecast horizon ended before reaching required duration";

    /// The sample has no temperature reading
    pub const TEMPERATURE_MISSING: &str = "temperature missing from forecast";

    /// A humidity bound is active but the sample has no reading
    pub const HUMIDITY_MISSING: &str = "humidity missing from forecast";

    /// Rain is forecast while the task forbids it
    pub const RAIN_EXPECTED: &str = "rain expected during window";
}

/// Summary texts placed in `WindowSearchResult::reason_summary`
pub mod summaries {
    /// No samples were supplied
    pub const NO_FORECAST_DATA: &str = "No forecast data was returned for this ZIP code.";

    /// Requested duration is zero or negative
    pub const NON_POSITIVE_DURATION: &str = "Duration must be greater than zero.";

    /// Requested duration exceeds what the whole forecast covers
    pub const HORIZON_TOO_SHORT: &str =
        "Forecast horizon is shorter than the required task duration.";

    /// Prefix of every scan summary, also used alone when nothing was recorded
    pub const NO_WINDOWS_MATCHED: &str = "No windows matched all constraints.";

    /// Default number of blockers listed in a summary
    pub const DEFAULT_MAX_REASONS: usize = 3;
}
