// ABOUTME: Window scanner that walks forecast samples and emits qualifying runs
// ABOUTME: Detects spacing gaps, enforces start-time bounds on run starts, counts failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fairweather Contributors

use super::aggregator::FailureAggregator;
use super::evaluator::{ConstraintEvaluator, Evaluation};
use super::formatter::WindowFormatter;
use fairweather_core::constants::blocks::{DEFAULT_BLOCK_HOURS, SECONDS_PER_HOUR};
use fairweather_core::constants::reasons;
use fairweather_core::constants::summaries::{
    DEFAULT_MAX_REASONS, HORIZON_TOO_SHORT, NON_POSITIVE_DURATION, NO_FORECAST_DATA,
};
use fairweather_core::models::{Constraints, ForecastSample, Window, WindowSearchResult};
use tracing::debug;

/// How a single candidate run ended
enum RunOutcome {
    /// Duration reached; the window ends after the sample at `next - 1`
    Emitted { window: Window, next: usize },
    /// A gap or failing sample stopped the run at `next`
    Failed { next: usize },
    /// Samples ran out before the duration accumulated
    Exhausted { next: usize },
}

/// Finds contiguous forecast runs that satisfy a constraint set
///
/// The scanner is pure: the same samples and constraints always yield the
/// same result. One maximal window is reported per qualifying run, after
/// which scanning resumes past its last sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindowScanner {
    block_hours: i64,
    max_reasons: usize,
}

impl Default for TimeWindowScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeWindowScanner {
    /// Scanner for 3-hour blocks with the default summary length
    #[must_use]
    pub const fn new() -> Self {
        Self {
            block_hours: DEFAULT_BLOCK_HOURS,
            max_reasons: DEFAULT_MAX_REASONS,
        }
    }

    /// Expected spacing between consecutive samples, in hours
    #[must_use]
    pub const fn with_block_hours(mut self, block_hours: i64) -> Self {
        self.block_hours = block_hours;
        self
    }

    /// Number of blockers listed in a no-window summary
    #[must_use]
    pub const fn with_max_reasons(mut self, max_reasons: usize) -> Self {
        self.max_reasons = max_reasons;
        self
    }

    /// Configured block length in hours
    #[must_use]
    pub const fn block_hours(&self) -> i64 {
        self.block_hours
    }

    const fn block_seconds(&self) -> i64 {
        self.block_hours.saturating_mul(SECONDS_PER_HOUR)
    }

    /// Scan `samples` (ascending by timestamp) for windows meeting `constraints`
    #[must_use]
    pub fn scan(&self, samples: &[ForecastSample], constraints: &Constraints) -> WindowSearchResult {
        if let Some(summary) = self.precheck(samples, constraints) {
            debug!(samples = samples.len(), summary, "window scan short-circuited");
            return WindowSearchResult::empty_with_summary(summary);
        }

        let mut aggregator = FailureAggregator::new();
        let mut windows = Vec::new();
        let mut cursor = 0;

        while cursor < samples.len() {
            let next = match self.walk_run(samples, cursor, constraints, &mut aggregator) {
                RunOutcome::Emitted { window, next } => {
                    windows.push(window);
                    next
                }
                RunOutcome::Failed { next } => next,
                RunOutcome::Exhausted { next } => {
                    aggregator.record(reasons::HORIZON_ENDED);
                    next
                }
            };
            cursor = if next > cursor { next } else { cursor + 1 };
        }

        debug!(
            samples = samples.len(),
            windows = windows.len(),
            distinct_reasons = aggregator.distinct(),
            total_failures = aggregator.total(),
            "window scan complete"
        );

        let reason_summary = windows
            .is_empty()
            .then(|| aggregator.summary_or_fallback(self.max_reasons));

        WindowSearchResult {
            windows,
            reason_summary,
            reason_details: aggregator.details(),
        }
    }

    fn precheck(&self, samples: &[ForecastSample], constraints: &Constraints) -> Option<&'static str> {
        if samples.is_empty() {
            return Some(NO_FORECAST_DATA);
        }
        if constraints.duration_hours <= 0 {
            return Some(NON_POSITIVE_DURATION);
        }
        let sample_count = i64::try_from(samples.len()).unwrap_or(i64::MAX);
        let available_hours = self.block_hours.saturating_mul(sample_count);
        (constraints.duration_hours > available_hours).then_some(HORIZON_TOO_SHORT)
    }

    fn walk_run(
        &self,
        samples: &[ForecastSample],
        start: usize,
        constraints: &Constraints,
        aggregator: &mut FailureAggregator,
    ) -> RunOutcome {
        let start_ts = samples[start].timestamp;
        let mut accumulated = 0;
        let mut last_seen = start_ts;
        let mut index = start;

        while let Some(sample) = samples.get(index) {
            let step = sample.timestamp.checked_sub(last_seen);
            if index > start && step != Some(self.block_seconds()) {
                aggregator.record(reasons::DATA_GAP);
                return RunOutcome::Failed { next: index };
            }

            if let Evaluation::Fail(reason) =
                ConstraintEvaluator::evaluate(sample, constraints, index == start)
            {
                aggregator.record(&reason);
                return RunOutcome::Failed { next: index };
            }

            accumulated = self.block_hours.saturating_add(accumulated);
            last_seen = sample.timestamp;
            index += 1;

            if accumulated >= constraints.duration_hours {
                // A block ending past the representable epoch range cannot close a window
                let Some(end_ts) = last_seen.checked_add(self.block_seconds()) else {
                    aggregator.record(reasons::HORIZON_ENDED);
                    return RunOutcome::Failed { next: index };
                };
                let window = Window {
                    start_ts,
                    end_ts,
                    display: WindowFormatter::format(start_ts, end_ts, constraints.timezone_offset),
                    duration: WindowFormatter::label(start_ts, end_ts),
                };
                return RunOutcome::Emitted { window, next: index };
            }
        }

        RunOutcome::Exhausted { next: index }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairweather_core::models::TimeOfDay;

    // 2023-09-01 00:00:00 UTC
    const BASE_TS: i64 = 1_693_526_400;
    const BLOCK: i64 = 10_800;

    fn block(index: i64) -> ForecastSample {
        ForecastSample::new(BASE_TS + index * BLOCK, Some(70.0), Some(50))
    }

    fn blocks(count: i64) -> Vec<ForecastSample> {
        (0..count).map(block).collect()
    }

    fn tod(text: &str) -> TimeOfDay {
        text.parse().unwrap()
    }

    #[test]
    fn test_empty_forecast_short_circuits() {
        let result = TimeWindowScanner::new().scan(&[], &Constraints::builder(3).build());
        assert!(result.windows.is_empty());
        assert!(result.reason_details.is_empty());
        assert_eq!(
            result.reason_summary.as_deref(),
            Some("No forecast data was returned for this ZIP code.")
        );
    }

    #[test]
    fn test_non_positive_duration_short_circuits() {
        for duration in [0, -3] {
            let result = TimeWindowScanner::new().scan(&blocks(4), &Constraints::builder(duration).build());
            assert!(result.windows.is_empty());
            assert_eq!(
                result.reason_summary.as_deref(),
                Some("Duration must be greater than zero.")
            );
        }
    }

    #[test]
    fn test_duration_beyond_horizon_short_circuits() {
        let result = TimeWindowScanner::new().scan(&blocks(2), &Constraints::builder(10).build());
        assert!(result.windows.is_empty());
        assert!(result.reason_details.is_empty());
        assert_eq!(
            result.reason_summary.as_deref(),
            Some("Forecast horizon is shorter than the required task duration.")
        );
    }

    #[test]
    fn test_fully_satisfying_sequence_emits_from_first_sample() {
        let samples = blocks(8);
        let result = TimeWindowScanner::new().scan(&samples, &Constraints::builder(6).build());
        assert_eq!(result.windows.len(), 4);
        assert_eq!(result.windows[0].start_ts, BASE_TS);
        assert_eq!(result.windows[0].end_ts, BASE_TS + 2 * BLOCK);
        assert_eq!(result.windows[0].duration, "6h");
        assert!(result.reason_summary.is_none());
        assert!(result.reason_details.is_empty());
    }

    #[test]
    fn test_duration_rounds_up_to_whole_blocks() {
        let result = TimeWindowScanner::new().scan(&blocks(2), &Constraints::builder(4).build());
        assert_eq!(result.windows.len(), 1);
        assert_eq!(result.windows[0].duration, "6h");
    }

    #[test]
    fn test_windows_never_overlap_and_ascend() {
        let mut samples = blocks(12);
        samples[5] = samples[5].with_rain(2.0);
        let constraints = Constraints::builder(6).no_rain(true).build();
        let result = TimeWindowScanner::new().scan(&samples, &constraints);
        assert!(result.windows.len() >= 2);
        for pair in result.windows.windows(2) {
            assert!(pair[0].start_ts < pair[1].start_ts);
            assert!(!pair[0].overlaps(&pair[1]));
        }
    }

    #[test]
    fn test_scan_is_pure() {
        let mut samples = blocks(6);
        samples[2] = samples[2].with_rain(1.0);
        let constraints = Constraints::builder(6).no_rain(true).build();
        let scanner = TimeWindowScanner::new();
        assert_eq!(scanner.scan(&samples, &constraints), scanner.scan(&samples, &constraints));
    }

    #[test]
    fn test_gap_inside_run_breaks_accumulation() {
        let mut samples = blocks(4);
        // Shift the last two samples one hour later
        samples[2].timestamp += SECONDS_PER_HOUR;
        samples[3].timestamp += SECONDS_PER_HOUR;
        let result = TimeWindowScanner::new().scan(&samples, &Constraints::builder(9).build());
        assert!(result.windows.is_empty());
        assert_eq!(result.count_for("forecast data gaps prevent continuous window"), 1);
        assert_eq!(
            result.count_for("forecast horizon ended before reaching required duration"),
            1
        );
    }

    #[test]
    fn test_run_after_gap_restarts_independently() {
        let mut samples = blocks(4);
        samples[2].timestamp += SECONDS_PER_HOUR;
        samples[3].timestamp += SECONDS_PER_HOUR;
        let result = TimeWindowScanner::new().scan(&samples, &Constraints::builder(6).build());
        assert_eq!(result.windows.len(), 2);
        assert_eq!(result.windows[1].start_ts, samples[2].timestamp);
        assert!(result.reason_details.is_empty());
    }

    #[test]
    fn test_time_of_day_only_checked_on_run_start() {
        // Local start 00:00; the second block (03:00) violates the bound but is mid-run
        let constraints = Constraints::builder(6).latest_start(tod("01:00")).build();
        let result = TimeWindowScanner::new().scan(&blocks(2), &constraints);
        assert_eq!(result.windows.len(), 1);
        assert_eq!(result.windows[0].start_ts, BASE_TS);
        assert!(result.reason_details.is_empty());
    }

    #[test]
    fn test_timezone_and_earliest_bound() {
        let samples = vec![
            ForecastSample::new(BASE_TS, Some(70.0), None),
            ForecastSample::new(BASE_TS + BLOCK, Some(72.0), None),
        ];
        let constraints = Constraints::builder(3)
            .no_rain(true)
            .earliest_start(tod("04:00"))
            .timezone_offset(7200)
            .build();
        let result = TimeWindowScanner::new().scan(&samples, &constraints);

        assert_eq!(result.windows.len(), 1);
        assert_eq!(result.windows[0].start_ts, BASE_TS + BLOCK);
        assert_eq!(result.windows[0].display, "9/1 5 AM - 8 AM");
        assert_eq!(result.count_for("start before earliest allowed (02:00)"), 1);
        assert!(result.reason_summary.is_none());
    }

    #[test]
    fn test_latest_bound_with_negative_offset() {
        let samples = vec![
            ForecastSample::new(BASE_TS, Some(70.0), None),
            ForecastSample::new(BASE_TS + BLOCK, Some(70.0), None),
        ];
        let constraints = Constraints::builder(3)
            .latest_start(tod("02:00"))
            .timezone_offset(-10_800)
            .build();
        let result = TimeWindowScanner::new().scan(&samples, &constraints);

        assert_eq!(result.windows.len(), 1);
        assert_eq!(result.windows[0].start_ts, BASE_TS + BLOCK);
        assert_eq!(result.windows[0].display, "9/1 12 AM - 3 AM");
        assert_eq!(result.count_for("start after latest allowed (21:00)"), 1);
    }

    #[test]
    fn test_rain_after_duration_still_emits() {
        let mut samples = blocks(3);
        samples[2] = samples[2].with_rain(1.0);
        let constraints = Constraints::builder(6).no_rain(true).build();
        let result = TimeWindowScanner::new().scan(&samples, &constraints);

        assert_eq!(result.windows.len(), 1);
        assert_eq!(result.windows[0].start_ts, BASE_TS);
        assert_eq!(result.windows[0].duration, "6h");
        assert!(result.reason_summary.is_none());
        assert_eq!(result.count_for("rain expected during window"), 1);
    }

    #[test]
    fn test_gap_after_duration_ends_horizon() {
        let mut samples = blocks(3);
        samples[2].timestamp = samples[1].timestamp + 2 * SECONDS_PER_HOUR;
        let result = TimeWindowScanner::new().scan(&samples, &Constraints::builder(6).build());

        assert_eq!(result.windows.len(), 1);
        assert_eq!(result.windows[0].start_ts, BASE_TS);
        assert!(result.reason_summary.is_none());
        assert_eq!(
            result.count_for("forecast horizon ended before reaching required duration"),
            1
        );
    }

    #[test]
    fn test_summary_ranks_blockers_when_nothing_qualifies() {
        let samples: Vec<ForecastSample> = (0..4)
            .map(|i| ForecastSample::new(BASE_TS + i * BLOCK, Some(40.0), Some(50)))
            .collect();
        let constraints = Constraints::builder(3).min_temp(60.0).build();
        let result = TimeWindowScanner::new().scan(&samples, &constraints);

        assert!(result.windows.is_empty());
        assert_eq!(
            result.reason_summary.as_deref(),
            Some("No windows matched all constraints. Common blockers: temperature below minimum (40F < 60F) (x4).")
        );
        assert_eq!(result.reason_details.len(), 1);
    }

    #[test]
    fn test_inverted_start_range_yields_no_windows() {
        let constraints = Constraints::builder(3)
            .earliest_start(tod("22:00"))
            .latest_start(tod("06:00"))
            .build();
        let result = TimeWindowScanner::new().scan(&blocks(8), &constraints);
        assert!(result.windows.is_empty());
        assert!(result.reason_summary.is_some());
    }

    #[test]
    fn test_custom_block_spacing() {
        let samples: Vec<ForecastSample> = (0..6)
            .map(|i| ForecastSample::new(BASE_TS + i * SECONDS_PER_HOUR, Some(70.0), None))
            .collect();
        let scanner = TimeWindowScanner::new().with_block_hours(1);
        let result = scanner.scan(&samples, &Constraints::builder(3).build());
        assert_eq!(result.windows.len(), 2);
        assert_eq!(result.windows[0].duration, "3h");

        // Under 3-hour spacing every hourly step is a gap
        let result = TimeWindowScanner::new().scan(&samples, &Constraints::builder(6).build());
        assert!(result.windows.is_empty());
        assert_eq!(result.count_for("forecast data gaps prevent continuous window"), 5);
        assert_eq!(
            result.count_for("forecast horizon ended before reaching required duration"),
            1
        );
    }

    #[test]
    fn test_max_reasons_limits_summary() {
        let samples = vec![
            ForecastSample::new(BASE_TS, None, None),
            ForecastSample::new(BASE_TS + BLOCK, Some(40.0), None),
        ];
        let constraints = Constraints::builder(3).min_temp(60.0).build();
        let result = TimeWindowScanner::new()
            .with_max_reasons(1)
            .scan(&samples, &constraints);
        assert_eq!(
            result.reason_summary.as_deref(),
            Some("No windows matched all constraints. Common blockers: temperature missing from forecast (x1).")
        );
        assert_eq!(result.reason_details.len(), 2);
    }

    #[test]
    fn test_block_ending_past_epoch_range_is_not_emitted() {
        let samples = [ForecastSample::new(i64::MAX - 100, Some(70.0), None)];
        let result = TimeWindowScanner::new().scan(&samples, &Constraints::builder(3).build());

        assert!(result.windows.is_empty());
        assert_eq!(result.count_for(reasons::HORIZON_ENDED), 1);
        assert!(result.reason_summary.is_some());
    }

    #[test]
    fn test_spacing_beyond_i64_range_counts_as_gap() {
        let samples = [
            ForecastSample::new(i64::MIN + 5, Some(70.0), None),
            ForecastSample::new(i64::MAX - 5, Some(70.0), None),
        ];
        let result = TimeWindowScanner::new().scan(&samples, &Constraints::builder(6).build());

        assert!(result.windows.is_empty());
        assert_eq!(result.count_for(reasons::DATA_GAP), 1);
        assert_eq!(result.count_for(reasons::HORIZON_ENDED), 1);
    }
}
