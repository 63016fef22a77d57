// ABOUTME: Judges one forecast sample against one constraint set
// ABOUTME: First failing check wins and yields a canonical human-readable reason
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fairweather Contributors

use fairweather_core::constants::reasons;
use fairweather_core::models::{Constraints, ForecastSample, TimeOfDay};

/// Verdict for a single sample
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    /// Every applicable check cleared
    Pass,
    /// The first failing check, as a canonical reason
    Fail(String),
}

impl Evaluation {
    /// Whether the sample cleared every check
    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Failure reason, `None` on pass
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Pass => None,
            Self::Fail(reason) => Some(reason),
        }
    }
}

/// Stateless per-sample constraint checker
///
/// Check order: temperature presence, temperature bounds, humidity presence,
/// humidity bounds, rain, then (only when asked) local start time.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstraintEvaluator;

impl ConstraintEvaluator {
    /// Evaluate `sample`; start-time bounds apply only when `enforce_time_of_day`
    #[must_use]
    pub fn evaluate(
        sample: &ForecastSample,
        constraints: &Constraints,
        enforce_time_of_day: bool,
    ) -> Evaluation {
        let failure = Self::check_temperature(sample, constraints)
            .or_else(|| Self::check_humidity(sample, constraints))
            .or_else(|| Self::check_rain(sample, constraints))
            .or_else(|| {
                enforce_time_of_day
                    .then(|| Self::check_start_time(sample, constraints))
                    .flatten()
            });

        failure.map_or(Evaluation::Pass, Evaluation::Fail)
    }

    fn check_temperature(sample: &ForecastSample, constraints: &Constraints) -> Option<String> {
        let Some(temp) = sample.temperature else {
            return Some(reasons::TEMPERATURE_MISSING.to_owned());
        };
        if let Some(min) = constraints.min_temp {
            if temp < min {
                return Some(format!("temperature below minimum ({temp:.0}F < {min:.0}F)"));
            }
        }
        if let Some(max) = constraints.max_temp {
            if temp > max {
                return Some(format!("temperature above maximum ({temp:.0}F > {max:.0}F)"));
            }
        }
        None
    }

    fn check_humidity(sample: &ForecastSample, constraints: &Constraints) -> Option<String> {
        if !constraints.has_humidity_bounds() {
            return None;
        }
        let Some(humidity) = sample.humidity_percent else {
            return Some(reasons::HUMIDITY_MISSING.to_owned());
        };
        if let Some(min) = constraints.min_humidity {
            if humidity < min {
                return Some(format!("humidity below minimum ({humidity}% < {min}%)"));
            }
        }
        if let Some(max) = constraints.max_humidity {
            if humidity > max {
                return Some(format!("humidity above maximum ({humidity}% > {max}%)"));
            }
        }
        None
    }

    fn check_rain(sample: &ForecastSample, constraints: &Constraints) -> Option<String> {
        (constraints.no_rain && sample.rain_amount > 0.0)
            .then(|| reasons::RAIN_EXPECTED.to_owned())
    }

    fn check_start_time(sample: &ForecastSample, constraints: &Constraints) -> Option<String> {
        if !constraints.has_time_of_day_bounds() {
            return None;
        }
        let local = TimeOfDay::from_local_timestamp(sample.timestamp, constraints.timezone_offset);
        // Literal comparison: an earliest bound after the latest bound rejects every start
        if constraints.earliest_start.is_some_and(|earliest| local < earliest) {
            return Some(format!("start before earliest allowed ({local})"));
        }
        if constraints.latest_start.is_some_and(|latest| local > latest) {
            return Some(format!("start after latest allowed ({local})"));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2023-09-01 00:00:00 UTC
    const BASE_TS: i64 = 1_693_526_400;

    fn sample(temp: Option<f64>, humidity: Option<u8>) -> ForecastSample {
        ForecastSample::new(BASE_TS, temp, humidity)
    }

    fn tod(text: &str) -> TimeOfDay {
        text.parse().unwrap()
    }

    fn reason_of(sample: &ForecastSample, constraints: &Constraints, enforce: bool) -> String {
        ConstraintEvaluator::evaluate(sample, constraints, enforce)
            .reason()
            .unwrap_or_default()
            .to_owned()
    }

    #[test]
    fn test_unconstrained_sample_passes() {
        let constraints = Constraints::builder(3).build();
        assert!(ConstraintEvaluator::evaluate(&sample(Some(70.0), None), &constraints, true).is_pass());
    }

    #[test]
    fn test_missing_temperature_fails_even_without_bounds() {
        let constraints = Constraints::builder(3).build();
        assert_eq!(
            reason_of(&sample(None, Some(50)), &constraints, true),
            "temperature missing from forecast"
        );
    }

    #[test]
    fn test_temperature_bounds_round_for_display() {
        let constraints = Constraints::builder(3).min_temp(60.0).max_temp(80.0).build();
        assert_eq!(
            reason_of(&sample(Some(55.4), None), &constraints, true),
            "temperature below minimum (55F < 60F)"
        );
        assert_eq!(
            reason_of(&sample(Some(84.6), None), &constraints, true),
            "temperature above maximum (85F > 80F)"
        );
    }

    #[test]
    fn test_temperature_checked_before_humidity() {
        let constraints = Constraints::builder(3).min_temp(60.0).min_humidity(30).build();
        assert_eq!(
            reason_of(&sample(Some(40.0), None), &constraints, true),
            "temperature below minimum (40F < 60F)"
        );
    }

    #[test]
    fn test_missing_humidity_only_matters_with_bounds() {
        let unbounded = Constraints::builder(3).build();
        assert!(ConstraintEvaluator::evaluate(&sample(Some(70.0), None), &unbounded, true).is_pass());

        let bounded = Constraints::builder(3).max_humidity(80).build();
        assert_eq!(
            reason_of(&sample(Some(70.0), None), &bounded, true),
            "humidity missing from forecast"
        );
    }

    #[test]
    fn test_humidity_bounds() {
        let constraints = Constraints::builder(3).min_humidity(30).max_humidity(70).build();
        assert_eq!(
            reason_of(&sample(Some(70.0), Some(20)), &constraints, true),
            "humidity below minimum (20% < 30%)"
        );
        assert_eq!(
            reason_of(&sample(Some(70.0), Some(90)), &constraints, true),
            "humidity above maximum (90% > 70%)"
        );
    }

    #[test]
    fn test_zero_humidity_is_a_reading_not_an_absence() {
        let constraints = Constraints::builder(3).max_humidity(10).build();
        assert!(ConstraintEvaluator::evaluate(&sample(Some(70.0), Some(0)), &constraints, true).is_pass());
    }

    #[test]
    fn test_rain_only_fails_when_forbidden() {
        let wet = sample(Some(70.0), None).with_rain(0.4);
        let allowed = Constraints::builder(3).build();
        assert!(ConstraintEvaluator::evaluate(&wet, &allowed, true).is_pass());

        let forbidden = Constraints::builder(3).no_rain(true).build();
        assert_eq!(reason_of(&wet, &forbidden, true), "rain expected during window");
    }

    #[test]
    fn test_start_time_uses_local_clock() {
        let constraints = Constraints::builder(3)
            .earliest_start(tod("04:00"))
            .timezone_offset(7200)
            .build();
        assert_eq!(
            reason_of(&sample(Some(70.0), None), &constraints, true),
            "start before earliest allowed (02:00)"
        );

        let constraints = Constraints::builder(3)
            .latest_start(tod("02:00"))
            .timezone_offset(-10_800)
            .build();
        assert_eq!(
            reason_of(&sample(Some(70.0), None), &constraints, true),
            "start after latest allowed (21:00)"
        );
    }

    #[test]
    fn test_start_time_ignored_when_not_enforced() {
        let constraints = Constraints::builder(3).earliest_start(tod("12:00")).build();
        assert!(ConstraintEvaluator::evaluate(&sample(Some(70.0), None), &constraints, false).is_pass());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let constraints = Constraints::builder(3)
            .earliest_start(tod("00:00"))
            .latest_start(tod("00:00"))
            .min_temp(70.0)
            .max_temp(70.0)
            .build();
        assert!(ConstraintEvaluator::evaluate(&sample(Some(70.0), None), &constraints, true).is_pass());
    }

    #[test]
    fn test_inverted_start_range_rejects_every_start() {
        let constraints = Constraints::builder(3)
            .earliest_start(tod("22:00"))
            .latest_start(tod("06:00"))
            .build();
        for hour in 0..24 {
            let late = ForecastSample::new(BASE_TS + hour * 3600, Some(70.0), None);
            assert!(!ConstraintEvaluator::evaluate(&late, &constraints, true).is_pass());
        }
    }
}
