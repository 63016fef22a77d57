// ABOUTME: Window search result models: emitted windows and counted failure reasons
// ABOUTME: Serialized in the shape consumed by the suggestion response layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fairweather Contributors

use serde::{Deserialize, Serialize};

/// A maximal run of samples satisfying every constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    /// First block start (epoch seconds)
    pub start_ts: i64,
    /// End of the last block (epoch seconds, exclusive)
    pub end_ts: i64,
    /// Localized range, e.g. `9/1 5 AM - 8 AM`
    pub display: String,
    /// Span label, e.g. `6h`
    pub duration: String,
}

impl Window {
    /// Whether two windows share any instant of `[start_ts, end_ts)`
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.start_ts < other.end_ts && other.start_ts < self.end_ts
    }
}

/// One canonical reason and how often it was observed during a scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureReason {
    /// Canonical reason text
    #[serde(rename = "reason")]
    pub text: String,
    /// Occurrences across the whole scan
    pub count: usize,
}

impl FailureReason {
    /// Pair a reason with its count
    pub fn new(text: impl Into<String>, count: usize) -> Self {
        Self {
            text: text.into(),
            count,
        }
    }
}

/// Outcome of one window search
///
/// `reason_summary` is present only when `windows` is empty; `reason_details`
/// lists every recorded failure whether or not a window was found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSearchResult {
    /// Emitted windows, ascending by `start_ts`
    pub windows: Vec<Window>,
    /// Human-readable explanation when nothing qualified
    pub reason_summary: Option<String>,
    /// All failure reasons, by descending count then first-seen order
    pub reason_details: Vec<FailureReason>,
}

impl WindowSearchResult {
    /// Result that short-circuited before scanning
    pub fn empty_with_summary(summary: impl Into<String>) -> Self {
        Self {
            windows: Vec::new(),
            reason_summary: Some(summary.into()),
            reason_details: Vec::new(),
        }
    }

    /// Earliest emitted window, if any
    #[must_use]
    pub fn first_window(&self) -> Option<&Window> {
        self.windows.first()
    }

    /// Count recorded for `reason`, zero when never seen
    #[must_use]
    pub fn count_for(&self, reason: &str) -> usize {
        self.reason_details
            .iter()
            .find(|detail| detail.text == reason)
            .map_or(0, |detail| detail.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_reason_serializes_as_reason() {
        let json = serde_json::to_value(FailureReason::new("rain expected during window", 2)).unwrap();
        assert_eq!(json["reason"], "rain expected during window");
        assert_eq!(json["count"], 2);
    }

    #[test]
    fn test_window_overlap_is_half_open() {
        let first = Window {
            start_ts: 0,
            end_ts: 10_800,
            display: String::new(),
            duration: "3h".into(),
        };
        let adjacent = Window {
            start_ts: 10_800,
            end_ts: 21_600,
            ..first.clone()
        };
        assert!(!first.overlaps(&adjacent));
        assert!(first.overlaps(&first));
    }
}
