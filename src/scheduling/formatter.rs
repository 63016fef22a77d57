// ABOUTME: Renders window endpoints as a compact local-time range and an hour label
// ABOUTME: 12-hour clock, end date omitted when both ends share a local calendar day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fairweather Contributors

use chrono::{DateTime, Datelike, Timelike, Utc};
use fairweather_core::constants::blocks::SECONDS_PER_HOUR;

/// Local calendar position of one endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LocalStamp {
    month: u32,
    day: u32,
    hour: u32,
}

impl LocalStamp {
    fn at(timestamp: i64, offset_seconds: i64) -> Option<Self> {
        let local = DateTime::<Utc>::from_timestamp(timestamp.checked_add(offset_seconds)?, 0)?;
        Some(Self {
            month: local.month(),
            day: local.day(),
            hour: local.hour(),
        })
    }

    const fn same_day(self, other: Self) -> bool {
        self.month == other.month && self.day == other.day
    }

    fn date(self) -> String {
        format!("{}/{}", self.month, self.day)
    }

    fn clock(self) -> String {
        let hour = match self.hour % 12 {
            0 => 12,
            h => h,
        };
        let meridiem = if self.hour < 12 { "AM" } else { "PM" };
        format!("{hour} {meridiem}")
    }
}

/// Display helpers for emitted windows
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowFormatter;

impl WindowFormatter {
    /// `M/D H AM - H PM`, or `M/D H AM - M/D H PM` across local days
    ///
    /// Timestamps chrono cannot represent fall back to their raw epoch values.
    #[must_use]
    pub fn format(start_ts: i64, end_ts: i64, timezone_offset: i64) -> String {
        match (
            LocalStamp::at(start_ts, timezone_offset),
            LocalStamp::at(end_ts, timezone_offset),
        ) {
            (Some(start), Some(end)) if start.same_day(end) => {
                format!("{} {} - {}", start.date(), start.clock(), end.clock())
            }
            (Some(start), Some(end)) => format!(
                "{} {} - {} {}",
                start.date(),
                start.clock(),
                end.date(),
                end.clock()
            ),
            _ => format!("{start_ts} - {end_ts}"),
        }
    }

    /// Whole hours spanned, e.g. `6h`
    #[must_use]
    pub fn label(start_ts: i64, end_ts: i64) -> String {
        format!("{}h", end_ts.saturating_sub(start_ts) / SECONDS_PER_HOUR)
    }
}
