// ABOUTME: Counts failure reasons across a scan and ranks them for summaries
// ABOUTME: Ordered multiset: count map plus first-seen order for deterministic ties
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fairweather Contributors

use fairweather_core::constants::summaries::NO_WINDOWS_MATCHED;
use fairweather_core::models::FailureReason;
use std::collections::HashMap;

/// Reason counter built fresh for every scan
///
/// `entries` holds reasons in first-seen order; `index` maps a reason to its
/// slot. Ranking sorts by descending count with a stable sort, so equal counts
/// keep first-seen order.
#[derive(Debug, Clone, Default)]
pub struct FailureAggregator {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl FailureAggregator {
    /// Empty aggregator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `reason`
    pub fn record(&mut self, reason: &str) {
        if let Some(&slot) = self.index.get(reason) {
            self.entries[slot].1 += 1;
        } else {
            self.index.insert(reason.to_owned(), self.entries.len());
            self.entries.push((reason.to_owned(), 1));
        }
    }

    /// Whether nothing has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total occurrences across all reasons
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Distinct reasons recorded
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    /// Every reason, by descending count then first-seen order
    #[must_use]
    pub fn details(&self) -> Vec<FailureReason> {
        self.ranked()
            .into_iter()
            .map(|(text, count)| FailureReason::new(text, count))
            .collect()
    }

    /// Summary of the top `max_reasons` blockers, `None` when nothing was recorded
    #[must_use]
    pub fn summarize(&self, max_reasons: usize) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        let blockers = self
            .ranked()
            .into_iter()
            .take(max_reasons)
            .map(|(text, count)| format!("{text} (x{count})"))
            .collect::<Vec<_>>()
            .join(", ");
        Some(format!("{NO_WINDOWS_MATCHED} Common blockers: {blockers}."))
    }

    /// Like [`Self::summarize`], with the generic fallback when nothing was recorded
    #[must_use]
    pub fn summary_or_fallback(&self, max_reasons: usize) -> String {
        self.summarize(max_reasons)
            .unwrap_or_else(|| NO_WINDOWS_MATCHED.to_owned())
    }

    fn ranked(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .entries
            .iter()
            .map(|(text, count)| (text.as_str(), *count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}
