//! Processing statistics tracking.
//!
//! Counts how many input lines were grouped and why the rest were skipped.

use std::collections::HashMap;
use strum::IntoEnumIterator;

use super::types::SkipReason;

/// Per-run line counters.
///
/// Every `SkipReason` is initialized to zero on creation so that lookups never
/// miss. The pipeline is sequential, so plain counters are enough.
#[derive(Debug)]
pub struct ProcessingStats {
    lines_read: usize,
    grouped: usize,
    skipped: HashMap<SkipReason, usize>,
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessingStats {
    pub fn new() -> Self {
        let mut skipped = HashMap::new();
        for reason in SkipReason::iter() {
            skipped.insert(reason, 0);
        }

        ProcessingStats {
            lines_read: 0,
            grouped: 0,
            skipped,
        }
    }

    /// Records one candidate line taken from an input source.
    pub fn record_line(&mut self) {
        self.lines_read += 1;
    }

    /// Records a line placed in a group.
    pub fn record_grouped(&mut self) {
        self.grouped += 1;
    }

    /// Records a skipped line.
    pub fn increment_skip(&mut self, reason: SkipReason) {
        *self.skipped.entry(reason).or_insert(0) += 1;
    }

    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    pub fn grouped(&self) -> usize {
        self.grouped
    }

    /// Get the count for a skip reason.
    pub fn get_skip_count(&self, reason: SkipReason) -> usize {
        self.skipped.get(&reason).copied().unwrap_or(0)
    }

    /// Get total skip count across all reasons.
    pub fn total_skipped(&self) -> usize {
        SkipReason::iter().map(|r| self.get_skip_count(r)).sum()
    }
}
