//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions for classification, input, output and initialization
//! - Skip reasons for lines that do not end up in any group
//! - Processing statistics tracking

mod stats;
mod types;

// Re-export public API
pub use stats::ProcessingStats;
pub use types::{ClassifyError, InitializationError, InputError, OutputError, SkipReason};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_processing_stats_initialization() {
        let stats = ProcessingStats::new();
        for reason in SkipReason::iter() {
            assert_eq!(stats.get_skip_count(reason), 0);
        }
        assert_eq!(stats.lines_read(), 0);
        assert_eq!(stats.grouped(), 0);
    }

    #[test]
    fn test_processing_stats_increment() {
        let mut stats = ProcessingStats::new();
        stats.increment_skip(SkipReason::MissingDot);
        stats.increment_skip(SkipReason::MissingDot);
        stats.increment_skip(SkipReason::InvalidUrl);
        assert_eq!(stats.get_skip_count(SkipReason::MissingDot), 2);
        assert_eq!(stats.get_skip_count(SkipReason::InvalidUrl), 1);
        assert_eq!(stats.total_skipped(), 3);
    }

    #[test]
    fn test_processing_stats_lines() {
        let mut stats = ProcessingStats::new();
        stats.record_line();
        stats.record_line();
        stats.record_grouped();
        assert_eq!(stats.lines_read(), 2);
        assert_eq!(stats.grouped(), 1);
    }

    #[test]
    fn test_classify_error_skip_reason() {
        let err = ClassifyError::MissingDot("localhost".to_string());
        assert_eq!(err.skip_reason(), SkipReason::MissingDot);
        assert_eq!(err.to_string(), "tld: failed parsing \"localhost\"");

        let err = ClassifyError::IpAddress("127.0.0.1".to_string());
        assert_eq!(err.skip_reason(), SkipReason::IpAddress);
    }

    #[test]
    fn test_skip_reason_display() {
        for reason in SkipReason::iter() {
            assert_eq!(reason.to_string(), reason.as_str());
            assert!(!reason.as_str().is_empty());
        }
    }
}
