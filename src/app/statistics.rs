//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ProcessingStats, SkipReason};
use crate::grouping::GroupingTable;

/// Logs the per-reason skip counts, omitting reasons that never occurred.
pub fn print_skip_statistics(stats: &ProcessingStats) {
    let total_skipped = stats.total_skipped();
    if total_skipped == 0 {
        return;
    }

    info!("Skip Counts ({} total):", total_skipped);
    for reason in SkipReason::iter() {
        let count = stats.get_skip_count(reason);
        if count > 0 {
            info!("   {}: {}", reason.as_str(), count);
        }
    }
}

/// Logs the number of URLs filed under each TLD.
pub fn print_group_statistics(table: &GroupingTable) {
    info!(
        "TLD Counts ({} TLDs, {} URLs):",
        table.len(),
        table.total_urls()
    );
    for (tld, urls) in table.iter() {
        info!("   {}: {}", tld, urls.len());
    }
}

/// Logs the final run summary.
pub fn print_final_statistics(stats: &ProcessingStats, table: &GroupingTable) {
    info!(
        "Run statistics: lines={}, grouped={}, skipped={}",
        stats.lines_read(),
        stats.grouped(),
        stats.total_skipped()
    );
    print_group_statistics(table);
    print_skip_statistics(stats);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_final_statistics_does_not_panic() {
        let mut stats = ProcessingStats::new();
        let mut table = GroupingTable::new();
        stats.record_line();
        stats.record_line();
        stats.increment_skip(SkipReason::MissingDot);
        table.push("com", "https://example.com".to_string());
        stats.record_grouped();

        print_final_statistics(&stats, &table);
    }

    #[test]
    fn test_print_statistics_empty() {
        print_final_statistics(&ProcessingStats::new(), &GroupingTable::new());
    }
}
