//! Progress logging utilities.

use log::info;
use std::time::Instant;

/// Logs progress information about line processing.
///
/// # Arguments
///
/// * `start_time` - The start time of processing
/// * `processed` - Number of candidate lines classified so far
pub fn log_progress(start_time: Instant, processed: usize) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        processed as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Processed {} lines in {:.2} seconds (~{:.2} lines/sec)",
        processed, elapsed_secs, rate
    );
}
