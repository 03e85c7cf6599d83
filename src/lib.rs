//! tld_split library: split URL lists into one file per top-level domain
//!
//! This library reads URLs from text files, directory trees or CSV spreadsheet
//! exports, classifies each one with the Public Suffix List, and writes the
//! original strings into `<output_dir>/<tld>.txt`.
//!
//! # Example
//!
//! ```no_run
//! use tld_split::{Config, run_split};
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     file: Some(PathBuf::from("urls.txt")),
//!     output_dir: PathBuf::from("class"),
//!     ..Default::default()
//! };
//!
//! let report = run_split(config)?;
//! println!("Grouped {} of {} lines into {} TLDs",
//!          report.grouped, report.lines_read, report.tlds);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod app;
pub mod config;
pub mod domain;
pub mod error_handling;
pub mod grouping;
pub mod initialization;
pub mod input;
pub mod output;

// Re-export public API
pub use config::{Cli, Config, LogFormat, LogLevel};
pub use domain::{classify, ParsedUrl};
pub use grouping::GroupingTable;
pub use run::{run_split, SplitReport};

// Internal run module (contains the pipeline driver)
mod run {
    use anyhow::{bail, Context, Result};
    use log::info;
    use std::path::PathBuf;
    use std::time::Instant;

    use crate::app::{log_progress, print_final_statistics};
    use crate::config::{Config, LOGGING_INTERVAL};
    use crate::error_handling::ProcessingStats;
    use crate::grouping::GroupingTable;
    use crate::initialization::init_extractor;
    use crate::input::{read_directory, read_spreadsheet, read_text_file};
    use crate::output::write_groups;

    /// Results of a split run.
    #[derive(Debug, Clone)]
    pub struct SplitReport {
        /// Candidate lines taken from the inputs
        pub lines_read: usize,
        /// Lines placed in a TLD group
        pub grouped: usize,
        /// Lines dropped because they could not be classified
        pub skipped: usize,
        /// Number of distinct TLDs
        pub tlds: usize,
        /// Per-TLD files written
        pub files_written: usize,
        /// Per-TLD files that could not be written
        pub files_failed: usize,
        /// Combined file, if one was written
        pub combined_file: Option<PathBuf>,
        /// Directory holding the output files
        pub output_dir: PathBuf,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs the read, classify, group and write pipeline.
    ///
    /// Inputs are read in a fixed order: the text file, then the directory,
    /// then the spreadsheet. An output directory inside the input directory is
    /// not read back. Lines that cannot be classified are skipped and
    /// counted; see [`SplitReport::skipped`].
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - No input source is configured
    /// - An input file is missing or a directory entry cannot be read
    /// - The output directory or the combined file cannot be created
    ///
    /// Failing to write an individual TLD file is not an error; it is counted
    /// in [`SplitReport::files_failed`].
    pub fn run_split(config: Config) -> Result<SplitReport> {
        if !config.has_input() {
            bail!("No input given: set a file, a directory or a spreadsheet");
        }

        let start_time = Instant::now();
        let list = init_extractor();
        let separator = config.separator.as_deref();
        let mut stats = ProcessingStats::new();
        let mut candidates = Vec::new();

        if let Some(file) = &config.file {
            info!("Reading URLs from {}", file.display());
            candidates.extend(
                read_text_file(file, separator, &mut stats).context("Failed to read input file")?,
            );
        }
        if let Some(dir) = &config.dir {
            info!("Reading URLs from directory {}", dir.display());
            candidates.extend(
                read_directory(dir, Some(&config.output_dir), separator, &mut stats)
                    .context("Failed to read input directory")?,
            );
        }
        if let Some(sheet) = &config.spreadsheet {
            info!("Reading URLs from spreadsheet {}", sheet.display());
            candidates.extend(
                read_spreadsheet(sheet, &mut stats).context("Failed to read spreadsheet")?,
            );
        }
        info!("Total candidate URLs: {}", candidates.len());

        let mut table = GroupingTable::new();
        for (i, candidate) in candidates.into_iter().enumerate() {
            table.ingest(&list, candidate, &mut stats);
            if (i + 1) % LOGGING_INTERVAL == 0 {
                log_progress(start_time, i + 1);
            }
        }

        let written = write_groups(&table, &config.output_dir, config.write_combined)
            .context("Failed to write output files")?;

        print_final_statistics(&stats, &table);

        Ok(SplitReport {
            lines_read: stats.lines_read(),
            grouped: stats.grouped(),
            skipped: stats.total_skipped(),
            tlds: table.len(),
            files_written: written.files_written.len(),
            files_failed: written.failed.len(),
            combined_file: written.combined,
            output_dir: config.output_dir,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }
}
