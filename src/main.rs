//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `tld_split` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use tld_split::initialization::init_logger_with;
use tld_split::{run_split, Cli, Config};

fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::from(Cli::parse());

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_split(config) {
        Ok(report) => {
            println!(
                "Grouped {} of {} line{} into {} TLD{} ({} skipped) in {:.1}s",
                report.grouped,
                report.lines_read,
                if report.lines_read == 1 { "" } else { "s" },
                report.tlds,
                if report.tlds == 1 { "" } else { "s" },
                report.skipped,
                report.elapsed_seconds
            );
            if report.files_failed > 0 {
                println!(
                    "{} TLD file{} could not be written - see log for details",
                    report.files_failed,
                    if report.files_failed == 1 { "" } else { "s" }
                );
            }
            println!("Results saved in {}", report.output_dir.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("tld_split error: {:#}", e);
            process::exit(1);
        }
    }
}
