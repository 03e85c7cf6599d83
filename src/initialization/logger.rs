//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom formatting.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::LevelFilter;

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. Supports both plain text
/// (timestamp, colored level and target) and JSON formats for structured logging.
///
/// The logger reads from the `RUST_LOG` environment variable by default, but
/// the provided `level` parameter will override it. This allows developers to
/// use `RUST_LOG=debug` for quick debugging while still supporting explicit
/// CLI control via `--log-level`.
///
/// # Arguments
///
/// * `level` - Minimum log level to display (overrides `RUST_LOG` if set)
/// * `format` - Log format (Plain or Json)
///
/// # Returns
///
/// `Ok(())` if initialization succeeds, or an error if logger setup fails.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if logger initialization fails.
///
/// # Examples
///
/// ```bash
/// # Use RUST_LOG for quick debugging (no CLI args needed)
/// RUST_LOG=debug tld_split -f urls.txt
///
/// # Override with CLI args (takes precedence)
/// RUST_LOG=debug tld_split -f urls.txt --log-level info
///
/// # Per-module filtering via RUST_LOG
/// RUST_LOG=tld_split::grouping=trace tld_split -f urls.txt
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    colored::control::set_override(true);

    // Read from RUST_LOG environment variable first, then override with CLI arg
    let mut builder = env_logger::Builder::from_default_env();

    // Override with CLI-provided level (takes precedence over RUST_LOG)
    builder.filter_level(level);
    builder.filter_module("tld_split", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| write_json_line(buf, record));
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    log::Level::Error => level.to_string().red(),
                    log::Level::Warn => level.to_string().yellow(),
                    log::Level::Info => level.to_string().green(),
                    log::Level::Debug => level.to_string().blue(),
                    log::Level::Trace => level.to_string().purple(),
                };

                writeln!(
                    buf,
                    "{} {} [{}] {}",
                    chrono::Local::now().format("%H:%M:%S"),
                    record.target().cyan(),
                    colored_level,
                    record.args()
                )
            });
        }
    }

    // Use try_init() instead of init() to avoid panicking if logger is already initialized
    // This is important for tests where logger may be initialized multiple times
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

/// Writes `record` as a single-line JSON object with `ts`, `level`, `target`
/// and `msg` fields.
fn write_json_line<W: Write>(out: &mut W, record: &log::Record) -> std::io::Result<()> {
    writeln!(
        out,
        "{{\"ts\":{},\"level\":{},\"target\":{},\"msg\":{}}}",
        chrono::Utc::now().timestamp_millis(),
        serde_json::Value::from(record.level().as_str()),
        serde_json::Value::from(record.target()),
        serde_json::Value::from(record.args().to_string())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_line_is_one_json_object() {
        let mut out = Vec::new();
        write_json_line(
            &mut out,
            &log::Record::builder()
                .args(format_args!("wrote \"a\"\nand b"))
                .level(log::Level::Warn)
                .target("tld_split::output")
                .build(),
        )
        .unwrap();

        let line = String::from_utf8(out).unwrap();
        assert!(line.ends_with('\n'));
        assert_eq!(line.matches('\n').count(), 1);

        let value: serde_json::Value = serde_json::from_str(line.trim_end()).unwrap();
        assert!(value["ts"].is_i64());
        assert_eq!(value["level"], "WARN");
        assert_eq!(value["target"], "tld_split::output");
        assert_eq!(value["msg"], "wrote \"a\"\nand b");
    }

    // env_logger can only be installed once per process.
    #[test]
    fn test_init_logger_twice_reports_error() {
        let _ = init_logger_with(LevelFilter::Debug, LogFormat::Plain);
        let second = init_logger_with(LevelFilter::Debug, LogFormat::Plain);
        assert!(matches!(second, Err(InitializationError::LoggerError(_))));
    }
}
