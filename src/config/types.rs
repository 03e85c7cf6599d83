//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{ArgGroup, Parser, ValueEnum};

use crate::config::constants::{DEFAULT_OUTPUT_DIR, DEFAULT_SEPARATOR};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without going through [`Cli`].
///
/// # Examples
///
/// ```no_run
/// use tld_split::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     file: Some(PathBuf::from("urls.txt")),
///     output_dir: PathBuf::from("out"),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Newline-delimited file to read URLs from
    pub file: Option<PathBuf>,

    /// Directory walked recursively; every regular file is read as text
    pub dir: Option<PathBuf>,

    /// CSV spreadsheet export whose first column holds the URL
    pub spreadsheet: Option<PathBuf>,

    /// Separator isolating the URL field of a text line (`None` disables splitting)
    pub separator: Option<String>,

    /// Directory receiving one `<tld>.txt` per TLD
    pub output_dir: PathBuf,

    /// Also write every group into the combined `all.txt`
    pub write_combined: bool,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: None,
            dir: None,
            spreadsheet: None,
            separator: Some(DEFAULT_SEPARATOR.to_string()),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            write_combined: true,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Returns true if at least one input source is configured.
    pub fn has_input(&self) -> bool {
        self.file.is_some() || self.dir.is_some() || self.spreadsheet.is_some()
    }
}

/// Command-line options for the `tld_split` binary.
#[derive(Debug, Parser)]
#[command(
    name = "tld_split",
    version,
    about = "Split URL lists into one file per top-level domain"
)]
#[command(group(
    ArgGroup::new("input")
        .required(true)
        .multiple(true)
        .args(["file", "path", "spreadsheet"])
))]
pub struct Cli {
    /// URL file, one URL per line
    #[arg(short = 'f', long, value_parser)]
    pub file: Option<PathBuf>,

    /// Directory to walk; every file in it is read as a URL file
    #[arg(short = 'p', long, value_parser)]
    pub path: Option<PathBuf>,

    /// CSV spreadsheet export; the first column of each row is the URL
    #[arg(short = 'x', long, value_parser)]
    pub spreadsheet: Option<PathBuf>,

    /// Separator; only the text before its first occurrence is treated as the URL.
    /// An empty value disables splitting
    #[arg(long = "sep", default_value = DEFAULT_SEPARATOR)]
    pub separator: String,

    /// Output directory
    #[arg(short = 'o', long = "output", visible_alias = "sp", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Do not write the combined all.txt
    #[arg(long)]
    pub no_combined: bool,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain or json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let separator = if cli.separator.is_empty() {
            None
        } else {
            Some(cli.separator)
        };
        Self {
            file: cli.file,
            dir: cli.path,
            spreadsheet: cli.spreadsheet,
            separator,
            output_dir: cli.output_dir,
            write_combined: !cli.no_combined,
            log_level: cli.log_level,
            log_format: cli.log_format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.separator.as_deref(), Some("#"));
        assert_eq!(config.output_dir, PathBuf::from("class"));
        assert!(config.write_combined);
        assert!(!config.has_input());
    }

    #[test]
    fn test_cli_into_config_defaults() {
        let cli = Cli::try_parse_from(["tld_split", "-f", "urls.txt"]).unwrap();
        let config = Config::from(cli);
        assert_eq!(config.file, Some(PathBuf::from("urls.txt")));
        assert_eq!(config.dir, None);
        assert_eq!(config.separator.as_deref(), Some("#"));
        assert_eq!(config.output_dir, PathBuf::from("class"));
        assert!(config.write_combined);
    }

    #[test]
    fn test_cli_empty_separator_disables_splitting() {
        let cli = Cli::try_parse_from(["tld_split", "-f", "urls.txt", "--sep", ""]).unwrap();
        let config = Config::from(cli);
        assert_eq!(config.separator, None);
    }

    #[test]
    fn test_cli_no_combined() {
        let cli = Cli::try_parse_from(["tld_split", "-p", "lists", "--no-combined"]).unwrap();
        let config = Config::from(cli);
        assert!(!config.write_combined);
        assert_eq!(config.dir, Some(PathBuf::from("lists")));
    }

    #[test]
    fn test_cli_requires_an_input() {
        assert!(Cli::try_parse_from(["tld_split"]).is_err());
        assert!(Cli::try_parse_from(["tld_split", "-o", "out"]).is_err());
    }
}
