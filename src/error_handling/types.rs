//! Error type definitions.
//!
//! This module defines the error types used throughout the application and the
//! reasons a line can be skipped.

use std::io;
use std::path::PathBuf;

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Reasons a candidate URL cannot be classified.
#[derive(Error, Debug)]
pub enum ClassifyError {
    /// The string is not a parseable URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// IP literals have no registrable domain.
    #[error("IP addresses do not have registrable domains: {0}")]
    IpAddress(String),

    /// The suffix list has no registrable domain for the host.
    #[error("no registrable domain for host {0:?}")]
    NotRegistrable(String),

    /// The resolved eTLD+1 has no label separator.
    #[error("tld: failed parsing {0:?}")]
    MissingDot(String),
}

impl ClassifyError {
    /// Maps the error onto the counter it is reported under.
    pub fn skip_reason(&self) -> SkipReason {
        match self {
            ClassifyError::InvalidUrl(_) => SkipReason::InvalidUrl,
            ClassifyError::IpAddress(_) => SkipReason::IpAddress,
            ClassifyError::NotRegistrable(_) => SkipReason::NotRegistrable,
            ClassifyError::MissingDot(_) => SkipReason::MissingDot,
        }
    }
}

/// Fatal errors while reading input.
#[derive(Error, Debug)]
pub enum InputError {
    /// An input file could not be opened.
    #[error("failed to open input file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An input file could not be read after opening.
    #[error("failed to read input file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A directory entry could not be visited.
    #[error("failed to walk directory {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// A spreadsheet row could not be decoded.
    #[error("failed to read spreadsheet {path}: {source}")]
    Spreadsheet {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Errors while writing grouped output.
#[derive(Error, Debug)]
pub enum OutputError {
    /// The output directory could not be created. Fatal.
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The combined file could not be created. Fatal.
    #[error("failed to create combined file {path}: {source}")]
    CreateCombined {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing to the combined file failed. Fatal.
    #[error("failed to write combined file {path}: {source}")]
    WriteCombined {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A single group file could not be created or written.
    #[error("failed to write {path}: {source}")]
    GroupFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The TLD cannot be used as a file name.
    #[error("TLD {0:?} is not a usable file name")]
    UnsafeFileName(String),

    /// The group file would overwrite the combined file.
    #[error("TLD {0:?} collides with the combined file name")]
    CollidesWithCombined(String),
}

/// Why a line did not end up in any group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum SkipReason {
    /// Not a parseable URL
    InvalidUrl,
    /// Host is an IP literal
    IpAddress,
    /// No registrable domain under the suffix list
    NotRegistrable,
    /// eTLD+1 without a dot (e.g. `localhost`)
    MissingDot,
    /// URL has no host (e.g. `mailto:`)
    NoHost,
    /// Line is not valid UTF-8
    InvalidUtf8,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::InvalidUrl => "Invalid URL",
            SkipReason::IpAddress => "IP address host",
            SkipReason::NotRegistrable => "No registrable domain",
            SkipReason::MissingDot => "Suffix without dot",
            SkipReason::NoHost => "URL without host",
            SkipReason::InvalidUtf8 => "Invalid UTF-8 line",
        }
    }
}
