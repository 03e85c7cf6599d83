//! Configuration constants.
//!
//! Defaults for the CLI and fixed names used when writing output.

/// Default separator that cuts trailing metadata off an input line.
pub const DEFAULT_SEPARATOR: &str = "#";

/// Default output directory for the per-TLD files.
pub const DEFAULT_OUTPUT_DIR: &str = "class";

/// Name of the combined file holding every grouped URL.
pub const COMBINED_FILE_NAME: &str = "all.txt";

/// Extension appended to each TLD to form its output file name.
pub const OUTPUT_EXTENSION: &str = "txt";

/// Log a progress line every this many input lines.
pub const LOGGING_INTERVAL: usize = 10_000;
