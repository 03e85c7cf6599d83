//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - Logger
//! - Public Suffix List extractor

mod logger;

// Re-export public API
pub use logger::init_logger_with;

/// Initializes the Public Suffix List extractor.
///
/// `psl::List` carries a compiled-in copy of the Public Suffix List, so no
/// network access or file loading is involved.
pub fn init_extractor() -> psl::List {
    psl::List
}
