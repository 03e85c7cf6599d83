//! Input readers.
//!
//! Produces candidate URL strings from the three supported sources:
//! - newline-delimited text files (`read_text_file`)
//! - directory trees whose files are read as text (`read_directory`)
//! - CSV spreadsheet exports, first column only (`read_spreadsheet`)
//!
//! Blank lines and empty fields are dropped silently. Lines that are not valid
//! UTF-8 are counted as skipped.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use log::{debug, info, warn};
use walkdir::WalkDir;

use crate::error_handling::{InputError, ProcessingStats, SkipReason};

/// Cuts a line at the first occurrence of `separator` and trims the result.
///
/// With no separator the whole line is used.
///
/// # Examples
///
/// ```
/// use tld_split::input::isolate_url_field;
///
/// assert_eq!(
///     isolate_url_field("https://mail.example.co.uk/path#meta", Some("#")),
///     "https://mail.example.co.uk/path"
/// );
/// assert_eq!(isolate_url_field("  https://example.com  ", None), "https://example.com");
/// ```
pub fn isolate_url_field<'a>(line: &'a str, separator: Option<&str>) -> &'a str {
    let field = match separator {
        Some(sep) if !sep.is_empty() => line.split(sep).next().unwrap_or(line),
        _ => line,
    };
    field.trim()
}

/// Reads candidate URLs from any buffered reader, one per line.
///
/// `source` is only used in log and error messages.
pub fn read_lines<R: BufRead>(
    reader: R,
    source: &Path,
    separator: Option<&str>,
    stats: &mut ProcessingStats,
) -> Result<Vec<String>, InputError> {
    let mut candidates = Vec::new();

    for (index, chunk) in reader.split(b'\n').enumerate() {
        let mut bytes = chunk.map_err(|source_err| InputError::Read {
            path: source.to_path_buf(),
            source: source_err,
        })?;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }

        let line = match String::from_utf8(bytes) {
            Ok(line) => line,
            Err(_) => {
                stats.record_line();
                stats.increment_skip(SkipReason::InvalidUtf8);
                warn!(
                    "Skipping line {} of {}: not valid UTF-8",
                    index + 1,
                    source.display()
                );
                continue;
            }
        };

        let field = isolate_url_field(&line, separator);
        if field.is_empty() {
            continue;
        }
        stats.record_line();
        candidates.push(field.to_string());
    }

    Ok(candidates)
}

/// Reads candidate URLs from a newline-delimited text file.
///
/// # Errors
///
/// Returns `InputError::Open` if the file cannot be opened and
/// `InputError::Read` if reading fails part-way.
pub fn read_text_file(
    path: &Path,
    separator: Option<&str>,
    stats: &mut ProcessingStats,
) -> Result<Vec<String>, InputError> {
    let file = File::open(path).map_err(|source| InputError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let candidates = read_lines(BufReader::new(file), path, separator, stats)?;
    debug!("Read {} candidates from {}", candidates.len(), path.display());
    Ok(candidates)
}

/// Walks `dir` recursively and reads every regular file as a text file.
///
/// Entries are visited in file-name order and symlinks are not followed.
/// If `exclude` names a directory inside the tree (typically the output
/// directory), that subtree is not read.
///
/// # Errors
///
/// Any entry that cannot be visited or read is fatal.
pub fn read_directory(
    dir: &Path,
    exclude: Option<&Path>,
    separator: Option<&str>,
    stats: &mut ProcessingStats,
) -> Result<Vec<String>, InputError> {
    // Not existing yet means it cannot be inside the tree
    let excluded = exclude.and_then(|path| fs::canonicalize(path).ok());
    let mut candidates = Vec::new();

    for entry in WalkDir::new(dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            let skip = entry.file_type().is_dir()
                && excluded.as_deref().is_some_and(|excluded| {
                    fs::canonicalize(entry.path()).is_ok_and(|path| path == excluded)
                });
            if skip {
                info!("Skipping output directory {}", entry.path().display());
            }
            !skip
        })
    {
        let entry = entry.map_err(|source| InputError::Walk {
            path: dir.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        info!("{}", entry.path().display());
        candidates.extend(read_text_file(entry.path(), separator, stats)?);
    }

    Ok(candidates)
}

/// Reads candidate URLs from the first column of CSV rows.
pub fn read_csv<R: Read>(
    reader: R,
    source: &Path,
    stats: &mut ProcessingStats,
) -> Result<Vec<String>, InputError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut candidates = Vec::new();
    for record in rdr.byte_records() {
        let record = record.map_err(|source_err| InputError::Spreadsheet {
            path: source.to_path_buf(),
            source: source_err,
        })?;
        let Some(cell) = record.get(0) else {
            continue;
        };
        match std::str::from_utf8(cell) {
            Ok(cell) => {
                let field = cell.trim();
                if field.is_empty() {
                    continue;
                }
                stats.record_line();
                candidates.push(field.to_string());
            }
            Err(_) => {
                stats.record_line();
                stats.increment_skip(SkipReason::InvalidUtf8);
                warn!(
                    "Skipping row {} of {}: not valid UTF-8",
                    record.position().map(|p| p.line()).unwrap_or(0),
                    source.display()
                );
            }
        }
    }

    Ok(candidates)
}

/// Reads candidate URLs from a CSV spreadsheet export.
///
/// # Errors
///
/// Returns `InputError::Open` if the file cannot be opened and
/// `InputError::Spreadsheet` if a row cannot be decoded.
pub fn read_spreadsheet(
    path: &Path,
    stats: &mut ProcessingStats,
) -> Result<Vec<String>, InputError> {
    let file = File::open(path).map_err(|source| InputError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let candidates = read_csv(BufReader::new(file), path, stats)?;
    debug!("Read {} candidates from {}", candidates.len(), path.display());
    Ok(candidates)
}
