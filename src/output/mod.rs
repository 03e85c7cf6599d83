//! Per-TLD file output.
//!
//! Writes each group of a [`GroupingTable`] to `<output_dir>/<tld>.txt`, and
//! optionally every group to the combined `all.txt`. Files are created or
//! truncated, never appended to, so re-running on the same input rewrites the
//! same content.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, error, info};

use crate::config::{COMBINED_FILE_NAME, OUTPUT_EXTENSION};
use crate::error_handling::OutputError;
use crate::grouping::GroupingTable;

/// Outcome of writing a table.
#[derive(Debug, Default)]
pub struct WriteReport {
    /// Group files written successfully
    pub files_written: Vec<PathBuf>,
    /// Groups whose file could not be written, with the reason
    pub failed: Vec<(String, OutputError)>,
    /// Path of the combined file, if written
    pub combined: Option<PathBuf>,
}

/// Returns true if `tld` can be used as a file stem inside the output directory.
pub fn is_safe_file_stem(tld: &str) -> bool {
    !tld.is_empty()
        && !tld.starts_with('.')
        && !tld.contains(['/', '\\', '\0'])
}

/// Path of the output file for `tld`.
pub fn group_file_path(output_dir: &Path, tld: &str) -> PathBuf {
    output_dir.join(format!("{tld}.{OUTPUT_EXTENSION}"))
}

fn write_group(path: &Path, urls: &[String]) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(urls.join("\n").as_bytes())?;
    writer.flush()
}

fn append_group<W: Write>(writer: &mut W, urls: &[String], first: bool) -> std::io::Result<()> {
    if !first {
        writer.write_all(b"\n")?;
    }
    writer.write_all(urls.join("\n").as_bytes())
}

/// Writes one file per TLD into `output_dir`.
///
/// # Errors
///
/// Failing to create `output_dir` or the combined file is fatal. A failure on
/// an individual group file is logged and recorded in the returned report, and
/// the remaining groups are still written. A group whose file would be the
/// combined file itself (TLD `all`) is recorded as failed but still goes into
/// the combined file.
pub fn write_groups(
    table: &GroupingTable,
    output_dir: &Path,
    write_combined: bool,
) -> Result<WriteReport, OutputError> {
    fs::create_dir_all(output_dir).map_err(|source| OutputError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let combined_path = output_dir.join(COMBINED_FILE_NAME);
    let mut combined = if write_combined {
        let file = File::create(&combined_path).map_err(|source| OutputError::CreateCombined {
            path: combined_path.clone(),
            source,
        })?;
        Some(BufWriter::new(file))
    } else {
        None
    };

    let mut report = WriteReport::default();
    let mut first_group = true;

    for (tld, urls) in table.iter() {
        if !is_safe_file_stem(tld) {
            error!("Not writing group {tld:?}: unusable as a file name");
            report
                .failed
                .push((tld.to_string(), OutputError::UnsafeFileName(tld.to_string())));
            continue;
        }

        let path = group_file_path(output_dir, tld);
        if combined.is_some() && path == combined_path {
            error!("Not writing group {tld:?}: would overwrite {COMBINED_FILE_NAME}");
            report
                .failed
                .push((tld.to_string(), OutputError::CollidesWithCombined(tld.to_string())));
        } else {
            match write_group(&path, urls) {
                Ok(()) => {
                    debug!("Wrote {} URLs to {}", urls.len(), path.display());
                    report.files_written.push(path);
                }
                Err(source) => {
                    error!("Failed to write {}: {}", path.display(), source);
                    report
                        .failed
                        .push((tld.to_string(), OutputError::GroupFile { path, source }));
                }
            }
        }

        if let Some(writer) = combined.as_mut() {
            append_group(writer, urls, first_group).map_err(|source| {
                OutputError::WriteCombined {
                    path: combined_path.clone(),
                    source,
                }
            })?;
            first_group = false;
        }
    }

    if let Some(mut writer) = combined {
        writer.flush().map_err(|source| OutputError::WriteCombined {
            path: combined_path.clone(),
            source,
        })?;
        info!("Wrote combined file {}", combined_path.display());
        report.combined = Some(combined_path);
    }

    Ok(report)
}
