// Shared test helpers for input fixtures and output inspection.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::fs;
use std::path::{Path, PathBuf};

/// Writes `contents` to `dir/name` and returns the path.
#[allow(dead_code)] // Used by other test files
pub fn write_input(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    fs::write(&path, contents).expect("Failed to write test input");
    path
}

/// Returns the sorted file names found in `dir`.
#[allow(dead_code)] // Used by other test files
pub fn output_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("Failed to read output directory")
        .map(|e| {
            e.expect("Failed to read directory entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    names.sort();
    names
}

/// Reads an output file as newline-separated lines.
#[allow(dead_code)] // Used by other test files
pub fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("Failed to read output file")
        .split('\n')
        .map(str::to_string)
        .collect()
}
