//! Tests for process exit codes of the binary.

mod helpers;

use std::process::Command;

use tempfile::TempDir;

use helpers::write_input;

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tld_split"))
}

#[test]
fn test_success_exits_zero() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "urls.txt", "https://example.com\n");
    let out = dir.path().join("out");

    let status = binary()
        .arg("-f")
        .arg(&input)
        .arg("-o")
        .arg(&out)
        .arg("--log-level")
        .arg("error")
        .status()
        .expect("Failed to run binary");

    assert_eq!(status.code(), Some(0));
    assert!(out.join("com.txt").exists());
}

#[test]
fn test_missing_input_exits_one() {
    let dir = TempDir::new().unwrap();

    let output = binary()
        .arg("-f")
        .arg(dir.path().join("nope.txt"))
        .arg("-o")
        .arg(dir.path().join("out"))
        .output()
        .expect("Failed to run binary");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("nope.txt"));
}

#[test]
fn test_output_dir_failure_exits_one() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "urls.txt", "https://example.com\n");
    let blocker = write_input(dir.path(), "blocker", "file");

    let status = binary()
        .arg("-f")
        .arg(&input)
        .arg("-o")
        .arg(blocker.join("out"))
        .status()
        .expect("Failed to run binary");

    assert_eq!(status.code(), Some(1));
}

#[test]
fn test_unclassifiable_lines_do_not_fail_the_run() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        dir.path(),
        "urls.txt",
        "http://localhost:8080\nnot a url\n",
    );

    let status = binary()
        .arg("-f")
        .arg(&input)
        .arg("-o")
        .arg(dir.path().join("out"))
        .status()
        .expect("Failed to run binary");

    assert_eq!(status.code(), Some(0));
}
