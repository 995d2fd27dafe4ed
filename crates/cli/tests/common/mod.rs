// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test utilities for CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Date that is always in the future for booking
pub const FUTURE_DATE: &str = "01/01/2099";

/// Empty working directory for one test. Removed when dropped.
pub fn setup_test_env() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// `rb` command running in `dir`, isolated from the caller's environment
pub fn rb(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("rb").expect("rb binary is built");
    cmd.current_dir(dir)
        .env_remove("RB_RECORDS")
        .env_remove("RB_CAPACITY")
        .env_remove("RUST_LOG");
    cmd
}

/// Default record file inside a test directory
pub fn records_path(dir: &Path) -> PathBuf {
    dir.join("conferences.csv")
}

/// Today's date as typed at the date prompt
pub fn today() -> String {
    chrono::Local::now().format("%d/%m/%Y").to_string()
}

/// Answers for one booking: name, anchor, date, time
pub fn booking_input(name: &str, anchor: &str, date: &str, time: &str) -> String {
    format!("{}\n{}\n{}\n{}\n", name, anchor, date, time)
}
