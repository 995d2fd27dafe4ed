// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI integration tests for `rb history`

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(deprecated)]

mod common;

use common::{booking_input, rb, records_path, setup_test_env, FUTURE_DATE};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_history_without_records() {
    let temp = setup_test_env();

    rb(temp.path())
        .arg("history")
        .assert()
        .success()
        .stdout("No conferences recorded.\n");
}

#[test]
fn test_history_warns_when_record_file_missing() {
    let temp = setup_test_env();

    rb(temp.path())
        .arg("history")
        .assert()
        .success()
        .stderr(predicate::str::contains("WARN"))
        .stderr(predicate::str::contains("no booking records yet"));
}

#[test]
fn test_history_lists_every_record() {
    let temp = setup_test_env();
    fs::write(
        records_path(temp.path()),
        "Kickoff,Jordan Lee,09:30 AM,05/01/2025,C1\nRetro,Sam Ray,04:00 PM,07/01/2025,C2\n",
    )
    .unwrap();

    let output = rb(temp.path()).arg("history").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    similar_asserts::assert_eq!(
        stdout,
        "All recorded conferences:\n\
         Conference Name: Kickoff\n\
         Anchor: Jordan Lee\n\
         Time: 09:30 AM\n\
         Date: 05/01/2025\n\
         Room Number: C1\n\
         ----------------------\n\
         Conference Name: Retro\n\
         Anchor: Sam Ray\n\
         Time: 04:00 PM\n\
         Date: 07/01/2025\n\
         Room Number: C2\n\
         ----------------------\n\
         Conferences recorded: 2\n"
    );
}

#[test]
fn test_history_tolerates_short_lines() {
    let temp = setup_test_env();
    fs::write(records_path(temp.path()), "Kickoff,Jordan Lee\n").unwrap();

    rb(temp.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("Anchor: Jordan Lee"))
        .stdout(predicate::str::contains("Room Number: \n"));
}

#[test]
fn test_history_json() {
    let temp = setup_test_env();
    fs::write(
        records_path(temp.path()),
        "Kickoff,Jordan Lee,09:30 AM,05/01/2025,C1\n",
    )
    .unwrap();

    let output = rb(temp.path())
        .args(["history", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 1);
    assert_eq!(value[0]["anchor"], "Jordan Lee");
    assert_eq!(value[0]["slot"], "C1");
}

#[test]
fn test_history_reads_what_booking_wrote() {
    let temp = setup_test_env();
    let input = booking_input("Kickoff", "Jordan Lee", FUTURE_DATE, "09:30 AM") + "3\n";
    rb(temp.path()).write_stdin(input).assert().success();

    rb(temp.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("Conference Name: Kickoff"))
        .stdout(predicate::str::contains("Room Number: C1"))
        .stdout(predicate::str::contains("Conferences recorded: 1"));
}

#[test]
fn test_history_respects_records_flag() {
    let temp = setup_test_env();
    let other = temp.path().join("other.csv");
    fs::write(&other, "Offsite,Ana,10:00 AM,02/02/2030,C4\n").unwrap();

    rb(temp.path())
        .args(["history", "--records"])
        .arg(&other)
        .assert()
        .success()
        .stdout(predicate::str::contains("Conference Name: Offsite"));
}
