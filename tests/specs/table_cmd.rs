// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for the `needle table` command.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// `needle table` prints one row per pattern unit
#[test]
fn table_prints_rows() {
    needle_cmd()
        .args(["table", "ABAB"])
        .assert()
        .success()
        .stdout(
            "  pos  unit  border\n    0  A     0\n    1  B     0\n    2  A     1\n    3  B     2\n",
        );
}

/// `needle table -o json` emits the table as an array
#[test]
fn table_json_output() {
    let output = needle_cmd()
        .args(["table", "ABABCABAB", "-o", "json"])
        .output()
        .expect("command should run");
    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("should be valid JSON");
    assert_eq!(json["table"], serde_json::json!([0, 0, 1, 2, 0, 1, 2, 3, 4]));
}

/// An empty pattern has an empty table
#[test]
fn table_empty_pattern() {
    needle_cmd()
        .args(["table", ""])
        .assert()
        .success()
        .stdout("  pos  unit  border\n");
}
