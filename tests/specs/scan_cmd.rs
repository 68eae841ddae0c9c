// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for the `needle scan` command.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;

use tempfile::TempDir;

use crate::prelude::*;

// =============================================================================
// Text output
// =============================================================================

/// `needle scan` reports the first match per file with line and column
#[test]
fn scan_reports_first_match_per_file() {
    let (code, stdout) = scan_in("docs", &["model", "--color", "never"]);
    assert_eq!(code, Some(0));
    assert_eq!(
        stdout,
        "intro.txt:2:12: match at byte 48\n\
         notes.md:2:25: match at byte 32\n\
         2 of 3 files matched\n"
    );
}

/// Overlapping partial matches are resolved through the failure table
#[test]
fn scan_finds_match_after_partial_overlaps() {
    let (code, stdout) = scan_in("docs", &["ABABCABAB", "sub", "--no-color"]);
    assert_eq!(code, Some(0));
    assert!(
        stdout.contains("guide.txt:1:11: match at byte 10"),
        "unexpected output: {stdout}"
    );
    assert!(stdout.ends_with("1 of 1 files matched\n"), "{stdout}");
}

/// A file reachable from several roots is scanned and reported once
#[test]
fn scan_overlapping_roots_reports_each_file_once() {
    let (code, stdout) = scan_in("docs", &["ABABCABAB", ".", "sub", "--no-color"]);
    assert_eq!(code, Some(0));
    assert_eq!(stdout.matches("guide.txt").count(), 1, "{stdout}");
    assert_eq!(
        stdout,
        "sub/guide.txt:1:11: match at byte 10\n\
         1 of 3 files matched\n"
    );
}

/// No hit anywhere exits with code 1
#[test]
fn scan_without_hits_exits_one() {
    let (code, stdout) = scan_in("docs", &["xyz", "--no-color"]);
    assert_eq!(code, Some(1));
    assert_eq!(stdout, "0 of 3 files matched\n");
}

// =============================================================================
// Marker
// =============================================================================

/// `--marker` stops a file's scan at the marker, even before a match
#[test]
fn scan_marker_preempts_match() {
    let (code, stdout) = scan_in("docs", &["model", "--marker", "#", "--no-color"]);
    assert_eq!(code, Some(0));
    assert!(
        stdout.contains("notes.md:1:1: marker at byte 0"),
        "unexpected output: {stdout}"
    );
    assert!(stdout.contains("intro.txt:2:12: match at byte 48"), "{stdout}");
}

/// A marker with more than one character is rejected by argument parsing
#[test]
fn scan_rejects_multi_character_marker() {
    needle_cmd()
        .args(["scan", "model", "--marker", "ab"])
        .current_dir(fixture("docs"))
        .assert()
        .failure()
        .code(2)
        .stderr(predicates::str::contains("single ASCII character"));
}

// =============================================================================
// Configuration
// =============================================================================

/// needle.toml in the scan root supplies the marker and excludes
#[test]
fn scan_uses_discovered_config() {
    let (code, stdout) = scan_in("marker-config", &["needle", "--no-color"]);
    assert_eq!(code, Some(0));
    assert_eq!(stdout, "page.md:2:1: marker at byte 6\n1 of 1 files matched\n");
}

/// An explicit --config overrides discovery
#[test]
fn scan_explicit_config_overrides_discovery() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("plain.toml");
    fs::write(&config, "version = 1\n[scan]\nexclude = [\"needle.toml\"]\n").unwrap();

    needle_cmd()
        .args(["-C", config.to_str().unwrap(), "scan", "needle", "--no-color"])
        .current_dir(fixture("marker-config"))
        .assert()
        .success()
        .stdout("page.md:3:1: match at byte 16\n1 of 1 files matched\n");
}

/// An unsupported config version exits with code 2
#[test]
fn scan_invalid_config_exits_two() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("needle.toml"), "version = 2\n").unwrap();
    fs::write(tmp.path().join("a.txt"), "needle").unwrap();

    needle_cmd()
        .args(["scan", "needle"])
        .current_dir(tmp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported config version 2"));
}

/// A missing path is reported without scanning
#[test]
fn scan_missing_path_fails() {
    needle_cmd()
        .args(["scan", "needle", "does-not-exist"])
        .current_dir(fixture("docs"))
        .assert()
        .code(3)
        .stderr(predicates::str::contains("does-not-exist"));
}

// =============================================================================
// JSON output
// =============================================================================

/// `--output json` produces valid JSON with one entry per hit
#[test]
fn scan_json_output_is_valid() {
    let output = needle_cmd()
        .args(["scan", "model", "-o", "json", "--size-unit", "B"])
        .current_dir(fixture("docs"))
        .output()
        .expect("command should run");
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("should be valid JSON");
    assert_eq!(json["pattern"], "model");
    assert!(json["marker"].is_null());
    assert_eq!(json["size_unit"], "B");
    assert_eq!(json["files_scanned"], 3);

    let hits = json["hits"].as_array().expect("hits array");
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0]["path"], "intro.txt");
    assert_eq!(hits[0]["offset"], 48);
    assert_eq!(hits[0]["kind"], "match");
    assert_eq!(hits[0]["size"], 63);
}

// =============================================================================
// Verbose
// =============================================================================

/// `--verbose` writes configuration and file sizes to stderr only
#[test]
fn scan_verbose_writes_to_stderr() {
    needle_cmd()
        .args(["scan", "model", "-v", "--no-color", "--size-unit", "B"])
        .current_dir(fixture("docs"))
        .assert()
        .success()
        .stderr(predicates::str::contains("Configuration:"))
        .stderr(predicates::str::contains("Config: (defaults)"))
        .stderr(predicates::str::contains("(63 B)"))
        .stdout(predicates::str::contains("Configuration").not());
}
