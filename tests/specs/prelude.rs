// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::process::Command;

/// Returns a Command configured to run the needle binary with a clean
/// environment for the variables needle reads.
pub fn needle_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("needle"));
    cmd.env_remove("NEEDLE_CONFIG")
        .env_remove("NEEDLE_LOG")
        .env_remove("NO_COLOR");
    cmd
}

/// Get path to a test fixture directory
pub fn fixture(name: &str) -> std::path::PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    std::path::PathBuf::from(manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Run `needle scan` with `args` in fixture `name` and return stdout.
pub fn scan_in(name: &str, args: &[&str]) -> (Option<i32>, String) {
    let output = needle_cmd()
        .arg("scan")
        .args(args)
        .current_dir(fixture(name))
        .output()
        .expect("command should run");
    (
        output.status.code(),
        String::from_utf8_lossy(&output.stdout).into_owned(),
    )
}
