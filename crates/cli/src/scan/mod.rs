// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-pattern substring scanning.
//!
//! A pattern is compiled into a prefix-failure table once, then the text is
//! walked left to right with two cursors. On a mismatch the pattern cursor
//! falls back through the table instead of re-reading text, so every scan is
//! linear in `text.len() + pattern.len()`.
//!
//! An optional marker unit short-circuits the scan: the first position whose
//! unit equals the marker is returned even if a match was in progress.

pub mod location;
pub mod scanner;
pub mod table;

pub use location::Location;
pub use scanner::{Hit, HitKind, NOT_FOUND, Scanner, scan, scan_str, to_sentinel};
pub use table::FailureTable;
