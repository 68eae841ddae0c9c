// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-pattern substring scanning with an early-exit marker.
//!
//! The core lives in [`scan`]: a prefix-failure table drives a linear-time
//! scan that returns the leftmost match, or the first marker unit if the scan
//! reaches one first. The remaining modules apply the scanner to files for
//! the `needle` command.
//!
//! ```
//! use needle::scan::{scan_str, Scanner, Hit};
//!
//! assert_eq!(scan_str("ABABDABACDABABCABAB", "ABABCABAB", None), Some(10));
//! assert_eq!(scan_str("abcdef", "cd", Some(b'b')), Some(1));
//!
//! let scanner = Scanner::new(b"cd".as_slice()).with_marker(Some(b'd'));
//! assert_eq!(scanner.find(b"abcdef"), Some(Hit::marker(3)));
//! ```

pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod error;
pub mod file_reader;
pub mod report;
pub mod runner;
pub mod scan;
pub mod size;
pub mod verbose;
pub mod walker;

#[cfg(test)]
pub mod test_utils;
