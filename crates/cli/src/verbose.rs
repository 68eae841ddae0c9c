// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verbose diagnostics for `needle scan --verbose`.
//!
//! Writes to stderr so stdout stays machine-readable in JSON mode.

use std::path::Path;

use crate::size::{SizeUnit, size_in};

/// Verbose output logger. Every method is a no-op unless enabled.
pub struct VerboseLogger {
    enabled: bool,
}

impl VerboseLogger {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Print a line indented under the current section.
    pub fn log(&self, msg: &str) {
        if self.enabled {
            eprintln!("  {}", msg);
        }
    }

    /// Print a section header.
    pub fn section(&self, title: &str) {
        if self.enabled {
            eprintln!("\n{}:", title);
        }
    }

    /// Print a file with its size in `unit`.
    pub fn file(&self, path: &Path, bytes: u64, unit: SizeUnit) {
        if self.enabled {
            self.log(&file_line(path, bytes, unit));
        }
    }
}

pub(crate) fn file_line(path: &Path, bytes: u64, unit: SizeUnit) -> String {
    format!("{} ({} {})", path.display(), size_in(bytes, unit), unit)
}

#[cfg(test)]
#[path = "verbose_tests.rs"]
mod tests;
