// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Byte offset to line/column conversion for reporting.

use serde::Serialize;

/// 1-based line and byte column of an offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    /// Locate `offset` within `content`. Offsets past the end clamp to it.
    pub fn of(content: &[u8], offset: usize) -> Self {
        let before = &content[..offset.min(content.len())];
        let line = memchr::memchr_iter(b'\n', before).count() + 1;
        let line_start = memchr::memrchr(b'\n', before).map_or(0, |i| i + 1);
        Self {
            line,
            column: before.len() - line_start + 1,
        }
    }
}

#[cfg(test)]
#[path = "location_tests.rs"]
mod tests;
