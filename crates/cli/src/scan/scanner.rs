// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Two-cursor scan driven by a [`FailureTable`].

use serde::Serialize;

use super::table::FailureTable;

/// Integer sentinel for "no match and no marker hit".
///
/// Only needed by callers that consume the integer form; see [`to_sentinel`].
pub const NOT_FOUND: i64 = -1;

/// Why a scan stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HitKind {
    /// The full pattern matched starting at the offset.
    Match,
    /// The marker unit was found at the offset.
    Marker,
}

/// A scan result: where the scan stopped and why.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hit {
    pub offset: usize,
    pub kind: HitKind,
}

impl Hit {
    pub fn matched(offset: usize) -> Self {
        Self {
            offset,
            kind: HitKind::Match,
        }
    }

    pub fn marker(offset: usize) -> Self {
        Self {
            offset,
            kind: HitKind::Marker,
        }
    }
}

/// A compiled pattern, reusable across any number of texts.
///
/// Holds no mutable state; a single scanner can be shared between threads.
#[derive(Debug, Clone)]
pub struct Scanner<'p, T> {
    pattern: &'p [T],
    table: FailureTable,
    marker: Option<T>,
}

impl<'p, T: Copy + PartialEq> Scanner<'p, T> {
    pub fn new(pattern: &'p [T]) -> Self {
        Self {
            pattern,
            table: FailureTable::build(pattern),
            marker: None,
        }
    }

    /// Stop at the first occurrence of `marker`, even mid-match.
    pub fn with_marker(mut self, marker: Option<T>) -> Self {
        self.marker = marker;
        self
    }

    pub fn pattern(&self) -> &'p [T] {
        self.pattern
    }

    pub fn table(&self) -> &FailureTable {
        &self.table
    }

    pub fn marker(&self) -> Option<T> {
        self.marker
    }

    /// Scan `text` for the leftmost match or the first marker, whichever the
    /// scan reaches first.
    ///
    /// The marker is tested before the pattern at every visited position, so
    /// a marker inside a would-be match wins. An empty pattern matches at 0
    /// in any non-empty text; an empty text never produces a hit.
    pub fn find(&self, text: &[T]) -> Option<Hit> {
        let first = *text.first()?;
        if self.pattern.is_empty() {
            return Some(if self.is_marker(first) {
                Hit::marker(0)
            } else {
                Hit::matched(0)
            });
        }

        let len = self.pattern.len();
        let mut matched = 0;
        let mut pos = 0;
        while pos < text.len() {
            let unit = text[pos];
            if self.is_marker(unit) {
                return Some(Hit::marker(pos));
            }

            if unit == self.pattern[matched] {
                matched += 1;
                pos += 1;
                if matched == len {
                    return Some(Hit::matched(pos - len));
                }
            } else if matched == 0 {
                pos += 1;
            } else {
                matched = self.table.fall_back(matched);
            }
        }

        None
    }

    /// Offset of the hit, discarding its kind.
    pub fn find_offset(&self, text: &[T]) -> Option<usize> {
        self.find(text).map(|hit| hit.offset)
    }

    fn is_marker(&self, unit: T) -> bool {
        self.marker == Some(unit)
    }
}

/// One-shot scan of `text` for `pattern`, stopping early at `marker`.
pub fn scan<T: Copy + PartialEq>(text: &[T], pattern: &[T], marker: Option<T>) -> Option<usize> {
    Scanner::new(pattern).with_marker(marker).find_offset(text)
}

/// Byte-wise [`scan`] over string slices.
pub fn scan_str(text: &str, pattern: &str, marker: Option<u8>) -> Option<usize> {
    scan(text.as_bytes(), pattern.as_bytes(), marker)
}

/// Integer form of a scan result: the index, or [`NOT_FOUND`].
pub fn to_sentinel(result: Option<usize>) -> i64 {
    result
        .and_then(|offset| i64::try_from(offset).ok())
        .unwrap_or(NOT_FOUND)
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
