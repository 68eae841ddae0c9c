// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Prefix-failure table construction.

use serde::Serialize;

/// Per-position length of the longest proper prefix that is also a suffix.
///
/// Entry `i` describes `pattern[..=i]`. The table has exactly one entry per
/// pattern unit and is empty for an empty pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FailureTable {
    entries: Vec<usize>,
}

impl FailureTable {
    /// Build the table for `pattern`.
    pub fn build<T: PartialEq>(pattern: &[T]) -> Self {
        let mut entries = Vec::with_capacity(pattern.len());
        if pattern.is_empty() {
            return Self { entries };
        }

        // A single unit has no proper prefix.
        entries.push(0);

        let mut candidate = 0;
        let mut cursor = 1;
        while cursor < pattern.len() {
            if pattern[cursor] == pattern[candidate] {
                candidate += 1;
                entries.push(candidate);
                cursor += 1;
            } else if candidate == 0 {
                entries.push(0);
                cursor += 1;
            } else {
                candidate = entries[candidate - 1];
            }
        }

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.entries
    }

    /// Entry for pattern position `index`, if in range.
    pub fn get(&self, index: usize) -> Option<usize> {
        self.entries.get(index).copied()
    }

    /// Pattern cursor to resume from after `matched` units matched and the
    /// next one did not. `matched` must be in `1..=len`.
    pub(crate) fn fall_back(&self, matched: usize) -> usize {
        self.entries[matched - 1]
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
