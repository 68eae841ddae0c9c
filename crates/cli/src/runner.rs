// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parallel scan runner with per-file error isolation.
//!
//! Scans files in parallel using rayon. A file that cannot be read is logged
//! and counted as skipped; it never aborts the other scans.

use std::path::PathBuf;

use rayon::prelude::*;
use serde::Serialize;

use crate::file_reader::FileContent;
use crate::scan::{Hit, Location, Scanner};
use crate::walker::WalkedFile;

/// First hit in a file, with its position for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FileHit {
    #[serde(flatten)]
    pub hit: Hit,
    #[serde(flatten)]
    pub location: Location,
}

/// Outcome of scanning one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileScan {
    pub path: PathBuf,
    pub size: u64,
    pub hit: Option<FileHit>,
}

/// All scans of one run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Scanned files, sorted by path.
    pub scans: Vec<FileScan>,
    /// Files that could not be read.
    pub skipped: usize,
}

impl RunSummary {
    pub fn hits(&self) -> impl Iterator<Item = &FileScan> {
        self.scans.iter().filter(|s| s.hit.is_some())
    }

    pub fn hit_count(&self) -> usize {
        self.hits().count()
    }
}

pub struct ScanRunner<'p> {
    scanner: Scanner<'p, u8>,
}

impl<'p> ScanRunner<'p> {
    pub fn new(scanner: Scanner<'p, u8>) -> Self {
        Self { scanner }
    }

    /// Scan every file and collect the results.
    pub fn run(&self, files: &[WalkedFile]) -> RunSummary {
        let results: Vec<Option<FileScan>> =
            files.par_iter().map(|file| self.scan_file(file)).collect();

        let skipped = results.iter().filter(|r| r.is_none()).count();
        let mut scans: Vec<FileScan> = results.into_iter().flatten().collect();
        scans.sort_by(|a, b| a.path.cmp(&b.path));
        scans.dedup_by(|a, b| a.path == b.path);

        RunSummary { scans, skipped }
    }

    fn scan_file(&self, file: &WalkedFile) -> Option<FileScan> {
        let content = match FileContent::read(&file.path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("failed to read {}: {}", file.path.display(), e);
                return None;
            }
        };
        let bytes = content.as_bytes();
        let hit = self.scanner.find(bytes).map(|hit| FileHit {
            hit,
            location: Location::of(bytes, hit.offset),
        });
        tracing::debug!("scanned {} ({} bytes): {:?}", file.path.display(), bytes.len(), hit);

        Some(FileScan {
            path: file.path.clone(),
            size: file.size,
            hit,
        })
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
