// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! File discovery for scan roots.
//!
//! Wraps `ignore::WalkBuilder` so gitignore rules, hidden-file filtering,
//! depth limits and configured exclude patterns apply uniformly.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use ignore::overrides::{Override, OverrideBuilder};

use crate::config::ScanConfig;
use crate::config::defaults::walk;

#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Maximum depth below the root (None = unlimited).
    pub max_depth: Option<usize>,
    /// Respect .gitignore and .ignore files.
    pub git_ignore: bool,
    /// Skip hidden files and directories.
    pub hidden: bool,
    /// Gitignore-style patterns to exclude.
    pub ignore_patterns: Vec<String>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            max_depth: Some(walk::MAX_DEPTH),
            git_ignore: walk::GIT_IGNORE,
            hidden: !walk::INCLUDE_HIDDEN,
            ignore_patterns: Vec::new(),
        }
    }
}

impl From<&ScanConfig> for WalkerConfig {
    fn from(config: &ScanConfig) -> Self {
        Self {
            max_depth: Some(config.max_depth),
            git_ignore: config.git_ignore,
            hidden: !config.include_hidden,
            ignore_patterns: config.exclude.clone(),
        }
    }
}

/// A file found by the walker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedFile {
    pub path: PathBuf,
    pub size: u64,
    pub depth: usize,
}

/// Counters collected during a walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    pub files_found: usize,
    pub errors: usize,
}

pub struct FileWalker {
    config: WalkerConfig,
}

impl FileWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Walk `root` and collect every regular file, sorted by path.
    ///
    /// A file root yields just that file. Unreadable entries are counted in
    /// [`WalkStats::errors`] and skipped.
    pub fn walk_collect(&self, root: &Path) -> (Vec<WalkedFile>, WalkStats) {
        let mut builder = WalkBuilder::new(root);
        builder
            .max_depth(self.config.max_depth)
            .hidden(self.config.hidden)
            .git_ignore(self.config.git_ignore)
            .git_global(self.config.git_ignore)
            .git_exclude(self.config.git_ignore)
            .ignore(self.config.git_ignore)
            .parents(self.config.git_ignore)
            .sort_by_file_name(|a, b| a.cmp(b));
        if let Some(overrides) = self.overrides(root) {
            builder.overrides(overrides);
        }

        let mut files = Vec::new();
        let mut stats = WalkStats::default();
        for entry in builder.build() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("walk error: {}", e);
                    stats.errors += 1;
                    continue;
                }
            };
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            let size = match entry.metadata() {
                Ok(meta) => meta.len(),
                Err(e) => {
                    tracing::warn!("cannot stat {}: {}", entry.path().display(), e);
                    stats.errors += 1;
                    continue;
                }
            };
            files.push(WalkedFile {
                depth: entry.depth(),
                path: entry.into_path(),
                size,
            });
        }

        stats.files_found = files.len();
        (files, stats)
    }

    /// Walk every root in order, merging the results.
    ///
    /// A file reachable from more than one root (e.g. `.` and `sub`) is kept
    /// once, under the path of the first root that reached it. Stats are
    /// summed across roots.
    pub fn walk_roots(&self, roots: &[PathBuf]) -> (Vec<WalkedFile>, WalkStats) {
        let mut seen = HashSet::new();
        let mut files = Vec::new();
        let mut stats = WalkStats::default();
        for root in roots {
            let (found, root_stats) = self.walk_collect(root);
            tracing::debug!(
                "{}: {} files, {} errors",
                root.display(),
                root_stats.files_found,
                root_stats.errors
            );
            stats.errors += root_stats.errors;
            for file in found {
                let key = std::fs::canonicalize(&file.path).unwrap_or_else(|_| file.path.clone());
                if seen.insert(key) {
                    files.push(file);
                }
            }
        }

        stats.files_found = files.len();
        (files, stats)
    }

    /// Exclude patterns as negated overrides. Invalid patterns are skipped.
    fn overrides(&self, root: &Path) -> Option<Override> {
        if self.config.ignore_patterns.is_empty() {
            return None;
        }
        let mut builder = OverrideBuilder::new(root);
        for pattern in &self.config.ignore_patterns {
            if let Err(e) = builder.add(&format!("!{}", pattern)) {
                tracing::warn!("invalid exclude pattern {}: {}", pattern, e);
            }
        }
        match builder.build() {
            Ok(overrides) => Some(overrides),
            Err(e) => {
                tracing::warn!("failed to build exclude patterns: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
