// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loaded from `needle.toml`.
//!
//! ```toml
//! version = 1
//!
//! [scan]
//! marker = "#"
//! exclude = ["target/"]
//! max_depth = 100
//! include_hidden = false
//! git_ignore = true
//! size_unit = "KB"
//! ```

pub mod defaults;

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::size::SizeUnit;

/// Top-level keys understood by [`load`]. Others are reported and ignored.
const KNOWN_KEYS: &[&str] = &["version", "scan"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unsupported config version {0} (expected {expected})", expected = defaults::VERSION)]
    UnsupportedVersion(i64),

    #[error("marker must be a single ASCII character, got {0:?}")]
    InvalidMarker(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_version")]
    pub version: i64,

    #[serde(default)]
    pub scan: ScanConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            scan: ScanConfig::default(),
        }
    }
}

impl Config {
    pub(crate) fn default_version() -> i64 {
        defaults::VERSION
    }
}

/// `[scan]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanConfig {
    /// Single ASCII character that stops a file's scan early.
    #[serde(default)]
    pub marker: Option<String>,

    /// Gitignore-style patterns excluded from the walk.
    #[serde(default)]
    pub exclude: Vec<String>,

    #[serde(default = "ScanConfig::default_max_depth")]
    pub max_depth: usize,

    #[serde(default = "ScanConfig::default_git_ignore")]
    pub git_ignore: bool,

    #[serde(default = "ScanConfig::default_include_hidden")]
    pub include_hidden: bool,

    /// Unit for file sizes in verbose and JSON output.
    #[serde(default)]
    pub size_unit: SizeUnit,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            marker: None,
            exclude: Vec::new(),
            max_depth: Self::default_max_depth(),
            git_ignore: Self::default_git_ignore(),
            include_hidden: Self::default_include_hidden(),
            size_unit: SizeUnit::default(),
        }
    }
}

impl ScanConfig {
    pub(crate) fn default_max_depth() -> usize {
        defaults::walk::MAX_DEPTH
    }

    pub(crate) fn default_git_ignore() -> bool {
        defaults::walk::GIT_IGNORE
    }

    pub(crate) fn default_include_hidden() -> bool {
        defaults::walk::INCLUDE_HIDDEN
    }

    /// The configured marker as a byte.
    pub fn marker_byte(&self) -> Result<Option<u8>, ConfigError> {
        self.marker.as_deref().map(parse_marker).transpose()
    }
}

/// Parse a marker given as text into the byte the scanner compares against.
pub fn parse_marker(s: &str) -> Result<u8, ConfigError> {
    match s.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(ConfigError::InvalidMarker(s.to_string())),
    }
}

/// Load and validate a config file.
///
/// An empty (or whitespace-only) file yields the defaults. Unknown top-level
/// keys are logged and ignored.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content, path)
}

/// Parse config text. `path` is only used in error messages.
pub fn parse(content: &str, path: &Path) -> Result<Config, ConfigError> {
    if content.trim().is_empty() {
        tracing::debug!("{} is empty, using defaults", path.display());
        return Ok(Config::default());
    }

    let parse_err = |source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    };

    let table: toml::Table = toml::from_str(content).map_err(parse_err)?;
    for key in table.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            tracing::warn!("{}: unknown key '{}' ignored", path.display(), key);
        }
    }

    let config: Config = toml::from_str(content).map_err(parse_err)?;
    if config.version != defaults::VERSION {
        return Err(ConfigError::UnsupportedVersion(config.version));
    }
    config.scan.marker_byte()?;

    Ok(config)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
