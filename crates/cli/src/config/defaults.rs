// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.
//!
//! Config structs delegate to these constants via their `default_*` methods.

/// Config file name searched for by discovery.
pub const CONFIG_FILE: &str = "needle.toml";

/// Only supported config schema version.
pub const VERSION: i64 = 1;

/// Default walker settings.
pub mod walk {
    /// Maximum directory depth below each scan root (100).
    pub const MAX_DEPTH: usize = 100;

    /// Respect .gitignore files.
    pub const GIT_IGNORE: bool = true;

    /// Scan hidden files and directories.
    pub const INCLUDE_HIDDEN: bool = false;
}
