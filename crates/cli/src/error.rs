// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Process exit codes.

use crate::config::ConfigError;

/// Exit status of a `needle` invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// At least one file had a hit (match or marker).
    Found = 0,
    /// No file had a hit.
    NotFound = 1,
    /// Invalid or unreadable configuration.
    ConfigError = 2,
    /// Any other failure.
    InternalError = 3,
}

impl ExitCode {
    /// Classify a command error.
    pub fn for_error(err: &anyhow::Error) -> Self {
        if err.chain().any(|cause| cause.is::<ConfigError>()) {
            ExitCode::ConfigError
        } else {
            ExitCode::InternalError
        }
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
