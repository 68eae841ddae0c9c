// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! File sizes expressed in binary units.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Binary size unit. Each step is a factor of 1024.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SizeUnit {
    B,
    #[default]
    KB,
    MB,
    GB,
    TB,
    PB,
    EB,
    ZB,
    YB,
}

impl SizeUnit {
    pub const ALL: [SizeUnit; 9] = [
        SizeUnit::B,
        SizeUnit::KB,
        SizeUnit::MB,
        SizeUnit::GB,
        SizeUnit::TB,
        SizeUnit::PB,
        SizeUnit::EB,
        SizeUnit::ZB,
        SizeUnit::YB,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SizeUnit::B => "B",
            SizeUnit::KB => "KB",
            SizeUnit::MB => "MB",
            SizeUnit::GB => "GB",
            SizeUnit::TB => "TB",
            SizeUnit::PB => "PB",
            SizeUnit::EB => "EB",
            SizeUnit::ZB => "ZB",
            SizeUnit::YB => "YB",
        }
    }

    /// Power of 1024 this unit represents.
    fn exponent(self) -> u32 {
        self as u32
    }
}

/// `bytes` in `unit`, rounded down.
///
/// Units beyond the range of `u64` (ZB, YB) always yield 0.
pub fn size_in(bytes: u64, unit: SizeUnit) -> u64 {
    1024u64
        .checked_pow(unit.exponent())
        .map_or(0, |divisor| bytes / divisor)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown size unit '{name}', valid units are {}", valid_names())]
pub struct SizeUnitError {
    pub name: String,
}

fn valid_names() -> String {
    SizeUnit::ALL
        .iter()
        .map(|u| u.name())
        .collect::<Vec<_>>()
        .join(", ")
}

impl FromStr for SizeUnit {
    type Err = SizeUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SizeUnit::ALL
            .into_iter()
            .find(|u| u.name() == s)
            .ok_or_else(|| SizeUnitError {
                name: s.to_string(),
            })
    }
}

impl TryFrom<String> for SizeUnit {
    type Error = SizeUnitError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SizeUnit> for String {
    fn from(unit: SizeUnit) -> Self {
        unit.name().to_string()
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "size_tests.rs"]
mod tests;
