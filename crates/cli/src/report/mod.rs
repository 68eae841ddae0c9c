// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scan result output in text or JSON format.

mod json;
mod table;
mod text;

use std::path::Path;

use termcolor::WriteColor;

use crate::cli::OutputFormat;
use crate::runner::RunSummary;
use crate::size::SizeUnit;

pub use json::JsonFormatter;
pub use table::format_table;
pub use text::TextFormatter;

/// Everything a formatter needs to render one scan run.
pub struct ScanReport<'a> {
    pub pattern: &'a [u8],
    pub marker: Option<u8>,
    pub size_unit: SizeUnit,
    /// Paths are shown relative to this directory when possible.
    pub base: &'a Path,
    pub summary: &'a RunSummary,
}

impl ScanReport<'_> {
    pub fn pattern_display(&self) -> String {
        String::from_utf8_lossy(self.pattern).into_owned()
    }

    pub fn marker_display(&self) -> Option<String> {
        self.marker.map(|m| char::from(m).to_string())
    }

    pub fn display_path(&self, path: &Path) -> String {
        let relative = path.strip_prefix(self.base).unwrap_or(path);
        let relative = relative.strip_prefix(".").unwrap_or(relative);
        relative.display().to_string()
    }
}

/// Trait for rendering a scan report.
pub trait ReportFormatter {
    fn write(&self, out: &mut dyn WriteColor, report: &ScanReport<'_>) -> anyhow::Result<()>;
}

/// Render `report` in `format` to `out`.
pub fn write_report(
    format: OutputFormat,
    out: &mut dyn WriteColor,
    report: &ScanReport<'_>,
) -> anyhow::Result<()> {
    let formatter: Box<dyn ReportFormatter> = match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    };
    formatter.write(out, report)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
