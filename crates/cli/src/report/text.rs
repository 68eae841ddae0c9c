// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format report output.

use termcolor::WriteColor;

use super::{ReportFormatter, ScanReport};
use crate::color::scheme;
use crate::scan::HitKind;

/// One line per hit (`path:line:column: ...`) followed by a summary.
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn write(&self, out: &mut dyn WriteColor, report: &ScanReport<'_>) -> anyhow::Result<()> {
        for scan in report.summary.hits() {
            let Some(found) = scan.hit else { continue };

            out.set_color(&scheme::path())?;
            write!(out, "{}", report.display_path(&scan.path))?;
            out.reset()?;
            write!(out, ":")?;
            out.set_color(&scheme::line_number())?;
            write!(out, "{}:{}", found.location.line, found.location.column)?;
            out.reset()?;
            write!(out, ": ")?;

            match found.hit.kind {
                HitKind::Match => {
                    out.set_color(&scheme::matched())?;
                    write!(out, "match")?;
                }
                HitKind::Marker => {
                    out.set_color(&scheme::marker())?;
                    write!(out, "marker")?;
                }
            }
            out.reset()?;
            writeln!(out, " at byte {}", found.hit.offset)?;
        }

        let summary = report.summary;
        out.set_color(&scheme::summary())?;
        write!(out, "{} of {} files matched", summary.hit_count(), summary.scans.len())?;
        out.reset()?;
        if summary.skipped > 0 {
            write!(out, " ({} skipped)", summary.skipped)?;
        }
        writeln!(out)?;
        Ok(())
    }
}
