// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format report output.

use serde_json::json;
use termcolor::WriteColor;

use super::{ReportFormatter, ScanReport};
use crate::size::size_in;

/// JSON format report formatter.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn write(&self, out: &mut dyn WriteColor, report: &ScanReport<'_>) -> anyhow::Result<()> {
        let summary = report.summary;

        let hits: Vec<serde_json::Value> = summary
            .scans
            .iter()
            .filter_map(|scan| {
                let found = scan.hit?;
                Some(json!({
                    "path": report.display_path(&scan.path),
                    "size": size_in(scan.size, report.size_unit),
                    "offset": found.hit.offset,
                    "kind": found.hit.kind,
                    "line": found.location.line,
                    "column": found.location.column,
                }))
            })
            .collect();

        let output = json!({
            "pattern": report.pattern_display(),
            "marker": report.marker_display(),
            "size_unit": report.size_unit,
            "files_scanned": summary.scans.len(),
            "skipped": summary.skipped,
            "hits": hits,
        });

        serde_json::to_writer_pretty(&mut *out, &output)?;
        writeln!(out)?;
        Ok(())
    }
}
