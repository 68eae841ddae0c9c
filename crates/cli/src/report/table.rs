// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Failure table output for `needle table`.

use std::fmt::Write;

use serde_json::json;

use crate::cli::OutputFormat;
use crate::scan::FailureTable;

/// Render a pattern's failure table.
///
/// Text output has one row per pattern position: index, unit (escaped if not
/// printable ASCII) and table entry.
pub fn format_table(
    format: OutputFormat,
    pattern: &[u8],
    table: &FailureTable,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            writeln!(out, "{:>5}  {:<6}{}", "pos", "unit", "border")?;
            for (pos, (&unit, &border)) in pattern.iter().zip(table.as_slice()).enumerate() {
                writeln!(out, "{:>5}  {:<6}{}", pos, escape_unit(unit), border)?;
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let output = json!({
                "pattern": String::from_utf8_lossy(pattern),
                "table": table,
            });
            Ok(serde_json::to_string_pretty(&output)?)
        }
    }
}

fn escape_unit(unit: u8) -> String {
    std::ascii::escape_default(unit).to_string()
}
