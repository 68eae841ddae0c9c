// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `needle table` command implementation.

use needle::cli::TableArgs;
use needle::error::ExitCode;
use needle::report::format_table;
use needle::scan::FailureTable;

/// Print the failure table for `args.pattern`.
pub fn run(args: &TableArgs) -> anyhow::Result<ExitCode> {
    let pattern = args.pattern.as_bytes();
    let table = FailureTable::build(pattern);
    println!("{}", format_table(args.output, pattern, &table)?.trim_end());
    Ok(ExitCode::Found)
}
