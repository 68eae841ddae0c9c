// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::color::ColorMode;
use crate::config::parse_marker;
use crate::size::SizeUnit;

/// Find the first occurrence of a pattern in files, with an optional early-exit marker
#[derive(Parser)]
#[command(name = "needle")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "NEEDLE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Scan files for the first occurrence of a pattern
    Scan(ScanArgs),
    /// Print the failure table of a pattern
    Table(TableArgs),
}

#[derive(clap::Args)]
pub struct ScanArgs {
    /// Pattern to search for (matched byte for byte)
    #[arg(value_name = "PATTERN", allow_hyphen_values = true)]
    pub pattern: String,

    /// Files or directories to scan (default: current directory)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Stop a file's scan at the first occurrence of this ASCII character
    #[arg(short, long, value_name = "CHAR", value_parser = parse_marker)]
    pub marker: Option<u8>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,

    /// Maximum directory depth to traverse
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Unit for reported file sizes (B, KB, MB, GB, TB, PB, EB, ZB, YB)
    #[arg(long, value_name = "UNIT")]
    pub size_unit: Option<SizeUnit>,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[derive(clap::Args)]
pub struct TableArgs {
    /// Pattern to build the table for
    #[arg(value_name = "PATTERN", allow_hyphen_values = true)]
    pub pattern: String,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
