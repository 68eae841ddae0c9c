// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `needle scan` command implementation.
//!
//! Resolves configuration, walks the requested paths, scans every file in
//! parallel and prints the first hit per file.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use anyhow::Context;
use termcolor::StandardStream;

use needle::cli::ScanArgs;
use needle::color::resolve_color;
use needle::config::{self, Config};
use needle::discovery;
use needle::error::ExitCode;
use needle::report::{ScanReport, write_report};
use needle::runner::ScanRunner;
use needle::scan::Scanner;
use needle::verbose::VerboseLogger;
use needle::walker::{FileWalker, WalkerConfig};

/// Run the `needle scan` command.
pub fn run(args: &ScanArgs, config_path: Option<&Path>) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let roots: Vec<PathBuf> = if args.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        args.paths.clone()
    };
    for root in &roots {
        if !root.exists() {
            anyhow::bail!("{}: no such file or directory", root.display());
        }
    }

    let verbose = VerboseLogger::new(args.verbose);

    // Load config: explicit path, else discovered from the first root
    let config_path = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discovery::find_config(&cwd.join(&roots[0])),
    };
    let config = match &config_path {
        Some(path) => config::load(path).context("invalid configuration")?,
        None => Config::default(),
    };

    // CLI flags override config
    let marker = match args.marker {
        Some(marker) => Some(marker),
        None => config.scan.marker_byte()?,
    };
    let size_unit = args.size_unit.unwrap_or(config.scan.size_unit);
    let mut walker_config = WalkerConfig::from(&config.scan);
    if let Some(depth) = args.max_depth {
        walker_config.max_depth = Some(depth);
    }

    if verbose.is_enabled() {
        verbose.section("Configuration");
        match &config_path {
            Some(path) => verbose.log(&format!("Config: {}", path.display())),
            None => verbose.log("Config: (defaults)"),
        }
        verbose.log(&format!("Pattern: {:?}", args.pattern));
        match marker {
            Some(m) => verbose.log(&format!("Marker: {:?}", char::from(m))),
            None => verbose.log("Marker: (none)"),
        }
        verbose.log(&format!("Exclude: {:?}", walker_config.ignore_patterns));
        verbose.log(&format!("Max depth: {:?}", walker_config.max_depth));
    }

    let walker = FileWalker::new(walker_config);
    let (files, walk_stats) = walker.walk_roots(&roots);

    if verbose.is_enabled() {
        verbose.section("Files");
        for file in &files {
            verbose.file(&file.path, file.size, size_unit);
        }
    }

    let pattern = args.pattern.as_bytes();
    let scanner = Scanner::new(pattern).with_marker(marker);
    let mut summary = ScanRunner::new(scanner).run(&files);
    // Unreadable directories count as skipped alongside unreadable files
    summary.skipped += walk_stats.errors;

    let no_color = args.no_color || std::env::var_os("NO_COLOR").is_some();
    let choice = resolve_color(args.color, no_color, std::io::stdout().is_terminal());
    let mut stdout = StandardStream::stdout(choice);
    let report = ScanReport {
        pattern,
        marker,
        size_unit,
        base: Path::new("."),
        summary: &summary,
    };
    write_report(args.output, &mut stdout, &report)?;

    Ok(if summary.hit_count() > 0 {
        ExitCode::Found
    } else {
        ExitCode::NotFound
    })
}
