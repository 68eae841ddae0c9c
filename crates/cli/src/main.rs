// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod cmd_scan;
mod cmd_table;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use needle::cli::{Cli, Command};
use needle::error::ExitCode;

/// Log filter env var, e.g. `NEEDLE_LOG=needle=debug`.
const LOG_ENV: &str = "NEEDLE_LOG";

fn main() -> std::process::ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let result = match &cli.command {
        Command::Scan(args) => cmd_scan::run(args, cli.config.as_deref()),
        Command::Table(args) => cmd_table::run(args),
    };

    match result {
        Ok(code) => code.into(),
        Err(err) => {
            eprintln!("needle: {:#}", err);
            ExitCode::for_error(&err).into()
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
