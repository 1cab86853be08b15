// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use sjrs::Cli;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr, filtered by `SJN_LOG`, then `RUST_LOG`, then `warn`.
fn setup_logging() {
    let filter = sjrs::env::log_filter()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    setup_logging();
    let cli = Cli::parse();
    if let Err(e) = sjrs::run(cli.command) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
