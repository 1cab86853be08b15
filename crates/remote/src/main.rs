// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! sjd: REST backend for SJ Notes.
//!
//! Stores notes, todos and goals in SQLite and serves them as JSON
//! collections under a configurable API root.

mod db;
mod error;
mod server;
mod state;

use clap::Parser;
use sj_core::Kind;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use db::{Database, DB_FILE};

/// sjd: SJ Notes record server
#[derive(Parser, Debug)]
#[command(name = "sjd")]
#[command(version)]
#[command(about = "REST backend for SJ Notes")]
struct Args {
    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1:8000")]
    bind: SocketAddr,

    /// Directory for the database file
    #[arg(short, long, default_value = ".")]
    data: PathBuf,

    /// Path prefix for every collection ("/" for none)
    #[arg(long, default_value = server::DEFAULT_API_ROOT)]
    api_root: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let default = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting sjd server");
    info!("  Bind address: {}", args.bind);
    info!("  Data directory: {}", args.data.display());
    info!("  API root: {}", server::normalize_root(&args.api_root));

    let db = Database::open(&args.data.join(DB_FILE))?;
    for kind in Kind::ALL {
        info!("  {}: {} stored", kind, db.count(kind)?);
    }
    let state = state::ServerState::with_database(db);

    server::run(args.bind, state, &args.api_root).await?;

    Ok(())
}
