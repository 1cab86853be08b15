// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::offline::{OfflineWorker, SyncReport, WorkerState};
use crate::store::{HealthStatus, RecordStore, Transport};

/// What `status` reports.
#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub server: String,
    pub healthy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Offline worker state, absent when the offline cache is disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offline: Option<WorkerState>,
    pub pending: usize,
}

impl StatusReport {
    pub fn new(server: String, health: Result<HealthStatus>) -> Self {
        let (healthy, version, error) = match health {
            Ok(h) => (h.status == "healthy", Some(h.version), None),
            Err(e) => (false, None, Some(e.to_string())),
        };
        StatusReport {
            server,
            healthy,
            version: version.filter(|v| !v.is_empty()),
            error,
            offline: None,
            pending: 0,
        }
    }

    /// Adds the offline worker's state and queue length.
    pub fn with_worker<T: Transport>(mut self, worker: &OfflineWorker<T>) -> Result<Self> {
        self.offline = Some(worker.state());
        self.pending = worker.pending()?;
        Ok(self)
    }
}

/// Asks the server for its health. `store` should not answer from cache.
pub async fn check<T: Transport>(store: &RecordStore<T>) -> StatusReport {
    let health = store.health().await;
    if let Err(e) = &health {
        tracing::info!(error = %e, "health check failed");
    }
    StatusReport::new(store.base().to_string(), health)
}

pub fn print(report: &StatusReport, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    if format == OutputFormat::Json {
        writeln!(out, "{}", serde_json::to_string_pretty(report)?)?;
        return Ok(());
    }

    let server = match (&report.error, &report.version) {
        (Some(e), _) => format!("unreachable ({})", e.lines().next().unwrap_or_default()),
        (None, Some(v)) if report.healthy => format!("healthy (v{v})"),
        (None, _) if report.healthy => "healthy".to_string(),
        (None, _) => "unhealthy".to_string(),
    };
    writeln!(out, "server:  {} {server}", report.server)?;
    match report.offline {
        Some(state) => writeln!(out, "offline: {}", state_name(state))?,
        None => writeln!(out, "offline: disabled")?,
    }
    writeln!(out, "pending: {} queued write(s)", report.pending)?;
    Ok(())
}

fn state_name(state: WorkerState) -> &'static str {
    match state {
        WorkerState::Installing => "installing",
        WorkerState::Active => "active",
        WorkerState::Intercepting => "intercepting",
    }
}

/// Refills the static cache and replays queued writes.
pub async fn sync<T: Transport>(worker: &OfflineWorker<T>, out: &mut dyn Write) -> Result<SyncReport> {
    let cached = worker.install().await?;
    writeln!(out, "cached {cached} static file(s)")?;
    let report = worker.sync_outbox().await?;
    writeln!(
        out,
        "replayed {}, dropped {}, {} still queued",
        report.replayed, report.dropped, report.remaining
    )?;
    Ok(report)
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
