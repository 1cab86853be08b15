// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod list;
pub mod records;
pub mod status;
pub mod tab;

#[cfg(test)]
pub(crate) mod test_helpers;

use std::io::Write;
use std::sync::Arc;

use crate::config::Config;
use crate::dashboard::{Dashboard, FileStore};
use crate::error::{Error, Result};
use crate::notify::{Level, Notification, Notifier};
use crate::offline::{self, OfflineWorker};
use crate::store::{HttpRequest, HttpTransport, RecordStore, SendFuture, Transport};

/// The transport commands talk through: plain HTTP, or HTTP behind the
/// offline worker when the offline cache is enabled.
pub enum Network {
    Direct(HttpTransport),
    Offline(Arc<OfflineWorker<HttpTransport>>),
}

impl Transport for Network {
    fn send(&self, request: HttpRequest) -> SendFuture<'_> {
        match self {
            Network::Direct(http) => http.send(request),
            Network::Offline(worker) => worker.send(request),
        }
    }
}

/// Everything a command needs, opened once per invocation.
pub struct Session {
    pub config: Config,
    pub dashboard: Dashboard<Network>,
    /// The offline worker, when enabled.
    pub worker: Option<Arc<OfflineWorker<HttpTransport>>>,
    /// Direct transport for requests that must not be answered from cache.
    pub http: HttpTransport,
}

/// Opens the dashboard described by `config`.
pub async fn open(config: Config) -> Result<Session> {
    let http = HttpTransport::new(config.timeout()).map_err(|e| Error::Config(e.to_string()))?;

    let (network, worker) = if config.offline.enabled {
        let worker = Arc::new(offline::open_worker(&config, http.clone()).await?);
        (Network::Offline(Arc::clone(&worker)), Some(worker))
    } else {
        (Network::Direct(http.clone()), None)
    };

    let dashboard = Dashboard::new(
        RecordStore::with_transport(config.api_base(), network),
        Box::new(FileStore::new(&config.state_path())),
        Notifier::new(config.notification_duration()),
    )
    .with_autosave_delay(config.autosave_delay());

    Ok(Session {
        config,
        dashboard,
        worker,
        http,
    })
}

/// Loads every collection. Load failures are reported on `err`; the
/// load confirmation is dropped.
pub async fn hydrate<T: Transport + 'static>(
    dashboard: &mut Dashboard<T>,
    err: &mut dyn Write,
) -> Result<()> {
    dashboard.hydrate().await;
    let notes: Vec<Notification> = dashboard
        .notifier_mut()
        .drain()
        .into_iter()
        .filter(|n| n.level != Level::Success)
        .collect();
    print_notifications(&notes, err)
}

/// Writes notifications one per line, prefixed by level unless they
/// report success.
pub fn print_notifications(notes: &[Notification], err: &mut dyn Write) -> Result<()> {
    for note in notes {
        match note.level {
            Level::Success | Level::Info => writeln!(err, "{}", note.message)?,
            level => writeln!(err, "{}: {}", level, note.message)?,
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
