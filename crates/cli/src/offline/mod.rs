// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Offline cache layer.
//!
//! Sits beneath the record store as another [`Transport`]: data requests
//! are network-first with a cached or synthesized fallback, static requests
//! are cache-first.

mod cache;
mod outbox;
mod worker;

pub use cache::{CacheKey, CacheStorage};
pub use outbox::{Outbox, OutboxEntry};
pub use worker::{OfflinePolicy, OfflineWorker, SyncReport, WorkerState, OFFLINE_WRITE_MESSAGE};

use crate::config::Config;
use crate::error::Result;
use crate::store::Transport;

/// Builds a worker over `network` using the persisted caches and, when
/// background sync is on, the outbox under the data directory.
///
/// The worker is returned activated but not installed; call
/// [`OfflineWorker::install`] to fill the static cache.
pub async fn open_worker<T: Transport>(config: &Config, network: T) -> Result<OfflineWorker<T>> {
    let caches = CacheStorage::open_dir(&config.cache_dir()).await?;
    let mut worker = OfflineWorker::new(network, caches, OfflinePolicy::from_config(config));
    if config.offline.background_sync {
        worker = worker.with_outbox(Outbox::open(&config.outbox_path())?);
    }
    worker.activate().await?;
    worker.claim();
    Ok(worker)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
