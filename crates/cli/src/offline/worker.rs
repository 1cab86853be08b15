// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Offline-aware transport.
//!
//! [`OfflineWorker`] wraps the network transport and decides per request
//! where the answer comes from:
//!
//! ```text
//! data (under the API root)      static / navigation
//! ─────────────────────────      ───────────────────
//! network ──ok──▶ cache GET      cache ──hit──▶ return
//!    │fail                         │miss
//!    ▼                             ▼
//! cached copy                    network ──200──▶ cache
//!    │none                         │fail
//!    ▼                             ▼
//! GET → 200 []                   document → cached /index.html
//! write → 503 (+ outbox)         otherwise → error
//! ```

use std::sync::{Arc, Mutex};

use serde::Serialize;

use super::cache::{CacheKey, CacheStorage};
use super::outbox::{Outbox, OutboxEntry};
use crate::config::Config;
use crate::error::Result;
use crate::store::{
    Destination, HttpRequest, HttpResponse, Method, SendFuture, Transport, TransportError,
    TransportResult,
};

/// Body of the synthesized response to a write made while offline.
pub const OFFLINE_WRITE_MESSAGE: &str = "Offline - changes will be synced when online";

const ROOT_DOCUMENT: &str = "/index.html";
const SOURCE_CACHE: &str = "cache";
const SOURCE_FALLBACK: &str = "fallback";

/// Lifecycle of the worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkerState {
    /// Not yet activated; requests go straight to the network.
    Installing,
    /// Stale caches purged; not yet intercepting.
    Active,
    /// Every request goes through the cache policy.
    Intercepting,
}

/// Where the worker sends and stores things.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfflinePolicy {
    /// Server address that precache paths are relative to.
    pub origin: String,
    /// Path prefix identifying data requests.
    pub api_root: String,
    pub static_cache: String,
    pub api_cache: String,
    pub precache: Vec<String>,
}

impl OfflinePolicy {
    pub fn from_config(config: &Config) -> Self {
        OfflinePolicy {
            origin: config.base_url.trim_end_matches('/').to_string(),
            api_root: config.api_root.trim_end_matches('/').to_string(),
            static_cache: config.offline.static_cache.clone(),
            api_cache: config.offline.api_cache.clone(),
            precache: config.offline.precache.clone(),
        }
    }

    /// True when `path` addresses the REST API.
    pub fn is_data_path(&self, path: &str) -> bool {
        if self.api_root.is_empty() {
            return true;
        }
        path == self.api_root
            || path
                .strip_prefix(&self.api_root)
                .is_some_and(|rest| rest.starts_with('/'))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.origin, path)
    }
}

/// Result of replaying the outbox.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    /// Requests the server accepted.
    pub replayed: usize,
    /// Requests the server rejected with a client error; they are discarded.
    pub dropped: usize,
    /// Requests still queued.
    pub remaining: usize,
}

/// Transport that serves from caches when the network fails.
pub struct OfflineWorker<T: Transport> {
    network: T,
    caches: CacheStorage,
    policy: OfflinePolicy,
    state: Mutex<WorkerState>,
    outbox: Option<Arc<Mutex<Outbox>>>,
}

impl<T: Transport> OfflineWorker<T> {
    pub fn new(network: T, caches: CacheStorage, policy: OfflinePolicy) -> Self {
        OfflineWorker {
            network,
            caches,
            policy,
            state: Mutex::new(WorkerState::Installing),
            outbox: None,
        }
    }

    /// Queues writes answered while offline into `outbox`.
    pub fn with_outbox(mut self, outbox: Outbox) -> Self {
        self.outbox = Some(Arc::new(Mutex::new(outbox)));
        self
    }

    pub fn state(&self) -> WorkerState {
        self.state
            .lock()
            .map(|s| *s)
            .unwrap_or(WorkerState::Installing)
    }

    fn set_state(&self, state: WorkerState) {
        if let Ok(mut current) = self.state.lock() {
            tracing::debug!(from = ?*current, to = ?state, "offline worker state");
            *current = state;
        }
    }

    pub fn caches(&self) -> &CacheStorage {
        &self.caches
    }

    pub fn policy(&self) -> &OfflinePolicy {
        &self.policy
    }

    pub fn network(&self) -> &T {
        &self.network
    }

    /// Pre-populates the static cache. Returns how many URLs were stored.
    pub async fn install(&self) -> Result<usize> {
        self.caches.open(&self.policy.static_cache).await?;

        let mut stored = 0;
        for path in &self.policy.precache {
            let url = self.policy.url(path);
            match self.network.send(HttpRequest::get(url.clone())).await {
                Ok(response) if response.status == 200 => {
                    self.caches
                        .put(&self.policy.static_cache, CacheKey::get(url), response)
                        .await?;
                    stored += 1;
                }
                Ok(response) => {
                    tracing::warn!(%url, status = response.status, "precache skipped");
                }
                Err(e) => {
                    tracing::warn!(%url, error = %e, "precache failed");
                }
            }
        }
        tracing::info!(stored, total = self.policy.precache.len(), "static cache installed");
        Ok(stored)
    }

    /// Deletes every cache other than the current static and API caches.
    pub async fn activate(&self) -> Result<Vec<String>> {
        let mut purged = Vec::new();
        for name in self.caches.keys().await {
            if name != self.policy.static_cache && name != self.policy.api_cache {
                self.caches.delete(&name).await?;
                tracing::info!(cache = %name, "deleted stale cache");
                purged.push(name);
            }
        }
        self.set_state(WorkerState::Active);
        Ok(purged)
    }

    /// Starts intercepting requests.
    pub fn claim(&self) {
        self.set_state(WorkerState::Intercepting);
    }

    /// Installs, activates and claims in one step. Install failures are
    /// logged and do not prevent activation.
    pub async fn start(&self) -> Result<()> {
        if let Err(e) = self.install().await {
            tracing::warn!(error = %e, "static cache install failed");
        }
        self.activate().await?;
        self.claim();
        Ok(())
    }

    async fn handle(&self, request: HttpRequest) -> TransportResult<HttpResponse> {
        if self.policy.is_data_path(&request.path()) {
            self.network_first(request).await
        } else {
            self.cache_first(request).await
        }
    }

    async fn network_first(&self, request: HttpRequest) -> TransportResult<HttpResponse> {
        let key = CacheKey::for_request(&request);

        match self.network.send(request.clone()).await {
            Ok(response) if response.is_success() => {
                if request.method == Method::Get {
                    if let Err(e) = self
                        .caches
                        .put(&self.policy.api_cache, key, response.clone())
                        .await
                    {
                        tracing::warn!(url = %request.url, error = %e, "failed to cache response");
                    }
                }
                return Ok(response);
            }
            Ok(response) => {
                tracing::debug!(url = %request.url, status = response.status, "network answered with error");
            }
            Err(e) => {
                tracing::debug!(url = %request.url, error = %e, "network unavailable");
            }
        }

        if let Some(cached) = self.caches.lookup(&key).await {
            tracing::info!(url = %request.url, "serving cached response");
            return Ok(cached.mark_offline(SOURCE_CACHE));
        }

        if request.method == Method::Get {
            tracing::info!(url = %request.url, "serving empty list offline");
            return synthesize(200, &serde_json::json!([]));
        }

        self.queue_write(&request);
        synthesize(503, &serde_json::json!({ "error": OFFLINE_WRITE_MESSAGE }))
    }

    async fn cache_first(&self, request: HttpRequest) -> TransportResult<HttpResponse> {
        let key = CacheKey::for_request(&request);
        if let Some(cached) = self.caches.lookup(&key).await {
            return Ok(cached);
        }

        match self.network.send(request.clone()).await {
            Ok(response) => {
                if response.status == 200 {
                    if let Err(e) = self
                        .caches
                        .put(&self.policy.static_cache, key, response.clone())
                        .await
                    {
                        tracing::warn!(url = %request.url, error = %e, "failed to cache response");
                    }
                }
                Ok(response)
            }
            Err(e) => {
                if request.destination == Destination::Document {
                    let root = CacheKey::get(self.policy.url(ROOT_DOCUMENT));
                    if let Some(document) = self.caches.lookup(&root).await {
                        tracing::info!(url = %request.url, "serving cached root document");
                        return Ok(document.mark_offline(SOURCE_CACHE));
                    }
                }
                Err(e)
            }
        }
    }

    fn queue_write(&self, request: &HttpRequest) {
        let Some(outbox) = &self.outbox else {
            return;
        };
        let entry = OutboxEntry::from_request(request);
        let result = match outbox.lock() {
            Ok(mut outbox) => outbox.enqueue(&entry),
            Err(_) => return,
        };
        if let Err(e) = result {
            tracing::error!(url = %request.url, error = %e, "failed to queue offline write");
        }
    }

    /// Number of queued offline writes.
    pub fn pending(&self) -> Result<usize> {
        match &self.outbox {
            Some(outbox) => match outbox.lock() {
                Ok(outbox) => outbox.len(),
                Err(_) => Ok(0),
            },
            None => Ok(0),
        }
    }

    /// Replays queued writes in order straight to the network.
    ///
    /// Stops at the first transport failure or server error; accepted and
    /// client-rejected entries are removed.
    pub async fn sync_outbox(&self) -> Result<SyncReport> {
        let Some(outbox) = &self.outbox else {
            return Ok(SyncReport::default());
        };
        let entries = match outbox.lock() {
            Ok(outbox) => outbox.peek_all()?,
            Err(_) => return Ok(SyncReport::default()),
        };

        let mut report = SyncReport::default();
        let mut done = 0;
        for entry in &entries {
            match self.network.send(entry.to_request()).await {
                Ok(response) if response.is_success() => report.replayed += 1,
                Ok(response) if (400..500).contains(&response.status) => {
                    tracing::warn!(
                        method = %entry.method,
                        url = %entry.url,
                        status = response.status,
                        "server rejected queued write, dropping"
                    );
                    report.dropped += 1;
                }
                Ok(response) => {
                    tracing::warn!(url = %entry.url, status = response.status, "replay stopped");
                    break;
                }
                Err(e) => {
                    tracing::warn!(url = %entry.url, error = %e, "replay stopped");
                    break;
                }
            }
            done += 1;
        }

        if let Ok(mut outbox) = outbox.lock() {
            outbox.remove_first(done)?;
        }
        report.remaining = entries.len() - done;
        tracing::info!(
            replayed = report.replayed,
            dropped = report.dropped,
            remaining = report.remaining,
            "outbox synced"
        );
        Ok(report)
    }
}

fn synthesize(status: u16, body: &serde_json::Value) -> TransportResult<HttpResponse> {
    HttpResponse::json(status, body)
        .map(|r| r.mark_offline(SOURCE_FALLBACK))
        .map_err(|e| TransportError::InvalidRequest(e.to_string()))
}

impl<T: Transport> Transport for OfflineWorker<T> {
    fn send(&self, request: HttpRequest) -> SendFuture<'_> {
        Box::pin(async move {
            match self.state() {
                WorkerState::Intercepting => self.handle(request).await,
                WorkerState::Installing | WorkerState::Active => self.network.send(request).await,
            }
        })
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod tests;
