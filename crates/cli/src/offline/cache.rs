// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Named response caches.
//!
//! A [`CacheStorage`] holds any number of named caches, each mapping a
//! request (method and exact URL) to a stored response. Storage is either
//! in memory or a directory with one JSON file per cache; every write
//! replaces the whole file and the last write wins.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::error::Result;
use crate::store::{HttpRequest, HttpResponse, Method};

const CACHE_FILE_EXT: &str = "json";

/// Identifies a cached response.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CacheKey {
    pub method: Method,
    pub url: String,
}

impl CacheKey {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        CacheKey {
            method,
            url: url.into(),
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        CacheKey::new(Method::Get, url)
    }

    pub fn for_request(request: &HttpRequest) -> Self {
        CacheKey::new(request.method, request.url.clone())
    }
}

/// On-disk form of one cache entry.
#[derive(Serialize, Deserialize)]
struct StoredEntry {
    #[serde(flatten)]
    key: CacheKey,
    response: HttpResponse,
}

type Cache = BTreeMap<CacheKey, HttpResponse>;

/// Shared collection of named caches.
#[derive(Clone, Default)]
pub struct CacheStorage {
    caches: Arc<RwLock<BTreeMap<String, Cache>>>,
    dir: Option<PathBuf>,
}

impl CacheStorage {
    /// Storage that lives only as long as the process.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Opens storage persisted under `dir`, loading every cache file found.
    pub async fn open_dir(dir: &Path) -> Result<Self> {
        tokio::fs::create_dir_all(dir).await?;

        let mut caches = BTreeMap::new();
        let mut entries = tokio::fs::read_dir(dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(CACHE_FILE_EXT) {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let content = tokio::fs::read(&path).await?;
            let stored: Vec<StoredEntry> = match serde_json::from_slice(&content) {
                Ok(stored) => stored,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping unreadable cache file");
                    continue;
                }
            };
            let cache: Cache = stored.into_iter().map(|e| (e.key, e.response)).collect();
            caches.insert(name.to_string(), cache);
        }
        tracing::debug!(dir = %dir.display(), count = caches.len(), "opened cache storage");

        Ok(CacheStorage {
            caches: Arc::new(RwLock::new(caches)),
            dir: Some(dir.to_path_buf()),
        })
    }

    /// Creates the cache `name` if it does not exist.
    pub async fn open(&self, name: &str) -> Result<()> {
        let mut caches = self.caches.write().await;
        if caches.contains_key(name) {
            return Ok(());
        }
        caches.insert(name.to_string(), Cache::new());
        self.persist(name, caches.get(name)).await
    }

    /// Stores `response` under `key` in cache `name`, creating the cache if needed.
    pub async fn put(&self, name: &str, key: CacheKey, response: HttpResponse) -> Result<()> {
        let mut caches = self.caches.write().await;
        caches
            .entry(name.to_string())
            .or_default()
            .insert(key, response);
        self.persist(name, caches.get(name)).await
    }

    /// Finds `key` in any cache.
    pub async fn lookup(&self, key: &CacheKey) -> Option<HttpResponse> {
        let caches = self.caches.read().await;
        caches.values().find_map(|cache| cache.get(key).cloned())
    }

    /// Finds `key` in cache `name` only.
    pub async fn lookup_in(&self, name: &str, key: &CacheKey) -> Option<HttpResponse> {
        let caches = self.caches.read().await;
        caches.get(name).and_then(|cache| cache.get(key).cloned())
    }

    /// Names of every cache.
    pub async fn keys(&self) -> Vec<String> {
        self.caches.read().await.keys().cloned().collect()
    }

    /// Keys stored in cache `name`.
    pub async fn entries(&self, name: &str) -> Vec<CacheKey> {
        self.caches
            .read()
            .await
            .get(name)
            .map(|cache| cache.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Deletes cache `name`; returns whether it existed.
    pub async fn delete(&self, name: &str) -> Result<bool> {
        let removed = self.caches.write().await.remove(name).is_some();
        if let Some(dir) = &self.dir {
            match tokio::fs::remove_file(cache_file(dir, name)).await {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(removed)
    }

    async fn persist(&self, name: &str, cache: Option<&Cache>) -> Result<()> {
        let (Some(dir), Some(cache)) = (&self.dir, cache) else {
            return Ok(());
        };
        let stored: Vec<StoredEntry> = cache
            .iter()
            .map(|(key, response)| StoredEntry {
                key: key.clone(),
                response: response.clone(),
            })
            .collect();
        let json = serde_json::to_vec(&stored)?;
        tokio::fs::write(cache_file(dir, name), json).await?;
        Ok(())
    }
}

fn cache_file(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.{CACHE_FILE_EXT}"))
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
