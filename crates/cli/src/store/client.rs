// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Record store client for the REST API.
//!
//! Every call builds `base + resource path`, sends JSON, and maps failures
//! into [`Error`]: a response outside 2xx becomes [`Error::RequestFailed`]
//! and a transport failure becomes [`Error::NetworkUnavailable`]. Calls are
//! never retried.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use sj_core::{Draft, Record};

use super::transport::{HttpRequest, HttpResponse, HttpTransport, Method, Transport};
use crate::config::Config;
use crate::error::{Error, Result};

const HEALTH_PATH: &str = "/health";

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub message: String,
}

/// Client for the notes, todos and goals collections.
pub struct RecordStore<T: Transport = HttpTransport> {
    base: String,
    transport: T,
}

impl RecordStore<HttpTransport> {
    /// Creates a store talking HTTP to the configured server.
    pub fn new(config: &Config) -> Result<Self> {
        let transport = HttpTransport::new(config.timeout())
            .map_err(|e| Error::Config(e.to_string()))?;
        Ok(RecordStore::with_transport(config.api_base(), transport))
    }
}

impl<T: Transport> RecordStore<T> {
    /// Creates a store with a custom transport (offline layer, tests).
    pub fn with_transport(base: impl Into<String>, transport: T) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        RecordStore { base, transport }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Full URL for a path relative to the API root.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn request<B: Serialize>(&self, method: Method, path: &str, body: Option<&B>) -> Result<HttpResponse> {
        let request = HttpRequest::new(method, self.url(path)).with_json(body)?;
        let url = request.url.clone();

        let response = self.transport.send(request).await.map_err(|e| {
            tracing::warn!(%method, %url, error = %e, "request failed");
            Error::NetworkUnavailable(e.to_string())
        })?;

        if !response.is_success() {
            tracing::warn!(%method, %url, status = response.status, "request rejected");
            return Err(Error::RequestFailed {
                status: response.status,
                offline: response.is_offline(),
            });
        }
        tracing::debug!(%method, %url, status = response.status, "request ok");
        Ok(response)
    }

    async fn request_json<B: Serialize, O: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<O> {
        let response = self.request(method, path, body).await?;
        Ok(response.decode()?)
    }

    /// Fetches every record of kind `R`.
    pub async fn list<R: Record>(&self) -> Result<Vec<R>> {
        self.request_json::<(), _>(Method::Get, R::KIND.path(), None).await
    }

    /// Creates a record; the server assigns id and timestamps.
    pub async fn create<R: Record>(&self, draft: &R::Draft) -> Result<R> {
        draft.validate()?;
        self.request_json(Method::Post, R::KIND.path(), Some(draft)).await
    }

    /// Replaces the record `id` with `draft`.
    pub async fn update<R: Record>(&self, id: i64, draft: &R::Draft) -> Result<R> {
        draft.validate()?;
        let path = format!("{}/{}", R::KIND.path(), id);
        self.request_json(Method::Put, &path, Some(draft)).await
    }

    /// Deletes the record `id`. The response body is ignored.
    pub async fn delete<R: Record>(&self, id: i64) -> Result<()> {
        let path = format!("{}/{}", R::KIND.path(), id);
        self.request::<()>(Method::Delete, &path, None).await?;
        Ok(())
    }

    /// Queries the server health endpoint.
    pub async fn health(&self) -> Result<HealthStatus> {
        self.request_json::<(), _>(Method::Get, HEALTH_PATH, None).await
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
