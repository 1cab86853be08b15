// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Outbox of writes made while offline.
//!
//! Uses JSONL format for durability: each request is written as a single line
//! and fsynced immediately. When the network is back, queued requests are
//! replayed to the server in order.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::store::{HttpRequest, Method};

/// A write request waiting to be replayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboxEntry {
    pub method: Method,
    pub url: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<(String, String)>,
    /// JSON body as sent by the client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub queued_at: DateTime<Utc>,
}

impl OutboxEntry {
    pub fn from_request(request: &HttpRequest) -> Self {
        OutboxEntry {
            method: request.method,
            url: request.url.clone(),
            headers: request.headers.clone(),
            body: request
                .body
                .as_ref()
                .map(|b| String::from_utf8_lossy(b).into_owned()),
            queued_at: Utc::now(),
        }
    }

    pub fn to_request(&self) -> HttpRequest {
        HttpRequest {
            headers: self.headers.clone(),
            body: self.body.as_ref().map(|b| b.clone().into_bytes()),
            ..HttpRequest::new(self.method, self.url.clone())
        }
    }
}

/// Append-only queue of offline writes.
pub struct Outbox {
    path: PathBuf,
}

impl Outbox {
    /// Create or open an outbox at the given path.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Outbox {
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends a request; it is persisted before this returns.
    pub fn enqueue(&mut self, entry: &OutboxEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let json = serde_json::to_string(entry)?;
        writeln!(file, "{}", json)?;
        file.sync_all()?;

        tracing::debug!(method = %entry.method, url = %entry.url, "queued offline write");
        Ok(())
    }

    /// Read all queued requests without removing them.
    pub fn peek_all(&self) -> Result<Vec<OutboxEntry>> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut entries = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            entries.push(serde_json::from_str(&line)?);
        }

        Ok(entries)
    }

    pub fn clear(&mut self) -> Result<()> {
        File::create(&self.path)?;
        Ok(())
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.peek_all()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Remove the first `count` requests, keeping the rest in order.
    pub fn remove_first(&mut self, count: usize) -> Result<()> {
        let entries = self.peek_all()?;
        if count >= entries.len() {
            return self.clear();
        }

        let mut file = File::create(&self.path)?;
        for entry in &entries[count..] {
            let json = serde_json::to_string(entry)?;
            writeln!(file, "{}", json)?;
        }
        file.sync_all()?;

        Ok(())
    }
}

#[cfg(test)]
#[path = "outbox_tests.rs"]
mod tests;
