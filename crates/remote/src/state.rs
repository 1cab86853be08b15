// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Server state management.
//!
//! Wraps the record database for shared access across handlers.

use chrono::Utc;
use std::sync::Arc;
use tokio::sync::Mutex;

use sj_core::Draft;

use crate::db::{Database, Stored};
use crate::error::Result;

/// Shared server state containing the record database.
#[derive(Clone)]
pub struct ServerState {
    inner: Arc<ServerStateInner>,
}

struct ServerStateInner {
    /// The record database; one request touches it at a time.
    db: Mutex<Database>,
}

impl ServerState {
    pub fn with_database(db: Database) -> Self {
        ServerState {
            inner: Arc::new(ServerStateInner { db: Mutex::new(db) }),
        }
    }

    pub async fn list<R: Stored>(&self) -> Result<Vec<R>> {
        let db = self.inner.db.lock().await;
        db.list()
    }

    /// Validates `draft` and stores it as a new record.
    pub async fn create<R: Stored>(&self, draft: R::Draft) -> Result<R> {
        draft.validate()?;
        let db = self.inner.db.lock().await;
        db.create(&draft, Utc::now())
    }

    /// Validates `draft` and replaces record `id` with it.
    pub async fn update<R: Stored>(&self, id: i64, draft: R::Draft) -> Result<R> {
        draft.validate()?;
        let db = self.inner.db.lock().await;
        db.update(id, &draft, Utc::now())
    }

    pub async fn delete<R: Stored>(&self, id: i64) -> Result<()> {
        let db = self.inner.db.lock().await;
        db.delete::<R>(id)
    }
}
