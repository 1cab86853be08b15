// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Dashboards over a mock server shared by command tests.

#![allow(clippy::unwrap_used)]

use chrono::{TimeZone, Utc};
use serde_json::json;
use sj_core::QueryContext;

use crate::dashboard::{Dashboard, MemoryStore};
use crate::notify::Notifier;
use crate::store::test_helpers::MockTransport;
use crate::store::{Method, RecordStore};

/// A dashboard pinned to 2026-03-10 with two records of each kind served.
pub fn seeded() -> (MockTransport, Dashboard<MockTransport>) {
    let mock = MockTransport::new();
    mock.route_json(
        Method::Get,
        "/api/notes",
        200,
        &json!([
            {"id": 1, "title": "Groceries", "tags": ["home"], "created_at": "2026-03-09T00:00:00Z"},
            {"id": 2, "title": "Books", "tags": ["reading"], "created_at": "2026-03-05T00:00:00Z"},
        ]),
    );
    mock.route_json(
        Method::Get,
        "/api/todos",
        200,
        &json!([
            {"id": 10, "title": "Pay rent", "date": "2026-03-01", "done": false},
            {"id": 11, "title": "Call mom", "date": "2026-03-12", "done": true},
        ]),
    );
    mock.route_json(
        Method::Get,
        "/api/goals",
        200,
        &json!([
            {"id": 20, "title": "Run 10k", "progress": 40},
            {"id": 21, "title": "Read 12 books", "progress": 100},
        ]),
    );
    let dashboard = Dashboard::new(
        RecordStore::with_transport("http://h/api", mock.clone()),
        Box::new(MemoryStore::new()),
        Notifier::default(),
    )
    .with_context(QueryContext::at(
        Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap(),
    ));
    (mock, dashboard)
}

pub fn text(buf: Vec<u8>) -> String {
    String::from_utf8(buf).unwrap()
}
