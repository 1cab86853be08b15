// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Mock transport shared by store, offline and dashboard tests.

#![allow(clippy::unwrap_used)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use super::transport::{
    HttpRequest, HttpResponse, Method, SendFuture, Transport, TransportError, TransportResult,
};

#[derive(Default)]
struct MockInner {
    routes: HashMap<(Method, String), HttpResponse>,
    queued: VecDeque<TransportResult<HttpResponse>>,
    requests: Vec<HttpRequest>,
    offline: bool,
}

/// Mock transport for testing without real sockets.
///
/// Resolution order: offline → connection error; queued results (FIFO);
/// routed responses by method and path; otherwise a 404.
#[derive(Clone, Default)]
pub struct MockTransport {
    inner: Arc<Mutex<MockInner>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers every `method` request for `path` with `response`.
    pub fn route(&self, method: Method, path: &str, response: HttpResponse) {
        self.inner
            .lock()
            .unwrap()
            .routes
            .insert((method, path.to_string()), response);
    }

    /// Answers `method path` with a JSON body.
    pub fn route_json<T: serde::Serialize>(&self, method: Method, path: &str, status: u16, body: &T) {
        self.route(method, path, HttpResponse::json(status, body).unwrap());
    }

    /// Queues a one-shot result returned before any route.
    pub fn queue(&self, result: TransportResult<HttpResponse>) {
        self.inner.lock().unwrap().queued.push_back(result);
    }

    pub fn set_offline(&self, offline: bool) {
        self.inner.lock().unwrap().offline = offline;
    }

    /// Every request sent so far.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.inner.lock().unwrap().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.inner.lock().unwrap().requests.len()
    }
}

impl Transport for MockTransport {
    fn send(&self, request: HttpRequest) -> SendFuture<'_> {
        let inner = Arc::clone(&self.inner);
        Box::pin(async move {
            let mut inner = inner.lock().unwrap();
            let key = (request.method, request.path());
            inner.requests.push(request);

            if inner.offline {
                return Err(TransportError::ConnectionFailed("mock offline".into()));
            }
            if let Some(result) = inner.queued.pop_front() {
                return result;
            }
            Ok(inner
                .routes
                .get(&key)
                .cloned()
                .unwrap_or_else(|| HttpResponse::new(404, b"{\"detail\":\"Not Found\"}".to_vec())))
        })
    }
}
