// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Record store client.
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ RecordStore │────►│  Transport  │────►│  REST API   │
//! │             │◄────│   (trait)   │◄────│   (sjd)     │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! The transport is either [`HttpTransport`] directly or the offline
//! worker wrapping it.

mod client;
mod transport;

pub use client::{HealthStatus, RecordStore};
pub use transport::{
    Destination, HttpRequest, HttpResponse, HttpTransport, Method, SendFuture, Transport,
    TransportError, TransportResult, OFFLINE_HEADER,
};

#[cfg(test)]
pub(crate) mod test_helpers;
