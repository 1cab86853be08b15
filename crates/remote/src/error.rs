// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the sjd server and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use sj_core::Kind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{resource} not found")]
    NotFound { resource: &'static str },

    #[error(transparent)]
    Invalid(#[from] sj_core::Error),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("corrupted data: {0}")]
    CorruptedData(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Capitalized resource name used in error details.
pub fn resource_name(kind: Kind) -> &'static str {
    match kind {
        Kind::Notes => "Note",
        Kind::Todos => "Todo",
        Kind::Goals => "Goal",
    }
}

impl Error {
    pub fn not_found(kind: Kind) -> Self {
        Error::NotFound {
            resource: resource_name(kind),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::Database(_) | Error::CorruptedData(_) | Error::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
            "Internal server error".to_string()
        } else {
            tracing::debug!(error = %self, "request rejected");
            self.to_string()
        };
        (status, Json(ErrorBody { detail })).into_response()
    }
}
