// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for sj-core operations.

use thiserror::Error;

/// All possible errors that can occur in sj-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid kind: '{0}'\n  hint: valid kinds are: notes, todos, goals")]
    InvalidKind(String),

    #[error("invalid filter '{id}' for {kind}\n  hint: valid filters are: {valid}")]
    InvalidFilter {
        kind: &'static str,
        id: String,
        valid: String,
    },

    #[error("invalid color: '{0}'\n  hint: colors look like bg-blue-100")]
    InvalidColor(String),

    #[error("invalid date: '{0}'\n  hint: dates use the YYYY-MM-DD format")]
    InvalidDate(String),

    #[error("index {index} out of range for a list of {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Error::Validation {
            field,
            message: message.into(),
        }
    }
}

/// A specialized Result type for sj-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
