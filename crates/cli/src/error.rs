// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

use crate::notify::messages;

/// All possible errors that can occur in the sjrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("network unavailable: {0}\n  hint: is the server running? check base_url in the config")]
    NetworkUnavailable(String),

    #[error("request failed with status {status}{}", if *offline { " (offline)" } else { "" })]
    RequestFailed { status: u16, offline: bool },

    #[error("{field} is required")]
    ValidationSkipped { field: &'static str },

    #[error("auto-save failed: {0}")]
    SaveFailed(String),

    #[error("operation cancelled")]
    Cancelled,

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: i64 },

    #[error("invalid tab: '{0}'\n  hint: valid tabs are: notes, todo, goals, about")]
    InvalidTab(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Core(#[from] sj_core::Error),
}

impl Error {
    /// The short message shown to the user in a notification.
    pub fn user_message(&self) -> &'static str {
        match self {
            Error::NetworkUnavailable(_) => messages::NETWORK,
            Error::RequestFailed { status: 404, .. } | Error::NotFound { .. } => {
                messages::NOT_FOUND
            }
            Error::RequestFailed { status: 422, .. }
            | Error::ValidationSkipped { .. }
            | Error::Core(_) => messages::VALIDATION,
            Error::RequestFailed { offline: true, .. } => messages::OFFLINE,
            Error::RequestFailed { .. } => messages::SERVER,
            Error::SaveFailed(_) => messages::AUTO_SAVE_FAILED,
            _ => messages::GENERIC,
        }
    }

    /// True when the failure came from being offline rather than from the server.
    pub fn is_offline(&self) -> bool {
        matches!(
            self,
            Error::NetworkUnavailable(_) | Error::RequestFailed { offline: true, .. }
        )
    }
}

/// A specialized Result type for sjrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
