// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Transient user notifications.
//!
//! Each notification expires after its duration; a zero duration keeps it
//! until dismissed. Expiry is evaluated lazily whenever the active list is
//! read.

use std::fmt;
use std::time::Duration;

use serde::Serialize;
use tokio::time::Instant;

/// Messages shown to the user.
pub mod messages {
    pub const NETWORK: &str = "Network error. Please check your connection.";
    pub const SERVER: &str = "Server error. Please try again later.";
    pub const VALIDATION: &str = "Please check your input and try again.";
    pub const NOT_FOUND: &str = "Item not found.";
    pub const GENERIC: &str = "Something went wrong. Please try again.";
    pub const OFFLINE: &str = "Offline - changes will be synced when online";
    pub const AUTO_SAVE_FAILED: &str = "Auto-save failed. Please save manually.";

    pub const CREATED: &str = "Item created successfully!";
    pub const UPDATED: &str = "Item updated successfully!";
    pub const DELETED: &str = "Item deleted successfully!";
    pub const AUTO_SAVED: &str = "Auto-saved";
}

/// Default lifetime of a notification.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Success,
    Error,
    Warning,
    Info,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Success => "success",
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Info => "info",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub id: u64,
    pub level: Level,
    pub message: String,
    #[serde(skip)]
    expires_at: Option<Instant>,
}

/// The list of notifications currently shown.
#[derive(Debug)]
pub struct Notifier {
    duration: Duration,
    next_id: u64,
    items: Vec<Notification>,
}

impl Default for Notifier {
    fn default() -> Self {
        Notifier::new(DEFAULT_DURATION)
    }
}

impl Notifier {
    pub fn new(duration: Duration) -> Self {
        Notifier {
            duration,
            next_id: 1,
            items: Vec::new(),
        }
    }

    /// Adds a notification with the default duration and returns its id.
    pub fn push(&mut self, level: Level, message: impl Into<String>) -> u64 {
        self.push_for(level, message, self.duration)
    }

    /// Adds a notification that expires after `duration` (zero = sticky).
    pub fn push_for(&mut self, level: Level, message: impl Into<String>, duration: Duration) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let message = message.into();
        tracing::debug!(id, %level, %message, "notification");
        let expires_at = (!duration.is_zero()).then(|| Instant::now() + duration);
        self.items.push(Notification {
            id,
            level,
            message,
            expires_at,
        });
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(Level::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(Level::Error, message)
    }

    pub fn warning(&mut self, message: impl Into<String>) -> u64 {
        self.push(Level::Warning, message)
    }

    pub fn info(&mut self, message: impl Into<String>) -> u64 {
        self.push(Level::Info, message)
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Drops expired notifications and returns the rest, oldest first.
    pub fn active(&mut self) -> &[Notification] {
        let now = Instant::now();
        self.items
            .retain(|n| n.expires_at.is_none_or(|at| at > now));
        &self.items
    }

    /// Removes and returns every notification, expired or not.
    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.items)
    }
}

#[cfg(test)]
#[path = "notify_tests.rs"]
mod tests;
