// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables read by the client are defined here
//! with typed accessor functions. The variable name constants are generated
//! by `build.rs` and live in the [`vars`] submodule.

use std::path::PathBuf;

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Returns the value of `SJN_CONFIG` if set.
pub fn config_path() -> Option<PathBuf> {
    std::env::var(vars::SJN_CONFIG).ok().map(PathBuf::from)
}

/// Returns the value of `SJN_DATA_DIR` if set.
pub fn data_dir() -> Option<PathBuf> {
    std::env::var(vars::SJN_DATA_DIR).ok().map(PathBuf::from)
}

/// Returns the value of `SJN_BASE_URL` if set and non-empty.
pub fn base_url() -> Option<String> {
    std::env::var(vars::SJN_BASE_URL)
        .ok()
        .filter(|v| !v.trim().is_empty())
}

/// Returns the log filter directive from `SJN_LOG`, if set.
pub fn log_filter() -> Option<String> {
    std::env::var(vars::SJN_LOG).ok()
}

/// Returns `true` if `NO_COLOR=1`.
pub fn no_color() -> bool {
    std::env::var(vars::NO_COLOR).is_ok_and(|v| v == "1")
}

/// Returns `true` if `COLOR=1`.
pub fn force_color() -> bool {
    std::env::var(vars::COLOR).is_ok_and(|v| v == "1")
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
