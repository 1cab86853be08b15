// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use std::path::PathBuf;

#[test]
fn test_vars_constants() {
    assert_eq!(vars::SJN_CONFIG, "SJN_CONFIG");
    assert_eq!(vars::SJN_DATA_DIR, "SJN_DATA_DIR");
    assert_eq!(vars::SJN_LOG, "SJN_LOG");
    assert_eq!(vars::SJN_BASE_URL, "SJN_BASE_URL");
    assert_eq!(vars::NO_COLOR, "NO_COLOR");
    assert_eq!(vars::COLOR, "COLOR");
}

#[test]
fn test_config_path_set_and_unset() {
    std::env::set_var("SJN_CONFIG", "/tmp/sjn-test/config.toml");
    assert_eq!(
        config_path(),
        Some(PathBuf::from("/tmp/sjn-test/config.toml"))
    );
    std::env::remove_var("SJN_CONFIG");
    assert_eq!(config_path(), None);
}

#[test]
fn test_data_dir_set_and_unset() {
    std::env::set_var("SJN_DATA_DIR", "/tmp/sjn-data");
    assert_eq!(data_dir(), Some(PathBuf::from("/tmp/sjn-data")));
    std::env::remove_var("SJN_DATA_DIR");
    assert_eq!(data_dir(), None);
}

#[test]
fn test_base_url_ignores_blank() {
    std::env::set_var("SJN_BASE_URL", "  ");
    assert_eq!(base_url(), None);
    std::env::set_var("SJN_BASE_URL", "http://notes.local:9000");
    assert_eq!(base_url().as_deref(), Some("http://notes.local:9000"));
    std::env::remove_var("SJN_BASE_URL");
}

#[test]
fn test_log_filter() {
    std::env::set_var("SJN_LOG", "sjrs=debug");
    assert_eq!(log_filter().as_deref(), Some("sjrs=debug"));
    std::env::remove_var("SJN_LOG");
    assert_eq!(log_filter(), None);
}

#[test]
fn test_no_color_only_for_one() {
    std::env::set_var("NO_COLOR", "true");
    assert!(!no_color());
    std::env::set_var("NO_COLOR", "1");
    assert!(no_color());
    std::env::remove_var("NO_COLOR");
    assert!(!no_color());
}

#[test]
fn test_force_color_only_for_one() {
    std::env::set_var("COLOR", "yes");
    assert!(!force_color());
    std::env::set_var("COLOR", "1");
    assert!(force_color());
    std::env::remove_var("COLOR");
}
