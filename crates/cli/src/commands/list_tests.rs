// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::commands::test_helpers::{seeded, text};
use crate::dashboard::Tab;

async fn list(kind: Option<Kind>, view: ViewArgs, format: OutputFormat) -> (String, String) {
    let (_mock, mut dashboard) = seeded();
    let (mut out, mut err) = (Vec::new(), Vec::new());
    run_impl(&mut dashboard, kind, &view, false, format, false, &mut out, &mut err)
        .await
        .unwrap();
    (text(out), text(err))
}

#[tokio::test]
async fn lists_in_collection_order() {
    let (out, err) = list(Some(Kind::Notes), ViewArgs::default(), OutputFormat::Text).await;
    assert_eq!(out, "  1. [1] Groceries  #home\n  2. [2] Books  #reading\n");
    assert_eq!(err, "");
}

#[tokio::test]
async fn applies_filter_and_sort() {
    let view = ViewArgs {
        filter: Some("overdue".into()),
        ..ViewArgs::default()
    };
    let (out, _) = list(Some(Kind::Todos), view, OutputFormat::Text).await;
    assert_eq!(out, "  1. [10] [ ] Pay rent  due 2026-03-01 (overdue)\n");

    let view = ViewArgs {
        sort: Some("title-asc".into()),
        ..ViewArgs::default()
    };
    let (out, _) = list(Some(Kind::Goals), view, OutputFormat::Text).await;
    let titles: Vec<&str> = out.lines().collect();
    assert!(titles[0].contains("Read 12 books"));
    assert!(titles[1].contains("Run 10k"));
}

#[tokio::test]
async fn empty_view_shows_empty_state() {
    let view = ViewArgs {
        search: Some("zzz".into()),
        ..ViewArgs::default()
    };
    let (out, _) = list(Some(Kind::Todos), view, OutputFormat::Text).await;
    assert_eq!(out, "No tasks found\n");
}

#[tokio::test]
async fn unknown_filter_is_an_error() {
    let (_mock, mut dashboard) = seeded();
    let view = ViewArgs {
        filter: Some("someday".into()),
        ..ViewArgs::default()
    };
    let (mut out, mut err) = (Vec::new(), Vec::new());
    let result = run_impl(
        &mut dashboard,
        Some(Kind::Notes),
        &view,
        false,
        OutputFormat::Text,
        false,
        &mut out,
        &mut err,
    )
    .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn json_output_is_the_record_array() {
    let (out, _) = list(Some(Kind::Goals), ViewArgs::default(), OutputFormat::Json).await;
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value[0]["title"], "Run 10k");
    assert_eq!(value[1]["progress"], 100);
}

#[tokio::test]
async fn defaults_to_active_tab() {
    let (_mock, mut dashboard) = seeded();
    dashboard.set_tab(Tab::Goals).unwrap();
    let (mut out, mut err) = (Vec::new(), Vec::new());
    run_impl(
        &mut dashboard,
        None,
        &ViewArgs::default(),
        false,
        OutputFormat::Text,
        false,
        &mut out,
        &mut err,
    )
    .await
    .unwrap();
    assert!(text(out).contains("Run 10k"));
}

#[tokio::test]
async fn about_tab_needs_no_server() {
    let (mock, mut dashboard) = seeded();
    dashboard.set_tab(Tab::About).unwrap();
    let (mut out, mut err) = (Vec::new(), Vec::new());
    run_impl(
        &mut dashboard,
        None,
        &ViewArgs::default(),
        false,
        OutputFormat::Text,
        false,
        &mut out,
        &mut err,
    )
    .await
    .unwrap();
    assert!(text(out).starts_with("SJ Notes keeps"));
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test]
async fn options_lists_filters_and_sorts() {
    let (mock, mut dashboard) = seeded();
    let (mut out, mut err) = (Vec::new(), Vec::new());
    run_impl(
        &mut dashboard,
        Some(Kind::Todos),
        &ViewArgs::default(),
        true,
        OutputFormat::Text,
        false,
        &mut out,
        &mut err,
    )
    .await
    .unwrap();
    let out = text(out);
    assert!(out.contains("overdue"));
    assert!(out.contains("date-asc"));
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test]
async fn search_groups_results_by_kind() {
    let (_mock, mut dashboard) = seeded();
    let (mut out, mut err) = (Vec::new(), Vec::new());
    search(&mut dashboard, "r", OutputFormat::Text, false, &mut out, &mut err)
        .await
        .unwrap();
    let out = text(out);
    assert!(out.contains("Notes (2)"));
    assert!(out.contains("To-Do (1)"));
    assert!(out.contains("Goals (2)"));
}

#[tokio::test]
async fn search_without_matches() {
    let (_mock, mut dashboard) = seeded();
    let (mut out, mut err) = (Vec::new(), Vec::new());
    search(&mut dashboard, " zzz ", OutputFormat::Text, false, &mut out, &mut err)
        .await
        .unwrap();
    assert_eq!(text(out), "No results for \"zzz\"\n");
}

#[tokio::test]
async fn search_json_counts_total() {
    let (_mock, mut dashboard) = seeded();
    let (mut out, mut err) = (Vec::new(), Vec::new());
    search(&mut dashboard, "books", OutputFormat::Json, false, &mut out, &mut err)
        .await
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&text(out)).unwrap();
    assert_eq!(value["total"], 2);
    assert_eq!(value["notes"][0]["title"], "Books");
}
