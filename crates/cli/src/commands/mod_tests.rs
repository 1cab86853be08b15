// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::test_helpers::{seeded, text};
use super::*;
use crate::store::Method;

#[tokio::test]
async fn hydrate_hides_load_confirmation() {
    let (_mock, mut dashboard) = seeded();
    let mut err = Vec::new();
    hydrate(&mut dashboard, &mut err).await.unwrap();
    assert_eq!(text(err), "");
    assert_eq!(dashboard.items::<sj_core::Note>().len(), 2);
}

#[tokio::test]
async fn hydrate_reports_failed_kinds() {
    let (mock, mut dashboard) = seeded();
    mock.route(Method::Get, "/api/goals", crate::store::HttpResponse::new(500, ""));
    let mut err = Vec::new();
    hydrate(&mut dashboard, &mut err).await.unwrap();
    assert_eq!(text(err), "error: Failed to load goals\n");
}

#[test]
fn notifications_are_prefixed_by_level() {
    let mut notifier = Notifier::default();
    notifier.success("Note created successfully!");
    notifier.warning("Offline - changes will be synced when online");
    let mut err = Vec::new();
    print_notifications(&notifier.drain(), &mut err).unwrap();
    assert_eq!(
        text(err),
        "Note created successfully!\nwarning: Offline - changes will be synced when online\n"
    );
}
