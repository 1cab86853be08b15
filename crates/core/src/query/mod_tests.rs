// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::entity::Progress;
use chrono::TimeZone;

fn ctx() -> QueryContext {
    QueryContext::at(Utc.with_ymd_and_hms(2026, 6, 1, 8, 0, 0).unwrap())
}

fn task(id: i64, title: &str, day: u32, done: bool) -> Task {
    Task {
        id,
        title: title.into(),
        description: None,
        due_date: NaiveDate::from_ymd_opt(2026, 5, day).unwrap(),
        tags: vec!["errand".into()],
        color: None,
        done,
        created_at: None,
        updated_at: None,
    }
}

fn goal(id: i64, title: &str, progress: i64) -> Goal {
    Goal {
        id,
        title: title.into(),
        comment: Some("keep going".into()),
        progress: Progress::new(progress),
        color: None,
        created_at: None,
        updated_at: None,
    }
}

fn note(id: i64, title: &str) -> Note {
    Note {
        id,
        title: title.into(),
        content: None,
        tags: vec![],
        color: None,
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn apply_searches_then_filters_then_sorts() {
    let tasks = vec![
        task(1, "Buy paint", 20, false),
        task(2, "Buy bread", 2, false),
        task(3, "Buy stamps", 10, true),
        task(4, "Call mom", 1, false),
    ];
    let view = apply(
        &tasks,
        Some("buy"),
        &FilterKind::Named(TaskFilter::Pending),
        &SortKind::parse("date-asc"),
        &ctx(),
    );
    let ids: Vec<i64> = view.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![2, 1]);
}

#[test]
fn default_query_orders_newest_first_without_narrowing() {
    let goals = vec![goal(1, "a", 0), goal(2, "b", 100)];
    let query = Query::<Goal>::default();
    assert!(!query.is_identity());
    assert_eq!(query.apply(&goals, &ctx()).len(), 2);
}

#[test]
fn identity_query_returns_input() {
    let goals = vec![goal(2, "b", 10), goal(1, "a", 90)];
    let query = Query::<Goal> {
        search: String::new(),
        filter: FilterKind::All,
        sort: SortKind::Unsorted,
    };
    assert!(query.is_identity());
    assert_eq!(query.apply(&goals, &ctx()), goals);
}

#[test]
fn global_search_counts_every_kind() {
    let notes = vec![note(1, "Errand list"), note(2, "Poem")];
    let todos = vec![task(3, "Pharmacy", 3, false)];
    let goals = vec![goal(4, "Marathon", 30)];

    let results = SearchResults::collect("errand", &notes, &todos, &goals);
    assert_eq!(results.notes.len(), 1);
    assert_eq!(results.todos.len(), 1, "tag match");
    assert!(results.goals.is_empty());
    assert_eq!(results.total(), 2);
}

#[test]
fn global_search_with_blank_query_is_empty() {
    let notes = vec![note(1, "x")];
    assert_eq!(SearchResults::collect("  ", &notes, &[], &[]).total(), 0);
}

#[test]
fn today_follows_the_context_clock() {
    assert_eq!(ctx().today(), NaiveDate::from_ymd_opt(2026, 6, 1).unwrap());
}
