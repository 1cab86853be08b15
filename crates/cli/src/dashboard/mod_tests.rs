// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::notify::Level;
use crate::store::test_helpers::MockTransport;
use crate::store::{HttpResponse, Method};
use chrono::{TimeZone, Utc};
use serde_json::json;
use sj_core::{GoalDraft, NoteDraft};
use tempfile::tempdir;

struct Answer(bool);

impl Confirm for Answer {
    fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}

fn now() -> QueryContext {
    QueryContext::at(Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap())
}

fn dashboard(mock: &MockTransport) -> Dashboard<MockTransport> {
    Dashboard::new(
        RecordStore::with_transport("http://h/api", mock.clone()),
        Box::new(MemoryStore::new()),
        Notifier::default(),
    )
    .with_context(now())
}

fn seed(mock: &MockTransport) {
    mock.route_json(
        Method::Get,
        "/api/notes",
        200,
        &json!([
            {"id": 1, "title": "Groceries", "tags": ["home"], "created_at": "2026-03-09T00:00:00Z"},
            {"id": 2, "title": "Ideas", "created_at": "2026-03-01T00:00:00Z"},
            {"id": 3, "title": "Books", "tags": ["reading"], "created_at": "2026-03-05T00:00:00Z"},
        ]),
    );
    mock.route_json(
        Method::Get,
        "/api/todos",
        200,
        &json!([
            {"id": 10, "title": "Pay rent", "date": "2026-03-01", "done": false},
            {"id": 11, "title": "Call mom", "date": "2026-03-10", "done": true},
        ]),
    );
    mock.route_json(
        Method::Get,
        "/api/goals",
        200,
        &json!([{"id": 20, "title": "Run 10k", "progress": 40}]),
    );
}

async fn hydrated(mock: &MockTransport) -> Dashboard<MockTransport> {
    seed(mock);
    let mut d = dashboard(mock);
    assert!(d.hydrate().await.is_empty());
    d
}

fn messages_of(d: &mut Dashboard<MockTransport>) -> Vec<String> {
    d.notifications().iter().map(|n| n.message.clone()).collect()
}

fn titles<R: Record>(items: &[R]) -> Vec<&str> {
    items.iter().map(|r| r.title()).collect()
}

#[tokio::test]
async fn hydrate_degrades_failed_kind_to_empty() {
    let mock = MockTransport::new();
    mock.route_json(Method::Get, "/api/notes", 200, &json!([{"id": 1, "title": "a"}]));
    mock.route(Method::Get, "/api/todos", HttpResponse::new(500, Vec::new()));
    mock.route_json(Method::Get, "/api/goals", 200, &json!([]));
    let mut d = dashboard(&mock);

    let failed = d.hydrate().await;
    assert_eq!(failed, vec![Kind::Todos]);
    assert_eq!(d.items::<Note>().len(), 1);
    assert!(d.items::<Task>().is_empty());

    let errors: Vec<_> = d
        .notifications()
        .iter()
        .filter(|n| n.level == Level::Error)
        .map(|n| n.message.clone())
        .collect();
    assert_eq!(errors, vec!["Failed to load todos"]);
}

#[tokio::test]
async fn create_prepends_record() {
    let mock = MockTransport::new();
    let mut d = hydrated(&mock).await;
    mock.route_json(Method::Post, "/api/notes", 200, &json!({"id": 4, "title": "New"}));

    let note: Note = d.create(&NoteDraft::new("New")).await.unwrap();
    assert_eq!(note.id, 4);
    assert_eq!(d.items::<Note>()[0].id, 4);
    assert!(messages_of(&mut d).contains(&messages::CREATED.to_string()));
}

#[tokio::test]
async fn blank_title_is_not_submitted() {
    let mock = MockTransport::new();
    let mut d = dashboard(&mock);

    let err = d.create::<Note>(&NoteDraft::new("   ")).await.unwrap_err();
    assert!(matches!(err, Error::ValidationSkipped { field: "title" }));
    assert_eq!(mock.request_count(), 0);
    assert!(d.notifications().is_empty());
}

#[tokio::test]
async fn update_replaces_in_place() {
    let mock = MockTransport::new();
    let mut d = hydrated(&mock).await;
    mock.route_json(Method::Put, "/api/notes/2", 200, &json!({"id": 2, "title": "Better ideas"}));

    d.update::<Note>(2, &NoteDraft::new("Better ideas")).await.unwrap();
    assert_eq!(titles(d.items::<Note>()), vec!["Groceries", "Better ideas", "Books"]);
}

#[tokio::test]
async fn failed_update_notifies_and_keeps_replica() {
    let mock = MockTransport::new();
    let mut d = hydrated(&mock).await;

    let err = d.update::<Note>(2, &NoteDraft::new("x")).await.unwrap_err();
    assert!(matches!(err, Error::RequestFailed { status: 404, .. }));
    assert_eq!(d.find::<Note>(2).unwrap().title, "Ideas");
    assert!(messages_of(&mut d).contains(&"Failed to update note".to_string()));
}

#[tokio::test]
async fn offline_write_warns() {
    let mock = MockTransport::new();
    let mut d = hydrated(&mock).await;
    mock.queue(Ok(HttpResponse::json(503, &json!({"error": "offline"}))
        .unwrap()
        .mark_offline("fallback")));

    assert!(d.create::<Goal>(&GoalDraft::new("Swim")).await.is_err());
    let n = d.notifications().last().unwrap().clone();
    assert_eq!(n.level, Level::Warning);
    assert_eq!(n.message, messages::OFFLINE);
}

#[tokio::test]
async fn declined_delete_sends_nothing() {
    let mock = MockTransport::new();
    let mut d = hydrated(&mock).await;
    let before = mock.request_count();

    let err = d.delete::<Note>(1, &Answer(false)).await.unwrap_err();
    assert!(matches!(err, Error::Cancelled));
    assert_eq!(mock.request_count(), before);
    assert_eq!(d.items::<Note>().len(), 3);
}

#[tokio::test]
async fn confirmed_delete_removes() {
    let mock = MockTransport::new();
    let mut d = hydrated(&mock).await;
    mock.route_json(Method::Delete, "/api/notes/1", 200, &json!({"message": "Item deleted successfully"}));

    d.delete::<Note>(1, &AssumeYes).await.unwrap();
    assert!(d.find::<Note>(1).is_none());
}

#[tokio::test]
async fn toggle_done_flips_flag() {
    let mock = MockTransport::new();
    let mut d = hydrated(&mock).await;
    mock.route_json(
        Method::Put,
        "/api/todos/10",
        200,
        &json!({"id": 10, "title": "Pay rent", "date": "2026-03-01", "done": true}),
    );

    let task = d.toggle_done(10).await.unwrap();
    assert!(task.done);
    assert!(d.find::<Task>(10).unwrap().done);

    let sent: serde_json::Value =
        serde_json::from_slice(mock.requests().last().unwrap().body.as_ref().unwrap()).unwrap();
    assert_eq!(sent["done"], true);
    assert!(messages_of(&mut d).contains(&"Task completed! 🎉".to_string()));
}

#[tokio::test]
async fn toggle_unknown_task_is_not_found() {
    let mock = MockTransport::new();
    let mut d = hydrated(&mock).await;
    assert!(matches!(
        d.toggle_done(99).await,
        Err(Error::NotFound { kind: "task", id: 99 })
    ));
}

#[tokio::test]
async fn set_progress_clamps_and_celebrates() {
    let mock = MockTransport::new();
    let mut d = hydrated(&mock).await;
    mock.route_json(Method::Put, "/api/goals/20", 200, &json!({"id": 20, "title": "Run 10k", "progress": 100}));

    let goal = d.set_progress(20, 140).await.unwrap();
    assert_eq!(goal.progress.get(), 100);

    let sent: serde_json::Value =
        serde_json::from_slice(mock.requests().last().unwrap().body.as_ref().unwrap()).unwrap();
    assert_eq!(sent["progress"], 100);
    assert!(messages_of(&mut d).contains(&"🎉 Goal completed! Congratulations!".to_string()));
}

#[tokio::test]
async fn visible_applies_search_filter_and_sort() {
    let mock = MockTransport::new();
    let mut d = hydrated(&mock).await;

    d.set_sort::<Note>("title-asc");
    assert_eq!(titles(&d.visible::<Note>()), vec!["Books", "Groceries", "Ideas"]);

    d.set_filter::<Note>("tagged").unwrap();
    assert_eq!(titles(&d.visible::<Note>()), vec!["Books", "Groceries"]);

    d.set_search("home");
    assert_eq!(titles(&d.visible::<Note>()), vec!["Groceries"]);
    assert_eq!(d.search_results().total(), 1);

    d.clear_filters::<Note>();
    assert_eq!(d.query::<Note>().filter, FilterKind::All);
    assert_eq!(titles(&d.visible::<Note>()), vec!["Groceries"], "search survives clearing");
}

#[tokio::test]
async fn overdue_uses_pinned_clock() {
    let mock = MockTransport::new();
    let mut d = hydrated(&mock).await;
    d.set_filter::<Task>("overdue").unwrap();
    assert_eq!(titles(&d.visible::<Task>()), vec!["Pay rent"]);
}

#[tokio::test]
async fn invalid_filter_is_rejected() {
    let mock = MockTransport::new();
    let mut d = dashboard(&mock);
    assert!(matches!(d.set_filter::<Goal>("pending"), Err(Error::Core(_))));
}

#[tokio::test]
async fn move_reorders_and_notifies() {
    let mock = MockTransport::new();
    let mut d = hydrated(&mock).await;
    d.set_sort::<Note>("none");

    assert!(d.move_item::<Note>(0, 2).unwrap());
    assert_eq!(titles(d.items::<Note>()), vec!["Ideas", "Books", "Groceries"]);
    assert!(messages_of(&mut d).contains(&"Moved note from position 1 to 3".to_string()));

    assert!(!d.move_item::<Note>(1, 1).unwrap());
    assert!(d.move_item::<Note>(0, 5).is_err());
}

#[tokio::test]
async fn move_within_filtered_view_keeps_hidden_slots() {
    let mock = MockTransport::new();
    let mut d = hydrated(&mock).await;
    d.set_sort::<Note>("none");
    d.set_filter::<Note>("tagged").unwrap();

    // Displayed: Groceries, Books. Ideas is hidden in slot 1.
    assert!(d.move_item::<Note>(1, 0).unwrap());
    assert_eq!(titles(d.items::<Note>()), vec!["Books", "Ideas", "Groceries"]);
}

#[tokio::test]
async fn drag_session_drop() {
    let mock = MockTransport::new();
    let mut d = hydrated(&mock).await;
    d.set_sort::<Goal>("none");

    let mut session = DragSession::new();
    assert!(!d.drop_on::<Goal>(&mut session, 0).unwrap(), "no drag in progress");
}

#[tokio::test]
async fn edit_session_autosaves_changes() {
    let mock = MockTransport::new();
    let mut d = hydrated(&mock).await;
    mock.route_json(Method::Put, "/api/goals/20", 200, &json!({"id": 20, "title": "Run 21k", "progress": 40}));

    let session = d.edit_session::<Goal>(20).unwrap();
    assert_eq!(session.save_now().await, SaveOutcome::Unchanged);

    let draft = GoalDraft::new("Run 21k").with_progress(40);
    session.observe(draft.clone());
    let outcome = session.save_now().await;
    assert_eq!(outcome, SaveOutcome::Saved);
    assert_eq!(mock.requests().last().unwrap().method, Method::Put);

    d.record_save_outcome(&outcome);
    d.apply_saved::<Goal>(20, draft);
    assert_eq!(d.find::<Goal>(20).unwrap().title, "Run 21k");
    assert!(messages_of(&mut d).contains(&messages::AUTO_SAVED.to_string()));

    d.record_save_outcome(&SaveOutcome::Failed("boom".into()));
    assert_eq!(d.notifications().last().unwrap().message, messages::AUTO_SAVE_FAILED);
}

#[tokio::test]
async fn edit_session_for_unknown_record_fails() {
    let mock = MockTransport::new();
    let d = dashboard(&mock);
    assert!(matches!(
        d.edit_session::<Task>(5),
        Err(Error::NotFound { kind: "task", id: 5 })
    ));
}

#[test]
fn tab_is_loaded_and_persisted() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("state.json");
    let mock = MockTransport::new();

    let mut d = Dashboard::new(
        RecordStore::with_transport("http://h/api", mock.clone()),
        Box::new(FileStore::new(&path)),
        Notifier::default(),
    );
    assert_eq!(d.tab(), Tab::Notes);
    d.set_tab(Tab::Goals).unwrap();

    let reopened = Dashboard::new(
        RecordStore::with_transport("http://h/api", mock),
        Box::new(FileStore::new(&path)),
        Notifier::default(),
    );
    assert_eq!(reopened.tab(), Tab::Goals);
}

#[tokio::test]
async fn next_tab_wraps_and_notifies() {
    let mock = MockTransport::new();
    let mut d = dashboard(&mock);
    d.set_tab(Tab::About).unwrap();
    assert_eq!(d.next_tab().unwrap(), Tab::Notes);
    assert_eq!(d.prev_tab().unwrap(), Tab::About);
    assert!(messages_of(&mut d).contains(&"Switched to Notes 🔄".to_string()));
}
