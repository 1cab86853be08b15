// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use chrono::TimeZone;

fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 10, hour, 0, 0).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn create_assigns_id_and_created_at() {
    let db = Database::open_in_memory().unwrap();
    let draft = NoteDraft::new("Groceries")
        .with_content("milk")
        .with_tags(&["home".into(), "food".into()])
        .with_color("bg-pink-100");

    let note: Note = db.create(&draft, at(9)).unwrap();
    assert_eq!(note.id, 1);
    assert_eq!(note.title, "Groceries");
    assert_eq!(note.tags, vec!["home", "food"]);
    assert_eq!(note.created_at, Some(at(9)));
    assert_eq!(note.updated_at, None);
}

#[test]
fn update_sets_updated_at_only() {
    let db = Database::open_in_memory().unwrap();
    let task: Task = db
        .create(&TaskDraft::new("Pay rent", date(2026, 3, 1)), at(9))
        .unwrap();

    let draft = task.to_draft().with_done(true);
    let updated: Task = db.update(task.id, &draft, at(11)).unwrap();
    assert!(updated.done);
    assert_eq!(updated.due_date, date(2026, 3, 1));
    assert_eq!(updated.created_at, Some(at(9)));
    assert_eq!(updated.updated_at, Some(at(11)));
}

#[test]
fn list_returns_records_in_id_order() {
    let db = Database::open_in_memory().unwrap();
    for title in ["Run 10k", "Read 12 books"] {
        db.create::<Goal>(&GoalDraft::new(title).with_progress(40), at(9))
            .unwrap();
    }
    let goals: Vec<Goal> = db.list().unwrap();
    let titles: Vec<_> = goals.iter().map(|g| g.title.as_str()).collect();
    assert_eq!(titles, ["Run 10k", "Read 12 books"]);
    assert_eq!(goals[0].progress.get(), 40);
}

#[test]
fn empty_tags_round_trip_as_empty_list() {
    let db = Database::open_in_memory().unwrap();
    let note: Note = db.create(&NoteDraft::new("Plain"), at(9)).unwrap();
    assert!(note.tags.is_empty());
}

#[test]
fn missing_records_are_not_found() {
    let db = Database::open_in_memory().unwrap();
    let err = db.update::<Note>(42, &NoteDraft::new("x"), at(9)).unwrap_err();
    assert_eq!(err.to_string(), "Note not found");
    let err = db.delete::<Task>(42).unwrap_err();
    assert_eq!(err.to_string(), "Todo not found");
    let err = db.get::<Goal>(42).unwrap_err();
    assert_eq!(err.to_string(), "Goal not found");
}

#[test]
fn delete_removes_record() {
    let db = Database::open_in_memory().unwrap();
    let note: Note = db.create(&NoteDraft::new("Gone"), at(9)).unwrap();
    db.delete::<Note>(note.id).unwrap();
    assert_eq!(db.count(Kind::Notes).unwrap(), 0);
}

#[test]
fn corrupted_timestamp_is_reported() {
    let db = Database::open_in_memory().unwrap();
    db.conn
        .execute(
            "INSERT INTO notes (title, created_at) VALUES ('x', 'yesterday')",
            [],
        )
        .unwrap();
    let err = db.list::<Note>().unwrap_err();
    assert!(err.to_string().contains("invalid timestamp"));
}

#[test]
fn open_creates_data_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join(DB_FILE);
    let db = Database::open(&path).unwrap();
    db.create::<Note>(&NoteDraft::new("Kept"), at(9)).unwrap();
    drop(db);

    let db = Database::open(&path).unwrap();
    assert_eq!(db.count(Kind::Notes).unwrap(), 1);
}
