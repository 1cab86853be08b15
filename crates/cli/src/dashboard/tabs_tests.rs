// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use tempfile::tempdir;
use yare::parameterized;

#[parameterized(
    notes = { "notes", Tab::Notes },
    todo = { "todo", Tab::Todo },
    goals = { "goals", Tab::Goals },
    about = { "about", Tab::About },
)]
fn parse_valid_tab(input: &str, expected: Tab) {
    assert_eq!(input.parse::<Tab>().unwrap(), expected);
}

#[parameterized(
    plural = { "todos" },
    capitalized = { "Notes" },
    empty = { "" },
)]
fn parse_invalid_tab(input: &str) {
    assert!(matches!(input.parse::<Tab>(), Err(Error::InvalidTab(_))));
}

#[test]
fn next_and_prev_wrap() {
    assert_eq!(Tab::Notes.next(), Tab::Todo);
    assert_eq!(Tab::About.next(), Tab::Notes);
    assert_eq!(Tab::Notes.prev(), Tab::About);
    assert_eq!(Tab::Goals.prev(), Tab::Todo);
}

#[test]
fn tab_kinds() {
    assert_eq!(Tab::Todo.kind(), Some(Kind::Todos));
    assert_eq!(Tab::About.kind(), None);
}

#[test]
fn missing_or_invalid_value_loads_notes() {
    let mut store = MemoryStore::new();
    assert_eq!(load_tab(&store), Tab::Notes);

    store.set(ACTIVE_TAB_KEY, "settings").unwrap();
    assert_eq!(load_tab(&store), Tab::Notes);
}

#[test]
fn memory_store_round_trip() {
    let mut store = MemoryStore::new();
    save_tab(&mut store, Tab::Goals).unwrap();
    assert_eq!(store.get(ACTIVE_TAB_KEY).unwrap().as_deref(), Some("goals"));
    assert_eq!(load_tab(&store), Tab::Goals);
}

#[test]
fn file_store_persists_across_instances() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("state.json");

    let mut store = FileStore::new(&path);
    save_tab(&mut store, Tab::Todo).unwrap();
    store.set("other", "kept").unwrap();

    let reopened = FileStore::new(&path);
    assert_eq!(load_tab(&reopened), Tab::Todo);
    assert_eq!(reopened.get("other").unwrap().as_deref(), Some("kept"));
}

#[test]
fn corrupt_file_loads_default_tab() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(&path, "not json").unwrap();

    let store = FileStore::new(&path);
    assert!(store.get(ACTIVE_TAB_KEY).is_err());
    assert_eq!(load_tab(&store), Tab::Notes);
}
