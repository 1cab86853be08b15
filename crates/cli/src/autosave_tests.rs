// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::error::Error;
use sj_core::NoteDraft;
use std::sync::atomic::{AtomicBool, Ordering};

const DELAY: Duration = Duration::from_millis(2000);

#[derive(Clone, Default)]
struct Recorder {
    saved: Arc<Mutex<Vec<String>>>,
    fail: Arc<AtomicBool>,
    latency: Duration,
}

impl Recorder {
    fn slow(latency: Duration) -> Self {
        Recorder {
            latency,
            ..Recorder::default()
        }
    }

    fn saver(&self) -> impl Saver<NoteDraft> + 'static {
        let rec = self.clone();
        move |draft: NoteDraft| {
            let rec = rec.clone();
            async move {
                tokio::time::sleep(rec.latency).await;
                if rec.fail.load(Ordering::SeqCst) {
                    return Err(Error::NetworkUnavailable("server down".into()));
                }
                rec.saved.lock().unwrap().push(draft.title);
                Ok(())
            }
        }
    }

    fn saved(&self) -> Vec<String> {
        self.saved.lock().unwrap().clone()
    }
}

fn note(title: &str) -> NoteDraft {
    NoteDraft::new(title)
}

#[tokio::test(start_paused = true)]
async fn first_observation_is_baseline() {
    let rec = Recorder::default();
    let autosave = AutoSave::new(rec.saver(), DELAY);
    autosave.begin();
    autosave.observe(note("loaded"));

    tokio::time::sleep(DELAY * 2).await;
    assert!(rec.saved().is_empty());
    assert_eq!(autosave.state(), SaveState::Editing);
}

#[tokio::test(start_paused = true)]
async fn edits_are_debounced_into_one_save() {
    let rec = Recorder::default();
    let autosave = AutoSave::new(rec.saver(), DELAY);
    let mut outcomes = autosave.subscribe();
    autosave.begin();
    autosave.observe(note("a"));

    autosave.observe(note("ab"));
    tokio::time::sleep(Duration::from_millis(1000)).await;
    autosave.observe(note("abc"));
    assert_eq!(autosave.state(), SaveState::Debounced);
    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert!(rec.saved().is_empty(), "timer restarted by the last edit");

    assert_eq!(outcomes.recv().await.unwrap(), SaveOutcome::Saved);
    assert_eq!(rec.saved(), vec!["abc"]);
    assert_eq!(autosave.state(), SaveState::Idle);
}

#[tokio::test(start_paused = true)]
async fn unchanged_buffer_is_not_saved() {
    let rec = Recorder::default();
    let autosave = AutoSave::new(rec.saver(), DELAY);
    let mut outcomes = autosave.subscribe();
    autosave.begin();
    autosave.observe(note("same"));
    autosave.observe(note("same"));

    assert_eq!(outcomes.recv().await.unwrap(), SaveOutcome::Unchanged);
    assert!(rec.saved().is_empty());
    assert_eq!(autosave.state(), SaveState::Idle);
}

#[tokio::test(start_paused = true)]
async fn failure_keeps_buffer_and_next_edit_retries() {
    let rec = Recorder::default();
    rec.fail.store(true, Ordering::SeqCst);
    let autosave = AutoSave::new(rec.saver(), DELAY);
    let mut outcomes = autosave.subscribe();
    autosave.begin();
    autosave.observe(note("draft"));
    autosave.observe(note("draft 2"));

    assert!(matches!(outcomes.recv().await.unwrap(), SaveOutcome::Failed(msg) if msg.contains("server down")));
    assert_eq!(autosave.state(), SaveState::Failed);
    assert_eq!(autosave.buffer().unwrap().title, "draft 2");

    rec.fail.store(false, Ordering::SeqCst);
    autosave.observe(note("draft 3"));
    assert_eq!(autosave.state(), SaveState::Debounced);
    assert_eq!(outcomes.recv().await.unwrap(), SaveOutcome::Saved);
    assert_eq!(rec.saved(), vec!["draft 3"]);
}

#[tokio::test(start_paused = true)]
async fn save_now_cancels_pending_timer() {
    let rec = Recorder::default();
    let autosave = AutoSave::new(rec.saver(), DELAY);
    autosave.begin();
    autosave.observe(note("a"));
    autosave.observe(note("b"));

    assert_eq!(autosave.save_now().await, SaveOutcome::Saved);
    tokio::time::sleep(DELAY * 2).await;
    assert_eq!(rec.saved(), vec!["b"]);
}

#[tokio::test(start_paused = true)]
async fn save_now_without_edits_is_unchanged() {
    let rec = Recorder::default();
    let autosave = AutoSave::new(rec.saver(), DELAY);
    autosave.begin();
    assert_eq!(autosave.save_now().await, SaveOutcome::Unchanged);
    autosave.observe(note("a"));
    assert_eq!(autosave.save_now().await, SaveOutcome::Unchanged);
    assert!(rec.saved().is_empty());
}

#[tokio::test(start_paused = true)]
async fn end_cancels_without_saving() {
    let rec = Recorder::default();
    let autosave = AutoSave::new(rec.saver(), DELAY);
    autosave.begin();
    autosave.observe(note("a"));
    autosave.observe(note("b"));
    autosave.end();

    tokio::time::sleep(DELAY * 2).await;
    assert!(rec.saved().is_empty());
    assert_eq!(autosave.state(), SaveState::Idle);
    assert!(!autosave.is_active());

    autosave.observe(note("ignored"));
    assert!(autosave.buffer().is_none());
}

#[tokio::test(start_paused = true)]
async fn racing_saves_do_not_duplicate() {
    let rec = Recorder::slow(Duration::from_millis(300));
    let autosave = AutoSave::new(rec.saver(), DELAY);
    autosave.begin();
    autosave.observe(note("a"));
    autosave.observe(note("b"));

    let (first, second) = tokio::join!(autosave.save_now(), autosave.save_now());
    let mut outcomes = vec![first, second];
    outcomes.sort_by_key(|o| matches!(o, SaveOutcome::Unchanged));
    assert_eq!(outcomes, vec![SaveOutcome::Saved, SaveOutcome::Unchanged]);
    assert_eq!(rec.saved(), vec!["b"]);
}

#[tokio::test(start_paused = true)]
async fn begin_resets_baseline() {
    let rec = Recorder::default();
    let autosave = AutoSave::new(rec.saver(), DELAY);
    autosave.begin();
    autosave.observe(note("first record"));
    autosave.observe(note("edited"));
    assert_eq!(autosave.save_now().await, SaveOutcome::Saved);

    autosave.begin();
    autosave.observe(note("second record"));
    assert_eq!(autosave.save_now().await, SaveOutcome::Unchanged);
    assert_eq!(rec.saved(), vec!["edited"]);
}

#[tokio::test(start_paused = true)]
async fn save_finishing_after_session_change_is_ignored() {
    let rec = Recorder::slow(Duration::from_millis(300));
    let autosave = Arc::new(AutoSave::new(rec.saver(), DELAY));
    autosave.begin();
    autosave.observe(note("old record"));
    autosave.observe(note("old edited"));

    let in_flight = tokio::spawn({
        let autosave = Arc::clone(&autosave);
        async move { autosave.save_now().await }
    });
    tokio::time::sleep(Duration::from_millis(100)).await;

    autosave.end();
    autosave.begin();
    assert_eq!(in_flight.await.unwrap(), SaveOutcome::Saved);
    assert_eq!(autosave.state(), SaveState::Editing);

    autosave.observe(note("new record"));
    tokio::time::sleep(DELAY * 2).await;
    assert_eq!(rec.saved(), vec!["old edited"]);
    assert_eq!(autosave.state(), SaveState::Editing);
}
