// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Debounced auto-save for an edit session.
//!
//! ```text
//!            begin         observe (2nd+)        timer / save_now
//!   Idle ──────────▶ Editing ──────────▶ Debounced ──────────▶ Saving
//!    ▲                                      ▲                  │  │
//!    │                                      │ observe    ok/same│  │err
//!    └──────────────────────────────────────┼──────────────────┘  ▼
//!                                           └──────────────── Failed
//! ```
//!
//! The first observed buffer after `begin` is the baseline and is never
//! saved. Content is compared by its JSON serialization.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde::Serialize;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::error::Result;

const OUTCOME_CHANNEL_CAPACITY: usize = 16;

/// Boxed future returned by [`Saver::save`].
pub type SaveFuture<'a> = Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;

/// Persists an edit buffer.
pub trait Saver<C>: Send + Sync {
    fn save(&self, content: C) -> SaveFuture<'_>;
}

impl<C, F, Fut> Saver<C> for F
where
    F: Fn(C) -> Fut + Send + Sync,
    Fut: Future<Output = Result<()>> + Send + 'static,
{
    fn save(&self, content: C) -> SaveFuture<'_> {
        Box::pin(self(content))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveState {
    Idle,
    Editing,
    Debounced,
    Saving,
    Failed,
}

/// Result of one save attempt, also published to subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// The buffer matched the last saved content; nothing was sent.
    Unchanged,
    Failed(String),
}

struct Session<C> {
    /// Bumped by `begin` and `end`; saves from an older session are ignored.
    generation: u64,
    active: bool,
    state: SaveState,
    baseline: Option<String>,
    buffer: Option<C>,
}

struct Shared<C> {
    saver: Box<dyn Saver<C>>,
    session: Mutex<Session<C>>,
    /// Serializes saves so they run in trigger order.
    save_lock: tokio::sync::Mutex<()>,
    events: broadcast::Sender<SaveOutcome>,
}

impl<C> Shared<C>
where
    C: Serialize + Clone + Send + Sync + 'static,
{
    fn session(&self) -> MutexGuard<'_, Session<C>> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn run_save(&self) -> SaveOutcome {
        let _guard = self.save_lock.lock().await;

        let outcome = match self.prepare() {
            Ok(None) => SaveOutcome::Unchanged,
            Ok(Some((content, serialized, generation))) => match self.saver.save(content).await {
                Ok(()) => {
                    let mut session = self.session();
                    if session.generation != generation {
                        tracing::debug!("session ended during save, ignoring result");
                    } else {
                        session.baseline = Some(serialized);
                        if session.state == SaveState::Saving {
                            session.state = SaveState::Idle;
                        }
                    }
                    tracing::debug!("auto-saved");
                    SaveOutcome::Saved
                }
                Err(e) => {
                    let mut session = self.session();
                    if session.generation == generation && session.state == SaveState::Saving {
                        session.state = SaveState::Failed;
                    }
                    tracing::warn!(error = %e, "auto-save failed");
                    SaveOutcome::Failed(e.to_string())
                }
            },
            Err(e) => {
                self.session().state = SaveState::Failed;
                tracing::warn!(error = %e, "auto-save failed");
                SaveOutcome::Failed(e.to_string())
            }
        };

        // No subscribers is fine.
        let _ = self.events.send(outcome.clone());
        outcome
    }

    /// Picks the buffer to save, or `None` when it matches the baseline.
    fn prepare(&self) -> Result<Option<(C, String, u64)>> {
        let mut guard = self.session();
        let session = &mut *guard;
        let (Some(buffer), Some(baseline)) = (&session.buffer, &session.baseline) else {
            return Ok(None);
        };
        let serialized = serde_json::to_string(buffer)?;
        if &serialized == baseline {
            if matches!(session.state, SaveState::Debounced | SaveState::Saving) {
                session.state = SaveState::Idle;
            }
            return Ok(None);
        }
        let content = buffer.clone();
        session.state = SaveState::Saving;
        Ok(Some((content, serialized, session.generation)))
    }
}

/// Auto-save coordinator for one editing surface.
pub struct AutoSave<C> {
    shared: Arc<Shared<C>>,
    delay: Duration,
    timer: Mutex<Option<JoinHandle<()>>>,
}

impl<C> AutoSave<C>
where
    C: Serialize + Clone + Send + Sync + 'static,
{
    pub fn new(saver: impl Saver<C> + 'static, delay: Duration) -> Self {
        let (events, _) = broadcast::channel(OUTCOME_CHANNEL_CAPACITY);
        AutoSave {
            shared: Arc::new(Shared {
                saver: Box::new(saver),
                session: Mutex::new(Session {
                    generation: 0,
                    active: false,
                    state: SaveState::Idle,
                    baseline: None,
                    buffer: None,
                }),
                save_lock: tokio::sync::Mutex::new(()),
                events,
            }),
            delay,
            timer: Mutex::new(None),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn state(&self) -> SaveState {
        self.shared.session().state
    }

    pub fn is_active(&self) -> bool {
        self.shared.session().active
    }

    /// The current edit buffer. Kept after a failed save.
    pub fn buffer(&self) -> Option<C> {
        self.shared.session().buffer.clone()
    }

    /// Receives every save outcome.
    pub fn subscribe(&self) -> broadcast::Receiver<SaveOutcome> {
        self.shared.events.subscribe()
    }

    /// Opens a new session; the next observed buffer becomes the baseline.
    pub fn begin(&self) {
        self.cancel_timer();
        let mut session = self.shared.session();
        session.generation += 1;
        session.active = true;
        session.state = SaveState::Editing;
        session.baseline = None;
        session.buffer = None;
    }

    /// Records the latest buffer and restarts the debounce timer.
    pub fn observe(&self, content: C) {
        {
            let mut session = self.shared.session();
            if !session.active {
                return;
            }
            if session.baseline.is_none() {
                match serde_json::to_string(&content) {
                    Ok(serialized) => session.baseline = Some(serialized),
                    Err(e) => tracing::warn!(error = %e, "cannot serialize edit buffer"),
                }
                session.buffer = Some(content);
                return;
            }
            session.buffer = Some(content);
            session.state = SaveState::Debounced;
        }
        self.restart_timer();
    }

    /// Cancels the pending timer and saves now.
    pub async fn save_now(&self) -> SaveOutcome {
        self.cancel_timer();
        self.shared.run_save().await
    }

    /// Ends the session without saving; a save already running finishes.
    pub fn end(&self) {
        self.cancel_timer();
        let mut session = self.shared.session();
        session.generation += 1;
        session.active = false;
        session.state = SaveState::Idle;
        session.baseline = None;
        session.buffer = None;
    }

    fn restart_timer(&self) {
        let shared = Arc::clone(&self.shared);
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // The save runs detached so a later cancel only stops waiting timers.
            tokio::spawn(async move {
                shared.run_save().await;
            });
        });

        let mut timer = self.timer.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = timer.replace(handle) {
            previous.abort();
        }
    }

    fn cancel_timer(&self) {
        let mut timer = self.timer.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = timer.take() {
            handle.abort();
        }
    }
}

impl<C> Drop for AutoSave<C> {
    fn drop(&mut self) {
        if let Ok(mut timer) = self.timer.lock() {
            if let Some(handle) = timer.take() {
                handle.abort();
            }
        }
    }
}

#[cfg(test)]
#[path = "autosave_tests.rs"]
mod tests;
