// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Dashboard controller.
//!
//! Owns an in-memory replica of the three collections, the per-kind view
//! queries, the global search text, the active tab and the notification
//! list. Reads go through the query pipeline; writes go through the record
//! store and patch the replica on success:
//!
//! - created records are prepended
//! - updated records are replaced in place
//! - deleted records are removed
//!
//! Store failures are logged, surfaced as a notification and returned.

mod tabs;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use sj_core::{
    Draft, DragSession, FilterKind, Goal, Kind, Note, Progress, Query, QueryContext, Record,
    SearchResults, SortKind, Task,
};

use crate::autosave::{AutoSave, SaveOutcome};
use crate::error::{Error, Result};
use crate::notify::{messages, Notification, Notifier};
use crate::store::{HttpTransport, RecordStore, Transport};

pub use tabs::{load_tab, save_tab, FileStore, KeyValueStore, MemoryStore, Tab, ACTIVE_TAB_KEY};

const DEFAULT_AUTOSAVE_DELAY: Duration = Duration::from_millis(2000);

/// Asks the user to confirm a destructive action.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Confirms everything (`--yes`).
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// One collection and the query it is displayed with.
#[derive(Debug, Clone)]
pub struct View<R: Record> {
    pub items: Vec<R>,
    pub query: Query<R>,
}

impl<R: Record> Default for View<R> {
    fn default() -> Self {
        View {
            items: Vec::new(),
            query: Query::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Collections {
    pub notes: View<Note>,
    pub todos: View<Task>,
    pub goals: View<Goal>,
}

/// Records the dashboard keeps a replica of.
pub trait Tracked: Record {
    fn view(collections: &Collections) -> &View<Self>;
    fn view_mut(collections: &mut Collections) -> &mut View<Self>;
}

impl Tracked for Note {
    fn view(c: &Collections) -> &View<Self> {
        &c.notes
    }
    fn view_mut(c: &mut Collections) -> &mut View<Self> {
        &mut c.notes
    }
}

impl Tracked for Task {
    fn view(c: &Collections) -> &View<Self> {
        &c.todos
    }
    fn view_mut(c: &mut Collections) -> &mut View<Self> {
        &mut c.todos
    }
}

impl Tracked for Goal {
    fn view(c: &Collections) -> &View<Self> {
        &c.goals
    }
    fn view_mut(c: &mut Collections) -> &mut View<Self> {
        &mut c.goals
    }
}

pub struct Dashboard<T: Transport + 'static = HttpTransport> {
    store: Arc<RecordStore<T>>,
    collections: Collections,
    search: String,
    tab: Tab,
    tabs: Box<dyn KeyValueStore>,
    notifier: Notifier,
    context: Option<QueryContext>,
    autosave_delay: Duration,
}

impl<T: Transport + 'static> Dashboard<T> {
    /// Creates a dashboard; the active tab is read from `tabs`.
    pub fn new(store: RecordStore<T>, tabs: Box<dyn KeyValueStore>, notifier: Notifier) -> Self {
        let tab = load_tab(tabs.as_ref());
        Dashboard {
            store: Arc::new(store),
            collections: Collections::default(),
            search: String::new(),
            tab,
            tabs,
            notifier,
            context: None,
            autosave_delay: DEFAULT_AUTOSAVE_DELAY,
        }
    }

    /// Pins the clock used by date filters.
    pub fn with_context(mut self, context: QueryContext) -> Self {
        self.context = Some(context);
        self
    }

    pub fn with_autosave_delay(mut self, delay: Duration) -> Self {
        self.autosave_delay = delay;
        self
    }

    pub fn store(&self) -> &RecordStore<T> {
        &self.store
    }

    /// Clock used by the date-relative filters.
    pub fn context(&self) -> QueryContext {
        self.context.unwrap_or_else(QueryContext::system)
    }

    // ── Loading ─────────────────────────────────────────────────────────

    /// Loads all three collections. Each kind loads independently; a
    /// failed kind is left empty. Returns the kinds that failed.
    pub async fn hydrate(&mut self) -> Vec<Kind> {
        let (notes, todos, goals) = tokio::join!(
            self.store.list::<Note>(),
            self.store.list::<Task>(),
            self.store.list::<Goal>(),
        );

        let mut failed = Vec::new();
        self.collections.notes.items = self.loaded(Kind::Notes, notes, &mut failed);
        self.collections.todos.items = self.loaded(Kind::Todos, todos, &mut failed);
        self.collections.goals.items = self.loaded(Kind::Goals, goals, &mut failed);

        self.notifier.success("Data loaded successfully!");
        failed
    }

    fn loaded<R>(&mut self, kind: Kind, result: Result<Vec<R>>, failed: &mut Vec<Kind>) -> Vec<R> {
        match result {
            Ok(items) => {
                tracing::debug!(%kind, count = items.len(), "loaded collection");
                items
            }
            Err(e) => {
                tracing::error!(%kind, error = %e, "failed to load collection");
                self.notifier.error(format!("Failed to load {kind}"));
                failed.push(kind);
                Vec::new()
            }
        }
    }

    // ── Reading ─────────────────────────────────────────────────────────

    /// The whole collection in its client order.
    pub fn items<R: Tracked>(&self) -> &[R] {
        &R::view(&self.collections).items
    }

    pub fn find<R: Tracked>(&self, id: i64) -> Option<&R> {
        self.items::<R>().iter().find(|r| r.id() == id)
    }

    /// The collection as displayed: searched, filtered and sorted.
    pub fn visible<R: Tracked>(&self) -> Vec<R> {
        let view = R::view(&self.collections);
        view.query.apply(&view.items, &self.context())
    }

    pub fn query<R: Tracked>(&self) -> &Query<R> {
        &R::view(&self.collections).query
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Sets the search text shared by every view.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
        self.collections.notes.query.search = self.search.clone();
        self.collections.todos.query.search = self.search.clone();
        self.collections.goals.query.search = self.search.clone();
    }

    /// Matches of the search text across all collections.
    pub fn search_results(&self) -> SearchResults {
        SearchResults::collect(
            &self.search,
            &self.collections.notes.items,
            &self.collections.todos.items,
            &self.collections.goals.items,
        )
    }

    pub fn set_filter<R: Tracked>(&mut self, id: &str) -> Result<()> {
        let filter = FilterKind::parse(id)?;
        R::view_mut(&mut self.collections).query.filter = filter;
        Ok(())
    }

    pub fn set_sort<R: Tracked>(&mut self, spec: &str) {
        R::view_mut(&mut self.collections).query.sort = SortKind::parse(spec);
    }

    /// Resets filter and sort to their defaults; the search text stays.
    pub fn clear_filters<R: Tracked>(&mut self) {
        let query = &mut R::view_mut(&mut self.collections).query;
        query.filter = FilterKind::All;
        query.sort = SortKind::default();
    }

    // ── Writing ─────────────────────────────────────────────────────────

    fn report(&mut self, action: &str, kind: Kind, error: &Error) {
        tracing::error!(%kind, action, error = %error, "operation failed");
        match error {
            Error::RequestFailed { offline: true, .. } => {
                self.notifier.warning(messages::OFFLINE);
            }
            _ => {
                self.notifier
                    .error(format!("Failed to {action} {}", kind.singular()));
            }
        }
    }

    fn require<R: Tracked>(&self, id: i64) -> Result<&R> {
        self.find::<R>(id).ok_or(Error::NotFound {
            kind: R::KIND.singular(),
            id,
        })
    }

    fn replace<R: Tracked>(&mut self, record: R) {
        let items = &mut R::view_mut(&mut self.collections).items;
        if let Some(slot) = items.iter_mut().find(|r| r.id() == record.id()) {
            *slot = record;
        }
    }

    /// Creates a record and prepends it. Drafts without a title are not sent.
    pub async fn create<R: Tracked>(&mut self, draft: &R::Draft) -> Result<R> {
        if let Some(field) = draft.missing_required() {
            return Err(Error::ValidationSkipped { field });
        }
        match self.store.create::<R>(draft).await {
            Ok(record) => {
                R::view_mut(&mut self.collections)
                    .items
                    .insert(0, record.clone());
                self.notifier.success(messages::CREATED);
                Ok(record)
            }
            Err(e) => {
                self.report("create", R::KIND, &e);
                Err(e)
            }
        }
    }

    /// Replaces record `id` with `draft`.
    pub async fn update<R: Tracked>(&mut self, id: i64, draft: &R::Draft) -> Result<R> {
        if let Some(field) = draft.missing_required() {
            return Err(Error::ValidationSkipped { field });
        }
        match self.store.update::<R>(id, draft).await {
            Ok(record) => {
                self.replace(record.clone());
                self.notifier.success(messages::UPDATED);
                Ok(record)
            }
            Err(e) => {
                self.report("update", R::KIND, &e);
                Err(e)
            }
        }
    }

    /// Deletes record `id` once `confirm` agrees.
    pub async fn delete<R: Tracked>(&mut self, id: i64, confirm: &dyn Confirm) -> Result<()> {
        let prompt = format!("Are you sure you want to delete this {}?", R::KIND.singular());
        if !confirm.confirm(&prompt) {
            tracing::debug!(kind = %R::KIND, id, "delete not confirmed");
            return Err(Error::Cancelled);
        }
        match self.store.delete::<R>(id).await {
            Ok(()) => {
                R::view_mut(&mut self.collections)
                    .items
                    .retain(|r| r.id() != id);
                self.notifier.success(messages::DELETED);
                Ok(())
            }
            Err(e) => {
                self.report("delete", R::KIND, &e);
                Err(e)
            }
        }
    }

    /// Flips the done flag of task `id`.
    pub async fn toggle_done(&mut self, id: i64) -> Result<Task> {
        let task = self.require::<Task>(id)?;
        let mut draft = task.to_draft();
        draft.done = !draft.done;

        match self.store.update::<Task>(id, &draft).await {
            Ok(task) => {
                self.replace(task.clone());
                self.notifier.success(if task.done {
                    "Task completed! 🎉"
                } else {
                    "Task marked as incomplete"
                });
                Ok(task)
            }
            Err(e) => {
                self.report("update status of", Kind::Todos, &e);
                Err(e)
            }
        }
    }

    /// Sets the progress of goal `id`, clamped into 0..=100.
    pub async fn set_progress(&mut self, id: i64, value: i64) -> Result<Goal> {
        let goal = self.require::<Goal>(id)?;
        let mut draft = goal.to_draft();
        draft.progress = Progress::new(value);

        match self.store.update::<Goal>(id, &draft).await {
            Ok(goal) => {
                self.replace(goal.clone());
                let progress = goal.progress.get();
                if progress == 100 {
                    self.notifier.success("🎉 Goal completed! Congratulations!");
                } else if progress >= 75 {
                    self.notifier.success("🚀 Almost there! Keep going!");
                }
                Ok(goal)
            }
            Err(e) => {
                self.report("update progress of", Kind::Goals, &e);
                Err(e)
            }
        }
    }

    // ── Editing ─────────────────────────────────────────────────────────

    /// Opens an auto-save session for record `id`, with its current
    /// fields as the baseline.
    pub fn edit_session<R: Tracked>(&self, id: i64) -> Result<AutoSave<R::Draft>> {
        let record = self.require::<R>(id)?;
        let store = Arc::clone(&self.store);
        let autosave = AutoSave::new(
            move |draft: R::Draft| {
                let store = Arc::clone(&store);
                async move { store.update::<R>(id, &draft).await.map(|_| ()) }
            },
            self.autosave_delay,
        );
        autosave.begin();
        autosave.observe(record.to_draft());
        Ok(autosave)
    }

    /// Applies a draft the auto-saver already stored to the local replica.
    pub fn apply_saved<R: Tracked>(&mut self, id: i64, draft: R::Draft) {
        if let Some(record) = self.find::<R>(id) {
            let updated = record.with_draft(draft);
            self.replace(updated);
        }
    }

    /// Surfaces an auto-save outcome as a notification.
    pub fn record_save_outcome(&mut self, outcome: &SaveOutcome) {
        match outcome {
            SaveOutcome::Saved => {
                self.notifier.success(messages::AUTO_SAVED);
            }
            SaveOutcome::Failed(_) => {
                self.notifier.error(messages::AUTO_SAVE_FAILED);
            }
            SaveOutcome::Unchanged => {}
        }
    }

    // ── Reordering ──────────────────────────────────────────────────────

    /// Moves the displayed item at `from` to `to`. Returns false when
    /// nothing moved.
    pub fn move_item<R: Tracked>(&mut self, from: usize, to: usize) -> Result<bool> {
        let mut session = DragSession::new();
        session.begin_move(from);
        session.hover_target(to);
        self.drop_on::<R>(&mut session, to)
    }

    /// Completes a drag over the displayed list at `index`.
    ///
    /// The displayed items are written back into the slots they occupy in
    /// the collection, in their new order; hidden items keep their slots.
    pub fn drop_on<R: Tracked>(&mut self, session: &mut DragSession, index: usize) -> Result<bool> {
        let shown: Vec<i64> = self.visible::<R>().iter().map(Record::id).collect();
        let mut moved = None;
        let Some(order) = session.commit_move(index, &shown, |_, from, to| moved = Some((from, to)))?
        else {
            return Ok(false);
        };

        let items = &mut R::view_mut(&mut self.collections).items;
        let slots: Vec<usize> = items
            .iter()
            .enumerate()
            .filter(|(_, r)| shown.contains(&r.id()))
            .map(|(i, _)| i)
            .collect();
        let mut by_id: HashMap<i64, R> = slots
            .iter()
            .map(|&i| (items[i].id(), items[i].clone()))
            .collect();
        for (slot, id) in slots.iter().zip(&order) {
            if let Some(item) = by_id.remove(id) {
                items[*slot] = item;
            }
        }

        if let Some((from, to)) = moved {
            self.notifier.success(format!(
                "Moved {} from position {} to {}",
                R::KIND.singular(),
                from + 1,
                to + 1
            ));
        }
        Ok(true)
    }

    // ── Tabs & notifications ────────────────────────────────────────────

    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// Switches and persists the active tab.
    pub fn set_tab(&mut self, tab: Tab) -> Result<()> {
        self.tab = tab;
        save_tab(self.tabs.as_mut(), tab).inspect_err(|e| {
            tracing::warn!(%tab, error = %e, "failed to persist active tab");
        })
    }

    pub fn next_tab(&mut self) -> Result<Tab> {
        self.switch_tab(self.tab.next())
    }

    pub fn prev_tab(&mut self) -> Result<Tab> {
        self.switch_tab(self.tab.prev())
    }

    fn switch_tab(&mut self, tab: Tab) -> Result<Tab> {
        self.set_tab(tab)?;
        self.notifier
            .success(format!("Switched to {} 🔄", tab.label()));
        Ok(tab)
    }

    /// Notifications still showing.
    pub fn notifications(&mut self) -> &[Notification] {
        self.notifier.active()
    }

    pub fn notifier_mut(&mut self) -> &mut Notifier {
        &mut self.notifier
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
