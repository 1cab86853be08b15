// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Named and color filters.

use chrono::Duration;
use std::fmt;

use super::QueryContext;
use crate::entity::{Goal, Note, Task};
use crate::error::{Error, Result};
use crate::record::{Record, COLOR_PREFIX};

/// A predicate resolved once from a filter id.
pub type Predicate<R> = fn(&R, &QueryContext) -> bool;

/// Days within which a note counts as recent.
const RECENT_DAYS: i64 = 7;

/// The closed set of named predicates available for one record kind.
pub trait NamedFilter: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    type Record: Record;

    /// Every named filter, in menu order.
    fn all() -> &'static [Self];

    /// Stable id used on the command line and in saved views.
    fn id(self) -> &'static str;

    fn label(self) -> &'static str;

    fn predicate(self) -> Predicate<Self::Record>;

    fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|f| f.id() == id)
    }
}

/// Which subset of a collection a view shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterKind<F> {
    All,
    Named(F),
    ByColor(String),
}

impl<F: NamedFilter> FilterKind<F> {
    /// Parses a filter id.
    ///
    /// Ids with the color prefix always select by color, then `all`, then
    /// the kind's named filters.
    pub fn parse(id: &str) -> Result<Self> {
        let id = id.trim();
        if id.starts_with(COLOR_PREFIX) {
            return Ok(FilterKind::ByColor(id.to_string()));
        }
        if id == "all" {
            return Ok(FilterKind::All);
        }
        F::from_id(id).map(FilterKind::Named).ok_or_else(|| {
            let valid = std::iter::once("all")
                .chain(F::all().iter().map(|f| f.id()))
                .chain(std::iter::once("bg-<color>"))
                .collect::<Vec<_>>()
                .join(", ");
            Error::InvalidFilter {
                kind: <F::Record as Record>::KIND.as_str(),
                id: id.to_string(),
                valid,
            }
        })
    }

    /// The id this filter was parsed from.
    pub fn id(&self) -> &str {
        match self {
            FilterKind::All => "all",
            FilterKind::Named(f) => f.id(),
            FilterKind::ByColor(color) => color,
        }
    }
}

impl<F> Default for FilterKind<F> {
    fn default() -> Self {
        FilterKind::All
    }
}

impl<F: NamedFilter> fmt::Display for FilterKind<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Keeps the records selected by `kind`, in input order.
pub fn filter<R: Record>(items: &[R], kind: &FilterKind<R::Filter>, ctx: &QueryContext) -> Vec<R> {
    match kind {
        FilterKind::All => items.to_vec(),
        FilterKind::Named(named) => {
            let pred = named.predicate();
            items.iter().filter(|r| pred(r, ctx)).cloned().collect()
        }
        FilterKind::ByColor(color) => items
            .iter()
            .filter(|r| r.color() == Some(color.as_str()))
            .cloned()
            .collect(),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Notes
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteFilter {
    /// Created within the last seven days.
    Recent,
    Tagged,
    Untagged,
}

fn note_recent(note: &Note, ctx: &QueryContext) -> bool {
    note.created_at
        .is_some_and(|created| created >= ctx.now - Duration::days(RECENT_DAYS))
}

fn note_tagged(note: &Note, _: &QueryContext) -> bool {
    !note.tags.is_empty()
}

fn note_untagged(note: &Note, _: &QueryContext) -> bool {
    note.tags.is_empty()
}

impl NamedFilter for NoteFilter {
    type Record = Note;

    fn all() -> &'static [Self] {
        &[NoteFilter::Recent, NoteFilter::Tagged, NoteFilter::Untagged]
    }

    fn id(self) -> &'static str {
        match self {
            NoteFilter::Recent => "recent",
            NoteFilter::Tagged => "tagged",
            NoteFilter::Untagged => "untagged",
        }
    }

    fn label(self) -> &'static str {
        match self {
            NoteFilter::Recent => "Recent",
            NoteFilter::Tagged => "Tagged",
            NoteFilter::Untagged => "Untagged",
        }
    }

    fn predicate(self) -> Predicate<Note> {
        match self {
            NoteFilter::Recent => note_recent,
            NoteFilter::Tagged => note_tagged,
            NoteFilter::Untagged => note_untagged,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tasks
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskFilter {
    Pending,
    Completed,
    /// Not done and due before today.
    Overdue,
    /// Due today, done or not.
    Today,
}

fn task_pending(task: &Task, _: &QueryContext) -> bool {
    !task.done
}

fn task_completed(task: &Task, _: &QueryContext) -> bool {
    task.done
}

fn task_overdue(task: &Task, ctx: &QueryContext) -> bool {
    !task.done && task.due_date < ctx.today()
}

fn task_today(task: &Task, ctx: &QueryContext) -> bool {
    task.due_date == ctx.today()
}

impl NamedFilter for TaskFilter {
    type Record = Task;

    fn all() -> &'static [Self] {
        &[
            TaskFilter::Pending,
            TaskFilter::Completed,
            TaskFilter::Overdue,
            TaskFilter::Today,
        ]
    }

    fn id(self) -> &'static str {
        match self {
            TaskFilter::Pending => "pending",
            TaskFilter::Completed => "completed",
            TaskFilter::Overdue => "overdue",
            TaskFilter::Today => "today",
        }
    }

    fn label(self) -> &'static str {
        match self {
            TaskFilter::Pending => "Pending",
            TaskFilter::Completed => "Completed",
            TaskFilter::Overdue => "Overdue",
            TaskFilter::Today => "Due Today",
        }
    }

    fn predicate(self) -> Predicate<Task> {
        match self {
            TaskFilter::Pending => task_pending,
            TaskFilter::Completed => task_completed,
            TaskFilter::Overdue => task_overdue,
            TaskFilter::Today => task_today,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Goals
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoalFilter {
    InProgress,
    /// Progress exactly 100.
    Completed,
    NotStarted,
}

fn goal_in_progress(goal: &Goal, _: &QueryContext) -> bool {
    let p = goal.progress.get();
    p > 0 && p < 100
}

fn goal_completed(goal: &Goal, _: &QueryContext) -> bool {
    goal.progress.is_complete()
}

fn goal_not_started(goal: &Goal, _: &QueryContext) -> bool {
    goal.progress.get() == 0
}

impl NamedFilter for GoalFilter {
    type Record = Goal;

    fn all() -> &'static [Self] {
        &[
            GoalFilter::InProgress,
            GoalFilter::Completed,
            GoalFilter::NotStarted,
        ]
    }

    fn id(self) -> &'static str {
        match self {
            GoalFilter::InProgress => "in-progress",
            GoalFilter::Completed => "completed",
            GoalFilter::NotStarted => "not-started",
        }
    }

    fn label(self) -> &'static str {
        match self {
            GoalFilter::InProgress => "In Progress",
            GoalFilter::Completed => "Completed",
            GoalFilter::NotStarted => "Not Started",
        }
    }

    fn predicate(self) -> Predicate<Goal> {
        match self {
            GoalFilter::InProgress => goal_in_progress,
            GoalFilter::Completed => goal_completed,
            GoalFilter::NotStarted => goal_not_started,
        }
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
