// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Search, filter and sort pipeline for record collections.
//!
//! The pipeline is pure: it never mutates its input and always returns a
//! new, ordered vector. Stages run in a fixed order:
//!
//! ```text
//! items ──► search(query) ──► filter(FilterKind) ──► sort(SortKind) ──► view
//! ```
//!
//! # Filters
//!
//! - `all` - identity
//! - named predicates per kind (`pending`, `overdue`, `tagged`, `in-progress`, ...)
//! - `bg-*` - exact color match
//!
//! # Sorts
//!
//! `<field>-<asc|desc>` where field is one of `title`, `created`, `updated`,
//! `date`, `progress`, `status`. Unknown fields keep the input order.

mod filter;
mod options;
mod search;
mod sort;

use chrono::{DateTime, NaiveDate, Utc};

use crate::entity::{Goal, Note, Task};
use crate::record::Record;

pub use filter::{filter, FilterKind, GoalFilter, NamedFilter, NoteFilter, Predicate, TaskFilter};
pub use options::{filter_options, sort_options, FilterOption, SortOption, DEFAULT_FILTER, DEFAULT_SORT};
pub use search::{matches_query, search};
pub use sort::{sort, Direction, SortKey, SortKind};

/// Clock reading shared by the date-relative filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryContext {
    pub now: DateTime<Utc>,
}

impl QueryContext {
    /// Context pinned to the current system time.
    pub fn system() -> Self {
        QueryContext { now: Utc::now() }
    }

    /// Context pinned to a fixed instant (for deterministic views and tests).
    pub fn at(now: DateTime<Utc>) -> Self {
        QueryContext { now }
    }

    /// Today's date in UTC.
    pub fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }
}

impl Default for QueryContext {
    fn default() -> Self {
        QueryContext::system()
    }
}

/// A complete view specification for one collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Query<R: Record> {
    pub search: String,
    pub filter: FilterKind<R::Filter>,
    pub sort: SortKind,
}

impl<R: Record> Default for Query<R> {
    fn default() -> Self {
        Query {
            search: String::new(),
            filter: FilterKind::All,
            sort: SortKind::default(),
        }
    }
}

impl<R: Record> Query<R> {
    /// Runs the pipeline over `items`.
    pub fn apply(&self, items: &[R], ctx: &QueryContext) -> Vec<R> {
        apply(items, Some(&self.search), &self.filter, &self.sort, ctx)
    }

    /// True when the view shows the collection in its own order, unnarrowed.
    pub fn is_identity(&self) -> bool {
        self.search.trim().is_empty()
            && self.filter == FilterKind::All
            && self.sort == SortKind::Unsorted
    }
}

/// Search, then filter, then sort.
pub fn apply<R: Record>(
    items: &[R],
    query: Option<&str>,
    filter_kind: &FilterKind<R::Filter>,
    sort_kind: &SortKind,
    ctx: &QueryContext,
) -> Vec<R> {
    let searched = match query {
        Some(q) => search(items, q),
        None => items.to_vec(),
    };
    let filtered = filter(&searched, filter_kind, ctx);
    sort(&filtered, sort_kind)
}

/// Matches of one query across all three collections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResults {
    pub notes: Vec<Note>,
    pub todos: Vec<Task>,
    pub goals: Vec<Goal>,
}

impl SearchResults {
    /// Searches every collection. A blank query yields no results.
    pub fn collect(query: &str, notes: &[Note], todos: &[Task], goals: &[Goal]) -> Self {
        if query.trim().is_empty() {
            return SearchResults::default();
        }
        SearchResults {
            notes: search(notes, query),
            todos: search(todos, query),
            goals: search(goals, query),
        }
    }

    pub fn total(&self) -> usize {
        self.notes.len() + self.todos.len() + self.goals.len()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
