// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filter and sort menus for each record kind.

use serde::Serialize;

use super::filter::NamedFilter;
use super::{GoalFilter, NoteFilter, TaskFilter};
use crate::record::{Kind, COLORS};

pub const DEFAULT_FILTER: &str = "all";
pub const DEFAULT_SORT: &str = "created-desc";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub id: String,
    pub label: String,
    /// True for color filters.
    pub color: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortOption {
    pub id: &'static str,
    pub label: &'static str,
}

const COMMON_SORTS: [SortOption; 5] = [
    SortOption { id: "created-desc", label: "Newest First" },
    SortOption { id: "created-asc", label: "Oldest First" },
    SortOption { id: "title-asc", label: "Title A-Z" },
    SortOption { id: "title-desc", label: "Title Z-A" },
    SortOption { id: "updated-desc", label: "Recently Updated" },
];

const TASK_SORTS: [SortOption; 3] = [
    SortOption { id: "date-asc", label: "Due Date (Soon)" },
    SortOption { id: "date-desc", label: "Due Date (Later)" },
    SortOption { id: "status", label: "By Status" },
];

const GOAL_SORTS: [SortOption; 2] = [
    SortOption { id: "progress-desc", label: "Most Progress" },
    SortOption { id: "progress-asc", label: "Least Progress" },
];

fn named<F: NamedFilter>() -> impl Iterator<Item = FilterOption> {
    F::all().iter().map(|f| FilterOption {
        id: f.id().to_string(),
        label: f.label().to_string(),
        color: false,
    })
}

/// Filters offered for `kind`: `all`, the named filters, then one per color.
pub fn filter_options(kind: Kind) -> Vec<FilterOption> {
    let all_label = match kind {
        Kind::Notes => "All Notes",
        Kind::Todos => "All Tasks",
        Kind::Goals => "All Goals",
    };
    let mut options = vec![FilterOption {
        id: DEFAULT_FILTER.to_string(),
        label: all_label.to_string(),
        color: false,
    }];
    match kind {
        Kind::Notes => options.extend(named::<NoteFilter>()),
        Kind::Todos => options.extend(named::<TaskFilter>()),
        Kind::Goals => options.extend(named::<GoalFilter>()),
    }
    options.extend(COLORS.iter().map(|(name, value)| FilterOption {
        id: value.to_string(),
        label: name.to_string(),
        color: true,
    }));
    options
}

/// Sorts offered for `kind`: the common sorts, then kind-specific ones.
pub fn sort_options(kind: Kind) -> Vec<SortOption> {
    let mut options = COMMON_SORTS.to_vec();
    match kind {
        Kind::Notes => {}
        Kind::Todos => options.extend(TASK_SORTS),
        Kind::Goals => options.extend(GOAL_SORTS),
    }
    options
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
